//! 组件扫描器抽象接口
//!
//! 提供在命名空间下发现组件的能力

use ioc_common::{ComponentDescriptor, ContainerResult};
use std::sync::Arc;

/// 组件扫描器 trait
///
/// 返回命名空间下所有带组件标记的描述符，不包含 trait 标记。
pub trait ComponentScanner: Send + Sync {
    /// 扫描命名空间中的组件
    fn scan(&self, namespace: &str) -> ContainerResult<Vec<Arc<ComponentDescriptor>>>;

    /// 获取扫描器名称
    fn name(&self) -> &str;
}
