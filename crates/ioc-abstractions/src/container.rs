//! IoC 容器抽象接口
//!
//! 提供容器初始化和 Bean 获取的核心抽象

use ioc_common::{Bean, ContainerError, ContainerResult, ContainerState};
use std::any::Any;
use std::sync::Arc;

/// IoC 容器 trait
///
/// 所有修改注册表的操作都需要 `&mut self`，容器只在单线程内使用。
pub trait BeanContainer {
    /// 扫描命名空间并完成装配
    fn init(&mut self) -> ContainerResult<()>;

    /// 当前状态
    fn state(&self) -> ContainerState;

    /// 按名称获取 Bean，未创建时按需创建
    fn get_bean_by_name(&mut self, name: &str) -> ContainerResult<Bean>;

    /// 按类型获取 Bean，未创建时按需创建
    fn get_bean<T>(&mut self) -> ContainerResult<Arc<T>>
    where
        T: Any + Send + Sync,
        Self: Sized;

    /// 按名称获取 Bean 并转换为具体类型
    fn get_bean_by_name_as<T>(&mut self, name: &str) -> ContainerResult<Arc<T>>
    where
        T: Any + Send + Sync,
        Self: Sized,
    {
        self.get_bean_by_name(name)?
            .downcast::<T>()
            .map_err(|_| ContainerError::TypeMismatch {
                bean_name: name.to_string(),
                expected: std::any::type_name::<T>().to_string(),
            })
    }

    /// 注册表中是否已存在指定名称
    fn contains_bean(&self, name: &str) -> bool;

    /// 已创建的 Bean 名称，按字典序
    fn bean_names(&self) -> Vec<String>;
}

/// 容器统计信息
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContainerStats {
    /// 扫描到的组件数量
    pub scanned_components: usize,
    /// 注册表中的 Bean 数量
    pub registered_beans: usize,
    /// 通过构造器创建的实例数量
    pub constructions: usize,
    /// 工厂方法调用次数
    pub factory_invocations: usize,
    /// 解析失败后回滚的 Bean 数量
    pub rolled_back: usize,
}
