//! 组件目录
//!
//! 目录保存所有已知类型的描述符，是容器解析任意类型的依据。
//! 全局目录在程序启动时由过程宏生成的注册函数填充。

use crate::component::ComponentDescriptor;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::any::TypeId;
use std::sync::Arc;
use tracing::warn;

/// 全局组件目录
static GLOBAL_COMPONENT_CATALOG: Lazy<RwLock<ComponentCatalog>> =
    Lazy::new(|| RwLock::new(ComponentCatalog::new()));

/// 组件目录
#[derive(Debug, Clone, Default)]
pub struct ComponentCatalog {
    descriptors: Vec<Arc<ComponentDescriptor>>,
}

impl ComponentCatalog {
    /// 创建空目录
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册描述符
    ///
    /// 同一类型重复注册时保留先注册的描述符。
    pub fn register(&mut self, descriptor: ComponentDescriptor) {
        if self.find(descriptor.type_info.id).is_some() {
            warn!("组件描述符重复注册，忽略: {}", descriptor.type_info);
            return;
        }
        self.descriptors.push(Arc::new(descriptor));
    }

    /// 链式注册
    pub fn with(mut self, descriptor: ComponentDescriptor) -> Self {
        self.register(descriptor);
        self
    }

    /// 按类型查找描述符
    pub fn find(&self, type_id: TypeId) -> Option<&Arc<ComponentDescriptor>> {
        self.descriptors.iter().find(|d| d.type_info.id == type_id)
    }

    /// 所有描述符，按注册顺序
    pub fn descriptors(&self) -> &[Arc<ComponentDescriptor>] {
        &self.descriptors
    }

    /// 描述符数量
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// 全局目录的快照
    pub fn global() -> Arc<Self> {
        Arc::new(GLOBAL_COMPONENT_CATALOG.read().clone())
    }
}

/// 向全局目录注册组件描述符
pub fn register_component_descriptor(descriptor: ComponentDescriptor) {
    GLOBAL_COMPONENT_CATALOG.write().register(descriptor);
}

/// 判断模块路径是否位于命名空间之下
///
/// 按 `::` 分段做前缀匹配，空命名空间匹配所有路径。
pub fn namespace_matches(namespace: &str, path: &str) -> bool {
    let namespace = namespace.trim_end_matches("::");
    if namespace.is_empty() {
        return true;
    }

    match path.strip_prefix(namespace) {
        Some(rest) => rest.is_empty() || rest.starts_with("::"),
        None => false,
    }
}
