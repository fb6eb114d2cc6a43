//! 基于组件目录的扫描器

use ioc_abstractions::ComponentScanner;
use ioc_common::{
    namespace_matches, ComponentCatalog, ComponentDescriptor, ComponentKind, ContainerError,
    ContainerResult,
};
use std::sync::Arc;
use tracing::debug;

/// 组件目录扫描器
///
/// 返回命名空间下种类为组件或配置类的描述符，按完整类型路径排序。
#[derive(Debug, Clone)]
pub struct CatalogScanner {
    catalog: Arc<ComponentCatalog>,
}

impl CatalogScanner {
    /// 创建扫描器
    pub fn new(catalog: Arc<ComponentCatalog>) -> Self {
        Self { catalog }
    }
}

/// 校验命名空间，每个 `::` 分段必须是合法标识符
fn validate_namespace(namespace: &str) -> ContainerResult<()> {
    let trimmed = namespace.trim_end_matches("::");
    if trimmed.is_empty() {
        return Ok(());
    }

    let valid = trimmed.split("::").all(|segment| {
        let mut chars = segment.chars();
        match chars.next() {
            Some(first) if first.is_alphabetic() || first == '_' => {
                chars.all(|c| c.is_alphanumeric() || c == '_')
            }
            _ => false,
        }
    });

    if valid {
        Ok(())
    } else {
        Err(ContainerError::scan_error(format!("无效的命名空间: '{}'", namespace)))
    }
}

impl ComponentScanner for CatalogScanner {
    fn scan(&self, namespace: &str) -> ContainerResult<Vec<Arc<ComponentDescriptor>>> {
        validate_namespace(namespace)?;

        let mut found: Vec<Arc<ComponentDescriptor>> = self
            .catalog
            .descriptors()
            .iter()
            .filter(|d| {
                matches!(
                    d.kind,
                    ComponentKind::Component | ComponentKind::Configuration
                )
            })
            .filter(|d| namespace_matches(namespace, d.type_info.namespace()))
            .cloned()
            .collect();

        found.sort_by(|a, b| a.type_info.module_path.cmp(&b.type_info.module_path));
        debug!("命名空间 '{}' 扫描到 {} 个组件", namespace, found.len());
        Ok(found)
    }

    fn name(&self) -> &str {
        "CatalogScanner"
    }
}
