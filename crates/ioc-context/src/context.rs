//! 应用上下文
//!
//! 容器的顶层编排：扫描命名空间，处理配置类，解析其余组件，之后按名称或类型提供 Bean。

use crate::factory::FactoryMethodProcessor;
use crate::registry::BeanRegistryImpl;
use crate::resolver::Resolver;
use ioc_abstractions::{
    BeanContainer, BeanRegistry, BeanResolver, ComponentScanner, ConfigurationProcessor,
    ContainerStats, ResolveOptions,
};
use ioc_common::{
    bean_name_of, Bean, ComponentCatalog, ComponentDescriptor, ContainerConfig, ContainerError,
    ContainerResult, ContainerState, TypeInfo,
};
use std::any::Any;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, error, info};

/// 应用上下文
///
/// 独占持有 Bean 注册表和组件集合，多个上下文之间互不影响。
pub struct ApplicationContext {
    /// 扫描的根命名空间
    namespace: String,
    /// 已知类型的描述符目录
    catalog: Arc<ComponentCatalog>,
    /// 组件扫描器
    scanner: Box<dyn ComponentScanner>,
    /// 容器配置
    config: ContainerConfig,
    /// 扫描得到的组件集合
    components: Vec<Arc<ComponentDescriptor>>,
    /// Bean 注册表
    registry: BeanRegistryImpl,
    /// 统计信息
    stats: ContainerStats,
    /// 容器状态
    state: ContainerState,
}

impl ApplicationContext {
    /// 基于全局组件目录创建上下文
    pub fn new(namespace: impl Into<String>) -> Self {
        Self::with_catalog(namespace, ComponentCatalog::global())
    }

    /// 基于指定组件目录创建上下文
    pub fn with_catalog(namespace: impl Into<String>, catalog: Arc<ComponentCatalog>) -> Self {
        Self {
            namespace: namespace.into(),
            scanner: Box::new(crate::CatalogScanner::new(catalog.clone())),
            catalog,
            config: ContainerConfig::default(),
            components: Vec::new(),
            registry: BeanRegistryImpl::new(),
            stats: ContainerStats::default(),
            state: ContainerState::Uninitialized,
        }
    }

    /// 设置容器配置
    pub fn with_config(mut self, config: ContainerConfig) -> Self {
        self.config = config;
        self
    }

    /// 替换组件扫描器
    pub fn with_scanner(mut self, scanner: Box<dyn ComponentScanner>) -> Self {
        self.scanner = scanner;
        self
    }

    /// 扫描的根命名空间
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// 容器配置
    pub fn config(&self) -> &ContainerConfig {
        &self.config
    }

    /// 扫描得到的组件
    pub fn components(&self) -> &[Arc<ComponentDescriptor>] {
        &self.components
    }

    /// 统计信息
    pub fn stats(&self) -> ContainerStats {
        self.stats
    }

    /// 是否已就绪
    pub fn is_ready(&self) -> bool {
        self.state.is_ready()
    }

    /// 已创建的 Bean 数量
    pub fn bean_count(&self) -> usize {
        self.registry.len()
    }

    fn ensure_ready(&self) -> ContainerResult<()> {
        if self.state.is_ready() {
            Ok(())
        } else {
            Err(ContainerError::NotInitialized)
        }
    }

    /// 顶层按类型解析，失败时回滚本次注册的 Bean
    fn resolve_type(&mut self, type_info: &TypeInfo) -> ContainerResult<Bean> {
        let mut resolver = Resolver::new(
            &self.catalog,
            &self.components,
            &mut self.registry,
            &mut self.stats,
            ResolveOptions::from(&self.config),
        );

        let result = resolver.resolve_type(type_info);
        if result.is_err() {
            resolver.rollback();
        }
        result
    }

    /// 顶层按名称解析，失败时回滚本次注册的 Bean
    fn resolve_name(&mut self, name: &str) -> ContainerResult<Bean> {
        let mut resolver = Resolver::new(
            &self.catalog,
            &self.components,
            &mut self.registry,
            &mut self.stats,
            ResolveOptions::from(&self.config),
        );

        let result = resolver.resolve_name(name);
        if result.is_err() {
            resolver.rollback();
        }
        result
    }

    fn process_configuration(&mut self, descriptor: &ComponentDescriptor) -> ContainerResult<()> {
        let resolver = Resolver::new(
            &self.catalog,
            &self.components,
            &mut self.registry,
            &mut self.stats,
            ResolveOptions::from(&self.config),
        );

        FactoryMethodProcessor::new(resolver).process_configuration(descriptor)
    }

    /// 初始化时的处理顺序
    fn processing_order(&self) -> Vec<Arc<ComponentDescriptor>> {
        if !self.config.configurations_first {
            return self.components.clone();
        }

        let (mut ordered, components): (Vec<_>, Vec<_>) = self
            .components
            .iter()
            .cloned()
            .partition(|d| d.is_configuration());
        ordered.extend(components);
        ordered
    }
}

impl BeanContainer for ApplicationContext {
    fn init(&mut self) -> ContainerResult<()> {
        if self.state.is_ready() {
            return Err(ContainerError::AlreadyInitialized);
        }

        info!(
            "初始化容器, 命名空间: '{}', 扫描器: {}",
            self.namespace,
            self.scanner.name()
        );
        self.components = self.scanner.scan(&self.namespace)?;
        self.stats.scanned_components = self.components.len();
        info!("扫描到 {} 个组件", self.components.len());

        for descriptor in self.processing_order() {
            if descriptor.is_interface() {
                continue;
            }

            let result = if descriptor.is_configuration() {
                self.process_configuration(&descriptor)
            } else {
                self.resolve_type(&descriptor.type_info).map(|_| ())
            };

            if let Err(e) = result {
                error!("容器初始化失败: {}", e);
                return Err(e);
            }
        }

        self.state = ContainerState::Ready;
        info!("容器初始化完成, 共 {} 个 Bean", self.registry.len());
        Ok(())
    }

    fn state(&self) -> ContainerState {
        self.state
    }

    fn get_bean_by_name(&mut self, name: &str) -> ContainerResult<Bean> {
        self.ensure_ready()?;
        debug!("按名称获取 Bean: {}", name);
        self.resolve_name(name)
    }

    fn get_bean<T>(&mut self) -> ContainerResult<Arc<T>>
    where
        T: Any + Send + Sync,
    {
        self.ensure_ready()?;
        let type_info = TypeInfo::of::<T>();
        debug!("按类型获取 Bean: {}", type_info);

        self.resolve_type(&type_info)?
            .downcast::<T>()
            .map_err(|_| ContainerError::TypeMismatch {
                bean_name: bean_name_of(&type_info),
                expected: type_info.module_path.clone(),
            })
    }

    fn contains_bean(&self, name: &str) -> bool {
        self.registry.contains(name)
    }

    fn bean_names(&self) -> Vec<String> {
        self.registry.names()
    }
}

impl fmt::Debug for ApplicationContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApplicationContext")
            .field("namespace", &self.namespace)
            .field("scanner", &self.scanner.name())
            .field("config", &self.config)
            .field("components", &self.components.len())
            .field("registry", &self.registry)
            .field("state", &self.state)
            .finish()
    }
}
