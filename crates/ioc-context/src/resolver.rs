//! 依赖解析器实现
//!
//! 深度优先、按参数声明顺序递归解析构造器依赖。
//! 每个 Bean 名称最多构造一次，注册表命中即返回缓存实例。

use ioc_abstractions::{BeanRegistry, BeanResolver, ContainerStats, ResolveContext, ResolveOptions};
use ioc_common::{
    bean_name_of, Bean, BeanArgs, BoxError, ComponentCatalog, ComponentDescriptor, ContainerError,
    ContainerResult, TypeInfo,
};
use std::sync::Arc;
use tracing::debug;

/// 依赖解析器
///
/// 借用容器持有的目录、组件集合和注册表完成一次顶层解析。
/// 解析过程中新注册的 Bean 会被记录，失败时可以整体回滚。
pub struct Resolver<'a> {
    catalog: &'a ComponentCatalog,
    components: &'a [Arc<ComponentDescriptor>],
    registry: &'a mut dyn BeanRegistry,
    stats: &'a mut ContainerStats,
    context: ResolveContext,
    registered: Vec<String>,
}

impl<'a> Resolver<'a> {
    /// 创建解析器
    pub fn new(
        catalog: &'a ComponentCatalog,
        components: &'a [Arc<ComponentDescriptor>],
        registry: &'a mut dyn BeanRegistry,
        stats: &'a mut ContainerStats,
        options: ResolveOptions,
    ) -> Self {
        Self {
            catalog,
            components,
            registry,
            stats,
            context: ResolveContext::new(options),
            registered: Vec::new(),
        }
    }

    /// 注册表中是否已存在指定名称
    pub fn contains_bean(&self, name: &str) -> bool {
        self.registry.contains(name)
    }

    /// 注册 Bean 并记录，用于失败时回滚
    pub fn register(&mut self, name: String, bean: Bean) {
        if self.registry.register(name.clone(), bean) {
            self.registered.push(name);
            self.stats.registered_beans = self.registry.len();
        }
    }

    /// 记录一次工厂方法调用
    pub fn record_factory_invocation(&mut self) {
        self.stats.factory_invocations += 1;
    }

    /// 本次解析中新注册的 Bean 名称
    pub fn registered(&self) -> &[String] {
        &self.registered
    }

    /// 移除本次解析中注册的所有 Bean
    pub fn rollback(&mut self) {
        for name in self.registered.drain(..).rev() {
            debug!("回滚 Bean: {}", name);
            self.registry.remove(&name);
            self.stats.rolled_back += 1;
        }
        self.stats.registered_beans = self.registry.len();
    }

    /// 实例化类型并注册
    fn create_bean(&mut self, bean_name: &str, type_info: &TypeInfo) -> Result<Bean, BoxError> {
        let descriptor = self
            .catalog
            .find(type_info.id)
            .cloned()
            .ok_or_else(|| ContainerError::DescriptorNotFound {
                type_name: type_info.module_path.clone(),
            })?;

        let constructor = descriptor
            .select_constructor()
            .ok_or_else(|| ContainerError::NoConstructor {
                type_name: type_info.module_path.clone(),
            })?;

        let mut dependencies = Vec::with_capacity(constructor.parameter_types.len());
        for parameter_type in &constructor.parameter_types {
            dependencies.push(self.resolve_type(parameter_type)?);
        }

        let bean = constructor.invoke(BeanArgs::new(dependencies))?;
        self.stats.constructions += 1;
        debug!("创建 Bean: {} ({})", bean_name, type_info);

        self.register(bean_name.to_string(), bean.clone());
        Ok(bean)
    }
}

impl BeanResolver for Resolver<'_> {
    fn resolve_type(&mut self, type_info: &TypeInfo) -> ContainerResult<Bean> {
        let bean_name = bean_name_of(type_info);
        if let Some(bean) = self.registry.get(&bean_name) {
            debug!("命中缓存: {}", bean_name);
            return Ok(bean);
        }

        self.context.push(&bean_name)?;
        let result = self.create_bean(&bean_name, type_info);
        self.context.pop();

        result.map_err(|source| {
            ContainerError::bean_creation(&bean_name, type_info.module_path.clone(), source)
        })
    }

    fn resolve_name(&mut self, name: &str) -> ContainerResult<Bean> {
        if let Some(bean) = self.registry.get(name) {
            return Ok(bean);
        }

        // 配置类实例从不注册为 Bean
        let descriptor = self
            .components
            .iter()
            .filter(|d| !d.is_configuration())
            .find(|d| d.bean_name() == name)
            .cloned()
            .ok_or_else(|| ContainerError::bean_not_found(name))?;

        self.resolve_type(&descriptor.type_info)
    }
}
