//! 配置类工厂方法处理器

use crate::resolver::Resolver;
use ioc_abstractions::{BeanResolver, ConfigurationProcessor};
use ioc_common::{BeanArgs, BoxError, ComponentDescriptor, ContainerError, ContainerResult};
use tracing::{debug, warn};

/// 工厂方法处理器
///
/// 通过无参构造器实例化配置类，再依次调用其 Bean 工厂方法。
/// 方法参数由解析器满足，产出的 Bean 以方法名推导的名称注册。
pub struct FactoryMethodProcessor<'a> {
    resolver: Resolver<'a>,
}

impl<'a> FactoryMethodProcessor<'a> {
    /// 创建处理器
    pub fn new(resolver: Resolver<'a>) -> Self {
        Self { resolver }
    }

    fn process(&mut self, descriptor: &ComponentDescriptor) -> Result<(), BoxError> {
        let constructor = descriptor
            .constructors
            .iter()
            .find(|c| c.parameter_types.is_empty())
            .ok_or_else(|| ContainerError::NoConstructor {
                type_name: descriptor.type_info.module_path.clone(),
            })?;
        let instance = constructor.invoke(BeanArgs::empty())?;

        for method in &descriptor.factory_methods {
            let bean_name = method.bean_name();
            if self.resolver.contains_bean(&bean_name) {
                warn!(
                    "Bean '{}' 已存在，跳过工厂方法 {}::{}",
                    bean_name,
                    descriptor.type_info.short_name(),
                    method.method_name
                );
                continue;
            }

            let mut dependencies = Vec::with_capacity(method.parameter_types.len());
            for parameter_type in &method.parameter_types {
                dependencies.push(self.resolver.resolve_type(parameter_type)?);
            }

            let bean = method.invoke(&instance, BeanArgs::new(dependencies))?;
            self.resolver.record_factory_invocation();
            debug!("工厂方法产出 Bean: {} ({})", bean_name, method.return_type);

            self.resolver.register(bean_name, bean);
        }

        Ok(())
    }
}

impl ConfigurationProcessor for FactoryMethodProcessor<'_> {
    fn process_configuration(&mut self, descriptor: &ComponentDescriptor) -> ContainerResult<()> {
        debug!("处理配置类: {}", descriptor.type_info);

        self.process(descriptor).map_err(|source| {
            self.resolver.rollback();
            ContainerError::configuration(descriptor.type_info.short_name(), source)
        })
    }
}
