//! 配置类处理抽象接口

use ioc_common::{ComponentDescriptor, ContainerResult};

/// 配置类处理器 trait
///
/// 实例化配置类并调用其中的工厂方法，每个方法产出一个命名 Bean。
pub trait ConfigurationProcessor {
    /// 处理一个配置类
    fn process_configuration(&mut self, descriptor: &ComponentDescriptor) -> ContainerResult<()>;
}
