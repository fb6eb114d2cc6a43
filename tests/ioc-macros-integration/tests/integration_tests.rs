//! 过程宏生成描述符的集成测试

use ioc_common::{
    Bean, BeanArgs, ComponentCatalog, ComponentDescriptor, ComponentKind, ContainerError, TypeInfo,
};
use ioc_macros::{component, configuration, injectable};
use std::any::TypeId;
use std::sync::Arc;

#[derive(Debug)]
#[injectable]
pub struct Clock;

#[derive(Debug)]
#[component]
pub struct OrderRepository {
    clock: Arc<Clock>,
    table: String,
}

#[derive(Debug)]
#[component]
pub struct OrderService {
    repository: Arc<OrderRepository>,
    clock: Arc<Clock>,
    retries: u32,
}

#[derive(Debug)]
#[component]
pub struct Audit(Arc<Clock>, Vec<String>);

#[component]
pub trait Notifier {}

#[derive(Debug)]
pub struct Pool {
    size: usize,
}

#[derive(Debug)]
pub struct Gateway {
    pool: Arc<Pool>,
}

#[derive(Debug, thiserror::Error)]
#[error("网关不可用")]
pub struct GatewayError;

#[derive(Debug, Default)]
pub struct NetworkConfig {
    gateway_fails: bool,
}

#[configuration]
impl NetworkConfig {
    #[bean]
    fn pool(&self) -> Pool {
        Pool { size: 8 }
    }

    #[bean]
    fn primary_gateway(&self, pool: Arc<Pool>) -> Result<Gateway, GatewayError> {
        if self.gateway_fails {
            return Err(GatewayError);
        }
        Ok(Gateway { pool })
    }

    fn helper(&self) -> usize {
        42
    }
}

fn descriptor_of<T: ?Sized + 'static>() -> Arc<ComponentDescriptor> {
    ComponentCatalog::global()
        .find(TypeId::of::<T>())
        .cloned()
        .expect("描述符未注册")
}

fn names(types: &[TypeInfo]) -> Vec<&str> {
    types.iter().map(|t| t.name.as_str()).collect()
}

#[test]
fn test_struct_component_descriptor() {
    let descriptor = descriptor_of::<OrderService>();

    assert_eq!(descriptor.kind, ComponentKind::Component);
    assert_eq!(descriptor.bean_name(), "orderService");
    assert_eq!(descriptor.constructors.len(), 1);

    let constructor = &descriptor.constructors[0];
    assert!(constructor.required_args);
    assert_eq!(names(&constructor.parameter_types), vec!["OrderRepository", "Clock"]);
}

#[test]
fn test_generated_constructor_injects_arc_fields() {
    let clock = Arc::new(Clock);
    let repository = Arc::new(OrderRepository {
        clock: clock.clone(),
        table: "orders".to_string(),
    });
    let args = BeanArgs::new(vec![repository.clone() as Bean, clock.clone() as Bean]);

    let bean = descriptor_of::<OrderService>().constructors[0].invoke(args).unwrap();
    let service = bean.downcast::<OrderService>().unwrap();

    assert!(Arc::ptr_eq(&service.repository, &repository));
    assert!(Arc::ptr_eq(&service.clock, &clock));
    assert_eq!(service.retries, 0);
    assert_eq!(service.repository.table, "orders");
    assert!(Arc::ptr_eq(&service.repository.clock, &clock));
}

#[test]
fn test_generated_constructor_reports_missing_argument() {
    let err = descriptor_of::<OrderRepository>().constructors[0]
        .invoke(BeanArgs::empty())
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ContainerError>(),
        Some(ContainerError::MissingArgument { index: 0, .. })
    ));
}

#[test]
fn test_tuple_struct_component() {
    let descriptor = descriptor_of::<Audit>();
    assert_eq!(names(&descriptor.constructors[0].parameter_types), vec!["Clock"]);

    let bean = descriptor.constructors[0]
        .invoke(BeanArgs::new(vec![Arc::new(Clock) as Bean]))
        .unwrap();
    let audit = bean.downcast::<Audit>().unwrap();
    assert!(audit.1.is_empty());
    let _ = &audit.0;
}

#[test]
fn test_injectable_is_plain() {
    let descriptor = descriptor_of::<Clock>();
    assert_eq!(descriptor.kind, ComponentKind::Plain);
    assert!(descriptor.constructors[0].parameter_types.is_empty());
}

#[test]
fn test_trait_component_is_interface() {
    let descriptor = descriptor_of::<dyn Notifier>();
    assert_eq!(descriptor.kind, ComponentKind::Interface);
    assert!(descriptor.is_interface());
    assert!(descriptor.constructors.is_empty());
    assert_eq!(descriptor.type_info.name, "Notifier");
}

#[test]
fn test_configuration_descriptor() {
    let descriptor = descriptor_of::<NetworkConfig>();

    assert_eq!(descriptor.kind, ComponentKind::Configuration);
    let methods: Vec<_> = descriptor
        .factory_methods
        .iter()
        .map(|m| (m.method_name.as_str(), m.bean_name(), m.return_type.name.as_str()))
        .collect();
    assert_eq!(
        methods,
        vec![
            ("pool", "pool".to_string(), "Pool"),
            ("primary_gateway", "primaryGateway".to_string(), "Gateway"),
        ]
    );
    assert_eq!(names(&descriptor.factory_methods[1].parameter_types), vec!["Pool"]);

    // 原方法仍可直接调用
    let config = NetworkConfig::default();
    assert_eq!(config.helper(), 42);
    assert_eq!(config.pool().size, 8);
}

#[test]
fn test_factory_method_invocation() {
    let descriptor = descriptor_of::<NetworkConfig>();
    let config: Bean = Arc::new(NetworkConfig::default());
    let pool: Bean = Arc::new(Pool { size: 3 });

    let gateway = descriptor.factory_methods[1]
        .invoke(&config, BeanArgs::new(vec![pool.clone()]))
        .unwrap()
        .downcast::<Gateway>()
        .unwrap();
    assert_eq!(gateway.pool.size, 3);
}

#[test]
fn test_factory_method_error_is_boxed() {
    let descriptor = descriptor_of::<NetworkConfig>();
    let config: Bean = Arc::new(NetworkConfig { gateway_fails: true });

    let err = descriptor.factory_methods[1]
        .invoke(&config, BeanArgs::new(vec![Arc::new(Pool { size: 1 }) as Bean]))
        .unwrap_err();
    assert!(err.downcast_ref::<GatewayError>().is_some());
}

#[test]
fn test_configuration_constructor_uses_default() {
    let descriptor = descriptor_of::<NetworkConfig>();
    let instance = descriptor.constructors[0]
        .invoke(BeanArgs::empty())
        .unwrap()
        .downcast::<NetworkConfig>()
        .unwrap();
    assert!(!instance.gateway_fails);
}
