//! 过程宏与应用上下文的端到端测试
//!
//! 所有组件注册在同一个全局目录中，每个模块使用自己的命名空间隔离。

use ioc_abstractions::BeanContainer;
use ioc_common::{ContainerConfig, ContainerError, ContainerState};
use ioc_context::ApplicationContext;
use std::sync::Arc;

mod shop {
    use ioc_macros::{component, configuration, injectable};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    pub static DATA_SOURCE_CALLS: AtomicUsize = AtomicUsize::new(0);

    #[derive(Debug)]
    pub struct DataSource {
        pub url: String,
    }

    #[derive(Debug)]
    pub struct Cache {
        pub data_source: Arc<DataSource>,
    }

    #[derive(Debug, Default)]
    pub struct PersistenceConfig;

    #[configuration]
    impl PersistenceConfig {
        #[bean]
        fn data_source(&self) -> DataSource {
            DATA_SOURCE_CALLS.fetch_add(1, Ordering::SeqCst);
            DataSource {
                url: "mem://shop".to_string(),
            }
        }

        #[bean]
        fn cache(&self, data_source: Arc<DataSource>) -> Cache {
            Cache { data_source }
        }
    }

    #[derive(Debug)]
    #[injectable]
    pub struct Clock;

    #[derive(Debug)]
    #[component]
    pub struct OrderRepository {
        pub data_source: Arc<DataSource>,
    }

    #[derive(Debug)]
    #[component]
    pub struct OrderService {
        pub repository: Arc<OrderRepository>,
        pub clock: Arc<Clock>,
        pub retries: u32,
    }

    #[component]
    pub trait PaymentGateway {}
}

mod circular {
    use ioc_macros::component;
    use std::sync::Arc;

    #[derive(Debug)]
    #[component]
    pub struct Left {
        pub right: Arc<Right>,
    }

    #[derive(Debug)]
    #[component]
    pub struct Right {
        pub left: Arc<Left>,
    }
}

mod partial {
    use ioc_macros::configuration;

    #[derive(Debug)]
    pub struct Metrics;

    #[derive(Debug)]
    pub struct Mailer;

    #[derive(Debug, thiserror::Error)]
    #[error("SMTP 服务不可达")]
    pub struct SmtpUnreachable;

    #[derive(Debug, Default)]
    pub struct AlphaConfig;

    #[configuration]
    impl AlphaConfig {
        #[bean]
        fn metrics(&self) -> Metrics {
            Metrics
        }
    }

    #[derive(Debug, Default)]
    pub struct BetaConfig;

    #[configuration]
    impl BetaConfig {
        #[bean]
        fn mailer(&self) -> Result<Mailer, SmtpUnreachable> {
            Err(SmtpUnreachable)
        }
    }
}

fn shop_context() -> anyhow::Result<ApplicationContext> {
    let mut context = ApplicationContext::new(module_path!().to_string() + "::shop");
    context.init()?;
    Ok(context)
}

#[test]
fn test_scan_wires_namespace() -> anyhow::Result<()> {
    let context = shop_context()?;

    assert!(context.is_ready());
    // 接口不参与扫描，普通类型作为依赖创建
    assert_eq!(
        context.bean_names(),
        vec!["cache", "clock", "dataSource", "orderRepository", "orderService"]
    );
    assert_eq!(context.stats().scanned_components, 3);
    Ok(())
}

#[test]
fn test_factory_and_component_share_singletons() -> anyhow::Result<()> {
    let mut context = shop_context()?;

    let service = context.get_bean::<shop::OrderService>()?;
    let cache = context.get_bean_by_name_as::<shop::Cache>("cache")?;
    let data_source = context.get_bean::<shop::DataSource>()?;

    assert!(Arc::ptr_eq(&service.repository.data_source, &data_source));
    assert!(Arc::ptr_eq(&cache.data_source, &data_source));
    assert_eq!(data_source.url, "mem://shop");
    assert_eq!(service.retries, 0);
    assert!(Arc::ptr_eq(&service.clock, &context.get_bean::<shop::Clock>()?));
    Ok(())
}

#[test]
fn test_contexts_are_independent() -> anyhow::Result<()> {
    let before = shop::DATA_SOURCE_CALLS.load(std::sync::atomic::Ordering::SeqCst);
    let mut first = shop_context()?;
    let mut second = shop_context()?;
    let after = shop::DATA_SOURCE_CALLS.load(std::sync::atomic::Ordering::SeqCst);

    // 测试并行运行，其他测试也可能创建上下文
    assert!(after - before >= 2);
    assert!(!Arc::ptr_eq(
        &first.get_bean::<shop::OrderService>()?,
        &second.get_bean::<shop::OrderService>()?
    ));
    Ok(())
}

#[test]
fn test_name_lookup_misses() -> anyhow::Result<()> {
    let mut context = shop_context()?;

    assert!(matches!(
        context.get_bean_by_name("paymentGateway"),
        Err(ContainerError::BeanNotFound { .. })
    ));
    assert!(matches!(
        context.get_bean_by_name("persistenceConfig"),
        Err(ContainerError::BeanNotFound { .. })
    ));
    Ok(())
}

#[test]
fn test_namespace_prefix_is_segment_wise() -> anyhow::Result<()> {
    let mut context = ApplicationContext::new(module_path!().to_string() + "::sho");
    context.init()?;
    assert_eq!(context.bean_count(), 0);
    assert!(context.components().is_empty());
    Ok(())
}

#[test]
fn test_circular_components_fail_init() {
    let mut context = ApplicationContext::new(module_path!().to_string() + "::circular");
    let err = context.init().unwrap_err();

    assert!(matches!(err, ContainerError::BeanCreation { .. }));
    assert!(matches!(
        err.root_cause().downcast_ref::<ContainerError>(),
        Some(ContainerError::CircularDependency { dependency_chain })
            if dependency_chain == "left -> right -> left"
    ));
    assert_eq!(context.state(), ContainerState::Uninitialized);
    assert_eq!(context.bean_count(), 0);
}

#[test]
fn test_circular_components_without_detection() {
    let config = ContainerConfig::default()
        .with_circular_dependency_detection(false)
        .with_max_resolution_depth(16);
    let mut context =
        ApplicationContext::new(module_path!().to_string() + "::circular").with_config(config);
    let err = context.init().unwrap_err();

    assert!(matches!(
        err.root_cause().downcast_ref::<ContainerError>(),
        Some(ContainerError::ResolutionDepthExceeded { max_depth: 16, .. })
    ));
}

#[test]
fn test_failed_configuration_keeps_earlier_classes() {
    let mut context = ApplicationContext::new(module_path!().to_string() + "::partial");
    let err = context.init().unwrap_err();

    match &err {
        ContainerError::Configuration { class_name, .. } => assert_eq!(class_name, "BetaConfig"),
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(err.find_cause::<partial::SmtpUnreachable>().is_some());

    assert!(context.contains_bean("metrics"));
    assert!(!context.contains_bean("mailer"));
    assert!(!context.is_ready());
}
