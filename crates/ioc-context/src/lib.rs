//! # IoC 容器具体实现
//!
//! 提供应用上下文、依赖解析器、配置类工厂方法处理器、组件扫描器和 Bean 注册表的实现。
//!
//! ## 基本使用
//!
//! ```rust
//! use ioc_abstractions::BeanContainer;
//! use ioc_common::{ComponentCatalog, ComponentDescriptor, ConstructorDescriptor};
//! use ioc_context::ApplicationContext;
//! use std::sync::Arc;
//!
//! #[derive(Debug)]
//! pub struct Clock;
//!
//! let catalog = ComponentCatalog::new().with(
//!     ComponentDescriptor::component::<Clock>()
//!         .with_constructor(ConstructorDescriptor::new(Vec::new(), |_| Ok(Clock))),
//! );
//!
//! let mut context = ApplicationContext::with_catalog("", Arc::new(catalog));
//! context.init()?;
//! let clock = context.get_bean::<Clock>()?;
//! assert!(Arc::ptr_eq(&clock, &context.get_bean::<Clock>()?));
//! # Ok::<(), ioc_common::ContainerError>(())
//! ```

pub mod context;
pub mod factory;
pub mod registry;
pub mod resolver;
pub mod scanner;

pub use context::ApplicationContext;
pub use factory::FactoryMethodProcessor;
pub use registry::BeanRegistryImpl;
pub use resolver::Resolver;
pub use scanner::CatalogScanner;
