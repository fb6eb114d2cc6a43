//! # IoC Abstractions
//!
//! IoC 容器抽象层，定义组件扫描、Bean 注册和依赖解析的核心接口。
//!
//! ## 核心接口
//!
//! - [`BeanContainer`] - 容器接口
//! - [`ComponentScanner`] - 组件扫描器接口
//! - [`BeanResolver`] - 依赖解析器接口
//! - [`ConfigurationProcessor`] - 配置类工厂方法处理接口
//! - [`BeanRegistry`] - Bean 注册表接口

pub mod container;
pub mod factory;
pub mod registry;
pub mod resolver;
pub mod scanner;

pub use container::*;
pub use factory::*;
pub use registry::*;
pub use resolver::*;
pub use scanner::*;
