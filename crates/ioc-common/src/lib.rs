//! # IoC Common
//!
//! 这个 crate 提供了 IoC 容器各层共用的类型
//!
//! ## 核心组件
//!
//! - [`ComponentDescriptor`] - 组件的声明式描述符
//! - [`ComponentCatalog`] - 已知类型的描述符目录
//! - [`TypeInfo`] - 类型元数据
//! - [`bean_name`] - Bean 命名约定
//! - [`ContainerError`] - 容器错误类型
//! - [`ContainerConfig`] - 容器配置

pub mod catalog;
pub mod component;
pub mod configuration;
pub mod errors;
pub mod lifecycle;
pub mod metadata;
pub mod naming;

pub use catalog::*;
pub use component::*;
pub use configuration::*;
pub use errors::*;
pub use lifecycle::*;
pub use metadata::*;
pub use naming::*;

/// 过程宏生成代码使用的依赖，不属于公开 API
#[doc(hidden)]
pub mod __private {
    pub use ctor::ctor;
}
