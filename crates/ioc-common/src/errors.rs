//! 错误类型定义

use std::error::Error as StdError;
use thiserror::Error;

/// 装箱的底层错误
pub type BoxError = Box<dyn StdError + Send + Sync>;

/// 容器错误类型
#[derive(Error, Debug)]
pub enum ContainerError {
    #[error("Bean 创建失败: '{bean_name}' ({type_name})")]
    BeanCreation {
        bean_name: String,
        type_name: String,
        source: BoxError,
    },

    #[error("Bean 未找到: '{bean_name}'")]
    BeanNotFound { bean_name: String },

    #[error("配置类 '{class_name}' 的 @Bean 方法处理失败")]
    Configuration { class_name: String, source: BoxError },

    #[error("检测到循环依赖: {dependency_chain}")]
    CircularDependency { dependency_chain: String },

    #[error("解析深度超出限制: '{bean_name}' 超过 {max_depth} 层")]
    ResolutionDepthExceeded { bean_name: String, max_depth: usize },

    #[error("类型没有组件描述符: {type_name}")]
    DescriptorNotFound { type_name: String },

    #[error("类型没有可用的构造器: {type_name}")]
    NoConstructor { type_name: String },

    #[error("Bean 类型不匹配: '{bean_name}', 期望 {expected}")]
    TypeMismatch { bean_name: String, expected: String },

    #[error("缺少第 {index} 个参数, 期望 {expected}")]
    MissingArgument { index: usize, expected: String },

    #[error("容器尚未初始化")]
    NotInitialized,

    #[error("容器已经初始化")]
    AlreadyInitialized,

    #[error("组件扫描失败: {message}")]
    Scan { message: String },
}

impl ContainerError {
    /// 创建 Bean 创建错误
    pub fn bean_creation(
        bean_name: impl Into<String>,
        type_name: impl Into<String>,
        source: impl Into<BoxError>,
    ) -> Self {
        Self::BeanCreation {
            bean_name: bean_name.into(),
            type_name: type_name.into(),
            source: source.into(),
        }
    }

    /// 创建配置类处理错误
    pub fn configuration(class_name: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::Configuration {
            class_name: class_name.into(),
            source: source.into(),
        }
    }

    /// 创建 Bean 未找到错误
    pub fn bean_not_found(bean_name: impl Into<String>) -> Self {
        Self::BeanNotFound {
            bean_name: bean_name.into(),
        }
    }

    /// 创建扫描错误
    pub fn scan_error(message: impl Into<String>) -> Self {
        Self::Scan {
            message: message.into(),
        }
    }

    /// 沿 `source()` 链找到最底层的错误
    pub fn root_cause(&self) -> &(dyn StdError + 'static) {
        let mut current: &(dyn StdError + 'static) = self;
        while let Some(next) = current.source() {
            current = next;
        }
        current
    }

    /// 在错误链中查找指定类型的错误
    pub fn find_cause<E: StdError + 'static>(&self) -> Option<&E> {
        let mut current: Option<&(dyn StdError + 'static)> = Some(self);
        while let Some(err) = current {
            if let Some(found) = err.downcast_ref::<E>() {
                return Some(found);
            }
            current = err.source();
        }
        None
    }
}

/// 配置错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置解析失败: {source}")]
    ParseError { source: BoxError },

    #[error("配置验证失败: {message}")]
    ValidationError { message: String },
}

/// 结果类型别名
pub type ContainerResult<T> = Result<T, ContainerError>;
pub type ConfigResult<T> = Result<T, ConfigError>;
