//! 依赖解析器抽象接口
//!
//! 提供依赖解析和 Bean 实例化的能力

use ioc_common::{Bean, ContainerConfig, ContainerError, ContainerResult, TypeInfo};

/// 依赖解析器 trait
///
/// 递归解析类型的构造器依赖，返回缓存的或新建的实例。
pub trait BeanResolver {
    /// 按类型解析 Bean
    fn resolve_type(&mut self, type_info: &TypeInfo) -> ContainerResult<Bean>;

    /// 按名称解析 Bean
    fn resolve_name(&mut self, name: &str) -> ContainerResult<Bean>;
}

/// 解析上下文
///
/// 记录正在解析中的 Bean 名称，用于检测循环依赖和限制递归深度。
#[derive(Debug, Clone)]
pub struct ResolveContext {
    /// 当前解析链
    resolution_chain: Vec<String>,
    /// 解析选项
    pub options: ResolveOptions,
}

impl ResolveContext {
    /// 创建新的解析上下文
    pub fn new(options: ResolveOptions) -> Self {
        Self {
            resolution_chain: Vec::new(),
            options,
        }
    }

    /// 将 Bean 名称加入解析链
    pub fn push(&mut self, bean_name: &str) -> ContainerResult<()> {
        if self.options.detect_cycles && self.resolution_chain.iter().any(|n| n == bean_name) {
            let mut chain = self.resolution_chain.clone();
            chain.push(bean_name.to_string());
            return Err(ContainerError::CircularDependency {
                dependency_chain: chain.join(" -> "),
            });
        }

        if self.resolution_chain.len() >= self.options.max_depth {
            return Err(ContainerError::ResolutionDepthExceeded {
                bean_name: bean_name.to_string(),
                max_depth: self.options.max_depth,
            });
        }

        self.resolution_chain.push(bean_name.to_string());
        Ok(())
    }

    /// 从解析链中移除最近加入的名称
    pub fn pop(&mut self) {
        self.resolution_chain.pop();
    }

    /// 当前解析深度
    pub fn depth(&self) -> usize {
        self.resolution_chain.len()
    }

    /// 当前解析链
    pub fn chain(&self) -> &[String] {
        &self.resolution_chain
    }
}

impl Default for ResolveContext {
    fn default() -> Self {
        Self::new(ResolveOptions::default())
    }
}

/// 解析选项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolveOptions {
    /// 是否检测循环依赖
    pub detect_cycles: bool,
    /// 最大递归深度
    pub max_depth: usize,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self::from(&ContainerConfig::default())
    }
}

impl From<&ContainerConfig> for ResolveOptions {
    fn from(config: &ContainerConfig) -> Self {
        Self {
            detect_cycles: config.enable_circular_dependency_detection,
            max_depth: config.max_resolution_depth,
        }
    }
}
