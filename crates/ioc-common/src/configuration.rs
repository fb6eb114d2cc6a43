//! 容器配置

use crate::errors::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

/// 容器配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerConfig {
    /// 是否启用循环依赖检测
    pub enable_circular_dependency_detection: bool,
    /// 最大解析深度
    pub max_resolution_depth: usize,
    /// 初始化时是否先处理配置类
    pub configurations_first: bool,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            enable_circular_dependency_detection: true,
            max_resolution_depth: 128,
            configurations_first: true,
        }
    }
}

impl ContainerConfig {
    /// 从 `config/ioc.*` 文件和 `IOC_` 前缀的环境变量加载配置
    pub fn load() -> ConfigResult<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("config/ioc").required(false))
            .add_source(config::Environment::with_prefix("IOC").try_parsing(true))
            .build()
            .map_err(|e| {
                error!("容器配置构建失败: {}", e);
                ConfigError::ParseError {
                    source: Box::new(e),
                }
            })?;

        let config: Self = settings
            .try_deserialize()
            .map_err(|e| ConfigError::ParseError {
                source: Box::new(e),
            })?;

        config.validate()?;
        debug!("容器配置加载完成: {:?}", config);
        Ok(config)
    }

    /// 从 TOML 文本解析配置
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(content).map_err(|e| ConfigError::ParseError {
            source: Box::new(e),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// 验证配置
    pub fn validate(&self) -> ConfigResult<()> {
        if self.max_resolution_depth == 0 {
            return Err(ConfigError::ValidationError {
                message: "max_resolution_depth 必须大于 0".to_string(),
            });
        }
        Ok(())
    }

    /// 设置是否启用循环依赖检测
    pub fn with_circular_dependency_detection(mut self, enabled: bool) -> Self {
        self.enable_circular_dependency_detection = enabled;
        self
    }

    /// 设置最大解析深度
    pub fn with_max_resolution_depth(mut self, depth: usize) -> Self {
        self.max_resolution_depth = depth;
        self
    }

    /// 设置是否先处理配置类
    pub fn with_configurations_first(mut self, enabled: bool) -> Self {
        self.configurations_first = enabled;
        self
    }
}
