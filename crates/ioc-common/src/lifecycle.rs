//! 容器生命周期状态

use std::fmt;

/// 容器状态
///
/// 单向迁移：`Uninitialized` → `Ready`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ContainerState {
    /// 尚未完成初始化
    #[default]
    Uninitialized,
    /// 初始化完成，可以获取 Bean
    Ready,
}

impl ContainerState {
    /// 是否已就绪
    pub fn is_ready(self) -> bool {
        self == Self::Ready
    }
}

impl fmt::Display for ContainerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uninitialized => f.write_str("未初始化"),
            Self::Ready => f.write_str("就绪"),
        }
    }
}
