//! Bean 注册表抽象接口

use ioc_common::Bean;

/// Bean 注册表 trait
///
/// 名称到实例的映射。名称一旦存在，后续查询总是返回同一个实例。
pub trait BeanRegistry: Send + Sync {
    /// 按名称获取 Bean
    fn get(&self, name: &str) -> Option<Bean>;

    /// 是否包含指定名称
    fn contains(&self, name: &str) -> bool;

    /// 注册 Bean，名称已存在时不覆盖并返回 `false`
    fn register(&mut self, name: String, bean: Bean) -> bool;

    /// 移除 Bean，仅用于回滚失败的解析
    fn remove(&mut self, name: &str) -> Option<Bean>;

    /// 所有 Bean 名称，按字典序
    fn names(&self) -> Vec<String>;

    /// Bean 数量
    fn len(&self) -> usize;

    /// 是否为空
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
