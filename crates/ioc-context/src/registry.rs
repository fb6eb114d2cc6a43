//! Bean 注册表实现

use ioc_abstractions::BeanRegistry;
use ioc_common::Bean;
use std::collections::HashMap;
use std::fmt;

/// 基于 `HashMap` 的 Bean 注册表
#[derive(Default, Clone)]
pub struct BeanRegistryImpl {
    beans: HashMap<String, Bean>,
}

impl BeanRegistryImpl {
    /// 创建空注册表
    pub fn new() -> Self {
        Self::default()
    }
}

impl BeanRegistry for BeanRegistryImpl {
    fn get(&self, name: &str) -> Option<Bean> {
        self.beans.get(name).cloned()
    }

    fn contains(&self, name: &str) -> bool {
        self.beans.contains_key(name)
    }

    fn register(&mut self, name: String, bean: Bean) -> bool {
        if self.beans.contains_key(&name) {
            return false;
        }
        self.beans.insert(name, bean);
        true
    }

    fn remove(&mut self, name: &str) -> Option<Bean> {
        self.beans.remove(name)
    }

    fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.beans.keys().cloned().collect();
        names.sort();
        names
    }

    fn len(&self) -> usize {
        self.beans.len()
    }
}

impl fmt::Debug for BeanRegistryImpl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BeanRegistryImpl")
            .field("beans", &self.names())
            .finish()
    }
}
