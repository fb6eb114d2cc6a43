//! 元数据定义
//!
//! 提供组件和类型的元数据信息

use std::any::TypeId;
use std::fmt;

/// 类型信息
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeInfo {
    /// 类型名称（不含模块路径和泛型参数）
    pub name: String,
    /// 类型ID
    pub id: TypeId,
    /// 完整类型路径
    pub module_path: String,
}

impl TypeInfo {
    /// 从类型获取类型信息
    pub fn of<T: ?Sized + 'static>() -> Self {
        let full_name = std::any::type_name::<T>();
        let path = full_name.strip_prefix("dyn ").unwrap_or(full_name);
        // 去掉泛型参数和 trait object 的附加约束
        let path = path
            .split(|c| c == '<' || c == ' ')
            .next()
            .unwrap_or(path);

        Self {
            name: path.rsplit("::").next().unwrap_or(path).to_string(),
            id: TypeId::of::<T>(),
            module_path: path.to_string(),
        }
    }

    /// 获取简短的类型名称（不包含模块路径）
    pub fn short_name(&self) -> &str {
        &self.name
    }

    /// 获取类型所在的命名空间
    pub fn namespace(&self) -> &str {
        match self.module_path.rfind("::") {
            Some(index) => &self.module_path[..index],
            None => "",
        }
    }
}

impl fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.module_path)
    }
}
