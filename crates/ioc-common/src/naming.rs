//! Bean 命名约定
//!
//! Bean 名称由标识符确定性地推导：类型名或工厂方法名转为驼峰后首字母小写。
//! 不处理命名冲突，同名的两个 Bean 共享注册表中的同一个位置。

use crate::metadata::TypeInfo;

/// 首字母小写
pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// 将蛇形命名转换为驼峰命名
pub fn to_camel_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut capitalize_next = false;

    for ch in s.chars() {
        if ch == '_' {
            // 开头的下划线不影响首字母
            capitalize_next = !result.is_empty();
        } else if capitalize_next {
            result.extend(ch.to_uppercase());
            capitalize_next = false;
        } else {
            result.push(ch);
        }
    }

    result
}

/// 由标识符推导 Bean 名称
pub fn bean_name(identifier: &str) -> String {
    lower_first(&to_camel_case(identifier))
}

/// 由类型推导 Bean 名称
pub fn bean_name_of(type_info: &TypeInfo) -> String {
    bean_name(type_info.short_name())
}
