//! # IoC Macros
//!
//! 在编译期为组件生成描述符，并在程序启动时注册到全局组件目录。
//!
//! ## 核心宏
//!
//! - [`component`] - 组件标记，用于结构体或 trait
//! - [`injectable`] - 可被解析但不参与扫描的普通类型
//! - [`configuration`] - 配置类，配合 [`bean`] 声明工厂方法
//!
//! ## 使用示例
//!
//! ```rust,ignore
//! use ioc_macros::{bean, component, configuration};
//! use std::sync::Arc;
//!
//! #[derive(Debug, Default)]
//! pub struct DataSource {
//!     url: String,
//! }
//!
//! #[derive(Debug, Default)]
//! pub struct PersistenceConfig;
//!
//! #[configuration]
//! impl PersistenceConfig {
//!     #[bean]
//!     fn data_source(&self) -> DataSource {
//!         DataSource { url: "mem://orders".into() }
//!     }
//! }
//!
//! #[component]
//! pub struct OrderService {
//!     data_source: Arc<DataSource>,
//!     retries: u32,
//! }
//! ```

use proc_macro::TokenStream;
use syn::{parse_macro_input, Item, ItemImpl};

mod component;
mod configuration;
mod utils;

/// 组件标记宏
///
/// 用于结构体时注册 `Component` 描述符，生成一个必需参数构造器：
/// 类型为 `Arc<T>` 的字段按声明顺序注入，其余字段使用 `Default::default()`。
/// 用于 trait 时注册 `Interface` 描述符，扫描时跳过。
///
/// 不支持泛型，类型需满足 `Send + Sync + 'static`。
///
/// # 示例
///
/// ```rust,ignore
/// #[component]
/// pub struct OrderService {
///     repository: Arc<OrderRepository>,
/// }
/// ```
#[proc_macro_attribute]
pub fn component(args: TokenStream, input: TokenStream) -> TokenStream {
    let item = parse_macro_input!(input as Item);
    component::component_impl(args.into(), item)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// 普通类型宏
///
/// 与 [`component`] 生成相同的构造器，但描述符种类为 `Plain`：
/// 不会被扫描，也不能按名称获取，只能作为依赖或按类型创建。
#[proc_macro_attribute]
pub fn injectable(args: TokenStream, input: TokenStream) -> TokenStream {
    let item = parse_macro_input!(input as Item);
    component::injectable_impl(args.into(), item)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// 配置类宏
///
/// 用于固有 impl 块。配置类通过 `Default` 实例化，
/// 块中每个 `#[bean]` 方法成为一个工厂方法：
///
/// - 接收者必须是 `&self`
/// - 其余参数必须是 `Arc<T>`，由容器按类型解析
/// - 返回 `T` 或 `Result<T, E>`，产出的 Bean 名称由方法名推导
///
/// # 示例
///
/// ```rust,ignore
/// #[configuration]
/// impl CacheConfig {
///     #[bean]
///     fn cache(&self, data_source: Arc<DataSource>) -> Result<Cache, CacheError> {
///         Cache::open(data_source)
///     }
/// }
/// ```
#[proc_macro_attribute]
pub fn configuration(args: TokenStream, input: TokenStream) -> TokenStream {
    let item = parse_macro_input!(input as ItemImpl);
    configuration::configuration_impl(args.into(), item)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// 工厂方法标记
///
/// 只能出现在 [`configuration`] impl 块内，由外层宏处理并移除。
#[proc_macro_attribute]
pub fn bean(_args: TokenStream, input: TokenStream) -> TokenStream {
    let input = proc_macro2::TokenStream::from(input);
    let error =
        syn::Error::new_spanned(&input, "#[bean] 只能用于 #[configuration] impl 块中的方法")
            .into_compile_error();
    quote::quote!(#error #input).into()
}
