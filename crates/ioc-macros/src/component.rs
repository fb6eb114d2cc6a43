//! 组件注册宏实现

use crate::utils::{arc_inner_type, to_snake_case};
use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{Fields, Ident, Item, ItemStruct, ItemTrait, Result, Type};

/// 结构体描述符的种类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructKind {
    /// `#[component]`，参与扫描
    Component,
    /// `#[injectable]`，只能作为依赖被创建
    Plain,
}

/// 展开 `#[component]`
pub fn component_impl(args: TokenStream, item: Item) -> Result<TokenStream> {
    reject_args(args, "component")?;

    match item {
        Item::Struct(item_struct) => expand_struct(item_struct, StructKind::Component),
        Item::Trait(item_trait) => expand_trait(item_trait),
        other => Err(syn::Error::new_spanned(
            other,
            "#[component] 只能用于结构体或 trait",
        )),
    }
}

/// 展开 `#[injectable]`
pub fn injectable_impl(args: TokenStream, item: Item) -> Result<TokenStream> {
    reject_args(args, "injectable")?;

    match item {
        Item::Struct(item_struct) => expand_struct(item_struct, StructKind::Plain),
        other => Err(syn::Error::new_spanned(other, "#[injectable] 只能用于结构体")),
    }
}

fn reject_args(args: TokenStream, name: &str) -> Result<()> {
    if args.is_empty() {
        Ok(())
    } else {
        Err(syn::Error::new_spanned(
            args,
            format!("#[{}] 不接受参数", name),
        ))
    }
}

/// 注册函数名，在所在模块内唯一
pub fn registration_fn_name(ident: &Ident) -> Ident {
    Ident::new(
        &format!("__ioc_register_{}", to_snake_case(&ident.to_string())),
        Span::call_site(),
    )
}

/// 根据字段生成构造表达式和参数类型
///
/// `Arc<T>` 字段按声明顺序注入，其余字段使用 `Default`。
fn constructor_parts<'a>(ident: &Ident, fields: &'a Fields) -> (TokenStream, Vec<&'a Type>) {
    let mut parameter_types = Vec::new();
    let mut values = Vec::new();

    for field in fields {
        match arc_inner_type(&field.ty) {
            Some(inner) => {
                parameter_types.push(inner);
                values.push(quote! { args.take::<#inner>()? });
            }
            None => values.push(quote! { ::core::default::Default::default() }),
        }
    }

    let construct = match fields {
        Fields::Named(_) => {
            let names = fields.iter().filter_map(|f| f.ident.as_ref());
            quote! { #ident { #(#names: #values),* } }
        }
        Fields::Unnamed(_) => quote! { #ident(#(#values),*) },
        Fields::Unit => quote! { #ident },
    };

    (construct, parameter_types)
}

fn expand_struct(item_struct: ItemStruct, kind: StructKind) -> Result<TokenStream> {
    if !item_struct.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &item_struct.generics,
            "组件类型不支持泛型参数",
        ));
    }

    let ident = &item_struct.ident;
    let register_fn = registration_fn_name(ident);
    let (construct, parameter_types) = constructor_parts(ident, &item_struct.fields);
    let descriptor = match kind {
        StructKind::Component => {
            quote! { ::ioc_common::ComponentDescriptor::component::<#ident>() }
        }
        StructKind::Plain => quote! { ::ioc_common::ComponentDescriptor::plain::<#ident>() },
    };

    Ok(quote! {
        #item_struct

        #[::ioc_common::__private::ctor]
        #[allow(unused_mut, unused_variables)]
        fn #register_fn() {
            ::ioc_common::register_component_descriptor(
                #descriptor.with_constructor(
                    ::ioc_common::ConstructorDescriptor::new(
                        ::std::vec![#(::ioc_common::TypeInfo::of::<#parameter_types>()),*],
                        |mut args: ::ioc_common::BeanArgs|
                         -> ::core::result::Result<#ident, ::ioc_common::BoxError> {
                            ::core::result::Result::Ok(#construct)
                        },
                    )
                    .required_args(),
                ),
            );
        }
    })
}

fn expand_trait(item_trait: ItemTrait) -> Result<TokenStream> {
    if !item_trait.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &item_trait.generics,
            "组件 trait 不支持泛型参数",
        ));
    }

    let ident = &item_trait.ident;
    let register_fn = registration_fn_name(ident);

    Ok(quote! {
        #item_trait

        #[::ioc_common::__private::ctor]
        fn #register_fn() {
            ::ioc_common::register_component_descriptor(
                ::ioc_common::ComponentDescriptor::interface::<dyn #ident>(),
            );
        }
    })
}
