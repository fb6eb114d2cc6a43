//! 配置类宏实现
//!
//! 将 impl 块中标注 `#[bean]` 的方法登记为工厂方法。

use crate::component::registration_fn_name;
use crate::utils::{arc_inner_type, has_attribute, is_result_type};
use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{FnArg, ImplItem, ImplItemFn, ItemImpl, Result, ReturnType, Type};

/// 展开 `#[configuration]`
pub fn configuration_impl(args: TokenStream, mut item_impl: ItemImpl) -> Result<TokenStream> {
    if !args.is_empty() {
        return Err(syn::Error::new_spanned(args, "#[configuration] 不接受参数"));
    }
    if let Some((_, path, _)) = &item_impl.trait_ {
        return Err(syn::Error::new_spanned(
            path,
            "#[configuration] 只能用于固有 impl 块",
        ));
    }
    if !item_impl.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &item_impl.generics,
            "配置类不支持泛型参数",
        ));
    }

    let self_ty = item_impl.self_ty.as_ref().clone();
    let ident = match &self_ty {
        Type::Path(type_path) if type_path.qself.is_none() => type_path
            .path
            .segments
            .last()
            .map(|segment| segment.ident.clone()),
        _ => None,
    }
    .ok_or_else(|| syn::Error::new_spanned(&self_ty, "配置类必须是具名类型"))?;

    let mut factory_methods = Vec::new();
    for impl_item in &mut item_impl.items {
        if let ImplItem::Fn(method) = impl_item {
            if has_attribute(&method.attrs, "bean") {
                method.attrs.retain(|attr| !attr.path().is_ident("bean"));
                factory_methods.push(factory_method(&self_ty, method)?);
            }
        }
    }

    let register_fn = registration_fn_name(&ident);

    Ok(quote! {
        #item_impl

        #[::ioc_common::__private::ctor]
        #[allow(unused_mut, unused_variables)]
        fn #register_fn() {
            ::ioc_common::register_component_descriptor(
                ::ioc_common::ComponentDescriptor::configuration::<#self_ty>()
                    #(.with_factory_method(#factory_methods))*,
            );
        }
    })
}

/// 生成单个工厂方法描述符
fn factory_method(self_ty: &Type, method: &ImplItemFn) -> Result<TokenStream> {
    let sig = &method.sig;
    if !sig.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(&sig.generics, "工厂方法不支持泛型参数"));
    }

    let mut inputs = sig.inputs.iter();
    match inputs.next() {
        Some(FnArg::Receiver(receiver))
            if receiver.reference.is_some() && receiver.mutability.is_none() => {}
        _ => {
            return Err(syn::Error::new_spanned(
                sig,
                "工厂方法的第一个参数必须是 &self",
            ))
        }
    }

    let mut parameter_types = Vec::new();
    for input in inputs {
        let inner = match input {
            FnArg::Typed(pat_type) => arc_inner_type(&pat_type.ty),
            FnArg::Receiver(_) => None,
        }
        .ok_or_else(|| syn::Error::new_spanned(input, "工厂方法参数必须是 Arc<T>"))?;
        parameter_types.push(inner);
    }

    let call_result = match &sig.output {
        ReturnType::Default => {
            return Err(syn::Error::new_spanned(sig, "工厂方法必须有返回值"));
        }
        ReturnType::Type(_, ty) => is_result_type(ty),
    };

    let method_ident = &sig.ident;
    let method_name = method_ident.unraw().to_string();
    let call = quote! { config.#method_ident(#(args.take::<#parameter_types>()?),*) };
    let body = if call_result {
        quote! { #call.map_err(::core::convert::Into::into) }
    } else {
        quote! { ::core::result::Result::Ok(#call) }
    };

    Ok(quote! {
        ::ioc_common::FactoryMethodDescriptor::new(
            #method_name,
            ::std::vec![#(::ioc_common::TypeInfo::of::<#parameter_types>()),*],
            |config: &#self_ty,
             mut args: ::ioc_common::BeanArgs|
             -> ::core::result::Result<_, ::ioc_common::BoxError> {
                #body
            },
        )
    })
}
