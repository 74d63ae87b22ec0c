use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, DeriveInput, Field, Fields};

/// Implements `contactdesk_di::Build` for a struct by building each field
/// from the provider.
///
/// Fields marked with `#[state]` are initialized with their `Default` value
/// instead. The built value is stored in the provider's cache and cloned on
/// subsequent builds.
#[proc_macro_derive(Build, attributes(state))]
pub fn derive_build(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let ident = input.ident;

    let generics = input
        .generics
        .type_params()
        .map(|x| &x.ident)
        .collect::<Vec<_>>();

    let syn::Data::Struct(data) = input.data else {
        return quote! { ::core::compile_error!("Build can only be derived for structs"); }.into();
    };

    let bounds = data
        .fields
        .iter()
        .filter(|x| !is_state(x))
        .map(|Field { ty, .. }| quote! { #ty: ::contactdesk_di::Build<__Provider> })
        .collect::<Vec<_>>();

    let init = |field: &Field| {
        if is_state(field) {
            quote! { ::core::default::Default::default() }
        } else {
            quote! { ::contactdesk_di::Build::build(provider) }
        }
    };

    let build_expr = match &data.fields {
        Fields::Named(fields) => {
            let fields = fields.named.iter().map(|f| {
                let ident = &f.ident;
                let value = init(f);
                quote! { #ident: #value }
            });
            quote! { Self { #(#fields),* } }
        }
        Fields::Unnamed(fields) => {
            let fields = fields.unnamed.iter().map(init);
            quote! { Self( #(#fields),* ) }
        }
        Fields::Unit => quote! { Self },
    };

    quote! {
        impl<__Provider, #(#generics),*> ::contactdesk_di::Build<__Provider> for #ident<#(#generics),*>
        where
            Self: ::core::clone::Clone + 'static,
            __Provider: ::contactdesk_di::Provider,
            #(#bounds),*
        {
            fn build(provider: &mut __Provider) -> Self {
                if let ::core::option::Option::Some(cached) =
                    ::contactdesk_di::Provider::cache(provider).get::<Self>()
                {
                    return ::core::clone::Clone::clone(cached);
                }

                let value = #build_expr;
                ::contactdesk_di::Provider::cache(provider)
                    .insert(::core::clone::Clone::clone(&value));
                value
            }
        }
    }
    .into()
}

fn is_state(field: &Field) -> bool {
    field
        .attrs
        .iter()
        .any(|x| x.path().get_ident().is_some_and(|x| x == "state"))
}
