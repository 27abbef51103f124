//! ApiCommand derive macro implementation
//!
//! Command structs are plain data-transfer objects. The derive produces the
//! list of JSON keys the command accepts and an `extract` function that reads
//! each field through the `FromParameter` implementation of its type.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Fields, parse_macro_input};

use crate::attributes::{FieldRole, field_role, parse_also_accepts};

/// Implementation of the ApiCommand derive macro
pub fn derive_api_command_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let struct_name = &input.ident;

    let Data::Struct(data_struct) = &input.data else {
        return Err(syn::Error::new_spanned(
            struct_name,
            "ApiCommand can only be derived for structs",
        ));
    };

    let Fields::Named(fields) = &data_struct.fields else {
        return Err(syn::Error::new_spanned(
            struct_name,
            "ApiCommand can only be derived for structs with named fields",
        ));
    };

    let also_accepts = parse_also_accepts(&input.attrs)?;

    let mut parameter_names = Vec::new();
    let mut bindings = Vec::new();
    let mut initialisers = Vec::new();
    let mut modified_field = None;

    for field in &fields.named {
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };

        match field_role(field)? {
            FieldRole::Parameter { name } => {
                let field_type = &field.ty;
                bindings.push(quote! {
                    let #ident = <#field_type as crate::request::FromParameter>::from_parameter(
                        #name,
                        extraction,
                    );
                });
                initialisers.push(quote! { #ident });
                parameter_names.push(name);
            }
            FieldRole::Skip => {
                initialisers.push(quote! { #ident: ::core::default::Default::default() });
            }
            FieldRole::Modified => {
                if modified_field.replace(ident.clone()).is_some() {
                    return Err(syn::Error::new_spanned(
                        ident,
                        "only one field can be marked #[param(modified)]",
                    ));
                }
            }
        }
    }

    // Must run after every parameter has been read
    if let Some(ident) = &modified_field {
        initialisers.push(quote! { #ident: extraction.take_modified() });
    }

    for name in also_accepts {
        if !parameter_names.contains(&name) {
            parameter_names.push(name);
        }
    }

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics crate::command::ApiCommand for #struct_name #ty_generics #where_clause {
            const SUPPORTED_PARAMETERS: &'static [&'static str] = &[#(#parameter_names),*];

            fn extract(extraction: &mut crate::request::Extraction<'_>) -> Self {
                #(#bindings)*

                Self {
                    #(#initialisers,)*
                }
            }
        }
    })
}
