//! Implementation of the `#[derive(Seekable)]` macro.
//!
//! This macro generates an implementation of the `Seekable` trait and one
//! typed path constant per annotated field.

use std::collections::HashSet;

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{
    spanned::Spanned, Data, DeriveInput, Error, Fields, GenericArgument, PathArguments, Result,
    Type,
};

use super::attrs::{parse_container_attrs, parse_seek_attrs, SeekType};

/// Main implementation of the Seekable derive macro.
pub fn seekable_derive_impl(input: DeriveInput) -> Result<TokenStream> {
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(Error::new(
                    input.span(),
                    "Seekable can only be derived for structs with named fields",
                ))
            }
        },
        _ => {
            return Err(Error::new(
                input.span(),
                "Seekable can only be derived for structs",
            ))
        }
    };

    let container = parse_container_attrs(&input.attrs)?;
    let entity = container
        .entity
        .unwrap_or_else(|| to_snake_case(&struct_name.to_string()));

    let mut field_matches: Vec<TokenStream> = Vec::new();
    let mut field_constants: Vec<TokenStream> = Vec::new();
    let mut seen: HashSet<(String, String)> = HashSet::new();

    for field in fields.iter() {
        let field_name = field
            .ident
            .as_ref()
            .ok_or_else(|| Error::new(field.span(), "expected named field"))?;

        let seek_attrs = parse_seek_attrs(&field.attrs)?;
        if seek_attrs.skip {
            continue;
        }
        let Some(seek_type) = seek_attrs.seek_type else {
            continue;
        };

        let field_entity = seek_attrs.entity.unwrap_or_else(|| entity.clone());
        let path_name = seek_attrs.rename.unwrap_or_else(|| field_name.to_string());

        if !seen.insert((field_entity.clone(), path_name.clone())) {
            return Err(Error::new(
                seek_attrs.span,
                format!("duplicate seek path `{field_entity}.{path_name}`"),
            ));
        }

        let const_name = format_ident!("{}", to_screaming_snake_case(&field_name.to_string()));
        let doc = format!("Typed path to `{field_entity}.{path_name}`.");

        let path_type = match seek_type {
            SeekType::String => quote! { ::sieve::StringPath },
            SeekType::Number => quote! { ::sieve::NumberPath },
        };
        field_constants.push(quote! {
            #[doc = #doc]
            pub const #const_name: #path_type = #path_type::new(#field_entity, #path_name);
        });

        let value_expr = match (seek_type, is_option(&field.ty)) {
            (SeekType::String, false) => {
                quote! { ::sieve::Value::String(&self.#field_name) }
            }
            (SeekType::String, true) => quote! {
                match &self.#field_name {
                    ::core::option::Option::Some(v) => ::sieve::Value::String(v),
                    ::core::option::Option::None => ::sieve::Value::None,
                }
            },
            (SeekType::Number, false) => {
                quote! { ::sieve::Value::Number(::sieve::Number::from(self.#field_name)) }
            }
            (SeekType::Number, true) => quote! {
                match &self.#field_name {
                    ::core::option::Option::Some(v) => {
                        ::sieve::Value::Number(::sieve::Number::from(*v))
                    }
                    ::core::option::Option::None => ::sieve::Value::None,
                }
            },
        };

        field_matches.push(quote! {
            (#field_entity, #path_name) => #value_expr,
        });
    }

    let expanded = quote! {
        impl #impl_generics #struct_name #ty_generics #where_clause {
            /// Entity name used in this type's field paths.
            pub const ENTITY: &'static str = #entity;
            #(#field_constants)*
        }

        impl #impl_generics ::sieve::Seekable for #struct_name #ty_generics #where_clause {
            fn field_value(&self, path: &::sieve::FieldPath) -> ::sieve::Value<'_> {
                match (path.entity(), path.name()) {
                    #(#field_matches)*
                    _ => ::sieve::Value::None,
                }
            }
        }
    };

    Ok(expanded)
}

/// Returns `true` for `Option<T>` (also when written as a qualified path).
fn is_option(ty: &Type) -> bool {
    let Type::Path(type_path) = ty else {
        return false;
    };
    let Some(last) = type_path.path.segments.last() else {
        return false;
    };
    if last.ident != "Option" {
        return false;
    }
    match &last.arguments {
        PathArguments::AngleBracketed(args) => {
            args.args.len() == 1 && matches!(args.args.first(), Some(GenericArgument::Type(_)))
        }
        _ => false,
    }
}

/// Convert a CamelCase type name to snake_case.
fn to_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    let mut prev_was_lower = false;

    for c in s.chars() {
        if c.is_uppercase() {
            if prev_was_lower {
                result.push('_');
            }
            result.push(c.to_ascii_lowercase());
            prev_was_lower = false;
        } else {
            result.push(c);
            prev_was_lower = c.is_lowercase() || c.is_ascii_digit();
        }
    }

    result
}

/// Convert a field name to SCREAMING_SNAKE_CASE.
fn to_screaming_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    let mut prev_was_lower = false;

    for c in s.chars() {
        if c.is_uppercase() {
            if prev_was_lower {
                result.push('_');
            }
            result.push(c);
            prev_was_lower = false;
        } else if c == '_' || c == '-' {
            result.push('_');
            prev_was_lower = false;
        } else {
            result.push(c.to_ascii_uppercase());
            prev_was_lower = true;
        }
    }

    result
}
