//! Procedural macros for rat-nav.
//!
//! This library provides the `#[destinations]` attribute, which turns a plain
//! enum into a set of typed destination keys.

extern crate proc_macro;

use proc_macro::TokenStream;
use quote::quote;
use std::collections::HashMap;
use syn::ext::IdentExt;
use syn::{Attribute, Expr, ExprLit, Fields, Ident, ItemEnum, Lit, LitStr, Meta, parse_macro_input};

/// Attribute macro for declaring the destinations an application registers.
///
/// # Usage
///
/// ```ignore
/// #[destinations]
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum Destination {
///     Menu,
///     #[key = "ViewA"]
///     DetailA,
/// }
///
/// router.register(Destination::DetailA, || build_detail())?;
/// let parsed: Destination = "ViewA".parse()?;
/// ```
///
/// Each variant's key is its name, or the string given with `#[key = "..."]`.
/// The macro generates:
/// - `Destination::ALL`, every variant in declaration order.
/// - `as_str` and `key`, returning the variant's key.
/// - `From<Destination> for DestinationKey` and `Display`.
/// - `FromStr`, matching keys exactly and listing the available keys on
///   failure.
#[proc_macro_attribute]
pub fn destinations(attr: TokenStream, item: TokenStream) -> TokenStream {
    if !attr.is_empty() {
        let attr = proc_macro2::TokenStream::from(attr);
        return syn::Error::new_spanned(attr, "#[destinations] takes no arguments")
            .to_compile_error()
            .into();
    }

    let input = parse_macro_input!(item as ItemEnum);
    match expand(input) {
        Ok(expanded) => TokenStream::from(expanded),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(mut input: ItemEnum) -> syn::Result<proc_macro2::TokenStream> {
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "#[destinations] does not support generic enums",
        ));
    }
    if input.variants.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "#[destinations] needs at least one variant",
        ));
    }

    let enum_name = input.ident.clone();
    let mut seen: HashMap<String, Ident> = HashMap::new();
    let mut variants = Vec::new();
    let mut keys = Vec::new();

    for variant in input.variants.iter_mut() {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                &variant.fields,
                "destination variants cannot carry fields",
            ));
        }

        let key = match take_key_attr(&mut variant.attrs)? {
            Some(key) => key,
            // `r#Type` is keyed as `Type`.
            None => LitStr::new(&variant.ident.unraw().to_string(), variant.ident.span()),
        };
        if key.value().is_empty() {
            return Err(syn::Error::new_spanned(&key, "destination key must not be empty"));
        }
        if let Some(previous) = seen.insert(key.value(), variant.ident.clone()) {
            return Err(syn::Error::new_spanned(
                &key,
                format!("key \"{}\" is already used by `{}`", key.value(), previous),
            ));
        }

        variants.push(variant.ident.clone());
        keys.push(key);
    }

    let expanded = quote! {
        #input

        impl #enum_name {
            /// Every destination, in declaration order.
            pub const ALL: &'static [Self] = &[#(Self::#variants),*];

            /// The key this destination is registered under.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    #(Self::#variants => #keys,)*
                }
            }

            pub fn key(&self) -> ::rat_nav::DestinationKey {
                ::rat_nav::DestinationKey::__from_static(self.as_str())
            }
        }

        impl ::core::convert::From<#enum_name> for ::rat_nav::DestinationKey {
            fn from(destination: #enum_name) -> Self {
                destination.key()
            }
        }

        impl ::core::fmt::Display for #enum_name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::core::str::FromStr for #enum_name {
            type Err = ::rat_nav::ParseKeyError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                match s {
                    #(#keys => ::core::result::Result::Ok(Self::#variants),)*
                    "" => ::core::result::Result::Err(::rat_nav::ParseKeyError::Empty),
                    _ => ::core::result::Result::Err(::rat_nav::ParseKeyError::Unrecognized {
                        input: ::std::string::ToString::to_string(s),
                        available: ::std::vec![#(#keys),*],
                    }),
                }
            }
        }
    };

    Ok(expanded)
}

/// Remove a `#[key = "..."]` attribute from a variant and return its value.
fn take_key_attr(attrs: &mut Vec<Attribute>) -> syn::Result<Option<LitStr>> {
    let Some(index) = attrs.iter().position(|attr| attr.path().is_ident("key")) else {
        return Ok(None);
    };
    let attr = attrs.remove(index);
    if let Some(extra) = attrs.iter().find(|attr| attr.path().is_ident("key")) {
        return Err(syn::Error::new_spanned(extra, "duplicate #[key] attribute"));
    }

    match &attr.meta {
        Meta::NameValue(meta) => match &meta.value {
            Expr::Lit(ExprLit {
                lit: Lit::Str(key), ..
            }) => Ok(Some(key.clone())),
            other => Err(syn::Error::new_spanned(
                other,
                "expected a string literal, e.g. #[key = \"ViewA\"]",
            )),
        },
        _ => Err(syn::Error::new_spanned(&attr, "expected #[key = \"...\"]")),
    }
}
