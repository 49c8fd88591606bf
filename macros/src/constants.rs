// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Implementation of the `enum_constants!` macro.
//!
//! Declares a unit struct carrying a table of named constants and implements
//! `EnumMapper` for it by correlating `DB_*` with `HUMAN_*` names:
//!
//! ```ignore
//! enum_constants! {
//!     /// Order lifecycle.
//!     #[markers(storage = "DB_", human = "HUMAN_")]
//!     pub struct Status {
//!         DB_ACTIVE = 1,
//!         DB_INACTIVE = 0,
//!         HUMAN_ACTIVE = "active",
//!         HUMAN_INACTIVE = "inactive",
//!     }
//! }
//! ```
//!
//! expands to roughly:
//!
//! ```ignore
//! pub struct Status;
//!
//! impl Status {
//!     pub const DB_ACTIVE: i64 = 1;
//!     pub const HUMAN_ACTIVE: &'static str = "active";
//!     // ...
//!     pub const CONSTANTS: &'static [(&'static str, MapValue)] = &[/* every constant */];
//! }
//!
//! impl EnumMapper for Status { /* Definition::from_constants(...) cached in a static */ }
//! ```
//!
//! `#[markers(...)]` is optional; both prefixes default to `DB_` / `HUMAN_`.
//! Constants carrying neither prefix are kept as associated consts and
//! ignored by the mapping.

use proc_macro2::TokenStream;
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{braced, Attribute, Expr, Ident, Lit, MetaNameValue, Token, Visibility};

use crate::codegen::{self, LiteralValue};
use crate::validate::{check_unique, correlate, DeclaredConstant, Markers};

/// `#[attrs] vis struct Name { CONST = literal, ... }`
pub struct ConstantsInput {
    attrs: Vec<Attribute>,
    vis: Visibility,
    ident: Ident,
    constants: Punctuated<ConstantDecl, Token![,]>,
}

struct ConstantDecl {
    attrs: Vec<Attribute>,
    ident: Ident,
    value: Expr,
}

impl Parse for ConstantsInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        let vis = input.parse()?;
        input.parse::<Token![struct]>()?;
        let ident = input.parse()?;

        let content;
        braced!(content in input);
        let constants = content.parse_terminated(ConstantDecl::parse, Token![,])?;

        Ok(ConstantsInput {
            attrs,
            vis,
            ident,
            constants,
        })
    }
}

impl Parse for ConstantDecl {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        let ident = input.parse()?;
        input.parse::<Token![=]>()?;
        let value = input.parse()?;
        Ok(ConstantDecl {
            attrs,
            ident,
            value,
        })
    }
}

/// Split `#[markers(...)]` out of the struct attributes.
fn take_markers(attrs: Vec<Attribute>) -> syn::Result<(Markers, Vec<Attribute>)> {
    let mut markers = Markers::default();
    let mut rest = Vec::with_capacity(attrs.len());
    let mut seen_markers = false;

    for attr in attrs {
        if !attr.path().is_ident("markers") {
            rest.push(attr);
            continue;
        }
        if seen_markers {
            return Err(syn::Error::new_spanned(&attr, "duplicate #[markers] attribute"));
        }
        seen_markers = true;

        let mut storage = None;
        let mut human = None;

        let nested = attr.parse_args_with(Punctuated::<MetaNameValue, Token![,]>::parse_terminated)?;
        for nv in nested {
            let value = match &nv.value {
                Expr::Lit(syn::ExprLit {
                    lit: Lit::Str(lit_str),
                    ..
                }) => lit_str.value(),
                other => {
                    return Err(syn::Error::new_spanned(other, "marker must be a string literal"))
                }
            };
            let slot = match nv.path.get_ident().map(|i| i.to_string()).as_deref() {
                Some("storage") => &mut storage,
                Some("human") => &mut human,
                _ => {
                    return Err(syn::Error::new_spanned(
                        &nv.path,
                        "unknown marker, expected `storage` or `human`",
                    ))
                }
            };
            if slot.replace(value).is_some() {
                return Err(syn::Error::new_spanned(&nv.path, "duplicate marker"));
            }
        }
        if let Some(storage) = storage {
            markers.storage = storage;
        }
        if let Some(human) = human {
            markers.human = human;
        }
        markers.check(attr.span())?;
    }

    Ok((markers, rest))
}

/// Main entry point for the `enum_constants!` macro.
pub fn expand(input: ConstantsInput) -> syn::Result<TokenStream> {
    let ConstantsInput {
        attrs,
        vis,
        ident,
        constants,
    } = input;
    let (markers, attrs) = take_markers(attrs)?;

    let values: Vec<LiteralValue> = constants
        .iter()
        .map(|decl| LiteralValue::parse(&decl.value))
        .collect::<syn::Result<_>>()?;

    let declared: Vec<DeclaredConstant<'_>> = constants
        .iter()
        .zip(&values)
        .map(|(decl, value)| DeclaredConstant {
            name: decl.ident.to_string(),
            value,
            span: decl.ident.span(),
        })
        .collect();
    let pairs = correlate(&markers, &declared)?;
    check_unique(&pairs)?;

    let krate = codegen::runtime();
    let mapper_name = ident.to_string();
    let storage = &markers.storage;
    let human = &markers.human;

    let const_items = constants.iter().zip(&values).map(|(decl, value)| {
        let const_attrs = &decl.attrs;
        let const_ident = &decl.ident;
        let ty = value.const_type();
        let literal = value.literal();
        quote! {
            #(#const_attrs)*
            #vis const #const_ident: #ty = #literal;
        }
    });
    let table_entries = constants.iter().zip(&values).map(|(decl, value)| {
        let name = decl.ident.to_string();
        let map_value = value.map_value();
        quote! { (#name, #map_value) }
    });

    let mapping_fn = codegen::mapping_fn(quote! {
        #krate::Definition::from_constants(
            #mapper_name,
            Self::CONSTANTS,
            &#krate::Markers::new(#storage, #human),
        )
    });

    Ok(quote! {
        #(#attrs)*
        #vis struct #ident;

        #[allow(dead_code)]
        impl #ident {
            #(#const_items)*

            /// Every declared constant, in declaration order.
            #vis const CONSTANTS: &'static [(&'static str, #krate::MapValue)] = &[
                #(#table_entries),*
            ];
        }

        impl #krate::EnumMapper for #ident {
            #mapping_fn
        }
    })
}
