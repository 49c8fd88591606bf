// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Implementation of the `#[derive(EnumMapper)]` macro.
//!
//! Each unit variant declares its pair directly, so nothing is correlated by
//! name: the variant *is* the correlation.
//!
//! ```ignore
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, EnumMapper)]
//! #[mapper(name = "OrderStatus")]
//! enum Status {
//!     #[mapper(db = 1, human = "active")]
//!     Active,
//!     #[mapper(db = 0, human = "inactive")]
//!     Inactive,
//! }
//! ```
//!
//! Emits `EnumMapper` (mapping cached in a per-type static) and
//! `MappedVariant` (variant ⇄ value conversions). The enum must be `Copy`.

use proc_macro2::TokenStream;
use quote::quote;
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{Attribute, Data, DeriveInput, Expr, Fields, Lit, MetaNameValue, Token, Variant};

use crate::codegen::{self, LiteralValue};
use crate::validate::{check_unique, DeclaredPair, Errors};

/// `#[mapper(...)]` on the enum itself.
#[derive(Default)]
struct ContainerAttrs {
    /// Name reported in errors, defaults to the enum's identifier
    name: Option<String>,
}

impl ContainerAttrs {
    fn from_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut result = ContainerAttrs::default();

        for nv in mapper_args(attrs)? {
            match nv.path.get_ident().map(|i| i.to_string()).as_deref() {
                Some("name") => match &nv.value {
                    Expr::Lit(syn::ExprLit {
                        lit: Lit::Str(lit_str),
                        ..
                    }) => result.name = Some(lit_str.value()),
                    other => {
                        return Err(syn::Error::new_spanned(other, "`name` must be a string literal"))
                    }
                },
                _ => {
                    return Err(syn::Error::new_spanned(
                        &nv.path,
                        "unknown mapper attribute, expected `name`",
                    ))
                }
            }
        }

        Ok(result)
    }
}

/// `#[mapper(db = ..., human = ...)]` on a variant.
struct VariantAttrs {
    db: (LiteralValue, proc_macro2::Span),
    human: (LiteralValue, proc_macro2::Span),
}

impl VariantAttrs {
    fn from_variant(variant: &Variant) -> syn::Result<Self> {
        let mut db = None;
        let mut human = None;

        for nv in mapper_args(&variant.attrs)? {
            let value = (LiteralValue::parse(&nv.value)?, nv.value.span());
            let slot = match nv.path.get_ident().map(|i| i.to_string()).as_deref() {
                Some("db") => &mut db,
                Some("human") => &mut human,
                _ => {
                    return Err(syn::Error::new_spanned(
                        &nv.path,
                        "unknown mapper attribute, expected `db` or `human`",
                    ))
                }
            };
            if slot.replace(value).is_some() {
                return Err(syn::Error::new_spanned(
                    &nv.path,
                    "duplicate mapper attribute, each variant declares one `db` and one `human`",
                ));
            }
        }

        match (db, human) {
            (Some(db), Some(human)) => Ok(VariantAttrs { db, human }),
            (None, _) => Err(syn::Error::new_spanned(
                &variant.ident,
                "variant needs a storage value: #[mapper(db = ...)]",
            )),
            (_, None) => Err(syn::Error::new_spanned(
                &variant.ident,
                "variant needs a human value: #[mapper(human = ...)]",
            )),
        }
    }
}

/// All `key = value` arguments across every `#[mapper(...)]` attribute.
fn mapper_args(attrs: &[Attribute]) -> syn::Result<Vec<MetaNameValue>> {
    let mut args = Vec::new();
    for attr in attrs {
        if attr.path().is_ident("mapper") {
            let nested =
                attr.parse_args_with(Punctuated::<MetaNameValue, Token![,]>::parse_terminated)?;
            args.extend(nested);
        }
    }
    Ok(args)
}

/// Main entry point for the `#[derive(EnumMapper)]` macro.
pub fn derive(input: DeriveInput) -> syn::Result<TokenStream> {
    let name = &input.ident;

    let data = match &input.data {
        Data::Enum(data) => data,
        Data::Struct(_) => {
            return Err(syn::Error::new_spanned(
                name,
                "EnumMapper can only be derived for enums; use enum_constants! for a constant table",
            ))
        }
        Data::Union(_) => {
            return Err(syn::Error::new_spanned(name, "EnumMapper does not support unions"))
        }
    };

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "EnumMapper cannot be derived for generic enums",
        ));
    }

    let container = ContainerAttrs::from_attrs(&input.attrs)?;
    let mapper_name = container.name.unwrap_or_else(|| name.to_string());

    let mut errors = Errors::default();
    let mut variants = Vec::with_capacity(data.variants.len());
    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            errors.push(syn::Error::new_spanned(
                variant,
                "EnumMapper variants must be unit variants",
            ));
            continue;
        }
        match VariantAttrs::from_variant(variant) {
            Ok(attrs) => variants.push((&variant.ident, attrs)),
            Err(err) => errors.push(err),
        }
    }
    errors.finish()?;

    let pairs: Vec<DeclaredPair<'_>> = variants
        .iter()
        .map(|(ident, attrs)| DeclaredPair {
            name: ident.to_string(),
            db: &attrs.db.0,
            human: &attrs.human.0,
            db_span: attrs.db.1,
            human_span: attrs.human.1,
        })
        .collect();
    check_unique(&pairs)?;

    let krate = codegen::runtime();
    let count = variants.len();
    let idents: Vec<_> = variants.iter().map(|(ident, _)| *ident).collect();
    let pair_names: Vec<String> = idents.iter().map(|ident| ident.to_string()).collect();
    let db_values: Vec<TokenStream> = variants.iter().map(|(_, a)| a.db.0.map_value()).collect();
    let human_values: Vec<TokenStream> =
        variants.iter().map(|(_, a)| a.human.0.map_value()).collect();

    let mapping_fn = codegen::mapping_fn(quote! {
        {
            let pairs: [#krate::Pair; #count] = [
                #( #krate::Pair::new(#pair_names, #db_values, #human_values) ),*
            ];
            #krate::Definition::from_pairs(#mapper_name, pairs)
        }
    });

    Ok(quote! {
        impl #krate::EnumMapper for #name {
            #mapping_fn
        }

        impl #krate::MappedVariant for #name {
            fn variants() -> &'static [Self] {
                &[ #( Self::#idents ),* ]
            }

            fn db_value(self) -> &'static #krate::MapValue {
                match self {
                    #( Self::#idents => {
                        static VALUE: #krate::MapValue = #db_values;
                        &VALUE
                    } )*
                }
            }

            fn human_value(self) -> &'static #krate::MapValue {
                match self {
                    #( Self::#idents => {
                        static VALUE: #krate::MapValue = #human_values;
                        &VALUE
                    } )*
                }
            }
        }
    })
}
