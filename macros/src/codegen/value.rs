// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Literal values as the macros see them.
//!
//! | Rust literal   | `LiteralValue` | Associated const type | Runtime value           |
//! |----------------|----------------|-----------------------|-------------------------|
//! | `1`, `-3`      | `Int`          | `i64`                 | `MapValue::int(..)`     |
//! | `"active"`     | `Str`          | `&'static str`        | `MapValue::text(..)`    |

use proc_macro2::TokenStream;
use quote::quote;
use std::fmt;
use syn::{Expr, ExprLit, ExprUnary, Lit, UnOp};

use super::runtime;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LiteralValue {
    Int(i64),
    Str(String),
}

impl LiteralValue {
    /// Accept an integer literal (optionally negated) or a string literal.
    pub fn parse(expr: &Expr) -> syn::Result<Self> {
        match expr {
            Expr::Lit(ExprLit {
                lit: Lit::Int(int), ..
            }) => Ok(LiteralValue::Int(int.base10_parse::<i64>()?)),
            Expr::Lit(ExprLit {
                lit: Lit::Str(text),
                ..
            }) => Ok(LiteralValue::Str(text.value())),
            Expr::Unary(ExprUnary {
                op: UnOp::Neg(_),
                expr: inner,
                ..
            }) => match inner.as_ref() {
                Expr::Lit(ExprLit {
                    lit: Lit::Int(int), ..
                }) => {
                    let magnitude = int.base10_parse::<i128>()?;
                    i64::try_from(-magnitude)
                        .map(LiteralValue::Int)
                        .map_err(|_| syn::Error::new_spanned(expr, "integer value out of range for i64"))
                }
                _ => Err(unsupported(expr)),
            },
            Expr::Group(group) => Self::parse(&group.expr),
            Expr::Paren(paren) => Self::parse(&paren.expr),
            _ => Err(unsupported(expr)),
        }
    }

    /// Expression building the runtime `MapValue`; valid in `static` items.
    pub fn map_value(&self) -> TokenStream {
        let krate = runtime();
        match self {
            LiteralValue::Int(value) => quote! { #krate::MapValue::int(#value) },
            LiteralValue::Str(value) => quote! { #krate::MapValue::text(#value) },
        }
    }

    /// Type of the associated const declared for this value.
    pub fn const_type(&self) -> TokenStream {
        match self {
            LiteralValue::Int(_) => quote! { i64 },
            LiteralValue::Str(_) => quote! { &'static str },
        }
    }

    /// The value as a typed literal expression.
    pub fn literal(&self) -> TokenStream {
        match self {
            LiteralValue::Int(value) => quote! { #value },
            LiteralValue::Str(value) => quote! { #value },
        }
    }
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralValue::Int(value) => write!(f, "{}", value),
            LiteralValue::Str(value) => write!(f, "{:?}", value),
        }
    }
}

fn unsupported(expr: &Expr) -> syn::Error {
    syn::Error::new_spanned(expr, "expected an integer or string literal")
}
