// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Procedural macros that declare enum mappers.
//!
//! Two ways in, one result. Both produce an `enum_mapper::EnumMapper` impl
//! whose mapping is built once per type and cached in a static:
//!
//! 1. **`enum_constants!`**: a unit struct with `DB_*` / `HUMAN_*` constants,
//!    correlated by name suffix. Closest to how these tables are usually
//!    written by hand.
//! 2. **`#[derive(EnumMapper)]`**: a real Rust enum whose variants each carry
//!    their pair. Adds `MappedVariant`, so you can go from a stored code
//!    straight to a variant.
//!
//! Whichever you pick, the declaration is validated while it compiles. A
//! `DB_` constant without its `HUMAN_` twin, or two members sharing a value
//! on one side, is a compile error pointing at the offender, not an entry
//! that quietly goes missing at runtime.
//!
//! # Example
//!
//! ```ignore
//! use enum_mapper::{enum_constants, EnumMapper, MappedVariant};
//!
//! enum_constants! {
//!     pub struct Status {
//!         DB_ACTIVE = 1,
//!         DB_INACTIVE = 0,
//!         HUMAN_ACTIVE = "active",
//!         HUMAN_INACTIVE = "inactive",
//!     }
//! }
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, EnumMapper)]
//! enum Visibility {
//!     #[mapper(db = "pub", human = "Public")]
//!     Public,
//!     #[mapper(db = "prv", human = "Private")]
//!     Private,
//! }
//! ```

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod codegen;
mod constants;
mod derive_mapper;
mod validate;

/// Derive `EnumMapper` and `MappedVariant` for a fieldless enum.
///
/// # Attributes
///
/// - `#[mapper(name = "Name")]` on the enum - Override the mapper name used in errors
/// - `#[mapper(db = <literal>, human = <literal>)]` on every variant - The variant's pair
///
/// Values are integer or string literals. The enum must be `Copy` and must
/// not be generic.
#[proc_macro_derive(EnumMapper, attributes(mapper))]
pub fn derive_enum_mapper(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive_mapper::derive(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Declare a constant table and implement `EnumMapper` for it.
///
/// # Syntax
///
/// ```ignore
/// enum_constants! {
///     #[markers(storage = "DB_", human = "HUMAN_")]   // optional
///     pub struct Name {
///         DB_X = <literal>,
///         HUMAN_X = <literal>,
///     }
/// }
/// ```
///
/// Every constant also becomes an associated const (`Name::DB_X`), typed
/// `i64` or `&'static str` after its literal.
#[proc_macro]
pub fn enum_constants(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as constants::ConstantsInput);
    constants::expand(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
