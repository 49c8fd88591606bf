// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Code generation shared by both declaration macros.

pub mod value;

pub use value::LiteralValue;

use proc_macro2::TokenStream;
use quote::quote;

/// Path of the runtime crate as seen from the expansion site.
pub fn runtime() -> TokenStream {
    quote! { ::enum_mapper }
}

/// Body of `EnumMapper::mapping`: a per-type static cell built from `definition`.
pub fn mapping_fn(definition: TokenStream) -> TokenStream {
    let krate = runtime();
    quote! {
        fn mapping() -> &'static #krate::Mapping {
            static MAPPING: #krate::MappingCell = #krate::MappingCell::new();
            MAPPING.get_or_init(|| #definition)
        }
    }
}
