// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Compile-time checks for mapper declarations.
//!
//! These mirror the runtime checks in `enum_mapper::Definition` so a bad
//! declaration never compiles. Errors point at the offending constant or
//! variant and are combined, so one build reports every problem.

use proc_macro2::Span;
use std::collections::HashMap;

use crate::codegen::LiteralValue;

/// A pair as declared, with the span to blame for it.
pub struct DeclaredPair<'a> {
    pub name: String,
    pub db: &'a LiteralValue,
    pub human: &'a LiteralValue,
    pub db_span: Span,
    pub human_span: Span,
}

/// Prefixes marking storage and human constant names.
pub struct Markers {
    pub storage: String,
    pub human: String,
}

impl Default for Markers {
    fn default() -> Self {
        Markers {
            storage: "DB_".to_string(),
            human: "HUMAN_".to_string(),
        }
    }
}

impl Markers {
    pub fn check(&self, span: Span) -> syn::Result<()> {
        let overlapping =
            self.storage.starts_with(&self.human) || self.human.starts_with(&self.storage);
        if self.storage.is_empty() || self.human.is_empty() || overlapping {
            return Err(syn::Error::new(
                span,
                format!(
                    "markers \"{}\" and \"{}\" must be non-empty and neither may prefix the other",
                    self.storage, self.human
                ),
            ));
        }
        Ok(())
    }
}

/// A named constant as declared in `enum_constants!`.
pub struct DeclaredConstant<'a> {
    pub name: String,
    pub value: &'a LiteralValue,
    pub span: Span,
}

/// Correlate constants by marker, in storage declaration order.
pub fn correlate<'a>(
    markers: &Markers,
    constants: &[DeclaredConstant<'a>],
) -> syn::Result<Vec<DeclaredPair<'a>>> {
    let mut errors = Errors::default();
    let mut by_name: HashMap<&str, &DeclaredConstant<'a>> = HashMap::new();

    for constant in constants {
        if by_name.insert(constant.name.as_str(), constant).is_some() {
            errors.push(syn::Error::new(
                constant.span,
                format!("constant `{}` is declared more than once", constant.name),
            ));
        }
    }

    let mut pairs = Vec::new();
    for constant in constants {
        if let Some(base) = constant.name.strip_prefix(&markers.storage) {
            let expected = format!("{}{}", markers.human, base);
            match by_name.get(expected.as_str()) {
                Some(human) => pairs.push(DeclaredPair {
                    name: base.to_string(),
                    db: constant.value,
                    human: human.value,
                    db_span: constant.span,
                    human_span: human.span,
                }),
                None => errors.push(syn::Error::new(
                    constant.span,
                    format!(
                        "storage constant `{}` has no human counterpart `{}`",
                        constant.name, expected
                    ),
                )),
            }
        } else if let Some(base) = constant.name.strip_prefix(&markers.human) {
            let expected = format!("{}{}", markers.storage, base);
            if !by_name.contains_key(expected.as_str()) {
                errors.push(syn::Error::new(
                    constant.span,
                    format!(
                        "human constant `{}` has no storage counterpart `{}`",
                        constant.name, expected
                    ),
                ));
            }
        }
    }

    errors.finish()?;
    Ok(pairs)
}

/// Reject a value used by two pairs on the same side.
pub fn check_unique(pairs: &[DeclaredPair<'_>]) -> syn::Result<()> {
    let mut errors = Errors::default();
    let mut storage: HashMap<&LiteralValue, &str> = HashMap::new();
    let mut human: HashMap<&LiteralValue, &str> = HashMap::new();

    for pair in pairs {
        if let Some(first) = storage.insert(pair.db, pair.name.as_str()) {
            errors.push(syn::Error::new(
                pair.db_span,
                format!("storage value {} is already used by `{}`", pair.db, first),
            ));
        }
        if let Some(first) = human.insert(pair.human, pair.name.as_str()) {
            errors.push(syn::Error::new(
                pair.human_span,
                format!("human value {} is already used by `{}`", pair.human, first),
            ));
        }
    }

    errors.finish()
}

/// Accumulates errors so every problem is reported at once.
#[derive(Default)]
pub struct Errors {
    combined: Option<syn::Error>,
}

impl Errors {
    pub fn push(&mut self, error: syn::Error) {
        match &mut self.combined {
            Some(existing) => existing.combine(error),
            None => self.combined = Some(error),
        }
    }

    pub fn finish(self) -> syn::Result<()> {
        match self.combined {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}
