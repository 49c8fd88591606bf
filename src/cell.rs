// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Type-scoped, build-once storage for a [`Mapping`].
//!
//! Each enum type owns one `static MappingCell`. The first caller builds the
//! mapping; concurrent first callers block until it is built and then all see
//! the same value. Nothing can observe a half-built mapping.

use std::sync::OnceLock;

use crate::{Definition, DefinitionError, Mapping};

pub struct MappingCell {
    cell: OnceLock<Mapping>,
}

impl MappingCell {
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
        }
    }

    /// Return the cached mapping, building it from `define` on first use.
    ///
    /// An invalid definition is a bug in the enum declaration, not bad input,
    /// so it panics instead of returning an error.
    pub fn get_or_init<F>(&self, define: F) -> &Mapping
    where
        F: FnOnce() -> Result<Definition, DefinitionError>,
    {
        self.cell.get_or_init(|| match define() {
            Ok(definition) => Mapping::new(definition),
            Err(err) => {
                tracing::error!(error = %err, "invalid enum mapper definition");
                panic!("invalid enum mapper definition: {}", err);
            }
        })
    }

    /// The mapping, if it has been built already.
    pub fn get(&self) -> Option<&Mapping> {
        self.cell.get()
    }
}

impl Default for MappingCell {
    fn default() -> Self {
        Self::new()
    }
}
