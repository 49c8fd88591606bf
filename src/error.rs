// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! [`UndefinedMapValue`] is the only error callers are expected to handle: it
//! means the queried value is outside the enum's domain. [`DefinitionError`]
//! means the enum itself is declared wrong. The macros turn those into compile
//! errors, so at runtime they only surface from hand-built definitions.

use std::borrow::Cow;
use std::fmt;

use crate::MapValue;

/// Which way a conversion was going.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    DbToHuman,
    HumanToDb,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::DbToHuman => f.write_str("db_to_human"),
            Direction::HumanToDb => f.write_str("human_to_db"),
        }
    }
}

/// A queried value has no counterpart in the mapper.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("mapper \"{mapper}\" does not contain a mapping for the value \"{value}\"")]
pub struct UndefinedMapValue {
    mapper: Cow<'static, str>,
    value: MapValue,
}

impl UndefinedMapValue {
    pub fn new(mapper: impl Into<Cow<'static, str>>, value: MapValue) -> Self {
        Self {
            mapper: mapper.into(),
            value,
        }
    }

    /// Name of the enum type that was queried.
    pub fn mapper(&self) -> &str {
        &self.mapper
    }

    /// The value that had no mapping.
    pub fn value(&self) -> &MapValue {
        &self.value
    }
}

/// An enum definition violates the correlation or uniqueness invariants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DefinitionError {
    /// A storage constant has no human constant with the same suffix.
    #[error("mapper \"{mapper}\": storage constant `{constant}` has no human counterpart `{expected}`")]
    MissingHuman {
        mapper: Cow<'static, str>,
        constant: String,
        expected: String,
    },
    /// A human constant has no storage constant with the same suffix.
    #[error("mapper \"{mapper}\": human constant `{constant}` has no storage counterpart `{expected}`")]
    MissingStorage {
        mapper: Cow<'static, str>,
        constant: String,
        expected: String,
    },
    /// Two pairs share a storage value.
    #[error("mapper \"{mapper}\": storage value \"{value}\" is declared by both `{first}` and `{second}`")]
    DuplicateStorageValue {
        mapper: Cow<'static, str>,
        value: MapValue,
        first: String,
        second: String,
    },
    /// Two pairs share a human value.
    #[error("mapper \"{mapper}\": human value \"{value}\" is declared by both `{first}` and `{second}`")]
    DuplicateHumanValue {
        mapper: Cow<'static, str>,
        value: MapValue,
        first: String,
        second: String,
    },
    /// The same constant name appears twice in a constant table.
    #[error("mapper \"{mapper}\": constant `{constant}` is declared more than once")]
    DuplicateConstant {
        mapper: Cow<'static, str>,
        constant: String,
    },
    /// Marker prefixes are empty or overlap, so a name could belong to both sides.
    #[error("markers \"{storage}\" and \"{human}\" must be non-empty and neither may prefix the other")]
    InvalidMarkers { storage: String, human: String },
}
