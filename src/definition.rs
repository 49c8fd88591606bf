// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Enum definitions: the declared, validated list of correlated pairs.
//!
//! A definition comes from one of two places. [`Definition::from_pairs`] takes
//! pairs that are already correlated (what `#[derive(EnumMapper)]` emits).
//! [`Definition::from_constants`] takes a flat constant table and correlates it
//! by name: every `DB_X` must have a `HUMAN_X` and the other way round.
//!
//! Either way the result satisfies the same invariants, checked once here:
//!
//! - every storage constant has a human counterpart and vice versa
//! - storage values are unique
//! - human values are unique
//!
//! After construction nothing re-checks them; [`Mapping`](crate::Mapping)
//! relies on them for its one-to-one indexes.

use indexmap::map::Entry;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use crate::{DefinitionError, MapValue};

/// The prefix pair that tags constant names as storage or human values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Markers {
    storage: Cow<'static, str>,
    human: Cow<'static, str>,
}

impl Markers {
    pub const DEFAULT_STORAGE: &'static str = "DB_";
    pub const DEFAULT_HUMAN: &'static str = "HUMAN_";

    pub const fn new(storage: &'static str, human: &'static str) -> Self {
        Self {
            storage: Cow::Borrowed(storage),
            human: Cow::Borrowed(human),
        }
    }

    pub fn storage(&self) -> &str {
        &self.storage
    }

    pub fn human(&self) -> &str {
        &self.human
    }

    /// Both markers must be non-empty and neither may be a prefix of the other.
    pub fn validate(&self) -> Result<(), DefinitionError> {
        let overlapping = self.storage.starts_with(self.human.as_ref())
            || self.human.starts_with(self.storage.as_ref());
        if self.storage.is_empty() || self.human.is_empty() || overlapping {
            return Err(DefinitionError::InvalidMarkers {
                storage: self.storage.to_string(),
                human: self.human.to_string(),
            });
        }
        Ok(())
    }

    /// Split a constant name into its side and base name.
    ///
    /// Names that carry neither marker are not part of the mapping.
    pub fn classify<'a>(&self, name: &'a str) -> Option<(Side, &'a str)> {
        if let Some(base) = name.strip_prefix(self.storage.as_ref()) {
            Some((Side::Storage, base))
        } else {
            name.strip_prefix(self.human.as_ref())
                .map(|base| (Side::Human, base))
        }
    }

    /// Build the constant name for `base` on the given side.
    pub fn constant_name(&self, side: Side, base: &str) -> String {
        match side {
            Side::Storage => format!("{}{}", self.storage, base),
            Side::Human => format!("{}{}", self.human, base),
        }
    }
}

impl Default for Markers {
    fn default() -> Self {
        Markers::new(Self::DEFAULT_STORAGE, Self::DEFAULT_HUMAN)
    }
}

/// Which half of a pair a constant belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Storage,
    Human,
}

impl Side {
    pub fn counterpart(self) -> Self {
        match self {
            Side::Storage => Side::Human,
            Side::Human => Side::Storage,
        }
    }
}

/// One enum member: a storage value and the human value it denotes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pair {
    /// Base name shared by both constants (`ACTIVE` for `DB_ACTIVE`/`HUMAN_ACTIVE`).
    pub name: Cow<'static, str>,
    pub db: MapValue,
    pub human: MapValue,
}

impl Pair {
    pub const fn new(name: &'static str, db: MapValue, human: MapValue) -> Self {
        Self {
            name: Cow::Borrowed(name),
            db,
            human,
        }
    }
}

/// A validated enum definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Definition {
    name: Cow<'static, str>,
    pairs: Vec<Pair>,
}

impl Definition {
    /// Build a definition from already-correlated pairs, in declaration order.
    pub fn from_pairs(
        name: impl Into<Cow<'static, str>>,
        pairs: impl IntoIterator<Item = Pair>,
    ) -> Result<Self, DefinitionError> {
        let name = name.into();
        let pairs: Vec<Pair> = pairs.into_iter().collect();

        check_unique(&name, &pairs, Side::Storage)?;
        check_unique(&name, &pairs, Side::Human)?;

        Ok(Self { name, pairs })
    }

    /// Correlate a constant table by name.
    ///
    /// Walks the storage constants in declaration order; for each `DB_X` the
    /// value of `HUMAN_X` becomes its human value. Constants carrying neither
    /// marker are ignored.
    pub fn from_constants(
        name: impl Into<Cow<'static, str>>,
        constants: &[(&'static str, MapValue)],
        markers: &Markers,
    ) -> Result<Self, DefinitionError> {
        let name = name.into();
        markers.validate()?;

        let mut table: IndexMap<&'static str, &MapValue> = IndexMap::with_capacity(constants.len());
        for (constant, value) in constants {
            match table.entry(*constant) {
                Entry::Occupied(_) => {
                    return Err(DefinitionError::DuplicateConstant {
                        mapper: name,
                        constant: constant.to_string(),
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(value);
                }
            }
        }

        let mut pairs = Vec::new();
        for (&constant, &value) in &table {
            let Some((side, base)) = markers.classify(constant) else {
                continue;
            };
            let expected = markers.constant_name(side.counterpart(), base);
            let counterpart = table.get(expected.as_str());

            match (side, counterpart) {
                (Side::Storage, Some(&human)) => pairs.push(Pair {
                    name: Cow::Borrowed(base),
                    db: value.clone(),
                    human: human.clone(),
                }),
                (Side::Human, Some(_)) => {}
                (Side::Storage, None) => {
                    return Err(DefinitionError::MissingHuman {
                        mapper: name,
                        constant: constant.to_string(),
                        expected,
                    });
                }
                (Side::Human, None) => {
                    return Err(DefinitionError::MissingStorage {
                        mapper: name,
                        constant: constant.to_string(),
                        expected,
                    });
                }
            }
        }

        Self::from_pairs(name, pairs)
    }

    /// Name of the enum type, reported in errors.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }

    pub(crate) fn name_cow(&self) -> &Cow<'static, str> {
        &self.name
    }
}

fn check_unique(mapper: &Cow<'static, str>, pairs: &[Pair], side: Side) -> Result<(), DefinitionError> {
    let mut seen: IndexMap<&MapValue, &str> = IndexMap::with_capacity(pairs.len());

    for pair in pairs {
        let value = match side {
            Side::Storage => &pair.db,
            Side::Human => &pair.human,
        };
        if let Some(first) = seen.insert(value, &*pair.name) {
            let value = value.clone();
            let first = first.to_string();
            let second = pair.name.to_string();
            let mapper = mapper.clone();
            return Err(match side {
                Side::Storage => DefinitionError::DuplicateStorageValue {
                    mapper,
                    value,
                    first,
                    second,
                },
                Side::Human => DefinitionError::DuplicateHumanValue {
                    mapper,
                    value,
                    first,
                    second,
                },
            });
        }
    }

    Ok(())
}
