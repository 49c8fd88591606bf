// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The derived bidirectional map and the operations served from it.
//!
//! A [`Mapping`] is built once from a validated [`Definition`] and never
//! changes afterwards. It keeps two declaration-ordered indexes, storage to
//! human and human to storage. Because the definition guarantees both sides
//! are unique, each lookup is a single probe and the first declared match is
//! the only match.
//!
//! # Operations
//!
//! | Operation                 | Returns                                  | On a miss            |
//! |---------------------------|------------------------------------------|----------------------|
//! | `from_db_to_human`        | the correlated human value               | `UndefinedMapValue`  |
//! | `from_human_to_db`        | the correlated storage value             | `UndefinedMapValue`  |
//! | `map`                     | storage → human, declaration order       | never fails          |
//! | `allowed_db_values`       | storage values minus exclusions          | never fails          |
//! | `allowed_human_values`    | human values minus exclusions            | never fails          |
//! | `random_db_value`         | uniform pick from the allowed set        | `None` when empty    |
//! | `random_human_value`      | uniform pick from the allowed set        | `None` when empty    |

use indexmap::IndexMap;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Serialize, Serializer};

use crate::{Definition, Direction, MapValue, Pair, UndefinedMapValue};

/// Bidirectional storage/human map for one enum type.
#[derive(Debug, Clone)]
pub struct Mapping {
    definition: Definition,
    forward: IndexMap<MapValue, MapValue>,
    reverse: IndexMap<MapValue, MapValue>,
}

impl Mapping {
    pub fn new(definition: Definition) -> Self {
        let pairs = definition.pairs();
        let mut forward = IndexMap::with_capacity(pairs.len());
        let mut reverse = IndexMap::with_capacity(pairs.len());

        for pair in pairs {
            forward.insert(pair.db.clone(), pair.human.clone());
            reverse.insert(pair.human.clone(), pair.db.clone());
        }

        tracing::debug!(
            mapper = definition.name(),
            pairs = forward.len(),
            "built enum mapping"
        );

        Self {
            definition,
            forward,
            reverse,
        }
    }

    /// Name of the enum type.
    pub fn name(&self) -> &str {
        self.definition.name()
    }

    pub fn definition(&self) -> &Definition {
        &self.definition
    }

    pub fn pairs(&self) -> &[Pair] {
        self.definition.pairs()
    }

    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// Storage value → human value, in storage declaration order.
    pub fn map(&self) -> &IndexMap<MapValue, MapValue> {
        &self.forward
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, MapValue, MapValue> {
        self.forward.iter()
    }

    pub fn db_values(&self) -> impl Iterator<Item = &MapValue> + '_ {
        self.forward.keys()
    }

    pub fn human_values(&self) -> impl Iterator<Item = &MapValue> + '_ {
        self.forward.values()
    }

    pub fn contains_db(&self, value: &MapValue) -> bool {
        self.forward.contains_key(value)
    }

    pub fn contains_human(&self, value: &MapValue) -> bool {
        self.reverse.contains_key(value)
    }

    pub fn from_db_to_human(&self, value: &MapValue) -> Result<&MapValue, UndefinedMapValue> {
        self.convert(value, Direction::DbToHuman)
    }

    pub fn from_human_to_db(&self, value: &MapValue) -> Result<&MapValue, UndefinedMapValue> {
        self.convert(value, Direction::HumanToDb)
    }

    /// Resolve `value` on the `direction`'s source side to its counterpart.
    pub fn convert(
        &self,
        value: &MapValue,
        direction: Direction,
    ) -> Result<&MapValue, UndefinedMapValue> {
        let index = match direction {
            Direction::DbToHuman => &self.forward,
            Direction::HumanToDb => &self.reverse,
        };

        index.get(value).ok_or_else(|| {
            tracing::debug!(
                mapper = self.name(),
                %value,
                %direction,
                "no mapping for value"
            );
            UndefinedMapValue::new(self.definition.name_cow().clone(), value.clone())
        })
    }

    /// All storage values not listed in `except`, in declaration order.
    pub fn allowed_db_values(&self, except: &[MapValue]) -> Vec<&MapValue> {
        allowed(self.forward.keys(), except)
    }

    /// All human values not listed in `except`, in declaration order.
    pub fn allowed_human_values(&self, except: &[MapValue]) -> Vec<&MapValue> {
        allowed(self.forward.values(), except)
    }

    pub fn random_db_value(&self, except: &[MapValue]) -> Option<&MapValue> {
        self.random_db_value_with(&mut rand::thread_rng(), except)
    }

    pub fn random_human_value(&self, except: &[MapValue]) -> Option<&MapValue> {
        self.random_human_value_with(&mut rand::thread_rng(), except)
    }

    /// Uniformly pick one allowed storage value using `rng`.
    pub fn random_db_value_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        except: &[MapValue],
    ) -> Option<&MapValue> {
        self.pick(rng, self.allowed_db_values(except))
    }

    /// Uniformly pick one allowed human value using `rng`.
    pub fn random_human_value_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        except: &[MapValue],
    ) -> Option<&MapValue> {
        self.pick(rng, self.allowed_human_values(except))
    }

    fn pick<'a, R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        candidates: Vec<&'a MapValue>,
    ) -> Option<&'a MapValue> {
        let picked = candidates.choose(rng).copied();
        if picked.is_none() {
            tracing::trace!(mapper = self.name(), "no candidates left after exclusions");
        }
        picked
    }
}

impl<'a> IntoIterator for &'a Mapping {
    type Item = (&'a MapValue, &'a MapValue);
    type IntoIter = indexmap::map::Iter<'a, MapValue, MapValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for Mapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.definition.serialize(serializer)
    }
}

fn allowed<'a>(
    values: impl Iterator<Item = &'a MapValue>,
    except: &[MapValue],
) -> Vec<&'a MapValue> {
    values.filter(|value| !except.contains(*value)).collect()
}
