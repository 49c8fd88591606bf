// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The `EnumMapper` trait every mapped enum type implements.
//!
//! Implementors supply one thing, a `'static` [`Mapping`]. Every operation is
//! a provided method over it, so a derived or hand-written type gets the full
//! surface for free:
//!
//! ```ignore
//! use enum_mapper::{EnumMapper, MapValue};
//!
//! let label = Status::from_db_to_human(1)?;            // "active"
//! let code = Status::from_human_to_db("inactive")?;    // 0
//! let rest = Status::allowed_db_values(&[MapValue::int(0)]);
//! ```
//!
//! Hand-written implementations keep the mapping in a `static` [`MappingCell`]
//! so it is built once per type:
//!
//! ```ignore
//! impl EnumMapper for Status {
//!     fn mapping() -> &'static Mapping {
//!         static MAPPING: MappingCell = MappingCell::new();
//!         MAPPING.get_or_init(|| Definition::from_pairs("Status", [/* pairs */]))
//!     }
//! }
//! ```
//!
//! [`MappingCell`]: crate::MappingCell

use indexmap::IndexMap;
use rand::Rng;

use crate::{MapValue, Mapping, UndefinedMapValue};

pub trait EnumMapper {
    /// The type's bidirectional mapping, built on first use.
    fn mapping() -> &'static Mapping;

    /// Name reported in [`UndefinedMapValue`].
    fn mapper_name() -> &'static str {
        Self::mapping().name()
    }

    fn from_db_to_human(value: impl Into<MapValue>) -> Result<&'static MapValue, UndefinedMapValue> {
        Self::mapping().from_db_to_human(&value.into())
    }

    fn from_human_to_db(value: impl Into<MapValue>) -> Result<&'static MapValue, UndefinedMapValue> {
        Self::mapping().from_human_to_db(&value.into())
    }

    fn map() -> &'static IndexMap<MapValue, MapValue> {
        Self::mapping().map()
    }

    fn allowed_db_values(except: &[MapValue]) -> Vec<&'static MapValue> {
        Self::mapping().allowed_db_values(except)
    }

    fn allowed_human_values(except: &[MapValue]) -> Vec<&'static MapValue> {
        Self::mapping().allowed_human_values(except)
    }

    fn random_db_value(except: &[MapValue]) -> Option<&'static MapValue> {
        Self::mapping().random_db_value(except)
    }

    fn random_human_value(except: &[MapValue]) -> Option<&'static MapValue> {
        Self::mapping().random_human_value(except)
    }

    fn random_db_value_with<R: Rng + ?Sized>(
        rng: &mut R,
        except: &[MapValue],
    ) -> Option<&'static MapValue> {
        Self::mapping().random_db_value_with(rng, except)
    }

    fn random_human_value_with<R: Rng + ?Sized>(
        rng: &mut R,
        except: &[MapValue],
    ) -> Option<&'static MapValue> {
        Self::mapping().random_human_value_with(rng, except)
    }
}

/// An enum whose variants each stand for one pair of its mapping.
///
/// Emitted by `#[derive(EnumMapper)]` alongside [`EnumMapper`].
pub trait MappedVariant: EnumMapper + Copy + Sized + 'static {
    /// Every variant, in declaration order.
    fn variants() -> &'static [Self];

    fn db_value(self) -> &'static MapValue;

    fn human_value(self) -> &'static MapValue;

    /// The variant whose storage value is `value`.
    fn from_db(value: impl Into<MapValue>) -> Result<Self, UndefinedMapValue> {
        let value = value.into();
        Self::variants()
            .iter()
            .copied()
            .find(|variant| *variant.db_value() == value)
            .ok_or_else(|| UndefinedMapValue::new(Self::mapper_name(), value))
    }

    /// The variant whose human value is `value`.
    fn from_human(value: impl Into<MapValue>) -> Result<Self, UndefinedMapValue> {
        let value = value.into();
        Self::variants()
            .iter()
            .copied()
            .find(|variant| *variant.human_value() == value)
            .ok_or_else(|| UndefinedMapValue::new(Self::mapper_name(), value))
    }
}
