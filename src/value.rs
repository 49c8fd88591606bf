// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The value model shared by both sides of a mapping.
//!
//! A storage code and a display label are both a [`MapValue`]: an integer or a
//! string. Equality is exact, kind included, so `1` and `"1"` never match.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::num::TryFromIntError;

/// A storage or human value declared on an enum mapper.
///
/// Serializes untagged: a JSON number for [`MapValue::Int`] and a JSON string
/// for [`MapValue::Str`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MapValue {
    Int(i64),
    Str(Cow<'static, str>),
}

impl MapValue {
    /// Integer value, usable in `const` and `static` items.
    pub const fn int(value: i64) -> Self {
        MapValue::Int(value)
    }

    /// String value borrowed from a literal, usable in `const` and `static` items.
    pub const fn text(value: &'static str) -> Self {
        MapValue::Str(Cow::Borrowed(value))
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            MapValue::Int(value) => Some(*value),
            MapValue::Str(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            MapValue::Int(_) => None,
            MapValue::Str(value) => Some(value),
        }
    }

    /// Name of the value kind, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            MapValue::Int(_) => "int",
            MapValue::Str(_) => "string",
        }
    }
}

impl fmt::Display for MapValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapValue::Int(value) => write!(f, "{}", value),
            MapValue::Str(value) => f.write_str(value),
        }
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for MapValue {
                fn from(value: $ty) -> Self {
                    MapValue::Int(i64::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! impl_try_from_wide_int {
    ($($ty:ty),*) => {
        $(
            impl TryFrom<$ty> for MapValue {
                type Error = TryFromIntError;

                fn try_from(value: $ty) -> Result<Self, Self::Error> {
                    i64::try_from(value).map(MapValue::Int)
                }
            }
        )*
    };
}

impl_try_from_wide_int!(u64, usize);

impl From<&'static str> for MapValue {
    fn from(value: &'static str) -> Self {
        MapValue::text(value)
    }
}

impl From<String> for MapValue {
    fn from(value: String) -> Self {
        MapValue::Str(Cow::Owned(value))
    }
}

impl From<Cow<'static, str>> for MapValue {
    fn from(value: Cow<'static, str>) -> Self {
        MapValue::Str(value)
    }
}

impl PartialEq<i64> for MapValue {
    fn eq(&self, other: &i64) -> bool {
        self.as_int() == Some(*other)
    }
}

impl PartialEq<str> for MapValue {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == Some(other)
    }
}

impl PartialEq<&str> for MapValue {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}
