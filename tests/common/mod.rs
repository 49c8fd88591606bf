//! Shared test fixtures: one mapper per declaration style.

#![allow(dead_code)]

use enum_mapper::{enum_constants, EnumMapper, MapValue};

// ============================================================================
// CONSTANT TABLES
// ============================================================================

enum_constants! {
    /// Account status, integer codes with string labels.
    #[derive(Debug)]
    pub struct Status {
        DB_ACTIVE = 1,
        DB_INACTIVE = 0,
        HUMAN_ACTIVE = "active",
        HUMAN_INACTIVE = "inactive",
    }
}

enum_constants! {
    /// Order lifecycle with string codes, declared out of order on purpose.
    pub struct OrderState {
        HUMAN_NEW = "New order",
        DB_NEW = "N",
        DB_PAID = "P",
        /// Shipped orders are immutable.
        DB_SHIPPED = "S",
        DB_CANCELLED = -1,
        HUMAN_PAID = "Paid",
        HUMAN_SHIPPED = "Shipped",
        HUMAN_CANCELLED = "Cancelled",
        SCHEMA_VERSION = 3,
    }
}

enum_constants! {
    #[markers(storage = "CODE_", human = "LABEL_")]
    pub struct Color {
        CODE_RED = "r",
        CODE_GREEN = "g",
        LABEL_RED = "Red",
        LABEL_GREEN = "Green",
    }
}

enum_constants! {
    pub struct Nothing {}
}

// ============================================================================
// DERIVED ENUMS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, enum_mapper::EnumMapper)]
pub enum Priority {
    #[mapper(db = 10, human = "Low")]
    Low,
    #[mapper(db = 20, human = "Normal")]
    Normal,
    #[mapper(db = 30, human = "High")]
    High,
    #[mapper(db = -1, human = "Unset")]
    Unset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, enum_mapper::EnumMapper)]
#[mapper(name = "Visibility")]
pub enum Access {
    #[mapper(db = "pub", human = "Public")]
    Public,
    #[mapper(db = "prv", human = "Private")]
    Private,
    #[mapper(db = 0, human = 0)]
    Hidden,
}

// ============================================================================
// HELPERS
// ============================================================================

/// Storage → human entries of a mapper, in map order.
pub fn entries<M: EnumMapper>() -> Vec<(MapValue, MapValue)> {
    M::map()
        .iter()
        .map(|(db, human)| (db.clone(), human.clone()))
        .collect()
}

pub fn int(value: i64) -> MapValue {
    MapValue::int(value)
}

pub fn text(value: &'static str) -> MapValue {
    MapValue::text(value)
}
