// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bidirectional mapping between storage codes and human labels.
//!
//! An enumerated value usually lives twice: as a compact code in the database
//! and as a label on screen. This crate keeps both in one declaration and
//! derives the lookup tables from it, so the two can never drift apart.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌───────────────┐     ┌──────────────┐
//! │  value.rs    │────▶│ definition.rs │────▶│  mapping.rs  │
//! │  (MapValue)  │     │ (Pair, Markers│     │  (Mapping:   │
//! │              │     │  validation)  │     │  lookups)    │
//! └──────────────┘     └───────────────┘     └──────────────┘
//!                                                   │
//!                                                   ▼
//!                      ┌───────────────┐     ┌──────────────┐
//!                      │   cell.rs     │────▶│  mapper.rs   │
//!                      │ (MappingCell: │     │ (EnumMapper, │
//!                      │  build once)  │     │ MappedVariant│
//!                      └───────────────┘     └──────────────┘
//! ```
//!
//! # Declaring a mapper
//!
//! Constants, correlated by their `DB_` / `HUMAN_` prefixes:
//!
//! ```ignore
//! use enum_mapper::{enum_constants, EnumMapper};
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
//! assert_eq!(Status::from_db_to_human(1)?, "active");
//! assert_eq!(Status::from_human_to_db("inactive")?, &0);
//! ```
//!
//! Or pairs declared directly on enum variants:
//!
//! ```ignore
//! use enum_mapper::{EnumMapper, MappedVariant};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, EnumMapper)]
//! enum Status {
//!     #[mapper(db = 1, human = "active")]
//!     Active,
//!     #[mapper(db = 0, human = "inactive")]
//!     Inactive,
//! }
//!
//! assert_eq!(Status::from_db(1)?, Status::Active);
//! ```
//!
//! Both macros check the declaration at compile time: a `DB_` constant
//! without its `HUMAN_` twin, or a value used twice on one side, is a compile
//! error rather than a silently incomplete map.

extern crate self as enum_mapper;

mod cell;
mod definition;
mod error;
mod mapper;
mod mapping;
mod value;

pub use cell::MappingCell;
pub use definition::{Definition, Markers, Pair, Side};
pub use error::{DefinitionError, Direction, UndefinedMapValue};
pub use mapper::{EnumMapper, MappedVariant};
pub use mapping::Mapping;
pub use value::MapValue;

#[cfg(feature = "derive")]
pub use enum_mapper_macros::{enum_constants, EnumMapper};
