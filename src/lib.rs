//! ormkit - Typed schema derivation for object-relational entity graphs
//!
//! This crate re-exports all layers of ormkit for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: ormkit_schema     - Type resolution, entity registration, schemas
//! Layer 0: ormkit_foundation - Core types (TypeToken, EntityType, Error)
//! ```

pub use ormkit_foundation as foundation;
pub use ormkit_schema as schema;
