//! Type resolution, entity registration, and schema derivation for ormkit.
//!
//! This crate provides:
//! - [`TypeResolver`] - Native type to storage kind table
//! - [`PropertyKind`] - Classification of declared property shapes
//! - [`SchemaRegistry`] - Cycle-safe entity registration
//! - [`Schema`] - Immutable derived schema with structural sharing
//! - `serialize` - `MessagePack` export (with the `serde` feature)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod descriptor;
pub mod kind;
pub mod registry;
pub mod resolver;
pub mod schema;
#[cfg(feature = "serde")]
pub mod serialize;

pub use config::{RegistryConfig, UnknownScalarPolicy};
pub use descriptor::{
    AttributeDescriptor, DeleteRule, Descriptor, RelationshipDescriptor, UNBOUNDED,
};
pub use kind::PropertyKind;
pub use registry::{RegistrationMode, RegistrationRecord, RegistrationState, SchemaRegistry};
pub use resolver::TypeResolver;
pub use schema::{EntityDescription, Schema, SchemaReport};
