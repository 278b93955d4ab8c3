//! Core types, type tokens, and errors for ormkit.
//!
//! This crate provides:
//! - [`TypeToken`] - Runtime identity of native types
//! - [`Entity`] / [`EntityType`] - Declared record types
//! - [`EntityIndex`] - Registration indices used by relationships
//! - [`DeclaredType`] / [`PropertyDeclaration`] - Property declarations
//! - [`StorageKind`] - Storage primitives for attributes
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod entity;
pub mod error;
pub mod property;
pub mod token;
pub mod types;

pub use entity::{Entity, EntityIndex, EntityType};
pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use property::PropertyDeclaration;
pub use token::TypeToken;
pub use types::{CollectionShape, DeclaredType, StorageKind};
