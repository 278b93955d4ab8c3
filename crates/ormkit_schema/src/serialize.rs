//! Schema export using `MessagePack`.
//!
//! Encodes a finished [`Schema`] for hand-off to a persistence layer running
//! elsewhere.

use ormkit_foundation::{Error, ErrorKind, Result};

use crate::schema::Schema;

/// Serializes a schema to bytes using `MessagePack` format.
///
/// Uses named serialization to preserve struct field names.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_bytes(schema: &Schema) -> Result<Vec<u8>> {
    rmp_serde::to_vec_named(schema)
        .map_err(|e| Error::new(ErrorKind::SerializationError(e.to_string())))
}

/// Deserializes a schema from `MessagePack` bytes.
///
/// # Errors
///
/// Returns an error if deserialization fails.
pub fn from_bytes(bytes: &[u8]) -> Result<Schema> {
    rmp_serde::from_slice(bytes)
        .map_err(|e| Error::new(ErrorKind::SerializationError(e.to_string())))
}
