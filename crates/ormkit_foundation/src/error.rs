//! Error types for ormkit.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

use crate::types::DeclaredType;

/// The main error type for ormkit operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an unsupported property kind error.
    #[must_use]
    pub fn unsupported_property_kind(declared: &DeclaredType) -> Self {
        Self::new(ErrorKind::UnsupportedPropertyKind(declared.to_string()))
    }

    /// Creates an unknown scalar type error.
    #[must_use]
    pub fn unknown_scalar_type(type_name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownScalarType(type_name.into()))
    }

    /// Creates a duplicate property error.
    #[must_use]
    pub fn duplicate_property(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::DuplicateProperty(name.into()))
    }

    /// Creates a duplicate entity name error.
    #[must_use]
    pub fn duplicate_entity_name(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::DuplicateEntityName(name.into()))
    }

    /// Creates an entity not found error.
    #[must_use]
    pub fn entity_not_found(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::EntityNotFound(name.into()))
    }

    /// Returns the entity named in the context, if any.
    #[must_use]
    pub fn entity(&self) -> Option<&str> {
        self.context.as_ref().and_then(|c| c.entity.as_deref())
    }

    /// Returns the property named in the context, if any.
    #[must_use]
    pub fn property(&self) -> Option<&str> {
        self.context.as_ref().and_then(|c| c.property.as_deref())
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Declared type shape matches no supported property kind.
    #[error("unsupported property kind: {0}")]
    UnsupportedPropertyKind(String),

    /// Scalar type has no storage mapping and opaque fallback is disabled.
    #[error("no storage kind registered for scalar type {0}")]
    UnknownScalarType(String),

    /// Property name already used within the same entity.
    #[error("duplicate property: {0}")]
    DuplicateProperty(String),

    /// Two distinct entity types share a schema name.
    #[error("duplicate entity name: {0}")]
    DuplicateEntityName(String),

    /// Entity is not part of the schema.
    #[error("entity not found: {0}")]
    EntityNotFound(String),

    /// Schema encoding or decoding failed.
    #[error("serialization error: {0}")]
    SerializationError(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Entity being described.
    pub entity: Option<String>,
    /// Property being described.
    pub property: Option<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the entity name.
    #[must_use]
    pub fn with_entity(mut self, entity: impl Into<String>) -> Self {
        self.entity = Some(entity.into());
        self
    }

    /// Sets the property name.
    #[must_use]
    pub fn with_property(mut self, property: impl Into<String>) -> Self {
        self.property = Some(property.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.entity, &self.property) {
            (Some(entity), Some(property)) => write!(f, "at {entity}.{property}"),
            (Some(entity), None) => write!(f, "at {entity}"),
            (None, Some(property)) => write!(f, "at property {property}"),
            (None, None) => Ok(()),
        }
    }
}

/// Result type for ormkit operations.
pub type Result<T> = std::result::Result<T, Error>;
