//! Declared property types and storage kinds.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::entity::{Entity, EntityType};
use crate::token::TypeToken;

/// Storage primitive chosen for an attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StorageKind {
    /// 64-bit signed integer column.
    Integer,
    /// String column.
    String,
    /// 32-bit floating point column.
    Float,
    /// 64-bit floating point column.
    Double,
    /// Boolean column.
    Boolean,
    /// No native column type; stored through an opaque serialized form.
    Opaque,
}

impl StorageKind {
    /// Returns true for the opaque fallback.
    #[must_use]
    pub const fn is_opaque(self) -> bool {
        matches!(self, Self::Opaque)
    }
}

impl fmt::Display for StorageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Integer => "integer",
            Self::String => "string",
            Self::Float => "float",
            Self::Double => "double",
            Self::Boolean => "boolean",
            Self::Opaque => "opaque",
        };
        f.write_str(name)
    }
}

/// Collection flavor of a declared collection property.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CollectionShape {
    /// Ordered sequence (`Vec<T>`).
    Array,
    /// Unordered unique values (`HashSet<T>`).
    Set,
}

/// Type shape a property was declared with.
///
/// This is the input side of schema derivation: application code describes
/// each property as a tree of wrappers around a scalar or an entity.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum DeclaredType {
    /// Native scalar value.
    Scalar(TypeToken),
    /// Reference to another entity.
    Entity(EntityType),
    /// Optional value (may be absent).
    Optional(Box<DeclaredType>),
    /// Ordered collection.
    Array(Box<DeclaredType>),
    /// Unordered set.
    Set(Box<DeclaredType>),
}

impl DeclaredType {
    /// Creates a scalar type for `T`.
    #[must_use]
    pub fn scalar<T: 'static>() -> Self {
        Self::Scalar(TypeToken::of::<T>())
    }

    /// Creates an entity reference type for `E`.
    #[must_use]
    pub fn entity<E: Entity>() -> Self {
        Self::Entity(EntityType::of::<E>())
    }

    /// Wraps a type as optional.
    #[must_use]
    pub fn optional(inner: DeclaredType) -> Self {
        Self::Optional(Box::new(inner))
    }

    /// Wraps a type as an ordered collection.
    #[must_use]
    pub fn array(element: DeclaredType) -> Self {
        Self::Array(Box::new(element))
    }

    /// Wraps a type as a set.
    #[must_use]
    pub fn set(element: DeclaredType) -> Self {
        Self::Set(Box::new(element))
    }

    /// Returns the collection shape if this is a collection.
    #[must_use]
    pub const fn collection_shape(&self) -> Option<CollectionShape> {
        match self {
            Self::Array(_) => Some(CollectionShape::Array),
            Self::Set(_) => Some(CollectionShape::Set),
            _ => None,
        }
    }

    /// Returns true if this type can be absent.
    #[must_use]
    pub const fn is_optional(&self) -> bool {
        matches!(self, Self::Optional(_))
    }

    /// Number of wrappers around the innermost scalar or entity.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Scalar(_) | Self::Entity(_) => 0,
            Self::Optional(inner) | Self::Array(inner) | Self::Set(inner) => 1 + inner.depth(),
        }
    }
}

impl fmt::Debug for DeclaredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(t) => write!(f, "{t}"),
            Self::Entity(e) => write!(f, "entity<{e}>"),
            Self::Optional(t) => write!(f, "option<{t:?}>"),
            Self::Array(t) => write!(f, "array<{t:?}>"),
            Self::Set(t) => write!(f, "set<{t:?}>"),
        }
    }
}

impl fmt::Display for DeclaredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
