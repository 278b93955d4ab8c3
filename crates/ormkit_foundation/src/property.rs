//! Property declarations.

use crate::entity::Entity;
use crate::types::DeclaredType;

/// One named field of an entity type, as declared by application code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PropertyDeclaration {
    /// Property name, unique within its entity.
    pub name: String,
    /// Declared type shape.
    pub ty: DeclaredType,
}

impl PropertyDeclaration {
    /// Creates a declaration with an arbitrary type shape.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: DeclaredType) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }

    /// Declares a required scalar `T`.
    #[must_use]
    pub fn scalar<T: 'static>(name: impl Into<String>) -> Self {
        Self::new(name, DeclaredType::scalar::<T>())
    }

    /// Declares an optional scalar `T`.
    #[must_use]
    pub fn optional<T: 'static>(name: impl Into<String>) -> Self {
        Self::new(name, DeclaredType::optional(DeclaredType::scalar::<T>()))
    }

    /// Declares an ordered collection of scalar `T`.
    #[must_use]
    pub fn array<T: 'static>(name: impl Into<String>) -> Self {
        Self::new(name, DeclaredType::array(DeclaredType::scalar::<T>()))
    }

    /// Declares a set of scalar `T`.
    #[must_use]
    pub fn set<T: 'static>(name: impl Into<String>) -> Self {
        Self::new(name, DeclaredType::set(DeclaredType::scalar::<T>()))
    }

    /// Declares a required reference to entity `E`.
    #[must_use]
    pub fn to_one<E: Entity>(name: impl Into<String>) -> Self {
        Self::new(name, DeclaredType::entity::<E>())
    }

    /// Declares an optional reference to entity `E`.
    #[must_use]
    pub fn optional_to_one<E: Entity>(name: impl Into<String>) -> Self {
        Self::new(name, DeclaredType::optional(DeclaredType::entity::<E>()))
    }

    /// Declares an ordered collection of references to entity `E`.
    #[must_use]
    pub fn to_many<E: Entity>(name: impl Into<String>) -> Self {
        Self::new(name, DeclaredType::array(DeclaredType::entity::<E>()))
    }
}
