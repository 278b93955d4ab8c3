//! Entity types and registration indices.

use std::fmt;
use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::property::PropertyDeclaration;
use crate::token::TypeToken;

/// A record type whose properties are mapped into a persistence schema.
///
/// # Example
///
/// ```
/// use ormkit_foundation::{Entity, PropertyDeclaration};
///
/// struct Person;
///
/// impl Entity for Person {
///     const NAME: &'static str = "Person";
///
///     fn properties() -> Vec<PropertyDeclaration> {
///         vec![
///             PropertyDeclaration::scalar::<String>("name"),
///             PropertyDeclaration::scalar::<i64>("age"),
///             PropertyDeclaration::optional_to_one::<Person>("bestFriend"),
///         ]
///     }
/// }
/// ```
pub trait Entity: 'static {
    /// Entity name used in the derived schema.
    const NAME: &'static str;

    /// Declared properties, in schema order.
    fn properties() -> Vec<PropertyDeclaration>;
}

/// Handle to a declared entity type.
///
/// Carries the type's identity, its schema name, and the function that
/// enumerates its properties. Two handles are equal when their tokens are.
#[derive(Copy, Clone)]
pub struct EntityType {
    token: TypeToken,
    name: &'static str,
    properties: fn() -> Vec<PropertyDeclaration>,
}

impl EntityType {
    /// Returns the handle for an [`Entity`] implementation.
    #[must_use]
    pub fn of<E: Entity>() -> Self {
        Self {
            token: TypeToken::of::<E>(),
            name: E::NAME,
            properties: E::properties,
        }
    }

    /// Creates a handle from its parts.
    ///
    /// Used by declaration layers that do not go through the [`Entity`] trait.
    #[must_use]
    pub const fn new(
        token: TypeToken,
        name: &'static str,
        properties: fn() -> Vec<PropertyDeclaration>,
    ) -> Self {
        Self {
            token,
            name,
            properties,
        }
    }

    /// Returns the identity token.
    #[must_use]
    pub const fn token(&self) -> TypeToken {
        self.token
    }

    /// Returns the schema name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Enumerates the declared properties.
    #[must_use]
    pub fn properties(&self) -> Vec<PropertyDeclaration> {
        (self.properties)()
    }
}

impl PartialEq for EntityType {
    fn eq(&self, other: &Self) -> bool {
        self.token == other.token
    }
}

impl Eq for EntityType {}

impl Hash for EntityType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.token.hash(state);
    }
}

impl fmt::Debug for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntityType({})", self.name)
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Index of an entity's registration record within one schema build.
///
/// Relationships refer to their targets by index, never by ownership, so a
/// target may still be partially registered when the reference is created.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EntityIndex(u32);

impl EntityIndex {
    /// Creates an index from its raw value.
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Returns the raw index.
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0
    }

    /// Returns the index as a slot position.
    #[must_use]
    pub const fn slot(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for EntityIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntityIndex({})", self.0)
    }
}

impl fmt::Display for EntityIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
