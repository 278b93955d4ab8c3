//! Attribute and relationship descriptors.
//!
//! Descriptors are the output of schema derivation: one per declared property,
//! shaped for direct translation into a persistence framework's attribute and
//! relationship descriptions.

use ormkit_foundation::{EntityIndex, StorageKind};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// `max_count` value meaning "no upper bound".
pub const UNBOUNDED: u32 = 0;

/// Descriptor for a scalar or opaque-stored property.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AttributeDescriptor {
    /// Property name.
    pub name: String,
    /// Storage primitive.
    pub storage: StorageKind,
    /// Whether the value may be absent.
    pub is_optional: bool,
}

impl AttributeDescriptor {
    /// Creates a required attribute.
    #[must_use]
    pub fn required(name: impl Into<String>, storage: StorageKind) -> Self {
        Self {
            name: name.into(),
            storage,
            is_optional: false,
        }
    }

    /// Creates an optional attribute.
    #[must_use]
    pub fn optional(name: impl Into<String>, storage: StorageKind) -> Self {
        Self {
            name: name.into(),
            storage,
            is_optional: true,
        }
    }
}

/// Descriptor for a reference from one entity to another.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RelationshipDescriptor {
    /// Property name.
    pub name: String,
    /// Registration index of the target entity.
    pub target: EntityIndex,
    /// Schema name of the target entity.
    pub target_name: String,
    /// Whether the reference may be absent.
    pub is_optional: bool,
    /// Minimum number of targets.
    pub min_count: u32,
    /// Maximum number of targets ([`UNBOUNDED`] for no limit).
    pub max_count: u32,
    /// Whether targets keep their insertion order.
    pub is_ordered: bool,
    /// What happens to this reference when the target is deleted.
    pub delete_rule: DeleteRule,
}

impl RelationshipDescriptor {
    fn new(
        name: impl Into<String>,
        target: EntityIndex,
        target_name: impl Into<String>,
        is_optional: bool,
        min_count: u32,
        max_count: u32,
    ) -> Self {
        Self {
            name: name.into(),
            target,
            target_name: target_name.into(),
            is_optional,
            min_count,
            max_count,
            is_ordered: true,
            delete_rule: DeleteRule::Nullify,
        }
    }

    /// Creates a required to-one relationship.
    #[must_use]
    pub fn to_one(
        name: impl Into<String>,
        target: EntityIndex,
        target_name: impl Into<String>,
    ) -> Self {
        Self::new(name, target, target_name, false, 1, 1)
    }

    /// Creates an optional to-one relationship.
    #[must_use]
    pub fn optional_to_one(
        name: impl Into<String>,
        target: EntityIndex,
        target_name: impl Into<String>,
    ) -> Self {
        Self::new(name, target, target_name, true, 1, 1)
    }

    /// Creates an unbounded to-many relationship.
    #[must_use]
    pub fn to_many(
        name: impl Into<String>,
        target: EntityIndex,
        target_name: impl Into<String>,
    ) -> Self {
        Self::new(name, target, target_name, false, 0, UNBOUNDED)
    }

    /// Returns true if the relationship can hold more than one target.
    #[must_use]
    pub const fn is_to_many(&self) -> bool {
        self.max_count == UNBOUNDED || self.max_count > 1
    }
}

/// What happens to a relationship when its target is deleted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DeleteRule {
    /// Clear the reference.
    #[default]
    Nullify,
    /// Delete the source as well.
    Cascade,
    /// Refuse to delete the target while referenced.
    Deny,
}

/// One schema element, tagged as attribute or relationship.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Descriptor {
    /// Scalar or opaque-stored property.
    Attribute(AttributeDescriptor),
    /// Reference to another entity.
    Relationship(RelationshipDescriptor),
}

impl Descriptor {
    /// Returns the property name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Attribute(a) => &a.name,
            Self::Relationship(r) => &r.name,
        }
    }

    /// Returns true if the property may be absent.
    #[must_use]
    pub const fn is_optional(&self) -> bool {
        match self {
            Self::Attribute(a) => a.is_optional,
            Self::Relationship(r) => r.is_optional,
        }
    }

    /// Returns the attribute, if this is one.
    #[must_use]
    pub const fn as_attribute(&self) -> Option<&AttributeDescriptor> {
        match self {
            Self::Attribute(a) => Some(a),
            Self::Relationship(_) => None,
        }
    }

    /// Returns the relationship, if this is one.
    #[must_use]
    pub const fn as_relationship(&self) -> Option<&RelationshipDescriptor> {
        match self {
            Self::Relationship(r) => Some(r),
            Self::Attribute(_) => None,
        }
    }
}

impl From<AttributeDescriptor> for Descriptor {
    fn from(attribute: AttributeDescriptor) -> Self {
        Self::Attribute(attribute)
    }
}

impl From<RelationshipDescriptor> for Descriptor {
    fn from(relationship: RelationshipDescriptor) -> Self {
        Self::Relationship(relationship)
    }
}
