//! Property kind classification.
//!
//! Maps a declared type shape onto the six kinds the registry knows how to
//! describe. Anything else is rejected here, before the registry touches its
//! state.

use ormkit_foundation::{CollectionShape, DeclaredType, EntityType, Error, Result, TypeToken};

/// Classified property kind, carrying its element or target type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PropertyKind {
    /// Required scalar.
    Scalar(TypeToken),
    /// Optional scalar.
    OptionalScalar(TypeToken),
    /// Collection of scalars.
    Collection {
        /// Array or set.
        shape: CollectionShape,
        /// Element type.
        element: TypeToken,
    },
    /// Required to-one reference.
    EntityReference(EntityType),
    /// Optional to-one reference.
    OptionalEntityReference(EntityType),
    /// Ordered to-many reference.
    CollectionOfEntityReferences(EntityType),
}

impl PropertyKind {
    /// Classifies a declared type.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedPropertyKind` for nested wrappers (optional
    /// collections, collections of optionals, nested collections, double
    /// optionals) and for sets of entities.
    pub fn classify(declared: &DeclaredType) -> Result<Self> {
        let kind = match declared {
            DeclaredType::Scalar(t) => Self::Scalar(*t),
            DeclaredType::Entity(e) => Self::EntityReference(*e),
            DeclaredType::Optional(inner) => match inner.as_ref() {
                DeclaredType::Scalar(t) => Self::OptionalScalar(*t),
                DeclaredType::Entity(e) => Self::OptionalEntityReference(*e),
                _ => return Err(Error::unsupported_property_kind(declared)),
            },
            DeclaredType::Array(inner) => match inner.as_ref() {
                DeclaredType::Scalar(t) => Self::Collection {
                    shape: CollectionShape::Array,
                    element: *t,
                },
                DeclaredType::Entity(e) => Self::CollectionOfEntityReferences(*e),
                _ => return Err(Error::unsupported_property_kind(declared)),
            },
            // To-many relationships are ordered, so only arrays may hold entities.
            DeclaredType::Set(inner) => match inner.as_ref() {
                DeclaredType::Scalar(t) => Self::Collection {
                    shape: CollectionShape::Set,
                    element: *t,
                },
                _ => return Err(Error::unsupported_property_kind(declared)),
            },
        };
        Ok(kind)
    }

    /// Returns true if this kind becomes a relationship descriptor.
    #[must_use]
    pub const fn is_relationship(&self) -> bool {
        matches!(
            self,
            Self::EntityReference(_)
                | Self::OptionalEntityReference(_)
                | Self::CollectionOfEntityReferences(_)
        )
    }

    /// Returns the referenced entity for relationship kinds.
    #[must_use]
    pub const fn target(&self) -> Option<EntityType> {
        match self {
            Self::EntityReference(e)
            | Self::OptionalEntityReference(e)
            | Self::CollectionOfEntityReferences(e) => Some(*e),
            _ => None,
        }
    }
}
