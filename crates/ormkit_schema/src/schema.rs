//! Finished schemas.
//!
//! A [`Schema`] is an immutable snapshot built on persistent collections, so
//! cloning it to hand to several consumers is cheap.

use ormkit_foundation::{EntityIndex, EntityType, Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::RegistryConfig;
use crate::descriptor::{AttributeDescriptor, Descriptor, RelationshipDescriptor};
use crate::registry::SchemaRegistry;
use crate::resolver::TypeResolver;

/// Descriptor set for one entity.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EntityDescription {
    /// Registration index; relationships point here.
    pub index: EntityIndex,
    /// Entity name.
    pub name: String,
    /// Descriptors in declaration order.
    pub descriptors: Vec<Descriptor>,
    /// False if the entity was only referenced and never walked.
    pub is_complete: bool,
}

impl EntityDescription {
    /// Returns the descriptor with the given name.
    #[must_use]
    pub fn descriptor(&self, name: &str) -> Option<&Descriptor> {
        self.descriptors.iter().find(|d| d.name() == name)
    }

    /// Returns the attribute with the given name.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&AttributeDescriptor> {
        self.descriptor(name).and_then(Descriptor::as_attribute)
    }

    /// Returns the relationship with the given name.
    #[must_use]
    pub fn relationship(&self, name: &str) -> Option<&RelationshipDescriptor> {
        self.descriptor(name).and_then(Descriptor::as_relationship)
    }

    /// Iterates over the attributes.
    pub fn attributes(&self) -> impl Iterator<Item = &AttributeDescriptor> {
        self.descriptors.iter().filter_map(Descriptor::as_attribute)
    }

    /// Iterates over the relationships.
    pub fn relationships(&self) -> impl Iterator<Item = &RelationshipDescriptor> {
        self.descriptors.iter().filter_map(Descriptor::as_relationship)
    }
}

/// Derived persistence schema.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Schema {
    /// Entity descriptions, positioned by registration index.
    entities: im::Vector<EntityDescription>,
    /// Entity name to index.
    by_name: im::HashMap<String, EntityIndex>,
}

impl Schema {
    /// Creates an empty schema.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs a build pass with the standard resolver and default configuration.
    pub fn derive(entities: impl IntoIterator<Item = EntityType>) -> SchemaReport {
        SchemaRegistry::derive(TypeResolver::standard(), RegistryConfig::default(), entities)
    }

    /// Appends an entity description.
    ///
    /// The description is always stored so indices stay aligned; a name
    /// collision keeps the first entity reachable by name and reports an
    /// error.
    pub(crate) fn insert(&mut self, description: EntityDescription) -> Result<()> {
        let name = description.name.clone();
        let index = description.index;
        self.entities.push_back(description);

        if self.by_name.contains_key(&name) {
            return Err(Error::duplicate_entity_name(name));
        }
        self.by_name.insert(name, index);
        Ok(())
    }

    /// Returns the entity at `index`.
    #[must_use]
    pub fn entity(&self, index: EntityIndex) -> Option<&EntityDescription> {
        self.entities.get(index.slot())
    }

    /// Returns the entity with the given name.
    #[must_use]
    pub fn entity_named(&self, name: &str) -> Option<&EntityDescription> {
        self.by_name.get(name).and_then(|&idx| self.entity(idx))
    }

    /// Returns the entity with the given name.
    ///
    /// # Errors
    ///
    /// Returns `EntityNotFound` if no entity has that name.
    pub fn require(&self, name: &str) -> Result<&EntityDescription> {
        self.entity_named(name)
            .ok_or_else(|| Error::entity_not_found(name))
    }

    /// Returns the target entity of a relationship.
    #[must_use]
    pub fn target_of(&self, relationship: &RelationshipDescriptor) -> Option<&EntityDescription> {
        self.entity(relationship.target)
    }

    /// Iterates over relationships pointing at `target`, with their source entity.
    pub fn incoming(
        &self,
        target: EntityIndex,
    ) -> impl Iterator<Item = (&EntityDescription, &RelationshipDescriptor)> {
        self.entities.iter().flat_map(move |source| {
            source
                .relationships()
                .filter(move |r| r.target == target)
                .map(move |r| (source, r))
        })
    }

    /// Iterates over entities in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &EntityDescription> {
        self.entities.iter()
    }

    /// Returns the number of entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Returns true if the schema has no entities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

/// Result of a build pass: the schema plus every per-property error.
///
/// The schema holds every descriptor that succeeded; callers decide whether a
/// partial schema is acceptable.
#[derive(Debug)]
pub struct SchemaReport {
    /// Derived schema.
    pub schema: Schema,
    /// Errors collected during the build.
    pub errors: Vec<Error>,
}

impl SchemaReport {
    /// Returns true if no errors were collected.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Iterates over errors raised while describing `entity`.
    pub fn errors_for<'a>(&'a self, entity: &'a str) -> impl Iterator<Item = &'a Error> {
        self.errors.iter().filter(move |e| e.entity() == Some(entity))
    }

    /// Returns the schema, or the first error if any were collected.
    ///
    /// # Errors
    ///
    /// Returns the first collected error.
    pub fn into_result(self) -> Result<Schema> {
        match self.errors.into_iter().next() {
            Some(err) => Err(err),
            None => Ok(self.schema),
        }
    }
}
