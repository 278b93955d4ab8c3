//! Entity registration and property description.
//!
//! The [`SchemaRegistry`] owns the registration state for one build pass: an
//! arena of [`RegistrationRecord`]s indexed by [`EntityIndex`], plus a map from
//! entity type to index. Relationships store the target's index, so a target
//! can be referenced while it is still a partial shell and cyclic entity
//! graphs resolve without recursion.

// Registration indices are u32; an arena never holds 2^32 entities.
#![allow(clippy::cast_possible_truncation)]

use std::collections::HashMap;

use ormkit_foundation::{
    Entity, EntityIndex, EntityType, Error, ErrorContext, PropertyDeclaration, Result,
    StorageKind, TypeToken,
};
use tracing::{debug, trace, warn};

use crate::config::{RegistryConfig, UnknownScalarPolicy};
use crate::descriptor::{AttributeDescriptor, Descriptor, RelationshipDescriptor};
use crate::kind::PropertyKind;
use crate::resolver::TypeResolver;
use crate::schema::{EntityDescription, Schema, SchemaReport};

/// How far [`SchemaRegistry::register`] goes for a new entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RegistrationMode {
    /// Create an empty shell only; used as a relationship target.
    Partial,
    /// Create the record and describe every declared property.
    Complete,
}

/// Registration progress of one entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RegistrationState {
    /// Shell exists; properties not yet (fully) described.
    Partial,
    /// Every declared property has been described.
    Complete,
}

/// Registration record for one entity type.
#[derive(Clone, Debug)]
pub struct RegistrationRecord {
    entity: EntityType,
    state: RegistrationState,
    /// Set once the property walk has started.
    walked: bool,
    descriptors: Vec<Descriptor>,
}

impl RegistrationRecord {
    fn new(entity: EntityType) -> Self {
        Self {
            entity,
            state: RegistrationState::Partial,
            walked: false,
            descriptors: Vec::new(),
        }
    }

    /// Returns the registered entity type.
    #[must_use]
    pub const fn entity(&self) -> EntityType {
        self.entity
    }

    /// Returns the entity's schema name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.entity.name()
    }

    /// Returns the registration state.
    #[must_use]
    pub const fn state(&self) -> RegistrationState {
        self.state
    }

    /// Returns true once every property has been described.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state == RegistrationState::Complete
    }

    /// Returns the descriptors accumulated so far, in declaration order.
    #[must_use]
    pub fn descriptors(&self) -> &[Descriptor] {
        &self.descriptors
    }

    /// Returns the descriptor with the given name.
    #[must_use]
    pub fn descriptor(&self, name: &str) -> Option<&Descriptor> {
        self.descriptors.iter().find(|d| d.name() == name)
    }
}

/// Derives a persistence schema from declared entity types.
///
/// A registry covers exactly one build pass. It is consumed by
/// [`finish`](Self::finish), which discards the registration state and
/// returns the finished [`Schema`].
///
/// # Example
///
/// ```
/// use ormkit_foundation::{Entity, PropertyDeclaration, StorageKind};
/// use ormkit_schema::{SchemaRegistry, TypeResolver};
///
/// struct Person;
///
/// impl Entity for Person {
///     const NAME: &'static str = "Person";
///
///     fn properties() -> Vec<PropertyDeclaration> {
///         vec![
///             PropertyDeclaration::scalar::<String>("name"),
///             PropertyDeclaration::optional_to_one::<Person>("bestFriend"),
///         ]
///     }
/// }
///
/// let mut registry = SchemaRegistry::new(TypeResolver::standard());
/// registry.register_entity::<Person>();
/// let schema = registry.finish().into_result().unwrap();
///
/// let person = schema.entity_named("Person").unwrap();
/// assert_eq!(person.attribute("name").unwrap().storage, StorageKind::String);
/// assert_eq!(schema.len(), 1);
/// ```
#[derive(Debug)]
pub struct SchemaRegistry {
    resolver: TypeResolver,
    config: RegistryConfig,
    records: Vec<RegistrationRecord>,
    index: HashMap<TypeToken, EntityIndex>,
    errors: Vec<Error>,
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new(TypeResolver::standard())
    }
}

impl SchemaRegistry {
    /// Creates a registry with the default configuration.
    #[must_use]
    pub fn new(resolver: TypeResolver) -> Self {
        Self::with_config(resolver, RegistryConfig::default())
    }

    /// Creates a registry with an explicit configuration.
    #[must_use]
    pub fn with_config(resolver: TypeResolver, config: RegistryConfig) -> Self {
        Self {
            resolver,
            config,
            records: Vec::new(),
            index: HashMap::new(),
            errors: Vec::new(),
        }
    }

    /// Runs a full build pass over `entities`.
    pub fn derive(
        resolver: TypeResolver,
        config: RegistryConfig,
        entities: impl IntoIterator<Item = EntityType>,
    ) -> SchemaReport {
        let mut registry = Self::with_config(resolver, config);
        for entity in entities {
            registry.register(entity, RegistrationMode::Complete);
        }
        registry.finish()
    }

    /// Returns the type resolver.
    #[must_use]
    pub const fn resolver(&self) -> &TypeResolver {
        &self.resolver
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Fully registers entity `E`.
    pub fn register_entity<E: Entity>(&mut self) -> EntityIndex {
        self.register(EntityType::of::<E>(), RegistrationMode::Complete)
    }

    /// Registers an entity type and returns its record index.
    ///
    /// An entity that already has a record gets the same index back and its
    /// properties are not walked again; this is what makes cyclic references
    /// terminate. The one exception is a `Complete` request for a shell that
    /// was created by a relationship and has not been walked yet: that record
    /// is walked in place, keeping its index.
    pub fn register(&mut self, entity: EntityType, mode: RegistrationMode) -> EntityIndex {
        if let Some(&idx) = self.index.get(&entity.token()) {
            if mode == RegistrationMode::Complete && !self.records[idx.slot()].walked {
                self.walk(idx);
            }
            return idx;
        }

        let idx = EntityIndex::new(self.records.len() as u32);
        self.records.push(RegistrationRecord::new(entity));
        self.index.insert(entity.token(), idx);
        debug!(entity = entity.name(), index = idx.index(), ?mode, "registered entity");

        if mode == RegistrationMode::Complete {
            self.walk(idx);
        }
        idx
    }

    /// Describes one property of `owner`, appending exactly one descriptor.
    ///
    /// Relationship targets are registered as partial shells.
    ///
    /// # Errors
    ///
    /// Returns an error (with entity and property context) if the property
    /// shape is unsupported, its name is already taken, or its scalar type is
    /// unknown under [`UnknownScalarPolicy::Reject`]. A rejected property
    /// leaves the registry unchanged.
    pub fn describe(&mut self, owner: EntityIndex, property: &PropertyDeclaration) -> Result<()> {
        let owner_name = self
            .record(owner)
            .ok_or_else(|| Error::entity_not_found(owner.to_string()))?
            .name();

        match self.descriptor_for(owner, property) {
            Ok(descriptor) => {
                trace!(entity = owner_name, property = %property.name, ?descriptor, "described property");
                self.records[owner.slot()].descriptors.push(descriptor);
                Ok(())
            }
            Err(err) => Err(err.with_context(
                ErrorContext::new()
                    .with_entity(owner_name)
                    .with_property(property.name.as_str()),
            )),
        }
    }

    /// Returns the record at `idx`.
    #[must_use]
    pub fn record(&self, idx: EntityIndex) -> Option<&RegistrationRecord> {
        self.records.get(idx.slot())
    }

    /// Returns the index of a registered entity type.
    #[must_use]
    pub fn lookup(&self, entity: EntityType) -> Option<EntityIndex> {
        self.index.get(&entity.token()).copied()
    }

    /// Returns all records in registration order.
    pub fn records(&self) -> impl Iterator<Item = &RegistrationRecord> {
        self.records.iter()
    }

    /// Returns the number of registered entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if nothing has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the property errors collected while walking entities.
    #[must_use]
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    /// Ends the build pass and returns the schema with any collected errors.
    pub fn finish(mut self) -> SchemaReport {
        if self.config.complete_referenced {
            // Walking a shell can register further shells, so re-check the length.
            let mut slot = 0;
            while slot < self.records.len() {
                if !self.records[slot].walked {
                    self.walk(EntityIndex::new(slot as u32));
                }
                slot += 1;
            }
        }

        let mut schema = Schema::new();
        let mut errors = self.errors;
        for (slot, record) in self.records.into_iter().enumerate() {
            let description = EntityDescription {
                index: EntityIndex::new(slot as u32),
                name: record.entity.name().to_string(),
                is_complete: record.state == RegistrationState::Complete,
                descriptors: record.descriptors,
            };
            if let Err(err) = schema.insert(description) {
                warn!(error = %err, "entity name collision");
                errors.push(err);
            }
        }

        debug!(entities = schema.len(), errors = errors.len(), "schema build finished");
        SchemaReport { schema, errors }
    }

    fn walk(&mut self, idx: EntityIndex) {
        let record = &mut self.records[idx.slot()];
        record.walked = true;
        let entity = record.entity;

        for property in entity.properties() {
            if let Err(err) = self.describe(idx, &property) {
                warn!(error = %err, context = ?err.context, "property rejected");
                self.errors.push(err);
            }
        }

        let record = &mut self.records[idx.slot()];
        record.state = RegistrationState::Complete;
        debug!(
            entity = entity.name(),
            descriptors = record.descriptors.len(),
            "entity complete"
        );
    }

    fn descriptor_for(
        &mut self,
        owner: EntityIndex,
        property: &PropertyDeclaration,
    ) -> Result<Descriptor> {
        let name = property.name.as_str();
        if self.records[owner.slot()].descriptor(name).is_some() {
            return Err(Error::duplicate_property(name));
        }

        let descriptor = match PropertyKind::classify(&property.ty)? {
            PropertyKind::Scalar(t) => {
                AttributeDescriptor::required(name, self.storage_for(name, t)?).into()
            }
            PropertyKind::OptionalScalar(t) => {
                AttributeDescriptor::optional(name, self.storage_for(name, t)?).into()
            }
            PropertyKind::Collection { .. } => {
                AttributeDescriptor::required(name, StorageKind::Opaque).into()
            }
            PropertyKind::EntityReference(e) => {
                let target = self.register(e, RegistrationMode::Partial);
                RelationshipDescriptor::to_one(name, target, e.name()).into()
            }
            PropertyKind::OptionalEntityReference(e) => {
                let target = self.register(e, RegistrationMode::Partial);
                RelationshipDescriptor::optional_to_one(name, target, e.name()).into()
            }
            PropertyKind::CollectionOfEntityReferences(e) => {
                let target = self.register(e, RegistrationMode::Partial);
                RelationshipDescriptor::to_many(name, target, e.name()).into()
            }
        };
        Ok(descriptor)
    }

    fn storage_for(&self, property: &str, token: TypeToken) -> Result<StorageKind> {
        if let Some(kind) = self.resolver.lookup(token) {
            return Ok(kind);
        }
        match self.config.unknown_scalars {
            UnknownScalarPolicy::Opaque => {
                debug!(property, ty = token.name(), "no native storage kind, using opaque");
                Ok(self.resolver.resolve(token))
            }
            UnknownScalarPolicy::Reject => Err(Error::unknown_scalar_type(token.name())),
        }
    }
}
