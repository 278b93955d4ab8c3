//! Native type to storage kind resolution.

use ormkit_foundation::{StorageKind, TypeToken};

/// Ordered table of native types with a native storage kind.
///
/// Lookup is by exact type identity; there is no subtype or structural
/// matching. Types without an entry resolve to [`StorageKind::Opaque`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeResolver {
    table: Vec<(TypeToken, StorageKind)>,
}

impl Default for TypeResolver {
    fn default() -> Self {
        Self::standard()
    }
}

impl TypeResolver {
    /// Creates a resolver with no entries; everything resolves to opaque.
    #[must_use]
    pub fn empty() -> Self {
        Self { table: Vec::new() }
    }

    /// Creates a resolver with the standard primitive entries.
    ///
    /// | Type     | Storage   |
    /// |----------|-----------|
    /// | `i64`    | `Integer` |
    /// | `String` | `String`  |
    /// | `f32`    | `Float`   |
    /// | `f64`    | `Double`  |
    /// | `bool`   | `Boolean` |
    #[must_use]
    pub fn standard() -> Self {
        Self::empty()
            .with_type::<i64>(StorageKind::Integer)
            .with_type::<String>(StorageKind::String)
            .with_type::<f32>(StorageKind::Float)
            .with_type::<f64>(StorageKind::Double)
            .with_type::<bool>(StorageKind::Boolean)
    }

    /// Maps a token to a storage kind.
    ///
    /// Replaces the kind in place if the token already has an entry, so table
    /// order is stable.
    #[must_use]
    pub fn with_entry(mut self, token: TypeToken, kind: StorageKind) -> Self {
        match self.table.iter_mut().find(|(t, _)| *t == token) {
            Some(entry) => entry.1 = kind,
            None => self.table.push((token, kind)),
        }
        self
    }

    /// Maps `T` to a storage kind.
    #[must_use]
    pub fn with_type<T: 'static>(self, kind: StorageKind) -> Self {
        self.with_entry(TypeToken::of::<T>(), kind)
    }

    /// Returns the table entry for a token, if any.
    #[must_use]
    pub fn lookup(&self, token: TypeToken) -> Option<StorageKind> {
        self.table
            .iter()
            .find(|(t, _)| *t == token)
            .map(|&(_, kind)| kind)
    }

    /// Resolves a token, falling back to [`StorageKind::Opaque`].
    #[must_use]
    pub fn resolve(&self, token: TypeToken) -> StorageKind {
        self.lookup(token).unwrap_or(StorageKind::Opaque)
    }

    /// Returns the table entries in order.
    pub fn entries(&self) -> impl Iterator<Item = &(TypeToken, StorageKind)> {
        self.table.iter()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns true if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
