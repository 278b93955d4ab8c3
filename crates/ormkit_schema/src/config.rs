//! Configuration for schema builds.

/// How scalar types without a storage table entry are handled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnknownScalarPolicy {
    /// Store through the opaque representation.
    #[default]
    Opaque,
    /// Reject the property with `UnknownScalarType`.
    Reject,
}

/// Configuration for a [`SchemaRegistry`](crate::SchemaRegistry).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Handling of scalars with no native storage kind.
    pub unknown_scalars: UnknownScalarPolicy,

    /// Walk entities that were only reached through relationships when the
    /// build finishes, so no relationship target stays an empty shell.
    pub complete_referenced: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            unknown_scalars: UnknownScalarPolicy::Opaque,
            complete_referenced: true,
        }
    }
}

impl RegistryConfig {
    /// Creates a configuration that rejects unknown scalar types.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            unknown_scalars: UnknownScalarPolicy::Reject,
            ..Self::default()
        }
    }

    /// Builder method to set the unknown scalar policy.
    #[must_use]
    pub fn with_unknown_scalars(mut self, policy: UnknownScalarPolicy) -> Self {
        self.unknown_scalars = policy;
        self
    }

    /// Builder method to enable/disable completion of referenced entities.
    #[must_use]
    pub fn with_complete_referenced(mut self, complete: bool) -> Self {
        self.complete_referenced = complete;
        self
    }
}
