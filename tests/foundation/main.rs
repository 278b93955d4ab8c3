//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: TypeToken, EntityType, DeclaredType, and Error.

mod errors;
