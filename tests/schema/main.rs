//! Integration tests for Layer 1: Schema
//!
//! Tests for type resolution, entity registration, derived schemas, and export.

mod registration;
mod resolver;
