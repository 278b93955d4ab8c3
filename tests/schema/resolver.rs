//! Integration tests for type resolution
//!
//! Tests the standard table, opaque fallback, and table extension.

use ormkit_foundation::{StorageKind, TypeToken};
use ormkit_schema::TypeResolver;
use proptest::prelude::*;

#[derive(Debug)]
struct Coordinates;

// =============================================================================
// Standard Table
// =============================================================================

#[test]
fn standard_table_order() {
    let kinds: Vec<_> = TypeResolver::standard()
        .entries()
        .map(|&(_, kind)| kind)
        .collect();
    assert_eq!(
        kinds,
        [
            StorageKind::Integer,
            StorageKind::String,
            StorageKind::Float,
            StorageKind::Double,
            StorageKind::Boolean,
        ]
    );
}

#[test]
fn custom_struct_is_opaque() {
    let resolver = TypeResolver::default();
    assert_eq!(
        resolver.resolve(TypeToken::of::<Coordinates>()),
        StorageKind::Opaque
    );
}

#[test]
fn narrower_integers_are_not_matched() {
    let resolver = TypeResolver::default();
    for token in [
        TypeToken::of::<i8>(),
        TypeToken::of::<i16>(),
        TypeToken::of::<i32>(),
        TypeToken::of::<u64>(),
    ] {
        assert_eq!(resolver.resolve(token), StorageKind::Opaque, "{token}");
    }
}

// =============================================================================
// Extension
// =============================================================================

#[test]
fn extended_table_resolves_custom_type() {
    let resolver = TypeResolver::standard().with_type::<Coordinates>(StorageKind::String);
    assert_eq!(
        resolver.resolve(TypeToken::of::<Coordinates>()),
        StorageKind::String
    );
    // Standard entries untouched
    assert_eq!(resolver.resolve(TypeToken::of::<i64>()), StorageKind::Integer);
}

#[test]
fn resolvers_are_independent() {
    let a = TypeResolver::standard();
    let b = a.clone().with_type::<u32>(StorageKind::Integer);
    assert_eq!(a.resolve(TypeToken::of::<u32>()), StorageKind::Opaque);
    assert_eq!(b.resolve(TypeToken::of::<u32>()), StorageKind::Integer);
    assert_ne!(a, b);
}

// =============================================================================
// Properties
// =============================================================================

fn token() -> impl Strategy<Value = TypeToken> {
    prop::sample::select(vec![
        TypeToken::of::<i64>(),
        TypeToken::of::<String>(),
        TypeToken::of::<f32>(),
        TypeToken::of::<f64>(),
        TypeToken::of::<bool>(),
        TypeToken::of::<Coordinates>(),
        TypeToken::of::<Vec<i64>>(),
        TypeToken::of::<Option<String>>(),
        TypeToken::of::<(i64, i64)>(),
    ])
}

proptest! {
    #[test]
    fn unregistered_tokens_resolve_opaque(t in token()) {
        let resolver = TypeResolver::empty();
        prop_assert_eq!(resolver.resolve(t), StorageKind::Opaque);
    }

    #[test]
    fn repeated_resolution_agrees(t in token(), repeats in 1usize..8) {
        let resolver = TypeResolver::standard();
        let first = resolver.resolve(t);
        for _ in 0..repeats {
            prop_assert_eq!(resolver.resolve(t), first);
        }
    }
}
