//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use ormkit_foundation::{DeclaredType, Error, ErrorContext, ErrorKind};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_unsupported_property_kind() {
    let declared = DeclaredType::array(DeclaredType::array(DeclaredType::scalar::<bool>()));
    let err = Error::unsupported_property_kind(&declared);
    assert!(matches!(err.kind, ErrorKind::UnsupportedPropertyKind(_)));
    let msg = format!("{err}");
    assert!(msg.contains("array<array<bool>>"));
}

#[test]
fn error_unknown_scalar_type() {
    let err = Error::unknown_scalar_type("my_crate::Money");
    if let ErrorKind::UnknownScalarType(name) = &err.kind {
        assert_eq!(name, "my_crate::Money");
    } else {
        panic!("Expected UnknownScalarType");
    }
    assert!(format!("{err}").contains("Money"));
}

#[test]
fn error_duplicate_property() {
    let err = Error::duplicate_property("age");
    assert!(matches!(err.kind, ErrorKind::DuplicateProperty(_)));
    assert_eq!(format!("{err}"), "duplicate property: age");
}

#[test]
fn error_duplicate_entity_name() {
    let err = Error::duplicate_entity_name("Person");
    assert!(matches!(err.kind, ErrorKind::DuplicateEntityName(_)));
    assert!(format!("{err}").contains("Person"));
}

#[test]
fn error_serialization() {
    let err = Error::new(ErrorKind::SerializationError("truncated".to_string()));
    assert_eq!(format!("{err}"), "serialization error: truncated");
}

// =============================================================================
// Error with Context
// =============================================================================

#[test]
fn error_with_context() {
    let err = Error::unknown_scalar_type("Money").with_context(
        ErrorContext::new()
            .with_entity("Invoice")
            .with_property("total"),
    );

    assert_eq!(err.entity(), Some("Invoice"));
    assert_eq!(err.property(), Some("total"));
    assert_eq!(format!("{}", err.context.unwrap()), "at Invoice.total");
}

#[test]
fn display_omits_context() {
    let err = Error::duplicate_property("name")
        .with_context(ErrorContext::new().with_entity("Person"));
    assert_eq!(format!("{err}"), "duplicate property: name");
}

// =============================================================================
// Error Chaining
// =============================================================================

#[test]
#[allow(clippy::result_large_err)]
fn error_result_propagation() {
    fn inner() -> ormkit_foundation::Result<()> {
        Err(Error::entity_not_found("Ghost"))
    }

    fn outer() -> ormkit_foundation::Result<()> {
        inner()?;
        Ok(())
    }

    let result = outer();
    assert!(matches!(
        result.unwrap_err().kind,
        ErrorKind::EntityNotFound(_)
    ));
}
