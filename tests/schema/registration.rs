//! Integration tests for entity registration
//!
//! Tests registration modes, cycle handling, cardinality, and error reporting.

use ormkit_foundation::{DeclaredType, Entity, EntityType, ErrorKind, PropertyDeclaration, StorageKind};
use ormkit_schema::{
    DeleteRule, RegistrationMode, RegistrationState, RegistryConfig, Schema, SchemaRegistry,
    TypeResolver, UNBOUNDED, UnknownScalarPolicy,
};

struct Department;
struct Employee;
struct Badge;

impl Entity for Department {
    const NAME: &'static str = "Department";

    fn properties() -> Vec<PropertyDeclaration> {
        vec![
            PropertyDeclaration::scalar::<String>("name"),
            PropertyDeclaration::to_many::<Employee>("staff"),
            PropertyDeclaration::optional_to_one::<Employee>("head"),
        ]
    }
}

impl Entity for Employee {
    const NAME: &'static str = "Employee";

    fn properties() -> Vec<PropertyDeclaration> {
        vec![
            PropertyDeclaration::scalar::<String>("name"),
            PropertyDeclaration::scalar::<f64>("salary"),
            PropertyDeclaration::to_one::<Department>("department"),
            PropertyDeclaration::optional_to_one::<Badge>("badge"),
            PropertyDeclaration::optional_to_one::<Employee>("manager"),
        ]
    }
}

impl Entity for Badge {
    const NAME: &'static str = "Badge";

    fn properties() -> Vec<PropertyDeclaration> {
        vec![
            PropertyDeclaration::scalar::<i64>("number"),
            PropertyDeclaration::to_one::<Employee>("holder"),
        ]
    }
}

// =============================================================================
// Registration Modes
// =============================================================================

#[test]
fn transitive_graph_registers_each_entity_once() {
    let mut registry = SchemaRegistry::default();
    registry.register_entity::<Department>();

    // Department walks and only Department; Employee is a shell.
    assert_eq!(registry.len(), 2);
    let employee = registry.lookup(EntityType::of::<Employee>()).unwrap();
    assert_eq!(
        registry.record(employee).unwrap().state(),
        RegistrationState::Partial
    );

    let report = registry.finish();
    assert!(report.is_clean());
    assert_eq!(report.schema.len(), 3);
    assert!(report.schema.iter().all(|e| e.is_complete));
}

#[test]
fn registration_order_does_not_change_descriptors() {
    let forward = Schema::derive([
        EntityType::of::<Department>(),
        EntityType::of::<Employee>(),
        EntityType::of::<Badge>(),
    ])
    .schema;
    let backward = Schema::derive([
        EntityType::of::<Badge>(),
        EntityType::of::<Employee>(),
        EntityType::of::<Department>(),
    ])
    .schema;

    for name in ["Department", "Employee", "Badge"] {
        let a = forward.require(name).unwrap();
        let b = backward.require(name).unwrap();
        let names_a: Vec<_> = a.descriptors.iter().map(|d| d.name()).collect();
        let names_b: Vec<_> = b.descriptors.iter().map(|d| d.name()).collect();
        assert_eq!(names_a, names_b, "{name}");

        // Targets resolve to the same entity names in both schemas
        for (ra, rb) in a.relationships().zip(b.relationships()) {
            assert_eq!(
                forward.target_of(ra).unwrap().name,
                backward.target_of(rb).unwrap().name
            );
        }
    }
}

#[test]
fn partial_then_complete_keeps_index() {
    let mut registry = SchemaRegistry::default();
    let badge = registry.register(EntityType::of::<Badge>(), RegistrationMode::Partial);
    registry.register_entity::<Employee>();
    let again = registry.register_entity::<Badge>();

    assert_eq!(badge, again);
    let record = registry.record(badge).unwrap();
    assert!(record.is_complete());
    assert_eq!(record.descriptors().len(), 2);
}

// =============================================================================
// Cardinality Mapping
// =============================================================================

#[test]
fn cardinality_per_kind() {
    let schema = Schema::derive([EntityType::of::<Department>()]).schema;
    let dept = schema.require("Department").unwrap();

    let staff = dept.relationship("staff").unwrap();
    assert_eq!((staff.min_count, staff.max_count), (0, UNBOUNDED));
    assert!(!staff.is_optional);
    assert!(staff.is_ordered);

    let head = dept.relationship("head").unwrap();
    assert_eq!((head.min_count, head.max_count), (1, 1));
    assert!(head.is_optional);

    let employee = schema.require("Employee").unwrap();
    let department = employee.relationship("department").unwrap();
    assert_eq!((department.min_count, department.max_count), (1, 1));
    assert!(!department.is_optional);

    for rel in [staff, head, department] {
        assert_eq!(rel.delete_rule, DeleteRule::Nullify);
    }
}

#[test]
fn staff_and_head_share_a_target() {
    let schema = Schema::derive([EntityType::of::<Department>()]).schema;
    let dept = schema.require("Department").unwrap();
    assert_eq!(
        dept.relationship("staff").unwrap().target,
        dept.relationship("head").unwrap().target
    );
}

// =============================================================================
// Error Reporting
// =============================================================================

struct Catalog;
struct Unmapped;

impl Entity for Catalog {
    const NAME: &'static str = "Catalog";

    fn properties() -> Vec<PropertyDeclaration> {
        vec![
            PropertyDeclaration::scalar::<String>("title"),
            PropertyDeclaration::scalar::<Unmapped>("blob"),
            PropertyDeclaration::new(
                "matrix",
                DeclaredType::array(DeclaredType::array(DeclaredType::scalar::<f64>())),
            ),
            PropertyDeclaration::new(
                "maybeTags",
                DeclaredType::optional(DeclaredType::set(DeclaredType::scalar::<String>())),
            ),
            PropertyDeclaration::scalar::<bool>("published"),
        ]
    }
}

#[test]
fn errors_do_not_abort_build() {
    let report = Schema::derive([EntityType::of::<Catalog>(), EntityType::of::<Badge>()]);

    assert_eq!(report.errors.len(), 2);
    assert!(report.errors.iter().all(|e| {
        matches!(e.kind, ErrorKind::UnsupportedPropertyKind(_)) && e.entity() == Some("Catalog")
    }));

    let catalog = report.schema.require("Catalog").unwrap();
    let names: Vec<_> = catalog.descriptors.iter().map(|d| d.name()).collect();
    assert_eq!(names, ["title", "blob", "published"]);
    assert_eq!(catalog.attribute("blob").unwrap().storage, StorageKind::Opaque);

    // Unrelated entities still resolve
    assert!(report.schema.require("Badge").unwrap().is_complete);
    assert!(report.schema.require("Employee").unwrap().is_complete);
}

#[test]
fn reject_policy_reports_unknown_scalars() {
    let config = RegistryConfig::default().with_unknown_scalars(UnknownScalarPolicy::Reject);
    let report = SchemaRegistry::derive(
        TypeResolver::standard(),
        config,
        [EntityType::of::<Catalog>()],
    );

    let unknown: Vec<_> = report
        .errors_for("Catalog")
        .filter(|e| matches!(e.kind, ErrorKind::UnknownScalarType(_)))
        .collect();
    assert_eq!(unknown.len(), 1);
    assert_eq!(unknown[0].property(), Some("blob"));
    assert!(report.schema.require("Catalog").unwrap().descriptor("blob").is_none());
}

#[test]
fn extended_resolver_avoids_rejection() {
    let resolver = TypeResolver::standard().with_type::<Unmapped>(StorageKind::String);
    let report = SchemaRegistry::derive(
        resolver,
        RegistryConfig::strict(),
        [EntityType::of::<Catalog>()],
    );

    assert!(
        report
            .errors
            .iter()
            .all(|e| !matches!(e.kind, ErrorKind::UnknownScalarType(_)))
    );
    let blob = report.schema.require("Catalog").unwrap().attribute("blob").unwrap();
    assert_eq!(blob.storage, StorageKind::String);
}

#[test]
fn into_result_rejects_partial_schema() {
    let err = Schema::derive([EntityType::of::<Catalog>()])
        .into_result()
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnsupportedPropertyKind(_)));
    assert_eq!(err.property(), Some("matrix"));
}
