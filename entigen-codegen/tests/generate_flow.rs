//! End-to-end flow: parse a schema document, validate it, lower it into
//! runtime descriptors, and emit both artefacts.

use entigen_codegen::{generate_mermaid, generate_rust, is_valid, lower, SchemaDoc};
use entigen_core::{EntityTypeExt, FieldValue, ValueError};
use uuid::Uuid;

const SCHEMA_TOML: &str = r#"
[project]
name = "people"

[meta]
entigen_version = "0.1.0"
created_at = "2026-07-30T09:00:00Z"
last_modified = "2026-08-02T16:30:00Z"

[[entities]]
name = "Person"
description = "A class to represent a person"

[[entities.fields]]
name = "id"
type = "uuid"
required = true
description = "Id of the person"

[[entities.fields]]
name = "name"
type = "text"
required = true
description = "Name of the person"

[[entities]]
name = "Employer"

[[entities.fields]]
name = "company_name"
type = "text"
required = true

[[entities.fields]]
name = "contact"
type = "Person"
"#;

fn doc() -> SchemaDoc {
    SchemaDoc::from_toml(SCHEMA_TOML).unwrap()
}

#[test]
fn schema_document_is_valid() {
    assert!(is_valid(&doc()));
}

#[test]
fn lowered_descriptors_enforce_the_construction_contract() {
    let types = lower(&doc()).unwrap();
    let person = &types[0];

    let id = Uuid::new_v4();
    let direct = person
        .construct(vec![
            Some(FieldValue::from(id)),
            Some(FieldValue::from("Carl")),
        ])
        .unwrap();
    let built = person
        .builder()
        .with("id", id)
        .unwrap()
        .with("name", "Carl")
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(direct, built);

    let err = person.builder().with("name", "Bob").unwrap().build().unwrap_err();
    assert_eq!(err, ValueError::missing_required("id"));
}

#[test]
fn lowered_descriptors_support_nested_entity_values() {
    let types = lower(&doc()).unwrap();
    let person = &types[0];
    let employer = &types[1];

    let contact = person
        .builder()
        .with("id", Uuid::new_v4())
        .unwrap()
        .with("name", "Alice")
        .unwrap()
        .build()
        .unwrap();
    let acme = employer
        .builder()
        .with("company_name", "Acme")
        .unwrap()
        .with("contact", contact.clone())
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(acme.get("contact").unwrap().as_entity(), Some(&contact));
}

#[test]
fn emitted_rust_covers_every_entity() {
    let out = generate_rust(&doc());
    assert!(out.contains("pub struct Person"));
    assert!(out.contains("pub struct PersonBuilder"));
    assert!(out.contains("pub struct Employer"));
    assert!(out.contains("pub struct EmployerBuilder"));
    assert!(out.contains("impl SchemaEntity for Employer"));
}

#[test]
fn emitted_mermaid_covers_classes_and_associations() {
    let out = generate_mermaid(&doc());
    assert!(out.contains("class Person {"));
    assert!(out.contains("class Employer {"));
    assert!(out.contains("Employer --> Person : contact"));
}
