//! Entigen Codegen: schema documents to Rust value objects
//!
//! This library reads a TOML schema document (an ordered list of entities,
//! each an ordered list of named, typed, required/optional fields) and emits
//! two artefacts:
//!
//! - **Rust source**: one immutable value struct plus one staged builder
//!   per entity, validating required fields through
//!   `entigen_core::ValueError` (see [`generate_rust`])
//! - **Mermaid diagram**: a read-only `classDiagram` projection of the
//!   schema (see [`generate_mermaid`])
//!
//! It can also lower the document into `entigen_core` descriptors for
//! dynamic, non-generated use (see [`lower`]).
//!
//! # Usage
//!
//! ```rust
//! use entigen_codegen::{generate_mermaid, generate_rust, validate, SchemaDoc};
//!
//! let toml = r#"
//! [meta]
//! entigen_version = "0.1.0"
//! created_at = "2026-07-30T09:00:00Z"
//! last_modified = "2026-08-02T16:30:00Z"
//!
//! [[entities]]
//! name = "Person"
//! description = "A class to represent a person"
//!
//! [[entities.fields]]
//! name = "id"
//! type = "uuid"
//! required = true
//!
//! [[entities.fields]]
//! name = "name"
//! type = "text"
//! required = true
//! "#;
//!
//! let doc = SchemaDoc::from_toml(toml).unwrap();
//!
//! let errors = validate(&doc);
//! assert!(errors.iter().all(|e| e.severity != validate::Severity::Error));
//!
//! let rust = generate_rust(&doc);
//! assert!(rust.contains("pub struct Person"));
//! assert!(rust.contains("pub struct PersonBuilder"));
//!
//! let mermaid = generate_mermaid(&doc);
//! assert!(mermaid.contains("classDiagram"));
//! ```

pub mod lower;
pub mod mermaid;
pub mod rust;
pub mod schema;
pub mod validate;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use lower::{lower, lower_entity, LowerError};
pub use mermaid::generate_mermaid;
pub use rust::{generate_cargo_toml, generate_lib_rs, generate_model_rs, generate_rust};
pub use rust::to_snake_case;
pub use schema::{EntityDef, FieldDef, Meta, ProjectDef, SchemaDoc};
pub use validate::{is_valid, validate, Severity, ValidationError};
