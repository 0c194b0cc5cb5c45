//! Entigen Core: immutable schema-entity value objects
//!
//! This crate implements the runtime contract behind every type a
//! schema-driven generator emits: given an ordered list of named, typed
//! fields with required/optional status, provide a value that is immutable,
//! absent-safe, structurally comparable, and incrementally constructible.
//! The logic is written once, parameterized over an [`EntityType`]
//! descriptor, instead of being duplicated per generated type.
//!
//! - [`EntityType`] / [`FieldSpec`] / [`FieldKind`]: the resolved field
//!   list handed down by a schema layer.
//! - [`ValueObject`]: constructed via [`ValueObject::construct`], which
//!   rejects absent required fields in declaration order; read-only
//!   accessors, structural equality, and declaration-order hashing.
//! - [`ValueBuilder`]: stages field values in any order and re-runs the
//!   same validation at [`ValueBuilder::build`]; reusable after building.
//! - [`SchemaEntity`]: implemented by statically generated entity types.
//!
//! # Usage
//!
//! ```rust
//! use entigen_core::{EntityType, EntityTypeExt, FieldKind, FieldSpec, FieldValue, ValueError};
//! use uuid::Uuid;
//!
//! let person = EntityType::new(
//!     "Person",
//!     vec![
//!         FieldSpec::required("id", FieldKind::Uuid),
//!         FieldSpec::required("name", FieldKind::Text),
//!     ],
//! )
//! .unwrap();
//!
//! let id = Uuid::new_v4();
//! let alice = person
//!     .construct(vec![
//!         Some(FieldValue::from(id)),
//!         Some(FieldValue::from("Alice")),
//!     ])
//!     .unwrap();
//! assert_eq!(alice.get("name").unwrap().as_text(), Some("Alice"));
//!
//! let err = person.builder().with("name", "Bob").unwrap().build().unwrap_err();
//! assert_eq!(err, ValueError::missing_required("id"));
//! ```

pub mod builder;
pub mod descriptor;
pub mod entity;
pub mod error;
pub mod object;
pub mod value;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use builder::ValueBuilder;
pub use descriptor::{EntityType, EntityTypeExt, FieldKind, FieldSpec};
pub use entity::SchemaEntity;
pub use error::{ValueError, ValueResult};
pub use object::ValueObject;
pub use value::FieldValue;
