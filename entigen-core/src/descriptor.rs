//! Entity type descriptors
//!
//! An [`EntityType`] is the resolved, ordered field list a schema layer hands
//! to this crate: one [`FieldSpec`] per field, each with a name, a semantic
//! [`FieldKind`], a required flag, and an optional documentation string.
//! Descriptors are shared behind an [`Arc`] so every value constructed from a
//! type carries a cheap handle to its declaration.

use std::sync::Arc;

use crate::builder::ValueBuilder;
use crate::error::{ValueError, ValueResult};
use crate::object::ValueObject;
use crate::value::FieldValue;

// ── Field kind ───────────────────────────────────────────────────────────────

/// Semantic type of a single field.
///
/// Every kind has total equality and hashing, so the hash/equality
/// consistency law of [`ValueObject`] holds without caveats.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Unique identifier, backed by [`uuid::Uuid`].
    Uuid,
    /// Unicode text.
    Text,
    /// Signed 64-bit integer.
    Integer,
    /// Boolean flag.
    Boolean,
    /// A nested entity value, referenced by its entity type name.
    Entity(String),
}

impl FieldKind {
    /// The schema keyword for this kind, or the referenced entity name.
    pub fn keyword(&self) -> &str {
        match self {
            FieldKind::Uuid => "uuid",
            FieldKind::Text => "text",
            FieldKind::Integer => "integer",
            FieldKind::Boolean => "boolean",
            FieldKind::Entity(name) => name,
        }
    }
}

// ── Field spec ───────────────────────────────────────────────────────────────

/// One declared field: name, semantic kind, required flag, documentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: String,
    pub kind: FieldKind,
    /// Absent values are rejected at construction when set.
    pub required: bool,
    /// Human-readable description, passed through to generated docs.
    pub description: String,
}

impl FieldSpec {
    /// A required field of the given kind.
    pub fn required(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            required: true,
            description: String::new(),
        }
    }

    /// An optional field of the given kind.
    pub fn optional(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            required: false,
            description: String::new(),
        }
    }

    /// Attach a documentation string.
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

// ── Entity type ──────────────────────────────────────────────────────────────

/// A schema entity type: an ordered sequence of [`FieldSpec`]s.
///
/// Field order is declaration order and drives validation order, hashing
/// order, and the slot layout of [`ValueObject`] and [`ValueBuilder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityType {
    name: String,
    description: String,
    fields: Vec<FieldSpec>,
}

impl EntityType {
    /// Build an entity type from its declared fields.
    ///
    /// Returns [`ValueError::DuplicateField`] if two fields share a name;
    /// a descriptor with ambiguous field names cannot address its slots.
    pub fn new(name: impl Into<String>, fields: Vec<FieldSpec>) -> ValueResult<Arc<Self>> {
        Self::describe(name, "", fields)
    }

    /// Like [`EntityType::new`], with a documentation string.
    pub fn describe(
        name: impl Into<String>,
        description: impl Into<String>,
        fields: Vec<FieldSpec>,
    ) -> ValueResult<Arc<Self>> {
        let name = name.into();
        let mut seen: Vec<&str> = Vec::new();
        for field in &fields {
            if seen.contains(&field.name.as_str()) {
                return Err(ValueError::DuplicateField {
                    entity: name,
                    field: field.name.clone(),
                });
            }
            seen.push(&field.name);
        }
        Ok(Arc::new(Self {
            name,
            description: description.into(),
            fields,
        }))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Declared fields, in declaration order.
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Slot index of a field, if declared.
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    /// Spec of a field, if declared.
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }
}

// ── Shared-handle conveniences ───────────────────────────────────────────────

/// Construction entry points on a shared [`EntityType`] handle.
///
/// Descriptors circulate as `Arc<EntityType>`; this extension keeps the
/// call sites fluent (`ty.builder()`, `ty.construct(..)`) without cloning
/// at every use.
pub trait EntityTypeExt {
    /// Start an empty staged builder for this type.
    fn builder(&self) -> ValueBuilder;

    /// Construct a value directly, one slot per declared field.
    ///
    /// See [`ValueObject::construct`].
    fn construct(&self, values: Vec<Option<FieldValue>>) -> ValueResult<ValueObject>;
}

impl EntityTypeExt for Arc<EntityType> {
    fn builder(&self) -> ValueBuilder {
        ValueBuilder::new(Arc::clone(self))
    }

    fn construct(&self, values: Vec<Option<FieldValue>>) -> ValueResult<ValueObject> {
        ValueObject::construct(Arc::clone(self), values)
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn person() -> Arc<EntityType> {
        EntityType::describe(
            "Person",
            "A class to represent a person",
            vec![
                FieldSpec::required("id", FieldKind::Uuid).describe("Id of the person"),
                FieldSpec::required("name", FieldKind::Text).describe("Name of the person"),
                FieldSpec::optional("nickname", FieldKind::Text),
            ],
        )
        .unwrap()
    }

    #[test]
    fn fields_keep_declaration_order() {
        let ty = person();
        let names: Vec<&str> = ty.fields().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["id", "name", "nickname"]);
    }

    #[test]
    fn field_index_matches_declaration_order() {
        let ty = person();
        assert_eq!(ty.field_index("id"), Some(0));
        assert_eq!(ty.field_index("nickname"), Some(2));
        assert_eq!(ty.field_index("age"), None);
    }

    #[test]
    fn field_lookup_by_name() {
        let ty = person();
        let f = ty.field("name").unwrap();
        assert_eq!(f.kind, FieldKind::Text);
        assert!(f.required);
        assert!(!ty.field("nickname").unwrap().required);
    }

    #[test]
    fn rejects_duplicate_field_names() {
        let err = EntityType::new(
            "Person",
            vec![
                FieldSpec::required("id", FieldKind::Uuid),
                FieldSpec::optional("id", FieldKind::Text),
            ],
        )
        .unwrap_err();
        assert_eq!(
            err,
            ValueError::DuplicateField {
                entity: "Person".to_string(),
                field: "id".to_string(),
            }
        );
    }

    #[test]
    fn keyword_for_builtin_and_entity_kinds() {
        assert_eq!(FieldKind::Uuid.keyword(), "uuid");
        assert_eq!(FieldKind::Boolean.keyword(), "boolean");
        assert_eq!(FieldKind::Entity("Address".to_string()).keyword(), "Address");
    }

    #[test]
    fn description_is_carried() {
        let ty = person();
        assert_eq!(ty.description(), "A class to represent a person");
        assert_eq!(ty.field("id").unwrap().description, "Id of the person");
    }
}
