//! Lowering schema documents into runtime descriptors
//!
//! Converts a validated [`SchemaDoc`] into the [`EntityType`] descriptors
//! `entigen-core` constructs dynamic values from. Lowering assumes the
//! document has passed [`validate`]; problems that validation reports are
//! surfaced here as errors rather than panics so the two layers stay
//! independently usable.
//!
//! [`validate`]: crate::validate::validate

use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use entigen_core::{EntityType, FieldKind, FieldSpec, ValueError};

use crate::schema::{EntityDef, FieldDef, SchemaDoc};

/// Errors raised while lowering a schema document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LowerError {
    /// A field's type keyword is neither builtin nor a declared entity.
    #[error(
        "unsupported field type '{field_type}' for field '{field}' of entity '{entity}'"
    )]
    UnknownFieldType {
        entity: String,
        field: String,
        field_type: String,
    },

    /// The descriptor itself was rejected (e.g. duplicate field names).
    #[error(transparent)]
    Descriptor(#[from] ValueError),
}

/// Lower every entity in the document, in declaration order.
pub fn lower(doc: &SchemaDoc) -> Result<Vec<Arc<EntityType>>, LowerError> {
    debug!(entities = doc.entities.len(), "lowering schema document");
    doc.entities
        .iter()
        .map(|entity| lower_entity(doc, entity))
        .collect()
}

/// Lower a single entity definition.
pub fn lower_entity(doc: &SchemaDoc, entity: &EntityDef) -> Result<Arc<EntityType>, LowerError> {
    let fields = entity
        .fields
        .iter()
        .map(|field| lower_field(doc, entity, field))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(EntityType::describe(
        &entity.name,
        &entity.description,
        fields,
    )?)
}

fn lower_field(
    doc: &SchemaDoc,
    entity: &EntityDef,
    field: &FieldDef,
) -> Result<FieldSpec, LowerError> {
    let kind = match field.field_type.as_str() {
        "uuid" => FieldKind::Uuid,
        "text" => FieldKind::Text,
        "integer" => FieldKind::Integer,
        "boolean" => FieldKind::Boolean,
        other if doc.entity(other).is_some() => FieldKind::Entity(other.to_string()),
        other => {
            return Err(LowerError::UnknownFieldType {
                entity: entity.name.clone(),
                field: field.name.clone(),
                field_type: other.to_string(),
            });
        }
    };
    let spec = if field.required {
        FieldSpec::required(&field.name, kind)
    } else {
        FieldSpec::optional(&field.name, kind)
    };
    Ok(spec.describe(&field.description))
}

// ── Tests ────────────────────────────────────────────────────────────────────
