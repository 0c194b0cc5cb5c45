//! Runtime field values
//!
//! [`FieldValue`] is the dynamic payload of one slot in a [`ValueObject`]:
//! one variant per [`FieldKind`]. Equality is structural per kind and all
//! variants hash deterministically.
//!
//! [`FieldKind`]: crate::FieldKind
//! [`ValueObject`]: crate::ValueObject

use std::fmt;

use serde::ser::{Serialize, Serializer};
use uuid::Uuid;

use crate::object::ValueObject;

/// One field's runtime value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldValue {
    Uuid(Uuid),
    Text(String),
    Integer(i64),
    Boolean(bool),
    /// A nested entity value, compared and hashed by its own contract.
    Entity(ValueObject),
}

impl FieldValue {
    /// Schema keyword of this value's kind.
    pub fn kind_keyword(&self) -> &'static str {
        match self {
            FieldValue::Uuid(_) => "uuid",
            FieldValue::Text(_) => "text",
            FieldValue::Integer(_) => "integer",
            FieldValue::Boolean(_) => "boolean",
            FieldValue::Entity(_) => "entity",
        }
    }

    pub fn as_uuid(&self) -> Option<Uuid> {
        match self {
            FieldValue::Uuid(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            FieldValue::Boolean(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_entity(&self) -> Option<&ValueObject> {
        match self {
            FieldValue::Entity(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Uuid(v) => write!(f, "{v}"),
            FieldValue::Text(v) => write!(f, "{v}"),
            FieldValue::Integer(v) => write!(f, "{v}"),
            FieldValue::Boolean(v) => write!(f, "{v}"),
            FieldValue::Entity(v) => write!(f, "{}", v.entity_type().name()),
        }
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldValue::Uuid(v) => v.serialize(serializer),
            FieldValue::Text(v) => v.serialize(serializer),
            FieldValue::Integer(v) => v.serialize(serializer),
            FieldValue::Boolean(v) => v.serialize(serializer),
            FieldValue::Entity(v) => v.serialize(serializer),
        }
    }
}

// ── Conversions ──────────────────────────────────────────────────────────────

impl From<Uuid> for FieldValue {
    fn from(v: Uuid) -> Self {
        FieldValue::Uuid(v)
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::Text(v)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::Text(v.to_string())
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        FieldValue::Integer(v)
    }
}

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        FieldValue::Boolean(v)
    }
}

impl From<ValueObject> for FieldValue {
    fn from(v: ValueObject) -> Self {
        FieldValue::Entity(v)
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
