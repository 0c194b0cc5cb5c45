//! Value construction errors
//!
//! One error family covers direct construction, builder finalization, and
//! descriptor misuse. Accessors, equality, and hashing never fail.

use thiserror::Error;

/// Result type for value construction operations.
pub type ValueResult<T> = Result<T, ValueError>;

/// Errors raised while building an [`EntityType`] or constructing a value.
///
/// [`MissingRequired`] is the only error an already-valid descriptor can
/// produce at runtime; the remaining variants report descriptor misuse
/// (wrong slot count, unknown field name, duplicate declaration).
///
/// [`EntityType`]: crate::EntityType
/// [`MissingRequired`]: ValueError::MissingRequired
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    /// A field marked required held no value at construction or finalization.
    #[error("must not be absent: {field}")]
    MissingRequired {
        /// Name of the first required field found absent, in declaration order.
        field: String,
    },

    /// A field name was used that the entity type does not declare.
    #[error("entity '{entity}' has no field named '{field}'")]
    UnknownField { entity: String, field: String },

    /// Construction was handed the wrong number of value slots.
    #[error("entity '{entity}' declares {expected} field(s), got {supplied}")]
    FieldCount {
        entity: String,
        expected: usize,
        supplied: usize,
    },

    /// An entity type declared the same field name twice.
    #[error("entity '{entity}' declares duplicate field '{field}'")]
    DuplicateField { entity: String, field: String },
}

impl ValueError {
    /// Create a [`ValueError::MissingRequired`] for the given field.
    pub fn missing_required(field: impl Into<String>) -> Self {
        Self::MissingRequired {
            field: field.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_required_names_the_field() {
        let e = ValueError::missing_required("id");
        assert_eq!(format!("{e}"), "must not be absent: id");
    }

    #[test]
    fn unknown_field_names_entity_and_field() {
        let e = ValueError::UnknownField {
            entity: "Person".to_string(),
            field: "age".to_string(),
        };
        let s = format!("{e}");
        assert!(s.contains("Person"), "Display should show entity:\n{s}");
        assert!(s.contains("age"), "Display should show field:\n{s}");
    }
}
