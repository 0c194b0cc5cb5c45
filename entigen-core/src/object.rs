//! Immutable entity values
//!
//! A [`ValueObject`] is one constructed instance of an [`EntityType`]: one
//! slot per declared field, fixed at construction and never mutated.
//! Required fields are checked once, at the single construction entry point;
//! accessors, equality, and hashing are total over a constructed value.

use std::hash::{Hash, Hasher};
use std::sync::Arc;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::descriptor::EntityType;
use crate::error::{ValueError, ValueResult};
use crate::value::FieldValue;

/// An immutable value of a schema entity type.
///
/// Two values are equal iff they are of the same entity type and every slot
/// compares equal pairwise; equal values hash identically. Values are
/// cheap to clone (the descriptor is shared) and safe to share across
/// threads once constructed.
#[derive(Debug, Clone)]
pub struct ValueObject {
    ty: Arc<EntityType>,
    values: Vec<Option<FieldValue>>,
}

impl ValueObject {
    /// Construct a value from one slot per declared field, in declaration
    /// order.
    ///
    /// Checks run in declaration order and stop at the first failure, so the
    /// reported field is deterministic:
    /// - a slot count that differs from the declaration is
    ///   [`ValueError::FieldCount`],
    /// - the first required field holding `None` is
    ///   [`ValueError::MissingRequired`].
    ///
    /// No partially constructed value is ever observable: on error nothing
    /// is returned, on success every required slot is occupied for the
    /// value's lifetime.
    pub fn construct(
        ty: Arc<EntityType>,
        values: Vec<Option<FieldValue>>,
    ) -> ValueResult<Self> {
        if values.len() != ty.fields().len() {
            return Err(ValueError::FieldCount {
                entity: ty.name().to_string(),
                expected: ty.fields().len(),
                supplied: values.len(),
            });
        }
        for (spec, slot) in ty.fields().iter().zip(&values) {
            if spec.required && slot.is_none() {
                return Err(ValueError::missing_required(&spec.name));
            }
        }
        Ok(Self { ty, values })
    }

    /// The descriptor this value was constructed from.
    pub fn entity_type(&self) -> &Arc<EntityType> {
        &self.ty
    }

    /// Read one field's value.
    ///
    /// Returns `None` for an absent optional field, and also for a field
    /// name the type does not declare; it never fails.
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        let idx = self.ty.field_index(field)?;
        self.values[idx].as_ref()
    }

    /// Render this value as a JSON object.
    ///
    /// Field names become keys in declaration order; absent optional fields
    /// are omitted.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).expect("value objects always serialize")
    }
}

impl PartialEq for ValueObject {
    fn eq(&self, other: &Self) -> bool {
        self.ty.name() == other.ty.name() && self.values == other.values
    }
}

impl Eq for ValueObject {}

impl Hash for ValueObject {
    /// Order-sensitive fold over the field slots in declaration order,
    /// prefixed by the entity type name. Absent slots contribute a fixed
    /// zero sentinel, so optional fields never make hashing partial.
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ty.name().hash(state);
        for slot in &self.values {
            match slot {
                Some(value) => value.hash(state),
                None => state.write_u8(0),
            }
        }
    }
}

impl Serialize for ValueObject {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let occupied = self.values.iter().filter(|v| v.is_some()).count();
        let mut map = serializer.serialize_map(Some(occupied))?;
        for (spec, slot) in self.ty.fields().iter().zip(&self.values) {
            if let Some(value) = slot {
                map.serialize_entry(&spec.name, value)?;
            }
        }
        map.end()
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
