//! Staged value construction
//!
//! A [`ValueBuilder`] accumulates field values in any order and defers all
//! validation to [`ValueBuilder::build`], which runs the exact same checks
//! as direct construction. Building does not consume or reset the builder;
//! it may be finalized any number of times, each time yielding a fresh,
//! independent value.

use std::sync::Arc;

use crate::descriptor::EntityType;
use crate::error::{ValueError, ValueResult};
use crate::object::ValueObject;
use crate::value::FieldValue;

/// A mutable staging area for one entity type's field values.
///
/// Builders are single-owner, stack-local construction aids; they are not
/// meant to be shared across threads while being filled in.
#[derive(Debug, Clone)]
pub struct ValueBuilder {
    ty: Arc<EntityType>,
    staged: Vec<Option<FieldValue>>,
}

impl ValueBuilder {
    /// Start with every slot absent.
    pub fn new(ty: Arc<EntityType>) -> Self {
        let staged = vec![None; ty.fields().len()];
        Self { ty, staged }
    }

    /// Stage one field's value, returning the builder for chaining.
    ///
    /// May be called in any order, independent of declaration order; calling
    /// it twice for the same field keeps the last value. A field name the
    /// type does not declare is [`ValueError::UnknownField`].
    pub fn with(mut self, field: &str, value: impl Into<FieldValue>) -> ValueResult<Self> {
        let idx = self
            .ty
            .field_index(field)
            .ok_or_else(|| ValueError::UnknownField {
                entity: self.ty.name().to_string(),
                field: field.to_string(),
            })?;
        self.staged[idx] = Some(value.into());
        Ok(self)
    }

    /// Finalize the staged values into a new [`ValueObject`].
    ///
    /// Validation is identical to [`ValueObject::construct`]: required
    /// fields are checked in declaration order and the first absent one is
    /// reported. The builder itself is left untouched, so `build` can be
    /// called again, with or without further [`ValueBuilder::with`] calls
    /// in between.
    pub fn build(&self) -> ValueResult<ValueObject> {
        ValueObject::construct(Arc::clone(&self.ty), self.staged.clone())
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{EntityTypeExt, FieldKind, FieldSpec};
    use uuid::Uuid;

    fn person() -> Arc<EntityType> {
        EntityType::new(
            "Person",
            vec![
                FieldSpec::required("id", FieldKind::Uuid),
                FieldSpec::required("name", FieldKind::Text),
                FieldSpec::optional("nickname", FieldKind::Text),
            ],
        )
        .unwrap()
    }

    #[test]
    fn empty_builder_reports_first_required_field() {
        let err = person().builder().build().unwrap_err();
        assert_eq!(err, ValueError::missing_required("id"));
    }

    #[test]
    fn missing_id_is_reported_even_with_name_set() {
        let err = person()
            .builder()
            .with("name", "Bob")
            .unwrap()
            .build()
            .unwrap_err();
        assert_eq!(err, ValueError::missing_required("id"));
    }

    #[test]
    fn chained_build_equals_direct_construction() {
        let ty = person();
        let id = Uuid::new_v4();
        let built = ty
            .builder()
            .with("id", id)
            .unwrap()
            .with("name", "Carl")
            .unwrap()
            .build()
            .unwrap();
        let direct = ty
            .construct(vec![
                Some(FieldValue::from(id)),
                Some(FieldValue::from("Carl")),
                None,
            ])
            .unwrap();
        assert_eq!(built, direct);
    }

    #[test]
    fn fields_may_be_staged_in_any_order() {
        let ty = person();
        let id = Uuid::new_v4();
        let a = ty
            .builder()
            .with("name", "Alice")
            .unwrap()
            .with("id", id)
            .unwrap()
            .build()
            .unwrap();
        let b = ty
            .builder()
            .with("id", id)
            .unwrap()
            .with("name", "Alice")
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn last_write_wins_for_repeated_fields() {
        let built = person()
            .builder()
            .with("id", Uuid::new_v4())
            .unwrap()
            .with("name", "first")
            .unwrap()
            .with("name", "second")
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(built.get("name").unwrap().as_text(), Some("second"));
    }

    #[test]
    fn build_twice_yields_equal_independent_values() {
        let builder = person()
            .builder()
            .with("id", Uuid::new_v4())
            .unwrap()
            .with("name", "Alice")
            .unwrap();
        let first = builder.build().unwrap();
        let second = builder.build().unwrap();
        assert_eq!(first, second);
        // Two distinct values; dropping one leaves the other intact.
        drop(first);
        assert_eq!(second.get("name").unwrap().as_text(), Some("Alice"));
    }

    #[test]
    fn builder_stays_usable_after_failed_build() {
        let builder = person().builder().with("name", "Alice").unwrap();
        assert!(builder.build().is_err());
        let fixed = builder.with("id", Uuid::new_v4()).unwrap();
        assert!(fixed.build().is_ok());
    }

    #[test]
    fn unknown_field_is_rejected() {
        let err = person().builder().with("age", 41i64).unwrap_err();
        assert_eq!(
            err,
            ValueError::UnknownField {
                entity: "Person".to_string(),
                field: "age".to_string(),
            }
        );
    }
}
