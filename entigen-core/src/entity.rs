//! Contract implemented by generated entity types
//!
//! Source emitted by `entigen-codegen` implements [`SchemaEntity`] for every
//! entity struct, tying the compiled type back to its schema name.

/// A typed value object generated from a schema entity.
pub trait SchemaEntity {
    /// snake_case schema name of the entity, stable across regeneration.
    const NAME: &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Person;

    impl SchemaEntity for Person {
        const NAME: &'static str = "person";
    }

    #[test]
    fn name_is_reachable_through_the_trait() {
        fn schema_name<E: SchemaEntity>() -> &'static str {
            E::NAME
        }
        assert_eq!(schema_name::<Person>(), "person");
    }
}
