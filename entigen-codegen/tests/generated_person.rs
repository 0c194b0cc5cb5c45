//! Behavioural checks over a checked-in sample of generated output.
//!
//! The `model` module below is what `generate_rust` emits for a `Person`
//! entity with `id: uuid (required)`, `name: text (required)`, and
//! `nickname: text` (optional). Compiling and exercising it here pins the
//! runtime semantics of emitted code: constructor round-trips, accessor
//! behaviour, structural equality and hashing, and builder validation.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use entigen_core::{SchemaEntity, ValueError};
use uuid::Uuid;

mod model {
    use entigen_core::{SchemaEntity, ValueError};
    use serde::{Deserialize, Serialize};
    use uuid::Uuid;

    /// A class to represent a person
    #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct Person {
        /// Id of the person
        id: Uuid,
        /// Name of the person
        name: String,
        nickname: Option<String>,
    }

    impl Person {
        /// Construct with every field supplied, in declaration order.
        pub fn new(id: Uuid, name: String, nickname: Option<String>) -> Self {
            Self { id, name, nickname }
        }

        /// Start an empty [`PersonBuilder`].
        pub fn builder() -> PersonBuilder {
            PersonBuilder::default()
        }

        /// Id of the person
        pub fn id(&self) -> Uuid {
            self.id
        }

        /// Name of the person
        pub fn name(&self) -> &str {
            self.name.as_str()
        }

        pub fn nickname(&self) -> Option<&str> {
            self.nickname.as_deref()
        }
    }

    impl SchemaEntity for Person {
        const NAME: &'static str = "person";
    }

    /// Staged, reusable builder for [`Person`].
    #[derive(Debug, Clone, Default)]
    pub struct PersonBuilder {
        id: Option<Uuid>,
        name: Option<String>,
        nickname: Option<String>,
    }

    impl PersonBuilder {
        pub fn with_id(mut self, id: Uuid) -> Self {
            self.id = Some(id);
            self
        }

        pub fn with_name(mut self, name: String) -> Self {
            self.name = Some(name);
            self
        }

        pub fn with_nickname(mut self, nickname: String) -> Self {
            self.nickname = Some(nickname);
            self
        }

        /// Check required fields in declaration order and produce a new,
        /// independent value. The builder itself is left untouched and
        /// may be built again.
        pub fn build(&self) -> Result<Person, ValueError> {
            Ok(Person {
                id: self.id.ok_or_else(|| ValueError::missing_required("id"))?,
                name: self
                    .name
                    .clone()
                    .ok_or_else(|| ValueError::missing_required("name"))?,
                nickname: self.nickname.clone(),
            })
        }
    }
}

use model::Person;

fn hash_of(p: &Person) -> u64 {
    let mut h = DefaultHasher::new();
    p.hash(&mut h);
    h.finish()
}

#[test]
fn constructor_round_trips_through_accessors() {
    let id = Uuid::new_v4();
    let p = Person::new(id, "Alice".to_string(), None);
    assert_eq!(p.id(), id);
    assert_eq!(p.name(), "Alice");
    assert_eq!(p.nickname(), None);
}

#[test]
fn equal_field_values_mean_equal_people() {
    let id = Uuid::new_v4();
    let a = Person::new(id, "Alice".to_string(), None);
    let b = Person::new(id, "Alice".to_string(), None);
    assert_eq!(a, a);
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
}

#[test]
fn differing_optional_fields_are_unequal() {
    let id = Uuid::new_v4();
    let a = Person::new(id, "Alice".to_string(), None);
    let b = Person::new(id, "Alice".to_string(), Some("Al".to_string()));
    assert_ne!(a, b);
}

#[test]
fn builder_reports_first_missing_required_field() {
    let err = Person::builder().build().unwrap_err();
    assert_eq!(err, ValueError::missing_required("id"));

    let err = Person::builder()
        .with_name("Bob".to_string())
        .build()
        .unwrap_err();
    assert_eq!(err, ValueError::missing_required("id"));
}

#[test]
fn builder_matches_direct_construction() {
    let id = Uuid::new_v4();
    let built = Person::builder()
        .with_id(id)
        .with_name("Carl".to_string())
        .build()
        .unwrap();
    assert_eq!(built, Person::new(id, "Carl".to_string(), None));
}

#[test]
fn builder_is_reusable_and_last_write_wins() {
    let builder = Person::builder()
        .with_id(Uuid::new_v4())
        .with_name("first".to_string())
        .with_name("second".to_string());
    let a = builder.build().unwrap();
    let b = builder.build().unwrap();
    assert_eq!(a, b);
    assert_eq!(a.name(), "second");
}

#[test]
fn schema_name_is_exposed_through_the_trait() {
    assert_eq!(Person::NAME, "person");
}

#[test]
fn serde_round_trips() {
    let p = Person::new(Uuid::new_v4(), "Alice".to_string(), Some("Al".to_string()));
    let json = serde_json::to_string(&p).unwrap();
    let back: Person = serde_json::from_str(&json).unwrap();
    assert_eq!(back, p);
}
