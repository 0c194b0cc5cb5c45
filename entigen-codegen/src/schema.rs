//! Schema document types and TOML parser
//!
//! Deserialises an `entigen.toml` schema document into a [`SchemaDoc`]: the
//! ordered list of entity definitions the generator works from.

use serde::{Deserialize, Serialize};

// ── Top-level document ───────────────────────────────────────────────────────

/// The full contents of a schema document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaDoc {
    /// Optional project metadata for generated crate scaffolding.
    #[serde(default)]
    pub project: Option<ProjectDef>,
    pub meta: Meta,
    #[serde(default)]
    pub entities: Vec<EntityDef>,
}

impl SchemaDoc {
    /// Parse from a TOML string (the contents of the schema document).
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialise back to a TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Look up an entity definition by name.
    pub fn entity(&self, name: &str) -> Option<&EntityDef> {
        self.entities.iter().find(|e| e.name == name)
    }
}

// ── Meta block ───────────────────────────────────────────────────────────────

/// `[meta]` block: format version and timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meta {
    pub entigen_version: String,
    pub created_at: String,
    pub last_modified: String,
}

// ── Project metadata ─────────────────────────────────────────────────────────

/// `[project]` block: drives generated crate naming and Rust edition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectDef {
    /// Project name, used for crate naming: `{name}-model`.
    pub name: String,
    /// Rust edition for the generated crate (default `"2021"` at codegen time).
    #[serde(default)]
    pub edition: Option<String>,
}

// ── Entity definition ────────────────────────────────────────────────────────

/// One `[[entities]]` entry: a schema entity to emit a value type for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityDef {
    /// PascalCase name, e.g. `Person`.
    pub name: String,
    /// Human-readable description, emitted as the struct's doc comment.
    #[serde(default)]
    pub description: String,
    /// Ordered field declarations. Declaration order is validation order.
    #[serde(default)]
    pub fields: Vec<FieldDef>,
}

// ── Field definition ─────────────────────────────────────────────────────────

/// One `[[entities.fields]]` entry: a typed field of the value type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDef {
    pub name: String,
    /// Semantic type keyword (`"uuid"`, `"text"`, `"integer"`, `"boolean"`)
    /// or the name of another declared entity for a nested value.
    #[serde(rename = "type")]
    pub field_type: String,
    /// Absence at construction is an error when set (default optional).
    #[serde(default)]
    pub required: bool,
    /// Doc string emitted on the field and its accessor.
    #[serde(default)]
    pub description: String,
}

// ── Tests ────────────────────────────────────────────────────────────────────
