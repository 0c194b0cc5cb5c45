//! Schema document validator
//!
//! Checks a [`SchemaDoc`] for structural and semantic errors before code is
//! generated or descriptors are lowered.

use crate::schema::SchemaDoc;

/// A single validation problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Human-readable description of the problem.
    pub message: String,
    /// Location in the schema document that caused it (e.g. `entities[0].fields[1]`).
    pub location: String,
    /// Whether this blocks code generation (`Error`) or is advisory (`Warning`).
    pub severity: Severity,
}

/// Severity of a [`ValidationError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Severity {
    /// Blocks code generation: generated code would be invalid or uncompilable.
    Error,
    /// Advisory: generated code may still work but behaviour could be unexpected.
    Warning,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self.severity {
            Severity::Error => "ERROR",
            Severity::Warning => "WARN",
        };
        write!(f, "[{}] {}: {}", tag, self.location, self.message)
    }
}

/// Builtin semantic field type keywords.
///
/// Any other `entities.fields[*].type` value must name a declared entity.
pub const BUILTIN_FIELD_TYPES: &[&str] = &["uuid", "text", "integer", "boolean"];

/// Rust keywords that cannot be used as emitted identifiers.
const RUST_RESERVED: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl",
    "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub",
    "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true", "try",
    "type", "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// Validate a [`SchemaDoc`] and return all problems found.
///
/// An empty `Vec` means the document is valid and codegen may proceed.
/// Any entry with [`Severity::Error`] should block generation.
pub fn validate(doc: &SchemaDoc) -> Vec<ValidationError> {
    let mut errors: Vec<ValidationError> = Vec::new();

    validate_meta(doc, &mut errors);
    validate_entities(doc, &mut errors);

    errors
}

/// Returns `true` if `validate()` produces no `Error`-severity issues.
pub fn is_valid(doc: &SchemaDoc) -> bool {
    !validate(doc).iter().any(|e| e.severity == Severity::Error)
}

// ── Internal validators ──────────────────────────────────────────────────────

fn validate_meta(doc: &SchemaDoc, errors: &mut Vec<ValidationError>) {
    if doc.meta.entigen_version.is_empty() {
        errors.push(ValidationError {
            message: "entigen_version must not be empty".to_string(),
            location: "meta.entigen_version".to_string(),
            severity: Severity::Error,
        });
    }
}

fn validate_entities(doc: &SchemaDoc, errors: &mut Vec<ValidationError>) {
    let mut seen_names: Vec<&str> = Vec::new();

    for (idx, entity) in doc.entities.iter().enumerate() {
        let loc = format!("entities[{idx}]");

        // Name must be non-empty
        if entity.name.is_empty() {
            errors.push(ValidationError {
                message: "entity name must not be empty".to_string(),
                location: loc.clone(),
                severity: Severity::Error,
            });
            continue; // Can't do further checks without a name
        }

        check_identifier(&entity.name, &format!("{loc}.name"), errors);

        // Name should start with an uppercase letter (PascalCase convention)
        if !entity
            .name
            .chars()
            .next()
            .map(|c| c.is_uppercase())
            .unwrap_or(false)
        {
            errors.push(ValidationError {
                message: format!(
                    "entity name '{}' should start with an uppercase letter (PascalCase)",
                    entity.name
                ),
                location: format!("{loc}.name"),
                severity: Severity::Warning,
            });
        }

        // Duplicate entity names
        if seen_names.contains(&entity.name.as_str()) {
            errors.push(ValidationError {
                message: format!("duplicate entity name '{}'", entity.name),
                location: format!("{loc}.name"),
                severity: Severity::Error,
            });
        } else {
            seen_names.push(&entity.name);
        }

        // Warn if no fields
        if entity.fields.is_empty() {
            errors.push(ValidationError {
                message: format!(
                    "entity '{}' has no fields; the value type will be empty",
                    entity.name
                ),
                location: format!("{loc}.fields"),
                severity: Severity::Warning,
            });
        }

        // Validate fields
        let mut seen_fields: Vec<&str> = Vec::new();
        for (fidx, field) in entity.fields.iter().enumerate() {
            let floc = format!("{loc}.fields[{fidx}]");

            if field.name.is_empty() {
                errors.push(ValidationError {
                    message: "field name must not be empty".to_string(),
                    location: floc,
                    severity: Severity::Error,
                });
                continue;
            }

            check_identifier(&field.name, &format!("{floc}.name"), errors);

            // Field names are emitted as-is; uppercase letters break the
            // snake_case accessor and builder method names.
            if field.name.chars().any(|c| c.is_uppercase()) {
                errors.push(ValidationError {
                    message: format!(
                        "field name '{}' should be snake_case",
                        field.name
                    ),
                    location: format!("{floc}.name"),
                    severity: Severity::Warning,
                });
            }

            if seen_fields.contains(&field.name.as_str()) {
                errors.push(ValidationError {
                    message: format!("duplicate field name '{}'", field.name),
                    location: format!("{floc}.name"),
                    severity: Severity::Error,
                });
            } else {
                seen_fields.push(&field.name);
            }

            // Type keyword must be builtin or name a declared entity
            let is_builtin = BUILTIN_FIELD_TYPES.contains(&field.field_type.as_str());
            let is_entity_ref = doc.entity(&field.field_type).is_some();
            if !is_builtin && !is_entity_ref {
                errors.push(ValidationError {
                    message: format!(
                        "unsupported field type '{}'; valid types: {}, or a declared entity name",
                        field.field_type,
                        BUILTIN_FIELD_TYPES.join(", ")
                    ),
                    location: format!("{floc}.type"),
                    severity: Severity::Error,
                });
            }

            // A required field of the entity's own type can never be constructed
            if field.required && field.field_type == entity.name {
                errors.push(ValidationError {
                    message: format!(
                        "required field '{}' nests entity '{}' inside itself; \
                         no value of this type could ever be constructed",
                        field.name, entity.name
                    ),
                    location: format!("{floc}.type"),
                    severity: Severity::Error,
                });
            }
        }
    }
}

/// Reject names that are not valid Rust identifiers or are reserved words.
fn check_identifier(name: &str, location: &str, errors: &mut Vec<ValidationError>) {
    let mut chars = name.chars();
    let valid_start = chars
        .next()
        .map(|c| c.is_ascii_alphabetic() || c == '_')
        .unwrap_or(false);
    let valid_rest = chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
    if !valid_start || !valid_rest {
        errors.push(ValidationError {
            message: format!("'{name}' is not a valid identifier"),
            location: location.to_string(),
            severity: Severity::Error,
        });
        return;
    }
    if RUST_RESERVED.contains(&name) {
        errors.push(ValidationError {
            message: format!("'{name}' is a Rust reserved word and cannot be emitted"),
            location: location.to_string(),
            severity: Severity::Error,
        });
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
