//! Mermaid diagram generator
//!
//! Converts a [`SchemaDoc`] into a `classDiagram` projection: one class per
//! entity, one member line per field, and one association edge per
//! nested-entity field.

use crate::schema::SchemaDoc;
use crate::validate::BUILTIN_FIELD_TYPES;

/// Generate a Mermaid `classDiagram` from a schema document.
///
/// The returned string can be written directly to a `.mermaid` file.
///
/// # Conventions
/// - One `class` block per entity, fields listed in declaration order
/// - Members read `+<type> <name>`; optional fields carry a `?` suffix
/// - Solid arrows with the field name as label mark nested-entity fields
pub fn generate_mermaid(doc: &SchemaDoc) -> String {
    let mut out = String::new();

    out.push_str("classDiagram\n");

    // ── Entity classes ────────────────────────────────────────────────────────
    for entity in &doc.entities {
        out.push_str(&format!("  class {} {{\n", entity.name));
        for field in &entity.fields {
            let suffix = if field.required { "" } else { "?" };
            out.push_str(&format!(
                "    +{} {}{}\n",
                field.field_type, field.name, suffix
            ));
        }
        out.push_str("  }\n");
    }

    // ── Nested entity associations ────────────────────────────────────────────
    for entity in &doc.entities {
        for field in &entity.fields {
            if !BUILTIN_FIELD_TYPES.contains(&field.field_type.as_str()) {
                out.push_str(&format!(
                    "  {} --> {} : {}\n",
                    entity.name, field.field_type, field.name
                ));
            }
        }
    }

    out
}
