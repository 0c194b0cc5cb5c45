//! Rust source code generator
//!
//! Converts a [`SchemaDoc`] into compilable Rust source: one immutable
//! value struct and one staged builder per schema entity, validating
//! required fields through `entigen_core::ValueError`.
//!
//! Uses [`quote`] for quasi-quoting token streams and [`prettyplease`] for
//! formatting the output into idiomatic Rust.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use tracing::debug;

use crate::schema::{EntityDef, FieldDef, SchemaDoc};

// ── Public API ───────────────────────────────────────────────────────────────

/// Generate a complete Rust source file from a schema document.
///
/// The returned string can be written to `src/generated_model.rs`.
/// It contains, per entity:
/// - one immutable struct with private fields and read-only accessors
/// - structural equality and hashing via `derive(PartialEq, Eq, Hash)`
/// - a `<Name>Builder` with chainable `with_*` setters and a reusable
///   `build()` that reports the first absent required field
pub fn generate_rust(doc: &SchemaDoc) -> String {
    let formatted = generate_model_inner(doc);

    let header = "\
// @generated - do not edit manually.\n\
// Source: the entigen schema document. Regenerate with `entigen generate`.\n\n";

    format!("{header}{formatted}")
}

/// Generate `model.rs` for a standalone model crate (no `@generated` header).
pub fn generate_model_rs(doc: &SchemaDoc) -> String {
    generate_model_inner(doc)
}

fn generate_model_inner(doc: &SchemaDoc) -> String {
    debug!(entities = doc.entities.len(), "generating rust model");

    let imports = emit_imports(doc);

    let entity_items: Vec<TokenStream> = doc
        .entities
        .iter()
        .flat_map(|entity| {
            vec![
                emit_entity_struct(entity),
                emit_entity_impl(entity),
                emit_schema_entity_impl(entity),
                emit_builder(entity),
            ]
        })
        .collect();

    let file_tokens = quote! {
        #imports
        #(#entity_items)*
    };

    let syntax_tree = syn::parse2(file_tokens).expect("generated tokens should be valid Rust");
    prettyplease::unparse(&syntax_tree)
}

/// Generate `Cargo.toml` content for a standalone model crate.
///
/// Requires `doc.project` to be `Some`. The caller should validate this
/// before calling.
pub fn generate_cargo_toml(doc: &SchemaDoc) -> String {
    let project = doc
        .project
        .as_ref()
        .expect("generate_cargo_toml requires [project] block in the schema document");
    let crate_name = format!("{}-model", project.name);
    let edition = project.edition.as_deref().unwrap_or("2021");

    let mut deps = String::from(
        "entigen-core = \"0.1\"\n\
         serde = { version = \"1\", features = [\"derive\"] }\n",
    );
    if has_uuid_field(doc) {
        deps.push_str("uuid = { version = \"1\", features = [\"v4\", \"serde\"] }\n");
    }

    format!(
        r#"# Regenerate with `entigen generate --model-crate`
[package]
name = "{crate_name}"
version = "0.1.0"
edition = "{edition}"

[dependencies]
{deps}"#
    )
}

/// Generate `lib.rs` content for a standalone model crate.
pub fn generate_lib_rs() -> String {
    "\
// Regenerate with `entigen generate --model-crate`
mod model;

// Re-export all generated entity types for downstream crates
pub use model::*;
"
    .to_string()
}

// ── Imports ──────────────────────────────────────────────────────────────────

fn has_uuid_field(doc: &SchemaDoc) -> bool {
    doc.entities
        .iter()
        .any(|e| e.fields.iter().any(|f| f.field_type == "uuid"))
}

fn emit_imports(doc: &SchemaDoc) -> TokenStream {
    let uuid_import = if has_uuid_field(doc) {
        quote! { use uuid::Uuid; }
    } else {
        quote! {}
    };

    quote! {
        use entigen_core::{SchemaEntity, ValueError};
        use serde::{Deserialize, Serialize};
        #uuid_import
    }
}

// ── Value struct ─────────────────────────────────────────────────────────────

/// The Rust type backing a field's semantic type keyword.
fn base_type(field: &FieldDef) -> syn::Type {
    let type_str = match field.field_type.as_str() {
        "uuid" => "Uuid",
        "text" => "String",
        "integer" => "i64",
        "boolean" => "bool",
        entity_name => entity_name,
    };
    syn::parse_str(type_str).unwrap_or_else(|_| {
        panic!(
            "invalid type `{}` for field `{}`",
            field.field_type, field.name
        )
    })
}

/// Kinds whose emitted Rust representation is `Copy`.
fn is_copy_kind(field: &FieldDef) -> bool {
    matches!(field.field_type.as_str(), "uuid" | "integer" | "boolean")
}

/// The declared slot type: bare for required fields, `Option<T>` otherwise.
fn slot_type(field: &FieldDef) -> TokenStream {
    let base = base_type(field);
    if field.required {
        quote! { #base }
    } else {
        quote! { Option<#base> }
    }
}

fn emit_entity_struct(entity: &EntityDef) -> TokenStream {
    let struct_name = format_ident!("{}", entity.name);
    let doc = if entity.description.is_empty() {
        format!("Value type for the `{}` schema entity.", entity.name)
    } else {
        entity.description.clone()
    };

    let fields: Vec<TokenStream> = entity
        .fields
        .iter()
        .map(|f| {
            let fname = format_ident!("{}", f.name);
            let ftype = slot_type(f);
            if f.description.is_empty() {
                quote! { #fname: #ftype, }
            } else {
                let desc = &f.description;
                quote! {
                    #[doc = #desc]
                    #fname: #ftype,
                }
            }
        })
        .collect();

    quote! {
        #[doc = #doc]
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct #struct_name {
            #(#fields)*
        }
    }
}

// ── Constructor and accessors ────────────────────────────────────────────────

fn emit_entity_impl(entity: &EntityDef) -> TokenStream {
    let struct_name = format_ident!("{}", entity.name);
    let builder_name = format_ident!("{}Builder", entity.name);

    let params: Vec<TokenStream> = entity
        .fields
        .iter()
        .map(|f| {
            let fname = format_ident!("{}", f.name);
            let ftype = slot_type(f);
            quote! { #fname: #ftype }
        })
        .collect();

    let field_names: Vec<syn::Ident> = entity
        .fields
        .iter()
        .map(|f| format_ident!("{}", f.name))
        .collect();

    let accessors: Vec<TokenStream> = entity.fields.iter().map(emit_accessor).collect();

    let builder_doc = format!("Start an empty [`{}`].", builder_name);

    quote! {
        impl #struct_name {
            /// Construct with every field supplied, in declaration order.
            pub fn new(#(#params),*) -> Self {
                Self { #(#field_names),* }
            }

            #[doc = #builder_doc]
            pub fn builder() -> #builder_name {
                #builder_name::default()
            }

            #(#accessors)*
        }
    }
}

/// One read-only accessor: by value for `Copy` kinds, borrowed otherwise.
fn emit_accessor(field: &FieldDef) -> TokenStream {
    let fname = format_ident!("{}", field.name);
    let base = base_type(field);

    let (ret, body) = match (field.field_type.as_str(), field.required) {
        ("uuid" | "integer" | "boolean", true) => (quote! { #base }, quote! { self.#fname }),
        ("uuid" | "integer" | "boolean", false) => {
            (quote! { Option<#base> }, quote! { self.#fname })
        }
        ("text", true) => (quote! { &str }, quote! { self.#fname.as_str() }),
        ("text", false) => (quote! { Option<&str> }, quote! { self.#fname.as_deref() }),
        (_, true) => (quote! { &#base }, quote! { &self.#fname }),
        (_, false) => (quote! { Option<&#base> }, quote! { self.#fname.as_ref() }),
    };

    if field.description.is_empty() {
        quote! {
            pub fn #fname(&self) -> #ret {
                #body
            }
        }
    } else {
        let desc = &field.description;
        quote! {
            #[doc = #desc]
            pub fn #fname(&self) -> #ret {
                #body
            }
        }
    }
}

// ── SchemaEntity impl ────────────────────────────────────────────────────────

fn emit_schema_entity_impl(entity: &EntityDef) -> TokenStream {
    let struct_name = format_ident!("{}", entity.name);
    let schema_name = to_snake_case(&entity.name);

    quote! {
        impl SchemaEntity for #struct_name {
            const NAME: &'static str = #schema_name;
        }
    }
}

// ── Builder ──────────────────────────────────────────────────────────────────

fn emit_builder(entity: &EntityDef) -> TokenStream {
    let struct_name = format_ident!("{}", entity.name);
    let builder_name = format_ident!("{}Builder", entity.name);
    let doc = format!("Staged, reusable builder for [`{}`].", entity.name);

    let slots: Vec<TokenStream> = entity
        .fields
        .iter()
        .map(|f| {
            let fname = format_ident!("{}", f.name);
            let base = base_type(f);
            quote! { #fname: Option<#base>, }
        })
        .collect();

    let setters: Vec<TokenStream> = entity
        .fields
        .iter()
        .map(|f| {
            let fname = format_ident!("{}", f.name);
            let setter = format_ident!("with_{}", f.name);
            let base = base_type(f);
            quote! {
                pub fn #setter(mut self, #fname: #base) -> Self {
                    self.#fname = Some(#fname);
                    self
                }
            }
        })
        .collect();

    let assignments: Vec<TokenStream> = entity
        .fields
        .iter()
        .map(|f| {
            let fname = format_ident!("{}", f.name);
            let fname_str = &f.name;
            // Copy-typed slots are moved out; cloning them would be noise
            // in the emitted source.
            match (f.required, is_copy_kind(f)) {
                (true, true) => quote! {
                    #fname: self
                        .#fname
                        .ok_or_else(|| ValueError::missing_required(#fname_str))?,
                },
                (true, false) => quote! {
                    #fname: self
                        .#fname
                        .clone()
                        .ok_or_else(|| ValueError::missing_required(#fname_str))?,
                },
                (false, true) => quote! { #fname: self.#fname, },
                (false, false) => quote! { #fname: self.#fname.clone(), },
            }
        })
        .collect();

    quote! {
        #[doc = #doc]
        #[derive(Debug, Clone, Default)]
        pub struct #builder_name {
            #(#slots)*
        }

        impl #builder_name {
            #(#setters)*

            /// Check required fields in declaration order and produce a new,
            /// independent value. The builder itself is left untouched and
            /// may be built again.
            pub fn build(&self) -> Result<#struct_name, ValueError> {
                Ok(#struct_name {
                    #(#assignments)*
                })
            }
        }
    }
}

// ── Utilities ────────────────────────────────────────────────────────────────

/// Convert a PascalCase string to snake_case.
///
/// # Examples
/// ```
/// # use entigen_codegen::rust::to_snake_case;
/// assert_eq!(to_snake_case("Person"), "person");
/// assert_eq!(to_snake_case("PurchaseOrder"), "purchase_order");
/// ```
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() && i > 0 {
            result.push('_');
        }
        for lc in c.to_lowercase() {
            result.push(lc);
        }
    }
    result
}

// ── Tests ────────────────────────────────────────────────────────────────────
