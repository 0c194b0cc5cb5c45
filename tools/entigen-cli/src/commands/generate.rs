//! `entigen generate` subcommand
//!
//! Reads a schema document and emits:
//! - `src/generated_model.rs` - compilable Rust model
//! - `entities.mermaid` - Mermaid class diagram
//!
//! With `--model-crate DIR`, emits a standalone crate instead
//! (`DIR/Cargo.toml`, `DIR/src/lib.rs`, `DIR/src/model.rs`).
//!
//! # Usage
//!
//! ```text
//! entigen generate                           # generate both artefacts
//! entigen generate --check                   # validate only (CI)
//! entigen generate --dry-run                 # print to stdout, don't write
//! entigen generate --schema path/schema.toml # custom schema path
//! entigen generate --model-crate crates/model
//! ```

use crate::error::{CliError, CliResult};
use anyhow::Context;
use clap::Args;
use colored::Colorize;
use entigen_codegen::{
    generate_cargo_toml, generate_lib_rs, generate_mermaid, generate_model_rs, generate_rust,
    validate, SchemaDoc, Severity, ValidationError,
};
use std::path::{Path, PathBuf};

/// Generate Rust model and Mermaid diagram from a schema document
#[derive(Debug, Args)]
pub struct GenerateCommand {
    /// Path to the schema document
    #[arg(long, default_value = "entigen.toml")]
    pub schema: PathBuf,

    /// Output path for the Mermaid diagram
    #[arg(long, default_value = "entities.mermaid")]
    pub mermaid: PathBuf,

    /// Output path for generated Rust source
    #[arg(long, default_value = "src/generated_model.rs")]
    pub rust: PathBuf,

    /// Emit a standalone model crate into this directory instead
    #[arg(long)]
    pub model_crate: Option<PathBuf>,

    /// Validate the schema document without writing files (exit 1 if errors found)
    #[arg(long)]
    pub check: bool,

    /// Print generated output to stdout instead of writing files
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    pub fn execute(self) -> CliResult<()> {
        // ── Read the schema document ───────────────────────────────────────
        if !self.schema.exists() {
            return Err(CliError::SchemaNotFound {
                path: self.schema.display().to_string(),
            });
        }

        let toml_src = std::fs::read_to_string(&self.schema)
            .with_context(|| format!("reading {}", self.schema.display()))?;

        let doc = SchemaDoc::from_toml(&toml_src)
            .with_context(|| format!("parsing {}", self.schema.display()))?;

        // ── Validate ───────────────────────────────────────────────────────
        let errors = validate(&doc);
        let has_errors = print_validation_results(&errors, &self.schema);

        if has_errors {
            return Err(
                anyhow::anyhow!("validation failed; fix the errors above and retry").into(),
            );
        }

        if self.check {
            println!(
                "{} {} validated successfully",
                "✓".green(),
                self.schema.display()
            );
            return Ok(());
        }

        // ── Standalone model crate ─────────────────────────────────────────
        if let Some(dir) = &self.model_crate {
            if doc.project.is_none() {
                return Err(CliError::MissingProject);
            }

            let cargo_src = generate_cargo_toml(&doc);
            let lib_src = generate_lib_rs();
            let model_src = generate_model_rs(&doc);

            if self.dry_run {
                print_artefact(&dir.join("Cargo.toml"), &cargo_src);
                print_artefact(&dir.join("src/lib.rs"), &lib_src);
                print_artefact(&dir.join("src/model.rs"), &model_src);
                return Ok(());
            }

            write_if_changed(&dir.join("Cargo.toml"), &cargo_src)?;
            write_if_changed(&dir.join("src/lib.rs"), &lib_src)?;
            write_if_changed(&dir.join("src/model.rs"), &model_src)?;

            println!("{} {} entities processed", "✓".green(), doc.entities.len());
            return Ok(());
        }

        // ── Generate ───────────────────────────────────────────────────────
        let mermaid_src = generate_mermaid(&doc);
        let rust_src = generate_rust(&doc);

        if self.dry_run {
            print_artefact(&self.mermaid, &mermaid_src);
            print_artefact(&self.rust, &rust_src);
            return Ok(());
        }

        // ── Write files ────────────────────────────────────────────────────
        write_if_changed(&self.mermaid, &mermaid_src)?;
        write_if_changed(&self.rust, &rust_src)?;

        println!("{} {} entities processed", "✓".green(), doc.entities.len());

        Ok(())
    }
}

// ── Helpers ──────────────────────────────────────────────────────────────────

/// Print validation results and return `true` if any errors were found.
fn print_validation_results(errors: &[ValidationError], schema_path: &Path) -> bool {
    let mut has_errors = false;
    for e in errors {
        match e.severity {
            Severity::Error => {
                eprintln!("{} [{}] {}", "✗".red(), e.location, e.message);
                has_errors = true;
            }
            Severity::Warning => {
                eprintln!("{} [{}] {}", "!".yellow(), e.location, e.message);
            }
        }
    }
    if !errors.is_empty() {
        eprintln!("  in: {}", schema_path.display());
    }
    has_errors
}

/// Print one artefact to stdout with a dimmed path header.
fn print_artefact(path: &Path, contents: &str) {
    println!("{}  {}", "──".dimmed(), path.display());
    println!("{contents}");
}

/// Write `contents` to `path`, creating parent directories as needed.
/// Prints a status line indicating whether the file was created or unchanged.
fn write_if_changed(path: &Path, contents: &str) -> CliResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating directory: {}", parent.display()))?;
    }

    // Read existing to detect changes
    let existing = std::fs::read_to_string(path).ok();
    let changed = existing.as_deref() != Some(contents);

    if changed {
        std::fs::write(path, contents).with_context(|| format!("writing {}", path.display()))?;
        println!("  {} {} written", "→".cyan(), path.display());
    } else {
        println!("  {} {} unchanged", "·".dimmed(), path.display());
    }

    Ok(())
}
