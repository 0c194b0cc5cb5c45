//! CLI error types
//!
//! Errors carry actionable hints alongside the failure itself.

use thiserror::Error;

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI-specific errors with helpful messages and hints.
#[derive(Debug, Error)]
pub enum CliError {
    /// The schema document does not exist at the given path.
    #[error("schema file not found: {path}\n  Hint: pass --schema, or create entigen.toml in the working directory")]
    SchemaNotFound { path: String },

    /// `--model-crate` needs project metadata for crate naming.
    #[error("the schema document has no [project] block\n  Hint: --model-crate derives the crate name from [project] name")]
    MissingProject,

    /// Generic error.
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}
