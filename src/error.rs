//! Error types for the logseq-folders application.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Precondition errors
    #[error("Directory '{}' does not exist", .0.display())]
    DirectoryNotFound(PathBuf),

    // Per-file errors
    #[error("Page name '{0}' contains only namespace separators")]
    EmptyNamespace(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
///
/// Usage errors exit with clap's own code (2) before `main` sees them.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const CONVERT_ERROR: i32 = 1;
    pub const USAGE_ERROR: i32 = 2;
    pub const UNEXPECTED_ERROR: i32 = 3;
}
