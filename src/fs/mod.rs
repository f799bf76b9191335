//! Filesystem module.
//!
//! Provides:
//! - Destination path construction
//! - Idempotent directory creation
//! - The file move primitive

pub mod paths;

pub use paths::{destination_path, ensure_dir, move_file};
