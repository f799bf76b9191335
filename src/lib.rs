//! Logseq Folders - convert Logseq namespace pages into real folders.
//!
//! Logseq stores hierarchical pages as flat files whose names encode the
//! hierarchy with a triple-underscore separator: `projects___rust___notes.md`
//! is the page `projects/rust/notes`. This library moves such files, in
//! place, into the equivalent nested folder structure.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use logseq_folders::convert::convert_directory;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let state = convert_directory(Path::new("./pages"))?;
//!     println!("converted {} pages", state.converted_count());
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod convert;
pub mod error;
pub mod fs;
pub mod output;

// Re-exports for convenience
pub use convert::{convert_directory, convert_with_confirmation, ConvertState};
pub use error::{Error, Result};
