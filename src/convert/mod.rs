//! Namespace-to-folder conversion.
//!
//! This module handles:
//! - Scanning the target directory for candidate pages
//! - Splitting namespace page names into path segments
//! - Moving each page into its nested folder path

pub mod namespace;
pub mod scan;
pub mod state;

pub use namespace::{has_namespace, split_namespace, NamespaceParts, NAMESPACE_SEPARATOR};
pub use state::{ConvertState, ConvertedFile, FailedFile};

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::fs::{destination_path, ensure_dir, move_file};
use crate::output::{print_converting, print_warning, ConfirmPrompt};

/// Convert every namespace page directly inside `dir` into nested folders.
///
/// The directory must exist before processing begins; otherwise nothing is
/// touched. Failures local to one file are recorded in the returned state
/// and never abort the batch.
pub fn convert_directory(dir: &Path) -> Result<ConvertState> {
    if !dir.is_dir() {
        return Err(Error::DirectoryNotFound(dir.to_path_buf()));
    }

    tracing::info!("Scanning {} for namespace pages...", dir.display());

    let mut state = ConvertState::default();

    for source in scan::markdown_files(dir)? {
        state.scanned_count += 1;

        // Names that are not valid UTF-8 cannot contain the separator.
        let Some(stem) = source.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };

        if !namespace::has_namespace(stem) {
            tracing::debug!("no namespace separator in '{}', skipping", stem);
            continue;
        }

        let source_name = source
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(stem)
            .to_string();

        match convert_file(dir, &source, stem) {
            Ok(dest_path) => {
                print_converting(&source_name, &dest_path);
                state.record_converted(source_name, dest_path);
            }
            Err(e) => {
                print_warning(&format!("Failed to convert {}: {}", source_name, e));
                state.record_failed(source_name, e);
            }
        }
    }

    tracing::info!(
        "Conversion complete: {} moved, {} failed",
        state.converted_count(),
        state.failed_count()
    );

    Ok(state)
}

/// Run the conversion after asking for confirmation.
///
/// No filesystem access happens before the prompt is answered. Returns
/// `None` when the user declines, in which case nothing was touched.
pub fn convert_with_confirmation(
    dir: &Path,
    prompt: &mut dyn ConfirmPrompt,
) -> Result<Option<ConvertState>> {
    if !prompt.confirm("Continue? (y/N):")? {
        return Ok(None);
    }

    convert_directory(dir).map(Some)
}

/// Move one namespace page into its folder path.
///
/// Returns the destination path relative to `root`.
fn convert_file(root: &Path, source: &Path, stem: &str) -> Result<PathBuf> {
    let parts = namespace::split_namespace(stem)?;

    let dest = destination_path(root, &parts);
    if let Some(parent) = dest.parent() {
        ensure_dir(parent)?;
    }

    move_file(source, &dest)?;

    Ok(dest.strip_prefix(root).unwrap_or(&dest).to_path_buf())
}
