//! Directory scanning for candidate pages.

use std::path::{Path, PathBuf};

use crate::error::Result;

/// Extension of the page files we convert.
pub const MARKDOWN_EXT: &str = "md";

/// List the markdown files directly inside `dir`, sorted by file name.
///
/// Only regular files are returned; subdirectories are not descended into.
/// The listing is snapshotted before any move happens, so files relocated
/// during a run are never seen twice.
pub fn markdown_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        if path.extension().and_then(|e| e.to_str()) == Some(MARKDOWN_EXT) {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_lists_only_markdown_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.md"), "").unwrap();
        fs::write(dir.path().join("a.md"), "").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();

        let files = markdown_files(dir.path()).unwrap();
        assert_eq!(
            files,
            vec![dir.path().join("a.md"), dir.path().join("b.md")]
        );
    }

    #[test]
    fn test_skips_directories_with_md_suffix() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("folder.md")).unwrap();
        fs::write(dir.path().join("page.md"), "").unwrap();

        let files = markdown_files(dir.path()).unwrap();
        assert_eq!(files, vec![dir.path().join("page.md")]);
    }

    #[test]
    fn test_does_not_descend_into_subdirectories() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub").join("nested.md"), "").unwrap();

        let files = markdown_files(dir.path()).unwrap();
        assert!(files.is_empty());
    }
}
