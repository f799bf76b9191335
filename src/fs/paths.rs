//! Path and directory management.

use std::path::{Path, PathBuf};

use crate::convert::namespace::NamespaceParts;
use crate::convert::scan::MARKDOWN_EXT;
use crate::error::Result;

/// Build the destination path for a namespace page under `root`.
///
/// All folder segments become nested directories and the final segment
/// becomes the file stem, extension preserved.
pub fn destination_path(root: &Path, parts: &NamespaceParts) -> PathBuf {
    let mut path = root.to_path_buf();
    for folder in &parts.folders {
        path.push(folder);
    }
    path.push(format!("{}.{}", parts.file_stem, MARKDOWN_EXT));
    path
}

/// Ensure a directory exists, creating it (and any parents) if necessary.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Move a file, replacing any existing file at the destination.
///
/// Uses an atomic rename, falling back to copy-then-delete only when the
/// destination lies on a different filesystem.
pub fn move_file(source: &Path, dest: &Path) -> Result<()> {
    match std::fs::rename(source, dest) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::CrossesDevices => {
            std::fs::copy(source, dest)?;
            std::fs::remove_file(source)?;
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn parts(folders: &[&str], stem: &str) -> NamespaceParts {
        NamespaceParts {
            folders: folders.iter().map(|s| s.to_string()).collect(),
            file_stem: stem.to_string(),
        }
    }

    #[test]
    fn test_destination_path_nested() {
        let dest = destination_path(Path::new("/pages"), &parts(&["a", "b"], "c"));
        assert_eq!(dest, PathBuf::from("/pages/a/b/c.md"));
    }

    #[test]
    fn test_destination_path_no_folders() {
        let dest = destination_path(Path::new("/pages"), &parts(&[], "foo"));
        assert_eq!(dest, PathBuf::from("/pages/foo.md"));
    }

    #[test]
    fn test_ensure_dir_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");

        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());

        // Second call reuses the existing directory without error.
        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn test_ensure_dir_fails_on_file_collision() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("a");
        fs::write(&blocker, "not a folder").unwrap();

        assert!(ensure_dir(&blocker.join("b")).is_err());
    }

    #[test]
    fn test_move_file_replaces_destination() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("source.md");
        let dest = dir.path().join("dest.md");
        fs::write(&source, "new").unwrap();
        fs::write(&dest, "old").unwrap();

        move_file(&source, &dest).unwrap();

        assert!(!source.exists());
        assert_eq!(fs::read_to_string(&dest).unwrap(), "new");
    }
}
