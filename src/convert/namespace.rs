//! Namespace page name handling.
//!
//! Logseq flattens page hierarchy into file names using a triple-underscore
//! separator: the page `projects/rust/notes` is stored as
//! `projects___rust___notes.md`.

use crate::error::{Error, Result};

/// Separator sequence Logseq uses to encode hierarchy in page names.
pub const NAMESPACE_SEPARATOR: &str = "___";

/// Ordered path segments derived from a namespace page name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceParts {
    /// Segments that become nested folders, outermost first.
    pub folders: Vec<String>,
    /// Final segment, used as the destination file stem.
    pub file_stem: String,
}

/// Check whether a page base name encodes a namespace.
pub fn has_namespace(stem: &str) -> bool {
    stem.contains(NAMESPACE_SEPARATOR)
}

/// Split a page base name into folder segments and a final file stem.
///
/// Empty segments produced by leading, trailing, or doubled separators are
/// dropped. A name consisting solely of separators has no usable segment
/// and is rejected.
pub fn split_namespace(stem: &str) -> Result<NamespaceParts> {
    let mut segments: Vec<&str> = stem
        .split(NAMESPACE_SEPARATOR)
        .filter(|s| !s.is_empty())
        .collect();

    let file_stem = segments
        .pop()
        .ok_or_else(|| Error::EmptyNamespace(stem.to_string()))?;

    Ok(NamespaceParts {
        folders: segments.into_iter().map(str::to_string).collect(),
        file_stem: file_stem.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_namespace() {
        assert!(has_namespace("foo___bar"));
        assert!(has_namespace("___"));
        assert!(!has_namespace("foo"));
        assert!(!has_namespace("foo__bar"));
    }

    #[test]
    fn test_split_two_segments() {
        let parts = split_namespace("foo___bar").unwrap();
        assert_eq!(parts.folders, vec!["foo"]);
        assert_eq!(parts.file_stem, "bar");
    }

    #[test]
    fn test_split_three_segments() {
        let parts = split_namespace("a___b___c").unwrap();
        assert_eq!(parts.folders, vec!["a", "b"]);
        assert_eq!(parts.file_stem, "c");
    }

    #[test]
    fn test_split_leading_separator() {
        let parts = split_namespace("___foo").unwrap();
        assert!(parts.folders.is_empty());
        assert_eq!(parts.file_stem, "foo");
    }

    #[test]
    fn test_split_trailing_separator() {
        let parts = split_namespace("foo___").unwrap();
        assert!(parts.folders.is_empty());
        assert_eq!(parts.file_stem, "foo");
    }

    #[test]
    fn test_split_doubled_separator() {
        let parts = split_namespace("a______b").unwrap();
        assert_eq!(parts.folders, vec!["a"]);
        assert_eq!(parts.file_stem, "b");
    }

    #[test]
    fn test_split_only_separators() {
        assert!(split_namespace("___").is_err());
        assert!(split_namespace("______").is_err());
    }
}
