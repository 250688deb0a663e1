//! Markdown file discovery and reading
//!
//! Finds the documents a scan run should look at and reads them with a
//! one-shot encoding fallback. All I/O lives here; the core never touches
//! the filesystem.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use badge_harvest_core::{BadgeHarvestError, Result};

/// Filename patterns considered markdown in non-recursive mode
const MARKDOWN_PATTERNS: &[&str] = &["*.md", "*.markdown"];

/// Find markdown files under `dir`.
///
/// Non-recursive mode matches the glob patterns plus any `README`-prefixed
/// file in the directory itself; recursive mode walks the whole tree.
/// Results are sorted and de-duplicated so a run is reproducible.
pub fn find_markdown_files(dir: &Path, recursive: bool) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(BadgeHarvestError::DocumentNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut found: BTreeSet<PathBuf> = BTreeSet::new();

    if recursive {
        for entry in WalkDir::new(dir).into_iter().filter_map(|e| e.ok()) {
            if entry.file_type().is_file() && is_markdown_name(&entry.file_name().to_string_lossy())
            {
                found.insert(entry.path().to_path_buf());
            }
        }
    } else {
        for pattern in MARKDOWN_PATTERNS {
            let full = dir.join(pattern).to_string_lossy().into_owned();
            for path in glob::glob(&full).into_iter().flatten().filter_map(|p| p.ok()) {
                if path.is_file() {
                    found.insert(path);
                }
            }
        }

        // README files without a markdown extension
        for entry in fs::read_dir(dir)?.filter_map(|e| e.ok()) {
            let name = entry.file_name().to_string_lossy().into_owned();
            if is_markdown_name(&name) && entry.path().is_file() {
                found.insert(entry.path());
            }
        }
    }

    Ok(found.into_iter().collect())
}

fn is_markdown_name(name: &str) -> bool {
    name.ends_with(".md")
        || name.ends_with(".markdown")
        || name.to_lowercase().starts_with("readme")
}

/// Read a document as text: UTF-8 first, Latin-1 on failure.
///
/// Only I/O errors surface; any byte sequence decodes under the fallback.
pub fn read_document(path: &Path) -> Result<String> {
    let bytes = fs::read(path)?;
    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(err) => Ok(latin1_decode(err.as_bytes())),
    }
}

fn latin1_decode(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_markdown_variants() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["README.md", "notes.markdown", "README", "readme.txt", "code.rs"] {
            fs::write(dir.path().join(name), "x").unwrap();
        }

        let files = find_markdown_files(dir.path(), false).unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();

        assert!(names.contains(&"README.md".to_string()));
        assert!(names.contains(&"notes.markdown".to_string()));
        assert!(names.contains(&"README".to_string()));
        // readme.txt is README-prefixed, so the original tool picked it up too
        assert!(names.contains(&"readme.txt".to_string()));
        assert!(!names.contains(&"code.rs".to_string()));
    }

    #[test]
    fn test_non_recursive_ignores_subdirectories() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("docs")).unwrap();
        fs::write(dir.path().join("docs/guide.md"), "x").unwrap();
        fs::write(dir.path().join("top.md"), "x").unwrap();

        let flat = find_markdown_files(dir.path(), false).unwrap();
        assert_eq!(flat.len(), 1);

        let deep = find_markdown_files(dir.path(), true).unwrap();
        assert_eq!(deep.len(), 2);
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let err = find_markdown_files(Path::new("/nonexistent-badge-harvest"), false).unwrap_err();
        assert!(matches!(err, BadgeHarvestError::DocumentNotFound { .. }));
    }

    #[test]
    fn test_results_are_sorted() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.md", "a.md", "c.md"] {
            fs::write(dir.path().join(name), "x").unwrap();
        }
        let files = find_markdown_files(dir.path(), false).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.md", "b.md", "c.md"]);
    }

    #[test]
    fn test_read_utf8_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.md");
        fs::write(&path, "# héllo\n").unwrap();
        assert_eq!(read_document(&path).unwrap(), "# héllo\n");
    }

    #[test]
    fn test_read_falls_back_to_latin1() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.md");
        // 0xE9 is 'é' in Latin-1 but invalid on its own in UTF-8
        fs::write(&path, b"caf\xe9\n").unwrap();
        assert_eq!(read_document(&path).unwrap(), "café\n");
    }
}
