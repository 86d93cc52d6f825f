#![deny(missing_docs)]

//! # Reference Directory Sync
//!
//! Removes previously generated pages before a regeneration run and reports how
//! the fresh output differs from what was removed.
//!
//! Rules, applied at the reference root:
//! - `index.mdx` files are hand-authored and never removed.
//! - `resources/` loses its immediate files; nested directories stay.
//! - `v*` directories lose their immediate files (except `index.mdx`) and the
//!   immediate files of their own `resources/`; other nested directories stay.
//! - Any other directory is left alone.
//! - Any other file at the root is removed.

use crate::error::AppResult;
use crate::pages::RESOURCES_DIR;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Hand-authored landing page name.
pub const INDEX_FILE: &str = "index.mdx";

fn sorted_entries(dir: &Path) -> AppResult<Vec<fs::DirEntry>> {
    let mut entries = fs::read_dir(dir)?.collect::<Result<Vec<_>, _>>()?;
    entries.sort_by_key(|e| e.file_name());
    Ok(entries)
}

/// Removes every immediate non-directory entry of `dir`.
fn clear_files(dir: &Path, removed: &mut Vec<PathBuf>) -> AppResult<()> {
    for entry in sorted_entries(dir)? {
        if entry.file_type()?.is_dir() {
            continue;
        }
        let path = entry.path();
        fs::remove_file(&path)?;
        removed.push(path);
    }
    Ok(())
}

fn clear_version_directory(dir: &Path, removed: &mut Vec<PathBuf>) -> AppResult<()> {
    for entry in sorted_entries(dir)? {
        let path = entry.path();
        let name = entry.file_name();

        if name == INDEX_FILE {
            debug!(file = %path.display(), "keeping index file");
            continue;
        }

        if entry.file_type()?.is_dir() {
            if name == RESOURCES_DIR {
                clear_files(&path, removed)?;
            }
            continue;
        }

        fs::remove_file(&path)?;
        removed.push(path);
    }
    Ok(())
}

/// Clears generated pages under `root` and returns the removed files.
///
/// A missing `root` is created and yields an empty list.
pub fn clear_reference_directory(root: &Path) -> AppResult<Vec<PathBuf>> {
    let mut removed = Vec::new();

    if !root.exists() {
        fs::create_dir_all(root)?;
        return Ok(removed);
    }

    for entry in sorted_entries(root)? {
        let path = entry.path();
        let name = entry.file_name();

        if name == INDEX_FILE {
            debug!(file = %path.display(), "keeping index file");
            continue;
        }

        if entry.file_type()?.is_dir() {
            if name == RESOURCES_DIR {
                clear_files(&path, &mut removed)?;
            } else if name.to_string_lossy().starts_with('v') {
                clear_version_directory(&path, &mut removed)?;
            }
            continue;
        }

        fs::remove_file(&path)?;
        removed.push(path);
    }

    Ok(removed)
}

/// How a regeneration run changed the set of page files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Created files that did not exist before the run.
    pub new_files: Vec<PathBuf>,
    /// Removed files that were not recreated.
    pub orphaned: Vec<PathBuf>,
}

/// Compares the files removed by [`clear_reference_directory`] with the files written afterwards.
pub fn reconcile(removed: &[PathBuf], created: &[PathBuf]) -> SyncReport {
    let removed_set: HashSet<&Path> = removed.iter().map(PathBuf::as_path).collect();
    let created_set: HashSet<&Path> = created.iter().map(PathBuf::as_path).collect();

    SyncReport {
        new_files: created
            .iter()
            .filter(|p| !removed_set.contains(p.as_path()))
            .cloned()
            .collect(),
        orphaned: removed
            .iter()
            .filter(|p| !created_set.contains(p.as_path()))
            .cloned()
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "x").unwrap();
    }

    #[test]
    fn test_preserves_index_files() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        for rel in [
            "index.mdx",
            "a.mdx",
            "v2025.0/index.mdx",
            "v2025.0/b.mdx",
            "resources/c.mdx",
        ] {
            touch(root, rel);
        }

        let removed = clear_reference_directory(root).unwrap();

        assert_eq!(
            removed,
            vec![
                root.join("a.mdx"),
                root.join("resources/c.mdx"),
                root.join("v2025.0/b.mdx"),
            ]
        );
        assert!(root.join("index.mdx").is_file());
        assert!(root.join("v2025.0/index.mdx").is_file());
        assert!(root.join("resources").is_dir());
        assert!(root.join("v2025.0").is_dir());
    }

    #[test]
    fn test_nested_directories_are_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        for rel in [
            "guides/intro.mdx",
            "resources/nested/keep.mdx",
            "v2025.0/resources/file.mdx",
            "v2025.0/resources/deep/keep.mdx",
            "v2025.0/extra/keep.mdx",
        ] {
            touch(root, rel);
        }

        let removed = clear_reference_directory(root).unwrap();

        assert_eq!(removed, vec![root.join("v2025.0/resources/file.mdx")]);
        assert!(root.join("guides/intro.mdx").is_file());
        assert!(root.join("resources/nested/keep.mdx").is_file());
        assert!(root.join("v2025.0/resources/deep/keep.mdx").is_file());
        assert!(root.join("v2025.0/extra/keep.mdx").is_file());
    }

    #[test]
    fn test_missing_root_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("reference");

        let removed = clear_reference_directory(&root).unwrap();

        assert!(removed.is_empty());
        assert!(root.is_dir());
    }

    #[test]
    fn test_reconcile() {
        let removed = vec![PathBuf::from("r/a.mdx"), PathBuf::from("r/b.mdx")];
        let created = vec![PathBuf::from("r/b.mdx"), PathBuf::from("r/c.mdx")];

        let report = reconcile(&removed, &created);

        assert_eq!(report.new_files, vec![PathBuf::from("r/c.mdx")]);
        assert_eq!(report.orphaned, vec![PathBuf::from("r/a.mdx")]);
    }
}
