//! Path validation
//!
//! Normalizes client-supplied paths and keeps every resolved location inside
//! the storage root.

use std::path::{Path, PathBuf};

use crate::error::StorageError;

/// A client path resolved under the storage root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    /// Cleaned, slash-separated path relative to the root (empty for the root itself)
    pub relative: String,
    /// Location on the host filesystem
    pub absolute: PathBuf,
}

impl ResolvedPath {
    pub fn is_root(&self) -> bool {
        self.relative.is_empty()
    }
}

/// Converts backslashes to forward slashes and strips every leading slash.
///
/// Trailing slashes and `.`/`..` segments are left alone; containment is
/// enforced later by [`resolve_under_root`].
pub fn normalize_path(raw: &str) -> String {
    raw.replace('\\', "/").trim_start_matches('/').to_string()
}

/// Resolves a normalized relative path under `root`.
///
/// `root` must already be canonical. Fails with `Forbidden` when `..` climbs
/// above the root, or when the deepest existing ancestor canonicalizes to a
/// location outside it.
pub fn resolve_under_root(root: &Path, relative: &str) -> Result<ResolvedPath, StorageError> {
    let mut segments: Vec<&str> = Vec::new();

    for segment in relative.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if segments.pop().is_none() {
                    return Err(StorageError::Forbidden(relative.to_string()));
                }
            }
            other => segments.push(other),
        }
    }

    let absolute = segments
        .iter()
        .fold(root.to_path_buf(), |path, segment| path.join(segment));

    ensure_contained(root, &absolute, relative)?;

    Ok(ResolvedPath {
        relative: segments.join("/"),
        absolute,
    })
}

/// Walks up from `absolute` to the first ancestor that exists and verifies
/// its canonical form still lives under `root`. A symlink at `absolute`
/// itself is judged by the directory holding it, not by its target.
fn ensure_contained(root: &Path, absolute: &Path, relative: &str) -> Result<(), StorageError> {
    let mut cursor = if is_symlink(absolute) {
        absolute.parent()
    } else {
        Some(absolute)
    };

    while let Some(candidate) = cursor {
        if candidate.symlink_metadata().is_ok() {
            // a dangling symlink fails to canonicalize; its target is unknowable
            return match candidate.canonicalize() {
                Ok(canonical) if canonical.starts_with(root) => Ok(()),
                _ => Err(StorageError::Forbidden(relative.to_string())),
            };
        }
        if candidate == root {
            break;
        }
        cursor = candidate.parent();
    }

    Ok(())
}

/// Verifies that a symlink at the resolved location points inside `root`.
///
/// Needed before any operation that follows the link (reading, writing);
/// plain entries and missing paths pass unchanged.
pub fn ensure_link_target_contained(root: &Path, resolved: &ResolvedPath) -> Result<(), StorageError> {
    if !is_symlink(&resolved.absolute) {
        return Ok(());
    }

    match resolved.absolute.canonicalize() {
        Ok(canonical) if canonical.starts_with(root) => Ok(()),
        _ => Err(StorageError::Forbidden(resolved.relative.clone())),
    }
}

fn is_symlink(path: &Path) -> bool {
    path.symlink_metadata()
        .map(|metadata| metadata.file_type().is_symlink())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn converts_backslashes() {
        assert_eq!(normalize_path("notes\\daily\\today.md"), "notes/daily/today.md");
    }

    #[test]
    fn strips_every_leading_slash() {
        assert_eq!(normalize_path("///notes/a.md"), "notes/a.md");
        assert_eq!(normalize_path("\\\\/notes"), "notes");
    }

    #[test]
    fn keeps_trailing_slash_and_dot_segments() {
        assert_eq!(normalize_path("notes/"), "notes/");
        assert_eq!(normalize_path("a/./b/../c"), "a/./b/../c");
    }

    #[test]
    fn normalization_is_idempotent() {
        for raw in ["", "/", "\\a\\b", "//x//y/", "plain.md", "/..\\etc"] {
            let once = normalize_path(raw);
            assert_eq!(normalize_path(&once), once);
            assert!(!once.starts_with('/'));
            assert!(!once.contains('\\'));
        }
    }

    #[test]
    fn resolves_nested_paths() {
        let dir = tempdir().unwrap();
        let root = dir.path().canonicalize().unwrap();

        let resolved = resolve_under_root(&root, "a/./b//c.md").unwrap();
        assert_eq!(resolved.relative, "a/b/c.md");
        assert_eq!(resolved.absolute, root.join("a").join("b").join("c.md"));
    }

    #[test]
    fn inner_parent_segments_stay_inside() {
        let dir = tempdir().unwrap();
        let root = dir.path().canonicalize().unwrap();

        let resolved = resolve_under_root(&root, "a/../b.md").unwrap();
        assert_eq!(resolved.relative, "b.md");

        let resolved = resolve_under_root(&root, "a/..").unwrap();
        assert!(resolved.is_root());
    }

    #[test]
    fn rejects_parent_escape() {
        let dir = tempdir().unwrap();
        let root = dir.path().canonicalize().unwrap();

        assert!(matches!(
            resolve_under_root(&root, "../secret"),
            Err(StorageError::Forbidden(_))
        ));
        assert!(matches!(
            resolve_under_root(&root, "a/../../secret"),
            Err(StorageError::Forbidden(_))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn rejects_symlink_escape() {
        let outside = tempdir().unwrap();
        let dir = tempdir().unwrap();
        let root = dir.path().canonicalize().unwrap();
        std::os::unix::fs::symlink(outside.path(), root.join("link")).unwrap();
        fs::write(outside.path().join("secret.txt"), "top secret").unwrap();

        assert!(matches!(
            resolve_under_root(&root, "link/secret.txt"),
            Err(StorageError::Forbidden(_))
        ));
        assert!(matches!(
            resolve_under_root(&root, "link/new/file.md"),
            Err(StorageError::Forbidden(_))
        ));
    }

    #[test]
    fn missing_paths_resolve_for_creation() {
        let dir = tempdir().unwrap();
        let root = dir.path().canonicalize().unwrap();
        fs::create_dir(root.join("existing")).unwrap();

        let resolved = resolve_under_root(&root, "existing/new/deeper.md").unwrap();
        assert_eq!(resolved.relative, "existing/new/deeper.md");
    }

    #[cfg(unix)]
    #[test]
    fn link_itself_resolves_but_its_target_is_checked() {
        let outside = tempdir().unwrap();
        let dir = tempdir().unwrap();
        let root = dir.path().canonicalize().unwrap();
        std::os::unix::fs::symlink(outside.path(), root.join("out")).unwrap();
        std::os::unix::fs::symlink("nowhere", root.join("broken")).unwrap();
        fs::write(root.join("inside.md"), "inside").unwrap();
        std::os::unix::fs::symlink(root.join("inside.md"), root.join("alias.md")).unwrap();

        let out = resolve_under_root(&root, "out").unwrap();
        assert_eq!(out.absolute, root.join("out"));
        assert!(matches!(
            ensure_link_target_contained(&root, &out),
            Err(StorageError::Forbidden(_))
        ));

        let broken = resolve_under_root(&root, "broken").unwrap();
        assert!(matches!(
            ensure_link_target_contained(&root, &broken),
            Err(StorageError::Forbidden(_))
        ));

        let alias = resolve_under_root(&root, "alias.md").unwrap();
        assert!(ensure_link_target_contained(&root, &alias).is_ok());
    }
}
