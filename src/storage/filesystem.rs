//! Storage root handle
//!
//! Owns the canonical storage root and resolves client paths against it.

use log::info;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::StorageError;
use crate::storage::validation::{ResolvedPath, normalize_path, resolve_under_root};

/// Handle on the directory tree exposed through the API.
///
/// Constructed once at startup and shared read-only between requests.
#[derive(Debug, Clone)]
pub struct Storage {
    root: PathBuf,
    max_depth: usize,
}

impl Storage {
    /// Opens `root`, creating it (and any parents) if absent.
    pub fn open(root: impl AsRef<Path>, max_depth: usize) -> Result<Self, StorageError> {
        let root = root.as_ref();
        fs::create_dir_all(root)?;
        let root = root.canonicalize()?;

        info!("Storage root directory: {}", root.display());

        Ok(Self { root, max_depth })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Normalizes a raw client path and resolves it under the root.
    pub fn resolve(&self, raw: &str) -> Result<ResolvedPath, StorageError> {
        resolve_under_root(&self.root, &normalize_path(raw))
    }
}

/// Check if `path` is a directory itself, not a symlink to one
pub fn is_real_directory(path: &Path) -> bool {
    fs::symlink_metadata(path)
        .map(|metadata| metadata.is_dir())
        .unwrap_or(false)
}

/// Check if anything exists at `path`, following symlinks
pub fn entry_exists(path: &Path) -> Result<bool, StorageError> {
    Ok(path.try_exists()?)
}

/// Check if an entry sits at `path`; a dangling symlink counts
pub fn entry_present(path: &Path) -> Result<bool, StorageError> {
    match fs::symlink_metadata(path) {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn open_creates_missing_root() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("nested").join("storage");

        let storage = Storage::open(&root, 8).unwrap();
        assert!(root.is_dir());
        assert_eq!(storage.root(), root.canonicalize().unwrap());
        assert_eq!(storage.max_depth(), 8);
    }

    #[test]
    fn resolve_normalizes_first() {
        let dir = tempdir().unwrap();
        let storage = Storage::open(dir.path(), 8).unwrap();

        let resolved = storage.resolve("//notes\\today.md").unwrap();
        assert_eq!(resolved.relative, "notes/today.md");
        assert!(resolved.absolute.starts_with(storage.root()));
    }
}
