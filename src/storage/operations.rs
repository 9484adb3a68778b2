//! Storage operations
//!
//! Read, write, delete and folder creation under the storage root. Each
//! operation resolves its path once through [`Storage::resolve`] and then
//! performs a single filesystem call (or one recursive removal).

use log::info;
use std::fs;

use crate::error::StorageError;
use crate::storage::filesystem::{Storage, entry_exists, entry_present, is_real_directory};
use crate::storage::validation::ensure_link_target_contained;

impl Storage {
    /// Returns the full UTF-8 contents of the file at `raw`.
    pub fn read_file(&self, raw: &str) -> Result<String, StorageError> {
        let resolved = self.resolve(raw)?;

        if !entry_exists(&resolved.absolute)? {
            return Err(StorageError::NotFound(resolved.relative));
        }
        ensure_link_target_contained(self.root(), &resolved)?;

        if !resolved.absolute.is_file() {
            return Err(StorageError::NotAFile(resolved.relative));
        }

        let bytes = fs::read(&resolved.absolute)?;
        let content =
            String::from_utf8(bytes).map_err(|_| StorageError::DecodeError(resolved.relative.clone()))?;

        info!(
            "Read file {} (real: {}) - {} bytes",
            resolved.relative,
            resolved.absolute.display(),
            content.len()
        );

        Ok(content)
    }

    /// Creates or truncates the file at `raw`, creating missing parent
    /// directories first.
    pub fn write_file(&self, raw: &str, content: &str) -> Result<(), StorageError> {
        let resolved = self.resolve(raw)?;
        ensure_link_target_contained(self.root(), &resolved)?;

        if let Some(parent) = resolved.absolute.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&resolved.absolute, content)?;

        info!(
            "Saved file {} (real: {}) - {} bytes",
            resolved.relative,
            resolved.absolute.display(),
            content.len()
        );

        Ok(())
    }

    /// Removes the file or directory at `raw`. Directories are removed with
    /// everything below them; a symlink is removed itself, never its target.
    pub fn delete(&self, raw: &str) -> Result<(), StorageError> {
        let resolved = self.resolve(raw)?;

        if resolved.is_root() {
            return Err(StorageError::Forbidden(raw.to_string()));
        }

        if !entry_present(&resolved.absolute)? {
            return Err(StorageError::NotFound(resolved.relative));
        }

        if is_real_directory(&resolved.absolute) {
            fs::remove_dir_all(&resolved.absolute)?;
        } else {
            fs::remove_file(&resolved.absolute)?;
        }

        info!(
            "Deleted {} (real: {})",
            resolved.relative,
            resolved.absolute.display()
        );

        Ok(())
    }

    /// Creates a directory at `raw` along with any missing parents. Fails
    /// if anything already exists there.
    pub fn create_folder(&self, raw: &str) -> Result<(), StorageError> {
        let resolved = self.resolve(raw)?;

        if entry_present(&resolved.absolute)? {
            return Err(StorageError::AlreadyExists(resolved.relative));
        }

        fs::create_dir_all(&resolved.absolute)?;

        info!(
            "Created folder {} (real: {})",
            resolved.relative,
            resolved.absolute.display()
        );

        Ok(())
    }
}
