//! Filesystem attachment store for uploaded contract documents.
//!
//! Blobs live in a flat directory; each stored file is named
//! `{contract_id}-{original_filename}` and the contract row keeps that
//! relative name in `file_path`. The store never interprets file contents.

use std::path::{Path, PathBuf};

use crate::error::DatabaseError;

/// Stores and removes contract document blobs in a directory.
pub struct AttachmentStore {
    dir: PathBuf,
    enabled: bool,
}

impl AttachmentStore {
    /// Create a new `AttachmentStore` rooted at the given directory.
    ///
    /// Creates the directory if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the directory cannot be created.
    pub fn new(dir: PathBuf) -> Result<Self, DatabaseError> {
        std::fs::create_dir_all(&dir).map_err(|e| DatabaseError::Other(e.into()))?;
        Ok(Self { dir, enabled: true })
    }

    /// Create a disabled store (for tests that don't exercise attachments).
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            dir: PathBuf::new(),
            enabled: false,
        }
    }

    /// Whether this store accepts blobs.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Copy `source` into the store for the given contract.
    ///
    /// Returns the relative blob name to record on the contract row.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidState` if the store is disabled or the
    /// source has no file name, `DatabaseError::Other` on I/O failure.
    pub fn store(&self, contract_id: &str, source: &Path) -> Result<String, DatabaseError> {
        if !self.enabled {
            return Err(DatabaseError::InvalidState(String::from(
                "attachment store is disabled",
            )));
        }
        let file_name = source
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| {
                DatabaseError::InvalidState(format!(
                    "attachment source has no usable file name: {}",
                    source.display()
                ))
            })?;

        let blob_name = format!("{contract_id}-{file_name}");
        let dest = self.dir.join(&blob_name);
        std::fs::copy(source, &dest).map_err(|e| DatabaseError::Other(e.into()))?;
        Ok(blob_name)
    }

    /// Remove a previously stored blob. Missing blobs are not an error.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Other` on I/O failure other than not-found.
    pub fn remove(&self, blob_name: &str) -> Result<(), DatabaseError> {
        if !self.enabled {
            return Ok(());
        }
        let path = self.dir.join(blob_name);
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(DatabaseError::Other(e.into())),
        }
    }

    /// Absolute path of a stored blob.
    #[must_use]
    pub fn resolve(&self, blob_name: &str) -> PathBuf {
        self.dir.join(blob_name)
    }
}
