//! Service layer orchestrating the contract store.
//!
//! `VellumService` wraps `VellumDb` (raw database access) and
//! `AttachmentStore` (document blobs). All repo methods are implemented as
//! `impl VellumService` blocks in [`crate::repos`].

use std::path::PathBuf;

use crate::VellumDb;
use crate::attachments::AttachmentStore;
use crate::error::DatabaseError;

/// Orchestrates contract mutations and attachment bookkeeping.
pub struct VellumService {
    db: VellumDb,
    attachments: AttachmentStore,
}

impl VellumService {
    /// Create a new service wrapping a local database.
    ///
    /// # Arguments
    ///
    /// * `db_path` — Path to the libSQL database file, or `":memory:"` for tests.
    /// * `attachments_dir` — Directory for document blobs. Pass `None` to
    ///   disable attachment storage (for tests that don't need files).
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or the
    /// attachment directory cannot be created.
    pub async fn new_local(
        db_path: &str,
        attachments_dir: Option<PathBuf>,
    ) -> Result<Self, DatabaseError> {
        let db = VellumDb::open_local(db_path).await?;
        let attachments = match attachments_dir {
            Some(dir) => AttachmentStore::new(dir)?,
            None => AttachmentStore::disabled(),
        };
        Ok(Self { db, attachments })
    }

    /// Create from an existing `VellumDb` (for testing).
    #[must_use]
    pub const fn from_db(db: VellumDb, attachments: AttachmentStore) -> Self {
        Self { db, attachments }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &VellumDb {
        &self.db
    }

    /// Access the attachment store.
    #[must_use]
    pub const fn attachments(&self) -> &AttachmentStore {
        &self.attachments
    }
}
