//! Attachment store configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AttachmentConfig {
    /// Directory for uploaded contract documents. Empty means the default
    /// `.vellum/files` under the project root.
    #[serde(default)]
    pub dir: String,
}

impl AttachmentConfig {
    /// Whether an explicit attachment directory is configured.
    #[must_use]
    pub fn has_dir(&self) -> bool {
        !self.dir.is_empty()
    }
}
