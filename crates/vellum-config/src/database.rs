//! Contract database configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Path to the libSQL database file. Empty means the default
    /// `.vellum/vellum.db` under the project root.
    #[serde(default)]
    pub path: String,
}

impl DatabaseConfig {
    /// Whether an explicit database path is configured.
    #[must_use]
    pub fn has_path(&self) -> bool {
        !self.path.is_empty()
    }
}
