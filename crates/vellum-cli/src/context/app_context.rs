use std::path::PathBuf;

use anyhow::Context;
use vellum_config::VellumConfig;
use vellum_db::service::VellumService;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: VellumService,
    pub config: VellumConfig,
    pub project_root: PathBuf,
}

impl AppContext {
    /// Initialize all shared resources using the discovered project root.
    ///
    /// Explicit config paths win; otherwise the database and attachment
    /// store live under the project's `.vellum` directory.
    pub async fn init(project_root: PathBuf, config: VellumConfig) -> anyhow::Result<Self> {
        let vellum_dir = project_root.join(".vellum");

        let db_path = if config.database.has_path() {
            PathBuf::from(&config.database.path)
        } else {
            vellum_dir.join("vellum.db")
        };
        let db_path_str = db_path.to_string_lossy().to_string();

        let attachments_dir = if config.attachments.has_dir() {
            PathBuf::from(&config.attachments.dir)
        } else {
            vellum_dir.join("files")
        };

        tracing::debug!(
            db = %db_path.display(),
            attachments = %attachments_dir.display(),
            "opening contract store"
        );
        let service = VellumService::new_local(&db_path_str, Some(attachments_dir))
            .await
            .context("failed to initialize vellum-db service")?;

        Ok(Self {
            service,
            config,
            project_root,
        })
    }
}
