use std::path::PathBuf;

use anyhow::Context;
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::InitArgs;
use crate::output::output;

const STARTER_CONFIG: &str = r#"# Vellum project configuration.
# Every key can also be set via VELLUM_* environment variables,
# e.g. VELLUM_ANALYTICS__YEARLY_SPEND_POLICY=prorated

[database]
# path = ".vellum/vellum.db"

[attachments]
# dir = ".vellum/files"

[analytics]
# yearly_spend_policy = "lump_sum"  # or "prorated"
# top_contracts_limit = 5

[general]
# default_limit = 20
"#;

/// Handle `vlm init`: create the `.vellum` directory and an empty database.
pub async fn handle(args: &InitArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let root = PathBuf::from(&args.path);
    if !root.is_dir() {
        anyhow::bail!("'{}' is not a directory", root.display());
    }

    let vellum_dir = root.join(".vellum");
    let already_initialized = vellum_dir.is_dir();
    std::fs::create_dir_all(&vellum_dir)
        .with_context(|| format!("failed to create {}", vellum_dir.display()))?;

    let db_path = vellum_dir.join("vellum.db");
    let db_path_str = db_path.to_string_lossy().to_string();

    // Opening runs the migrations, so the project is queryable immediately.
    vellum_db::VellumDb::open_local(&db_path_str)
        .await
        .context("failed to create project database")?;

    std::fs::create_dir_all(vellum_dir.join("files"))
        .context("failed to create attachment directory")?;

    let config_path = vellum_dir.join("config.toml");
    if !config_path.exists() {
        std::fs::write(&config_path, STARTER_CONFIG)
            .context("failed to write starter config")?;
    }

    output(
        &json!({
            "project_root": root.display().to_string(),
            "database": db_path.display().to_string(),
            "already_initialized": already_initialized,
        }),
        flags.format,
    )
}
