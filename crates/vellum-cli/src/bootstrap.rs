use std::path::PathBuf;

use anyhow::Context;

use crate::cli::GlobalFlags;

/// Load layered configuration, preferring the project's own dotenv file.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<vellum_config::VellumConfig> {
    load_project_dotenv(flags)?;
    vellum_config::VellumConfig::load().map_err(anyhow::Error::from)
}

fn load_project_dotenv(flags: &GlobalFlags) -> anyhow::Result<()> {
    if let Some(project) = &flags.project {
        let project_path = PathBuf::from(project);
        let root = if project_path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name == ".vellum")
        {
            project_path
                .parent()
                .map(std::path::Path::to_path_buf)
                .unwrap_or(project_path.clone())
        } else {
            project_path
        };

        let env_path = root.join(".env");
        if env_path.exists() {
            dotenvy::from_path(&env_path)
                .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
            return Ok(());
        }
    }

    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    if let Some(project_root) = crate::context::find_project_root(&cwd) {
        let env_path = project_root.join(".env");
        if env_path.exists() {
            tracing::debug!(path = %env_path.display(), "loading project dotenv");
            dotenvy::from_path(&env_path)
                .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
            return Ok(());
        }
    }

    dotenvy::dotenv().ok();
    Ok(())
}
