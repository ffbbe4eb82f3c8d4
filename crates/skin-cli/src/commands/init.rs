use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Serialize;
use skin_config::{STATE_DIR, SkinConfig};
use skin_db::seed::SeedReport;
use skin_db::service::SkinService;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::InitArgs;
use crate::context::database_path;
use crate::output::output;

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Serialize)]
struct InitResponse {
    project_root: String,
    database: String,
    config_created: bool,
    seeded: SeedReport,
}

/// Handle `skinsense init`.
pub async fn handle(args: &InitArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let root = match args.path.as_deref() {
        Some(path) => PathBuf::from(path),
        None => std::env::current_dir().context("failed to read current directory")?,
    };

    let config_created = create_state_dir(&root)?;
    let config = SkinConfig::load_for_project(&root).context("failed to load configuration")?;
    let db_path = database_path(&root, &config);
    let service = SkinService::new_local(&db_path.to_string_lossy())
        .await
        .with_context(|| format!("failed to open database at {}", db_path.display()))?;

    let seeded = if args.no_seed {
        SeedReport::default()
    } else {
        service.seed().await.context("failed to seed catalog")?
    };
    tracing::info!(root = %root.display(), ?seeded, "project initialized");

    output(
        &InitResponse {
            project_root: root.display().to_string(),
            database: db_path.display().to_string(),
            config_created,
            seeded,
        },
        flags.format,
    )
}

/// Create `<root>/.skinsense/` and a default `config.toml`. Returns whether
/// the config file was written; an existing one is left untouched.
fn create_state_dir(root: &Path) -> anyhow::Result<bool> {
    let state_dir = root.join(STATE_DIR);
    std::fs::create_dir_all(&state_dir)
        .with_context(|| format!("failed to create {}", state_dir.display()))?;

    let config_path = state_dir.join(CONFIG_FILE);
    if config_path.exists() {
        return Ok(false);
    }

    let contents = toml::to_string_pretty(&SkinConfig::default())
        .context("failed to serialize default configuration")?;
    std::fs::write(&config_path, contents)
        .with_context(|| format!("failed to write {}", config_path.display()))?;
    Ok(true)
}
