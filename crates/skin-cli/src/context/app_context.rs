use std::path::{Path, PathBuf};

use anyhow::Context;
use skin_config::{STATE_DIR, SkinConfig};
use skin_db::service::SkinService;

use crate::cli::GlobalFlags;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: SkinService,
    pub config: SkinConfig,
    pub user: String,
}

impl AppContext {
    /// Open the project's database and settle which user commands act for.
    pub async fn init(
        project_root: &Path,
        config: SkinConfig,
        flags: &GlobalFlags,
    ) -> anyhow::Result<Self> {
        let db_path = database_path(project_root, &config);
        let service = SkinService::new_local(&db_path.to_string_lossy())
            .await
            .with_context(|| format!("failed to open database at {}", db_path.display()))?;

        let user = resolve_user(flags.user.as_deref(), &config);
        tracing::debug!(root = %project_root.display(), %user, "application context ready");

        Ok(Self {
            service,
            config,
            user,
        })
    }
}

/// Where the project's database lives after applying `database.path`.
#[must_use]
pub fn database_path(project_root: &Path, config: &SkinConfig) -> PathBuf {
    config
        .database
        .resolve(project_root, &project_root.join(STATE_DIR))
}

fn resolve_user(flag: Option<&str>, config: &SkinConfig) -> String {
    flag.map(str::trim)
        .filter(|user| !user.is_empty())
        .unwrap_or(&config.general.default_user)
        .to_string()
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use pretty_assertions::assert_eq;
    use skin_config::SkinConfig;

    use super::{database_path, resolve_user};

    #[test]
    fn user_flag_overrides_default() {
        let config = SkinConfig::default();
        assert_eq!(resolve_user(Some("asha"), &config), "asha");
        assert_eq!(resolve_user(None, &config), "local");
        assert_eq!(resolve_user(Some("  "), &config), "local");
    }

    #[test]
    fn database_defaults_into_state_dir() {
        let config = SkinConfig::default();
        let path = database_path(Path::new("/work/app"), &config);
        assert_eq!(path, Path::new("/work/app/.skinsense/skinsense.db"));
    }
}
