//! # skin-config
//!
//! Layered configuration loading for skinsense using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SKINSENSE_*` prefix, `__` as separator)
//! 2. Project-level `.skinsense/config.toml`
//! 3. User-level `~/.config/skinsense/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `SKINSENSE_CHECKOUT__TAX_RATE_BPS` -> `checkout.tax_rate_bps`,
//! `SKINSENSE_GENERAL__DEFAULT_USER` -> `general.default_user`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use skin_config::SkinConfig;
//!
//! let root = std::path::Path::new(".");
//! let config = SkinConfig::load_for_project_with_dotenv(root).expect("config");
//! println!("tax rate: {} bps", config.checkout.tax_rate_bps);
//! ```

mod checkout;
mod database;
mod error;
mod general;
mod progress;

pub use checkout::{CheckoutConfig, MAX_TAX_RATE_BPS};
pub use database::{DEFAULT_DB_FILE, DatabaseConfig};
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use progress::ProgressConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the per-project state directory.
pub const STATE_DIR: &str = ".skinsense";

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "SKINSENSE_";

/// Load the first `.env` found in `start` or one of its ancestors.
///
/// Returns the file that was loaded. Existing environment variables are not
/// overwritten, so calling this more than once is harmless.
pub fn load_dotenv(start: &Path) -> Option<PathBuf> {
    let path = start.ancestors().map(|dir| dir.join(".env")).find(|p| p.is_file())?;
    dotenvy::from_path(&path).ok()?;
    Some(path)
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SkinConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub checkout: CheckoutConfig,
    #[serde(default)]
    pub progress: ProgressConfig,
}

impl SkinConfig {
    /// Load configuration for the project rooted at `project_root`.
    ///
    /// Does NOT read `.env`; use [`Self::load_for_project_with_dotenv`] for that.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a source fails to parse or a value is invalid.
    pub fn load_for_project(project_root: &Path) -> Result<Self, ConfigError> {
        Self::extract(Self::figment_at(&project_root.join(STATE_DIR).join("config.toml")))
    }

    /// Load the nearest `.env` above `project_root`, then the project config.
    ///
    /// Variables already present in the process environment win over the file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a source fails to parse or a value is invalid.
    pub fn load_for_project_with_dotenv(project_root: &Path) -> Result<Self, ConfigError> {
        load_dotenv(project_root);
        Self::load_for_project(project_root)
    }

    /// Build the figment provider chain with an explicit project config file.
    pub fn figment_at(project_config: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        if project_config.exists() {
            figment = figment.merge(Toml::file(project_config));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Check cross-field constraints figment cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for the first invalid field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.checkout.validate()
    }

    fn extract(figment: Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("skinsense").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = SkinConfig::default();
        assert_eq!(config.general.default_limit, 20);
        assert_eq!(config.general.default_user, "local");
        assert!(!config.database.is_configured());
        assert_eq!(config.checkout.tax_rate_bps, 1800);
        assert_eq!(config.progress.history_limit, 30);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|jail| {
            let path = jail.directory().join(STATE_DIR).join("config.toml");
            let config: SkinConfig = SkinConfig::figment_at(&path).extract()?;
            assert_eq!(config.general.default_limit, 20);
            assert_eq!(config.checkout.currency, "INR");
            Ok(())
        });
    }
}
