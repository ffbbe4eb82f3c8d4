//! Local libSQL database location.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name used under the project directory when no path is configured.
pub const DEFAULT_DB_FILE: &str = "skinsense.db";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Database file path. Empty means `<project>/.skinsense/skinsense.db`.
    /// Relative paths resolve against the project root.
    #[serde(default)]
    pub path: String,
}

impl DatabaseConfig {
    /// Whether an explicit path was configured.
    pub const fn is_configured(&self) -> bool {
        !self.path.is_empty()
    }

    /// Resolve the database file for a project whose state directory is
    /// `state_dir` (normally `<root>/.skinsense`).
    pub fn resolve(&self, project_root: &Path, state_dir: &Path) -> PathBuf {
        if !self.is_configured() {
            return state_dir.join(DEFAULT_DB_FILE);
        }
        let path = PathBuf::from(&self.path);
        if path.is_absolute() {
            path
        } else {
            project_root.join(path)
        }
    }
}
