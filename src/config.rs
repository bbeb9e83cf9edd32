use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DB_FILE: &str = "restaurant_db.csv";
const DEFAULT_ADMIN_PASSWORD: &str = "admin";

/// Configuration for lunchvote, stored as config.json in the user config dir.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LunchConfig {
    /// Path to the restaurant table CSV file.
    #[serde(default = "default_db_file")]
    pub db_file: String,

    /// Shared admin password for the table editor.
    #[serde(default = "default_admin_password")]
    pub admin_password: String,
}

fn default_db_file() -> String {
    DEFAULT_DB_FILE.to_string()
}

fn default_admin_password() -> String {
    DEFAULT_ADMIN_PASSWORD.to_string()
}

impl Default for LunchConfig {
    fn default() -> Self {
        Self {
            db_file: default_db_file(),
            admin_password: default_admin_password(),
        }
    }
}

impl LunchConfig {
    /// Load the config from `dir`, falling back to defaults when absent.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILENAME);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self, dir: &Path) -> Result<()> {
        fs::create_dir_all(dir)?;
        let content = serde_json::to_string_pretty(self)?;
        fs::write(dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }
}
