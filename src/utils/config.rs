// User defaults configuration and TOML parsing

use std::fs;
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use crate::utils::error::{GeneratorError, Result};

/// Environment variable overriding the defaults file location
pub const CONFIG_ENV_VAR: &str = "PYGEN_CONFIG";

/// File name of the defaults file inside the home directory
pub const CONFIG_FILE_NAME: &str = ".python-project-generator.toml";

/// Defaults offered by the interactive prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UserDefaults {
    pub description: String,
    pub author_name: String,
    pub author_email: String,
    pub github_username: String,
}

impl Default for UserDefaults {
    fn default() -> Self {
        Self {
            description: "A Python project".to_string(),
            author_name: "Developer".to_string(),
            author_email: "dev@example.com".to_string(),
            github_username: "username".to_string(),
        }
    }
}

/// Configuration loading for user defaults
pub struct ConfigParser;

impl ConfigParser {
    /// Resolve the defaults file path: `PYGEN_CONFIG` first, then the home directory
    pub fn default_config_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
            return Some(PathBuf::from(path));
        }
        dirs::home_dir().map(|home| home.join(CONFIG_FILE_NAME))
    }

    /// Load defaults from the resolved location; a missing file yields built-in defaults
    pub fn load_user_defaults() -> Result<UserDefaults> {
        match Self::default_config_path() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(UserDefaults::default()),
        }
    }

    /// Load defaults from an explicit path
    pub fn load_from_path(path: &Path) -> Result<UserDefaults> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No defaults file, using built-in defaults");
            return Ok(UserDefaults::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| GeneratorError::ConfigError(
                format!("Failed to read {}: {}", path.display(), e)
            ))?;

        Self::parse_user_defaults(&content)
            .map_err(|e| match e {
                GeneratorError::ConfigError(msg) => GeneratorError::ConfigError(
                    format!("{}: {}", path.display(), msg)
                ),
                other => other,
            })
    }

    /// Parse defaults from a TOML string
    pub fn parse_user_defaults(content: &str) -> Result<UserDefaults> {
        toml::from_str(content)
            .map_err(|e| GeneratorError::ConfigError(
                format!("Invalid TOML syntax: {}", e)
            ))
    }
}
