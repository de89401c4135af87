//! Configuration loading and management.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the session catalog JSON file.
    pub catalog_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        let data_dir = dirs_data_path().unwrap_or_else(|| PathBuf::from("."));
        Self {
            catalog_path: data_dir.join("catalog.json"),
        }
    }
}

impl Config {
    /// Loads configuration, optionally merging a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (LT_*)
        figment = figment.merge(Env::prefixed("LT_"));

        figment.extract()
    }
}

/// Returns the platform-specific config directory for lt.
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("lt"))
}

/// Returns the platform-specific data directory for lt.
///
/// On Linux: `~/.local/share/lt`
pub fn dirs_data_path() -> Option<PathBuf> {
    dirs::data_dir().map(|p| p.join("lt"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dirs_data_path_returns_some() {
        assert!(dirs_data_path().is_some());
    }

    #[test]
    fn test_dirs_data_path_ends_with_lt() {
        let path = dirs_data_path().unwrap();
        assert_eq!(path.file_name().unwrap(), "lt");
    }

    #[test]
    fn test_default_config_uses_data_dir_for_catalog() {
        let config = Config::default();
        let data_dir = dirs_data_path().unwrap();
        assert_eq!(config.catalog_path, data_dir.join("catalog.json"));
    }
}
