//! Backend configuration.
//!
//! A single setting, the API base URL, resolved in priority order:
//! environment variable, then config file, then built-in default.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable overriding the backend base URL.
pub const ENV_API_URL: &str = "NOTECMD_API_URL";

/// Default backend location for local development.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Config {
    /// Resolve configuration: env var first, then the config file, then
    /// defaults. A missing or unreadable config file is not an error.
    pub fn load() -> Self {
        let env_value = env::var(ENV_API_URL).ok();
        Self::resolve(env_value.as_deref(), Self::default_path().as_deref())
    }

    /// Precedence: a non-blank env value wins, then a readable config
    /// file, then defaults.
    fn resolve(env_value: Option<&str>, path: Option<&Path>) -> Self {
        if let Some(url) = env_value {
            let url = url.trim();
            if !url.is_empty() {
                return Self {
                    base_url: url.to_string(),
                };
            }
        }

        if let Some(path) = path {
            if path.exists() {
                if let Ok(config) = Self::load_from_path(path) {
                    return config;
                }
            }
        }

        Self::default()
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&raw)
            .with_context(|| format!("invalid config file: {}", path.display()))?;
        Ok(config)
    }

    fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("notecmd").join("config.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_load_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut file = fs::File::create(&path).unwrap();
        write!(file, r#"{{"base_url": "https://notes.example.com/api"}}"#).unwrap();

        let config = Config::load_from_path(&path).unwrap();
        assert_eq!(config.base_url, "https://notes.example.com/api");
    }

    #[test]
    fn test_load_from_path_fills_missing_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{}").unwrap();

        let config = Config::load_from_path(&path).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_load_from_missing_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");
        assert!(Config::load_from_path(&path).is_err());
    }

    fn write_config(dir: &tempfile::TempDir, base_url: &str) -> PathBuf {
        let path = dir.path().join("config.json");
        fs::write(&path, format!(r#"{{"base_url": "{}"}}"#, base_url)).unwrap();
        path
    }

    #[test]
    fn test_env_value_wins_over_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "https://from-file.example.com/api");

        let config = Config::resolve(Some("https://from-env.example.com/api"), Some(&path));
        assert_eq!(config.base_url, "https://from-env.example.com/api");
    }

    #[test]
    fn test_env_value_is_trimmed() {
        let config = Config::resolve(Some("  https://notes.example.com/api  "), None);
        assert_eq!(config.base_url, "https://notes.example.com/api");
    }

    #[test]
    fn test_blank_env_value_falls_through_to_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "https://from-file.example.com/api");

        let config = Config::resolve(Some("   "), Some(&path));
        assert_eq!(config.base_url, "https://from-file.example.com/api");
    }

    #[test]
    fn test_resolve_defaults_without_env_or_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");

        assert_eq!(Config::resolve(None, None).base_url, DEFAULT_BASE_URL);
        assert_eq!(
            Config::resolve(None, Some(&missing)).base_url,
            DEFAULT_BASE_URL
        );
    }

    #[test]
    fn test_resolve_ignores_unreadable_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "not json").unwrap();

        let config = Config::resolve(None, Some(&path));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_load_from_invalid_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "not json").unwrap();
        assert!(Config::load_from_path(&path).is_err());
    }
}
