use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use roombook_api::DEFAULT_BASE_URL;

pub const BASE_URL_ENV: &str = "ROOMBOOK_API_URL";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub base_url: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path()?)
    }

    pub fn load_from(path: &PathBuf) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::default_path()?)
    }

    pub fn save_to(&self, path: &PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn default_path() -> Result<PathBuf> {
        if let Some(data_dir) = dirs::data_dir() {
            return Ok(data_dir.join("roombook").join("config.toml"));
        }
        let home = std::env::var_os("HOME")
            .context("Could not determine config path: no HOME or XDG data directory")?;
        Ok(PathBuf::from(home).join(".roombook").join("config.toml"))
    }
}

/// Resolve the API base URL: explicit flag > environment > config file >
/// built-in default.
pub fn resolve_base_url(flag: Option<&str>, config: &Config) -> String {
    pick_base_url(flag, std::env::var(BASE_URL_ENV).ok().as_deref(), config)
}

fn pick_base_url(flag: Option<&str>, env: Option<&str>, config: &Config) -> String {
    if let Some(url) = flag {
        return url.to_string();
    }
    if let Some(url) = env.map(str::trim).filter(|u| !u.is_empty()) {
        return url.to_string();
    }
    if let Some(url) = config.base_url.as_deref() {
        return url.to_string();
    }
    DEFAULT_BASE_URL.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");

        let config = Config {
            base_url: Some("http://booking.example:8080/api".to_string()),
        };
        config.save_to(&config_path)?;
        assert!(config_path.exists());

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded.base_url.as_deref(), Some("http://booking.example:8080/api"));

        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path)?;
        assert!(config.base_url.is_none());

        Ok(())
    }

    #[test]
    fn test_base_url_priority() {
        let config = Config {
            base_url: Some("http://from-config".to_string()),
        };

        assert_eq!(
            pick_base_url(Some("http://from-flag"), Some("http://from-env"), &config),
            "http://from-flag"
        );
        assert_eq!(
            pick_base_url(None, Some("http://from-env"), &config),
            "http://from-env"
        );
        assert_eq!(pick_base_url(None, None, &config), "http://from-config");
        assert_eq!(
            pick_base_url(None, None, &Config::default()),
            DEFAULT_BASE_URL
        );
    }

    #[test]
    fn test_blank_env_is_ignored() {
        let config = Config::default();
        assert_eq!(pick_base_url(None, Some("  "), &config), DEFAULT_BASE_URL);
    }
}
