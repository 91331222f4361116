//! Application configuration
//!
//! Read from an optional TOML file, then overridden by environment variables.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::repository::RetryPolicy;

/// Environment variable naming the config file
pub const CONFIG_PATH_ENV: &str = "TRI_LIST_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "tri_list.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Socket address to listen on
    pub bind_addr: String,
    /// SQLite database file, or `:memory:`
    pub database_path: PathBuf,
    /// Directory served for any path without a route
    pub static_dir: PathBuf,
    /// Directory for rotated log files
    pub log_dir: PathBuf,
    /// Storage connection attempts before startup fails
    pub connect_attempts: u32,
    /// Initial delay between connection attempts
    pub connect_backoff_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3000".to_string(),
            database_path: PathBuf::from("tri_list.db"),
            static_dir: PathBuf::from("public"),
            log_dir: PathBuf::from("logs"),
            connect_attempts: 5,
            connect_backoff_ms: 200,
        }
    }
}

impl AppConfig {
    /// Load from `$TRI_LIST_CONFIG` (or `tri_list.toml`) and apply environment overrides
    pub fn load() -> Result<Self> {
        let path = std::env::var(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));

        let mut config = Self::load_from(&path)?;
        config.apply_env(|name| std::env::var(name).ok());
        Ok(config)
    }

    /// Load config from a specific path; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: AppConfig = toml::from_str(&content)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        Ok(config)
    }

    /// Apply overrides; unparseable numbers are ignored
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(addr) = lookup("BIND_ADDR") {
            self.bind_addr = addr;
        }
        if let Some(port) = lookup("PORT").and_then(|p| p.trim().parse::<u16>().ok()) {
            let host = self
                .bind_addr
                .rsplit_once(':')
                .map(|(host, _)| host.to_string())
                .unwrap_or_else(|| self.bind_addr.clone());
            self.bind_addr = format!("{}:{}", host, port);
        }
        if let Some(url) = lookup("DATABASE_URL") {
            self.database_path = database_path_from_url(&url);
        }
        if let Some(dir) = lookup("STATIC_DIR") {
            self.static_dir = PathBuf::from(dir);
        }
        if let Some(dir) = lookup("LOG_DIR") {
            self.log_dir = PathBuf::from(dir);
        }
        if let Some(n) = lookup("DB_CONNECT_ATTEMPTS").and_then(|v| v.trim().parse().ok()) {
            self.connect_attempts = n;
        }
        if let Some(ms) = lookup("DB_CONNECT_BACKOFF_MS").and_then(|v| v.trim().parse().ok()) {
            self.connect_backoff_ms = ms;
        }
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            attempts: self.connect_attempts,
            backoff: Duration::from_millis(self.connect_backoff_ms),
        }
    }
}

/// Accepts a bare path, `sqlite://path` or `sqlite:path`
fn database_path_from_url(url: &str) -> PathBuf {
    let path = url
        .strip_prefix("sqlite://")
        .or_else(|| url.strip_prefix("sqlite:"))
        .unwrap_or(url);
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::tempdir;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tri_list.toml");
        std::fs::write(&path, "bind_addr = \"0.0.0.0:8080\"\nconnect_attempts = 9\n").unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:8080");
        assert_eq!(config.connect_attempts, 9);
        assert_eq!(config.database_path, PathBuf::from("tri_list.db"));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tri_list.toml");
        std::fs::write(&path, "connect_attempts = \"many\"").unwrap();
        assert!(AppConfig::load_from(&path).is_err());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = AppConfig::default();
        config.apply_env(env(&[
            ("PORT", "8081"),
            ("DATABASE_URL", "sqlite:///var/lib/lists.db"),
            ("STATIC_DIR", "/srv/public"),
            ("DB_CONNECT_BACKOFF_MS", "50"),
        ]));

        assert_eq!(config.bind_addr, "127.0.0.1:8081");
        assert_eq!(config.database_path, PathBuf::from("/var/lib/lists.db"));
        assert_eq!(config.static_dir, PathBuf::from("/srv/public"));
        assert_eq!(config.retry_policy().backoff, Duration::from_millis(50));
    }

    #[test]
    fn test_bind_addr_then_port() {
        let mut config = AppConfig::default();
        config.apply_env(env(&[("BIND_ADDR", "0.0.0.0:80"), ("PORT", "9000")]));
        assert_eq!(config.bind_addr, "0.0.0.0:9000");
    }

    #[test]
    fn test_invalid_numbers_are_ignored() {
        let mut config = AppConfig::default();
        config.apply_env(env(&[("PORT", "http"), ("DB_CONNECT_ATTEMPTS", "-1")]));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_database_url_forms() {
        assert_eq!(database_path_from_url("lists.db"), PathBuf::from("lists.db"));
        assert_eq!(database_path_from_url("sqlite:lists.db"), PathBuf::from("lists.db"));
        assert_eq!(database_path_from_url(":memory:"), PathBuf::from(":memory:"));
    }
}
