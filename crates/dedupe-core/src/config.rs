//! Client configuration loaded from a TOML file.
//!
//! Every field has a default, so the client works without a config file.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Top-level client configuration.
///
/// Call [`Config::load`] to read from a TOML path.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub filters: FilterConfig,
    #[serde(default)]
    pub stats: StatsConfig,
}

impl Config {
    /// Loads configuration from a TOML file at `path`.
    ///
    /// # Errors
    ///
    /// - [`CoreError::NotFound`] if the file does not exist.
    /// - [`CoreError::PermissionDenied`] if the file is not readable.
    /// - [`CoreError::ConfigParse`] if the TOML is malformed or an interval is zero.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => CoreError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => CoreError::PermissionDenied(path.to_path_buf()),
            _ => CoreError::Io(e),
        })?;
        let config: Config =
            toml::from_str(&content).map_err(|e| CoreError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> CoreResult<()> {
        if self.stats.refresh_interval_ms == 0 {
            return Err(CoreError::ConfigParse(
                "stats.refresh_interval_ms must be greater than zero".to_string(),
            ));
        }
        if self.service.request_timeout_secs == 0 {
            return Err(CoreError::ConfigParse(
                "service.request_timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Where the storage service lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl ServiceConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

/// Search form settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Quiescence window before filter changes are forwarded.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl FilterConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
        }
    }
}

/// Statistics panel settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsConfig {
    #[serde(default = "default_refresh_interval_ms")]
    pub refresh_interval_ms: u64,
}

impl StatsConfig {
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.refresh_interval_ms)
    }
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            refresh_interval_ms: default_refresh_interval_ms(),
        }
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000/api".to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_debounce_ms() -> u64 {
    300
}

fn default_refresh_interval_ms() -> u64 {
    5000
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    use crate::controller::DEFAULT_QUIESCENCE;
    use crate::stats::DEFAULT_REFRESH_INTERVAL;

    #[test]
    fn defaults_match_reference_timings() {
        let config = Config::default();

        assert_eq!(config.filters.debounce(), DEFAULT_QUIESCENCE);
        assert_eq!(config.stats.refresh_interval(), DEFAULT_REFRESH_INTERVAL);
        assert_eq!(config.service.base_url, "http://127.0.0.1:8000/api");
        assert_eq!(config.service.request_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn load_full_toml() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(
            &path,
            r#"
[service]
base_url = "https://files.example.com/api"
request_timeout_secs = 3

[filters]
debounce_ms = 150

[stats]
refresh_interval_ms = 10000
"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();

        assert_eq!(config.service.base_url, "https://files.example.com/api");
        assert_eq!(config.service.request_timeout_secs, 3);
        assert_eq!(config.filters.debounce_ms, 150);
        assert_eq!(config.stats.refresh_interval_ms, 10000);
    }

    #[test]
    fn load_partial_toml_uses_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "[filters]\ndebounce_ms = 500\n").unwrap();

        let config = Config::load(&path).unwrap();

        assert_eq!(config.filters.debounce_ms, 500);
        assert_eq!(config.stats.refresh_interval_ms, 5000);
        assert_eq!(config.service.request_timeout_secs, 10);
    }

    #[test]
    fn load_empty_toml_uses_all_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "").unwrap();

        let config = Config::load(&path).unwrap();

        assert_eq!(config.filters.debounce_ms, 300);
        assert_eq!(config.service.base_url, default_base_url());
    }

    #[test]
    fn load_nonexistent_returns_not_found() {
        let tmp = TempDir::new().unwrap();
        let result = Config::load(&tmp.path().join("nonexistent.toml"));
        assert!(matches!(result.unwrap_err(), CoreError::NotFound(_)));
    }

    #[test]
    fn load_invalid_toml_returns_config_parse() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "this is not valid [[[toml").unwrap();

        let result = Config::load(&path);
        assert!(matches!(result.unwrap_err(), CoreError::ConfigParse(_)));
    }

    #[test]
    fn zero_refresh_interval_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "[stats]\nrefresh_interval_ms = 0\n").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(err.to_string().contains("refresh_interval_ms"));
    }

    #[test]
    fn zero_debounce_is_allowed() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "[filters]\ndebounce_ms = 0\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.filters.debounce(), Duration::ZERO);
    }
}
