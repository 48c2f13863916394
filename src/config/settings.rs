//! Configuration settings for portopt.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Endpoint used when nothing else is configured.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/optimize";

/// Prefix for environment overrides, e.g. `PORTOPT__API__ENDPOINT`.
const ENV_PREFIX: &str = "PORTOPT";

/// Main configuration struct.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// API configuration.
    pub api: ApiConfig,
    /// UI configuration.
    pub ui: UiConfig,
    /// Key bindings.
    pub keybindings: KeyBindings,
}

impl Config {
    /// Load configuration from a TOML file layered with environment overrides.
    ///
    /// A missing file is not an error; every field has a default.
    pub fn load(path: Option<PathBuf>) -> crate::Result<Self> {
        let config_path = path.unwrap_or_else(super::default_config_path);
        tracing::debug!("Loading configuration from {}", config_path.display());

        let settings = ::config::Config::builder()
            .add_source(
                ::config::File::new(&config_path.to_string_lossy(), ::config::FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Save configuration to file.
    pub fn save(&self, path: Option<&Path>) -> crate::Result<()> {
        let config_path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(super::default_config_path);

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::config(e.to_string()))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}

/// API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Optimization endpoint URL.
    pub endpoint: String,
    /// Request timeout in seconds. `None` waits indefinitely.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
    /// Target annual return forwarded to the backend. Omitted from the
    /// request when unset, leaving the backend default in place.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_return: Option<f64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: None,
            target_return: None,
        }
    }
}

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Tick rate in milliseconds for input polling.
    pub tick_rate_ms: u64,
    /// Enable mouse support.
    pub mouse_support: bool,
    /// Show status bar.
    pub show_status_bar: bool,
    /// Show help bar.
    pub show_help_bar: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 100,
            mouse_support: true,
            show_status_bar: true,
            show_help_bar: true,
        }
    }
}

/// Key bindings configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    /// Quit the application.
    pub quit: String,
    /// Show help.
    pub help: String,
    /// Submit the ticker list.
    pub submit: String,
    /// Clear the ticker input.
    pub clear: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            quit: "Ctrl+c".to_string(),
            help: "F1".to_string(),
            submit: "Enter".to_string(),
            clear: "Ctrl+u".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "portopt-{}-{}-{}.toml",
            name,
            std::process::id(),
            chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default()
        ))
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api.endpoint, DEFAULT_ENDPOINT);
        assert!(config.api.timeout_secs.is_none());
        assert!(config.api.target_return.is_none());
        assert_eq!(config.keybindings.submit, "Enter");
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let path = temp_path("missing");
        let config = Config::load(Some(path)).unwrap();
        assert_eq!(config.ui.tick_rate_ms, 100);
    }

    #[test]
    fn test_save_and_load() {
        let path = temp_path("roundtrip");
        let mut config = Config::default();
        config.api.endpoint = "http://127.0.0.1:9000/optimize".to_string();
        config.api.timeout_secs = Some(15);
        config.save(Some(&path)).unwrap();

        let loaded = Config::load(Some(path.clone())).unwrap();
        assert_eq!(loaded.api.endpoint, "http://127.0.0.1:9000/optimize");
        assert_eq!(loaded.api.timeout_secs, Some(15));
        assert!(loaded.api.target_return.is_none());

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let path = temp_path("partial");
        std::fs::write(&path, "[api]\ntarget_return = 0.1\n").unwrap();

        let loaded = Config::load(Some(path.clone())).unwrap();
        assert_eq!(loaded.api.target_return, Some(0.1));
        assert_eq!(loaded.api.endpoint, DEFAULT_ENDPOINT);
        assert!(loaded.ui.show_status_bar);

        let _ = std::fs::remove_file(path);
    }
}
