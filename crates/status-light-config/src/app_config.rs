//! Application configuration
//!
//! Configuration loaded from `.status-light.toml`.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Application configuration loaded from .status-light.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Timeout for URL probes, in seconds
    #[serde(default = "default_probe_timeout_secs")]
    pub probe_timeout_secs: u64,

    /// User-Agent header sent with URL probes
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Terminals narrower than this use the compact layout
    #[serde(default = "default_compact_width")]
    pub compact_width: u16,

    /// Open the URL in the browser right after a successful probe
    #[serde(default)]
    pub open_browser_on_url: bool,
}

fn default_probe_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    "status-light".to_string()
}

fn default_compact_width() -> u16 {
    80
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            probe_timeout_secs: default_probe_timeout_secs(),
            user_agent: default_user_agent(),
            compact_width: default_compact_width(),
            open_browser_on_url: false,
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        if let Some(content) = crate::load_config_file() {
            match toml::from_str(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }

    /// Probe timeout as a Duration
    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.probe_timeout_secs, 10);
        assert_eq!(config.user_agent, "status-light");
        assert_eq!(config.compact_width, 80);
        assert!(!config.open_browser_on_url);
        assert_eq!(config.probe_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_config_deserialize() {
        let toml = r#"
            probe_timeout_secs = 3
            user_agent = "curl/8.0"
            open_browser_on_url = true
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.probe_timeout_secs, 3);
        assert_eq!(config.user_agent, "curl/8.0");
        assert!(config.open_browser_on_url);
        // compact_width should use default
        assert_eq!(config.compact_width, 80);
    }

    #[test]
    fn test_config_deserialize_empty() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
