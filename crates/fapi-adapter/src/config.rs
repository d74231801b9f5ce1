//! Application configuration.

use crate::error::{AppError, AppResult};
use fapi_gateway::Environment;
use serde::{Deserialize, Serialize};

/// Operating mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperatingMode {
    /// Resolve and print requests without touching the venue.
    #[default]
    DryRun,
    /// Dispatch resolved actions to the venue.
    Live,
}

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Operating mode.
    #[serde(default)]
    pub mode: OperatingMode,
    /// Execution context (selects base URL and credential env vars).
    #[serde(default)]
    pub environment: Environment,
    /// REST base URL override. Defaults to the environment's URL.
    #[serde(default)]
    pub base_url: Option<String>,
    /// Request validity window in milliseconds.
    #[serde(default = "default_recv_window")]
    pub recv_window: u64,
    /// HTTP timeout in seconds.
    #[serde(default = "default_http_timeout_secs")]
    pub http_timeout_secs: u64,
    /// Inline API key. Environment variables are used when absent.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Inline API secret. Environment variables are used when absent.
    #[serde(default)]
    pub api_secret: Option<String>,
}

fn default_recv_window() -> u64 {
    5_000
}

fn default_http_timeout_secs() -> u64 {
    10
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mode: OperatingMode::default(),
            environment: Environment::default(),
            base_url: None,
            recv_window: default_recv_window(),
            http_timeout_secs: default_http_timeout_secs(),
            api_key: None,
            api_secret: None,
        }
    }
}

impl AppConfig {
    /// Load from a specific file.
    pub fn from_file(path: &str) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("Failed to read config: {e}")))?;

        Self::from_toml_str(&content)
    }

    /// Parse from TOML text.
    pub fn from_toml_str(content: &str) -> AppResult<Self> {
        toml::from_str(content).map_err(|e| AppError::Config(format!("Failed to parse config: {e}")))
    }

    /// Check if in dry-run mode.
    pub fn is_dry_run(&self) -> bool {
        self.mode == OperatingMode::DryRun
    }

    /// Base URL to use: explicit override, else the environment's.
    pub fn effective_base_url(&self) -> String {
        self.base_url
            .clone()
            .unwrap_or_else(|| self.environment.base_url().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert!(config.is_dry_run());
        assert_eq!(config.environment, Environment::Testnet);
        assert_eq!(config.recv_window, 5_000);
        assert_eq!(
            config.effective_base_url(),
            "https://testnet.binancefuture.com"
        );
    }

    #[test]
    fn test_parse_minimal_toml() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert!(config.is_dry_run());
    }

    #[test]
    fn test_parse_live_mainnet() {
        let config = AppConfig::from_toml_str(
            r#"
            mode = "live"
            environment = "mainnet"
            recv_window = 3000
            "#,
        )
        .unwrap();
        assert_eq!(config.mode, OperatingMode::Live);
        assert_eq!(config.environment, Environment::Mainnet);
        assert_eq!(config.recv_window, 3_000);
        assert_eq!(config.effective_base_url(), "https://fapi.binance.com");
    }

    #[test]
    fn test_base_url_override_wins() {
        let config = AppConfig::from_toml_str(r#"base_url = "http://localhost:8080""#).unwrap();
        assert_eq!(config.effective_base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_rejects_unknown_mode() {
        assert!(AppConfig::from_toml_str(r#"mode = "paper""#).is_err());
    }
}
