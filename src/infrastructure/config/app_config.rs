//! Application configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::args::CliArgs;

pub(super) const APP_NAME: &str = "formgate";
pub(super) const APP_QUALIFIER: &str = "com";
pub(super) const APP_ORGANIZATION: &str = "formgate";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Authentication endpoint location and transport settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// Server base URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Path of the login endpoint, relative to `base_url`.
    #[serde(default = "default_login_path")]
    pub login_path: String,

    /// Path of the registration endpoint, relative to `base_url`.
    #[serde(default = "default_register_path")]
    pub register_path: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl EndpointConfig {
    /// Joins a path onto the base URL with exactly one slash between them.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            login_path: default_login_path(),
            register_path: default_register_path(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_login_path() -> String {
    "/api/login".to_string()
}

fn default_register_path() -> String {
    "/api/register".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// Application configuration, read from file and overridden by CLI.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Log file path. Logs go to stderr when unset.
    #[serde(default)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Authentication endpoint settings.
    #[serde(default)]
    pub endpoint: EndpointConfig,
}

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: &CliArgs) {
        if let Some(log_path) = &args.log_path {
            self.log_path = Some(log_path.clone());
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(base_url) = &args.endpoint {
            self.endpoint.base_url.clone_from(base_url);
        }
        if let Some(timeout_secs) = args.timeout {
            self.endpoint.timeout_secs = timeout_secs;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_parse_partial_endpoint_section() {
        let toml_content = r#"
            log_level = "debug"

            [endpoint]
            base_url = "https://auth.example.com"
            timeout_secs = 5
        "#;

        let config: AppConfig = toml::from_str(toml_content).expect("Failed to parse config");

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.endpoint.base_url, "https://auth.example.com");
        assert_eq!(config.endpoint.login_path, "/api/login");
        assert_eq!(config.endpoint.timeout_secs, 5);
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.log_level, LogLevel::Info);
        assert!(config.log_path.is_none());
        assert_eq!(config.endpoint, EndpointConfig::default());
    }

    #[test]
    fn test_url_for_normalizes_slashes() {
        let endpoint = EndpointConfig {
            base_url: "http://localhost:3000/".to_string(),
            ..EndpointConfig::default()
        };

        assert_eq!(
            endpoint.url_for("/api/login"),
            "http://localhost:3000/api/login"
        );
        assert_eq!(endpoint.url_for("api/login"), "http://localhost:3000/api/login");
    }

    #[test]
    fn test_cli_overrides_file_values() {
        let mut config: AppConfig = toml::from_str(
            r#"
            [endpoint]
            base_url = "https://from-file.example.com"
            timeout_secs = 10
            "#,
        )
        .unwrap();
        let args = CliArgs::parse_from([
            "formgate",
            "--endpoint",
            "http://127.0.0.1:8080",
            "--log-level",
            "warn",
            "login",
            "--name",
            "bob",
            "--password",
            "pw",
        ]);

        config.merge_with_args(&args);

        assert_eq!(config.endpoint.base_url, "http://127.0.0.1:8080");
        assert_eq!(config.endpoint.timeout_secs, 10);
        assert_eq!(config.log_level, LogLevel::Warn);
    }
}
