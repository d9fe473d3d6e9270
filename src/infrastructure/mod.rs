//! Infrastructure layer with external service adapters.

/// Application configuration.
pub mod config;
/// Authentication endpoint client.
pub mod http;

pub use config::{AppConfig, CliArgs, EndpointConfig, LogLevel, StorageManager};
pub use http::HttpAuthClient;
