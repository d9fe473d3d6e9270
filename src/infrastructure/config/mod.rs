//! Application configuration.

pub mod app_config;
pub mod args;
pub mod storage;

pub use app_config::{AppConfig, EndpointConfig, LogLevel};
pub use args::{CliArgs, FormArgs, FormCommand};
pub use storage::{ConfigError, StorageManager};
