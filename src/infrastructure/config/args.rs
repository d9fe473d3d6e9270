use super::app_config::LogLevel;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "formgate",
    version,
    about = "Submit login and registration forms to an authentication endpoint",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Authentication server base URL.
    #[arg(long, env = "FORMGATE_ENDPOINT", value_name = "URL")]
    pub endpoint: Option<String>,

    /// Request timeout in seconds.
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: FormCommand,
}

/// Form to submit.
#[derive(Debug, Subcommand)]
pub enum FormCommand {
    /// Sign in with an existing account.
    Login(FormArgs),
    /// Create a new account.
    Register(FormArgs),
}

/// Values typed into a form.
#[derive(Debug, Args)]
pub struct FormArgs {
    /// Account name.
    #[arg(long, env = "FORMGATE_NAME", default_value = "")]
    pub name: String,

    /// Account password.
    #[arg(long, env = "FORMGATE_PASSWORD", hide_env_values = true, default_value = "")]
    pub password: String,
}
