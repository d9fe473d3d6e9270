use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use formgate::application::{AuthDispatcher, FormStore};
use formgate::infrastructure::config::{FormArgs, FormCommand};
use formgate::infrastructure::{AppConfig, CliArgs, HttpAuthClient, StorageManager};
use formgate::presentation::{Field, FormBinding};

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = &config.log_path {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    Ok(())
}

fn load_config(args: &CliArgs) -> Result<AppConfig> {
    let storage = StorageManager::new().wrap_err("Failed to locate config directory")?;
    let mut config = storage
        .load_config(args.config.as_deref())
        .wrap_err("Failed to load configuration")?;
    config.merge_with_args(args);
    Ok(config)
}

fn bind_form(command: FormCommand, dispatcher: AuthDispatcher) -> FormBinding {
    let (mut binding, FormArgs { name, password }) = match command {
        FormCommand::Login(values) => (FormBinding::login(dispatcher), values),
        FormCommand::Register(values) => (FormBinding::register(dispatcher), values),
    };
    binding.set_value(Field::Name, name);
    binding.set_value(Field::Password, password);
    binding
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();

    let args = CliArgs::parse();
    let config = load_config(&args)?;

    init_logging(&config)?;

    info!(
        version = formgate::VERSION,
        endpoint = %config.endpoint.base_url,
        "Starting formgate"
    );

    let auth_client = Arc::new(HttpAuthClient::new(&config.endpoint)?);
    let (store, handle) = FormStore::new();
    let store_task = tokio::spawn(store.run());

    let dispatcher = AuthDispatcher::new(auth_client, handle);
    let binding = bind_form(args.command, dispatcher);

    let outcome = binding.submit().await;
    binding.settled().await;

    let exit = match (binding.error(), binding.user()) {
        (Some(message), _) => {
            eprintln!("{}: {message}", binding.form());
            ExitCode::FAILURE
        }
        (None, Some(user)) => {
            println!("Signed in as {} (id {})", user.name(), user.id());
            ExitCode::SUCCESS
        }
        (None, None) => {
            debug!(?outcome, "Submission left no error and no user");
            ExitCode::FAILURE
        }
    };

    drop(binding);
    store_task.await.wrap_err("Form store task failed")?;

    Ok(exit)
}
