//! render-switch entry point
//!
//! Loads configuration, wires the lifecycle orchestrator to the Render API and
//! serves admin commands read line by line from stdin.

mod command;
mod config;
mod console;
mod handler;

#[cfg(test)]
mod test_mocks;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use render_switch_core::{Account, LifecycleService, RenderProviderFactory};
use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, ConfigOverrides};
use crate::console::ConsoleTransport;
use crate::handler::CommandHandler;

#[derive(Debug, Parser)]
#[command(name = "render-switch", version, about = "Suspend and resume Render services across accounts")]
struct Cli {
    /// Config file (defaults to <config_dir>/render-switch/config.toml)
    #[arg(long, env = "RENDER_SWITCH_CONFIG")]
    config: Option<PathBuf>,

    /// Admin user id
    #[arg(long, env = "ADMIN")]
    admin: Option<i64>,

    /// Comma-separated Render API keys, in account order
    #[arg(long, env = "API_KEYS", value_delimiter = ',', hide_env_values = true)]
    api_keys: Vec<String>,

    /// Render API base URL
    #[arg(long, env = "RENDER_API_BASE_URL")]
    api_base_url: Option<String>,

    /// Sender id attached to console input (defaults to the admin id)
    #[arg(long)]
    as_user: Option<i64>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // stdout carries replies, logs go to stderr
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .with(filter)
        .init();

    let overrides = ConfigOverrides {
        admin_id: cli.admin,
        api_keys: cli.api_keys,
        api_base_url: cli.api_base_url,
    };
    let config = match Config::load(cli.config.as_deref(), overrides) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::FAILURE;
        }
    };
    tracing::debug!("Loaded {config:?}");
    tracing::info!(
        "Starting render-switch with {} account(s), parallelism {}",
        config.api_keys.len(),
        config.parallelism
    );

    let factory = RenderProviderFactory::new(config.provider);
    let service = LifecycleService::new(Account::from_api_keys(config.api_keys), Arc::new(factory))
        .with_parallelism(config.parallelism);
    let handler = CommandHandler::new(config.admin_id, Arc::new(service));
    let transport = ConsoleTransport::new(cli.as_user.unwrap_or(config.admin_id));

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    let reader = BufReader::new(tokio::io::stdin());
    match transport
        .run(&handler, reader, tokio::io::stdout(), shutdown)
        .await
    {
        Ok(()) => {
            tracing::info!("render-switch stopped");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
