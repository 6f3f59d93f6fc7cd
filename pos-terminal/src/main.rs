//! `pos` - terminal front end for the restaurant POS
//!
//! Each subcommand mounts one view, runs it and tears it down.

mod cli;
mod commands;
mod logger;
mod render;

use clap::Parser;
use pos_client::ClientConfig;

use crate::cli::Cli;

#[tokio::main]
async fn main() -> std::process::ExitCode {
    // .env is optional
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(e) = logger::init_logger(&cli.log_level, cli.log_json, cli.log_dir.as_deref()) {
        eprintln!("error: failed to initialize logging: {e:#}");
        return std::process::ExitCode::FAILURE;
    }

    match run(cli).await {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            // Alert for the operator
            eprintln!("error: {e:#}");
            std::process::ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = ClientConfig::from_env();
    if let Some(url) = &cli.api_url {
        config.base_url = url.clone();
    }
    tracing::debug!(base_url = %config.base_url, "Using backend");

    commands::run(cli, config).await
}
