use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use client_core::{load_settings, DirectoryClient};
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod commands;
mod render;

use commands::Cli;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    let mut settings = load_settings(cli.config.as_deref())?;
    if let Some(api_url) = cli.api_url {
        settings.api_base_url = api_url;
    }
    let client = DirectoryClient::new(settings)?;
    debug!(resource = ?cli.resource, "running command");

    if commands::run(&client, cli.resource).await? {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
