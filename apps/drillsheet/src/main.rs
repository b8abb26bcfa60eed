mod cli;
mod config;
mod errors;
mod exercise;
mod layout;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::Cli;
use crate::config::Config;

fn main() -> Result<()> {
    // Load configuration first so the log level can come from it
    let config = Config::from_env()?;

    // Logs go to stderr; stdout carries the exercise listing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting Drillsheet v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    cli.run(&config)
}
