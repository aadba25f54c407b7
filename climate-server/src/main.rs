//! Binary crate for the climate observation HTTP API.
//!
//! This crate focuses on:
//! - Parsing CLI arguments and loading configuration
//! - Mapping routes to data-access calls
//! - Translating errors to HTTP status codes

use anyhow::Context;
use clap::Parser;
use climate_core::{ClimateStore, Config};
use tracing_subscriber::EnvFilter;

mod cli;
mod error;
mod routes;

use routes::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = cli::Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    // CLI flags win over the config file, which wins over built-in defaults.
    let database = cli.database.unwrap_or_else(|| config.database_path());
    let bind = cli.bind.unwrap_or_else(|| config.bind_addr());

    let store = ClimateStore::open(&database)
        .await
        .with_context(|| format!("Failed to open database: {}", database.display()))?;

    let listener = tokio::net::TcpListener::bind(&bind)
        .await
        .with_context(|| format!("Failed to bind address: {bind}"))?;

    tracing::info!(
        database = %database.display(),
        bind = %bind,
        "serving climate observation API"
    );

    axum::serve(listener, routes::router(AppState { store }))
        .await
        .context("HTTP server terminated")
}
