//! Wicket - session check for the Zendesk ticket client
//!
//! This binary loads configuration, resolves the API token from the
//! environment-backed secret store, and builds a session - which
//! includes the liveness check against the tenant. Exit status reports
//! the outcome.
//!
//! # Configuration
//!
//! Set the following environment variables (or use a `.env` file):
//!
//! - `ZD_EMAIL`: Agent email for token authentication
//! - `ZD_DOMAIN`: Fully-qualified tenant domain
//! - `ZD_VAULT` / `ZD_SECRET_NAME`: Where the API token lives; the
//!   env-backed store resolves `{ZD_VAULT}_{ZD_SECRET_NAME}` uppercased

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, EnvFilter};

use wicket::{config, secrets, session};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (ignore errors if not found)
    dotenvy::dotenv().ok();

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("wicket=info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    tracing::info!("wicket v{}", env!("CARGO_PKG_VERSION"));

    let config = config::Config::from_env().context("Failed to load configuration")?;

    tracing::debug!(domain = %config.domain, "configuration loaded");

    let store = secrets::EnvSecretStore::new();
    let session = session::SessionBuilder::from_config(&config)
        .connect(&store)
        .await
        .context("Failed to establish session")?;

    tracing::info!(base_url = %session.base_url(), "tenant reachable, credential accepted");

    Ok(())
}
