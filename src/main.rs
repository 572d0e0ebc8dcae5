//! # Chat Store
//!
//! Process entry point that initializes:
//! - Configuration loading
//! - Tracing/logging subsystem (format chosen by environment)
//! - Entity store and expired-session sweeper

use anyhow::Result;
use tracing::info;

use chat_store::config::Settings;
use chat_store::startup::Application;
use chat_store::telemetry::{init_tracing, LogFormat};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from environment and config files
    let settings = Settings::load()?;

    // Initialize tracing subscriber for structured logging
    init_tracing(LogFormat::for_environment(&settings.environment));

    info!("Starting Chat Store...");
    info!(
        environment = %settings.environment,
        session_ttl_minutes = settings.session.ttl_minutes,
        sweep_interval_secs = settings.session.sweep_interval_secs,
        "Configuration loaded"
    );

    let application = Application::build(settings)?;

    info!("Store ready");
    application.run_until_stopped().await?;

    Ok(())
}
