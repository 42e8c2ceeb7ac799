//! # CADOK Trade Engine
//!
//! Main entry point for the trade service.

use cadok_trades::config::{AppConfig, LogFormat};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load()?;
    config.validate()?;

    // Initialize tracing
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.log.level.clone()));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(config.log.include_target);
    match config.log.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.pretty().init(),
    }

    info!(
        service = %config.service_name,
        environment = %config.environment,
        "Starting CADOK trade engine v{}",
        env!("CARGO_PKG_VERSION")
    );

    // Request-handling glue (routes, auth, storage wiring) is assembled
    // by the deployment binary; this process only hosts the engine.
    tokio::signal::ctrl_c().await?;
    info!("Shutting down CADOK trade engine");

    Ok(())
}
