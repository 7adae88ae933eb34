//! CarbonCap registry entry point.
//!
//! Loads configuration from the environment, boots the engine with the
//! development adapters, and runs until interrupted.

use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use cap_01_identity_registry::RegistrationPolicy;
use cap_runtime::container::RuntimeConfig;
use cap_runtime::RegistryRuntime;

/// Load configuration from environment variables.
fn load_config() -> RuntimeConfig {
    let mut config = RuntimeConfig::default();

    if let Ok(addr_hex) = std::env::var("CAP_REGULATOR_ADDR") {
        if let Ok(addr_bytes) = hex::decode(addr_hex.trim_start_matches("0x")) {
            if addr_bytes.len() == 20 {
                config.regulator.copy_from_slice(&addr_bytes);
                info!("Loaded Regulator identity from environment");
            } else {
                warn!("CAP_REGULATOR_ADDR must be 20 bytes (40 hex chars)");
            }
        }
    }

    if let Ok(timeout) = std::env::var("CAP_SETTLEMENT_TIMEOUT_MS") {
        if let Ok(ms) = timeout.parse() {
            config.settlement_timeout = Duration::from_millis(ms);
        }
    }

    if std::env::var("CAP_SELF_SERVICE_REGISTRATION").as_deref() == Ok("1") {
        config.registration_policy = RegistrationPolicy::SelfService;
    }

    config
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Load configuration
    let config = load_config();

    // Create and start the registry runtime
    let runtime = RegistryRuntime::new(config).context("Failed to bootstrap registry")?;
    runtime.start().await;

    // Keep the registry running
    info!("Registry is running. Press Ctrl+C to stop.");
    tokio::signal::ctrl_c().await?;

    // Graceful shutdown
    runtime.shutdown().await;

    Ok(())
}
