//! # Registry Bootstrap
//!
//! Assembles the engine from configuration. The Regulator identity is fixed
//! here, once, for the lifetime of the process.

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use cap_05_engine::domain::policy::{AllocationPolicy, UncappedAllocation};
use cap_05_engine::ports::outbound::{PersistenceBackend, SettlementProvider, SystemTimeSource};
use cap_05_engine::{CarbonCapEngine, EngineConfig};

use crate::container::RuntimeConfig;

/// Bootstrap errors.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// Invalid runtime configuration.
    #[error("Invalid runtime configuration: {0}")]
    InvalidConfig(#[from] crate::container::ConfigError),
}

/// Builds a ready engine from configuration and the chosen adapters.
pub struct RegistryBootstrap {
    config: RuntimeConfig,
    allocation: Arc<dyn AllocationPolicy>,
}

impl RegistryBootstrap {
    pub fn new(config: RuntimeConfig) -> Self {
        Self {
            config,
            allocation: Arc::new(UncappedAllocation),
        }
    }

    /// Swap in a non-default allocation policy.
    pub fn with_allocation_policy(mut self, policy: Arc<dyn AllocationPolicy>) -> Self {
        self.allocation = policy;
        self
    }

    /// Validates configuration and assembles the engine.
    pub fn build(
        self,
        settlement: Arc<dyn SettlementProvider>,
        persistence: Arc<dyn PersistenceBackend>,
    ) -> Result<CarbonCapEngine, BootstrapError> {
        self.config.validate()?;

        info!(
            regulator = ?&self.config.regulator[..4],
            timeout_ms = self.config.settlement_timeout.as_millis() as u64,
            policy = ?self.config.registration_policy,
            "Bootstrapping registry"
        );

        Ok(CarbonCapEngine::bootstrap(
            self.config.regulator,
            EngineConfig {
                settlement_timeout: self.config.settlement_timeout,
                registration_policy: self.config.registration_policy,
            },
            self.allocation,
            settlement,
            persistence,
            Arc::new(SystemTimeSource),
        ))
    }
}
