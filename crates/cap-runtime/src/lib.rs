//! # CarbonCap Registry Runtime
//!
//! Hosts the engine behind a single async read/write lock: `submit` takes
//! the write side (the single logical writer), queries take the read side
//! and observe the last committed snapshot.
//!
//! ## Modular Structure
//!
//! - `container/` - Runtime configuration
//! - `bootstrap/` - Engine assembly with a fixed Regulator identity
//! - `adapters/`  - In-process settlement and persistence implementations

pub mod adapters;
pub mod bootstrap;
pub mod container;

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;

use cap_05_engine::CarbonCapEngine;
use shared_types::{
    Address, Amount, EmissionRecord, OperationOutcome, OperationRequest, Transfer,
};

use crate::adapters::{DevSettlement, InMemoryOpStore};
use crate::bootstrap::{BootstrapError, RegistryBootstrap};
use crate::container::RuntimeConfig;

/// The registry runtime orchestrating the engine and its adapters.
pub struct RegistryRuntime {
    engine: Arc<RwLock<CarbonCapEngine>>,
}

impl RegistryRuntime {
    /// Create a runtime with the development adapters.
    pub fn new(config: RuntimeConfig) -> Result<Self, BootstrapError> {
        let regulator = config.regulator;
        let engine = RegistryBootstrap::new(config).build(
            Arc::new(DevSettlement::new(regulator)),
            Arc::new(InMemoryOpStore::new()),
        )?;
        Ok(Self {
            engine: Arc::new(RwLock::new(engine)),
        })
    }

    /// Create a runtime around an already-assembled engine.
    pub fn with_engine(engine: CarbonCapEngine) -> Self {
        Self {
            engine: Arc::new(RwLock::new(engine)),
        }
    }

    /// Start the runtime.
    pub async fn start(&self) {
        let engine = self.engine.read().await;
        info!("===========================================");
        info!("  CarbonCap Registry Runtime v0.1.0");
        info!("  Regulator: {:?}", &engine.regulator()[..4]);
        info!("===========================================");
        info!("Registry initialized and accepting operations");
    }

    /// Submit one operation. Serialized with every other write.
    pub async fn submit(&self, request: OperationRequest) -> OperationOutcome {
        let mut engine = self.engine.write().await;
        engine.submit(request).await
    }

    /// Shared handle to the engine, for embedding callers.
    pub fn engine(&self) -> Arc<RwLock<CarbonCapEngine>> {
        Arc::clone(&self.engine)
    }

    // Read-only queries against the last committed snapshot.

    pub async fn fee(&self) -> Option<Amount> {
        self.engine.read().await.fee()
    }

    pub async fn balance_of(&self, address: &Address) -> Amount {
        self.engine.read().await.balance_of(address)
    }

    pub async fn is_registered(&self, address: &Address) -> bool {
        self.engine.read().await.is_registered(address)
    }

    pub async fn is_certified(&self, address: &Address) -> bool {
        self.engine.read().await.is_certified(address)
    }

    pub async fn list_emissions(&self, factory: &Address) -> Vec<EmissionRecord> {
        self.engine.read().await.list_emissions(factory).to_vec()
    }

    pub async fn transfers(&self) -> Vec<Transfer> {
        self.engine.read().await.transfers().to_vec()
    }

    /// Shutdown the runtime gracefully.
    pub async fn shutdown(&self) {
        info!("Registry runtime shutting down");
    }
}
