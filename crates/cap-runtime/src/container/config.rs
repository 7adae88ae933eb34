//! # Runtime Configuration
//!
//! Unified configuration for the registry runtime.
//!
//! ## Security Requirements
//!
//! - `regulator` MUST NOT be the zero address; there is no default
//!   authority identity
//! - All timeouts have sane defaults with override capability

use std::time::Duration;

use cap_01_identity_registry::RegistrationPolicy;
use shared_types::{Address, ZERO_ADDRESS};

/// Complete runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// The bootstrap Regulator identity.
    pub regulator: Address,
    /// Deadline for one settlement call.
    pub settlement_timeout: Duration,
    /// Factory registration gating.
    pub registration_policy: RegistrationPolicy,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            regulator: ZERO_ADDRESS,
            settlement_timeout: Duration::from_secs(30),
            registration_policy: RegistrationPolicy::default(),
        }
    }
}

impl RuntimeConfig {
    /// Validate configuration before boot.
    ///
    /// # Returns
    ///
    /// Returns `Err` if:
    /// - The Regulator identity is the zero address
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.regulator == ZERO_ADDRESS {
            return Err(ConfigError::MissingRegulator);
        }
        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug)]
pub enum ConfigError {
    /// Regulator identity is not set (zero address).
    MissingRegulator,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::MissingRegulator => {
                write!(
                    f,
                    "Regulator identity is the zero address. \
                     Set CAP_REGULATOR_ADDR (40 hex chars) or provide in config."
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}
