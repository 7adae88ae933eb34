//! # Core Domain Entities
//!
//! Defines the registry entities shared across components.
//!
//! ## Clusters
//!
//! - **Identity**: `Role`, `AccountRecord`
//! - **Emissions**: `EmissionRecord`
//! - **Credits & Value**: `Transfer`, `FeeEntry`
//! - **Operations**: `OpId`

use serde::{Deserialize, Serialize};

/// A 20-byte Ethereum-style address.
///
/// All account fields use [u8; 20]; the zero address is never a valid
/// participant.
pub type Address = [u8; 20];

/// Unix timestamp in milliseconds.
pub type Timestamp = u64;

/// An amount of credits or settlement value, in base units.
pub type Amount = u64;

/// The zero address. Rejected as a participant everywhere.
pub const ZERO_ADDRESS: Address = [0u8; 20];

/// Caller-supplied idempotency key for value-moving operations.
///
/// Opaque to the engine: equality is the only operation ever performed on
/// it. Callers are expected to mint UUIDs but any unique string works.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OpId(pub String);

impl OpId {
    /// Wraps a caller-supplied key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The raw key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OpId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// CLUSTER A: IDENTITY
// =============================================================================

/// Participant role. Closed set; checked by exhaustive matching.
///
/// Exactly one account holds `Regulator`, fixed at bootstrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Role {
    /// Sole authority: sets fees, certifies organizations, verifies
    /// emissions, allocates credits.
    Regulator,
    /// Registered emitter. Records emissions, holds and sells credits.
    Factory,
    /// Credit buyer. Must be certified before any balance movement.
    Organization,
    /// No role assigned yet.
    #[default]
    Unregistered,
}

/// An account known to the identity registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRecord {
    /// The account address (unique key).
    pub address: Address,
    /// Assigned role.
    pub role: Role,
    /// True once the registration fee has been paid (or the account was
    /// activated at bootstrap).
    pub registered: bool,
    /// Certification status. Meaningful only for `Role::Organization`.
    pub certified: bool,
}

impl AccountRecord {
    /// A fresh record with the given role, not yet active.
    pub fn new(address: Address, role: Role) -> Self {
        Self {
            address,
            role,
            registered: false,
            certified: false,
        }
    }
}

// =============================================================================
// CLUSTER B: EMISSIONS
// =============================================================================

/// A single emissions report from a factory.
///
/// Immutable once `verified` transitions to true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmissionRecord {
    /// The reporting factory.
    pub factory: Address,
    /// Per-factory sequence number, monotonic from 1. Gaps are never
    /// reused.
    pub sequence_id: u64,
    /// Gas label, e.g. "CO2" (MTCO2e figures in practice).
    pub gas_type: String,
    /// Reported quantity. Always > 0.
    pub quantity: Amount,
    /// When the record was created.
    pub timestamp: Timestamp,
    /// Verification state. false -> true exactly once.
    pub verified: bool,
    /// The regulator that verified this record, once verified.
    pub verified_by: Option<Address>,
    /// When the record was verified, once verified.
    pub verified_at: Option<Timestamp>,
}

// =============================================================================
// CLUSTER C: CREDITS & VALUE
// =============================================================================

/// Append-only audit record of a committed credit movement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    /// Debited account.
    pub from: Address,
    /// Credited account.
    pub to: Address,
    /// Credits moved.
    pub amount: Amount,
    /// Commit time.
    pub timestamp: Timestamp,
    /// The operation that produced this transfer.
    pub op_id: OpId,
}

/// One entry in the registration-fee audit trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeEntry {
    /// The fee value, in base units. Always > 0.
    pub amount: Amount,
    /// The regulator that set it.
    pub set_by: Address,
    /// When it was set.
    pub set_at: Timestamp,
}
