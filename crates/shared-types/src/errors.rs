//! # Error Types
//!
//! Defines cross-cutting error types used by the engine's outbound ports.
//! Component-local validation errors live in their own crates.

use thiserror::Error;

/// Errors surfaced by the external settlement collaborator.
///
/// A timeout is a definitive failure: the engine rolls back and never
/// assumes success.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SettlementError {
    /// The provider executed the transfer and reported failure.
    #[error("Settlement rejected: {reason}")]
    Rejected { reason: String },

    /// The provider did not resolve within the configured deadline.
    #[error("Settlement timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    /// Transport or provider-internal failure.
    #[error("Settlement provider error: {0}")]
    Provider(String),
}

/// Errors surfaced by the durable operation store.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PersistenceError {
    /// Stored record failed integrity checks. Treated as fatal for the
    /// accounts the operation touches.
    #[error("Data corruption: unreadable operation record for {op_id}")]
    Corrupted { op_id: String },

    /// Compare-and-set lost: another writer holds this key.
    #[error("Write conflict on operation record {op_id}")]
    Conflict { op_id: String },

    /// Backend I/O failure.
    #[error("Persistence backend error: {0}")]
    Backend(String),
}
