//! Outbound (Driven) ports for the engine.
//!
//! These traits define the external collaborators the engine needs:
//! the settlement provider that moves payment value, the durable store
//! that makes idempotency survive restarts, and the clock.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use shared_types::{
    Address, Amount, OpId, OperationOutcome, PersistenceError, SettlementError, Timestamp,
};

/// Result of an executed settlement transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementReceipt {
    /// Whether the provider confirmed the transfer.
    pub success: bool,
    /// Provider-side reference for the transfer.
    pub reference: String,
}

/// External settlement collaborator.
///
/// Authenticates callers and executes the payment leg of value-moving
/// operations. A call may block for an unbounded, caller-visible duration;
/// the engine bounds it with its configured deadline.
#[async_trait]
pub trait SettlementProvider: Send + Sync {
    /// The provider's own identity (the connected signer address).
    fn identity(&self) -> Address;

    /// Moves `amount` of settlement value from `from` to `to`.
    ///
    /// `op_id` is passed through so the provider can deduplicate on its
    /// side as well; the engine never relies on that.
    async fn transfer(
        &self,
        from: Address,
        to: Address,
        amount: Amount,
        op_id: &OpId,
    ) -> Result<SettlementReceipt, SettlementError>;
}

/// Durable status of a value-moving operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OpStatus {
    /// Reservation placed, settlement not yet resolved.
    InFlight,
    /// Settlement confirmed and ledger mutation applied.
    Committed,
    /// Settlement failed; reservation rolled back.
    RolledBack,
}

/// Durable record of a value-moving operation, keyed by op id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationRecord {
    /// The idempotency key.
    pub op_id: OpId,
    /// Current status.
    pub status: OpStatus,
    /// The outcome returned to the caller, present once resolved.
    pub outcome: Option<OperationOutcome>,
}

/// Durable keyed storage for operation records.
///
/// `store_op` has compare-and-set semantics on the record's previous
/// status, which is what makes opId-keyed idempotency enforceable under
/// concurrent retries.
pub trait PersistenceBackend: Send + Sync {
    /// Reads the record for an op id, if any.
    fn fetch_op(&self, op_id: &OpId) -> Result<Option<OperationRecord>, PersistenceError>;

    /// Writes `record` atomically, provided the currently stored status
    /// equals `expected` (`None` = no record yet).
    ///
    /// # Errors
    /// - `Conflict` when the stored status does not match `expected`
    fn store_op(
        &self,
        record: OperationRecord,
        expected: Option<OpStatus>,
    ) -> Result<(), PersistenceError>;
}

/// Time source for consistent timestamp handling.
///
/// Abstracted to allow testing with deterministic time.
pub trait TimeSource: Send + Sync {
    /// Returns the current timestamp in milliseconds.
    fn now(&self) -> Timestamp;
}

/// Default system time source.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> Timestamp {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as Timestamp
    }
}

/// Mock time source for testing.
#[cfg(test)]
pub struct MockTimeSource {
    time: std::sync::atomic::AtomicU64,
}

#[cfg(test)]
impl MockTimeSource {
    pub fn new(initial: Timestamp) -> Self {
        Self {
            time: std::sync::atomic::AtomicU64::new(initial),
        }
    }

    pub fn advance(&self, ms: u64) {
        self.time.fetch_add(ms, std::sync::atomic::Ordering::SeqCst);
    }
}

#[cfg(test)]
impl TimeSource for MockTimeSource {
    fn now(&self) -> Timestamp {
        self.time.load(std::sync::atomic::Ordering::SeqCst)
    }
}
