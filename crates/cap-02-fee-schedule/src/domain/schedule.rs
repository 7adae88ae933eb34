//! # Fee Schedule Aggregate
//!
//! Last-write-wins current fee plus the full change history. Role gating
//! happens at the engine boundary; this aggregate enforces the data
//! invariants (`amount > 0`, fee-set-before-payment).

use shared_types::{Address, Amount, FeeEntry, Timestamp};

use super::errors::FeeError;

/// The current registration fee and its audit trail.
#[derive(Debug, Default)]
pub struct FeeSchedule {
    /// Every fee ever set, in order. The last entry is the current fee.
    history: Vec<FeeEntry>,
}

impl FeeSchedule {
    /// A schedule with no fee set yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites the current fee. Last write wins.
    ///
    /// # Errors
    /// - `InvalidAmount` when `amount` is zero
    pub fn set_fee(
        &mut self,
        set_by: Address,
        amount: Amount,
        set_at: Timestamp,
    ) -> Result<(), FeeError> {
        if amount == 0 {
            return Err(FeeError::InvalidAmount { amount });
        }
        self.history.push(FeeEntry {
            amount,
            set_by,
            set_at,
        });
        Ok(())
    }

    /// The current fee.
    ///
    /// # Errors
    /// - `FeeNotSet` when no fee has ever been set
    pub fn current(&self) -> Result<Amount, FeeError> {
        self.history
            .last()
            .map(|entry| entry.amount)
            .ok_or(FeeError::FeeNotSet)
    }

    /// True once a fee has been set at least once.
    pub fn is_set(&self) -> bool {
        !self.history.is_empty()
    }

    /// The ordered audit trail of fee changes.
    pub fn history(&self) -> &[FeeEntry] {
        &self.history
    }
}
