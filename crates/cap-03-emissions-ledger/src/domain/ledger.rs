//! # Emissions Ledger Aggregate
//!
//! Append-only per-factory record sequences. The sequence counter is kept
//! separately from the record vector so ids stay monotonic even if pruning
//! is ever added.

use std::collections::HashMap;

use shared_types::{Address, Amount, EmissionRecord, Timestamp};

use super::errors::EmissionsError;

/// Per-factory emission records and sequence counters.
#[derive(Debug, Default)]
pub struct EmissionsLedger {
    /// Records per factory, in insertion order.
    records: HashMap<Address, Vec<EmissionRecord>>,
    /// Last sequence id handed out per factory. Starts at 0; first record
    /// gets 1.
    last_sequence: HashMap<Address, u64>,
}

impl EmissionsLedger {
    /// An empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an unverified record and returns its sequence id.
    ///
    /// # Errors
    /// - `InvalidQuantity` when `quantity` is zero
    /// - `EmptyGasType` when the gas label is blank
    pub fn record(
        &mut self,
        factory: Address,
        gas_type: &str,
        quantity: Amount,
        timestamp: Timestamp,
    ) -> Result<u64, EmissionsError> {
        if quantity == 0 {
            return Err(EmissionsError::InvalidQuantity { quantity });
        }
        if gas_type.trim().is_empty() {
            return Err(EmissionsError::EmptyGasType);
        }

        let next = self.last_sequence.entry(factory).or_insert(0);
        *next += 1;
        let sequence_id = *next;

        self.records.entry(factory).or_default().push(EmissionRecord {
            factory,
            sequence_id,
            gas_type: gas_type.trim().to_string(),
            quantity,
            timestamp,
            verified: false,
            verified_by: None,
            verified_at: None,
        });

        Ok(sequence_id)
    }

    /// Verifies one record, stamping verifier and time.
    ///
    /// The transition is exactly-once; after it the record is immutable.
    ///
    /// # Errors
    /// - `RecordNotFound` when no such (factory, sequence id) exists
    /// - `AlreadyVerified` on a repeat verification
    pub fn verify(
        &mut self,
        verifier: Address,
        factory: Address,
        sequence_id: u64,
        verified_at: Timestamp,
    ) -> Result<(), EmissionsError> {
        let record = self
            .records
            .get_mut(&factory)
            .and_then(|records| {
                records
                    .iter_mut()
                    .find(|r| r.sequence_id == sequence_id)
            })
            .ok_or(EmissionsError::RecordNotFound {
                factory,
                sequence_id,
            })?;

        if record.verified {
            return Err(EmissionsError::AlreadyVerified {
                factory,
                sequence_id,
            });
        }

        record.verified = true;
        record.verified_by = Some(verifier);
        record.verified_at = Some(verified_at);
        Ok(())
    }

    /// The ordered, finite, restartable sequence of records for a factory.
    pub fn list(&self, factory: &Address) -> &[EmissionRecord] {
        self.records
            .get(factory)
            .map(|records| records.as_slice())
            .unwrap_or(&[])
    }

    /// Sum of verified quantities for a factory. Input to the allocation
    /// policy.
    pub fn verified_total(&self, factory: &Address) -> Amount {
        self.list(factory)
            .iter()
            .filter(|r| r.verified)
            .map(|r| r.quantity)
            .sum()
    }

    /// Total number of records for a factory.
    pub fn count(&self, factory: &Address) -> usize {
        self.list(factory).len()
    }
}
