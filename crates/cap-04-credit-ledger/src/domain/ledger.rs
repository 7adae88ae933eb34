//! # Credit Ledger - Balances and Two-Phase Holds
//!
//! All mutation goes through `credit`, `reserve`, `commit`, `rollback`.
//! Validation happens before any write; a rejected call leaves balances,
//! holds, and the transfer log untouched.

use std::collections::HashMap;

use shared_types::{Address, Amount, OpId, Timestamp, Transfer};

use super::entities::Reservation;
use super::errors::CreditError;

/// Per-account balances, live holds, and the append-only transfer log.
///
/// INVARIANTS:
/// - INVARIANT-1: No balance ever goes negative
/// - INVARIANT-2: At most one live reservation per op id
/// - INVARIANT-3: `total_supply` is invariant under reserve/commit/rollback
#[derive(Debug, Default)]
pub struct CreditLedger {
    /// Available balances. Absent key means zero.
    balances: HashMap<Address, Amount>,
    /// Live holds keyed by op id.
    reservations: HashMap<OpId, Reservation>,
    /// Committed credit movements, append-only.
    transfers: Vec<Transfer>,
}

impl CreditLedger {
    /// An empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Available balance for an account. Implicitly zero before first use.
    pub fn balance_of(&self, address: &Address) -> Amount {
        self.balances.get(address).copied().unwrap_or(0)
    }

    /// Amount currently held for an op id, if a hold is live.
    pub fn held_for(&self, op_id: &OpId) -> Option<&Reservation> {
        self.reservations.get(op_id)
    }

    /// Sum of all available balances plus all live holds.
    ///
    /// Conserved by reserve/commit/rollback; changed only by `credit`.
    pub fn total_supply(&self) -> Amount {
        let available: Amount = self.balances.values().sum();
        let held: Amount = self.reservations.values().map(|r| r.amount).sum();
        available + held
    }

    /// The append-only log of committed transfers.
    pub fn transfers(&self) -> &[Transfer] {
        &self.transfers
    }

    /// Mints `amount` credits to an account (allocation path).
    ///
    /// # Errors
    /// - `InvalidAmount` when `amount` is zero
    /// - `Overflow` when the balance cannot absorb the increment
    pub fn credit(&mut self, account: Address, amount: Amount) -> Result<(), CreditError> {
        if amount == 0 {
            return Err(CreditError::InvalidAmount { amount });
        }
        let balance = self.balances.entry(account).or_insert(0);
        *balance = balance
            .checked_add(amount)
            .ok_or(CreditError::Overflow { address: account })?;
        Ok(())
    }

    /// Phase 1: debit `from` and hold `amount` pending settlement.
    ///
    /// The recipient is NOT credited here; that happens only in `commit`.
    ///
    /// # Errors
    /// - `InvalidAmount` when `amount` is zero
    /// - `ReservationExists` when a hold is already live for `op_id`
    /// - `InsufficientBalance` when `from` cannot cover `amount`
    pub fn reserve(
        &mut self,
        op_id: OpId,
        from: Address,
        to: Address,
        amount: Amount,
        created_at: Timestamp,
    ) -> Result<(), CreditError> {
        if amount == 0 {
            return Err(CreditError::InvalidAmount { amount });
        }
        if self.reservations.contains_key(&op_id) {
            return Err(CreditError::ReservationExists { op_id });
        }

        let available = self.balance_of(&from);
        if available < amount {
            return Err(CreditError::InsufficientBalance {
                address: from,
                required: amount,
                available,
            });
        }

        self.balances.insert(from, available - amount);
        self.reservations.insert(
            op_id.clone(),
            Reservation {
                op_id,
                from,
                to,
                amount,
                created_at,
            },
        );
        Ok(())
    }

    /// Phase 2a: settlement confirmed. Credit the recipient and append the
    /// transfer record.
    ///
    /// # Errors
    /// - `ReservationNotFound` when no hold is live for `op_id`
    /// - `Overflow` when the recipient balance cannot absorb the amount
    ///   (the hold stays live so the engine can roll it back)
    pub fn commit(
        &mut self,
        op_id: &OpId,
        committed_at: Timestamp,
    ) -> Result<Transfer, CreditError> {
        let reservation =
            self.reservations
                .get(op_id)
                .cloned()
                .ok_or(CreditError::ReservationNotFound {
                    op_id: op_id.clone(),
                })?;

        let recipient = self.balances.entry(reservation.to).or_insert(0);
        *recipient = recipient.checked_add(reservation.amount).ok_or(
            CreditError::Overflow {
                address: reservation.to,
            },
        )?;

        self.reservations.remove(op_id);
        let transfer = Transfer {
            from: reservation.from,
            to: reservation.to,
            amount: reservation.amount,
            timestamp: committed_at,
            op_id: op_id.clone(),
        };
        self.transfers.push(transfer.clone());
        Ok(transfer)
    }

    /// Phase 2b: settlement failed or timed out. Restore the source balance
    /// unchanged.
    ///
    /// # Errors
    /// - `ReservationNotFound` when no hold is live for `op_id`
    pub fn rollback(&mut self, op_id: &OpId) -> Result<(), CreditError> {
        let reservation =
            self.reservations
                .remove(op_id)
                .ok_or(CreditError::ReservationNotFound {
                    op_id: op_id.clone(),
                })?;

        let balance = self.balances.entry(reservation.from).or_insert(0);
        // Cannot overflow: the hold was carved out of this same balance.
        *balance += reservation.amount;
        Ok(())
    }
}
