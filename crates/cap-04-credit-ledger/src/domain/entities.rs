//! Credit ledger entities.

use serde::{Deserialize, Serialize};

use shared_types::{Address, Amount, OpId, Timestamp};

/// An amount debited from its source and held pending settlement.
///
/// Exists only between `reserve` and the matching `commit`/`rollback`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    /// The operation this hold belongs to.
    pub op_id: OpId,
    /// Debited account.
    pub from: Address,
    /// Account to credit on commit.
    pub to: Address,
    /// Held amount.
    pub amount: Amount,
    /// When the hold was placed.
    pub created_at: Timestamp,
}
