//! Credit ledger error types.

use shared_types::{Address, OpId};

/// Credit ledger error type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CreditError {
    /// Amounts must be strictly positive.
    InvalidAmount { amount: u64 },

    /// Source balance cannot cover the requested amount.
    InsufficientBalance {
        address: Address,
        required: u64,
        available: u64,
    },

    /// A live reservation already exists for this op id.
    ReservationExists { op_id: OpId },

    /// No live reservation for this op id.
    ReservationNotFound { op_id: OpId },

    /// Balance arithmetic would overflow.
    Overflow { address: Address },
}

impl std::fmt::Display for CreditError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidAmount { amount } => {
                write!(f, "Invalid credit amount: {} (must be > 0)", amount)
            }
            Self::InsufficientBalance {
                address,
                required,
                available,
            } => {
                write!(
                    f,
                    "Insufficient balance for {:?}: required {}, available {}",
                    &address[..4],
                    required,
                    available
                )
            }
            Self::ReservationExists { op_id } => {
                write!(f, "Reservation already live for op {}", op_id)
            }
            Self::ReservationNotFound { op_id } => {
                write!(f, "No live reservation for op {}", op_id)
            }
            Self::Overflow { address } => {
                write!(f, "Balance overflow for {:?}", &address[..4])
            }
        }
    }
}

impl std::error::Error for CreditError {}
