//! Emissions ledger error types.

use shared_types::Address;

/// Emissions ledger error type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EmissionsError {
    /// Reported quantity must be strictly positive.
    InvalidQuantity { quantity: u64 },

    /// A record needs a gas label.
    EmptyGasType,

    /// No record with this sequence id exists for the factory.
    RecordNotFound {
        factory: Address,
        sequence_id: u64,
    },

    /// The record was already verified; re-verification is rejected.
    AlreadyVerified {
        factory: Address,
        sequence_id: u64,
    },
}

impl std::fmt::Display for EmissionsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidQuantity { quantity } => {
                write!(f, "Invalid emission quantity: {} (must be > 0)", quantity)
            }
            Self::EmptyGasType => write!(f, "Emission record requires a gas label"),
            Self::RecordNotFound {
                factory,
                sequence_id,
            } => {
                write!(
                    f,
                    "No emission record {} for factory {:?}",
                    sequence_id,
                    &factory[..4]
                )
            }
            Self::AlreadyVerified {
                factory,
                sequence_id,
            } => {
                write!(
                    f,
                    "Emission record {} for factory {:?} already verified",
                    sequence_id,
                    &factory[..4]
                )
            }
        }
    }
}

impl std::error::Error for EmissionsError {}
