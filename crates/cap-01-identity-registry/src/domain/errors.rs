//! Identity registry error types.

use shared_types::{Address, Role};

/// Identity registry error type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegistryError {
    /// Caller lacks the role required for this transition.
    Unauthorized { caller: Address },

    /// Address already holds a different role.
    RoleConflict {
        address: Address,
        held: Role,
        requested: Role,
    },

    /// Organization is already certified.
    AlreadyCertified { address: Address },

    /// A Regulator cannot certify itself.
    SelfCertification,

    /// Account is already an active registrant.
    AlreadyRegistered { address: Address },

    /// No account record exists for this address.
    UnknownAccount { address: Address },

    /// The zero address is never a valid participant.
    InvalidAddress,
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unauthorized { caller } => {
                write!(f, "Unauthorized caller: {:?}", &caller[..4])
            }
            Self::RoleConflict {
                address,
                held,
                requested,
            } => {
                write!(
                    f,
                    "Address {:?} holds role {:?}, cannot register as {:?}",
                    &address[..4],
                    held,
                    requested
                )
            }
            Self::AlreadyCertified { address } => {
                write!(f, "Organization {:?} is already certified", &address[..4])
            }
            Self::SelfCertification => write!(f, "Regulator cannot certify itself"),
            Self::AlreadyRegistered { address } => {
                write!(f, "Account {:?} is already registered", &address[..4])
            }
            Self::UnknownAccount { address } => {
                write!(f, "No account record for {:?}", &address[..4])
            }
            Self::InvalidAddress => write!(f, "Zero address is not a valid participant"),
        }
    }
}

impl std::error::Error for RegistryError {}
