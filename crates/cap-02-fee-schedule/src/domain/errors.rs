//! Fee schedule error types.

/// Fee schedule error type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FeeError {
    /// Fee amounts must be strictly positive.
    InvalidAmount { amount: u64 },

    /// No fee has been set yet; payment operations cannot proceed.
    FeeNotSet,
}

impl std::fmt::Display for FeeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidAmount { amount } => {
                write!(f, "Invalid fee amount: {} (must be > 0)", amount)
            }
            Self::FeeNotSet => write!(f, "Registration fee has not been set"),
        }
    }
}

impl std::error::Error for FeeError {}
