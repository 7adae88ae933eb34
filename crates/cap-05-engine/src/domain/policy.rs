//! # Allocation Policy Seam
//!
//! No observed behavior defines how verified emissions volume maps to the
//! credit allotment a factory may receive. Rather than inventing a formula,
//! allocation passes through an injectable policy; the default admits any
//! positive amount and the cap relationship stays an explicit, swappable
//! decision.

use shared_types::{Address, Amount};

/// Everything a policy may consider for one allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocationRequest {
    /// The factory being credited.
    pub factory: Address,
    /// The amount the Regulator wants to allocate.
    pub requested: Amount,
    /// Sum of the factory's verified emission quantities.
    pub verified_emissions: Amount,
    /// The factory's current credit balance.
    pub current_balance: Amount,
}

/// A policy's reason for refusing an allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyDenial {
    pub reason: String,
}

impl std::fmt::Display for PolicyDenial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Allocation denied: {}", self.reason)
    }
}

/// Decides whether a Regulator-requested allocation may proceed.
pub trait AllocationPolicy: Send + Sync {
    fn authorize(&self, request: &AllocationRequest) -> Result<(), PolicyDenial>;
}

/// Default policy: any positive amount is allowed.
///
/// Deliberately uncapped; swapping in a real cap formula is a
/// configuration change, not a code change.
#[derive(Debug, Clone, Copy, Default)]
pub struct UncappedAllocation;

impl AllocationPolicy for UncappedAllocation {
    fn authorize(&self, _request: &AllocationRequest) -> Result<(), PolicyDenial> {
        Ok(())
    }
}

/// Example cap policy: balance plus allocation may not exceed the
/// factory's verified emissions volume.
#[derive(Debug, Clone, Copy, Default)]
pub struct VerifiedEmissionsCap;

impl AllocationPolicy for VerifiedEmissionsCap {
    fn authorize(&self, request: &AllocationRequest) -> Result<(), PolicyDenial> {
        let after = request
            .current_balance
            .saturating_add(request.requested);
        if after > request.verified_emissions {
            return Err(PolicyDenial {
                reason: format!(
                    "allocation would raise balance to {} against {} verified",
                    after, request.verified_emissions
                ),
            });
        }
        Ok(())
    }
}
