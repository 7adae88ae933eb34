//! Domain layer: the engine aggregate and the allocation policy seam.

pub mod engine;
pub mod policy;

pub use engine::{CarbonCapEngine, EngineConfig};
pub use policy::{AllocationPolicy, AllocationRequest, PolicyDenial, UncappedAllocation, VerifiedEmissionsCap};
