//! Ports for the engine.
//!
//! The engine is the driving side of every component crate; its own
//! dependencies on the outside world are the outbound ports defined here.

pub mod outbound;

pub use outbound::*;
