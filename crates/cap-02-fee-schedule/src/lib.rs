//! # Fee Schedule Component
//!
//! Holds the Regulator-controlled registration fee. A single current value
//! with last-write-wins semantics, plus an append-only audit trail of every
//! change.
//!
//! Fee payment anywhere in the system requires the fee to have been set at
//! least once; an unset schedule rejects `current()`.

pub mod domain;

pub use domain::*;
