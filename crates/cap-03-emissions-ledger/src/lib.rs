//! # Emissions Ledger Component
//!
//! Per-factory append-only sequences of emission records and their
//! verification state.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | INVARIANT-1 | `quantity > 0` on every record | `domain/ledger.rs` - `record()` |
//! | INVARIANT-2 | Sequence ids monotonic per factory from 1, gaps never reused | `domain/ledger.rs` - dedicated counter |
//! | INVARIANT-3 | `verified` transitions false -> true exactly once | `domain/ledger.rs` - `verify()` |
//! | INVARIANT-4 | Records are immutable after verification | no mutating access path exists |
//!
//! Authorization (caller-must-be-factory, Regulator-only verification) is
//! enforced at the engine boundary; this crate owns the data invariants.

pub mod domain;

pub use domain::*;
