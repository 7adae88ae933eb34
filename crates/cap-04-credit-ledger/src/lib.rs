//! # Credit Ledger Component
//!
//! Per-account credit balances and the two-phase protocol that keeps them
//! consistent with external settlement. Credits are NEVER moved to the
//! recipient when reserved; the movement completes ONLY upon settlement
//! confirmation from the engine.
//!
//! ```text
//! [BALANCE] ──reserve──→ [HELD] ──commit──→ [RECIPIENT + Transfer record]
//!                          │
//!                          └── settlement failure/timeout ──→ [BALANCE]
//! ```
//!
//! | Stage | Method | Effect |
//! |-------|--------|--------|
//! | Reserve | `ledger.reserve()` | Debit source, hold amount, NOT credited |
//! | Commit | `ledger.commit()` | Credit recipient, append Transfer |
//! | Rollback | `ledger.rollback()` | Restore source balance unchanged |
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | INVARIANT-1 | Balances never negative | `domain/ledger.rs` - `reserve()` balance check |
//! | INVARIANT-2 | One live reservation per op id | `domain/ledger.rs` - `reserve()` key check |
//! | INVARIANT-3 | Credits conserved under reserve/commit/rollback | held amount accounting |
//! | INVARIANT-4 | Transfer log append-only | no mutating access path exists |

pub mod domain;

pub use domain::*;
