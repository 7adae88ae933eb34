//! # CarbonCap Engine Subsystem
//!
//! ## Purpose
//!
//! Composes the identity registry, fee schedule, emissions ledger, and
//! credit ledger into the single authority that validates and applies
//! every state transition, and exposes the operation API consumed by
//! presentation layers.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | INVARIANT-1 | Validation failures reject before any mutation | `domain/engine.rs` - per-operation guards |
//! | INVARIANT-2 | Ledger mutation never visible before settlement resolves | `domain/engine.rs` - reserve/settle/commit |
//! | INVARIANT-3 | Settlement timeout is a definitive failure | `domain/engine.rs` - `settle()` |
//! | INVARIANT-4 | Replayed committed op ids never re-execute | `domain/engine.rs` - `replay_check()` |
//! | INVARIANT-5 | Degraded accounts refuse writes until cleared | `domain/engine.rs` - degraded gate |
//!
//! ## Module Structure (Hexagonal Architecture)
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  ports/outbound.rs - SettlementProvider, PersistenceBackend,    │
//! │                      TimeSource traits                          │
//! └─────────────────────────────────────────────────────────────────┘
//!                          ↑ uses ↑
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  domain/engine.rs - CarbonCapEngine orchestration               │
//! │  domain/policy.rs - AllocationPolicy seam                       │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

pub mod domain;
pub mod ports;

pub use domain::*;
pub use ports::*;
