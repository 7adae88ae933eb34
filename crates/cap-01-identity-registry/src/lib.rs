//! # Identity Registry Component
//!
//! Maps an address to a role and its activation/certification status.
//! The registry is the authorization oracle every other component's guard
//! conditions are answered from.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | INVARIANT-1 | Exactly one Regulator, fixed at bootstrap | `domain/registry.rs` - `bootstrap()` / `register()` |
//! | INVARIANT-2 | Registration is idempotent per (address, role) | `domain/registry.rs` - `register()` |
//! | INVARIANT-3 | Certification transitions false -> true once | `domain/registry.rs` - `certify()` |
//! | INVARIANT-4 | A Regulator cannot certify itself | `domain/registry.rs` - `certify()` |
//!
//! ## Registration Policy
//!
//! Whether a factory may register itself or needs the Regulator's
//! co-signature is configurable. The default is the stricter
//! Regulator-gated policy.

pub mod domain;

pub use domain::*;
