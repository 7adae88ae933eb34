//! # Shared Types Crate
//!
//! This crate contains all domain entities, the operation envelope, and the
//! closed `ResultCode` set shared across components.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-component types are defined here.
//! - **Closed Role Set**: Roles are a closed enumeration checked by
//!   exhaustive matching; there is no string-typed role anywhere.
//! - **Closed Result Set**: Every operation resolves to exactly one
//!   `ResultCode`; no failure class is representable as an unchecked path.

pub mod entities;
pub mod errors;
pub mod operation;

pub use entities::*;
pub use errors::*;
pub use operation::*;
