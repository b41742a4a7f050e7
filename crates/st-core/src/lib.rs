//! st-core: shared foundation for the steam-table workspace.
//!
//! Contains:
//! - units (uom SI types + constructors in IF97 working units)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{StError, StResult};
pub use numeric::*;
pub use units::*;
