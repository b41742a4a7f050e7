//! st-backward: IAPWS-IF97 backward equations in (pressure, enthalpy).
//!
//! Given p [MPa] and h [kJ/kg], find the IF97 region, compute T (and v in region
//! 3) from the closed-form backward fits, then evaluate the forward model at the
//! result for the full state. No iteration is involved.
//!
//! Provides:
//! - `classify`: region of a (p, h) pair
//! - `region1`, `region2`, `region3`: per-region backward equations and solvers
//! - `boundary`: 2b/2c and 3a/3b boundary curves
//! - `saturation`: p_sat(h)
//! - `solve` / `try_solve` / `PhSolver`: classify and dispatch
//!
//! # Example
//!
//! ```no_run
//! use st_backward::PhSolver;
//!
//! let solver = PhSolver::new();
//! if let Some(state) = solver.solve(3.0, 500.0) {
//!     println!("T = {} K", state.t);
//! }
//! ```

pub mod boundary;
pub mod classify;
pub mod error;
pub mod poly;
pub mod region;
pub mod region1;
pub mod region2;
pub mod region3;
pub mod saturation;
pub mod solver;

// Re-exports for ergonomics
pub use boundary::{b2bc_enthalpy, b2bc_pressure, b3ab_enthalpy};
pub use classify::classify;
pub use error::{PhError, PhResult};
pub use poly::{PolyTable, ScalarPoly, Term};
pub use region::{PhRegion, Region2Subregion, Region3Subregion};
pub use saturation::psat_from_enthalpy;
pub use solver::{PhSolver, solve, try_solve};
