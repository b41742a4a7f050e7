//! st-forward: IAPWS-IF97 forward property equations.
//!
//! Provides:
//! - `ForwardModel` trait: the contract backward solvers program against
//! - `If97Forward`: IF97 implementation of regions 1, 2, 3 and 5
//! - Saturation line and region 2/3 boundary (B23) equations
//! - `SteamState`: full thermodynamic state in IF97 working units
//! - `DomainLimits`: the validity bounds of the formulation
//!
//! # Units
//!
//! Everything is in IF97 working units: pressure in MPa, temperature in K,
//! specific enthalpy/internal energy in kJ/kg, entropy and heat capacities in
//! kJ/(kg·K), specific volume in m³/kg, speed of sound in m/s.
//!
//! # Example
//!
//! ```no_run
//! use st_forward::{ForwardModel, If97Forward};
//!
//! let model = If97Forward::new();
//! let state = model.region1(3.0, 300.0).unwrap();
//! println!("h = {} kJ/kg", state.h);
//! ```

pub mod error;
pub mod limits;
pub mod model;
pub mod region1;
pub mod region2;
pub mod region3;
pub mod region5;
pub mod saturation;
pub mod state;

mod gibbs;

/// Specific gas constant of water [kJ/(kg·K)].
pub const R_KJ_KG_K: f64 = 0.461_526;

// Re-exports for ergonomics
pub use error::{ForwardError, ForwardResult};
pub use limits::DomainLimits;
pub use model::{ForwardModel, If97Forward};
pub use saturation::{b23_pressure, b23_temperature, saturation_pressure, saturation_temperature};
pub use state::{Region, SteamState};
