//! Forward property model trait and its IF97 implementation.

use crate::error::ForwardResult;
use crate::limits::DomainLimits;
use crate::state::SteamState;
use crate::{region1, region2, region3, region5, saturation};

/// Forward (temperature/pressure → state) property model.
///
/// This is the contract backward solvers depend on: per-region evaluators, the
/// saturation line, the region 2/3 boundary and the domain constants. Inputs are in
/// IF97 working units (MPa, K, m³/kg).
///
/// Implementations must be thread-safe (Send + Sync) so one model can back solvers
/// running on several threads.
pub trait ForwardModel: Send + Sync {
    /// Get the model name (for debugging/logging).
    fn name(&self) -> &str;

    /// Domain constants used for region classification.
    fn limits(&self) -> &DomainLimits;

    fn region1(&self, p: f64, t: f64) -> ForwardResult<SteamState>;

    fn region2(&self, p: f64, t: f64) -> ForwardResult<SteamState>;

    /// Region 3 state at pressure, temperature and specific volume.
    ///
    /// The third argument is specific volume [m³/kg], not density.
    fn region3(&self, p: f64, t: f64, v: f64) -> ForwardResult<SteamState>;

    fn region5(&self, p: f64, t: f64) -> ForwardResult<SteamState>;

    /// Saturation temperature [K] at pressure [MPa].
    fn saturation_temperature(&self, p: f64) -> ForwardResult<f64>;

    /// Region 2/3 boundary temperature [K] at pressure [MPa].
    fn b23_temperature(&self, p: f64) -> ForwardResult<f64>;
}

/// IAPWS-IF97 forward equations.
#[derive(Debug, Clone, Default)]
pub struct If97Forward {
    limits: DomainLimits,
}

impl If97Forward {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use non-default domain constants (e.g. a narrower validity window).
    pub fn with_limits(limits: DomainLimits) -> Self {
        Self { limits }
    }
}

impl ForwardModel for If97Forward {
    fn name(&self) -> &str {
        "IAPWS-IF97"
    }

    fn limits(&self) -> &DomainLimits {
        &self.limits
    }

    fn region1(&self, p: f64, t: f64) -> ForwardResult<SteamState> {
        region1::state(p, t)
    }

    fn region2(&self, p: f64, t: f64) -> ForwardResult<SteamState> {
        region2::state(p, t)
    }

    fn region3(&self, p: f64, t: f64, v: f64) -> ForwardResult<SteamState> {
        region3::state(p, t, v)
    }

    fn region5(&self, p: f64, t: f64) -> ForwardResult<SteamState> {
        region5::state(p, t)
    }

    fn saturation_temperature(&self, p: f64) -> ForwardResult<f64> {
        saturation::saturation_temperature(p)
    }

    fn b23_temperature(&self, p: f64) -> ForwardResult<f64> {
        saturation::b23_temperature(p)
    }
}
