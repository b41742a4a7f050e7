//! Orchestration: classify a (p, h) pair and dispatch to the region solver.

use st_forward::{DomainLimits, ForwardModel, If97Forward, SteamState};
use tracing::debug;

use crate::classify::classify;
use crate::error::{PhError, PhResult};
use crate::region::PhRegion;
use crate::{region1, region2, region3};

/// Full state at (p [MPa], h [kJ/kg]), with the reason when there is none.
pub fn try_solve(model: &dyn ForwardModel, p: f64, h: f64) -> PhResult<SteamState> {
    let region = classify(model, p, h);
    match region {
        PhRegion::R1 => region1::solve(model, p, h),
        PhRegion::R2 => region2::solve(model, p, h),
        PhRegion::R3 => region3::solve(model, p, h),
        PhRegion::R4 | PhRegion::R5 => Err(PhError::Unsupported { region }),
        PhRegion::Invalid => Err(PhError::OutOfDomain { p, h }),
    }
}

/// Full state at (p [MPa], h [kJ/kg]).
///
/// `None` when the pair is outside IF97 or falls in a region without a backward
/// equation (region 5).
pub fn solve(model: &dyn ForwardModel, p: f64, h: f64) -> Option<SteamState> {
    match try_solve(model, p, h) {
        Ok(state) => Some(state),
        Err(err) => {
            debug!(p, h, %err, "no backward solution");
            None
        }
    }
}

/// A forward model bundled with the backward equations.
///
/// Stateless apart from the model, so one solver can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct PhSolver<M = If97Forward> {
    model: M,
}

impl PhSolver<If97Forward> {
    pub fn new() -> Self {
        Self::default()
    }

    /// IF97 solver with non-default domain constants.
    pub fn with_limits(limits: DomainLimits) -> Self {
        Self::with_model(If97Forward::with_limits(limits))
    }
}

impl<M: ForwardModel> PhSolver<M> {
    pub fn with_model(model: M) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn limits(&self) -> &DomainLimits {
        self.model.limits()
    }

    pub fn classify(&self, p: f64, h: f64) -> PhRegion {
        classify(&self.model, p, h)
    }

    pub fn solve(&self, p: f64, h: f64) -> Option<SteamState> {
        solve(&self.model, p, h)
    }

    pub fn try_solve(&self, p: f64, h: f64) -> PhResult<SteamState> {
        try_solve(&self.model, p, h)
    }

    /// Backward temperature [K] without evaluating the forward model at the result.
    pub fn temperature(&self, p: f64, h: f64) -> PhResult<f64> {
        match self.classify(p, h) {
            PhRegion::R1 => Ok(region1::temperature(p, h)),
            PhRegion::R2 => region2::checked_temperature(&self.model, p, h),
            PhRegion::R3 => Ok(region3::temperature(p, h)),
            region @ (PhRegion::R4 | PhRegion::R5) => Err(PhError::Unsupported { region }),
            PhRegion::Invalid => Err(PhError::OutOfDomain { p, h }),
        }
    }
}
