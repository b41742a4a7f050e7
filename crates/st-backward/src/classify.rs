//! Region classification for (p, h) inputs.
//!
//! Boundary enthalpies come from the forward model evaluated at the region limits
//! in [`DomainLimits`], so a model with narrower limits narrows the classifier too.

use st_forward::{ForwardModel, ForwardResult};
use tracing::trace;

use crate::region::PhRegion;

/// IF97 region containing (p [MPa], h [kJ/kg]).
///
/// Never fails: non-finite input, pairs outside every region and forward-model
/// errors while locating a boundary all give [`PhRegion::Invalid`].
pub fn classify(model: &dyn ForwardModel, p: f64, h: f64) -> PhRegion {
    if !p.is_finite() || !h.is_finite() {
        trace!(p, h, "non-finite input");
        return PhRegion::Invalid;
    }
    let region = match locate(model, p, h) {
        Ok(region) => region,
        Err(err) => {
            trace!(p, h, %err, "boundary evaluation failed");
            PhRegion::Invalid
        }
    };
    trace!(p, h, %region, "classified");
    region
}

fn locate(model: &dyn ForwardModel, p: f64, h: f64) -> ForwardResult<PhRegion> {
    let limits = model.limits();

    if !limits.contains_pressure(p) || h < model.region1(p, limits.min_temperature)?.h {
        return Ok(PhRegion::Invalid);
    }

    if p < limits.b23_min_pressure {
        let ts = model.saturation_temperature(p)?;
        if h <= model.region1(p, ts)?.h {
            return Ok(PhRegion::R1);
        }
        if h < limits.region2_fast_enthalpy {
            return Ok(PhRegion::R2);
        }
        if h <= model.region2(p, limits.region2_max_temperature)?.h {
            return Ok(PhRegion::R2);
        }
        if p < limits.region5_max_pressure && h < model.region5(p, limits.max_temperature)?.h {
            return Ok(PhRegion::R5);
        }
    } else {
        if h <= model.region1(p, limits.region3_min_temperature)?.h {
            return Ok(PhRegion::R1);
        }
        let t_b23 = model.b23_temperature(p)?;
        if h < model.region2(p, t_b23)?.h {
            return Ok(PhRegion::R3);
        }
        if h < model.region2(p, limits.region2_max_temperature)?.h {
            return Ok(PhRegion::R2);
        }
    }

    Ok(PhRegion::Invalid)
}
