//! Property relations shared by the Gibbs-based regions (1, 2 and 5).

use crate::error::{ForwardError, ForwardResult};
use crate::state::{Region, SteamState};
use crate::R_KJ_KG_K;

/// Dimensionless Gibbs free energy γ(π, τ) and its derivatives at one point.
///
/// For regions 2 and 5 the ideal-gas and residual parts are already summed.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct GibbsDerivatives {
    pub pi: f64,
    pub tau: f64,
    pub g: f64,
    pub g_pi: f64,
    pub g_pipi: f64,
    pub g_tau: f64,
    pub g_tautau: f64,
    pub g_pitau: f64,
}

impl GibbsDerivatives {
    pub(crate) fn into_state(self, region: Region, p: f64, t: f64) -> ForwardResult<SteamState> {
        let Self {
            pi,
            tau,
            g,
            g_pi,
            g_pipi,
            g_tau,
            g_tautau,
            g_pitau,
        } = self;

        let rt = R_KJ_KG_K * t;
        let v = rt * pi * g_pi / p / 1000.0;
        let h = rt * tau * g_tau;
        let u = rt * (tau * g_tau - pi * g_pi);
        let s = R_KJ_KG_K * (tau * g_tau - g);
        let cp = -R_KJ_KG_K * tau * tau * g_tautau;

        let coupling = g_pi - tau * g_pitau;
        let cv = R_KJ_KG_K * (-tau * tau * g_tautau + coupling * coupling / g_pipi);
        let w2 = 1000.0 * rt * g_pi * g_pi
            / (coupling * coupling / (tau * tau * g_tautau) - g_pipi);

        if !v.is_finite() || v <= 0.0 {
            return Err(ForwardError::NonPhysical {
                what: "specific volume",
            });
        }
        if !w2.is_finite() || w2 < 0.0 {
            return Err(ForwardError::NonPhysical {
                what: "speed of sound",
            });
        }
        if !(h.is_finite() && u.is_finite() && s.is_finite() && cp.is_finite() && cv.is_finite())
        {
            return Err(ForwardError::NonPhysical {
                what: "caloric property",
            });
        }

        Ok(SteamState {
            region,
            p,
            t,
            v,
            h,
            u,
            s,
            cp,
            cv,
            w: w2.sqrt(),
        })
    }
}
