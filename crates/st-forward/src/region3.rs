//! Region 3: near-critical states, expressed through the Helmholtz free energy
//! φ(δ, τ) with density and temperature as independent variables.

use crate::R_KJ_KG_K;
use crate::error::{ForwardError, ForwardResult, check_positive};
use crate::state::{Region, SteamState};

const RHO_STAR: f64 = 322.0;
const T_STAR: f64 = 647.096;

/// Coefficient of the `n1 ln δ` term.
const N1: f64 = 1.065_807_002_851_3;

/// (I, J, n) of the polynomial part, terms 2..=40.
const COEFFS: [(i32, i32, f64); 39] = [
    (0, 0, -15.732_845_290_239),
    (0, 1, 20.944_396_974_307),
    (0, 2, -7.686_770_787_871_6),
    (0, 7, 2.618_594_778_795_4),
    (0, 10, -2.808_078_114_862),
    (0, 12, 1.205_336_969_651_7),
    (0, 23, -8.456_681_281_250_2e-3),
    (1, 2, -1.265_431_547_771_4),
    (1, 6, -1.152_440_780_668_1),
    (1, 15, 0.885_210_439_843_18),
    (1, 17, -0.642_077_651_816_07),
    (2, 0, 0.384_934_601_866_71),
    (2, 2, -0.852_147_088_242_06),
    (2, 6, 4.897_228_154_187_7),
    (2, 7, -3.050_261_725_696_5),
    (2, 22, 0.039_420_536_879_154),
    (2, 26, 0.125_584_084_243_08),
    (3, 0, -0.279_993_296_987_1),
    (3, 2, 1.389_979_956_946),
    (3, 4, -2.018_991_502_357),
    (3, 16, -8.214_763_717_396_3e-3),
    (3, 26, -0.475_960_357_349_23),
    (4, 0, 0.043_984_074_473_5),
    (4, 2, -0.444_764_354_287_39),
    (4, 4, 0.905_720_707_197_33),
    (4, 26, 0.705_224_500_879_67),
    (5, 1, 0.107_705_126_263_32),
    (5, 3, -0.329_136_232_589_54),
    (5, 26, -0.508_710_620_411_58),
    (6, 0, -0.022_175_400_873_096),
    (6, 2, 0.094_260_751_665_092),
    (6, 26, 0.164_362_784_479_61),
    (7, 2, -0.013_503_372_241_348),
    (8, 26, -0.014_834_345_352_472),
    (9, 2, 5.792_295_362_808_4e-4),
    (9, 26, 3.230_890_470_371_1e-3),
    (10, 0, 8.096_480_299_621_5e-5),
    (10, 1, -1.655_767_979_503_7e-4),
    (11, 26, -4.492_389_906_181_5e-5),
];

#[derive(Debug, Clone, Copy, Default)]
struct HelmholtzDerivatives {
    delta: f64,
    tau: f64,
    phi: f64,
    phi_d: f64,
    phi_dd: f64,
    phi_t: f64,
    phi_tt: f64,
    phi_dt: f64,
}

fn derivatives(rho: f64, t: f64) -> HelmholtzDerivatives {
    let delta = rho / RHO_STAR;
    let tau = T_STAR / t;

    let mut d = HelmholtzDerivatives {
        delta,
        tau,
        phi: N1 * delta.ln(),
        phi_d: N1 / delta,
        phi_dd: -N1 / (delta * delta),
        ..Default::default()
    };
    for &(i, j, n) in &COEFFS {
        let fi = f64::from(i);
        let fj = f64::from(j);
        d.phi += n * delta.powi(i) * tau.powi(j);
        d.phi_d += n * fi * delta.powi(i - 1) * tau.powi(j);
        d.phi_dd += n * fi * (fi - 1.0) * delta.powi(i - 2) * tau.powi(j);
        d.phi_t += n * delta.powi(i) * fj * tau.powi(j - 1);
        d.phi_tt += n * delta.powi(i) * fj * (fj - 1.0) * tau.powi(j - 2);
        d.phi_dt += n * fi * delta.powi(i - 1) * fj * tau.powi(j - 1);
    }
    d
}

/// Pressure [MPa] from density [kg/m³] and temperature [K].
pub fn pressure(rho: f64, t: f64) -> ForwardResult<f64> {
    check_positive(rho, "density")?;
    check_positive(t, "temperature")?;
    let d = derivatives(rho, t);
    Ok(rho * R_KJ_KG_K * t * d.delta * d.phi_d / 1000.0)
}

/// Full state from density [kg/m³] and temperature [K]; pressure is computed.
pub fn state_from_density(rho: f64, t: f64) -> ForwardResult<SteamState> {
    check_positive(rho, "density")?;
    check_positive(t, "temperature")?;

    let HelmholtzDerivatives {
        delta,
        tau,
        phi,
        phi_d,
        phi_dd,
        phi_t,
        phi_tt,
        phi_dt,
    } = derivatives(rho, t);

    let rt = R_KJ_KG_K * t;
    let p = rho * rt * delta * phi_d / 1000.0;
    let u = rt * tau * phi_t;
    let h = rt * (tau * phi_t + delta * phi_d);
    let s = R_KJ_KG_K * (tau * phi_t - phi);
    let cv = -R_KJ_KG_K * tau * tau * phi_tt;

    let coupling = delta * phi_d - delta * tau * phi_dt;
    let compress = 2.0 * delta * phi_d + delta * delta * phi_dd;
    let cp = R_KJ_KG_K * (-tau * tau * phi_tt + coupling * coupling / compress);
    let w2 = 1000.0 * rt * (compress - coupling * coupling / (tau * tau * phi_tt));

    if !p.is_finite() || p <= 0.0 {
        return Err(ForwardError::NonPhysical { what: "pressure" });
    }
    if !w2.is_finite() || w2 < 0.0 {
        return Err(ForwardError::NonPhysical {
            what: "speed of sound",
        });
    }
    if !(h.is_finite() && u.is_finite() && s.is_finite() && cp.is_finite() && cv.is_finite()) {
        return Err(ForwardError::NonPhysical {
            what: "caloric property",
        });
    }

    Ok(SteamState {
        region: Region::R3,
        p,
        t,
        v: 1.0 / rho,
        h,
        u,
        s,
        cp,
        cv,
        w: w2.sqrt(),
    })
}

/// Full state at a known pressure [MPa], temperature [K] and specific volume [m³/kg].
///
/// The caller's pressure is kept on the returned state; the Helmholtz equation is
/// evaluated at ρ = 1/v.
pub fn state(p: f64, t: f64, v: f64) -> ForwardResult<SteamState> {
    check_positive(p, "pressure")?;
    check_positive(v, "specific volume")?;
    let mut st = state_from_density(1.0 / v, t)?;
    st.p = p;
    Ok(st)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_rel_close(actual: f64, expected: f64, rel: f64) {
        let err = ((actual - expected) / expected).abs();
        assert!(
            err <= rel,
            "actual={actual}, expected={expected}, rel_err={err}, rel_tol={rel}"
        );
    }

    #[test]
    fn verification_table() {
        let t = [650.0, 650.0, 750.0];
        let rho = [500.0, 200.0, 500.0];
        let p = [25.583_701_8, 22.293_064_3, 78.309_563_9];
        let h = [1_863.430_19, 2_375.124_01, 2_258.688_45];
        let u = [1_812.262_79, 2_263.658_68, 2_102.069_32];
        let s = [4.054_272_73, 4.854_387_92, 4.469_719_06];
        let cp = [13.893_571_7, 44.657_934_2, 6.341_653_59];
        let w = [502.005_554, 383.444_594, 760.696_041];

        for i in 0..3 {
            let st = state_from_density(rho[i], t[i]).unwrap();
            assert_rel_close(st.p, p[i], 1e-8);
            assert_rel_close(st.h, h[i], 1e-8);
            assert_rel_close(st.u, u[i], 1e-8);
            assert_rel_close(st.s, s[i], 1e-8);
            assert_rel_close(st.cp, cp[i], 1e-7);
            assert_rel_close(st.w, w[i], 1e-7);
        }
    }

    #[test]
    fn state_keeps_caller_pressure() {
        let st = state(25.5, 650.0, 1.0 / 500.0).unwrap();
        assert_eq!(st.p, 25.5);
        assert!((st.rho() - 500.0).abs() < 1e-9);
        assert!((st.h - 1_863.430_19).abs() < 1e-4);
    }

    #[test]
    fn pressure_matches_state() {
        let p = pressure(500.0, 650.0).unwrap();
        assert_rel_close(p, 25.583_701_8, 1e-8);
    }

    #[test]
    fn rejects_zero_volume() {
        assert!(state(25.0, 650.0, 0.0).is_err());
    }
}
