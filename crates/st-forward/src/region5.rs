//! Region 5: high-temperature vapour, 1073.15 K < T ≤ 2273.15 K.

use crate::error::{ForwardResult, check_positive};
use crate::gibbs::GibbsDerivatives;
use crate::state::{Region, SteamState};

const T_STAR: f64 = 1000.0;

const IDEAL: [(i32, f64); 6] = [
    (0, -13.179_983_674_201),
    (1, 6.854_084_163_443_4),
    (-3, -0.024_805_148_933_466),
    (-2, 0.369_015_349_803_33),
    (-1, -3.116_131_821_392_5),
    (2, -0.329_616_265_389_17),
];

const RESIDUAL: [(i32, i32, f64); 5] = [
    (1, 0, -1.256_318_358_959_2e-4),
    (1, 1, 2.177_467_871_457_1e-3),
    (1, 3, -0.004_594_282_089_991),
    (2, 9, -3.972_482_835_956_9e-6),
    (3, 3, 1.291_922_828_978_4e-7),
];

fn derivatives(p: f64, t: f64) -> GibbsDerivatives {
    let pi = p;
    let tau = T_STAR / t;

    let mut d = GibbsDerivatives {
        pi,
        tau,
        g: pi.ln(),
        g_pi: 1.0 / pi,
        g_pipi: -1.0 / (pi * pi),
        ..Default::default()
    };
    for &(j, n) in &IDEAL {
        let fj = f64::from(j);
        d.g += n * tau.powi(j);
        d.g_tau += n * fj * tau.powi(j - 1);
        d.g_tautau += n * fj * (fj - 1.0) * tau.powi(j - 2);
    }
    for &(i, j, n) in &RESIDUAL {
        let fi = f64::from(i);
        let fj = f64::from(j);
        d.g += n * pi.powi(i) * tau.powi(j);
        d.g_pi += n * fi * pi.powi(i - 1) * tau.powi(j);
        d.g_pipi += n * fi * (fi - 1.0) * pi.powi(i - 2) * tau.powi(j);
        d.g_tau += n * pi.powi(i) * fj * tau.powi(j - 1);
        d.g_tautau += n * pi.powi(i) * fj * (fj - 1.0) * tau.powi(j - 2);
        d.g_pitau += n * fi * pi.powi(i - 1) * fj * tau.powi(j - 1);
    }
    d
}

/// Full state from pressure [MPa] and temperature [K].
pub fn state(p: f64, t: f64) -> ForwardResult<SteamState> {
    check_positive(p, "pressure")?;
    check_positive(t, "temperature")?;
    derivatives(p, t).into_state(Region::R5, p, t)
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
        let t = [1500.0, 1500.0, 2000.0];
        let p = [0.5, 8.0, 8.0];
        let v = [1.384_553_54, 0.086_515_661_6, 0.115_743_146];
        let h = [5_219.763_32, 5_206.096_34, 6_583.802_91];
        let u = [4_527.486_54, 4_513.971_05, 5_657.857_74];
        let s = [9.654_084_31, 8.365_467_24, 9.156_710_44];
        let cp = [2.616_102_28, 2.644_538_66, 2.853_067_5];
        let w = [917.071_933, 919.708_859, 1_054.358_06];

        for i in 0..3 {
            let st = state(p[i], t[i]).unwrap();
            assert_eq!(st.region, Region::R5);
            assert_rel_close(st.v, v[i], 1e-8);
            assert_rel_close(st.h, h[i], 1e-8);
            assert_rel_close(st.u, u[i], 1e-8);
            assert_rel_close(st.s, s[i], 1e-8);
            assert_rel_close(st.cp, cp[i], 1e-8);
            assert_rel_close(st.w, w[i], 1e-7);
        }
    }
}
