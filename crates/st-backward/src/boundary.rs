//! Boundary curves between backward subregions.

use crate::poly::ScalarPoly;

/// Quadratic p(h) fit of the 2b/2c boundary (isentrope s = 5.85 kJ/(kg·K)).
static B2BC: ScalarPoly = ScalarPoly {
    coeffs: &[905.84278514723, -0.67955786399241, 1.2809002730136e-4],
};

/// Cubic h(p) fit of the 3a/3b boundary (near-critical isentrope).
static B3AB: ScalarPoly = ScalarPoly {
    coeffs: &[
        2014.64004206875,
        3.74696550136983,
        -0.0219921901054187,
        8.7513168600995e-5,
    ],
};

const B2BC_N3: f64 = 1.2809002730136e-4;
const B2BC_N4: f64 = 2652.6571908428;
const B2BC_N5: f64 = 4.5257578905948;

/// Pressure [MPa] on the 2b/2c boundary at enthalpy [kJ/kg].
pub fn b2bc_pressure(h: f64) -> f64 {
    B2BC.eval(h)
}

/// Enthalpy [kJ/kg] on the 2b/2c boundary at pressure [MPa].
///
/// Separate fit, not an algebraic inverse of [`b2bc_pressure`]. `None` below the
/// vertex of the parabola (≈4.526 MPa), where the boundary does not exist.
pub fn b2bc_enthalpy(p: f64) -> Option<f64> {
    let arg = (p - B2BC_N5) / B2BC_N3;
    (arg >= 0.0).then(|| B2BC_N4 + arg.sqrt())
}

/// Enthalpy [kJ/kg] on the 3a/3b boundary at pressure [MPa].
pub fn b3ab_enthalpy(p: f64) -> f64 {
    B3AB.eval(p)
}

#[cfg(test)]
mod tests {
    use super::*;
    use st_core::{Tolerances, nearly_equal};

    const TOL: Tolerances = Tolerances::relative(1e-9);

    #[test]
    fn b2bc_verification_values() {
        assert!(nearly_equal(b2bc_pressure(3516.004323), 100.0, TOL));
        let h = b2bc_enthalpy(100.0).unwrap();
        assert!(nearly_equal(h, 3516.004323, TOL), "h = {h}");
    }

    #[test]
    fn b2bc_directions_agree() {
        for p in [6.5, 10.0, 25.0, 60.0] {
            let h = b2bc_enthalpy(p).unwrap();
            let back = b2bc_pressure(h);
            assert!((back - p).abs() < 1e-6, "p = {p}, back = {back}");
        }
    }

    #[test]
    fn b2bc_enthalpy_below_vertex() {
        assert!(b2bc_enthalpy(4.0).is_none());
        assert!(b2bc_enthalpy(f64::NAN).is_none());
    }

    #[test]
    fn b3ab_verification_value() {
        assert!(nearly_equal(b3ab_enthalpy(25.0), 2095.936454, TOL));
    }
}
