//! Saturation pressure from enthalpy, p_sat(h).
//!
//! Valid along the saturation line between the triple point and the critical point
//! for the enthalpy range of region 3 (roughly 1670 to 2563 kJ/kg). Standalone: the
//! classifier does not use it.

use crate::poly::{PolyTable, Term, term};

static PSAT_TERMS: [Term; 14] = [
    term(0, 0, 0.600073641753024),
    term(1, 1, -9.36203654849857),
    term(1, 3, 2.46590798594147e1),
    term(1, 4, -1.07014222858224e2),
    term(1, 36, -9.15821315805768e13),
    term(5, 3, -8.62332011700662e3),
    term(7, 0, -2.35837344740032e1),
    term(8, 24, 2.52304969384128e17),
    term(14, 16, -3.89718771997719e18),
    term(20, 16, -3.33775713645296e22),
    term(22, 3, 3.56499469636328e10),
    term(24, 18, -1.48547544720641e26),
    term(28, 8, 3.30611514838798e18),
    term(36, 24, 8.13641294467829e37),
];

/// η = h/2600 kJ/kg, bases (η − 1.02, η − 0.608), result scaled by 22 MPa.
///
/// Both bases are built from η, so only `eval_reduced(η, η)` is meaningful here;
/// `p_star` holds the enthalpy scale to keep `x = h / p_star` consistent.
pub(crate) static PSAT_H: PolyTable = PolyTable {
    terms: &PSAT_TERMS,
    p_star: 2600.0,
    h_star: 2600.0,
    x0: 1.02,
    y0: 0.608,
    out_star: 22.0,
};

/// Saturation pressure [MPa] at specific enthalpy [kJ/kg].
pub fn psat_from_enthalpy(h: f64) -> f64 {
    let eta = h / PSAT_H.h_star;
    PSAT_H.eval_reduced(eta, eta)
}
