//! Region 1 (compressed liquid) backward equation T(p, h).

use st_forward::{ForwardModel, SteamState};

use crate::error::PhResult;
use crate::poly::{PolyTable, Term, term};

static T_TERMS: [Term; 20] = [
    term(0, 0, -238.72489924521),
    term(0, 1, 404.21188637945),
    term(0, 2, 113.49746881718),
    term(0, 6, -5.8457616048039),
    term(0, 22, -0.0001528548241314),
    term(0, 32, -1.0866707695377e-6),
    term(1, 0, -13.391744872602),
    term(1, 1, 43.211039183559),
    term(1, 2, -54.010067170506),
    term(1, 3, 30.535892203916),
    term(1, 4, -6.5964749423638),
    term(1, 10, 0.0093965400878363),
    term(1, 32, 1.157364750534e-7),
    term(2, 10, -0.000025858641282073),
    term(2, 32, -4.0644363084799e-9),
    term(3, 10, 6.6456186191635e-8),
    term(3, 32, 8.0670734103027e-11),
    term(4, 32, -9.3477771213947e-13),
    term(5, 32, 5.8265442020601e-15),
    term(6, 32, -1.5020185953503e-17),
];

/// T(p, h): π = p/1 MPa, η = h/2500 kJ/kg, T* = 1 K.
pub static T_PH: PolyTable = PolyTable {
    terms: &T_TERMS,
    p_star: 1.0,
    h_star: 2500.0,
    x0: 0.0,
    y0: -1.0,
    out_star: 1.0,
};

/// Temperature [K] from pressure [MPa] and enthalpy [kJ/kg].
pub fn temperature(p: f64, h: f64) -> f64 {
    T_PH.eval(p, h)
}

/// Full region 1 state at (p, h).
pub fn solve(model: &dyn ForwardModel, p: f64, h: f64) -> PhResult<SteamState> {
    Ok(model.region1(p, temperature(p, h))?)
}
