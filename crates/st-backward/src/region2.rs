//! Region 2 (superheated vapour) backward equations T(p, h).
//!
//! Region 2 is split into three subregions, each with its own fit:
//! 2a below 4 MPa, and 2b/2c on either side of the [`b2bc_pressure`] boundary.

use st_forward::{DomainLimits, ForwardModel, SteamState};

use crate::boundary::b2bc_pressure;
use crate::error::{PhError, PhResult};
use crate::poly::{PolyTable, Term, term};
use crate::region::Region2Subregion;

static T_2A_TERMS: [Term; 34] = [
    term(0, 0, 1089.8952318288),
    term(0, 1, 849.51654495535),
    term(0, 2, -107.81748091826),
    term(0, 3, 33.153654801263),
    term(0, 7, -7.4232016790248),
    term(0, 20, 11.765048724356),
    term(1, 0, 1.844574935579),
    term(1, 1, -4.1792700549624),
    term(1, 2, 6.2478196935812),
    term(1, 3, -17.344563108114),
    term(1, 7, -200.58176862096),
    term(1, 9, 271.96065473796),
    term(1, 11, -455.11318285818),
    term(1, 18, 3091.9688604755),
    term(1, 44, 252266.40357872),
    term(2, 0, -0.0061707422868339),
    term(2, 2, -0.31078046629583),
    term(2, 7, 11.670873077107),
    term(2, 36, 128127984.04046),
    term(2, 38, -985549096.23276),
    term(2, 40, 2822454697.3002),
    term(2, 42, -3594897141.0703),
    term(2, 44, 1722734991.3197),
    term(3, 24, -13551.334240775),
    term(3, 44, 12848734.66465),
    term(4, 12, 1.3865724283226),
    term(4, 32, 235988.32556514),
    term(4, 44, -13105236.545054),
    term(5, 32, 7399.9835474766),
    term(5, 36, -551966.9703006),
    term(5, 42, 3715408.5996233),
    term(6, 34, 19127.7292396),
    term(6, 44, -415351.64835634),
    term(7, 28, -62.459855192507),
];

static T_2B_TERMS: [Term; 38] = [
    term(0, 0, 1489.5041079516),
    term(0, 1, 743.07798314034),
    term(0, 2, -97.708318797837),
    term(0, 12, 2.4742464705674),
    term(0, 18, -0.63281320016026),
    term(0, 24, 1.1385952129658),
    term(0, 28, -0.47811863648625),
    term(0, 40, 0.0085208123431544),
    term(1, 0, 0.93747147377932),
    term(1, 2, 3.3593118604916),
    term(1, 6, 3.3809355601454),
    term(1, 12, 0.16844539671904),
    term(1, 18, 0.73875745236695),
    term(1, 24, -0.47128737436186),
    term(1, 28, 0.15020273139707),
    term(1, 40, -0.002176411421975),
    term(2, 2, -0.021810755324761),
    term(2, 8, -0.10829784403677),
    term(2, 18, -0.046333324635812),
    term(2, 40, 0.000071280351959551),
    term(3, 1, 0.00011032831789999),
    term(3, 2, 0.00018955248387902),
    term(3, 12, 0.0030891541160537),
    term(3, 24, 0.0013555504554949),
    term(4, 2, 2.8640237477456e-7),
    term(4, 12, -0.000010779857357512),
    term(4, 18, -0.000076462712454814),
    term(4, 24, 0.000014052392818316),
    term(4, 28, -0.000031083814331434),
    term(4, 40, -1.0302738212103e-6),
    term(5, 18, 2.821728163504e-7),
    term(5, 24, 1.2704902271945e-6),
    term(5, 40, 7.3803353468292e-8),
    term(6, 28, -1.1030139238909e-8),
    term(7, 2, -8.1456365207833e-14),
    term(7, 28, -2.5180545682962e-11),
    term(9, 1, -1.7565233969407e-18),
    term(9, 40, 8.6934156344163e-15),
];

static T_2C_TERMS: [Term; 23] = [
    term(-7, 0, -3236839855524.2),
    term(-7, 4, 7326335090218.1),
    term(-6, 0, 358250899454.47),
    term(-6, 2, -583401318515.9),
    term(-5, 0, -10783068217.47),
    term(-5, 2, 20825544563.171),
    term(-2, 0, 610747.83564516),
    term(-2, 1, 859777.2253558),
    term(-1, 0, -25745.72360417),
    term(-1, 2, 31081.088422714),
    term(0, 0, 1208.2315865936),
    term(0, 1, 482.19755109255),
    term(1, 4, 3.7966001272486),
    term(1, 8, -10.842984880077),
    term(2, 4, -0.04536417267666),
    term(6, 0, 1.4559115658698e-13),
    term(6, 1, 1.126159740723e-12),
    term(6, 4, -1.7804982240686e-11),
    term(6, 10, 1.2324579690832e-7),
    term(6, 12, -1.1606921130984e-6),
    term(6, 16, 0.000027846367088554),
    term(6, 20, -0.00059270038474176),
    term(6, 22, 0.0012918582991878),
];

/// Subregion 2a: π = p/1 MPa, η = h/2000 kJ/kg, bases (π, η − 2.1).
pub static T_PH_2A: PolyTable = PolyTable {
    terms: &T_2A_TERMS,
    p_star: 1.0,
    h_star: 2000.0,
    x0: 0.0,
    y0: 2.1,
    out_star: 1.0,
};

/// Subregion 2b: bases (π − 2, η − 2.6).
pub static T_PH_2B: PolyTable = PolyTable {
    terms: &T_2B_TERMS,
    p_star: 1.0,
    h_star: 2000.0,
    x0: 2.0,
    y0: 2.6,
    out_star: 1.0,
};

/// Subregion 2c: bases (π + 25, η − 1.8).
pub static T_PH_2C: PolyTable = PolyTable {
    terms: &T_2C_TERMS,
    p_star: 1.0,
    h_star: 2000.0,
    x0: -25.0,
    y0: 1.8,
    out_star: 1.0,
};

/// Region 2 subregion containing (p, h).
pub fn subregion(limits: &DomainLimits, p: f64, h: f64) -> Region2Subregion {
    if p < limits.region2a_max_pressure {
        Region2Subregion::A
    } else if p < b2bc_pressure(h) {
        Region2Subregion::B
    } else {
        Region2Subregion::C
    }
}

/// Temperature [K] with an explicit subregion.
pub fn temperature_in(sub: Region2Subregion, p: f64, h: f64) -> f64 {
    let table = match sub {
        Region2Subregion::A => &T_PH_2A,
        Region2Subregion::B => &T_PH_2B,
        Region2Subregion::C => &T_PH_2C,
    };
    table.eval(p, h)
}

/// Temperature [K] from pressure [MPa] and enthalpy [kJ/kg].
pub fn temperature(limits: &DomainLimits, p: f64, h: f64) -> f64 {
    temperature_in(subregion(limits, p, h), p, h)
}

/// Slack [K] around the region 2 temperature band; larger than the worst
/// forward/backward inconsistency of the fits.
const BAND_MARGIN: f64 = 0.1;

/// Temperature [K] at (p, h), rejecting inputs the fits cannot represent.
///
/// The classifier tags the wet dome below the B23 pressure as region 2, where the
/// fits extrapolate to meaningless temperatures. Those inputs, and any result outside
/// the region 2 temperature band at `p`, give [`PhError::OutOfDomain`].
pub fn checked_temperature(model: &dyn ForwardModel, p: f64, h: f64) -> PhResult<f64> {
    let limits = model.limits();
    let t_low = if p < limits.b23_min_pressure {
        let ts = model.saturation_temperature(p)?;
        if h < model.region2(p, ts)?.h {
            return Err(PhError::OutOfDomain { p, h });
        }
        ts
    } else {
        model.b23_temperature(p)?
    };

    let t = temperature(limits, p, h);
    let band = (t_low - BAND_MARGIN)..=(limits.region2_max_temperature + BAND_MARGIN);
    if !band.contains(&t) {
        return Err(PhError::OutOfDomain { p, h });
    }
    Ok(t)
}

/// Full region 2 state at (p, h).
pub fn solve(model: &dyn ForwardModel, p: f64, h: f64) -> PhResult<SteamState> {
    let t = checked_temperature(model, p, h)?;
    Ok(model.region2(p, t)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use st_core::{Tolerances, nearly_equal};
    use st_forward::If97Forward;

    const TOL: Tolerances = Tolerances::relative(1e-8);

    fn check(sub: Region2Subregion, cases: [(f64, f64, f64); 3]) {
        let limits = DomainLimits::default();
        for (p, h, t) in cases {
            assert_eq!(subregion(&limits, p, h), sub, "p = {p}, h = {h}");
            let got = temperature(&limits, p, h);
            assert!(nearly_equal(got, t, TOL), "T({p}, {h}) = {got}, want {t}");
        }
    }

    #[test]
    fn verification_values_2a() {
        check(
            Region2Subregion::A,
            [
                (0.001, 3000.0, 534.433241),
                (3.0, 3000.0, 575.37337),
                (3.0, 4000.0, 1010.77577),
            ],
        );
    }

    #[test]
    fn verification_values_2b() {
        check(
            Region2Subregion::B,
            [
                (5.0, 3500.0, 801.299102),
                (5.0, 4000.0, 1015.31583),
                (25.0, 3500.0, 875.279054),
            ],
        );
    }

    #[test]
    fn verification_values_2c() {
        check(
            Region2Subregion::C,
            [
                (40.0, 2700.0, 743.056411),
                (60.0, 2700.0, 791.137067),
                (60.0, 3200.0, 882.75686),
            ],
        );
    }

    #[test]
    fn subregion_threshold_follows_limits() {
        let limits = DomainLimits {
            region2a_max_pressure: 2.0,
            ..DomainLimits::default()
        };
        assert_eq!(subregion(&limits, 3.0, 3000.0), Region2Subregion::B);
        assert_eq!(
            subregion(&DomainLimits::default(), 3.0, 3000.0),
            Region2Subregion::A
        );
    }

    #[test]
    fn wet_dome_is_out_of_domain() {
        let model = If97Forward::new();
        for (p, h) in [(1.0, 2000.0), (0.01, 1500.0), (10.0, 2000.0), (16.5, 2400.0)] {
            assert_eq!(
                solve(&model, p, h),
                Err(PhError::OutOfDomain { p, h }),
                "p = {p}, h = {h}"
            );
        }
    }

    #[test]
    fn saturated_vapour_is_accepted() {
        let model = If97Forward::new();
        for p in [0.001, 0.1, 1.0, 5.0, 16.5] {
            let ts = model.saturation_temperature(p).unwrap();
            let h = model.region2(p, ts).unwrap().h;
            let t = checked_temperature(&model, p, h).unwrap();
            assert!((t - ts).abs() < 0.025, "p = {p}: T = {t}, Tsat = {ts}");
        }
    }

    #[test]
    fn upper_temperature_edge_is_accepted() {
        let model = If97Forward::new();
        let t_max = model.limits().region2_max_temperature;
        for p in [0.01, 3.0, 30.0, 100.0] {
            let h = model.region2(p, t_max).unwrap().h;
            let t = checked_temperature(&model, p, h).unwrap();
            assert!((t - t_max).abs() < 0.025, "p = {p}: T = {t}");
        }
    }

    #[test]
    fn solve_delegates_to_forward_model() {
        let model = If97Forward::new();
        let state = solve(&model, 3.0, 3000.0).unwrap();
        assert!(nearly_equal(state.t, 575.37337, TOL));
        assert!((state.h - 3000.0).abs() < 0.1, "h = {}", state.h);
    }
}
