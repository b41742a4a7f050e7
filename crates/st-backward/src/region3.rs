//! Region 3 (near-critical) backward equations T(p, h) and v(p, h).
//!
//! Subregions 3a and 3b are separated by [`b3ab_enthalpy`]. Each has one table for
//! temperature and one for specific volume.

use st_forward::{ForwardModel, SteamState};

use crate::boundary::b3ab_enthalpy;
use crate::error::PhResult;
use crate::poly::{PolyTable, Term, term};
use crate::region::Region3Subregion;

static T_3A_TERMS: [Term; 31] = [
    term(-12, 0, -1.33645667811215e-7),
    term(-12, 1, 4.55912656802978e-6),
    term(-12, 2, -1.46294640700979e-5),
    term(-12, 6, 0.0063934131297008),
    term(-12, 14, 372.783927268847),
    term(-12, 16, -7186.54377460447),
    term(-12, 20, 573494.7521034),
    term(-12, 22, -2675693.29111439),
    term(-10, 1, -3.34066283302614e-5),
    term(-10, 5, -0.0245479214069597),
    term(-10, 12, 47.8087847764996),
    term(-8, 0, 7.64664131818904e-6),
    term(-8, 2, 0.00128350627676972),
    term(-8, 4, 0.0171219081377331),
    term(-8, 10, -8.51007304583213),
    term(-5, 2, -0.0136513461629781),
    term(-3, 0, -3.84460997596657e-6),
    term(-2, 1, 0.00337423807911655),
    term(-2, 3, -0.551624873066791),
    term(-2, 4, 0.72920227710747),
    term(-1, 0, -0.00992522757376041),
    term(-1, 2, -0.119308831407288),
    term(0, 0, 0.793929190615421),
    term(0, 1, 0.454270731799386),
    term(1, 1, 0.20999859125991),
    term(3, 0, -0.00642109823904738),
    term(3, 1, -0.023515586860454),
    term(4, 0, 0.00252233108341612),
    term(4, 3, -0.00764885133368119),
    term(10, 4, 0.0136176427574291),
    term(12, 5, -0.0133027883575669),
];

static V_3A_TERMS: [Term; 32] = [
    term(-12, 6, 0.00529944062966028),
    term(-12, 8, -0.170099690234461),
    term(-12, 12, 11.1323814312927),
    term(-12, 18, -2178.98123145125),
    term(-10, 4, -0.000506061827980875),
    term(-10, 7, 0.556495239685324),
    term(-10, 10, -9.43672726094016),
    term(-8, 5, -0.297856807561527),
    term(-8, 12, 93.9353943717186),
    term(-6, 3, 0.0192944939465981),
    term(-6, 4, 0.421740664704763),
    term(-6, 22, -3689141.2628233),
    term(-4, 2, -0.00737566847600639),
    term(-4, 3, -0.354753242424366),
    term(-3, 7, -1.99768169338727),
    term(-2, 3, 1.15456297059049),
    term(-2, 16, 5683.6687581596),
    term(-1, 0, 0.00808169540124668),
    term(-1, 1, 0.172416341519307),
    term(-1, 2, 1.04270175292927),
    term(-1, 3, -0.297691372792847),
    term(0, 0, 0.560394465163593),
    term(0, 1, 0.275234661176914),
    term(1, 0, -0.148347894866012),
    term(1, 1, -0.0651142513478515),
    term(1, 2, -2.92468715386302),
    term(2, 0, 0.0664876096952665),
    term(2, 2, 3.52335014263844),
    term(3, 0, -0.0146340792313332),
    term(4, 2, -2.24503486668184),
    term(5, 2, 1.10533464706142),
    term(8, 2, -0.0408757344495612),
];

static T_3B_TERMS: [Term; 33] = [
    term(-12, 0, 0.000032325457364492),
    term(-12, 1, -0.000127575556587181),
    term(-10, 0, -0.000475851877356068),
    term(-10, 1, 0.00156183014181602),
    term(-10, 5, 0.105724860113781),
    term(-10, 10, -85.8514221132534),
    term(-10, 12, 724.140095480911),
    term(-8, 0, 0.00296475810273257),
    term(-8, 1, -0.00592721983365988),
    term(-8, 2, -0.0126305422818666),
    term(-8, 4, -0.115716196364853),
    term(-8, 10, 84.9000969739595),
    term(-6, 0, -0.0108602260086615),
    term(-6, 1, 0.0154304475328851),
    term(-6, 2, 0.0750455441524466),
    term(-4, 0, 0.0252520973612982),
    term(-4, 1, -0.0602507901232996),
    term(-3, 5, -3.07622221350501),
    term(-2, 0, -0.0574011959864879),
    term(-2, 4, 5.03471360939849),
    term(-1, 2, -0.925081888584834),
    term(-1, 4, 3.91733882917546),
    term(-1, 6, -77.314600713019),
    term(-1, 10, 9493.08762098587),
    term(-1, 14, -1410437.19679409),
    term(-1, 16, 8491662.30819026),
    term(0, 0, 0.861095729446704),
    term(0, 2, 0.32334644281172),
    term(1, 1, 0.873281936020439),
    term(3, 1, -0.436653048526683),
    term(5, 1, 0.286596714529479),
    term(6, 1, -0.131778331276228),
    term(8, 1, 0.00676682064330275),
];

static V_3B_TERMS: [Term; 30] = [
    term(-12, 0, -2.25196934336318e-09),
    term(-12, 1, 1.40674363313486e-08),
    term(-8, 0, 2.3378408528056e-06),
    term(-8, 1, -3.31833715229001e-05),
    term(-8, 3, 0.00107956778514318),
    term(-8, 6, -0.271382067378863),
    term(-8, 7, 1.07202262490333),
    term(-8, 8, -0.853821329075382),
    term(-6, 0, -2.15214194340526e-05),
    term(-6, 1, 0.00076965608822273),
    term(-6, 2, -0.00431136580433864),
    term(-6, 5, 0.453342167309331),
    term(-6, 6, -0.507749535873652),
    term(-6, 10, -100.475154528389),
    term(-4, 3, -0.219201924648793),
    term(-4, 6, -3.21087965668917),
    term(-4, 10, 607.567815637771),
    term(-3, 0, 0.000557686450685932),
    term(-3, 2, 0.18749904002955),
    term(-2, 1, 0.00905368030448107),
    term(-2, 2, 0.285417173048685),
    term(-1, 0, 0.0329924030996098),
    term(-1, 1, 0.239897419685483),
    term(-1, 4, 4.82754995951394),
    term(-1, 5, -11.8035753702231),
    term(0, 0, 0.169490044091791),
    term(1, 0, -0.0179967222507787),
    term(1, 1, 0.0371810116332674),
    term(2, 2, -0.0536288335065096),
    term(2, 6, 1.6069710109252),
];

pub static T_PH_3A: PolyTable = PolyTable {
    terms: &T_3A_TERMS,
    p_star: 100.0,
    h_star: 2300.0,
    x0: -0.240,
    y0: 0.615,
    out_star: 760.0,
};

pub static V_PH_3A: PolyTable = PolyTable {
    terms: &V_3A_TERMS,
    p_star: 100.0,
    h_star: 2100.0,
    x0: -0.128,
    y0: 0.727,
    out_star: 0.0028,
};

pub static T_PH_3B: PolyTable = PolyTable {
    terms: &T_3B_TERMS,
    p_star: 100.0,
    h_star: 2800.0,
    x0: -0.298,
    y0: 0.720,
    out_star: 860.0,
};

pub static V_PH_3B: PolyTable = PolyTable {
    terms: &V_3B_TERMS,
    p_star: 100.0,
    h_star: 2800.0,
    x0: -0.0661,
    y0: 0.720,
    out_star: 0.0088,
};

/// Region 3 subregion containing (p, h).
pub fn subregion(p: f64, h: f64) -> Region3Subregion {
    if h < b3ab_enthalpy(p) {
        Region3Subregion::A
    } else {
        Region3Subregion::B
    }
}

/// Temperature [K] with an explicit subregion.
pub fn temperature_in(sub: Region3Subregion, p: f64, h: f64) -> f64 {
    match sub {
        Region3Subregion::A => T_PH_3A.eval(p, h),
        Region3Subregion::B => T_PH_3B.eval(p, h),
    }
}

/// Specific volume [m³/kg] with an explicit subregion.
pub fn volume_in(sub: Region3Subregion, p: f64, h: f64) -> f64 {
    match sub {
        Region3Subregion::A => V_PH_3A.eval(p, h),
        Region3Subregion::B => V_PH_3B.eval(p, h),
    }
}

pub fn temperature(p: f64, h: f64) -> f64 {
    temperature_in(subregion(p, h), p, h)
}

pub fn volume(p: f64, h: f64) -> f64 {
    volume_in(subregion(p, h), p, h)
}

/// Full region 3 state at (p, h).
///
/// Temperature and volume both come from the backward fits; the forward model is
/// handed specific volume, not density.
pub fn solve(model: &dyn ForwardModel, p: f64, h: f64) -> PhResult<SteamState> {
    let sub = subregion(p, h);
    let t = temperature_in(sub, p, h);
    let v = volume_in(sub, p, h);
    Ok(model.region3(p, t, v)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use st_core::{Tolerances, nearly_equal};
    use st_forward::{If97Forward, Region};

    const T_TOL: Tolerances = Tolerances::relative(1e-8);
    const V_TOL: Tolerances = Tolerances::relative(1e-7);

    fn check(sub: Region3Subregion, cases: [(f64, f64, f64, f64); 3]) {
        for (p, h, t, v) in cases {
            assert_eq!(subregion(p, h), sub, "p = {p}, h = {h}");
            let got_t = temperature(p, h);
            let got_v = volume(p, h);
            assert!(nearly_equal(got_t, t, T_TOL), "T({p}, {h}) = {got_t}, want {t}");
            assert!(nearly_equal(got_v, v, V_TOL), "v({p}, {h}) = {got_v}, want {v}");
        }
    }

    #[test]
    fn verification_values_3a() {
        check(
            Region3Subregion::A,
            [
                (20.0, 1700.0, 629.3083892, 1.749903962e-3),
                (50.0, 2000.0, 690.5718338, 1.908139035e-3),
                (100.0, 2100.0, 733.6163014, 1.676229776e-3),
            ],
        );
    }

    #[test]
    fn verification_values_3b() {
        check(
            Region3Subregion::B,
            [
                (20.0, 2500.0, 641.8418053, 6.670547043e-3),
                (50.0, 2400.0, 735.1848618, 2.8012445e-3),
                (100.0, 2700.0, 842.0460876, 2.404234998e-3),
            ],
        );
    }

    #[test]
    fn subregion_split_on_boundary() {
        let h = b3ab_enthalpy(25.0);
        assert_eq!(subregion(25.0, h - 1.0), Region3Subregion::A);
        assert_eq!(subregion(25.0, h), Region3Subregion::B);
    }

    #[test]
    fn solve_passes_specific_volume() {
        let model = If97Forward::new();
        let state = solve(&model, 50.0, 2000.0).unwrap();
        assert_eq!(state.region, Region::R3);
        assert!(nearly_equal(state.v, 1.908139035e-3, V_TOL));
        assert!(nearly_equal(state.t, 690.5718338, T_TOL));
        assert!((state.h - 2000.0).abs() < 1.0, "h = {}", state.h);
    }
}
