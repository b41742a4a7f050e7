//! Region classification on both sides of every boundary.

use st_backward::{PhError, PhRegion, classify, solve, try_solve};
use st_forward::{DomainLimits, ForwardModel, If97Forward};

const EPS: f64 = 1e-3;

fn model() -> If97Forward {
    If97Forward::new()
}

#[test]
fn saturated_liquid_line() {
    let model = model();
    for p in [0.01, 1.0, 5.0, 12.0, 16.0] {
        let ts = model.saturation_temperature(p).unwrap();
        let h = model.region1(p, ts).unwrap().h;
        assert_eq!(classify(&model, p, h - EPS), PhRegion::R1, "p = {p}");
        assert_eq!(classify(&model, p, h), PhRegion::R1, "p = {p}");
        assert_eq!(classify(&model, p, h + EPS), PhRegion::R2, "p = {p}");
    }
}

#[test]
fn two_phase_dome_is_tagged_region2() {
    let model = model();
    assert_eq!(classify(&model, 1.0, 2000.0), PhRegion::R2);
    assert_eq!(classify(&model, 16.5, 2000.0), PhRegion::R2);
    // From the start of the B23 curve upwards the same enthalpy is region 3.
    let l = DomainLimits::default();
    assert_eq!(classify(&model, l.b23_min_pressure, 2000.0), PhRegion::R3);
}

#[test]
fn two_phase_dome_has_no_state() {
    let model = model();
    for p in [0.001, 0.01, 0.1, 1.0, 5.0, 10.0, 16.5] {
        let ts = model.saturation_temperature(p).unwrap();
        let h_liq = model.region1(p, ts).unwrap().h;
        let h_vap = model.region2(p, ts).unwrap().h;
        for k in 1..100 {
            let h = h_liq + (h_vap - h_liq) * f64::from(k) / 100.0;
            assert_eq!(classify(&model, p, h), PhRegion::R2, "p = {p}, h = {h}");
            assert!(solve(&model, p, h).is_none(), "p = {p}, h = {h}");
            assert_eq!(try_solve(&model, p, h), Err(PhError::OutOfDomain { p, h }));
        }
    }
}

#[test]
fn minimum_temperature_edge() {
    let model = model();
    let l = *model.limits();
    for p in [3.0, 50.0, l.max_pressure] {
        let h = model.region1(p, l.min_temperature).unwrap().h;
        assert_eq!(classify(&model, p, h - EPS), PhRegion::Invalid, "p = {p}");
        assert_eq!(classify(&model, p, h + EPS), PhRegion::R1, "p = {p}");
    }

    // At the triple-point pressure the liquid line sits on the minimum temperature.
    let h = model.region1(l.min_pressure, l.min_temperature).unwrap().h;
    assert_eq!(classify(&model, l.min_pressure, h - EPS), PhRegion::Invalid);
}

#[test]
fn pressure_bounds_are_inclusive() {
    let model = model();
    let l = *model.limits();
    assert_eq!(classify(&model, l.max_pressure, 2000.0), PhRegion::R3);
    assert_eq!(classify(&model, l.min_pressure, 2000.0), PhRegion::R2);
    assert_eq!(classify(&model, l.max_pressure + 1e-9, 2000.0), PhRegion::Invalid);
    assert_eq!(classify(&model, l.min_pressure * 0.999, 2000.0), PhRegion::Invalid);
    assert_eq!(classify(&model, -1.0, 2000.0), PhRegion::Invalid);
}

#[test]
fn region2_upper_edge_low_pressure() {
    let model = model();
    let l = *model.limits();

    // Below the region 5 pressure limit, past the region 2 edge comes region 5.
    let h2 = model.region2(5.0, l.region2_max_temperature).unwrap().h;
    assert_eq!(classify(&model, 5.0, h2), PhRegion::R2);
    assert_eq!(classify(&model, 5.0, h2 + EPS), PhRegion::R5);

    let h5 = model.region5(5.0, l.max_temperature).unwrap().h;
    assert_eq!(classify(&model, 5.0, h5 - EPS), PhRegion::R5);
    assert_eq!(classify(&model, 5.0, h5), PhRegion::Invalid);

    // Above it there is nothing past region 2.
    let h2 = model.region2(12.0, l.region2_max_temperature).unwrap().h;
    assert_eq!(classify(&model, 12.0, h2 - EPS), PhRegion::R2);
    assert_eq!(classify(&model, 12.0, h2 + EPS), PhRegion::Invalid);
}

#[test]
fn high_pressure_boundaries() {
    let model = model();
    let l = *model.limits();
    let p = 50.0;

    let h13 = model.region1(p, l.region3_min_temperature).unwrap().h;
    assert_eq!(classify(&model, p, h13), PhRegion::R1);
    assert_eq!(classify(&model, p, h13 + EPS), PhRegion::R3);

    let t23 = model.b23_temperature(p).unwrap();
    let h23 = model.region2(p, t23).unwrap().h;
    assert_eq!(classify(&model, p, h23 - EPS), PhRegion::R3);
    assert_eq!(classify(&model, p, h23), PhRegion::R2);

    let h2max = model.region2(p, l.region2_max_temperature).unwrap().h;
    assert_eq!(classify(&model, p, h2max - EPS), PhRegion::R2);
    assert_eq!(classify(&model, p, h2max), PhRegion::Invalid);
}

#[test]
fn region4_is_never_produced() {
    let model = model();
    for p in [0.001, 0.1, 1.0, 10.0, 20.0, 50.0, 100.0] {
        for h in (0..=80).map(|k| f64::from(k) * 100.0) {
            assert_ne!(classify(&model, p, h), PhRegion::R4, "p = {p}, h = {h}");
        }
    }
}
