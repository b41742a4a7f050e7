//! Saturation line (region 4) and the region 2/3 boundary (B23).

use crate::error::{ForwardError, ForwardResult, check_finite};

/// (n1..=n10) of the saturation-pressure equation.
const N: [f64; 10] = [
    1_167.052_145_276_7,
    -724_213.167_032_06,
    -17.073_846_940_092,
    12_020.824_702_47,
    -3_232_555.032_233_3,
    14.915_108_613_53,
    -4_823.265_736_159_1,
    405_113.405_420_57,
    -0.238_555_575_678_49,
    650.175_348_447_98,
];

/// (n1..=n5) of the B23 quadratic.
const B23: [f64; 5] = [
    348.051_856_289_69,
    -1.167_185_987_997_5,
    1.019_297_003_932_6e-3,
    572.544_598_627_46,
    13.918_839_778_87,
];

fn sqrt_nonneg(x: f64, what: &'static str) -> ForwardResult<f64> {
    if x.is_nan() {
        return Err(ForwardError::NonPhysical { what });
    }
    if x < 0.0 {
        // Rounding at the ends of the range can push the discriminant just below zero.
        if x > -1e-12 {
            return Ok(0.0);
        }
        return Err(ForwardError::NonPhysical { what });
    }
    Ok(x.sqrt())
}

/// Saturation pressure [MPa] at temperature [K], valid for 273.15..=647.096 K.
pub fn saturation_pressure(t: f64) -> ForwardResult<f64> {
    check_finite(t, "temperature")?;
    if !(273.15..=647.096).contains(&t) {
        return Err(ForwardError::OutOfRange {
            what: "saturation temperature",
            value: t,
        });
    }

    let theta = t + N[8] / (t - N[9]);
    let a = theta * theta + N[0] * theta + N[1];
    let b = N[2] * theta * theta + N[3] * theta + N[4];
    let c = N[5] * theta * theta + N[6] * theta + N[7];
    let root = sqrt_nonneg(b * b - 4.0 * a * c, "saturation pressure")?;
    Ok((2.0 * c / (-b + root)).powi(4))
}

/// Saturation temperature [K] at pressure [MPa], valid for 611.213 Pa..=22.064 MPa.
pub fn saturation_temperature(p: f64) -> ForwardResult<f64> {
    check_finite(p, "pressure")?;
    if !(0.000_611..=22.064).contains(&p) {
        return Err(ForwardError::OutOfRange {
            what: "saturation pressure",
            value: p,
        });
    }

    let beta = p.powf(0.25);
    let e = beta * beta + N[2] * beta + N[5];
    let f = N[0] * beta * beta + N[3] * beta + N[6];
    let g = N[1] * beta * beta + N[4] * beta + N[7];
    let root = sqrt_nonneg(f * f - 4.0 * e * g, "saturation temperature")?;
    let d = 2.0 * g / (-f - root);

    let disc = (N[9] + d) * (N[9] + d) - 4.0 * (N[8] + N[9] * d);
    let root = sqrt_nonneg(disc, "saturation temperature")?;
    Ok((N[9] + d - root) / 2.0)
}

/// Pressure [MPa] on the region 2/3 boundary at temperature [K].
pub fn b23_pressure(t: f64) -> ForwardResult<f64> {
    check_finite(t, "temperature")?;
    Ok(B23[0] + B23[1] * t + B23[2] * t * t)
}

/// Temperature [K] on the region 2/3 boundary at pressure [MPa].
pub fn b23_temperature(p: f64) -> ForwardResult<f64> {
    check_finite(p, "pressure")?;
    let root = sqrt_nonneg((p - B23[4]) / B23[2], "B23 temperature")?;
    Ok(B23[3] + root)
}
