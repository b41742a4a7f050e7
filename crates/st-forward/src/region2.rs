//! Region 2: superheated vapour up to 1073.15 K.

use crate::error::{ForwardResult, check_positive};
use crate::gibbs::GibbsDerivatives;
use crate::state::{Region, SteamState};

const T_STAR: f64 = 540.0;

/// (J, n) of the ideal-gas part.
const IDEAL: [(i32, f64); 9] = [
    (0, -9.692_768_650_021_7),
    (1, 10.086_655_968_018),
    (-5, -0.005_608_791_128_302),
    (-4, 0.071_452_738_081_455),
    (-3, -0.407_104_982_239_28),
    (-2, 1.424_081_917_144_4),
    (-1, -4.383_951_131_945),
    (2, -0.284_086_324_607_72),
    (3, 0.021_268_463_753_307),
];

/// (I, J, n) of the residual part.
const RESIDUAL: [(i32, i32, f64); 43] = [
    (1, 0, -1.773_174_247_321_3e-3),
    (1, 1, -0.017_834_862_292_358),
    (1, 2, -0.045_996_013_696_365),
    (1, 3, -0.057_581_259_083_432),
    (1, 6, -0.050_325_278_727_93),
    (2, 1, -3.303_264_167_020_3e-5),
    (2, 2, -1.894_898_751_631_5e-4),
    (2, 4, -3.939_277_724_335_5e-3),
    (2, 7, -0.043_797_295_650_573),
    (2, 36, -2.667_454_791_408_7e-5),
    (3, 0, 2.048_173_769_230_9e-8),
    (3, 1, 4.387_066_728_443_5e-7),
    (3, 3, -3.227_767_723_857e-5),
    (3, 6, -1.503_392_454_214_8e-3),
    (3, 35, -0.040_668_253_562_649),
    (4, 1, -7.884_730_955_936_7e-10),
    (4, 2, 1.279_071_785_228_5e-8),
    (4, 3, 4.822_537_271_850_7e-7),
    (5, 7, 2.292_207_633_766_1e-6),
    (6, 3, -1.671_476_645_106_1e-11),
    (6, 16, -2.117_147_232_135_5e-3),
    (6, 35, -23.895_741_934_104),
    (7, 0, -5.905_956_432_427e-18),
    (7, 11, -1.262_180_889_910_1e-6),
    (7, 25, -0.038_946_842_435_739),
    (8, 8, 1.125_621_136_045_9e-11),
    (8, 36, -8.231_134_089_799_8),
    (9, 13, 1.980_971_280_208_8e-8),
    (10, 4, 1.040_696_521_017_4e-19),
    (10, 10, -1.023_474_709_592_9e-13),
    (10, 14, -1.001_817_937_951_1e-9),
    (16, 29, -8.088_290_864_698_5e-11),
    (16, 50, 0.106_930_318_794_09),
    (18, 57, -0.336_622_505_741_71),
    (20, 20, 8.918_584_535_542_1e-25),
    (20, 35, 3.062_931_687_623_2e-13),
    (20, 48, -4.200_246_769_820_8e-6),
    (21, 21, -5.905_602_968_563_9e-26),
    (22, 53, 3.782_694_761_345_7e-6),
    (23, 39, -1.276_860_893_468_1e-15),
    (24, 26, 7.308_761_059_506_1e-29),
    (24, 40, 5.541_471_535_077_8e-17),
    (24, 58, -9.436_970_724_121e-7),
];

fn derivatives(p: f64, t: f64) -> GibbsDerivatives {
    let pi = p;
    let tau = T_STAR / t;
    let b = tau - 0.5;

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
        d.g += n * pi.powi(i) * b.powi(j);
        d.g_pi += n * fi * pi.powi(i - 1) * b.powi(j);
        d.g_pipi += n * fi * (fi - 1.0) * pi.powi(i - 2) * b.powi(j);
        // τ - 0.5 vanishes at 1080 K; skip the zero-weight negative powers.
        if j > 0 {
            d.g_tau += n * pi.powi(i) * fj * b.powi(j - 1);
            d.g_pitau += n * fi * pi.powi(i - 1) * fj * b.powi(j - 1);
        }
        if j > 1 {
            d.g_tautau += n * pi.powi(i) * fj * (fj - 1.0) * b.powi(j - 2);
        }
    }
    d
}

/// Full state from pressure [MPa] and temperature [K].
pub fn state(p: f64, t: f64) -> ForwardResult<SteamState> {
    check_positive(p, "pressure")?;
    check_positive(t, "temperature")?;
    derivatives(p, t).into_state(Region::R2, p, t)
}

/// Specific enthalpy [kJ/kg].
pub fn enthalpy(p: f64, t: f64) -> ForwardResult<f64> {
    state(p, t).map(|st| st.h)
}
