//! Thermodynamic state produced by the forward equations.

use st_core::units::{Density, Pressure, Temperature, Velocity, k, kg_per_m3, mpa, mps};
use std::fmt;

/// IF97 region whose equation produced a state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Region {
    R1,
    R2,
    R3,
    R5,
}

impl Region {
    pub fn number(self) -> u8 {
        match self {
            Self::R1 => 1,
            Self::R2 => 2,
            Self::R3 => 3,
            Self::R5 => 5,
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "region {}", self.number())
    }
}

/// Full thermodynamic state of water/steam.
///
/// Fields are in IF97 working units; the uom accessors convert to SI quantities.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SteamState {
    pub region: Region,
    /// Pressure [MPa]
    pub p: f64,
    /// Temperature [K]
    pub t: f64,
    /// Specific volume [m³/kg]
    pub v: f64,
    /// Specific enthalpy [kJ/kg]
    pub h: f64,
    /// Specific internal energy [kJ/kg]
    pub u: f64,
    /// Specific entropy [kJ/(kg·K)]
    pub s: f64,
    /// Isobaric heat capacity [kJ/(kg·K)]
    pub cp: f64,
    /// Isochoric heat capacity [kJ/(kg·K)]
    pub cv: f64,
    /// Speed of sound [m/s]
    pub w: f64,
}

impl SteamState {
    /// Density [kg/m³].
    pub fn rho(&self) -> f64 {
        1.0 / self.v
    }

    pub fn pressure(&self) -> Pressure {
        mpa(self.p)
    }

    pub fn temperature(&self) -> Temperature {
        k(self.t)
    }

    pub fn density(&self) -> Density {
        kg_per_m3(self.rho())
    }

    pub fn speed_of_sound(&self) -> Velocity {
        mps(self.w)
    }

    /// Return a summary string of all contained properties (for debugging).
    pub fn summary(&self) -> String {
        format!(
            "State({}, P={:.6}MPa,T={:.4}K,v={:.6e}m³/kg,h={:.3}kJ/kg,s={:.5}kJ/kg·K,w={:.2}m/s)",
            self.region, self.p, self.t, self.v, self.h, self.s, self.w
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uom::si::{mass_density::kilogram_per_cubic_meter, pressure::pascal};

    fn sample() -> SteamState {
        SteamState {
            region: Region::R1,
            p: 3.0,
            t: 300.0,
            v: 0.001_002_151_68,
            h: 115.331_273,
            u: 112.324_818,
            s: 0.392_294_792,
            cp: 4.173_012_18,
            cv: 4.121_201_6,
            w: 1_507.739_21,
        }
    }

    #[test]
    fn uom_accessors_convert_units() {
        let st = sample();
        assert!((st.pressure().get::<pascal>() - 3.0e6).abs() < 1e-6);
        let rho = st.density().get::<kilogram_per_cubic_meter>();
        assert!((rho - 997.852).abs() < 0.01, "rho = {rho}");
        assert_eq!(st.temperature().value, 300.0);
    }

    #[test]
    fn summary_names_region() {
        let s = sample().summary();
        assert!(s.contains("region 1"));
        assert!(s.contains("P=3.000000MPa"));
    }
}
