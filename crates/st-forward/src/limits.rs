//! Validity bounds of the IF97 formulation.

use st_core::{StError, StResult, ensure_finite};

/// Domain constants consulted by region classification.
///
/// Pressures in MPa, temperatures in K, enthalpy in kJ/kg. `Default` gives the
/// IAPWS-IF97 values.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DomainLimits {
    /// Lowest supported pressure (saturation pressure at 273.15 K).
    pub min_pressure: f64,
    pub max_pressure: f64,
    pub min_temperature: f64,
    /// Upper temperature of region 5.
    pub max_temperature: f64,
    /// Saturation pressure at 623.15 K; start of the region 2/3 boundary.
    pub b23_min_pressure: f64,
    pub region2_max_temperature: f64,
    pub region3_min_temperature: f64,
    pub region5_max_pressure: f64,
    /// Pressure separating subregion 2a from 2b/2c.
    pub region2a_max_pressure: f64,
    /// Below this enthalpy a state above the liquid line is taken as region 2 without
    /// evaluating the region 2 upper bound.
    pub region2_fast_enthalpy: f64,
    pub critical_pressure: f64,
    pub critical_temperature: f64,
}

impl Default for DomainLimits {
    fn default() -> Self {
        Self {
            min_pressure: 0.000_611_213,
            max_pressure: 100.0,
            min_temperature: 273.15,
            max_temperature: 2273.15,
            b23_min_pressure: 16.5292,
            region2_max_temperature: 1073.15,
            region3_min_temperature: 623.15,
            region5_max_pressure: 10.0,
            region2a_max_pressure: 4.0,
            region2_fast_enthalpy: 4000.0,
            critical_pressure: 22.064,
            critical_temperature: 647.096,
        }
    }
}

impl DomainLimits {
    /// True when `p` lies inside `[min_pressure, max_pressure]`.
    pub fn contains_pressure(&self, p: f64) -> bool {
        (self.min_pressure..=self.max_pressure).contains(&p)
    }

    /// Check that every bound is finite and each range is non-empty.
    ///
    /// Hand-edited limits (e.g. loaded from YAML) should pass through here before
    /// backing a model.
    pub fn validate(&self) -> StResult<()> {
        let fields = [
            ("min_pressure", self.min_pressure),
            ("max_pressure", self.max_pressure),
            ("min_temperature", self.min_temperature),
            ("max_temperature", self.max_temperature),
            ("b23_min_pressure", self.b23_min_pressure),
            ("region2_max_temperature", self.region2_max_temperature),
            ("region3_min_temperature", self.region3_min_temperature),
            ("region5_max_pressure", self.region5_max_pressure),
            ("region2a_max_pressure", self.region2a_max_pressure),
            ("region2_fast_enthalpy", self.region2_fast_enthalpy),
            ("critical_pressure", self.critical_pressure),
            ("critical_temperature", self.critical_temperature),
        ];
        for (what, value) in fields {
            ensure_finite(value, what)?;
        }

        if self.min_pressure <= 0.0 {
            return Err(StError::InvalidArg {
                what: format!("min_pressure must be positive, got {}", self.min_pressure),
            });
        }
        let ordered = [
            ("min_pressure", self.min_pressure, "max_pressure", self.max_pressure),
            (
                "min_temperature",
                self.min_temperature,
                "region2_max_temperature",
                self.region2_max_temperature,
            ),
            (
                "region2_max_temperature",
                self.region2_max_temperature,
                "max_temperature",
                self.max_temperature,
            ),
        ];
        for (lo_name, lo, hi_name, hi) in ordered {
            if lo >= hi {
                return Err(StError::InvalidArg {
                    what: format!("{lo_name} ({lo}) must be below {hi_name} ({hi})"),
                });
            }
        }
        Ok(())
    }
}
