//! Output records and their text/YAML/JSON rendering.

use std::fmt::Write as _;

use clap::ValueEnum;
use serde::Serialize;
use st_backward::{PhRegion, PhSolver, psat_from_enthalpy, region2, region3};
use st_forward::SteamState;

use crate::error::CliResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Yaml,
    Json,
}

/// Result of solving one (p, h) pair.
#[derive(Debug, Clone, Serialize)]
pub struct SolveReport {
    pub p: f64,
    pub h: f64,
    pub region: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<SteamState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClassifyReport {
    pub p: f64,
    pub h: f64,
    pub region: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subregion: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PsatReport {
    pub h: f64,
    pub psat: f64,
}

impl SolveReport {
    pub fn new(solver: &PhSolver, p: f64, h: f64) -> Self {
        let region = solver.classify(p, h).to_string();
        match solver.try_solve(p, h) {
            Ok(state) => Self {
                p,
                h,
                region,
                state: Some(state),
                error: None,
            },
            Err(err) => Self {
                p,
                h,
                region,
                state: None,
                error: Some(err.to_string()),
            },
        }
    }
}

impl ClassifyReport {
    pub fn new(solver: &PhSolver, p: f64, h: f64) -> Self {
        let region = solver.classify(p, h);
        let subregion = match region {
            PhRegion::R2 => Some(region2::subregion(solver.limits(), p, h).to_string()),
            PhRegion::R3 => Some(region3::subregion(p, h).to_string()),
            _ => None,
        };
        Self {
            p,
            h,
            region: region.to_string(),
            subregion,
        }
    }
}

impl PsatReport {
    pub fn new(h: f64) -> Self {
        Self {
            h,
            psat: psat_from_enthalpy(h),
        }
    }
}

/// Plain-text rendering used by `--format text`.
pub trait TextReport {
    fn to_text(&self) -> String;
}

impl TextReport for SolveReport {
    fn to_text(&self) -> String {
        let mut out = format!("p = {} MPa, h = {} kJ/kg ({})\n", self.p, self.h, self.region);
        if let Some(st) = &self.state {
            let _ = writeln!(out, "  T  = {:.6} K", st.t);
            let _ = writeln!(out, "  v  = {:.9e} m³/kg", st.v);
            let _ = writeln!(out, "  rho= {:.6} kg/m³", st.rho());
            let _ = writeln!(out, "  h  = {:.6} kJ/kg", st.h);
            let _ = writeln!(out, "  u  = {:.6} kJ/kg", st.u);
            let _ = writeln!(out, "  s  = {:.6} kJ/(kg·K)", st.s);
            let _ = writeln!(out, "  cp = {:.6} kJ/(kg·K)", st.cp);
            let _ = writeln!(out, "  cv = {:.6} kJ/(kg·K)", st.cv);
            let _ = writeln!(out, "  w  = {:.4} m/s", st.w);
        }
        if let Some(err) = &self.error {
            let _ = writeln!(out, "  {err}");
        }
        out
    }
}

impl TextReport for ClassifyReport {
    fn to_text(&self) -> String {
        match &self.subregion {
            Some(sub) => format!("{} ({sub})\n", self.region),
            None => format!("{}\n", self.region),
        }
    }
}

impl TextReport for PsatReport {
    fn to_text(&self) -> String {
        format!("psat({} kJ/kg) = {:.8} MPa\n", self.h, self.psat)
    }
}

impl<T: TextReport> TextReport for [T] {
    fn to_text(&self) -> String {
        self.iter().map(TextReport::to_text).collect()
    }
}

pub fn render<T>(format: Format, report: &T) -> CliResult<String>
where
    T: TextReport + Serialize + ?Sized,
{
    Ok(match format {
        Format::Text => report.to_text(),
        Format::Yaml => serde_yaml::to_string(report)?,
        Format::Json => serde_json::to_string_pretty(report)? + "\n",
    })
}
