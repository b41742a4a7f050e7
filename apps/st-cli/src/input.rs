//! YAML inputs: domain-limit overrides and batch point files.

use std::path::Path;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use st_forward::DomainLimits;

use crate::error::{CliError, CliResult};

/// One (p, h) pair in a batch file.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Point {
    /// Pressure [MPa]
    pub p: f64,
    /// Specific enthalpy [kJ/kg]
    pub h: f64,
}

/// Batch file layout: `points: [{p, h}, ...]`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BatchFile {
    #[serde(default)]
    pub points: Vec<Point>,
}

fn load_yaml<T: DeserializeOwned>(path: &Path) -> CliResult<T> {
    let content = std::fs::read_to_string(path).map_err(|e| CliError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    serde_yaml::from_str(&content).map_err(|e| CliError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Load domain limits; fields missing from the file keep their IF97 defaults.
pub fn load_limits(path: &Path) -> CliResult<DomainLimits> {
    let limits: DomainLimits = load_yaml(path)?;
    limits.validate()?;
    Ok(limits)
}

pub fn load_batch(path: &Path) -> CliResult<BatchFile> {
    load_yaml(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_batch() {
        let yaml = "points:\n  - { p: 3.0, h: 500.0 }\n  - p: 150\n    h: 2000\n";
        let batch: BatchFile = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(batch.points.len(), 2);
        assert_eq!(batch.points[1], Point { p: 150.0, h: 2000.0 });
    }

    #[test]
    fn empty_batch() {
        let batch: BatchFile = serde_yaml::from_str("{}").unwrap();
        assert!(batch.points.is_empty());
    }

    #[test]
    fn partial_limits_keep_defaults() {
        let limits: DomainLimits = serde_yaml::from_str("max_pressure: 50.0\n").unwrap();
        assert_eq!(limits.max_pressure, 50.0);
        assert_eq!(limits.min_temperature, DomainLimits::default().min_temperature);
    }

    #[test]
    fn inverted_limits_are_rejected() {
        let path = std::env::temp_dir().join(format!("st-cli-limits-{}.yaml", std::process::id()));
        std::fs::write(&path, "min_temperature: 2000.0\n").unwrap();
        let result = load_limits(&path);
        let _ = std::fs::remove_file(&path);

        let err = result.unwrap_err();
        assert!(matches!(err, CliError::Limits(_)));
        assert!(err.to_string().contains("min_temperature"));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_batch(Path::new("/nonexistent/points.yaml")).unwrap_err();
        assert!(err.to_string().contains("points.yaml"));
    }
}
