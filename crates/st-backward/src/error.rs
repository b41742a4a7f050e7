//! Backward-solver errors.

use st_core::StError;
use st_forward::ForwardError;
use thiserror::Error;

use crate::region::PhRegion;

/// Result type for (p, h) backward evaluation.
pub type PhResult<T> = Result<T, PhError>;

/// Reasons a (p, h) pair has no backward solution.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PhError {
    /// The pair lies outside every IF97 region.
    #[error("No IF97 region contains p={p} MPa, h={h} kJ/kg")]
    OutOfDomain { p: f64, h: f64 },

    /// The pair was classified but no backward equation exists for that region.
    #[error("No backward equation for {region}")]
    Unsupported { region: PhRegion },

    #[error("Forward model error: {0}")]
    Forward(#[from] ForwardError),
}

impl From<PhError> for StError {
    fn from(err: PhError) -> Self {
        match err {
            PhError::OutOfDomain { p, h } => StError::InvalidArg {
                what: format!("(p={p} MPa, h={h} kJ/kg) is outside IF97"),
            },
            PhError::Unsupported { region } => StError::InvalidArg {
                what: format!("no backward equation for {region}"),
            },
            PhError::Forward(e) => e.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = PhError::OutOfDomain { p: 150.0, h: 2000.0 };
        assert!(err.to_string().contains("150"));

        let err = PhError::Unsupported {
            region: PhRegion::R5,
        };
        assert_eq!(err.to_string(), "No backward equation for region 5");
    }

    #[test]
    fn forward_errors_convert() {
        let fwd = ForwardError::NonPhysical { what: "volume" };
        let err: PhError = fwd.clone().into();
        assert_eq!(err, PhError::Forward(fwd));

        let st: StError = err.into();
        assert!(matches!(st, StError::Invariant { .. }));
    }
}
