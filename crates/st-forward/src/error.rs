//! Forward-equation errors.

use st_core::StError;
use thiserror::Error;

/// Result type for forward property evaluation.
pub type ForwardResult<T> = Result<T, ForwardError>;

/// Errors that can occur while evaluating the forward equations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForwardError {
    /// NaN or infinite input.
    #[error("Non-finite input for {what}")]
    NonFinite { what: &'static str },

    /// Input outside the range an equation is defined for.
    #[error("{what} out of range: {value}")]
    OutOfRange { what: &'static str, value: f64 },

    /// Computed property is non-physical (negative volume, imaginary speed of sound, ...).
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },
}

impl From<ForwardError> for StError {
    fn from(err: ForwardError) -> Self {
        match err {
            ForwardError::NonFinite { what } => StError::NonFinite {
                what,
                value: f64::NAN,
            },
            ForwardError::OutOfRange { what, value } => StError::InvalidArg {
                what: format!("IF97 {what} out of range: {value}"),
            },
            ForwardError::NonPhysical { what } => StError::Invariant {
                what: format!("Non-physical IF97 value: {what}"),
            },
        }
    }
}

/// Reject NaN/Inf inputs up front.
pub(crate) fn check_finite(v: f64, what: &'static str) -> ForwardResult<f64> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(ForwardError::NonFinite { what })
    }
}

/// Reject non-finite or non-positive values.
pub(crate) fn check_positive(v: f64, what: &'static str) -> ForwardResult<f64> {
    check_finite(v, what)?;
    if v <= 0.0 {
        return Err(ForwardError::OutOfRange { what, value: v });
    }
    Ok(v)
}
