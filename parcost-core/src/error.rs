//! Error types for the estimation engine.

use std::{error::Error, fmt};

/// Error raised when an estimator input violates a numeric precondition.
///
/// Every variant carries the offending parameter so callers can point the
/// user at the exact field to fix.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A parameter that must be strictly positive was zero or negative.
    NotPositive {
        /// Name of the offending parameter.
        parameter: &'static str,
        /// Value that was supplied.
        value: f64,
    },
    /// A parameter fell outside its closed acceptance interval.
    OutOfRange {
        /// Name of the offending parameter.
        parameter: &'static str,
        /// Value that was supplied.
        value: f64,
        /// Inclusive lower bound.
        min: f64,
        /// Inclusive upper bound.
        max: f64,
    },
    /// An unrecognized development-mode name.
    UnknownMode(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotPositive { parameter, value } => {
                write!(f, "{parameter} must be greater than 0 (got {value})")
            }
            Self::OutOfRange {
                parameter,
                value,
                min,
                max,
            } => {
                write!(f, "{parameter} must be between {min} and {max} (got {value})")
            }
            Self::UnknownMode(value) => write!(f, "invalid development mode: {value}"),
        }
    }
}

impl Error for ValidationError {}

/// Convenience result type for the estimation engine.
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Reject values that are not strictly positive.
///
/// The comparison is written so that NaN is rejected as well.
pub(crate) fn ensure_positive(value: f64, parameter: &'static str) -> Result<()> {
    if !(value > 0.0) {
        return Err(ValidationError::NotPositive { parameter, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{ValidationError, ensure_positive};

    #[test]
    fn not_positive_formats_message() {
        let error = ValidationError::NotPositive {
            parameter: "KLOC",
            value: -5.0,
        };
        assert_eq!(format!("{error}"), "KLOC must be greater than 0 (got -5)");
    }

    #[test]
    fn out_of_range_formats_message() {
        let error = ValidationError::OutOfRange {
            parameter: "value adjustment factor",
            value: 1.5,
            min: 0.65,
            max: 1.35,
        };
        assert_eq!(
            format!("{error}"),
            "value adjustment factor must be between 0.65 and 1.35 (got 1.5)"
        );
    }

    #[test]
    fn unknown_mode_formats_message() {
        let error = ValidationError::UnknownMode("waterfall".to_string());
        assert_eq!(format!("{error}"), "invalid development mode: waterfall");
    }

    #[test]
    fn ensure_positive_accepts_positive_values() {
        assert!(ensure_positive(0.1, "EAF").is_ok());
    }

    #[test]
    fn ensure_positive_rejects_zero_negative_and_nan() {
        assert!(ensure_positive(0.0, "KLOC").is_err());
        assert!(ensure_positive(-3.0, "KLOC").is_err());
        assert!(ensure_positive(f64::NAN, "KLOC").is_err());
    }
}
