//! Error type shared by every fallible operation in the crate.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClockError {
    /// A construction parameter is out of range (period, light speed, spacing, ...).
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A runtime value is out of range (negative proper time, superluminal speed, ...).
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, ClockError>;

/// Rejects negative or non-finite time values.
pub(crate) fn check_time(name: &str, value: f64) -> Result<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(ClockError::InvalidInput(format!(
            "{name} must be finite and non-negative, got {value}"
        )));
    }
    Ok(value)
}

/// Rejects zero, negative or non-finite quantities that must be strictly positive.
pub(crate) fn check_positive(name: &str, value: f64) -> Result<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ClockError::InvalidConfiguration(format!(
            "{name} must be finite and positive, got {value}"
        )));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_time() {
        assert_eq!(check_time("t", 0.0), Ok(0.0));
        assert_eq!(check_time("t", 3.7), Ok(3.7));
        assert!(matches!(check_time("t", -0.1), Err(ClockError::InvalidInput(_))));
        assert!(matches!(check_time("t", f64::NAN), Err(ClockError::InvalidInput(_))));
        assert!(matches!(check_time("t", f64::INFINITY), Err(ClockError::InvalidInput(_))));
    }

    #[test]
    fn test_check_positive() {
        assert_eq!(check_positive("period", 0.5), Ok(0.5));
        assert!(matches!(check_positive("period", 0.0), Err(ClockError::InvalidConfiguration(_))));
        assert!(matches!(check_positive("period", -1.0), Err(ClockError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_error_display() {
        let err = ClockError::InvalidConfiguration("period must be positive".into());
        assert_eq!(err.to_string(), "invalid configuration: period must be positive");
    }
}
