//! Error categories for Monte Carlo pricing runs.
//!
//! This module provides [`PricingError`], the coarse classification a
//! Monte Carlo driver needs to decide how to react to a failed sample.
//! Layer 3 error types carry the detail and convert into this type.

use thiserror::Error;

/// Categorised pricing errors.
///
/// Neither category is retryable: the core performs no I/O, so every
/// failure points at a wiring or generator bug that must be fixed before
/// the batch is rerun.
///
/// # Variants
/// - `Configuration`: Contract parameters and supplied paths disagree, or a
///   parameter is out of its domain
/// - `NumericalDegeneracy`: A simulated path contains non-finite values
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::Configuration {
///     instrument: "basket",
///     message: "expected 2 underlyings, got 3".to_string(),
/// };
/// assert_eq!(
///     format!("{}", err),
///     "Configuration error (basket): expected 2 underlyings, got 3"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Contract parameters or path shape are inconsistent.
    #[error("Configuration error ({instrument}): {message}")]
    Configuration {
        /// Instrument whose pricer rejected the input
        instrument: &'static str,
        /// Description naming the offending parameter or sample
        message: String,
    },

    /// Non-finite values encountered in a simulated path.
    #[error("Numerical degeneracy ({instrument}): {message}")]
    NumericalDegeneracy {
        /// Instrument whose pricer rejected the input
        instrument: &'static str,
        /// Description naming the offending sample
        message: String,
    },
}

impl PricingError {
    /// Returns the instrument that raised the error.
    pub fn instrument(&self) -> &'static str {
        match self {
            PricingError::Configuration { instrument, .. }
            | PricingError::NumericalDegeneracy { instrument, .. } => instrument,
        }
    }

    /// Returns whether the error is a configuration error.
    pub fn is_configuration(&self) -> bool {
        matches!(self, PricingError::Configuration { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_display() {
        let err = PricingError::Configuration {
            instrument: "cliquet",
            message: "expected 4 reset periods, got 3".to_string(),
        };
        assert_eq!(
            format!("{}", err),
            "Configuration error (cliquet): expected 4 reset periods, got 3"
        );
        assert!(err.is_configuration());
        assert_eq!(err.instrument(), "cliquet");
    }

    #[test]
    fn test_numerical_degeneracy_display() {
        let err = PricingError::NumericalDegeneracy {
            instrument: "basket",
            message: "non-finite price NaN".to_string(),
        };
        assert!(format!("{}", err).starts_with("Numerical degeneracy (basket)"));
        assert!(!err.is_configuration());
    }

    #[test]
    fn test_error_trait_object() {
        let err: Box<dyn std::error::Error> = Box::new(PricingError::Configuration {
            instrument: "basket",
            message: "strike must be positive".to_string(),
        });
        assert!(err.to_string().contains("strike"));
    }
}
