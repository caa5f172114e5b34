//! Error types for path pricers.
//!
//! Configuration errors signal a mismatch between a pricer and the
//! generator feeding it; numerical errors signal a generator emitting
//! non-finite prices. Neither is floored away by the payoff.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Path pricer errors.
///
/// # Variants
/// - `InvalidParameter`: Contract parameter outside its domain
/// - `UnderlyingCountMismatch`: Bundle size differs from the reference prices
/// - `ResetCountMismatch`: Reset periods differ from the discount factors
/// - `AntitheticMismatch`: Sample shape disagrees with the antithetic flag
/// - `NonFinitePrice`: NaN or infinite price in a trajectory
/// - `NonFiniteReturn`: Return ratio overflowed (zero denominator)
///
/// # Examples
/// ```
/// use pricer_pricing::path_pricer::PathPricerError;
///
/// let err = PathPricerError::UnderlyingCountMismatch {
///     instrument: "basket",
///     expected: 2,
///     found: 3,
/// };
/// assert_eq!(format!("{}", err), "basket: expected 2 underlyings, got 3");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathPricerError {
    /// Contract parameter outside its domain.
    #[error("{instrument}: invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Instrument being configured
        instrument: &'static str,
        /// Parameter name
        name: &'static str,
        /// Description of the violated constraint
        message: String,
    },

    /// Number of trajectories differs from the configured underlyings.
    #[error("{instrument}: expected {expected} underlyings, got {found}")]
    UnderlyingCountMismatch {
        /// Instrument being priced
        instrument: &'static str,
        /// Configured number of underlyings
        expected: usize,
        /// Number of trajectories supplied
        found: usize,
    },

    /// Number of reset periods differs from the discount schedule.
    #[error("{instrument}: expected {expected} reset periods, got {found}")]
    ResetCountMismatch {
        /// Instrument being priced
        instrument: &'static str,
        /// Number of discount factors configured
        expected: usize,
        /// Number of periods on the trajectory
        found: usize,
    },

    /// Antithetic sample supplied to a plain pricer or vice versa.
    #[error("{instrument}: {}", antithetic_mismatch(.expected))]
    AntitheticMismatch {
        /// Whether the pricer was configured for antithetic sampling
        expected: bool,
        /// Instrument being priced
        instrument: &'static str,
    },

    /// NaN or infinite price on a trajectory.
    #[error("{instrument}: non-finite price {value} for underlying {underlying} at sample {sample}")]
    NonFinitePrice {
        /// Instrument being priced
        instrument: &'static str,
        /// Underlying index within the bundle
        underlying: usize,
        /// Sample index within the trajectory
        sample: usize,
        /// Offending value
        value: f64,
    },

    /// Return ratio is not finite.
    #[error("{instrument}: non-finite return for underlying {underlying} at sample {sample}")]
    NonFiniteReturn {
        /// Instrument being priced
        instrument: &'static str,
        /// Underlying index within the bundle
        underlying: usize,
        /// Sample index within the trajectory
        sample: usize,
    },
}

fn antithetic_mismatch(expected: &bool) -> &'static str {
    if *expected {
        "pricer uses antithetic sampling but the sample has a single branch"
    } else {
        "pricer does not use antithetic sampling but the sample has two branches"
    }
}

impl PathPricerError {
    /// Returns the instrument that raised the error.
    pub fn instrument(&self) -> &'static str {
        match self {
            PathPricerError::InvalidParameter { instrument, .. }
            | PathPricerError::UnderlyingCountMismatch { instrument, .. }
            | PathPricerError::ResetCountMismatch { instrument, .. }
            | PathPricerError::AntitheticMismatch { instrument, .. }
            | PathPricerError::NonFinitePrice { instrument, .. }
            | PathPricerError::NonFiniteReturn { instrument, .. } => instrument,
        }
    }

    /// Returns whether the error stems from non-finite path values.
    pub fn is_numerical(&self) -> bool {
        matches!(
            self,
            PathPricerError::NonFinitePrice { .. } | PathPricerError::NonFiniteReturn { .. }
        )
    }

    pub(crate) fn invalid_parameter(
        instrument: &'static str,
        name: &'static str,
        message: impl Into<String>,
    ) -> Self {
        let err = PathPricerError::InvalidParameter {
            instrument,
            name,
            message: message.into(),
        };
        tracing::warn!(instrument, parameter = name, error = %err, "rejected contract parameter");
        err
    }
}

impl From<PathPricerError> for PricingError {
    fn from(err: PathPricerError) -> Self {
        let instrument = err.instrument();
        if err.is_numerical() {
            PricingError::NumericalDegeneracy {
                instrument,
                message: err.to_string(),
            }
        } else {
            PricingError::Configuration {
                instrument,
                message: err.to_string(),
            }
        }
    }
}
