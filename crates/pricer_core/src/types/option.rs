//! Option direction.

use num_traits::Float;
use std::fmt;

/// Direction of an option payoff.
///
/// Fixed when a pricer is constructed and never mutated afterwards.
///
/// # Examples
/// ```
/// use pricer_core::types::OptionDirection;
///
/// assert_eq!(OptionDirection::Call.sign::<f64>(), 1.0);
/// assert_eq!(OptionDirection::Put.sign::<f64>(), -1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionDirection {
    /// Pays when the observed level ends above the strike.
    Call,
    /// Pays when the observed level ends below the strike.
    Put,
}

impl OptionDirection {
    /// Returns `+1` for a call and `-1` for a put.
    #[inline]
    pub fn sign<T: Float>(&self) -> T {
        match self {
            OptionDirection::Call => T::one(),
            OptionDirection::Put => -T::one(),
        }
    }

    /// Returns whether this is a call.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionDirection::Call)
    }

    /// Returns whether this is a put.
    #[inline]
    pub fn is_put(&self) -> bool {
        matches!(self, OptionDirection::Put)
    }
}

impl fmt::Display for OptionDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionDirection::Call => write!(f, "Call"),
            OptionDirection::Put => write!(f, "Put"),
        }
    }
}
