//! Contract parameter checks shared by the pricers.

use super::PathPricerError;
use crate::path::Trajectory;
use num_traits::Float;

/// Lossless for `f64`, used only to report offending values.
#[inline]
pub(crate) fn to_f64<T: Float>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

pub(crate) fn check_positive<T: Float>(
    instrument: &'static str,
    name: &'static str,
    value: T,
) -> Result<(), PathPricerError> {
    if value.is_finite() && value > T::zero() {
        Ok(())
    } else {
        Err(PathPricerError::invalid_parameter(
            instrument,
            name,
            format!("must be positive and finite, got {}", to_f64(value)),
        ))
    }
}

pub(crate) fn check_discount<T: Float>(
    instrument: &'static str,
    name: &'static str,
    value: T,
) -> Result<(), PathPricerError> {
    if value.is_finite() && value > T::zero() && value <= T::one() {
        Ok(())
    } else {
        Err(PathPricerError::invalid_parameter(
            instrument,
            name,
            format!("must lie in (0, 1], got {}", to_f64(value)),
        ))
    }
}

/// Rejects the first NaN or infinite price on `path`, fixing or not.
pub(crate) fn check_finite_prices<T: Float>(
    instrument: &'static str,
    underlying: usize,
    path: &Trajectory<T>,
) -> Result<(), PathPricerError> {
    match path.prices().iter().position(|price| !price.is_finite()) {
        None => Ok(()),
        Some(sample) => Err(PathPricerError::NonFinitePrice {
            instrument,
            underlying,
            sample,
            value: to_f64(path.prices()[sample]),
        }),
    }
}
