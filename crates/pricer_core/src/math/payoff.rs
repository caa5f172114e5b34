//! Payoff primitive.
//!
//! Every path pricer reduces its exercise decision to
//! `max(0, sign * (spot - strike))`. The subtraction happens before the
//! floor so both legs see the same rounding.

use crate::types::OptionDirection;
use num_traits::Float;

/// Intrinsic value of a vanilla exercise.
///
/// Computes `max(0, sign(direction) * (spot - strike))` with
/// sign(Call) = +1 and sign(Put) = -1. Pure and total; callers are
/// responsible for rejecting non-finite inputs upstream.
///
/// # Arguments
/// * `direction` - Call or put
/// * `spot` - Observed level (a price, or a gross return for cliquets)
/// * `strike` - Strike in the same units as `spot`
///
/// # Examples
/// ```
/// use pricer_core::math::payoff::intrinsic;
/// use pricer_core::types::OptionDirection;
///
/// assert_eq!(intrinsic(OptionDirection::Call, 150.0_f64, 110.0), 40.0);
/// assert_eq!(intrinsic(OptionDirection::Put, 80.0_f64, 110.0), 30.0);
/// assert_eq!(intrinsic(OptionDirection::Call, 80.0_f64, 110.0), 0.0);
/// ```
#[inline]
pub fn intrinsic<T: Float>(direction: OptionDirection, spot: T, strike: T) -> T {
    let moneyness = direction.sign::<T>() * (spot - strike);
    moneyness.max(T::zero())
}
