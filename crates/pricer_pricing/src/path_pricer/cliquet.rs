//! Cliquet (periodic reset) path pricer.
//!
//! Each period between consecutive fixing dates locks in a payoff on the
//! gross return over that period, struck at `1 + moneyness`, and pays it
//! discounted by the period's own factor:
//!
//! ```text
//! r_k    = S(t_k) / S(t_{k-1})
//! payoff = Σ_k D_k * max(0, ω (r_k - (1 + m)))
//! ```
//!
//! Fixing dates are inception, every reset date, and expiry. The first
//! period is measured from the contract's reference price. Periods share
//! nothing except the running price level.

use super::sample::evaluate_branches;
use super::validation::{check_discount, check_finite_prices, check_positive, to_f64};
use super::{PathPricer, PathPricerError, PathSample};
use crate::path::{Trajectory, TrajectoryBundle};
use num_traits::Float;
use pricer_core::math::payoff::intrinsic;
use pricer_core::types::OptionDirection;

const INSTRUMENT: &str = "cliquet";

/// Contract terms of a cliquet option.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CliquetParams<T> {
    /// Call or put on each period return
    pub direction: OptionDirection,
    /// Inception fixing of the underlying.
    ///
    /// The first period return is `S(t_1) / reference_price`. The
    /// trajectory's own inception sample must be finite but its level is
    /// not compared against this value, so a generator started away from
    /// the reference is priced from the reference.
    pub reference_price: T,
    /// Minimum guaranteed per-period return; the strike is `1 + moneyness`
    pub moneyness: T,
    /// One discount factor per period, in period order
    pub discounts: Vec<T>,
    /// Whether samples carry an antithetic branch
    #[cfg_attr(feature = "serde", serde(default))]
    pub antithetic: bool,
}

impl<T: Float> CliquetParams<T> {
    /// Creates contract terms without antithetic sampling.
    pub fn new(direction: OptionDirection, reference_price: T, moneyness: T, discounts: Vec<T>) -> Self {
        Self {
            direction,
            reference_price,
            moneyness,
            discounts,
            antithetic: false,
        }
    }

    /// Sets the antithetic flag.
    pub fn with_antithetic(mut self, antithetic: bool) -> Self {
        self.antithetic = antithetic;
        self
    }

    /// Validates the contract terms.
    ///
    /// # Errors
    ///
    /// Returns [`PathPricerError::InvalidParameter`] if the reference price
    /// is not positive, the moneyness is not finite, the discount schedule
    /// is empty, or any discount factor lies outside (0, 1].
    pub fn validate(&self) -> Result<(), PathPricerError> {
        check_positive(INSTRUMENT, "reference_price", self.reference_price)?;
        if !self.moneyness.is_finite() {
            return Err(PathPricerError::invalid_parameter(
                INSTRUMENT,
                "moneyness",
                format!("must be finite, got {}", to_f64(self.moneyness)),
            ));
        }
        if self.discounts.is_empty() {
            return Err(PathPricerError::invalid_parameter(
                INSTRUMENT,
                "discounts",
                "at least one period is required",
            ));
        }
        self.discounts
            .iter()
            .try_for_each(|&discount| check_discount(INSTRUMENT, "discounts", discount))
    }
}

/// Path pricer for a cliquet option.
///
/// # Examples
///
/// ```
/// use pricer_core::types::OptionDirection;
/// use pricer_pricing::path::Trajectory;
/// use pricer_pricing::path_pricer::{CliquetParams, CliquetPathPricer, PathPricer};
///
/// let pricer = CliquetPathPricer::new(CliquetParams::new(
///     OptionDirection::Call,
///     100.0,
///     0.0,
///     vec![0.98, 0.96],
/// ))
/// .unwrap();
///
/// let path = Trajectory::with_resets(vec![0.0, 0.5, 1.0], vec![100.0, 110.0, 99.0], vec![1]).unwrap();
///
/// let value: f64 = pricer.evaluate_path(&path).unwrap();
/// assert!((value - 0.098).abs() < 1e-12);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct CliquetPathPricer<T: Float> {
    params: CliquetParams<T>,
}

impl<T: Float> CliquetPathPricer<T> {
    /// Creates a pricer from validated contract terms.
    ///
    /// # Errors
    ///
    /// See [`CliquetParams::validate`].
    pub fn new(params: CliquetParams<T>) -> Result<Self, PathPricerError> {
        params.validate()?;
        tracing::debug!(
            instrument = INSTRUMENT,
            periods = params.discounts.len(),
            direction = %params.direction,
            moneyness = to_f64(params.moneyness),
            antithetic = params.antithetic,
            "constructed path pricer"
        );
        Ok(Self { params })
    }

    /// Contract terms.
    #[inline]
    pub fn params(&self) -> &CliquetParams<T> {
        &self.params
    }

    /// Number of reset periods the pricer expects.
    #[inline]
    pub fn n_periods(&self) -> usize {
        self.params.discounts.len()
    }

    /// Whether samples must carry an antithetic branch.
    #[inline]
    pub fn is_antithetic(&self) -> bool {
        self.params.antithetic
    }

    /// Discounted payoff of every period of one branch, in period order.
    ///
    /// # Errors
    ///
    /// - [`PathPricerError::ResetCountMismatch`] if the trajectory's period
    ///   count differs from the discount schedule
    /// - [`PathPricerError::NonFinitePrice`] for a NaN or infinite price
    ///   anywhere on the trajectory, inception and non-reset samples included
    /// - [`PathPricerError::NonFiniteReturn`] if a period return overflows
    pub fn period_values(&self, path: &Trajectory<T>) -> Result<Vec<T>, PathPricerError> {
        let mut values = Vec::with_capacity(self.n_periods());
        self.for_each_period(path, |value| values.push(value))?;
        Ok(values)
    }

    fn price_branch(&self, path: &Trajectory<T>) -> Result<T, PathPricerError> {
        let mut total = T::zero();
        self.for_each_period(path, |value| total = total + value)?;
        Ok(total)
    }

    fn for_each_period<F: FnMut(T)>(&self, path: &Trajectory<T>, mut f: F) -> Result<(), PathPricerError> {
        if path.n_periods() != self.n_periods() {
            return Err(PathPricerError::ResetCountMismatch {
                instrument: INSTRUMENT,
                expected: self.n_periods(),
                found: path.n_periods(),
            });
        }

        check_finite_prices(INSTRUMENT, 0, path)?;

        let strike = T::one() + self.params.moneyness;
        let prices = path.prices();
        let mut previous = self.params.reference_price;
        for (sample, &discount) in path.fixing_indices().skip(1).zip(&self.params.discounts) {
            let fixing = prices[sample];
            let period_return = fixing / previous;
            if !period_return.is_finite() {
                return Err(PathPricerError::NonFiniteReturn {
                    instrument: INSTRUMENT,
                    underlying: 0,
                    sample,
                });
            }
            f(intrinsic(self.params.direction, period_return, strike) * discount);
            previous = fixing;
        }
        Ok(())
    }
}

impl<T: Float + Send + Sync> PathPricer<T, Trajectory<T>> for CliquetPathPricer<T> {
    fn evaluate(&self, sample: PathSample<'_, Trajectory<T>>) -> Result<T, PathPricerError> {
        evaluate_branches(sample, self.params.antithetic, INSTRUMENT, |path| {
            self.price_branch(path)
        })
    }
}

/// Accepts a bundle holding exactly one underlying.
impl<T: Float + Send + Sync> PathPricer<T, TrajectoryBundle<T>> for CliquetPathPricer<T> {
    fn evaluate(&self, sample: PathSample<'_, TrajectoryBundle<T>>) -> Result<T, PathPricerError> {
        evaluate_branches(sample, self.params.antithetic, INSTRUMENT, |bundle| {
            match bundle.as_slice() {
                [path] => self.price_branch(path),
                paths => Err(PathPricerError::UnderlyingCountMismatch {
                    instrument: INSTRUMENT,
                    expected: 1,
                    found: paths.len(),
                }),
            }
        })
    }
}
