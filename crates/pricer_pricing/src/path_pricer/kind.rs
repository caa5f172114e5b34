//! Closed set of path pricers behind a single dispatch point.

use super::{
    BasketParams, BasketPathPricer, CliquetParams, CliquetPathPricer, PathPricer, PathPricerError,
    PathSample,
};
use crate::path::{Trajectory, TrajectoryBundle};
use num_traits::Float;

/// Contract terms for any supported instrument.
///
/// With the `serde` feature, a driver can read terms from its own
/// configuration as internally tagged JSON or TOML:
///
/// ```text
/// { "instrument": "basket", "direction": "call",
///   "reference_prices": [100.0, 50.0], "strike": 110.0, "discount": 0.95 }
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "instrument", rename_all = "lowercase"))]
pub enum ContractTerms<T> {
    /// Best-of-basket terms
    Basket(BasketParams<T>),
    /// Cliquet terms
    Cliquet(CliquetParams<T>),
}

/// Path pricer selected at construction time.
///
/// Enum-based static dispatch keeps the per-sample call free of virtual
/// dispatch in the Monte Carlo loop.
///
/// # Examples
///
/// ```
/// use pricer_core::types::OptionDirection;
/// use pricer_pricing::path::Trajectory;
/// use pricer_pricing::path_pricer::{CliquetParams, ContractTerms, PathPricer, PathPricerKind};
///
/// let pricer: PathPricerKind<f64> = PathPricerKind::from_terms(ContractTerms::Cliquet(CliquetParams::new(
///     OptionDirection::Call,
///     100.0,
///     0.0,
///     vec![1.0],
/// )))
/// .unwrap();
///
/// assert_eq!(pricer.instrument(), "cliquet");
/// let path = Trajectory::new(vec![0.0, 1.0], vec![100.0, 104.0]).unwrap();
/// assert!((pricer.evaluate_path(&path).unwrap() - 0.04).abs() < 1e-12);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum PathPricerKind<T: Float> {
    /// European best-of-basket
    Basket(BasketPathPricer<T>),
    /// Periodic reset option
    Cliquet(CliquetPathPricer<T>),
}

impl<T: Float> PathPricerKind<T> {
    /// Builds the pricer matching `terms`.
    ///
    /// # Errors
    ///
    /// Propagates parameter validation failures.
    pub fn from_terms(terms: ContractTerms<T>) -> Result<Self, PathPricerError> {
        match terms {
            ContractTerms::Basket(params) => BasketPathPricer::new(params).map(Self::Basket),
            ContractTerms::Cliquet(params) => CliquetPathPricer::new(params).map(Self::Cliquet),
        }
    }

    /// Instrument name used in logs and errors.
    pub fn instrument(&self) -> &'static str {
        match self {
            PathPricerKind::Basket(_) => "basket",
            PathPricerKind::Cliquet(_) => "cliquet",
        }
    }

    /// Whether samples must carry an antithetic branch.
    pub fn is_antithetic(&self) -> bool {
        match self {
            PathPricerKind::Basket(pricer) => pricer.is_antithetic(),
            PathPricerKind::Cliquet(pricer) => pricer.is_antithetic(),
        }
    }
}

impl<T: Float> From<BasketPathPricer<T>> for PathPricerKind<T> {
    fn from(pricer: BasketPathPricer<T>) -> Self {
        PathPricerKind::Basket(pricer)
    }
}

impl<T: Float> From<CliquetPathPricer<T>> for PathPricerKind<T> {
    fn from(pricer: CliquetPathPricer<T>) -> Self {
        PathPricerKind::Cliquet(pricer)
    }
}

impl<T: Float + Send + Sync> PathPricer<T, Trajectory<T>> for PathPricerKind<T> {
    #[inline]
    fn evaluate(&self, sample: PathSample<'_, Trajectory<T>>) -> Result<T, PathPricerError> {
        match self {
            PathPricerKind::Basket(pricer) => pricer.evaluate(sample),
            PathPricerKind::Cliquet(pricer) => pricer.evaluate(sample),
        }
    }
}

impl<T: Float + Send + Sync> PathPricer<T, TrajectoryBundle<T>> for PathPricerKind<T> {
    #[inline]
    fn evaluate(&self, sample: PathSample<'_, TrajectoryBundle<T>>) -> Result<T, PathPricerError> {
        match self {
            PathPricerKind::Basket(pricer) => pricer.evaluate(sample),
            PathPricerKind::Cliquet(pricer) => pricer.evaluate(sample),
        }
    }
}
