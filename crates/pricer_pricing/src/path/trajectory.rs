//! Single-asset simulated trajectory.

use super::PathError;
use num_traits::Float;

/// One simulated price path for a single underlying.
///
/// Samples are `(timestamp, price)` pairs on a strictly increasing grid.
/// The first sample is the inception spot and the last one the expiry spot;
/// any subset of the samples in between may be marked as reset dates.
///
/// Only the time grid and reset schedule are validated on construction.
/// Prices are checked by the pricers that read them, so that a generator
/// producing NaN surfaces as a pricing error naming the sample.
///
/// # Examples
///
/// ```
/// use pricer_pricing::path::Trajectory;
///
/// let path = Trajectory::with_resets(
///     vec![0.0, 0.5, 1.0],
///     vec![100.0, 110.0, 99.0],
///     vec![1],
/// )
/// .unwrap();
///
/// assert_eq!(path.inception(), 100.0);
/// assert_eq!(path.terminal(), 99.0);
/// assert_eq!(path.n_periods(), 2);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Trajectory<T: Float> {
    times: Vec<f64>,
    prices: Vec<T>,
    resets: Vec<usize>,
}

impl<T: Float> Trajectory<T> {
    /// Creates a trajectory without reset dates.
    ///
    /// # Errors
    ///
    /// Returns [`PathError`] if there are fewer than two samples, the
    /// lengths differ, or the time grid is not finite and strictly increasing.
    pub fn new(times: Vec<f64>, prices: Vec<T>) -> Result<Self, PathError> {
        Self::with_resets(times, prices, Vec::new())
    }

    /// Creates a trajectory with the given reset sample indices.
    ///
    /// Reset indices must be strictly increasing and refer to intermediate
    /// samples (neither inception nor expiry).
    pub fn with_resets(
        times: Vec<f64>,
        prices: Vec<T>,
        resets: Vec<usize>,
    ) -> Result<Self, PathError> {
        if times.len() != prices.len() {
            return Err(PathError::LengthMismatch {
                times: times.len(),
                prices: prices.len(),
            });
        }
        validate_time_grid(&times)?;
        validate_resets(&resets, times.len())?;
        Ok(Self {
            times,
            prices,
            resets,
        })
    }

    /// Creates a trajectory on a uniform grid `0, dt, ..., maturity`.
    pub fn uniform(maturity: f64, prices: Vec<T>) -> Result<Self, PathError> {
        if prices.len() < 2 {
            return Err(PathError::TooShort { len: prices.len() });
        }
        let dt = maturity / (prices.len() - 1) as f64;
        let times = (0..prices.len()).map(|i| i as f64 * dt).collect();
        Self::new(times, prices)
    }

    /// Returns a copy of this trajectory with the given reset indices.
    pub fn with_reset_indices(self, resets: Vec<usize>) -> Result<Self, PathError> {
        validate_resets(&resets, self.times.len())?;
        Ok(Self { resets, ..self })
    }

    /// Assembles a trajectory from parts already validated by the caller.
    pub(crate) fn from_validated_parts(times: Vec<f64>, prices: Vec<T>, resets: Vec<usize>) -> Self {
        debug_assert_eq!(times.len(), prices.len());
        Self {
            times,
            prices,
            resets,
        }
    }

    /// Number of samples, inception and expiry included.
    #[inline]
    pub fn n_samples(&self) -> usize {
        self.prices.len()
    }

    /// Time grid.
    #[inline]
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Price series.
    #[inline]
    pub fn prices(&self) -> &[T] {
        &self.prices
    }

    /// Sample indices marked as reset dates.
    #[inline]
    pub fn reset_indices(&self) -> &[usize] {
        &self.resets
    }

    /// Inception spot.
    #[inline]
    pub fn inception(&self) -> T {
        self.prices[0]
    }

    /// Expiry spot.
    #[inline]
    pub fn terminal(&self) -> T {
        self.prices[self.prices.len() - 1]
    }

    /// Number of reset periods: one per reset date plus the final period
    /// ending at expiry.
    #[inline]
    pub fn n_periods(&self) -> usize {
        self.resets.len() + 1
    }

    /// Sample indices of the fixing dates: inception, each reset, expiry.
    pub fn fixing_indices(&self) -> impl Iterator<Item = usize> + '_ {
        std::iter::once(0)
            .chain(self.resets.iter().copied())
            .chain(std::iter::once(self.prices.len() - 1))
    }

    /// Returns whether `other` has the same time grid and reset dates.
    pub fn shares_grid(&self, other: &Self) -> bool {
        self.times == other.times && self.resets == other.resets
    }
}

pub(super) fn validate_time_grid(times: &[f64]) -> Result<(), PathError> {
    if times.len() < 2 {
        return Err(PathError::TooShort { len: times.len() });
    }
    for (index, &time) in times.iter().enumerate() {
        if !time.is_finite() {
            return Err(PathError::NonFiniteTime { index });
        }
        if index > 0 && time <= times[index - 1] {
            return Err(PathError::NonIncreasingTime {
                index,
                time,
                previous: times[index - 1],
            });
        }
    }
    Ok(())
}

pub(super) fn validate_resets(resets: &[usize], len: usize) -> Result<(), PathError> {
    let mut previous: Option<usize> = None;
    for &index in resets {
        if index == 0 || index + 1 >= len {
            return Err(PathError::ResetOutOfRange { index, len });
        }
        if let Some(previous) = previous {
            if index <= previous {
                return Err(PathError::UnorderedReset { index, previous });
            }
        }
        previous = Some(index);
    }
    Ok(())
}
