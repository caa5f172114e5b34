//! Time-aligned collection of trajectories for multi-asset payoffs.

use super::{PathError, Trajectory};
use num_traits::Float;

/// Ordered collection of trajectories, one per underlying.
///
/// Every member shares the same time grid and reset dates; a bundle
/// violating this cannot be constructed.
///
/// # Examples
///
/// ```
/// use pricer_pricing::path::{Trajectory, TrajectoryBundle};
///
/// let a = Trajectory::new(vec![0.0, 1.0], vec![100.0, 120.0]).unwrap();
/// let b = Trajectory::new(vec![0.0, 1.0], vec![50.0, 80.0]).unwrap();
/// let bundle = TrajectoryBundle::new(vec![a, b]).unwrap();
///
/// assert_eq!(bundle.n_underlyings(), 2);
/// assert_eq!(bundle.terminal_prices().collect::<Vec<_>>(), vec![120.0, 80.0]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct TrajectoryBundle<T: Float> {
    paths: Vec<Trajectory<T>>,
}

impl<T: Float> TrajectoryBundle<T> {
    /// Creates a bundle, checking that all trajectories share one grid.
    ///
    /// # Errors
    ///
    /// - [`PathError::EmptyBundle`] if `paths` is empty
    /// - [`PathError::GridMismatch`] naming the first trajectory whose
    ///   timestamps or reset dates differ from the first one
    pub fn new(paths: Vec<Trajectory<T>>) -> Result<Self, PathError> {
        let first = paths.first().ok_or(PathError::EmptyBundle)?;
        if let Some(index) = paths.iter().position(|path| !first.shares_grid(path)) {
            return Err(PathError::GridMismatch { index });
        }
        Ok(Self { paths })
    }

    /// Number of underlyings.
    #[inline]
    pub fn n_underlyings(&self) -> usize {
        self.paths.len()
    }

    /// Trajectories in underlying order.
    #[inline]
    pub fn as_slice(&self) -> &[Trajectory<T>] {
        &self.paths
    }

    /// Trajectory of underlying `index`, if present.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Trajectory<T>> {
        self.paths.get(index)
    }

    /// Iterates over the trajectories in underlying order.
    pub fn iter(&self) -> std::slice::Iter<'_, Trajectory<T>> {
        self.paths.iter()
    }

    /// Shared time grid.
    #[inline]
    pub fn times(&self) -> &[f64] {
        self.paths[0].times()
    }

    /// Shared reset dates.
    #[inline]
    pub fn reset_indices(&self) -> &[usize] {
        self.paths[0].reset_indices()
    }

    /// Expiry spot of each underlying, in underlying order.
    pub fn terminal_prices(&self) -> impl Iterator<Item = T> + '_ {
        self.paths.iter().map(Trajectory::terminal)
    }

    /// Consumes the bundle, returning the trajectories.
    pub fn into_inner(self) -> Vec<Trajectory<T>> {
        self.paths
    }
}

impl<T: Float> From<Trajectory<T>> for TrajectoryBundle<T> {
    fn from(path: Trajectory<T>) -> Self {
        Self { paths: vec![path] }
    }
}

impl<'a, T: Float> IntoIterator for &'a TrajectoryBundle<T> {
    type Item = &'a Trajectory<T>;
    type IntoIter = std::slice::Iter<'a, Trajectory<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.iter()
    }
}
