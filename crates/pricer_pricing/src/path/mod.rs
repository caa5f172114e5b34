//! Simulated paths consumed by the path pricers.
//!
//! Paths are produced by an external generator and borrowed read-only by
//! the pricers for the duration of a single evaluation.
//!
//! # Key Components
//!
//! - [`Trajectory`]: Price samples of one underlying on a time grid, with
//!   optional reset dates
//! - [`TrajectoryBundle`]: One trajectory per underlying on a shared grid
//! - [`LogReturnPath`]: Drift/diffusion log-return representation that
//!   yields both antithetic branches
//! - [`PathError`]: Structural validation failures

mod bundle;
mod error;
mod log_return;
mod trajectory;

pub use bundle::TrajectoryBundle;
pub use error::PathError;
pub use log_return::LogReturnPath;
pub use trajectory::Trajectory;
