//! Core financial and error types.
//!
//! This module provides:
//! - `option`: Option direction (Call / Put)
//! - `error`: Error categories surfaced to Monte Carlo drivers
//!
//! # Re-exports
//!
//! - [`OptionDirection`] from `option`
//! - [`PricingError`] from `error`

pub mod error;
pub mod option;

pub use error::PricingError;
pub use option::OptionDirection;
