//! Mathematical primitives shared by every pricer.
//!
//! - `payoff`: Intrinsic value of a vanilla exercise

pub mod payoff;
