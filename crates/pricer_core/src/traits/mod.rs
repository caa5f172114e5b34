//! Core numeric traits.
//!
//! Path pricers are written once against [`Float`] and instantiated with
//! `f64` in production and `f32` where memory bandwidth matters.
//!
//! ## Important
//! Pricers are dispatched statically (enum-based). Do NOT wrap them in
//! `Box<dyn Trait>` inside hot Monte Carlo loops.

/// Generic floating-point trait for numeric computations.
///
/// # Examples
/// ```
/// use pricer_core::traits::Float;
///
/// fn discounted<T: Float>(amount: T, rate: T, time: T) -> T {
///     amount * (-rate * time).exp()
/// }
///
/// let pv: f64 = discounted(100.0, 0.05, 1.0);
/// assert!((pv - 95.1229).abs() < 1e-4);
/// ```
pub use num_traits::Float;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_trait_ratio() {
        fn ratio<T: Float>(a: T, b: T) -> T {
            a / b
        }

        assert_eq!(ratio(120.0_f64, 100.0), 1.2);
        assert!((ratio(80.0_f32, 50.0) - 1.6).abs() < 1e-6);
    }

    #[test]
    fn test_float_trait_non_finite_detection() {
        fn all_finite<T: Float>(xs: &[T]) -> bool {
            xs.iter().all(|x| x.is_finite())
        }

        assert!(all_finite(&[1.0_f64, 2.0]));
        assert!(!all_finite(&[1.0_f64, f64::NAN]));
        assert!(!all_finite(&[f64::INFINITY]));
    }
}
