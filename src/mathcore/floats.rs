//! `mathcore::floats` submodule implements helpers for floating point comparison.
//!
//! [`almost_equal`] function and [`EPSILON`] const are dealing with floating point equality.
//!

/// Constant that is used in floating point equality.
///
/// It represents amount of (relative) difference that is allowed for two `f32` values to still be considered
/// equal. Values that are close to zero are compared with it as absolute difference.
///
pub const EPSILON: f32 = 0.00001;
/// This function implements floating point equality for `ggsdl` crate.
///
/// It is used for implementing `PartialEq` on types that are based on float.
///
/// # Example
/// ```rust
/// # use ggsdl::mathcore::floats::almost_equal;
/// assert!(almost_equal(0.15 + 0.15, 0.1 + 0.2));
/// assert!(almost_equal(0.0, -0.0));
/// assert!(!almost_equal(1.0, 1.001));
/// ```
///
pub fn almost_equal(a: f32, b: f32) -> bool {
    if a == b {
        return true;
    }
    if !a.is_finite() || !b.is_finite() {
        return false;
    }

    let diff = (a - b).abs();
    let norm = (a.abs() + b.abs()).min(f32::MAX);
    diff <= (norm * EPSILON).max(EPSILON)
}

/// Returns whether value is close enough to zero to be treated as zero.
///
pub fn is_zero(value: f32) -> bool {
    almost_equal(value, 0.0)
}
