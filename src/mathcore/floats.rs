//! `mathcore::floats` submodule implements several consts and functions that help in
//! work with `f64` type.
//!
//! [`floor_to_int`] function converts world-space coordinates into block coordinates.
//!
//! [`almost_equal`] function and [`EPSILON`] const are dealing with floating point equality.
//!

/// Floors value and converts it to `i32`.
///
/// Unlike plain `as` cast (which truncates towards zero), this function rounds negative values
/// down, so `-1.5` becomes `-2`.
/// Values that do not fit into `i32` saturate to `i32::MIN` or `i32::MAX` and NaN becomes `0`.
///
/// # Example
/// ```rust
/// # use modkit::mathcore::floats::floor_to_int;
/// assert_eq!(floor_to_int(1.5), 1);
/// assert_eq!(floor_to_int(-1.5), -2);
/// assert_eq!(floor_to_int(-0.0), 0);
/// ```
///
pub fn floor_to_int(value: f64) -> i32 {
    value.floor() as i32
}

/// Constant that is used in floating point equality.
///
/// It represents amount of relative difference that is allowed for two `f64` values to still be
/// considered equal.
///
pub const EPSILON: f64 = 1e-9;
/// This function implements floating point equality for `modkit` crate.
///
/// # Example
/// ```rust
/// # use modkit::mathcore::floats::almost_equal;
/// assert!(almost_equal(0.15 + 0.15, 0.1 + 0.2));
/// assert!(!almost_equal(0.75, 0.7500001));
/// ```
///
pub fn almost_equal(a: f64, b: f64) -> bool {
    if a == b {
        return true;
    }

    let diff = (a - b).abs();
    let norm = (a.abs() + b.abs()).min(f64::MAX);
    diff < (norm * EPSILON).max(f64::MIN_POSITIVE)
}
