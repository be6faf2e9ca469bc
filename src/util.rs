//! Small comparison helpers that only rely on `PartialOrd` and subtraction.
//!
//! These intentionally avoid `Ord` and `Float` so that they work for every
//! [`Scalar`](crate::Scalar), including floating point types.

use std::ops::Sub;

use num_traits::Zero;

/// The larger of two values. Returns `second` if they compare equal.
pub fn max<T: PartialOrd>(first: T, second: T) -> T {
    if first > second {
        first
    } else {
        second
    }
}

/// The smaller of two values. Returns `first` if they compare equal.
pub fn min<T: PartialOrd>(first: T, second: T) -> T {
    if first <= second {
        first
    } else {
        second
    }
}

/// Order two values, returning `(min, max)`.
pub fn min_max<T: PartialOrd>(first: T, second: T) -> (T, T) {
    if first <= second {
        (first, second)
    } else {
        (second, first)
    }
}

/// Absolute value, for any type with a zero.
///
/// # Example
/// ```
/// assert_eq!(rated::util::abs(-3), 3);
/// assert_eq!(rated::util::abs(2.5f32), 2.5);
/// ```
pub fn abs<T>(value: T) -> T
where
    T: PartialOrd + Zero + Sub<Output = T>,
{
    if value < T::zero() {
        T::zero() - value
    } else {
        value
    }
}

/// Linear distance between two values. Order is unimportant.
///
/// # Example
/// ```
/// # use assert_approx_eq::assert_approx_eq;
/// assert_approx_eq!(rated::util::dist(350.0f64, 10.0), 340.0);
/// assert_approx_eq!(rated::util::dist(10.0f64, 350.0), 340.0);
/// ```
pub fn dist<T>(first: T, second: T) -> T
where
    T: Copy + PartialOrd + Sub<Output = T>,
{
    let (lo, hi) = min_max(first, second);

    hi - lo
}

/// Whether `value` lies in the closed range spanned by `first` and `second`.
/// The order of the bounds is unimportant.
///
/// # Example
/// ```
/// assert!(rated::util::in_range(5, 10, 0));
/// assert!(rated::util::in_range(10, 0, 10));
/// assert!(!rated::util::in_range(11, 0, 10));
/// ```
pub fn in_range<T>(value: T, first: T, second: T) -> bool
where
    T: Copy + PartialOrd,
{
    let (lo, hi) = min_max(first, second);

    value >= lo && value <= hi
}

/// Push `value` back to the nearest bound if it lies outside of the range
/// spanned by `first` and `second`.
pub fn clamp_to_range<T>(value: T, first: T, second: T) -> T
where
    T: Copy + PartialOrd,
{
    let (lo, hi) = min_max(first, second);

    if value > hi {
        hi
    } else if value < lo {
        lo
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ties_pick_documented_side() {
        assert_eq!(min_max(3, 3), (3, 3));
        assert_eq!(max(1, 2), 2);
        assert_eq!(min(1, 2), 1);
    }

    #[test]
    fn abs_of_zero_and_unsigned() {
        assert_eq!(abs(0i64), 0);
        assert_eq!(abs(7u8), 7);
        assert_eq!(abs(-0.5f64), 0.5);
    }

    #[test]
    fn range_checks_are_inclusive_and_unordered() {
        assert!(in_range(0.0, 0.0, 1.0));
        assert!(in_range(1.0, 1.0, 0.0));
        assert!(!in_range(-0.1, 1.0, 0.0));
        assert!(!in_range(f64::NAN, 0.0, 1.0));
    }

    #[test]
    fn clamp_pushes_to_nearest_bound() {
        assert_eq!(clamp_to_range(15, 10, 0), 10);
        assert_eq!(clamp_to_range(-5, 0, 10), 0);
        assert_eq!(clamp_to_range(4, 0, 10), 4);
    }
}
