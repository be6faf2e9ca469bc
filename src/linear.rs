use tracing::trace;

use crate::method::{Direction, Motion, Scalar, Target, UpdateMethod};
use crate::util;

/// The most commonplace update method. It works on a number line where
/// values can go on forever in both directions.
///
/// This contrasts with [`Looped`](struct.Looped.html), where one end of a
/// range leads to the other.
///
/// # Examples
///
/// Move at a constant speed forever:
/// ```
/// # use assert_approx_eq::assert_approx_eq;
/// use rated::{Direction, Linear, UpdateMethod};
///
/// let method = Linear::moving(0.5f64, Direction::Decreasing);
///
/// assert_approx_eq!(method.advance(1.0, 5.0), -1.5);
/// assert!(!method.is_finished(-1.5));
/// ```
///
/// Approach a value and stop there:
/// ```
/// use rated::{Linear, UpdateMethod};
///
/// let method = Linear::towards(5.0, 10.0);
///
/// assert_eq!(method.advance(9.0, 1.0), 10.0);
/// assert!(method.is_finished(10.0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(transparent, bound(deserialize = "T: Scalar + serde::Deserialize<'de>"))
)]
pub struct Linear<T> {
    motion: Motion<T>,
}

impl<T: Scalar> Linear<T> {
    /// Only the magnitude of `rate` is used.
    pub fn new(rate: T, target: impl Into<Target<T>>) -> Self {
        Linear {
            motion: Motion::new(rate, target),
        }
    }

    /// Move towards `value` and stop once it is reached.
    pub fn towards(rate: T, value: T) -> Self {
        Self::new(rate, Target::Value(value))
    }

    /// Move in `direction` forever.
    pub fn moving(rate: T, direction: Direction) -> Self {
        Self::new(rate, direction)
    }
}

impl<T: Scalar> UpdateMethod<T> for Linear<T> {
    fn motion(&self) -> &Motion<T> {
        &self.motion
    }

    fn motion_mut(&mut self) -> &mut Motion<T> {
        &mut self.motion
    }

    /// There is only one right direction: up if the target is greater, down
    /// otherwise.
    fn best_direction(&self, value: T, target: T) -> Direction {
        if target > value {
            Direction::Increasing
        } else {
            Direction::Decreasing
        }
    }

    /// If the step passed over the target, stop at the target instead.
    fn correct_overshoot(&self, result: T, original: T, _direction: Direction, target: T) -> T {
        if util::in_range(target, original, result) {
            if result != target {
                trace!(?original, ?result, ?target, "snapped to target");
            }
            target
        } else {
            result
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use super::*;

    #[test]
    fn directional_moves_by_rate_times_elapsed() {
        let up = Linear::moving(0.5f64, Direction::Increasing);
        let down = Linear::moving(0.5f64, Direction::Decreasing);

        assert_approx_eq!(up.advance(1.0, 5.0), 3.5);
        assert_approx_eq!(down.advance(3.5, 5.0), 1.0);
        assert_eq!(Linear::moving(4, Direction::Increasing).advance(-100, 0), -100);

        for value in [-1e6, -1.0, 0.0, 42.0, 1e9] {
            assert!(!up.is_finished(value));
            assert!(!down.is_finished(value));
        }
    }

    #[test]
    fn directional_is_unbounded() {
        let up = Linear::moving(1000, Direction::Increasing);
        let mut value = 0;

        for _ in 0..10 {
            value = up.advance(value, 3);
        }

        assert_eq!(value, 30_000);
    }

    #[test]
    fn value_target_approaches_without_passing() {
        let method = Linear::towards(0.5f64, 10.0);
        let mut value = 1.0;

        value = method.advance(value, 3.0);
        assert_approx_eq!(value, 2.5);
        value = method.advance(value, 3.0);
        assert_approx_eq!(value, 4.0);
        value = method.advance(value, 3.0);
        assert_approx_eq!(value, 5.5);

        for _ in 0..10 {
            value = method.advance(value, 3.0);
            assert!(value <= 10.0);
        }

        assert_eq!(value, 10.0);
        assert!(method.is_finished(value));
    }

    #[test]
    fn overshoot_snaps_exactly_to_target() {
        let method = Linear::towards(5.0, 10.0);

        assert_eq!(method.advance(9.0, 1.0), 10.0);
        assert_eq!(method.advance(11.0, 1.0), 10.0);
    }

    #[test]
    fn approaches_from_above() {
        let method = Linear::towards(2, -3);

        assert_eq!(method.advance(5, 1), 3);
        assert_eq!(method.advance(3, 2), -1);
        assert_eq!(method.advance(-1, 2), -3);
    }

    #[test]
    fn reached_target_is_idempotent() {
        let method = Linear::towards(7.25, 10.0);

        for elapsed in [0.0, 0.001, 1.0, 1e6] {
            assert_eq!(method.advance(10.0, elapsed), 10.0);
        }
        assert!(method.is_finished(10.0));
    }

    #[test]
    fn tie_breaks_towards_decreasing() {
        let method = Linear::towards(1.0, 4.0);

        assert_eq!(method.best_direction(4.0, 4.0), Direction::Decreasing);
        assert_eq!(method.best_direction(3.0, 4.0), Direction::Increasing);
    }

    #[test]
    fn negative_rate_and_elapsed() {
        let mut method = Linear::moving(-2.0f64, Direction::Increasing);
        assert_eq!(method.rate(), 2.0);

        method.set_rate(-3.0);
        assert_approx_eq!(method.advance(0.0, 1.0), 3.0);
        assert_eq!(method.advance(1.0, -5.0), 1.0);
    }

    #[test]
    fn accessors_report_target_kind() {
        let towards = Linear::towards(1.0, 2.0);
        assert!(towards.has_target_value());
        assert!(!towards.has_target_direction());
        assert_eq!(towards.target_value(), Some(2.0));
        assert_eq!(towards.target_direction(), None);

        let moving = Linear::<f64>::moving(1.0, Direction::Increasing);
        assert!(moving.has_target_direction());
        assert_eq!(moving.target_direction(), Some(Direction::Increasing));
        assert_eq!(moving.target_value(), None);
    }

    #[test]
    fn converges_exactly_for_many_rates() {
        let rates = [0.1f64, 0.3, 0.7, 1.0 / 3.0, 2.5, 9.99];
        let elapsed = [0.016, 1.0 / 60.0, 0.1, 0.333, 1.7];

        for &rate in &rates {
            for &dt in &elapsed {
                for &(start, target) in &[(0.0, 1.0), (1.0, 0.0), (-3.3, 7.7), (100.0, -0.1)] {
                    let method = Linear::towards(rate, target);
                    let mut value = start;
                    let mut ticks = 0;

                    while !method.is_finished(value) {
                        value = method.advance(value, dt);
                        ticks += 1;
                        assert!(ticks < 100_000, "no convergence for rate {rate}, dt {dt}");
                    }

                    assert_eq!(value, target);
                }
            }
        }
    }
}
