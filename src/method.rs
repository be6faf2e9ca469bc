use std::fmt::Debug;

use num_traits::Signed;
use tracing::warn;

use crate::util;

/// The numeric types that values, rates and elapsed time can have.
///
/// This is implemented automatically for every signed type that is `Copy`,
/// partially ordered and supports basic arithmetic, e.g. `f32`, `f64`, `i32`.
/// Unsigned types are rejected: a decreasing step past zero, such as the
/// shorter way across the lower bound of a looped range, cannot be
/// represented.
///
/// ```compile_fail
/// use rated::{Looped, UpdateMethod};
///
/// Looped::towards(10u32, 350, 0, 360).advance(5, 1);
/// ```
///
/// Integer arithmetic is not checked. The magnitude of a rate must be
/// representable (`i32::MIN` is not), and so must `rate * elapsed` and the
/// value after a step.
pub trait Scalar: Copy + PartialOrd + Signed + Debug {}

impl<T> Scalar for T where T: Copy + PartialOrd + Signed + Debug {}

/// The two ways a value can move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Increasing,
    Decreasing,
}

impl Direction {
    /// The opposite direction.
    pub fn reversed(self) -> Self {
        match self {
            Direction::Increasing => Direction::Decreasing,
            Direction::Decreasing => Direction::Increasing,
        }
    }

    /// Move `value` by `magnitude` in this direction.
    pub fn apply<T: Scalar>(self, value: T, magnitude: T) -> T {
        match self {
            Direction::Increasing => value + magnitude,
            Direction::Decreasing => value - magnitude,
        }
    }
}

/// Where an [`UpdateMethod`](trait.UpdateMethod.html) moves a value.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Target<T> {
    /// Keep moving in this direction forever.
    Direction(Direction),

    /// Move towards this value, never passing it, and stay there once it is
    /// reached.
    Value(T),
}

impl<T: Copy> Target<T> {
    /// The target value, if this is a value target.
    pub fn value(&self) -> Option<T> {
        match *self {
            Target::Value(value) => Some(value),
            Target::Direction(_) => None,
        }
    }

    /// The target direction, if this is a directional target.
    pub fn direction(&self) -> Option<Direction> {
        match *self {
            Target::Direction(direction) => Some(direction),
            Target::Value(_) => None,
        }
    }
}

impl<T> From<Direction> for Target<T> {
    fn from(direction: Direction) -> Self {
        Target::Direction(direction)
    }
}

/// The state shared by every update method: a non-negative rate of change per
/// unit of time, and a target that is fixed at construction.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Motion<T> {
    rate: T,
    target: Target<T>,
}

impl<T: Scalar> Motion<T> {
    /// Only the magnitude of `rate` is used.
    pub fn new(rate: T, target: impl Into<Target<T>>) -> Self {
        Motion {
            rate: util::abs(rate),
            target: target.into(),
        }
    }

    pub fn rate(&self) -> T {
        self.rate
    }

    /// Change the rate. Only the magnitude of `rate` is used, which must be
    /// representable for integer types.
    pub fn set_rate(&mut self, rate: T) {
        self.rate = util::abs(rate);
    }

    pub fn target(&self) -> Target<T> {
        self.target
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Motion<T>
where
    T: Scalar + serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Raw<T> {
            rate: T,
            target: Target<T>,
        }

        let raw = <Raw<T> as serde::Deserialize>::deserialize(deserializer)?;

        Ok(Motion::new(raw.rate, raw.target))
    }
}

/// An `UpdateMethod` decides how a value responds to the passing of time.
///
/// Based on its rate, it moves the value on every update in the direction of
/// its target, which is either a specific value or an endless direction.
///
/// Implementors provide the state via [`motion`](#tymethod.motion), and
/// specialize the two decisions that depend on the shape of the domain:
/// which way to go to reach a target value, and how to correct a step that
/// passed it. The hooks [`normalize`](#method.normalize) and
/// [`correct_directional`](#method.correct_directional) default to doing
/// nothing.
///
/// The trait is object safe, so value holders can share a method as
/// `&dyn UpdateMethod<T>`.
pub trait UpdateMethod<T: Scalar> {
    fn motion(&self) -> &Motion<T>;

    fn motion_mut(&mut self) -> &mut Motion<T>;

    /// The direction that brings `value` to `target` the best way. `value`
    /// has already been normalized.
    fn best_direction(&self, value: T, target: T) -> Direction;

    /// Fix up the tentative `result` of a step from `original` in `direction`
    /// so that it does not pass `target`.
    fn correct_overshoot(&self, result: T, original: T, direction: Direction, target: T) -> T;

    /// Make `value` legal for this method's domain.
    fn normalize(&self, value: T) -> T {
        value
    }

    /// Fix up the tentative `result` of a step for a directional target.
    fn correct_directional(&self, result: T, _original: T, _direction: Direction) -> T {
        result
    }

    fn rate(&self) -> T {
        self.motion().rate()
    }

    /// The rate may be changed at any time. Only its magnitude is used, so
    /// for integers it must not be `MIN`.
    fn set_rate(&mut self, rate: T) {
        self.motion_mut().set_rate(rate);
    }

    fn target(&self) -> Target<T> {
        self.motion().target()
    }

    fn has_target_value(&self) -> bool {
        matches!(self.target(), Target::Value(_))
    }

    fn has_target_direction(&self) -> bool {
        matches!(self.target(), Target::Direction(_))
    }

    fn target_value(&self) -> Option<T> {
        self.target().value()
    }

    fn target_direction(&self) -> Option<Direction> {
        self.target().direction()
    }

    /// Compute what `value` becomes after `elapsed` units of time.
    ///
    /// `elapsed` is expected to be non-negative; negative durations are
    /// treated as zero.
    ///
    /// # Example
    /// ```
    /// # use assert_approx_eq::assert_approx_eq;
    /// use rated::{Linear, UpdateMethod};
    ///
    /// let method = Linear::towards(5.0f64, 10.0);
    ///
    /// assert_approx_eq!(method.advance(0.0, 1.0), 5.0);
    /// assert_approx_eq!(method.advance(9.0, 1.0), 10.0);
    /// ```
    fn advance(&self, value: T, elapsed: T) -> T {
        let original = self.normalize(value);

        let elapsed = if elapsed < T::zero() {
            warn!(?elapsed, "negative elapsed time, treating it as zero");
            T::zero()
        } else {
            elapsed
        };
        let magnitude = self.rate() * elapsed;

        match self.target() {
            Target::Direction(direction) => {
                let result = direction.apply(original, magnitude);

                self.correct_directional(result, original, direction)
            }
            Target::Value(target) => {
                let direction = self.best_direction(original, target);
                let result = direction.apply(original, magnitude);

                self.correct_overshoot(result, original, direction, target)
            }
        }
    }

    /// Whether this method has a target value and `value` has reached it.
    ///
    /// This is always false for directional targets.
    fn is_finished(&self, value: T) -> bool {
        match self.target() {
            Target::Value(target) => value == target,
            Target::Direction(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_is_stored_as_magnitude() {
        let mut motion = Motion::new(-2.0f64, Direction::Increasing);
        assert_eq!(motion.rate(), 2.0);

        motion.set_rate(-0.25);
        assert_eq!(motion.rate(), 0.25);
    }

    #[test]
    fn target_accessors_match_kind() {
        let value: Target<i32> = Target::Value(3);
        assert_eq!(value.value(), Some(3));
        assert_eq!(value.direction(), None);

        let direction: Target<i32> = Direction::Decreasing.into();
        assert_eq!(direction.value(), None);
        assert_eq!(direction.direction(), Some(Direction::Decreasing));
    }

    #[test]
    fn direction_apply_and_reverse() {
        assert_eq!(Direction::Increasing.apply(3, 2), 5);
        assert_eq!(Direction::Decreasing.apply(3, 2), 1);
        assert_eq!(Direction::Increasing.reversed(), Direction::Decreasing);
        assert_eq!(Direction::Decreasing.reversed(), Direction::Increasing);
    }

    #[test]
    fn largest_integer_rates_are_representable() {
        let mut motion = Motion::new(-i32::MAX, Direction::Increasing);
        assert_eq!(motion.rate(), i32::MAX);

        motion.set_rate(i32::MIN + 1);
        assert_eq!(motion.rate(), i32::MAX);

        let method = crate::Linear::moving(-i32::MAX, Direction::Decreasing);
        assert_eq!(method.advance(i32::MAX, 1), 0);
        assert_eq!(method.advance(0, 1), -i32::MAX);
    }
}
