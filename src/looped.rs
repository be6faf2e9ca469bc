use std::cmp::Ordering;

use tracing::trace;

use crate::error::{Error, Result};
use crate::method::{Direction, Motion, Scalar, Target, UpdateMethod};
use crate::util;

/// An update method for values that live on a circle, such as angles, where
/// going past `max` continues at `min` and vice versa.
///
/// Values outside of `[min, max]` are first wrapped back into the range. For
/// value targets, the method picks whichever way around the circle is
/// shorter, unless a direction override was given.
///
/// # Examples
///
/// Turn from 350° to 10° the short way, across 360°:
/// ```
/// # use assert_approx_eq::assert_approx_eq;
/// use rated::{Looped, UpdateMethod};
///
/// let method = Looped::towards(15.0f64, 10.0, 0.0, 360.0);
///
/// assert_approx_eq!(method.advance(350.0, 1.0), 5.0);
/// assert_eq!(method.advance(5.0, 1.0), 10.0);
/// ```
///
/// Spin forever:
/// ```
/// use rated::{Direction, Looped, UpdateMethod};
///
/// let method = Looped::moving(10, Direction::Increasing, 0, 100);
///
/// assert_eq!(method.advance(95, 1), 5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Looped<T> {
    motion: Motion<T>,
    min: T,
    max: T,
    direction_override: Option<Direction>,
}

impl<T: Scalar> Looped<T> {
    /// # Panics
    ///
    /// Panics unless `min < max` and a target value lies in `[min, max]`.
    /// See [`try_new`](#method.try_new) for a fallible version.
    pub fn new(rate: T, target: impl Into<Target<T>>, min: T, max: T) -> Self {
        Self::build_or_panic(Motion::new(rate, target), min, max, None)
    }

    /// Move towards `value`, taking the shorter way around.
    ///
    /// # Panics
    ///
    /// Panics unless `min < max` and `value` lies in `[min, max]`.
    pub fn towards(rate: T, value: T, min: T, max: T) -> Self {
        Self::new(rate, Target::Value(value), min, max)
    }

    /// Move around the circle in `direction` forever.
    ///
    /// # Panics
    ///
    /// Panics unless `min < max`.
    pub fn moving(rate: T, direction: Direction, min: T, max: T) -> Self {
        Self::new(rate, direction, min, max)
    }

    /// Move towards `value`, but always go around in `direction`, whether or
    /// not that is the shorter way.
    ///
    /// # Panics
    ///
    /// Panics unless `min < max` and `value` lies in `[min, max]`.
    pub fn with_override(rate: T, value: T, direction: Direction, min: T, max: T) -> Self {
        Self::build_or_panic(
            Motion::new(rate, Target::Value(value)),
            min,
            max,
            Some(direction),
        )
    }

    /// Like [`new`](#method.new), but returns an error for an empty range or
    /// a target value outside of it.
    pub fn try_new(rate: T, target: impl Into<Target<T>>, min: T, max: T) -> Result<Self> {
        let motion = Motion::new(rate, target);
        Self::check(&motion, min, max)?;

        Ok(Self::build(motion, min, max, None))
    }

    pub fn try_with_override(
        rate: T,
        value: T,
        direction: Direction,
        min: T,
        max: T,
    ) -> Result<Self> {
        let motion = Motion::new(rate, Target::Value(value));
        Self::check(&motion, min, max)?;

        Ok(Self::build(motion, min, max, Some(direction)))
    }

    /// Every incoming value is wrapped into `[min, max]`, so a target outside
    /// of it could never be reached.
    fn check(motion: &Motion<T>, min: T, max: T) -> Result<()> {
        // Also rejects incomparable bounds such as NaN.
        if min.partial_cmp(&max) != Some(Ordering::Less) {
            return Err(Error::EmptyRange);
        }

        match motion.target() {
            Target::Value(value) if !util::in_range(value, min, max) => {
                Err(Error::TargetOutOfRange)
            }
            _ => Ok(()),
        }
    }

    fn build_or_panic(
        motion: Motion<T>,
        min: T,
        max: T,
        direction_override: Option<Direction>,
    ) -> Self {
        if let Err(err) = Self::check(&motion, min, max) {
            panic!(
                "invalid looped method: {err} (min {min:?}, max {max:?}, target {:?})",
                motion.target()
            );
        }

        Self::build(motion, min, max, direction_override)
    }

    fn build(motion: Motion<T>, min: T, max: T, direction_override: Option<Direction>) -> Self {
        Looped {
            motion,
            min,
            max,
            direction_override,
        }
    }

    pub fn min(&self) -> T {
        self.min
    }

    pub fn max(&self) -> T {
        self.max
    }

    pub fn direction_override(&self) -> Option<Direction> {
        self.direction_override
    }

    pub fn is_override_enabled(&self) -> bool {
        self.direction_override.is_some()
    }

    /// Bring `value` back into `[min, max]`.
    ///
    /// A value past one bound continues from the other bound by the same
    /// amount. If that still leaves the range, the value is pushed to the
    /// nearest bound.
    ///
    /// # Example
    /// ```
    /// let method = rated::Looped::moving(1, rated::Direction::Increasing, 0, 100);
    ///
    /// assert_eq!(method.wrap(105), 5);
    /// assert_eq!(method.wrap(-5), 95);
    /// assert_eq!(method.wrap(250), 100);
    /// ```
    pub fn wrap(&self, value: T) -> T {
        let wrapped = if value > self.max {
            self.min + (value - self.max)
        } else if value < self.min {
            self.max - (self.min - value)
        } else {
            value
        };

        util::clamp_to_range(wrapped, self.min, self.max)
    }
}

impl<T: Scalar> UpdateMethod<T> for Looped<T> {
    fn motion(&self) -> &Motion<T> {
        &self.motion
    }

    fn motion_mut(&mut self) -> &mut Motion<T> {
        &mut self.motion
    }

    fn best_direction(&self, value: T, target: T) -> Direction {
        if let Some(direction) = self.direction_override {
            return direction;
        }

        // Either go straight there, or leave through one bound and come back
        // in through the other.
        let forward = util::dist(value, target);
        let backward = util::dist(util::min(value, target), self.min)
            + util::dist(util::max(value, target), self.max);

        let straight = if value <= target {
            Direction::Increasing
        } else {
            Direction::Decreasing
        };

        if forward <= backward {
            straight
        } else {
            straight.reversed()
        }
    }

    fn correct_overshoot(&self, result: T, original: T, _direction: Direction, target: T) -> T {
        if util::in_range(result, self.min, self.max) {
            return if util::in_range(target, original, result) {
                target
            } else {
                result
            };
        }

        // The step left the range through `exited` and continued from
        // `marker`, so it covered both of these segments.
        let (exited, marker) = if result > self.max {
            (self.max, self.min)
        } else {
            (self.min, self.max)
        };
        let wrapped = self.wrap(result);

        if util::in_range(target, original, exited) || util::in_range(target, wrapped, marker) {
            trace!(?original, ?result, ?target, "snapped to target across bound");
            target
        } else {
            trace!(?result, ?wrapped, "looped around");
            wrapped
        }
    }

    fn normalize(&self, value: T) -> T {
        self.wrap(value)
    }

    fn correct_directional(&self, result: T, _original: T, _direction: Direction) -> T {
        self.wrap(result)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Looped<T>
where
    T: Scalar + serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        #[serde(bound(deserialize = "T: Scalar + serde::Deserialize<'de>"))]
        struct Raw<T> {
            motion: Motion<T>,
            min: T,
            max: T,
            #[serde(default)]
            direction_override: Option<Direction>,
        }

        let raw = <Raw<T> as serde::Deserialize>::deserialize(deserializer)?;
        Looped::check(&raw.motion, raw.min, raw.max)
            .map_err(<D::Error as serde::de::Error>::custom)?;

        if raw.direction_override.is_some() && raw.motion.target().value().is_none() {
            return Err(serde::de::Error::custom(Error::OverrideWithoutValue));
        }

        Ok(Looped::build(
            raw.motion,
            raw.min,
            raw.max,
            raw.direction_override,
        ))
    }
}
