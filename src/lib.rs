//! Rated moves numeric values at a fixed *rate* as time passes.
//! The intended application is in game programming, where you often have a
//! value (a position, a volume, an angle) that should change smoothly over a
//! number of frames: either forever in one direction, or until it reaches a
//! target.
//!
//! An [`UpdateMethod`](trait.UpdateMethod.html) holds a rate and a target, and
//! computes the next value from the current value and the elapsed time. It
//! never overshoots a target value: the last step lands on it exactly.
//!
//! Two methods are provided:
//! - [`Linear`](struct.Linear.html) for values on an unbounded number line.
//! - [`Looped`](struct.Looped.html) for values on a circle, such as angles,
//!   where going past one end of the range continues at the other end, and the
//!   shorter way around is taken.
//!
//! Methods are stateless with respect to the values they update. The caller
//! owns the value and calls `value = method.advance(value, dt)` on every
//! tick, or lets an [`UpdatedValue`](struct.UpdatedValue.html) do this, which
//! can also be paused and grouped with others in an
//! [`UpdatedList`](struct.UpdatedList.html).
//!
//! ## Examples
//!
//! ```rust
//! # use assert_approx_eq::assert_approx_eq;
//! use rated::{Direction, Linear, Looped, UpdateMethod};
//!
//! // Move towards 10.0 at 0.5 units per second
//! let towards = Linear::towards(0.5f64, 10.0);
//!
//! let mut value = 1.0;
//! value = towards.advance(value, 3.0);
//! assert_approx_eq!(value, 2.5);
//!
//! // The target is never passed, and once it is reached, it is kept
//! value = towards.advance(value, 1000.0);
//! assert_eq!(value, 10.0);
//! assert!(towards.is_finished(value));
//!
//! // Rotate an angle in degrees, forever
//! let spin = Looped::moving(90.0f64, Direction::Increasing, 0.0, 360.0);
//! assert_approx_eq!(spin.advance(300.0, 1.0), 30.0);
//! ```
//!
//! ## Logging
//!
//! Wrapping and snapping decisions are reported as `tracing` events at trace
//! level, installing methods at debug level. The library never installs a
//! subscriber.
//!
//! ## Features
//!
//! - `serde`: `Serialize` and `Deserialize` for the methods and their targets,
//!   so that they can be read from configuration. Deserializing a `Looped`
//!   checks its range.

pub mod error;
mod linear;
mod looped;
mod method;
pub mod updated;
pub mod util;

pub use error::{Error, Result};
pub use linear::Linear;
pub use looped::Looped;
pub use method::{Direction, Motion, Scalar, Target, UpdateMethod};
pub use updated::{Accessor, Handle, Owned, Slot, Updated, UpdatedList, UpdatedValue};
