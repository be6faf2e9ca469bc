use thiserror::Error;

/// Errors returned by the fallible constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The bounds of a looped domain do not satisfy `min < max`.
    #[error("looped range is empty: min must be strictly less than max")]
    EmptyRange,

    /// A looped method was given a target value outside of `[min, max]`.
    #[error("target value lies outside of the looped range")]
    TargetOutOfRange,

    /// A direction override was given for a method that has no target value.
    #[error("a direction override requires a value target")]
    OverrideWithoutValue,
}

pub type Result<T> = std::result::Result<T, Error>;
