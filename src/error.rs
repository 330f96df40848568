//! Uniform error reporting for every fallible operation in this crate.
//!
//! The reference this crate is built from reports overflow and invalid input through a mix of
//! sentinel return values and a process-wide `errno`-style side channel. Rust's sum types make
//! that unnecessary: every fallible routine here returns its outcome through [`Outcome`] (or a
//! plain [`Result`] when there is no meaningful partial value), never through a side channel and
//! never by panicking.

use core::fmt::{self, Display};

/// The two ways a calendar or time-scale operation can fail.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Error {
    /// The mathematically correct result does not fit the destination type.
    Range,
    /// The input does not describe a real date, time or grammar-conforming string.
    Invalid,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Range => "value out of representable range",
            Self::Invalid => "invalid calendar or time input",
        })
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// The result of an operation that can saturate instead of simply failing.
///
/// Overflow-producing operations in this crate return [`Outcome::Range`] carrying the *saturated*
/// value alongside the error, so a caller that only wants a best-effort clamp can call
/// [`Outcome::saturating_value`] without inspecting the error at all, while a caller that cares
/// can match on the variant or use [`Outcome::ok`] to fall back to [`Result`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Outcome<T> {
    /// The operation produced an exact result.
    Ok(T),
    /// The mathematical result overflowed; `T` is the saturated clamp (an extreme of the type).
    Range(T),
    /// The input was not a valid date/time to begin with; there is no sensible value.
    Invalid,
}

impl<T> Outcome<T> {
    /// The value to use if the caller doesn't care whether it was saturated.
    #[must_use]
    pub fn saturating_value(self) -> Option<T> {
        match self {
            Self::Ok(v) | Self::Range(v) => Some(v),
            Self::Invalid => None,
        }
    }

    /// Drop the saturated value on overflow, keeping only the error classification.
    #[must_use]
    pub fn ok(self) -> Result<T, Error> {
        match self {
            Self::Ok(v) => Ok(v),
            Self::Range(_) => Err(Error::Range),
            Self::Invalid => Err(Error::Invalid),
        }
    }

    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }
}
