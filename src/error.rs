//! Error type returned by fallible [`Number`](crate::Number) operations.
//!
//! Following the style of `dashu-float`'s `error.rs`, this crate reports recoverable failures
//! through a plain enum with a hand-written [`core::fmt::Display`] impl rather than pulling in
//! an error-derive crate, so the type stays usable without `std`. Invariant violations (a carry
//! that should never exceed 2, an out-of-bounds limb index) are bugs, not [`LongNumError`]
//! values, and remain `assert!`/`debug_assert!` panics at their call site.

use core::fmt;

/// The four ways a [`Number`](crate::Number) operation can fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LongNumError {
    /// Division where the divisor is exactly zero.
    DivisionByZero,
    /// `to_int` was asked to extract a magnitude that does not fit in an `i32`.
    Overflow,
    /// A textual representation could not be parsed at the requested base.
    InvalidNumeric {
        /// The text that failed to parse, captured for the error message.
        input: alloc::string::String,
    },
    /// A bit-level access addressed a position this representation cannot express.
    OutOfRange,
}

impl fmt::Display for LongNumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LongNumError::DivisionByZero => f.write_str("division by zero"),
            LongNumError::Overflow => f.write_str("overflow"),
            LongNumError::InvalidNumeric { input } => {
                write!(f, "invalid numeric string: \"{input}\"")
            }
            LongNumError::OutOfRange => f.write_str("bit position out of range"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LongNumError {}

/// Shorthand for `Result<T, LongNumError>`, used throughout the public API.
pub type Result<T> = core::result::Result<T, LongNumError>;
