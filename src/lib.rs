//! An arbitrary-precision binary fixed-point number, `longnum::Number`.
//!
//! `Number` is a signed value of the form `sign * 1.significand * 2^exponent`: a growable
//! sequence of 32-bit limbs carries the significand bits at a caller-controlled *precision*,
//! comparisons and the four rational operators work directly on that limb representation, and
//! division truncates bit-by-bit rather than rounding. See [`Number`] for the full API.
//!
//! ```
//! use longnum::Number;
//!
//! let a = Number::from_i64(22);
//! let b = Number::from_i64(7);
//! let pi_approx = a.checked_div(&b).unwrap();
//! assert!(pi_approx.to_string(10).starts_with("3.14"));
//! ```
//!
//! Module layout mirrors the shape of the underlying algorithm rather than one file per type:
//! [`significand`] is the copy-on-write limb buffer, [`number`] is construction and precision
//! control, and each arithmetic family (`add`, `shift`, `mul`, `div`, `cmp`, `bits`, `derived`,
//! `convert`, `parse`, `fmt`) gets its own module, following `dashu-float`'s layout.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod add;
mod bits;
mod cmp;
mod convert;
mod derived;
mod div;
mod error;
mod fmt;
mod helper_macros;
mod mul;
mod number;
mod parse;
#[cfg(feature = "serde")]
mod ser;
mod shift;
mod sign;
mod significand;

pub use error::{LongNumError, Result};
pub use number::{Number, DEFAULT_PRECISION};
pub use parse::from_binary_string;
#[cfg(feature = "std")]
pub use parse::from_string;
