//! Derived operations built atop the core arithmetic: `pow`, `truncate`, `frac`, `round`,
//! `abs`, `to_int`. Grounded in `LongNum::pow`/`truncate`/`frac`/`round`/`abs`/`to_int`
//! (`examples/original_source/src/longnum.cpp`).

use crate::error::{LongNumError, Result};
use crate::number::Number;

impl Number {
    /// Raises `self` to a non-negative integer power via binary exponentiation
    /// (square-and-multiply). `pow(0)` is `1` at `self`'s own precision.
    pub fn pow(&self, mut e: u32) -> Number {
        let mut base = self.clone();
        let mut result = Number::from_i64_with_precision(1, self.precision());
        while e != 0 {
            if e & 1 != 0 {
                result *= base.clone();
            }
            base *= base.clone();
            e >>= 1;
        }
        result
    }

    /// Zeroes out every bit below the binary point.
    ///
    /// The original source returns a bare `0` here for `exponent() < 0`, which - going through
    /// the only converting constructor available in C++ - produces a zero at that
    /// constructor's *default* precision rather than `self.precision()`. Returning
    /// `Number::zero_with_precision(self.precision())` instead keeps the stated contract
    /// ("setting precision to `max(0, exponent)` then restoring the original precision")
    /// exact even in the degenerate case, rather than silently discarding the caller's
    /// precision.
    pub fn truncate(&self) -> Number {
        match self.exponent() {
            None => Number::zero_with_precision(self.precision()),
            Some(exponent) if exponent < 0 => Number::zero_with_precision(self.precision()),
            Some(exponent) => {
                let original_precision = self.precision();
                self.clone()
                    .with_precision(exponent as usize)
                    .with_precision(original_precision)
            }
        }
    }

    /// `self - self.truncate()`: the fractional remainder.
    pub fn frac(&self) -> Number {
        self.clone() - self.truncate()
    }

    /// Rounds to the nearest integer, ties rounding away from zero (matching the original's
    /// `frac() >= 0.5` / `frac() <= -0.5` comparisons).
    pub fn round(&self) -> Number {
        let mut result = self.truncate();
        let half = Number::from_f64_with_precision(0.5, self.precision());
        let zero = Number::zero_with_precision(self.precision());
        let one = Number::from_i64_with_precision(1, self.precision());
        if *self > zero && self.frac() >= half.clone() {
            result += one;
        } else if *self < zero && self.frac() <= -half {
            result -= Number::from_i64_with_precision(1, self.precision());
        }
        result
    }

    /// The magnitude of `self`.
    pub fn abs(&self) -> Number {
        if self.is_negative() {
            -self.clone()
        } else {
            self.clone()
        }
    }

    /// Extracts the integer part as a 32-bit signed integer.
    ///
    /// The original masks with `0x7FFFFFFF` here and silently produces a spurious value for
    /// any magnitude at or beyond `2^31` instead of rejecting it. This translation instead
    /// returns [`LongNumError::Overflow`] for `exponent() >= 31`, which is the only magnitude
    /// range an `i32` genuinely cannot hold.
    pub fn to_int(&self) -> Result<i32> {
        let exponent = match self.exponent() {
            None => return Ok(0),
            Some(exponent) => exponent,
        };
        if exponent < 0 {
            return Ok(0);
        }
        if exponent >= 31 {
            return Err(LongNumError::Overflow);
        }
        let sign = if self.is_negative() { -1i32 } else { 1i32 };
        let mut num = self.significand.get_with_offset(-1, 0);
        num >>= 31 - exponent as u32;
        Ok((num as i32) * sign)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pow_identities() {
        let a = Number::from_i64(3);
        assert_eq!(a.pow(0), Number::from_i64_with_precision(1, a.precision()));
        assert_eq!(a.pow(1), a);
        assert_eq!(a.pow(2), a.clone() * a.clone());
    }

    #[test]
    fn pow_of_small_integer_is_exact() {
        let a = Number::from_i64(5);
        assert_eq!(a.pow(3), Number::from_i64(125));
    }

    #[test]
    fn truncate_drops_fraction() {
        let a = Number::from_f64(3.5);
        assert_eq!(a.truncate(), Number::from_i64_with_precision(3, a.precision()));
    }

    #[test]
    fn truncate_of_fraction_less_than_one_is_zero() {
        let a = Number::from_f64(0.25);
        assert!(a.truncate().is_zero());
        assert_eq!(a.truncate().precision(), a.precision());
    }

    #[test]
    fn frac_recovers_fractional_part() {
        let a = Number::from_f64(3.5);
        assert_eq!(a.frac(), Number::from_f64_with_precision(0.5, a.precision()));
    }

    #[test]
    fn round_ties_away_from_zero() {
        let a = Number::from_f64(2.5);
        assert_eq!(a.round(), Number::from_i64_with_precision(3, a.precision()));
        let b = Number::from_f64(-2.5);
        assert_eq!(b.round(), Number::from_i64_with_precision(-3, b.precision()));
    }

    #[test]
    fn abs_is_nonnegative() {
        assert_eq!(Number::from_i64(-7).abs(), Number::from_i64(7));
        assert_eq!(Number::from_i64(7).abs(), Number::from_i64(7));
    }

    #[test]
    fn to_int_overflow_is_rejected() {
        let huge = Number::from_i64_with_precision(1i64 << 40, 64);
        assert_eq!(huge.to_int(), Err(LongNumError::Overflow));
    }

    #[test]
    fn to_int_roundtrips_small_values() {
        assert_eq!(Number::from_i64(42).to_int(), Ok(42));
        assert_eq!(Number::from_i64(-42).to_int(), Ok(-42));
        assert_eq!(Number::from_f64(3.75).to_int(), Ok(3));
    }
}
