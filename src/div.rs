//! Division, grounded in `LongNum::operator/=` (`examples/original_source/src/longnum.cpp`).
//!
//! Division is bit-serial: after aligning dividend and divisor to the same exponent, it
//! repeatedly compares the remaining dividend against successively halved copies of the
//! divisor, recording a quotient bit on each successful subtraction, until either the
//! remainder is exactly zero or the requested precision is exhausted. It never rounds.
//!
//! `/`/`/=` panic on a zero divisor, the same convention Rust's own integer division uses;
//! [`Number::checked_div`] is the fallible entry point for callers that want a [`Result`]
//! instead (used by the textual-conversion code in this crate and recommended for library
//! consumers who cannot guarantee a non-zero divisor).

use crate::error::{LongNumError, Result};
use crate::helper_macros::{forward_assignop_to_owned, forward_binop_to_owned};
use crate::number::Number;
use core::ops::{Div, DivAssign};

impl Number {
    /// Divides `self` by `rhs`, truncating at the joined precision. Returns
    /// [`LongNumError::DivisionByZero`] if `rhs` is zero; `self` is left unmodified in that
    /// case.
    pub fn checked_div(&self, rhs: &Number) -> Result<Number> {
        if rhs.is_zero() {
            return Err(LongNumError::DivisionByZero);
        }

        let mut dividend = self.clone();
        if dividend.precision() < rhs.precision() {
            dividend.set_precision(rhs.precision());
        }
        if dividend.is_zero() {
            return Ok(dividend);
        }

        let result_precision = dividend.precision().max(rhs.precision());
        let mut result = Number::zero_with_precision(result_precision);
        result.exponent = dividend.exponent - rhs.exponent;
        result.sign = dividend.sign() * rhs.sign();

        if dividend.is_negative() != rhs.is_negative() {
            dividend = -dividend;
        }
        dividend.exponent = rhs.exponent;

        let leading_bit = dividend.abs() >= rhs.abs();
        if leading_bit {
            dividend -= rhs.clone();
        }

        let mut shift = 1i32;
        while !dividend.is_zero() && (shift as usize) < result.precision() {
            let shifted = rhs >> shift;
            if dividend.abs() >= shifted.abs() {
                dividend -= shifted;
                result.significand.set_bit((shift - 1) as usize);
            }
            shift += 1;
        }

        if !leading_bit {
            result.significand.remove_front_bits(1);
            result.exponent -= 1;
        }

        Ok(result)
    }
}

impl DivAssign<Number> for Number {
    fn div_assign(&mut self, rhs: Number) {
        *self = self
            .checked_div(&rhs)
            .expect("division by zero in `/=` - use `Number::checked_div` to handle it");
    }
}

forward_assignop_to_owned!(impl DivAssign, div_assign);

impl Div<Number> for Number {
    type Output = Number;

    fn div(mut self, rhs: Number) -> Number {
        self /= rhs;
        self
    }
}

forward_binop_to_owned!(impl Div, div);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LongNumError;

    #[test]
    fn div_by_zero_is_an_error() {
        let a = Number::from_i64(1);
        assert_eq!(
            a.checked_div(&Number::zero()),
            Err(LongNumError::DivisionByZero)
        );
    }

    #[test]
    fn div_exact_integers() {
        let a = Number::from_i64(10);
        let b = Number::from_i64(2);
        assert_eq!(a / b, Number::from_i64(5));
    }

    #[test]
    fn div_zero_dividend_is_zero() {
        let a = Number::zero();
        let b = Number::from_i64(4);
        assert!((a / b).is_zero());
    }

    #[test]
    fn div_22_over_7_begins_with_pi_digits() {
        let a = Number::from_i64_with_precision(22, 64);
        let b = Number::from_i64_with_precision(7, 64);
        let q = a.checked_div(&b).unwrap();
        let text = q.to_string(10);
        assert!(text.starts_with("3.14"));
    }
}
