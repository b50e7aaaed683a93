//! Logical shifts, interpreted as multiplication/division by a power of two.
//!
//! Grounded in `LongNum::operator<<=`/`operator>>=` (`examples/original_source/src/longnum.cpp`),
//! which adjust `_exp` unconditionally. That original is missing a zero guard: shifting a zero
//! value would change its exponent away from the `EXP_ZERO` sentinel and corrupt `is_zero()`.
//! This translation adds the guard so a zero `Number` is a fixed point of both shift directions.

use crate::number::Number;
use core::ops::{Shl, ShlAssign, Shr, ShrAssign};

impl ShlAssign<i32> for Number {
    fn shl_assign(&mut self, n: i32) {
        if !self.is_zero() {
            self.exponent += n as i64;
        }
    }
}

impl Shl<i32> for Number {
    type Output = Number;

    fn shl(mut self, n: i32) -> Number {
        self <<= n;
        self
    }
}

impl Shl<i32> for &Number {
    type Output = Number;

    fn shl(self, n: i32) -> Number {
        self.clone() << n
    }
}

impl ShrAssign<i32> for Number {
    fn shr_assign(&mut self, n: i32) {
        if !self.is_zero() {
            self.exponent -= n as i64;
        }
    }
}

impl Shr<i32> for Number {
    type Output = Number;

    fn shr(mut self, n: i32) -> Number {
        self >>= n;
        self
    }
}

impl Shr<i32> for &Number {
    type Output = Number;

    fn shr(self, n: i32) -> Number {
        self.clone() >> n
    }
}
