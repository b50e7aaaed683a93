//! Addition and subtraction, grounded in `LongNum::operator+=`/`operator-=`
//! (`examples/original_source/src/longnum.cpp`).
//!
//! The original lets `operator-=` fall back to `operator+=` on a sign mismatch and vice versa;
//! that mutual recursion is kept here since each fallback strictly reduces to a same-sign case.

use crate::helper_macros::{forward_assignop_to_owned, forward_binop_to_owned};
use crate::number::Number;
use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// `lhs = lhs + rhs + carry` at limb width, with the new carry (0 or 1) written back.
pub(crate) fn add_limbs(lhs: &mut u32, rhs: u32, carry: &mut i32) {
    let result = *lhs as u64 + rhs as u64 + *carry as u64;
    *lhs = result as u32;
    *carry = (result >> 32) as i32;
}

/// `lhs = lhs - rhs - carry` at limb width, with the new borrow (0 or 1) written back.
fn sub_limbs(lhs: &mut u32, rhs: u32, carry: &mut i32) {
    let new_carry = (*lhs < rhs || (*lhs <= rhs && *carry != 0)) as i32;
    *lhs = lhs.wrapping_sub(rhs).wrapping_sub(*carry as u32);
    *carry = new_carry;
}

impl Neg for Number {
    type Output = Number;

    fn neg(mut self) -> Number {
        if !self.is_zero() {
            self.sign = -self.sign;
        }
        self
    }
}

impl Neg for &Number {
    type Output = Number;

    fn neg(self) -> Number {
        -self.clone()
    }
}

impl AddAssign<Number> for Number {
    fn add_assign(&mut self, rhs: Number) {
        if self.precision() < rhs.precision() {
            self.set_precision(rhs.precision());
        }
        if rhs.is_zero() {
            return;
        }
        if self.is_zero() {
            *self = rhs.with_precision(self.precision());
            return;
        }
        if self.is_negative() != rhs.is_negative() {
            *self -= -rhs;
            return;
        }
        if rhs.exponent > self.exponent {
            self.significand
                .insert_front_zeros((rhs.exponent - self.exponent) as usize);
            self.exponent = rhs.exponent;
        }
        let offset = rhs.exponent - self.exponent;
        let mut carry = 0i32;
        for i in (0..self.significand.size()).rev() {
            add_limbs(
                self.significand.at(i),
                rhs.significand.get_with_offset(offset, i),
                &mut carry,
            );
        }
        if rhs.exponent == self.exponent {
            carry += 1;
        }
        if carry >= 1 {
            self.significand.insert_front_zeros(1);
            self.exponent += 1;
        }
        if carry == 2 {
            self.significand.set_bit(0);
        }
    }
}

forward_assignop_to_owned!(impl AddAssign, add_assign);

impl Add<Number> for Number {
    type Output = Number;

    fn add(mut self, rhs: Number) -> Number {
        self += rhs;
        self
    }
}

forward_binop_to_owned!(impl Add, add);

impl SubAssign<Number> for Number {
    fn sub_assign(&mut self, rhs: Number) {
        if self.precision() < rhs.precision() {
            self.set_precision(rhs.precision());
        }
        if rhs.is_zero() {
            return;
        }
        if self.is_zero() {
            *self = (-rhs).with_precision(self.precision());
            return;
        }
        if *self == rhs {
            *self = Number::zero_with_precision(self.precision());
            return;
        }
        if self.is_negative() != rhs.is_negative() {
            *self += -rhs;
            return;
        }
        if self.abs() < rhs.abs() {
            *self = -(rhs.with_precision(self.precision()) - self.clone());
            return;
        }
        let offset = rhs.exponent - self.exponent;
        let mut carry = 0i32;
        for i in (0..self.significand.size()).rev() {
            sub_limbs(
                self.significand.at(i),
                rhs.significand.get_with_offset(offset, i),
                &mut carry,
            );
        }
        if rhs.exponent == self.exponent {
            carry += 1;
        }
        debug_assert!(carry <= 1, "subtraction borrow exceeded its proven bound");
        if carry == 1 {
            let leading_zeros = self.significand.leading_zeros();
            self.significand.remove_front_bits(leading_zeros + 1);
            self.exponent -= (leading_zeros + 1) as i64;
        }
    }
}

forward_assignop_to_owned!(impl SubAssign, sub_assign);

impl Sub<Number> for Number {
    type Output = Number;

    fn sub(mut self, rhs: Number) -> Number {
        self -= rhs;
        self
    }
}

forward_binop_to_owned!(impl Sub, sub);
