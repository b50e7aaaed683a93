//! Multiplication, grounded in `operator*`/`operator*=`
//! (`examples/original_source/src/longnum.cpp`).
//!
//! The loop treats each operand as `1.bits` by running the limb index one step past the end
//! (`j` down to `-1`) and substituting the implicit leading one for the out-of-range read,
//! exactly as the original does with `j >= 0 ? rhs.limbs.get(j) : 1`.

use crate::add::add_limbs;
use crate::helper_macros::{forward_assignop_to_owned, forward_binop_to_owned};
use crate::number::Number;
use core::ops::{Mul, MulAssign};

impl Mul<Number> for Number {
    type Output = Number;

    fn mul(self, rhs: Number) -> Number {
        if self.is_zero() || rhs.is_zero() {
            return Number::zero_with_precision(self.precision().max(rhs.precision()));
        }

        let lhs_precision = self.precision();
        let lhs_exponent = self.exponent;
        let lhs_sign = self.sign();

        let mut result = rhs.clone();
        result.exponent += lhs_exponent;
        result.set_precision(lhs_precision + rhs.precision() + 32);

        let lhs_size = self.significand.size() as i64;
        let rhs_size = rhs.significand.size() as i64;
        let mut big_carry = 0i32;

        for i in (0..lhs_size).rev() {
            for j in (-1..rhs_size).rev() {
                let mult: u64 = if j >= 0 {
                    rhs.significand.get(j as usize) as u64
                } else {
                    1
                };
                let idx = (i + j + 1) as usize;
                let limb_result =
                    result.significand.get(idx) as u64 + self.significand.get(i as usize) as u64 * mult;
                *result.significand.at(idx) = limb_result as u32;

                if i + j < 0 {
                    big_carry += (limb_result >> 32) as i32;
                    continue;
                }
                let mut carry = 0i32;
                add_limbs(
                    result.significand.at((i + j) as usize),
                    (limb_result >> 32) as u32,
                    &mut carry,
                );
                let mut k = i + j - 1;
                while carry != 0 && k >= 0 {
                    add_limbs(result.significand.at(k as usize), 0, &mut carry);
                    k -= 1;
                }
                big_carry += carry;
            }
        }

        debug_assert!(big_carry <= 2, "multiplication carry exceeded its proven bound");
        if big_carry >= 1 {
            result.significand.insert_front_zeros(1);
            result.exponent += 1;
        }
        if big_carry == 2 {
            result.significand.set_bit(0);
        }

        result.set_precision(lhs_precision.max(rhs.precision()));
        result.sign = lhs_sign * rhs.sign();
        result
    }
}

forward_binop_to_owned!(impl Mul, mul);

impl MulAssign<Number> for Number {
    fn mul_assign(&mut self, rhs: Number) {
        *self = self.clone() * rhs;
    }
}

forward_assignop_to_owned!(impl MulAssign, mul_assign);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mul_by_zero_is_zero() {
        let a = Number::from_i64(5);
        assert!((a * Number::zero()).is_zero());
    }

    #[test]
    fn mul_small_integers() {
        let a = Number::from_i64(6);
        let b = Number::from_i64(7);
        assert_eq!(a * b, Number::from_i64(42));
    }

    #[test]
    fn mul_opposite_signs_is_negative() {
        let a = Number::from_i64(3);
        let b = Number::from_i64(-4);
        assert_eq!(a * b, Number::from_i64(-12));
    }

    #[test]
    fn mul_result_precision_is_max_of_operands() {
        let a = Number::from_i64_with_precision(3, 32);
        let b = Number::from_i64_with_precision(5, 96);
        assert_eq!((a * b).precision(), 96);
    }
}
