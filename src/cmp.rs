//! Ordering and equality, grounded in `LongNum::operator<=>`/`operator==`
//! (`examples/original_source/src/longnum.cpp`).

use crate::number::Number;
use core::cmp::Ordering;

impl Number {
    fn compare_same_sign_nonzero(&self, rhs: &Number) -> Ordering {
        if self.exponent != rhs.exponent {
            let greater = self.exponent > rhs.exponent;
            return order_flipped_if_negative(greater, self.is_negative());
        }
        let cmp_precision = self.precision().max(rhs.precision());
        let left = self.significand.clone().with_precision(cmp_precision);
        let right = rhs.significand.clone().with_precision(cmp_precision);
        for i in 0..left.size() {
            let (a, b) = (left.get(i), right.get(i));
            if a != b {
                return order_flipped_if_negative(a > b, self.is_negative());
            }
        }
        Ordering::Equal
    }
}

fn order_flipped_if_negative(greater: bool, negative: bool) -> Ordering {
    if greater ^ negative {
        Ordering::Greater
    } else {
        Ordering::Less
    }
}

impl PartialEq for Number {
    fn eq(&self, rhs: &Number) -> bool {
        match (self.is_zero(), rhs.is_zero()) {
            (true, true) => return true,
            (true, false) | (false, true) => return false,
            (false, false) => {}
        }
        if self.is_negative() != rhs.is_negative() || self.exponent != rhs.exponent {
            return false;
        }
        let cmp_precision = self.precision().max(rhs.precision());
        let left = self.significand.clone().with_precision(cmp_precision);
        let right = rhs.significand.clone().with_precision(cmp_precision);
        (0..left.size()).all(|i| left.get(i) == right.get(i))
    }
}

impl Eq for Number {}

impl PartialOrd for Number {
    fn partial_cmp(&self, rhs: &Number) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}

impl Ord for Number {
    fn cmp(&self, rhs: &Number) -> Ordering {
        match (self.is_zero(), rhs.is_zero()) {
            (true, true) => Ordering::Equal,
            (true, false) => {
                if rhs.is_negative() {
                    Ordering::Greater
                } else {
                    Ordering::Less
                }
            }
            (false, true) => {
                if self.is_negative() {
                    Ordering::Less
                } else {
                    Ordering::Greater
                }
            }
            (false, false) => {
                if self.is_negative() != rhs.is_negative() {
                    if self.is_negative() {
                        Ordering::Less
                    } else {
                        Ordering::Greater
                    }
                } else {
                    self.compare_same_sign_nonzero(rhs)
                }
            }
        }
    }
}
