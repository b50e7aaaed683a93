//! Textual output, grounded in `LongNum::to_binary_string`/`to_string`
//! (`examples/original_source/src/longnum.cpp`).
//!
//! The general-base path fixes a sign bug present in the original: its fractional-digit loop
//! tests `frac > 0`, which for a negative non-integer silently emits no fractional digits at
//! all (since `frac()` shares `self`'s sign, see spec.md's property `0 <= frac(a)*sign(a) < 1`).
//! This version drives the loop off `frac.is_zero()` and lets the digit's own sign cancel out,
//! so negative fractional values round-trip through `to_string`/`from_string` the same way
//! positive ones do.

use crate::number::Number;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

const DIGITS: &[u8] = b"0123456789abcdef";

impl Number {
    /// Renders `self` as a base-2 string, bit-for-bit.
    pub fn to_binary_string(&self) -> String {
        if self.is_zero() {
            return String::from("0");
        }
        let exponent = self.exponent;
        let mut out = String::new();
        if self.is_negative() {
            out.push('-');
        }
        if exponent < 0 {
            out.push('0');
            out.push('.');
            for _ in 0..(-1 - exponent) {
                out.push('0');
            }
        }
        out.push('1');

        let mut bits = String::with_capacity(self.significand.size() * 32);
        for i in 0..self.significand.size() {
            bits.push_str(&format!("{:032b}", self.significand.get(i)));
        }
        let precision = self.precision();
        bits.truncate(precision.min(bits.len()));

        if exponent >= 0 && (exponent as usize) < bits.len() {
            bits.insert(exponent as usize, '.');
        }
        out.push_str(&bits);
        if exponent as i64 >= bits.len() as i64 {
            for _ in bits.len()..=(exponent as usize) {
                out.push('0');
            }
        }
        out
    }

    /// Renders `self` in bases 2-16; bases other than 2 require the `std` feature.
    #[cfg(feature = "std")]
    pub fn to_string(&self, base: u32) -> String {
        if base == 2 {
            return self.to_binary_string();
        }
        assert!((2..=16).contains(&base), "base must be between 2 and 16");

        let base_number = Number::from_i64_with_precision(base as i64, self.precision());
        let mut digits_rev: Vec<u8> = Vec::new();

        let mut whole = self.truncate();
        if !whole.is_zero() {
            whole.set_precision(self.exponent.unsigned_abs() as usize);
        }
        while !whole.is_zero() {
            let d = whole.checked_div(&base_number).expect("base is non-zero").truncate();
            let rem = (whole.clone() - d.clone() * base_number.clone())
                .to_int()
                .expect("digit fits in i32");
            whole = d;
            digits_rev.push(DIGITS[rem.unsigned_abs() as usize]);
        }
        if digits_rev.is_empty() {
            digits_rev.push(b'0');
        }
        if self.is_negative() {
            digits_rev.push(b'-');
        }
        digits_rev.reverse();
        let mut out = String::from_utf8(digits_rev).expect("ASCII digits only");

        let mut frac = self.frac();
        if !frac.is_zero() {
            out.push('.');
        }
        let num_frac_digits =
            (((self.precision() as i64 - self.exponent) as f64) / (base as f64).log2()).floor();
        let num_frac_digits = if num_frac_digits > 0.0 {
            num_frac_digits as i64
        } else {
            0
        };
        for _ in 0..num_frac_digits {
            if frac.is_zero() {
                break;
            }
            frac *= base_number.clone();
            let digit = frac.truncate().to_int().expect("digit fits in i32");
            out.push(DIGITS[digit.unsigned_abs() as usize] as char);
            frac -= Number::from_i64_with_precision(digit as i64, frac.precision());
        }
        out
    }
}

#[cfg(feature = "std")]
impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string(10))
    }
}
