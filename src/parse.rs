//! Text parsing, grounded in `LongNum::from_binary_string`/`LongNum::from_string`
//! (`examples/original_source/src/longnum.cpp`).
//!
//! Non-binary bases need a logarithm to size the working precision (`log2(base)`), which is
//! only available through `std`'s floating-point intrinsics; binary parsing needs no such
//! thing and stays available without the `std` feature.

use crate::error::{LongNumError, Result};
use crate::number::Number;
use crate::sign::Sign;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::str::FromStr;

const WHITESPACE: &[char] = &[' ', '\t', '\n', '\r', '\x0C', '\x0B'];

/// Parses a base-2 textual `Number`, e.g. `"-101.01"`. Whitespace-only or empty input is zero.
pub fn from_binary_string(text: &str) -> Result<Number> {
    let trimmed_start = text.trim_start_matches(WHITESPACE);
    if trimmed_start.trim_end_matches(WHITESPACE).is_empty() {
        return Ok(Number::zero());
    }
    let body = trimmed_start.trim_end_matches(WHITESPACE);

    let (negative, rest) = match body.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, body.strip_prefix('+').unwrap_or(body)),
    };

    let mut whole_len = None;
    let mut digits: Vec<u8> = Vec::with_capacity(rest.len());
    for (i, c) in rest.char_indices() {
        match c {
            '0' | '1' => digits.push(c as u8),
            '.' if whole_len.is_none() => whole_len = Some(i),
            _ => return Err(LongNumError::InvalidNumeric { input: text.to_string() }),
        }
    }
    let whole_len = whole_len.unwrap_or(digits.len());

    match digits.iter().position(|&d| d == b'1') {
        None => Ok(Number::zero()),
        Some(first_one) => {
            let total = digits.len();
            let exponent = whole_len as i64 - 1 - first_one as i64;
            let precision = ((total + 31) / 32) * 32;
            let stored = &digits[first_one + 1..];
            let limbs = pack_msb_bits(stored, precision);
            Ok(Number {
                sign: Sign::from_is_negative(negative),
                exponent,
                significand: crate::significand::Significand::from_raw_limbs(limbs)
                    .with_precision(precision),
            })
        }
    }
}

/// Packs `'0'`/`'1'` ASCII bytes into big-endian 32-bit limbs, left-justified, zero-padding up
/// to `total_bits`.
fn pack_msb_bits(bits: &[u8], total_bits: usize) -> Vec<u32> {
    let num_limbs = (total_bits + 31) / 32;
    let mut limbs = alloc::vec![0u32; num_limbs];
    for (i, &b) in bits.iter().enumerate() {
        if i >= total_bits {
            break;
        }
        if b == b'1' {
            limbs[i / 32] |= 1u32 << (31 - (i % 32));
        }
    }
    limbs
}

#[cfg(feature = "std")]
fn parse_digit_set(base: u32) -> &'static str {
    &"0123456789abcdef"[..base as usize]
}

/// Parses a textual `Number` at the given base (2-16). Bases other than 2 require the `std`
/// feature, since sizing the working precision needs a base-2 logarithm.
#[cfg(feature = "std")]
pub fn from_string(text: &str, base: u32) -> Result<Number> {
    if base == 2 {
        return from_binary_string(text);
    }
    if !(2..=16).contains(&base) {
        return Err(LongNumError::InvalidNumeric { input: text.to_string() });
    }

    let lower = text.to_lowercase();
    let trimmed_start = lower.trim_start_matches(WHITESPACE);
    if trimmed_start.trim_end_matches(WHITESPACE).is_empty() {
        return Ok(Number::zero());
    }
    let body = trimmed_start.trim_end_matches(WHITESPACE);

    let (negative, rest) = match body.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, body.strip_prefix('+').unwrap_or(body)),
    };

    let digit_set = parse_digit_set(base);
    let mut point: Option<usize> = None;
    let mut digit_values: Vec<u32> = Vec::with_capacity(rest.len());
    for (i, c) in rest.char_indices() {
        if c == '.' {
            if point.is_some() {
                return Err(LongNumError::InvalidNumeric { input: text.to_string() });
            }
            point = Some(i);
            continue;
        }
        match digit_set.find(c) {
            Some(value) => digit_values.push(value as u32),
            None => return Err(LongNumError::InvalidNumeric { input: text.to_string() }),
        }
    }

    let frac_digit_count = match point {
        Some(p) => rest.chars().count() - p - 1,
        None => 0,
    };

    let working_precision =
        ((base as f64).log2() * (digit_values.len() as f64 + 1.0)).ceil() as usize;
    let mut result = Number::zero_with_precision(working_precision);
    let base_number = Number::from_i64_with_precision(base as i64, working_precision);
    for value in digit_values {
        result *= base_number.clone();
        result += Number::from_i64_with_precision(value as i64, working_precision);
    }
    result = result.checked_div(&base_number.pow(frac_digit_count as u32))?;
    if !result.is_zero() {
        result.sign = Sign::from_is_negative(negative);
    }
    Ok(result)
}

#[cfg(feature = "std")]
impl FromStr for Number {
    type Err = LongNumError;

    fn from_str(s: &str) -> Result<Number> {
        from_string(s, 10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_binary() {
        assert_eq!(from_binary_string("101").unwrap(), Number::from_i64(5));
        assert_eq!(from_binary_string("-101").unwrap(), Number::from_i64(-5));
    }

    #[test]
    fn parses_binary_fraction() {
        let n = from_binary_string("0.1").unwrap();
        assert_eq!(n.exponent(), Some(-1));
    }

    #[test]
    fn blank_and_all_zero_strings_are_zero() {
        assert!(from_binary_string("   ").unwrap().is_zero());
        assert!(from_binary_string("000").unwrap().is_zero());
    }

    #[test]
    fn rejects_invalid_characters() {
        assert!(from_binary_string("102").is_err());
        assert!(from_binary_string("1.0.1").is_err());
    }

    #[cfg(feature = "std")]
    #[test]
    fn parses_decimal() {
        let n = from_string("123", 10).unwrap();
        assert_eq!(n.to_int().unwrap(), 123);
    }

    #[cfg(feature = "std")]
    #[test]
    fn rejects_out_of_range_base() {
        assert!(from_string("1", 17).is_err());
        assert!(from_string("1", 1).is_err());
    }

    #[cfg(feature = "std")]
    #[test]
    fn from_str_parses_base_ten() {
        let n: Number = "42".parse().unwrap();
        assert_eq!(n.to_int().unwrap(), 42);
    }
}
