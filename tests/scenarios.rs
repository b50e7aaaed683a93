//! Literal worked examples, each one directly lifted from a documented scenario rather than a
//! generated round-trip grid.

use longnum::{from_binary_string, Number};

#[test]
fn shift_equivalence() {
    let a = Number::from_i64_with_precision(1, 128) << 100;
    assert_eq!(a.to_string(10), "1267650600228229401496703205376");
}

#[test]
fn decimal_binary_round_trip() {
    let from_binary = from_binary_string("1010.1").unwrap();
    let from_decimal = longnum::from_string("10.5", 10).unwrap();
    assert_eq!(from_binary, from_decimal);
    assert_eq!(from_binary.to_string(10), "10.5");
    assert_eq!(from_decimal.to_string(10), "10.5");
}

#[test]
fn large_product() {
    let a = longnum::from_string("3483096694536044378308", 10)
        .unwrap()
        .with_precision(200);
    let b = longnum::from_string("17508438146505479", 10)
        .unwrap()
        .with_precision(200);
    let product = a * b;
    assert_eq!(product.to_string(10), "60983583034582021399174027313270749532");
}

#[test]
fn division_to_repeating_fraction() {
    let a = Number::from_i64_with_precision(22, 64);
    let b = Number::from_i64_with_precision(7, 64);
    let q = a.checked_div(&b).unwrap();
    assert!(q.to_string(10).starts_with("3.14"));
}

#[test]
fn division_by_zero_leaves_dividend_unchanged() {
    let a = Number::from_i64(1);
    let before = a.clone();
    let result = a.checked_div(&Number::zero());
    assert_eq!(result, Err(longnum::LongNumError::DivisionByZero));
    assert_eq!(a, before);
}

#[test]
fn truncating_round() {
    let x = from_binary_string(
        "1001010100101010101010100101010101010001010101110101000101010101.\
         1001010101010101010101010010010101",
    )
    .unwrap();
    let rounded = x.round();
    assert_eq!(
        rounded.to_binary_string(),
        "1001010100101010101010100101010101010001010101110101000101010110"
    );
}

/// Same series as `src/bin/calculate_pi.rs`'s `calculate_pi`, reproduced here since that
/// function lives in a binary target and isn't part of the library's public surface.
fn calculate_pi(precision: usize) -> Number {
    let mut result = Number::zero_with_precision(precision);
    let mut term = Number::from_i64_with_precision(2, precision);
    result += term.clone();

    for n in 1..=precision {
        term >>= 1;
        term *= Number::from_i64_with_precision((n * 2) as i64, term.precision());
        term /= Number::from_i64_with_precision((n * 2 + 1) as i64, term.precision());
        term.set_precision(precision - n + 2);
        result += term.clone();
    }

    result.set_precision(precision);
    result
}

#[test]
fn pi_to_100_digits() {
    let digits = 100u64;
    let precision = ((digits as f64 + 2.0) * 10f64.log2()).ceil() as usize;
    let pi = calculate_pi(precision);
    let text = pi.to_string(10);
    let expected = "3.1415926535897932384626433832795028841971693993751058209749445923078164062862089986280348253421170679";
    assert_eq!(&text[..expected.len()], expected);
}
