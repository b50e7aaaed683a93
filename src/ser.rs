//! `serde` support, gated behind the `serde` feature.
//!
//! `Number` serializes as its base-2 textual form (`to_binary_string`/`from_binary_string`),
//! the one textual representation that round-trips exactly and needs no `std` feature.

use crate::number::Number;
use crate::parse::from_binary_string;
use alloc::string::String;
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_binary_string())
    }
}

impl<'de> Deserialize<'de> for Number {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Number, D::Error> {
        let text = String::deserialize(deserializer)?;
        from_binary_string(&text).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_test::{assert_tokens, Token};

    #[test]
    fn round_trips_through_json() {
        let a = Number::from_i64(-42);
        let json = serde_json::to_string(&a).unwrap();
        let back: Number = serde_json::from_str(&json).unwrap();
        assert_eq!(a, back);
    }

    #[test]
    fn serializes_as_a_binary_string_token() {
        assert_tokens(&Number::from_i64(10), &[Token::Str("1010")]);
        assert_tokens(&Number::from_i64(-5), &[Token::Str("-101")]);
        assert_tokens(&Number::zero(), &[Token::Str("0")]);
    }
}
