use crate::{Error, Result};
use num_bigint::BigUint;

const PREFIX: &str = "0x";

/// Decodes a `0x` prefixed hex quantity into an unbounded unsigned integer.
///
/// Only ASCII hex digits are accepted after the prefix, so inputs like `0x-1`,
/// `0x+1` or `0x1_0` are rejected even though the big integer parser would
/// take some of them.
pub fn decode_quantity(hex: &str) -> Result<BigUint> {
    let invalid = || Error::InvalidQuantity(hex.to_owned());

    let digits = hex.strip_prefix(PREFIX).ok_or_else(invalid)?;

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    BigUint::parse_bytes(digits.as_bytes(), 16).ok_or_else(invalid)
}
