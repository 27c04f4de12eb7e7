//! Text ↔ binary-digit string conversion, one 8-bit group per UTF-8 byte.

use cc_core::{ClownError, Result};
use std::fmt::Write as _;

pub(crate) fn to_bits(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 8);
    for byte in text.bytes() {
        let _ = write!(out, "{byte:08b}");
    }
    out
}

pub(crate) fn from_bits(bits: &str) -> Result<String> {
    let count = bits.chars().count();
    if count % 8 != 0 {
        return Err(ClownError::MalformedBinaryLength { len: count });
    }

    let mut bytes = Vec::with_capacity(count / 8);
    let mut byte = 0u8;
    let mut filled = 0;
    for ch in bits.chars() {
        let bit = match ch {
            '0' => 0,
            '1' => 1,
            other => return Err(ClownError::InvalidBitDigit { ch: other }),
        };
        byte = (byte << 1) | bit;
        filled += 1;
        if filled == 8 {
            bytes.push(byte);
            byte = 0;
            filled = 0;
        }
    }

    Ok(String::from_utf8(bytes)?)
}
