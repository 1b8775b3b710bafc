//! Hexadecimal and byte-text helpers.
//!
//! Compact lowercase hex is the canonical rendering for TLV values and tag
//! identifiers; the spaced form is used for diagnostic payload dumps.

use std::fmt::Write;

use crate::{Error, Result};

/// Convert a byte slice to a lowercase hex string without separators.
///
/// Example: `&[0xde, 0xad]` -> `"dead"`
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        // write! never fails writing to a String
        let _ = write!(&mut s, "{:02x}", b);
    }
    s
}

/// Convert a byte slice to an uppercase hex string without separators.
///
/// Example: `&[0x5f, 0x20]` -> `"5F20"`
pub fn bytes_to_hex_upper(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(&mut s, "{:02X}", b);
    }
    s
}

/// Convert a byte slice to a lowercase hex string with a single space between
/// each byte.
///
/// Example: `&[0xde, 0xad]` -> `"de ad"`
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        if i != 0 {
            s.push(' ');
        }
        let _ = write!(&mut s, "{:02x}", b);
    }
    s
}

/// Parse a hex string into bytes. ASCII whitespace is ignored.
pub fn parse_hex(s: &str) -> Result<Vec<u8>> {
    let cleaned: Vec<u8> = s.bytes().filter(|b| !b.is_ascii_whitespace()).collect();

    if cleaned.len() % 2 != 0 {
        return Err(Error::InvalidHex("hex string has odd length".to_string()));
    }

    cleaned
        .chunks(2)
        .map(|pair| {
            let hi = hex_nibble(pair[0]);
            let lo = hex_nibble(pair[1]);
            match (hi, lo) {
                (Some(hi), Some(lo)) => Ok((hi << 4) | lo),
                _ => Err(Error::InvalidHex(format!(
                    "invalid hex pair '{}{}'",
                    pair[0] as char, pair[1] as char
                ))),
            }
        })
        .collect()
}

fn hex_nibble(c: u8) -> Option<u8> {
    (c as char).to_digit(16).map(|d| d as u8)
}

/// Decode bytes one-to-one into characters (ISO-8859-1). Every byte maps to
/// a char, so this never fails.
pub fn latin1_to_string(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

/// Decode a hex string into Latin-1 text. Odd-length or non-hex input yields
/// an empty string.
pub fn hex_to_ascii(hex: &str) -> String {
    match parse_hex(hex) {
        Ok(bytes) => latin1_to_string(&bytes),
        Err(_) => String::new(),
    }
}

/// True when the trailing status word of an APDU response is `90 00`.
pub fn is_success_status(response: &[u8]) -> bool {
    response.len() >= 2 && response[response.len() - 2..] == [0x90, 0x00]
}
