//! Rendering BigInt in base 2 through 36

use std::fmt;

use crate::digits;
use crate::error::{Error, Result};
use crate::BigInt;

/// Smallest base accepted for parsing and rendering
pub const MIN_RADIX: u32 = 2;
/// Largest base accepted for parsing and rendering
pub const MAX_RADIX: u32 = 36;

const SYMBOLS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

pub(crate) fn check_radix(base: u32) -> Result<()> {
    if (MIN_RADIX..=MAX_RADIX).contains(&base) {
        Ok(())
    } else {
        Err(Error::InvalidBase(base))
    }
}

impl BigInt {
    /// Renders the value in the given base (2 to 36) with uppercase letters
    /// for digits above 9 and a leading `-` when negative.
    pub fn to_str_radix(&self, base: u32) -> Result<String> {
        check_radix(base)?;
        let magnitude = self.magnitude_in(base);
        Ok(if self.negative {
            format!("-{magnitude}")
        } else {
            magnitude
        })
    }

    /// Magnitude in `base`, which must already be validated.
    ///
    /// Peels off one output symbol per pass of `divide_by_base` until the
    /// quotient reaches zero.
    fn magnitude_in(&self, base: u32) -> String {
        if self.is_zero() {
            return "0".to_string();
        }
        let mut quotient = self.digits.clone();
        let mut symbols = Vec::new();
        while !digits::is_zero(&quotient) {
            let remainder = digits::divide_by_base(&mut quotient, base);
            symbols.push(SYMBOLS[remainder as usize]);
        }
        symbols.iter().rev().map(|&s| char::from(s)).collect()
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let magnitude: String = self
            .digits
            .iter()
            .rev()
            .map(|&d| char::from(b'0' + d))
            .collect();
        f.pad_integral(!self.negative, "", &magnitude)
    }
}

impl fmt::Binary for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.negative, "0b", &self.magnitude_in(2))
    }
}

impl fmt::Octal for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.negative, "0o", &self.magnitude_in(8))
    }
}

impl fmt::LowerHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.negative, "0x", &self.magnitude_in(16).to_lowercase())
    }
}

impl fmt::UpperHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.negative, "0x", &self.magnitude_in(16))
    }
}
