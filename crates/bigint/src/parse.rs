//! Parsing support for BigInt
//!
//! Decimal strings go through [`FromStr`]; any other base through
//! [`BigInt::from_str_radix`]. Both accept a single optional leading `-`.

use std::str::FromStr;

use crate::error::{Error, Result};
use crate::radix::check_radix;
use crate::BigInt;

/// Longest prefix of a rejected literal that is written to the log, in chars
const LOGGED_PREFIX_CHARS: usize = 32;

/// Returns at most the first `LOGGED_PREFIX_CHARS` characters of `src`.
fn log_prefix(src: &str) -> &str {
    src.char_indices()
        .nth(LOGGED_PREFIX_CHARS)
        .map_or(src, |(end, _)| &src[..end])
}

fn reject(src: &str, err: Error) -> Error {
    tracing::debug!(
        input_prefix = log_prefix(src),
        input_len = src.len(),
        error = %err,
        "rejected big integer literal"
    );
    err
}

/// Returns the sign flag, the digit portion, and the byte offset of the
/// digit portion within `src`.
fn split_sign(src: &str) -> (bool, &str, usize) {
    match src.strip_prefix('-') {
        Some(rest) => (true, rest, 1),
        None => (false, src, 0),
    }
}

impl FromStr for BigInt {
    type Err = Error;

    /// Parses an optionally negative string of ASCII decimal digits.
    ///
    /// Leading zeros and `-0` are accepted and normalized.
    fn from_str(src: &str) -> Result<Self> {
        let (negative, body, offset) = split_sign(src);
        if body.is_empty() {
            return Err(reject(src, Error::EmptyString));
        }

        let mut digits = Vec::with_capacity(body.len());
        for (position, character) in body.char_indices().rev() {
            if !character.is_ascii_digit() {
                return Err(reject(
                    src,
                    Error::InvalidCharacter {
                        character,
                        position: offset + position,
                    },
                ));
            }
            digits.push(character as u8 - b'0');
        }
        Ok(BigInt::from_parts(negative, digits))
    }
}

impl BigInt {
    /// Parses a string in the given base (2 to 36).
    ///
    /// Digits above 9 are the letters `a`-`z` in either case. The value is
    /// accumulated most significant digit first as `value * base + digit`.
    pub fn from_str_radix(src: &str, base: u32) -> Result<Self> {
        check_radix(base).map_err(|err| reject(src, err))?;

        let (negative, body, offset) = split_sign(src);
        if body.is_empty() {
            return Err(reject(src, Error::EmptyString));
        }

        let radix = BigInt::from(base);
        let mut value = BigInt::zero();
        for (position, character) in body.char_indices() {
            let digit = character.to_digit(36).ok_or_else(|| {
                reject(
                    src,
                    Error::InvalidCharacter {
                        character,
                        position: offset + position,
                    },
                )
            })?;
            if digit >= base {
                return Err(reject(src, Error::InvalidDigit { character, base }));
            }
            value = &(&value * &radix) + &BigInt::from(digit);
        }

        Ok(if negative { -value } else { value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_log_prefix_is_bounded() {
        let long = "9".repeat(10_000) + "x";
        assert_eq!(log_prefix(&long).len(), LOGGED_PREFIX_CHARS);
        assert_eq!(log_prefix("12a"), "12a");

        let multibyte = "é".repeat(40);
        assert_eq!(log_prefix(&multibyte).chars().count(), LOGGED_PREFIX_CHARS);
        assert!(long.parse::<BigInt>().is_err());
    }

    #[test]
    fn test_decimal() {
        assert_eq!("12345".parse::<BigInt>().unwrap(), 12345);
        assert_eq!("-9876".parse::<BigInt>().unwrap(), -9876);
        assert_eq!("0".parse::<BigInt>().unwrap(), 0);
        assert_eq!("0000123456789".parse::<BigInt>().unwrap(), 123456789);
    }

    #[test]
    fn test_negative_zero_is_normalized() {
        let n: BigInt = "-0".parse().unwrap();
        assert_eq!(n, BigInt::zero());
        assert!(!n.is_negative());

        let n: BigInt = "-000".parse().unwrap();
        assert!(!n.is_negative());
    }

    #[test]
    fn test_decimal_errors() {
        assert_eq!("".parse::<BigInt>(), Err(Error::EmptyString));
        assert_eq!("-".parse::<BigInt>(), Err(Error::EmptyString));
        assert_eq!(
            "12a45".parse::<BigInt>(),
            Err(Error::InvalidCharacter {
                character: 'a',
                position: 2
            })
        );
        assert_eq!(
            "-12 345".parse::<BigInt>(),
            Err(Error::InvalidCharacter {
                character: ' ',
                position: 3
            })
        );
        assert!("12@345".parse::<BigInt>().is_err());
        assert!("+12".parse::<BigInt>().is_err());
        assert!("--12".parse::<BigInt>().is_err());
        assert!("١٢".parse::<BigInt>().is_err());
    }

    #[test]
    fn test_radix() {
        assert_eq!(BigInt::from_str_radix("FF", 16).unwrap(), 255);
        assert_eq!(BigInt::from_str_radix("ff", 16).unwrap(), 255);
        assert_eq!(BigInt::from_str_radix("aB", 36).unwrap(), 371);
        assert_eq!(BigInt::from_str_radix("-101", 2).unwrap(), -5);
        assert_eq!(BigInt::from_str_radix("-0", 7).unwrap(), 0);
        assert!(!BigInt::from_str_radix("-0", 7).unwrap().is_negative());
        assert_eq!(BigInt::from_str_radix("0012", 10).unwrap(), 12);
        assert_eq!(
            BigInt::from_str_radix("zzzzzzzzzzzzzzzz", 36).unwrap(),
            "7958661109946400884391935".parse::<BigInt>().unwrap()
        );
    }

    #[test]
    fn test_radix_errors() {
        assert_eq!(BigInt::from_str_radix("10", 1), Err(Error::InvalidBase(1)));
        assert_eq!(BigInt::from_str_radix("10", 37), Err(Error::InvalidBase(37)));
        assert_eq!(BigInt::from_str_radix("", 10), Err(Error::EmptyString));
        assert_eq!(BigInt::from_str_radix("-", 10), Err(Error::EmptyString));
        assert_eq!(
            BigInt::from_str_radix("12", 2),
            Err(Error::InvalidDigit {
                character: '2',
                base: 2
            })
        );
        assert_eq!(
            BigInt::from_str_radix("1G", 16),
            Err(Error::InvalidDigit {
                character: 'G',
                base: 16
            })
        );
        assert_eq!(
            BigInt::from_str_radix(" 1", 16),
            Err(Error::InvalidCharacter {
                character: ' ',
                position: 0
            })
        );
    }
}
