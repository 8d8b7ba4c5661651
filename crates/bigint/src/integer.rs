//! Integer type backed by little-endian decimal digits

use std::cmp::Ordering;
use std::fmt;

use crate::digits::{self, Digits};
use crate::error::TryFromBigIntError;

/// Arbitrary precision signed integer
///
/// Stored as a sign flag and a vector of decimal digits, ones place first.
/// Every value is kept canonical: no high zero digits, and zero is never
/// negative. Equality and hashing therefore compare the representation
/// directly.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    pub(crate) negative: bool,
    pub(crate) digits: Digits,
}

impl BigInt {
    /// Builds a value from a sign and a magnitude, restoring canonical form.
    ///
    /// All arithmetic results pass through here.
    pub(crate) fn from_parts(negative: bool, mut digits: Digits) -> Self {
        digits::trim(&mut digits);
        let negative = negative && !digits::is_zero(&digits);
        BigInt { negative, digits }
    }

    fn from_magnitude(negative: bool, magnitude: u128) -> Self {
        Self::from_parts(negative, digits::from_u128(magnitude))
    }

    /// Creates a new BigInt with value 0
    pub fn zero() -> Self {
        BigInt {
            negative: false,
            digits: vec![0],
        }
    }

    /// Creates a new BigInt with value 1
    pub fn one() -> Self {
        BigInt {
            negative: false,
            digits: vec![1],
        }
    }

    /// True iff the value is zero
    pub fn is_zero(&self) -> bool {
        digits::is_zero(&self.digits)
    }

    /// True iff the value is strictly less than zero
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// True iff the value is strictly greater than zero
    pub fn is_positive(&self) -> bool {
        !self.negative && !self.is_zero()
    }

    /// Returns -1, 0 or 1 according to the sign
    pub fn signum(&self) -> Self {
        if self.negative {
            Self::from(-1i8)
        } else if self.is_zero() {
            Self::zero()
        } else {
            Self::one()
        }
    }

    /// Returns the absolute value
    pub fn abs(&self) -> Self {
        BigInt {
            negative: false,
            digits: self.digits.clone(),
        }
    }

    /// Decimal digits of the magnitude, least significant first
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Number of decimal digits in the magnitude; zero has one digit
    pub fn digit_count(&self) -> usize {
        self.digits.len()
    }

    /// Converts to i128, returns None if out of range
    pub fn to_i128(&self) -> Option<i128> {
        let magnitude = digits::to_u128(&self.digits)?;
        if !self.negative {
            i128::try_from(magnitude).ok()
        } else if magnitude == i128::MIN.unsigned_abs() {
            Some(i128::MIN)
        } else {
            i128::try_from(magnitude).ok().map(|m| -m)
        }
    }

    /// Converts to u128, returns None if negative or out of range
    pub fn to_u128(&self) -> Option<u128> {
        if self.negative {
            return None;
        }
        digits::to_u128(&self.digits)
    }

    /// Converts to i64, returns None if out of range
    pub fn to_i64(&self) -> Option<i64> {
        self.to_i128().and_then(|v| i64::try_from(v).ok())
    }

    /// Converts to u64, returns None if out of range
    pub fn to_u64(&self) -> Option<u64> {
        self.to_u128().and_then(|v| u64::try_from(v).ok())
    }

    /// Converts to i32, returns None if out of range
    pub fn to_i32(&self) -> Option<i32> {
        self.to_i128().and_then(|v| i32::try_from(v).ok())
    }

    /// Converts to u32, returns None if out of range
    pub fn to_u32(&self) -> Option<u32> {
        self.to_u128().and_then(|v| u32::try_from(v).ok())
    }

    /// Adds one in place and returns the updated value (`++x`)
    pub fn increment(&mut self) -> &mut Self {
        *self = &*self + &BigInt::one();
        self
    }

    /// Subtracts one in place and returns the updated value (`--x`)
    pub fn decrement(&mut self) -> &mut Self {
        *self = &*self - &BigInt::one();
        self
    }

    /// Adds one in place and returns the value from before (`x++`)
    pub fn post_increment(&mut self) -> Self {
        let prior = self.clone();
        *self = &prior + &BigInt::one();
        prior
    }

    /// Subtracts one in place and returns the value from before (`x--`)
    pub fn post_decrement(&mut self) -> Self {
        let prior = self.clone();
        *self = &prior - &BigInt::one();
        prior
    }
}

impl Default for BigInt {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => digits::abs_compare(&self.digits, &other.digits),
            // more digits means further below zero
            (true, true) => digits::abs_compare(&other.digits, &self.digits),
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// From implementations
macro_rules! impl_from_signed {
    ($($t:ty),*) => {$(
        impl From<$t> for BigInt {
            fn from(val: $t) -> Self {
                BigInt::from_magnitude(val < 0, val.unsigned_abs() as u128)
            }
        }
    )*};
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {$(
        impl From<$t> for BigInt {
            fn from(val: $t) -> Self {
                BigInt::from_magnitude(false, val as u128)
            }
        }
    )*};
}

impl_from_signed!(i8, i16, i32, i64, i128, isize);
impl_from_unsigned!(u8, u16, u32, u64, u128, usize);

// Comparison with primitives
impl PartialEq<i32> for BigInt {
    fn eq(&self, other: &i32) -> bool {
        *self == BigInt::from(*other)
    }
}

impl PartialEq<i64> for BigInt {
    fn eq(&self, other: &i64) -> bool {
        *self == BigInt::from(*other)
    }
}

impl PartialOrd<i32> for BigInt {
    fn partial_cmp(&self, other: &i32) -> Option<Ordering> {
        Some(self.cmp(&BigInt::from(*other)))
    }
}

impl PartialOrd<i64> for BigInt {
    fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
        Some(self.cmp(&BigInt::from(*other)))
    }
}

// TryFrom implementations for converting BigInt to primitives
macro_rules! impl_try_from {
    ($($t:ident => $conv:ident),*) => {$(
        impl TryFrom<&BigInt> for $t {
            type Error = TryFromBigIntError;
            fn try_from(val: &BigInt) -> Result<Self, Self::Error> {
                val.$conv().ok_or(TryFromBigIntError {
                    target: stringify!($t),
                })
            }
        }

        impl TryFrom<BigInt> for $t {
            type Error = TryFromBigIntError;
            fn try_from(val: BigInt) -> Result<Self, Self::Error> {
                $t::try_from(&val)
            }
        }
    )*};
}

impl_try_from!(
    i32 => to_i32,
    u32 => to_u32,
    i64 => to_i64,
    u64 => to_u64,
    i128 => to_i128,
    u128 => to_u128
);
