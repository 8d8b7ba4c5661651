//! Arithmetic operations for BigInt
//!
//! Every operator is available for owned and borrowed operands and with an
//! `i64` right-hand side. Compound assignment recomputes the full result and
//! then replaces the receiver.
//!
//! `/` and `%` panic on a zero divisor, like the primitive integer types.
//! [`BigInt::try_div`] and [`BigInt::try_rem`] report it as an error instead.

use std::cmp::Ordering;
use std::iter::{Product, Sum};
use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};

use crate::digits;
use crate::error::{Error, Result};
use crate::BigInt;

fn add(lhs: &BigInt, rhs: &BigInt) -> BigInt {
    if lhs.negative == rhs.negative {
        BigInt::from_parts(lhs.negative, digits::add(&lhs.digits, &rhs.digits))
    } else if digits::abs_compare(&lhs.digits, &rhs.digits) != Ordering::Less {
        BigInt::from_parts(lhs.negative, digits::subtract(&lhs.digits, &rhs.digits))
    } else {
        BigInt::from_parts(rhs.negative, digits::subtract(&rhs.digits, &lhs.digits))
    }
}

fn sub(lhs: &BigInt, rhs: &BigInt) -> BigInt {
    if lhs.negative != rhs.negative {
        BigInt::from_parts(lhs.negative, digits::add(&lhs.digits, &rhs.digits))
    } else if digits::abs_compare(&lhs.digits, &rhs.digits) != Ordering::Less {
        BigInt::from_parts(lhs.negative, digits::subtract(&lhs.digits, &rhs.digits))
    } else {
        BigInt::from_parts(!lhs.negative, digits::subtract(&rhs.digits, &lhs.digits))
    }
}

fn mul(lhs: &BigInt, rhs: &BigInt) -> BigInt {
    BigInt::from_parts(
        lhs.negative != rhs.negative,
        digits::multiply(&lhs.digits, &rhs.digits),
    )
}

fn div(lhs: &BigInt, rhs: &BigInt) -> BigInt {
    match lhs.try_div(rhs) {
        Ok(quotient) => quotient,
        Err(err) => panic!("{err}"),
    }
}

fn rem(lhs: &BigInt, rhs: &BigInt) -> BigInt {
    match lhs.try_rem(rhs) {
        Ok(remainder) => remainder,
        Err(err) => panic!("{err}"),
    }
}

impl BigInt {
    /// Truncating division.
    ///
    /// The quotient is negative iff exactly one operand is negative. Fails
    /// with [`Error::DivisionByZero`] when `rhs` is zero, including `0 / 0`.
    pub fn try_div(&self, rhs: &BigInt) -> Result<BigInt> {
        if rhs.is_zero() {
            return Err(Error::DivisionByZero);
        }
        if digits::abs_compare(&self.digits, &rhs.digits) == Ordering::Less {
            return Ok(BigInt::zero());
        }
        let (quotient, _) = digits::div_rem(&self.digits, &rhs.digits);
        Ok(BigInt::from_parts(self.negative != rhs.negative, quotient))
    }

    /// Remainder of truncating division.
    ///
    /// The result takes the sign of `self` (zero is never negative) and its
    /// magnitude is below `|rhs|`. Fails with [`Error::ModulusByZero`] when
    /// `rhs` is zero.
    pub fn try_rem(&self, rhs: &BigInt) -> Result<BigInt> {
        if rhs.is_zero() {
            return Err(Error::ModulusByZero);
        }
        if digits::abs_compare(&self.digits, &rhs.digits) == Ordering::Less {
            return Ok(self.clone());
        }
        let (_, remainder) = digits::div_rem(&self.digits, &rhs.digits);
        Ok(BigInt::from_parts(self.negative, remainder))
    }

    /// `self /= rhs`, leaving `self` untouched on error
    pub fn try_div_assign(&mut self, rhs: &BigInt) -> Result<&mut Self> {
        *self = self.try_div(rhs)?;
        Ok(self)
    }

    /// `self %= rhs`, leaving `self` untouched on error
    pub fn try_rem_assign(&mut self, rhs: &BigInt) -> Result<&mut Self> {
        *self = self.try_rem(rhs)?;
        Ok(self)
    }
}

// Negation
impl Neg for BigInt {
    type Output = Self;
    fn neg(self) -> Self::Output {
        BigInt::from_parts(!self.negative, self.digits)
    }
}

impl Neg for &BigInt {
    type Output = BigInt;
    fn neg(self) -> Self::Output {
        BigInt::from_parts(!self.negative, self.digits.clone())
    }
}

macro_rules! forward_binop {
    (impl $imp:ident, $method:ident, $func:path) => {
        impl $imp<&BigInt> for &BigInt {
            type Output = BigInt;
            fn $method(self, rhs: &BigInt) -> BigInt {
                $func(self, rhs)
            }
        }

        impl $imp<BigInt> for BigInt {
            type Output = BigInt;
            fn $method(self, rhs: BigInt) -> BigInt {
                $func(&self, &rhs)
            }
        }

        impl $imp<&BigInt> for BigInt {
            type Output = BigInt;
            fn $method(self, rhs: &BigInt) -> BigInt {
                $func(&self, rhs)
            }
        }

        impl $imp<BigInt> for &BigInt {
            type Output = BigInt;
            fn $method(self, rhs: BigInt) -> BigInt {
                $func(self, &rhs)
            }
        }

        impl $imp<i64> for BigInt {
            type Output = BigInt;
            fn $method(self, rhs: i64) -> BigInt {
                $func(&self, &BigInt::from(rhs))
            }
        }

        impl $imp<i64> for &BigInt {
            type Output = BigInt;
            fn $method(self, rhs: i64) -> BigInt {
                $func(self, &BigInt::from(rhs))
            }
        }
    };
}

macro_rules! forward_assign {
    (impl $imp:ident, $method:ident, $func:path) => {
        impl $imp<&BigInt> for BigInt {
            fn $method(&mut self, rhs: &BigInt) {
                *self = $func(&*self, rhs);
            }
        }

        impl $imp<BigInt> for BigInt {
            fn $method(&mut self, rhs: BigInt) {
                *self = $func(&*self, &rhs);
            }
        }

        impl $imp<i64> for BigInt {
            fn $method(&mut self, rhs: i64) {
                *self = $func(&*self, &BigInt::from(rhs));
            }
        }
    };
}

forward_binop!(impl Add, add, add);
forward_binop!(impl Sub, sub, sub);
forward_binop!(impl Mul, mul, mul);
forward_binop!(impl Div, div, div);
forward_binop!(impl Rem, rem, rem);

forward_assign!(impl AddAssign, add_assign, add);
forward_assign!(impl SubAssign, sub_assign, sub);
forward_assign!(impl MulAssign, mul_assign, mul);
forward_assign!(impl DivAssign, div_assign, div);
forward_assign!(impl RemAssign, rem_assign, rem);

impl Sum for BigInt {
    fn sum<I: Iterator<Item = BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::zero(), |acc, x| add(&acc, &x))
    }
}

impl<'a> Sum<&'a BigInt> for BigInt {
    fn sum<I: Iterator<Item = &'a BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::zero(), |acc, x| add(&acc, x))
    }
}

impl Product for BigInt {
    fn product<I: Iterator<Item = BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::one(), |acc, x| mul(&acc, &x))
    }
}

impl<'a> Product<&'a BigInt> for BigInt {
    fn product<I: Iterator<Item = &'a BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::one(), |acc, x| mul(&acc, x))
    }
}
