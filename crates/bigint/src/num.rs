//! `num-traits` integration

use num_traits::{Num, One, Signed, Zero};

use crate::error::Error;
use crate::BigInt;

impl Zero for BigInt {
    fn zero() -> Self {
        BigInt::zero()
    }

    fn is_zero(&self) -> bool {
        BigInt::is_zero(self)
    }
}

impl One for BigInt {
    fn one() -> Self {
        BigInt::one()
    }
}

impl Num for BigInt {
    type FromStrRadixErr = Error;

    fn from_str_radix(src: &str, radix: u32) -> Result<Self, Self::FromStrRadixErr> {
        BigInt::from_str_radix(src, radix)
    }
}

impl Signed for BigInt {
    fn abs(&self) -> Self {
        BigInt::abs(self)
    }

    fn abs_sub(&self, other: &Self) -> Self {
        if self <= other {
            BigInt::zero()
        } else {
            self - other
        }
    }

    fn signum(&self) -> Self {
        BigInt::signum(self)
    }

    fn is_positive(&self) -> bool {
        BigInt::is_positive(self)
    }

    fn is_negative(&self) -> bool {
        BigInt::is_negative(self)
    }
}
