//! Magnitude arithmetic on decimal digit vectors
//!
//! A magnitude is a sequence of decimal digits (each `0..=9`) stored least
//! significant first. Canonical magnitudes are never empty and have no high
//! zero digits, except `[0]` for zero itself. Every routine here accepts
//! canonical input and returns canonical output.

use std::cmp::Ordering;

pub(crate) type Digits = Vec<u8>;

/// Drops high zero digits, leaving at least one digit.
pub(crate) fn trim(digits: &mut Digits) {
    while digits.len() > 1 && digits.last() == Some(&0) {
        digits.pop();
    }
    if digits.is_empty() {
        digits.push(0);
    }
}

pub(crate) fn is_zero(digits: &[u8]) -> bool {
    digits.iter().all(|&d| d == 0)
}

/// Splits an unsigned value into digits, ones place first.
pub(crate) fn from_u128(mut value: u128) -> Digits {
    if value == 0 {
        return vec![0];
    }
    let mut digits = Vec::with_capacity(39);
    while value > 0 {
        digits.push((value % 10) as u8);
        value /= 10;
    }
    digits
}

/// Folds digits back into an unsigned value, `None` on overflow.
pub(crate) fn to_u128(digits: &[u8]) -> Option<u128> {
    digits.iter().rev().try_fold(0u128, |acc, &d| {
        acc.checked_mul(10)?.checked_add(u128::from(d))
    })
}

/// Compares two magnitudes ignoring sign: length first, then digits from the
/// most significant end.
pub(crate) fn abs_compare(a: &[u8], b: &[u8]) -> Ordering {
    a.len()
        .cmp(&b.len())
        .then_with(|| a.iter().rev().cmp(b.iter().rev()))
}

pub(crate) fn add(a: &[u8], b: &[u8]) -> Digits {
    let len = a.len().max(b.len());
    let mut result = Vec::with_capacity(len + 1);
    let mut carry = 0u8;
    let mut i = 0;
    while i < len || carry != 0 {
        let sum = carry + a.get(i).copied().unwrap_or(0) + b.get(i).copied().unwrap_or(0);
        result.push(sum % 10);
        carry = sum / 10;
        i += 1;
    }
    result
}

/// Computes `a - b`. The caller guarantees `|a| >= |b|`.
pub(crate) fn subtract(a: &[u8], b: &[u8]) -> Digits {
    debug_assert_ne!(abs_compare(a, b), Ordering::Less);
    let mut result = Vec::with_capacity(a.len());
    let mut borrow = 0i8;
    for (i, &digit) in a.iter().enumerate() {
        let mut diff = digit as i8 - borrow - b.get(i).copied().unwrap_or(0) as i8;
        if diff < 0 {
            diff += 10;
            borrow = 1;
        } else {
            borrow = 0;
        }
        result.push(diff as u8);
    }
    trim(&mut result);
    result
}

/// Schoolbook long multiplication.
pub(crate) fn multiply(a: &[u8], b: &[u8]) -> Digits {
    let mut product = vec![0u8; a.len() + b.len()];
    for (i, &x) in a.iter().enumerate() {
        let mut carry = 0u32;
        let mut j = 0;
        while j < b.len() || carry != 0 {
            let y = u32::from(b.get(j).copied().unwrap_or(0));
            let current = u32::from(product[i + j]) + u32::from(x) * y + carry;
            product[i + j] = (current % 10) as u8;
            carry = current / 10;
            j += 1;
        }
    }
    trim(&mut product);
    product
}

/// Long division of magnitudes by repeated subtraction.
///
/// Walks the dividend from its most significant digit, shifting each digit
/// into a running remainder and subtracting the divisor while it still fits.
/// The number of subtractions is the next quotient digit, so at most nine
/// subtractions happen per dividend digit. Returns `(quotient, remainder)`.
/// The divisor must be non-zero.
pub(crate) fn div_rem(dividend: &[u8], divisor: &[u8]) -> (Digits, Digits) {
    debug_assert!(!is_zero(divisor));
    let mut quotient = Vec::with_capacity(dividend.len());
    let mut current: Digits = vec![0];

    for &digit in dividend.iter().rev() {
        current.insert(0, digit);
        trim(&mut current);

        let mut count = 0u8;
        while abs_compare(&current, divisor) != Ordering::Less {
            current = subtract(&current, divisor);
            count += 1;
        }
        quotient.push(count);
    }

    quotient.reverse();
    trim(&mut quotient);
    tracing::trace!(
        dividend_digits = dividend.len(),
        divisor_digits = divisor.len(),
        quotient_digits = quotient.len(),
        "long division"
    );
    (quotient, current)
}

/// Divides `digits` in place by a small `base`, returning the remainder.
pub(crate) fn divide_by_base(digits: &mut Digits, base: u32) -> u32 {
    let mut carry = 0u32;
    for digit in digits.iter_mut().rev() {
        carry = carry * 10 + u32::from(*digit);
        *digit = (carry / base) as u8;
        carry %= base;
    }
    trim(digits);
    carry
}
