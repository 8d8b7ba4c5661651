//! Arbitrary precision signed integers over decimal digits
//!
//! [`BigInt`] stores a sign flag and the decimal digits of its magnitude,
//! least significant first. Arithmetic uses the schoolbook algorithms:
//! carry and borrow propagation for `+` and `-`, O(n·m) long multiplication,
//! and long division by repeated subtraction for `/` and `%`. Conversion to
//! and from any base between 2 and 36 is supported.
//!
//! ```
//! use bigint::BigInt;
//!
//! let a: BigInt = "987654321987654321".parse().unwrap();
//! let b: BigInt = "123456789123456789".parse().unwrap();
//! assert_eq!(&a % &b, "9000000009".parse::<BigInt>().unwrap());
//! assert_eq!(BigInt::from_str_radix("FF", 16).unwrap(), 255);
//! assert_eq!(BigInt::from(-255).to_str_radix(16).unwrap(), "-FF");
//! ```

mod digits;
mod error;
mod integer;
mod num;
mod ops;
mod parse;
mod radix;
#[cfg(feature = "serde")]
mod serde_impl;

pub use error::{Error, ErrorKind, Result, TryFromBigIntError};
pub use integer::BigInt;
pub use radix::{MAX_RADIX, MIN_RADIX};
