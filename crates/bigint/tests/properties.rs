//! Property tests checked against num-bigint as a reference

use bigint::BigInt;
use num_bigint::BigInt as Reference;
use proptest::prelude::*;
use std::cmp::Ordering;

const DECIMAL: &str = "-?[0-9]{1,40}";

fn pair(s: &str) -> (BigInt, Reference) {
    (s.parse().unwrap(), s.parse().unwrap())
}

proptest! {
    #[test]
    fn decimal_round_trip_is_canonical(s in DECIMAL) {
        let (n, reference) = pair(&s);
        prop_assert_eq!(n.to_string(), reference.to_string());
        prop_assert!(n.digits().iter().all(|&d| d <= 9));
        prop_assert!(n.digit_count() == 1 || n.digits().last() != Some(&0));
        prop_assert!(!(n.is_zero() && n.is_negative()));
    }

    #[test]
    fn from_i64_matches_primitive(v in any::<i64>()) {
        let n = BigInt::from(v);
        prop_assert_eq!(n.to_string(), v.to_string());
        prop_assert_eq!(n.to_i64(), Some(v));
    }

    #[test]
    fn ring_operations_match_reference(a in DECIMAL, b in DECIMAL) {
        let (x, rx) = pair(&a);
        let (y, ry) = pair(&b);
        prop_assert_eq!((&x + &y).to_string(), (&rx + &ry).to_string());
        prop_assert_eq!((&x - &y).to_string(), (&rx - &ry).to_string());
        prop_assert_eq!((&x * &y).to_string(), (&rx * &ry).to_string());
    }

    #[test]
    fn identities_hold(a in DECIMAL) {
        let (x, _) = pair(&a);
        let zero = BigInt::zero();
        prop_assert_eq!(&x + &(-&x), zero.clone());
        prop_assert_eq!(&x * &zero, zero.clone());
        prop_assert_eq!(&x - &x, zero);
    }

    #[test]
    fn division_matches_reference(a in DECIMAL, b in "-?[0-9]{1,12}") {
        let (x, rx) = pair(&a);
        let (y, ry) = pair(&b);
        prop_assume!(!y.is_zero());

        let q = x.try_div(&y).unwrap();
        let r = x.try_rem(&y).unwrap();
        prop_assert_eq!(q.to_string(), (&rx / &ry).to_string());
        prop_assert_eq!(r.to_string(), (&rx % &ry).to_string());

        // remainder follows the dividend's sign and stays below the divisor
        prop_assert!(r.is_zero() || r.is_negative() == x.is_negative());
        prop_assert!(r.abs() < y.abs());
        prop_assert_eq!(&(&q * &y) + &r, x);
    }

    #[test]
    fn zero_divisor_always_fails(a in DECIMAL) {
        let (x, _) = pair(&a);
        prop_assert!(x.try_div(&BigInt::zero()).is_err());
        prop_assert!(x.try_rem(&BigInt::zero()).is_err());
    }

    #[test]
    fn radix_round_trip(a in DECIMAL, base in 2u32..=36) {
        let (x, rx) = pair(&a);
        let rendered = x.to_str_radix(base).unwrap();
        prop_assert_eq!(&rendered, &rx.to_str_radix(base).to_uppercase());
        prop_assert_eq!(BigInt::from_str_radix(&rendered, base).unwrap(), x.clone());
        prop_assert_eq!(
            BigInt::from_str_radix(&rendered.to_lowercase(), base).unwrap(),
            x
        );
    }

    #[test]
    fn ordering_is_total_and_matches_reference(a in DECIMAL, b in DECIMAL) {
        let (x, rx) = pair(&a);
        let (y, ry) = pair(&b);

        let outcomes = [x < y, x == y, x > y];
        prop_assert_eq!(outcomes.iter().filter(|&&o| o).count(), 1);
        prop_assert_eq!(x <= y, x < y || x == y);
        prop_assert_eq!(x >= y, !(x < y));
        prop_assert_eq!(x.cmp(&y), rx.cmp(&ry));
        prop_assert_eq!(x.cmp(&x), Ordering::Equal);
    }

    #[test]
    fn compound_assignment_matches_binary_form(a in DECIMAL, b in DECIMAL) {
        let (x, _) = pair(&a);
        let (y, _) = pair(&b);

        let mut acc = x.clone();
        acc += &y;
        prop_assert_eq!(&acc, &(&x + &y));
        acc -= &y;
        prop_assert_eq!(&acc, &x);
        acc *= &y;
        prop_assert_eq!(&acc, &(&x * &y));
    }
}
