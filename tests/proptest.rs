//! Property-based tests for digit array arithmetic.

use digit_array::prelude::*;
use proptest::prelude::*;

fn normalized(max_len: usize) -> impl Strategy<Value = Vec<i8>> {
    prop::collection::vec(0i8..=9, 1..=max_len)
}

/// Two normalized digit vectors of the same width.
fn same_width(max_len: usize) -> impl Strategy<Value = (Vec<i8>, Vec<i8>)> {
    (1..=max_len).prop_flat_map(|n| {
        (
            prop::collection::vec(0i8..=9, n),
            prop::collection::vec(0i8..=9, n),
        )
    })
}

fn value_of(digits: &[i8]) -> u64 {
    digits.iter().fold(0u64, |v, &d| v * 10 + d as u64)
}

fn da(digits: &[i8]) -> DigitArray {
    DigitArray::new(digits).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Plus and Minus produce max(operand sizes) positions.
    #[test]
    fn result_size_is_max_of_operands(a in normalized(24), b in normalized(24)) {
        let (a, b) = (da(&a), da(&b));
        let expected = a.size().max(b.size());
        prop_assert_eq!(a.plus(&b).size(), expected);
        prop_assert_eq!(a.minus(&b).unwrap().size(), expected);
    }

    /// Plus is positionally symmetric.
    #[test]
    fn plus_is_commutative(a in normalized(24), b in normalized(24)) {
        let (a, b) = (da(&a), da(&b));
        prop_assert_eq!(a.plus(&b), b.plus(&a));
    }

    /// Only the lead digit may be left outside 0..=9.
    #[test]
    fn only_lead_digit_may_overflow(a in normalized(24), b in normalized(24)) {
        let (a, b) = (da(&a), da(&b));
        for result in [a.plus(&b), a.minus(&b).unwrap()] {
            prop_assert!(result.digits()[1..].iter().all(|d| (0..=9).contains(d)));
        }
    }

    /// Collecting the carry of a same-width sum reproduces integer addition.
    #[test]
    fn plus_matches_integer_addition((a, b) in same_width(18)) {
        let width = a.len() as u32;
        let mut sum = da(&a).plus(&da(&b));
        let carry = sum.collect_overflow_from_lead_digit();

        prop_assert!(sum.is_normalized());
        prop_assert!((0..=1).contains(&carry));
        prop_assert_eq!(
            carry as u64 * 10u64.pow(width) + value_of(sum.digits()),
            value_of(&a) + value_of(&b)
        );
    }

    /// Without underflow, Minus is exact and needs no collection.
    #[test]
    fn minus_matches_integer_subtraction((a, b) in same_width(18)) {
        let (hi, lo) = if value_of(&a) >= value_of(&b) { (a, b) } else { (b, a) };
        let diff = da(&hi).minus(&da(&lo)).unwrap();

        prop_assert!(!diff.is_lead_digit_overflowing());
        prop_assert_eq!(value_of(diff.digits()), value_of(&hi) - value_of(&lo));
    }

    /// Adding back what was subtracted restores the minuend.
    #[test]
    fn minus_then_plus_restores((a, b) in same_width(18)) {
        let (hi, lo) = if value_of(&a) >= value_of(&b) { (a, b) } else { (b, a) };
        let (hi, lo) = (da(&hi), da(&lo));
        prop_assert_eq!(hi.minus(&lo).unwrap().plus(&lo), hi);
    }

    /// Trimming then re-padding to the original width is lossless.
    #[test]
    fn trim_round_trip(a in normalized(24)) {
        let a = da(&a);
        prop_assert_eq!(a.trim_leading_zeros().with_leading_zeros(a.size()), a.clone());
        prop_assert_eq!(a.trim_trailing_zeros().with_trailing_zeros(a.size()), a);
    }

    /// Trimming never produces an empty array.
    #[test]
    fn trim_is_never_empty(a in prop::collection::vec(0i8..=1, 1..12)) {
        let a = da(&a);
        prop_assert!(a.trim_leading_zeros().size() >= 1);
        prop_assert!(a.trim_trailing_zeros().size() >= 1);
    }

    /// Collection on a normalized lead digit is a no-op returning 0.
    #[test]
    fn collect_on_normalized_is_noop(a in normalized(24)) {
        let original = da(&a);
        let mut collected = original.clone();
        prop_assert_eq!(collected.collect_overflow_from_lead_digit(), 0);
        prop_assert_eq!(collected, original);
    }

    /// Rendering concatenates digits lead first.
    #[test]
    fn display_matches_digits(a in normalized(24)) {
        let expected: String = a.iter().map(|d| d.to_string()).collect();
        prop_assert_eq!(da(&a).to_string(), expected);
    }
}
