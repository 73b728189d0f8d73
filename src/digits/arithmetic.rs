// ============================================================================
// Positional Arithmetic
// Digit-wise addition and subtraction with lead-digit overflow signalling
// ============================================================================
//
// Both operators pair digits by index (index 0 with index 0) and produce
// `max(lhs.size(), rhs.size())` positions. Carries and borrows are resolved
// for every position except the lead digit, which is left out of range when
// the result does not fit. Callers reconcile it with
// `collect_overflow_from_lead_digit`.
//
// Work happens in an i16 buffer so that sums of already out-of-range lead
// digits do not wrap before the final narrowing.

use super::digit_array::{DigitArray, DigitBuf, INLINE_DIGITS};
use super::errors::{DigitError, DigitResult};
use smallvec::SmallVec;
use std::ops::Add;

/// Lead digit written by `minus` when a borrow finds nothing to take from.
pub const BORROW_EXHAUSTED: i8 = -11;

type WideBuf = SmallVec<[i16; INLINE_DIGITS]>;

#[inline]
fn digit_at(array: &DigitArray, index: usize) -> i16 {
    array.digits().get(index).map_or(0, |&d| d as i16)
}

fn narrow(wide: &[i16]) -> DigitBuf {
    wide.iter()
        .map(|&v| v.clamp(i8::MIN as i16, i8::MAX as i16) as i8)
        .collect()
}

/// Nearest position at or left of `start` holding a strictly positive value.
fn find_borrowable_index(digits: &[i16], start: usize) -> Option<usize> {
    (0..=start).rev().find(|&k| digits[k] > 0)
}

impl DigitArray {
    // ========================================================================
    // Addition
    // ========================================================================

    /// Add two digit arrays position by position.
    ///
    /// Carries ripple from the least significant position up to index 1.
    /// The lead digit keeps whatever it accumulates, so a value above 9 there
    /// is the overflow signal; the array never grows.
    pub fn plus(&self, other: &DigitArray) -> DigitArray {
        let size = self.size().max(other.size());
        let mut result: WideBuf = (0..size)
            .map(|i| digit_at(self, i) + digit_at(other, i))
            .collect();

        for i in (1..size).rev() {
            let value = result[i];
            if value > 9 {
                result[i - 1] += value / 10;
                result[i] = value % 10;
            }
        }

        tracing::trace!(lead = result[0], size, "digit array addition");
        DigitArray::from_buf(narrow(&result))
    }

    // ========================================================================
    // Subtraction
    // ========================================================================

    /// Subtract `other` from `self` position by position.
    ///
    /// The minuend is widened with zeros to `max(self.size(), other.size())`.
    /// A position that goes negative borrows from the nearest positive
    /// position to its left, filling the positions in between with 9. When
    /// nothing to the left can lend:
    ///
    /// - at the lead position, the lead becomes `diff - 10`
    /// - elsewhere, the lead becomes [`BORROW_EXHAUSTED`] (`-11`), the
    ///   positions in between become 9 and the current position `diff + 10`
    ///
    /// # Errors
    /// Returns `DenormalizedOperand` if any digit of `other` is outside
    /// `0..=9`, reporting the least significant offending position.
    pub fn minus(&self, other: &DigitArray) -> DigitResult<DigitArray> {
        if let Some((index, &digit)) = other
            .digits()
            .iter()
            .enumerate()
            .rev()
            .find(|(_, d)| !(0..=9).contains(*d))
        {
            return Err(DigitError::DenormalizedOperand { index, digit });
        }

        let size = self.size().max(other.size());
        let mut result: WideBuf = (0..size).map(|i| digit_at(self, i)).collect();

        for i in (0..size).rev() {
            let subtrahend = digit_at(other, i);
            if subtrahend == 0 {
                continue;
            }

            let diff = result[i] - subtrahend;
            if diff >= 0 {
                result[i] = diff;
                continue;
            }

            let borrow_from = i
                .checked_sub(1)
                .and_then(|start| find_borrowable_index(&result, start));

            match borrow_from {
                Some(k) => {
                    result[k] -= 1;
                    result[k + 1..i].fill(9);
                    result[i] = diff + 10;
                },
                None if i == 0 => {
                    result[0] = diff - 10;
                    tracing::debug!(lead = result[0], "borrow exhausted at lead digit");
                },
                None => {
                    result[0] = BORROW_EXHAUSTED as i16;
                    result[1..i].fill(9);
                    result[i] = diff + 10;
                    tracing::debug!(position = i, "borrow exhausted below lead digit");
                },
            }
        }

        Ok(DigitArray::from_buf(narrow(&result)))
    }

    // ========================================================================
    // Lead Digit Overflow
    // ========================================================================

    /// Check whether the lead digit is outside `0..=9`.
    #[inline]
    pub fn is_lead_digit_overflowing(&self) -> bool {
        !(0..=9).contains(&self.lead_digit())
    }

    /// Normalize the lead digit in place and return the amount to carry into
    /// the next more significant position, which the caller maintains.
    ///
    /// - negative lead: becomes `10 - (|lead| % 10)`, returns `lead / 10`
    /// - otherwise: becomes `lead % 10`, returns `lead / 10`
    ///
    /// Division truncates toward zero, so `-11` collects to `9` and returns
    /// `-1`. A normalized lead digit is left unchanged and `0` is returned.
    pub fn collect_overflow_from_lead_digit(&mut self) -> i8 {
        let lead = self.lead_digit();
        let overflow = lead / 10;
        let collected = if lead < 0 {
            (10 - lead.unsigned_abs() % 10) as i8
        } else {
            lead % 10
        };

        *self.lead_digit_mut() = collected;
        tracing::trace!(lead, collected, overflow, "collected lead digit overflow");
        overflow
    }
}

impl Add<&DigitArray> for &DigitArray {
    type Output = DigitArray;

    #[inline]
    fn add(self, rhs: &DigitArray) -> Self::Output {
        self.plus(rhs)
    }
}

impl Add for DigitArray {
    type Output = DigitArray;

    #[inline]
    fn add(self, rhs: DigitArray) -> Self::Output {
        self.plus(&rhs)
    }
}

// ============================================================================
// Tests
// ============================================================================
