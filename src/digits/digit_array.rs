// ============================================================================
// Digit Array
// Fixed-position decimal digits, lead (most significant) digit first
// ============================================================================

use super::errors::{DigitError, DigitResult};
use smallvec::SmallVec;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of digit positions stored inline before spilling to the heap.
pub const INLINE_DIGITS: usize = 16;

/// Backing storage shared by the arithmetic and trimming routines.
pub(crate) type DigitBuf = SmallVec<[i8; INLINE_DIGITS]>;

/// Fixed-position array of decimal digits.
///
/// Index 0 is the lead (most significant) digit, index `size() - 1` the least
/// significant one. Digits are normally in `0..=9`, but results of
/// [`plus`](DigitArray::plus) and [`minus`](DigitArray::minus) may leave the
/// lead digit out of range:
///
/// - `> 9`: uncollected carry
/// - `< 0`: uncollected borrow (`-11` marks a borrow that found nothing to
///   take from)
///
/// Use [`is_lead_digit_overflowing`](DigitArray::is_lead_digit_overflowing) and
/// [`collect_overflow_from_lead_digit`](DigitArray::collect_overflow_from_lead_digit)
/// to reconcile it. A digit array always has at least one position.
///
/// # Example
/// ```
/// use digit_array::digits::DigitArray;
///
/// let a = DigitArray::new(&[7, 5])?;
/// let b = DigitArray::new(&[8, 5])?;
/// let mut sum = a.plus(&b);
/// assert_eq!(sum.digits(), &[16, 0]);
/// assert_eq!(sum.collect_overflow_from_lead_digit(), 1);
/// assert_eq!(sum.to_string(), "60");
/// # Ok::<(), digit_array::digits::DigitError>(())
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<i8>", into = "Vec<i8>"))]
pub struct DigitArray {
    digits: DigitBuf,
}

impl DigitArray {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from an ordered digit sequence, lead digit first.
    ///
    /// Digit values are taken as-is; out-of-range values are allowed.
    ///
    /// # Errors
    /// Returns `EmptyArray` if `digits` is empty.
    pub fn new(digits: &[i8]) -> DigitResult<Self> {
        if digits.is_empty() {
            return Err(DigitError::EmptyArray);
        }
        Ok(Self::from_buf(DigitBuf::from_slice(digits)))
    }

    /// Create an all-zero array with `size` positions.
    ///
    /// # Errors
    /// Returns `EmptyArray` if `size` is zero.
    pub fn zeroed(size: usize) -> DigitResult<Self> {
        if size == 0 {
            return Err(DigitError::EmptyArray);
        }
        Ok(Self::from_buf(SmallVec::from_elem(0, size)))
    }

    /// Create the normalized digits of `value`, without leading zeros.
    ///
    /// Zero is represented by the single position `{0}`.
    pub fn from_integer(value: u64) -> Self {
        Self::from_buf(digits_of(value as u128))
    }

    /// Wrap an already-built buffer. Callers guarantee it is non-empty.
    #[inline]
    pub(crate) fn from_buf(digits: DigitBuf) -> Self {
        debug_assert!(!digits.is_empty(), "digit array must not be empty");
        Self { digits }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Number of digit positions.
    #[inline]
    pub fn size(&self) -> usize {
        self.digits.len()
    }

    /// Digit value at `index`.
    ///
    /// # Errors
    /// Returns `IndexOutOfRange` if `index >= size()`.
    #[inline]
    pub fn get(&self, index: usize) -> DigitResult<i8> {
        self.digits
            .get(index)
            .copied()
            .ok_or(DigitError::IndexOutOfRange {
                index,
                size: self.digits.len(),
            })
    }

    /// The lead (most significant) digit.
    #[inline]
    pub fn lead_digit(&self) -> i8 {
        self.digits[0]
    }

    /// All digits, lead digit first.
    #[inline]
    pub fn digits(&self) -> &[i8] {
        &self.digits
    }

    /// Iterate over the digits, lead digit first.
    pub fn iter(&self) -> impl Iterator<Item = i8> + '_ {
        self.digits.iter().copied()
    }

    /// Check that every position holds a digit in `0..=9`.
    pub fn is_normalized(&self) -> bool {
        self.digits.iter().all(|d| (0..=9).contains(d))
    }

    /// Polynomial hash of the digits (`h = h * 31 + digit`), lead digit first.
    ///
    /// Equal arrays produce equal hash codes. Wraps on overflow.
    pub fn hash_code(&self) -> i64 {
        self.digits
            .iter()
            .fold(0i64, |h, &d| h.wrapping_mul(31).wrapping_add(d as i64))
    }

    #[inline]
    pub(crate) fn lead_digit_mut(&mut self) -> &mut i8 {
        &mut self.digits[0]
    }
}

/// Normalized decimal digits of `value`, lead digit first.
fn digits_of(mut value: u128) -> DigitBuf {
    let mut digits = DigitBuf::new();
    loop {
        digits.push((value % 10) as i8);
        value /= 10;
        if value == 0 {
            break;
        }
    }
    digits.reverse();
    digits
}

// ============================================================================
// Conversions
// ============================================================================

impl TryFrom<Vec<i8>> for DigitArray {
    type Error = DigitError;

    fn try_from(digits: Vec<i8>) -> Result<Self, Self::Error> {
        if digits.is_empty() {
            return Err(DigitError::EmptyArray);
        }
        Ok(Self::from_buf(DigitBuf::from_vec(digits)))
    }
}

impl TryFrom<&[i8]> for DigitArray {
    type Error = DigitError;

    fn try_from(digits: &[i8]) -> Result<Self, Self::Error> {
        Self::new(digits)
    }
}

impl From<DigitArray> for Vec<i8> {
    fn from(array: DigitArray) -> Self {
        array.digits.into_vec()
    }
}

// ============================================================================
// Conversion from rust_decimal (for API boundaries)
// ============================================================================

impl DigitArray {
    /// Convert from a non-negative integral `rust_decimal::Decimal`.
    ///
    /// # Errors
    /// Returns `InvalidInput` if the value is negative or has a fractional part.
    pub fn from_decimal(d: rust_decimal::Decimal) -> DigitResult<Self> {
        if d.is_sign_negative() && !d.is_zero() {
            return Err(DigitError::InvalidInput);
        }

        let normalized = d.normalize();
        if normalized.scale() != 0 {
            return Err(DigitError::InvalidInput);
        }

        Ok(Self::from_buf(digits_of(normalized.mantissa().unsigned_abs())))
    }

    /// Convert to `rust_decimal::Decimal`.
    ///
    /// # Errors
    /// - `DenormalizedOperand` if any position is outside `0..=9`
    /// - `Overflow` if the value exceeds the range of `Decimal`
    pub fn to_decimal(&self) -> DigitResult<rust_decimal::Decimal> {
        use rust_decimal::Decimal;

        let mut value = Decimal::ZERO;
        for (index, &digit) in self.digits.iter().enumerate() {
            if !(0..=9).contains(&digit) {
                return Err(DigitError::DenormalizedOperand { index, digit });
            }
            value = value
                .checked_mul(Decimal::TEN)
                .and_then(|v| v.checked_add(Decimal::from(digit)))
                .ok_or(DigitError::Overflow)?;
        }
        Ok(value)
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Display for DigitArray {
    /// Concatenates each digit's decimal form, lead digit first. No separators
    /// and no leading-zero suppression; out-of-range digits print as-is.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in &self.digits {
            write!(f, "{}", digit)?;
        }
        Ok(())
    }
}

impl fmt::Debug for DigitArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DigitArray({:?})", self.digits.as_slice())
    }
}

// ============================================================================
// Tests
// ============================================================================
