// ============================================================================
// Trimming and Padding
// ============================================================================

use super::digit_array::{DigitArray, DigitBuf};

impl DigitArray {
    /// Copy starting at the first non-zero digit.
    ///
    /// An all-zero array trims down to a single zero position, never to an
    /// empty array.
    pub fn trim_leading_zeros(&self) -> DigitArray {
        let digits = self.digits();
        let start = digits
            .iter()
            .position(|&d| d != 0)
            .unwrap_or(digits.len() - 1);
        DigitArray::from_buf(DigitBuf::from_slice(&digits[start..]))
    }

    /// Copy ending at the last non-zero digit.
    ///
    /// An all-zero array trims down to a single zero position.
    pub fn trim_trailing_zeros(&self) -> DigitArray {
        let digits = self.digits();
        let end = digits.iter().rposition(|&d| d != 0).map_or(1, |i| i + 1);
        DigitArray::from_buf(DigitBuf::from_slice(&digits[..end]))
    }

    /// Copy padded with zeros on the lead side up to `width` positions.
    pub fn with_leading_zeros(&self, width: usize) -> DigitArray {
        let pad = width.saturating_sub(self.size());
        let mut digits = DigitBuf::from_elem(0, pad);
        digits.extend_from_slice(self.digits());
        DigitArray::from_buf(digits)
    }

    /// Copy padded with zeros on the least significant side up to `width`
    /// positions.
    pub fn with_trailing_zeros(&self, width: usize) -> DigitArray {
        let mut digits = DigitBuf::from_slice(self.digits());
        if width > digits.len() {
            digits.resize(width, 0);
        }
        DigitArray::from_buf(digits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn da(digits: &[i8]) -> DigitArray {
        DigitArray::new(digits).unwrap()
    }

    #[test]
    fn test_trim_trailing_zeros() {
        assert_eq!(da(&[2, 5]).trim_trailing_zeros(), da(&[2, 5]));
        assert_eq!(da(&[2, 5, 0]).trim_trailing_zeros(), da(&[2, 5]));
        assert_eq!(da(&[0, 1, 0, 0]).trim_trailing_zeros(), da(&[0, 1]));
    }

    #[test]
    fn test_trim_leading_zeros() {
        assert_eq!(da(&[2, 5]).trim_leading_zeros(), da(&[2, 5]));
        assert_eq!(da(&[0, 2, 5]).trim_leading_zeros(), da(&[2, 5]));
        assert_eq!(da(&[0, 0, 1, 0]).trim_leading_zeros(), da(&[1, 0]));
    }

    #[test]
    fn test_trim_all_zeros_keeps_one_position() {
        assert_eq!(da(&[0, 0, 0]).trim_leading_zeros(), da(&[0]));
        assert_eq!(da(&[0, 0, 0]).trim_trailing_zeros(), da(&[0]));
        assert_eq!(da(&[0]).trim_leading_zeros(), da(&[0]));
    }

    #[test]
    fn test_trim_leaves_original_untouched() {
        let a = da(&[0, 4, 0]);
        let _ = a.trim_leading_zeros();
        let _ = a.trim_trailing_zeros();
        assert_eq!(a, da(&[0, 4, 0]));
    }

    #[test]
    fn test_trim_keeps_out_of_range_lead() {
        assert_eq!(da(&[-11, 9, 0]).trim_trailing_zeros(), da(&[-11, 9]));
        assert_eq!(da(&[-11, 9, 0]).trim_leading_zeros(), da(&[-11, 9, 0]));
    }

    #[test]
    fn test_padding() {
        assert_eq!(da(&[1, 0]).with_leading_zeros(4), da(&[0, 0, 1, 0]));
        assert_eq!(da(&[0, 1]).with_trailing_zeros(4), da(&[0, 1, 0, 0]));
        // Already wide enough
        assert_eq!(da(&[1, 2, 3]).with_leading_zeros(2), da(&[1, 2, 3]));
        assert_eq!(da(&[1, 2, 3]).with_trailing_zeros(0), da(&[1, 2, 3]));
    }

    #[test]
    fn test_trim_then_pad_round_trip() {
        let a = da(&[0, 0, 1, 0]);
        assert_eq!(a.trim_leading_zeros().with_leading_zeros(a.size()), a);
        assert_eq!(a.trim_trailing_zeros().with_trailing_zeros(a.size()), a);
    }
}
