// ============================================================================
// Digit Errors
// Error types for digit array access and positional arithmetic
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors that can occur when accessing or combining digit arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DigitError {
    /// Index outside `[0, size)`
    IndexOutOfRange { index: usize, size: usize },
    /// Operand digit outside `0..=9` where a normalized digit is required
    DenormalizedOperand { index: usize, digit: i8 },
    /// A digit array needs at least one position
    EmptyArray,
    /// Value does not fit the conversion target
    Overflow,
    /// Conversion source is negative or fractional
    InvalidInput,
}

impl fmt::Display for DigitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DigitError::IndexOutOfRange { index, size } => {
                write!(f, "index out of range: {} not in [0, {})", index, size)
            },
            DigitError::DenormalizedOperand { index, digit } => write!(
                f,
                "denormalized operand: digit {} at position {} is outside 0..=9",
                digit, index
            ),
            DigitError::EmptyArray => write!(f, "digit array must have at least one position"),
            DigitError::Overflow => write!(f, "overflow: value exceeds conversion target"),
            DigitError::InvalidInput => {
                write!(f, "invalid input: value must be a non-negative integer")
            },
        }
    }
}

impl std::error::Error for DigitError {}

/// Result type alias for digit array operations
pub type DigitResult<T> = Result<T, DigitError>;
