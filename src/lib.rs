// ============================================================================
// Digit Array Library
// Fixed-width decimal digit arithmetic with caller-controlled normalization
// ============================================================================

//! # Digit Array
//!
//! Fixed-position arrays of decimal digits with positional addition and
//! subtraction, for building arbitrary-precision or fixed-width decimal types.
//!
//! ## Features
//!
//! - **Positional Plus/Minus** with carry and ripple-borrow propagation
//! - **Deferred overflow**: the lead digit holds any carry or borrow the
//!   array could not absorb, until the caller collects it
//! - **Fixed width**: results are `max(operand sizes)` positions, never wider
//! - **Zero trimming** on either end
//!
//! ## Example
//!
//! ```rust
//! use digit_array::prelude::*;
//!
//! let a = DigitArray::new(&[3, 9, 4])?;
//! let b = DigitArray::new(&[9, 9])?;
//!
//! // 394 + 990 does not fit three positions
//! let mut sum = a.plus(&b);
//! assert!(sum.is_lead_digit_overflowing());
//! let carry = sum.collect_overflow_from_lead_digit();
//! assert_eq!((carry, sum.to_string()), (1, "384".to_string()));
//!
//! // 394 - 990 borrows past the lead digit
//! let mut diff = a.minus(&b)?;
//! let borrow = diff.collect_overflow_from_lead_digit();
//! assert_eq!((borrow, diff.to_string()), (-1, "404".to_string()));
//! # Ok::<(), DigitError>(())
//! ```

pub mod digits;

// Re-exports for convenience
pub mod prelude {
    pub use crate::digits::{DigitArray, DigitError, DigitResult, BORROW_EXHAUSTED};
}
