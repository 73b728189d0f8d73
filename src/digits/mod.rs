// ============================================================================
// Digits Module
// Fixed-position decimal digit arrays with deferred carry/borrow handling
// ============================================================================
//
// This module provides:
// - DigitArray: ordered decimal digits, lead (most significant) digit first
// - Positional Plus/Minus that leave overflow in the lead digit
// - Lead digit overflow query and collection
// - Leading/trailing zero trimming
// - DigitError: error types for access and subtraction preconditions
//
// Design principles:
// - Results never grow beyond max(operand sizes)
// - Only the lead digit may be left outside 0..=9 after an operation
// - Normalization happens only when the caller asks for it
// - Fallible operations return Result (no panics)

mod arithmetic;
mod digit_array;
mod errors;
mod trim;

pub use arithmetic::BORROW_EXHAUSTED;
pub use digit_array::{DigitArray, INLINE_DIGITS};
pub use errors::{DigitError, DigitResult};
