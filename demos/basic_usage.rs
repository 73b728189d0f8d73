// ============================================================================
// Basic Usage Example
// ============================================================================

use digit_array::prelude::*;

fn main() -> Result<(), DigitError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Digit Array Example ===\n");

    let a = DigitArray::new(&[7, 5])?;
    let b = DigitArray::new(&[8, 5])?;

    // Addition leaves the carry in the lead digit
    let mut sum = a.plus(&b);
    println!("{} + {} = {} (overflowing: {})", a, b, sum, sum.is_lead_digit_overflowing());
    let carry = sum.collect_overflow_from_lead_digit();
    println!("collected carry {} -> {}\n", carry, sum);

    // Subtraction ripples borrows, leaving any deficit in the lead digit
    let minuend = DigitArray::new(&[0, 0, 3])?;
    let subtrahend = DigitArray::new(&[0, 0, 5])?;
    let mut diff = minuend.minus(&subtrahend)?;
    println!("{} - {} = {:?}", minuend, subtrahend, diff);
    let borrow = diff.collect_overflow_from_lead_digit();
    println!("collected borrow {} -> {}\n", borrow, diff);

    // Trimming
    let padded = DigitArray::new(&[0, 0, 1, 0])?;
    println!("{} trimmed leading: {}", padded, padded.trim_leading_zeros());
    println!("{} trimmed trailing: {}", padded, padded.trim_trailing_zeros());

    // Errors are values, not aborts
    match padded.get(10) {
        Ok(digit) => println!("digit: {}", digit),
        Err(e) => println!("error: {}", e),
    }

    Ok(())
}
