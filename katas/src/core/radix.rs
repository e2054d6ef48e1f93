//! Positional representation of integers in bases 2 through 36.

use crate::error::{KataError, Result};

/// Render `num` in base `radix` using lowercase digits (`365, 4` is `"11231"`).
///
/// Negative numbers get a leading `-`.
pub fn to_nary_string(num: i64, radix: u32) -> Result<String> {
    if !(2..=36).contains(&radix) {
        return Err(KataError::InvalidRadix { radix });
    }

    let base = u64::from(radix);
    let mut remaining = num.unsigned_abs();
    let mut digits = Vec::new();
    loop {
        let digit = (remaining % base) as u32;
        let ch = std::char::from_digit(digit, radix).ok_or(KataError::InvalidRadix { radix })?;
        digits.push(ch);
        remaining /= base;
        if remaining == 0 {
            break;
        }
    }
    if num < 0 {
        digits.push('-');
    }
    Ok(digits.iter().rev().collect())
}
