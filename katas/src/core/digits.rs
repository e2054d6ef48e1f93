//! Base-10 digit helpers: digit sums, digital root, and integer reversal.

/// Decompose `value` into its decimal digits, most significant first.
///
/// Zero yields a single `0` digit.
pub fn digits_of(mut value: u64) -> Vec<u8> {
    if value == 0 {
        return vec![0];
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push((value % 10) as u8);
        value /= 10;
    }
    digits.reverse();
    digits
}

/// Sum of the decimal digits of `value`.
pub fn digit_sum(mut value: u64) -> u64 {
    let mut sum = 0;
    while value > 0 {
        sum += value % 10;
        value /= 10;
    }
    sum
}

/// Repeatedly sum the digits of `value` until a single digit remains.
pub fn digital_root(value: u64) -> u64 {
    let mut current = digit_sum(value);
    while current >= 10 {
        current = digit_sum(current);
    }
    current
}

/// Reverse the decimal digits of `value` (`87354` becomes `45378`).
///
/// Trailing zeros of the input become leading zeros and are dropped.
/// Returns `None` if the reversed number does not fit in a `u64`.
pub fn reverse_integer(mut value: u64) -> Option<u64> {
    let mut reversed: u64 = 0;
    while value > 0 {
        reversed = reversed.checked_mul(10)?.checked_add(value % 10)?;
        value /= 10;
    }
    Some(reversed)
}
