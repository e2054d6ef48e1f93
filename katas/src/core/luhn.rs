//! Luhn checksum validation for credit card numbers.

use crate::core::digits::digits_of;
use crate::error::{KataError, Result};

/// Return true if `ccn` passes the Luhn checksum.
pub fn is_credit_card_number(ccn: u64) -> bool {
    passes_luhn(&digits_of(ccn))
}

/// Validate a numeral string with the Luhn checksum.
///
/// Fails on an empty string or any character that is not an ASCII digit.
pub fn is_luhn_valid(ccn: &str) -> Result<bool> {
    if ccn.is_empty() {
        return Err(KataError::EmptyInput {
            what: "card number",
        });
    }
    let digits = ccn
        .chars()
        .enumerate()
        .map(|(position, character)| {
            character
                .to_digit(10)
                .map(|d| d as u8)
                .ok_or(KataError::InvalidDigit {
                    character,
                    position,
                })
        })
        .collect::<Result<Vec<u8>>>()?;
    Ok(passes_luhn(&digits))
}

/// Every second digit counting from the rightmost is doubled; that is the
/// left-based index whose parity equals `len % 2`.
fn passes_luhn(digits: &[u8]) -> bool {
    let parity = digits.len() % 2;
    let total: u32 = digits
        .iter()
        .enumerate()
        .map(|(index, &digit)| {
            let digit = u32::from(digit);
            if index % 2 == parity {
                let doubled = digit * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                digit
            }
        })
        .sum();
    total % 10 == 0
}
