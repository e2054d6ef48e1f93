//! Small integer exercises: FizzBuzz, factorial, and range sums.

use std::fmt;

use serde::{Deserialize, Serialize};

/// FizzBuzz result: either the original number or one of the words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FizzBuzz {
    Number(u64),
    Word(FizzBuzzWord),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FizzBuzzWord {
    Fizz,
    Buzz,
    FizzBuzz,
}

impl fmt::Display for FizzBuzz {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FizzBuzz::Number(n) => write!(f, "{n}"),
            FizzBuzz::Word(FizzBuzzWord::Fizz) => write!(f, "Fizz"),
            FizzBuzz::Word(FizzBuzzWord::Buzz) => write!(f, "Buzz"),
            FizzBuzz::Word(FizzBuzzWord::FizzBuzz) => write!(f, "FizzBuzz"),
        }
    }
}

/// Multiples of 15 give `FizzBuzz`, of 5 `Buzz`, of 3 `Fizz`; anything else
/// is returned unchanged.
pub fn fizz_buzz(num: u64) -> FizzBuzz {
    if num % 15 == 0 {
        FizzBuzz::Word(FizzBuzzWord::FizzBuzz)
    } else if num % 5 == 0 {
        FizzBuzz::Word(FizzBuzzWord::Buzz)
    } else if num % 3 == 0 {
        FizzBuzz::Word(FizzBuzzWord::Fizz)
    } else {
        FizzBuzz::Number(num)
    }
}

/// `n!`, or `None` if it does not fit in a `u64` (`n > 20`).
pub fn factorial(n: u64) -> Option<u64> {
    (2..=n).try_fold(1u64, |acc, k| acc.checked_mul(k))
}

/// Sum of all integers from `from` to `to`, inclusive. Empty ranges sum to 0.
///
/// Returns `None` if the sum does not fit in an `i64`.
pub fn sum_between(from: i64, to: i64) -> Option<i64> {
    if from > to {
        return Some(0);
    }
    let count = i128::from(to) - i128::from(from) + 1;
    let doubled = count.checked_mul(i128::from(from) + i128::from(to))?;
    i64::try_from(doubled / 2).ok()
}
