//! Error types for exercise inputs that fall outside a function's contract.
//!
//! Domain answers such as `false`, `""`, or "no winner" are never errors.
//! These variants only describe arguments the functions cannot interpret.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum KataError {
    #[error("invalid digit '{character}' at position {position}")]
    InvalidDigit { character: char, position: usize },

    #[error("{what} must not be empty")]
    EmptyInput { what: &'static str },

    #[error("radix {radix} is out of range (must be 2-36)")]
    InvalidRadix { radix: u32 },

    #[error("matrix row {row} has {got} columns, expected {expected}")]
    RaggedMatrix {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("cannot multiply: left matrix has {left_cols} columns, right matrix has {right_rows} rows")]
    DimensionMismatch { left_cols: usize, right_rows: usize },

    #[error("board must have {expected} cells, got {got}")]
    InvalidBoardLength { expected: usize, got: usize },

    #[error("invalid cell character '{character}' at cell {position}")]
    InvalidCellCharacter { character: char, position: usize },

    #[error("{operation} overflowed")]
    Overflow { operation: &'static str },
}

/// Convenience alias for results carrying a [`KataError`].
pub type Result<T> = std::result::Result<T, KataError>;
