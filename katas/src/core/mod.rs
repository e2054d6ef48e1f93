//! Pure exercise functions.
//!
//! Core modules must be free of I/O side effects. Each function maps literal
//! inputs to a literal output and keeps no state between calls.

pub mod brackets;
pub mod digits;
pub mod geometry;
pub mod luhn;
pub mod matrix;
pub mod numeric;
pub mod paths;
pub mod radix;
pub mod text;
pub mod tictactoe;
