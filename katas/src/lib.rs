//! Conditions-and-loops exercises as a library of pure functions.
//!
//! The crate keeps a strict separation:
//!
//! - **[`core`]**: Pure, deterministic exercise functions (bracket balance,
//!   Luhn checksum, digital root, common directory path, tic-tac-toe
//!   evaluation, and smaller numeric, string, geometry, radix, and matrix
//!   helpers). No I/O, no shared state.
//! - **[`io`]**: Side-effecting operations for the `katas` binary (config
//!   file loading and scaffolding).
//!
//! [`solve`] maps a parsed [`solve::Request`] onto the matching core function
//! and [`answer`] renders the result for the command line.

pub mod answer;
pub mod core;
pub mod error;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod solve;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use error::{KataError, Result};
