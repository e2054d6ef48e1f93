//! I/O helpers for the `katas` binary.

pub mod config;
pub mod init;
