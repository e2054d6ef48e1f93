//! Test-only helpers shared by unit and integration tests.

use std::path::Path;

use anyhow::Result;
use tempfile::TempDir;

use crate::core::brackets::closer_for;
use crate::core::tictactoe::Position;
use crate::io::config::{CONFIG_FILE, KatasConfig, write_config};

/// Parse a position written as `"X.O/.XO/..X"`. Panics on malformed text.
pub fn position(text: &str) -> Position {
    text.parse()
        .unwrap_or_else(|err| panic!("invalid test position '{text}': {err}"))
}

/// Mirror `openers` into the closers that balance them: `"([<"` becomes `">])"`.
///
/// Characters that are not openers are mirrored unchanged.
pub fn mirror_brackets(openers: &str) -> String {
    openers
        .chars()
        .rev()
        .map(|ch| closer_for(ch).unwrap_or(ch))
        .collect()
}

/// Temporary working directory for CLI and config tests.
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    pub fn new() -> Result<Self> {
        Ok(Self {
            dir: tempfile::tempdir()?,
        })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `katas.toml` into the directory.
    pub fn write_config(&self, cfg: &KatasConfig) -> Result<()> {
        write_config(&self.path().join(CONFIG_FILE), cfg)
    }

    /// Write raw text as `katas.toml`, bypassing validation.
    pub fn write_raw_config(&self, contents: &str) -> Result<()> {
        std::fs::write(self.path().join(CONFIG_FILE), contents)?;
        Ok(())
    }
}
