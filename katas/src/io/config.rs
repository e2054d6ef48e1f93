//! CLI configuration stored in `katas.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::answer::OutputFormat;

/// Default config file name, resolved against the working directory.
pub const CONFIG_FILE: &str = "katas.toml";

/// CLI configuration (TOML).
///
/// Missing fields fall back to their defaults, so an empty file is valid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KatasConfig {
    /// Tracing filter used when `RUST_LOG` is unset (e.g. `"katas=debug"`).
    pub log_filter: String,

    /// Answer format when `--format` is not given.
    pub output: OutputFormat,
}

impl Default for KatasConfig {
    fn default() -> Self {
        Self {
            log_filter: "warn".to_string(),
            output: OutputFormat::Plain,
        }
    }
}

impl KatasConfig {
    pub fn validate(&self) -> Result<()> {
        if self.log_filter.trim().is_empty() {
            return Err(anyhow!("log_filter must be non-empty"));
        }
        EnvFilter::try_new(&self.log_filter)
            .with_context(|| format!("log_filter '{}' is not a valid filter", self.log_filter))?;
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `KatasConfig::default()`.
pub fn load_config(path: &Path) -> Result<KatasConfig> {
    if !path.exists() {
        let cfg = KatasConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: KatasConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &KatasConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}
