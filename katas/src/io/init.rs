//! `katas init`: write a default `katas.toml`.

use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use tracing::info;

use super::config::{CONFIG_FILE, KatasConfig, write_config};

/// Options for `init_config`.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// If true, overwrite an existing config file.
    pub force: bool,
}

/// Write the default config into `root`, returning its path.
///
/// Fails if the file already exists unless `options.force` is set.
pub fn init_config(root: &Path, options: &InitOptions) -> Result<PathBuf> {
    let path = root.join(CONFIG_FILE);
    if path.exists() && !options.force {
        return Err(anyhow!(
            "katas init: {} already exists (use --force to overwrite)",
            path.display()
        ));
    }
    if path.is_dir() {
        return Err(anyhow!(
            "katas init: {} exists but is a directory",
            path.display()
        ));
    }
    write_config(&path, &KatasConfig::default())?;
    info!(path = %path.display(), "wrote default config");
    Ok(path)
}
