//! XDG-style path utilities for the configuration directory.
//!
//! Paths follow XDG Base Directory conventions on every platform rather than
//! OS-specific locations.

use anyhow::{Result, anyhow};
use std::path::PathBuf;

/// Returns the configuration directory for yantra.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/yantra` if `XDG_CONFIG_HOME` is set
/// 2. `~/.config/yantra` otherwise
pub fn config_dir() -> Result<PathBuf> {
    match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => Ok(PathBuf::from(xdg).join("yantra")),
        _ => Ok(home_dir()?.join(".config").join("yantra")),
    }
}

fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().ok_or_else(|| anyhow!("Failed to determine home directory"))
}
