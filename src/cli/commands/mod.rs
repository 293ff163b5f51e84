//! Subcommand implementations.

use anyhow::Result;

use crate::config::{ConfigManager, ResolveOptions, ResolvedConfig, resolve_config};

/// One-shot prompt command handler.
pub mod ask;

/// Chat mode command handler.
pub mod chat;

/// Configure command handler.
pub mod configure;

/// Backend health check command handler.
pub mod health;

/// Model listing command handler.
pub mod models;

/// Loads the config file and merges it with CLI overrides.
pub(crate) fn load_resolved_config(options: &ResolveOptions) -> Result<ResolvedConfig> {
    let manager = ConfigManager::new()?;
    let file_config = manager.load_or_default()?;
    Ok(resolve_config(options, &file_config))
}
