use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use super::catalog::{DEFAULT_MODEL, ModelOption, builtin_models};
use crate::paths;
use crate::ui::Style;

/// Environment variable that overrides the configured endpoint.
pub const ENDPOINT_ENV: &str = "YANTRA_API_URL";

/// Endpoint used when nothing else is configured.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000";

/// Default settings in the `[yantra]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct YantraConfig {
    /// Base URL of the chat backend.
    pub endpoint: Option<String>,
    /// Default model identifier.
    pub model: Option<String>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/yantra/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Default settings.
    #[serde(default)]
    pub yantra: YantraConfig,
    /// Model picker entries. Empty means the built-in list.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub models: Vec<ModelOption>,
}

impl ConfigFile {
    /// The model picker entries, falling back to the built-in list.
    pub fn model_catalog(&self) -> Vec<ModelOption> {
        if self.models.is_empty() {
            builtin_models()
        } else {
            self.models.clone()
        }
    }
}

/// Resolved configuration after merging CLI arguments, environment and config file.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Base URL of the chat backend.
    pub endpoint: String,
    /// The model selected at startup.
    pub model: String,
    /// Models offered in the picker.
    pub models: Vec<ModelOption>,
}

/// CLI overrides that take precedence over everything else.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Endpoint override.
    pub endpoint: Option<String>,
    /// Model override.
    pub model: Option<String>,
}

/// Resolves configuration.
///
/// Endpoint: CLI option, then `YANTRA_API_URL`, then config file, then
/// `http://localhost:8000`. Model: CLI option, then config file, then
/// `gemini-1.5-flash`.
pub fn resolve_config(options: &ResolveOptions, config_file: &ConfigFile) -> ResolvedConfig {
    let endpoint = options
        .endpoint
        .clone()
        .or_else(endpoint_from_env)
        .or_else(|| config_file.yantra.endpoint.clone())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    let model = options
        .model
        .clone()
        .or_else(|| config_file.yantra.model.clone())
        .unwrap_or_else(|| DEFAULT_MODEL.to_string());

    let models = config_file.model_catalog();

    // Unknown models are allowed; the backend decides what it serves.
    if !models.iter().any(|m| m.id == model) {
        eprintln!(
            "{} Model '{}' is not in the configured models list\n\
             Configured models: {}\n\
             Proceeding anyway...\n",
            Style::warning("Warning:"),
            model,
            models
                .iter()
                .map(|m| m.id.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }

    ResolvedConfig {
        endpoint,
        model,
        models,
    }
}

fn endpoint_from_env() -> Option<String> {
    std::env::var(ENDPOINT_ENV)
        .ok()
        .filter(|value| !value.trim().is_empty())
}

/// Manages loading and saving configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/yantra/config.toml`
    /// or `~/.config/yantra/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile =
            toml::from_str(&contents).with_context(|| "Failed to parse config file")?;

        Ok(config_file)
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;

        fs::write(&self.config_path, contents).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(())
    }

    /// Loads the config file, treating a missing file as empty.
    ///
    /// A file that exists but cannot be parsed is still an error.
    pub fn load_or_default(&self) -> Result<ConfigFile> {
        if self.config_path.exists() {
            self.load()
        } else {
            Ok(ConfigFile::default())
        }
    }
}
