//! Configure command handler for editing default settings.

use anyhow::{Context, Result, bail};
use inquire::{Select, Text};

use crate::config::{ConfigFile, ConfigManager, DEFAULT_ENDPOINT, ModelOption, YantraConfig};
use crate::ui::{Style, completed};

/// Runs the configure command.
///
/// With `show`, prints the current defaults; otherwise lets the user
/// interactively set the default endpoint and model.
pub fn run_configure(show: bool) -> Result<()> {
    if show {
        let manager = ConfigManager::new()?;
        let config = manager.load_or_default()?;
        print_current_defaults(&config);
        println!(
            "  {}",
            Style::hint(format!("File: {}", manager.config_path().display()))
        );
        return Ok(());
    }

    if !completed(run_configure_inner)? {
        println!();
        println!("{}", Style::hint("Configuration unchanged"));
    }
    Ok(())
}

fn run_configure_inner() -> Result<()> {
    let manager = ConfigManager::new()?;
    let mut config = manager.load_or_default()?;

    print_current_defaults(&config);

    let endpoint = prompt_endpoint(config.yantra.endpoint.as_deref())?;
    let model = select_model(&config.model_catalog(), config.yantra.model.as_deref())?;

    config.yantra = YantraConfig {
        endpoint: Some(endpoint),
        model: Some(model),
    };

    manager.save(&config)?;

    println!();
    println!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display().to_string())
    );

    Ok(())
}

fn print_current_defaults(config: &ConfigFile) {
    println!("{}", Style::header("Current defaults"));
    println!(
        "  {}  {}",
        Style::label("endpoint"),
        config
            .yantra
            .endpoint
            .as_deref()
            .map_or_else(|| Style::secondary("(not set)"), Style::value)
    );
    println!(
        "  {}     {}",
        Style::label("model"),
        config
            .yantra
            .model
            .as_deref()
            .map_or_else(|| Style::secondary("(not set)"), Style::value)
    );
    println!();
}

fn prompt_endpoint(current: Option<&str>) -> Result<String> {
    let endpoint = Text::new("Chat backend URL:")
        .with_default(current.unwrap_or(DEFAULT_ENDPOINT))
        .with_help_message("Base URL serving POST /chat")
        .prompt()
        .context("Failed to read endpoint")?;

    validate_endpoint(&endpoint)
}

fn validate_endpoint(endpoint: &str) -> Result<String> {
    let endpoint = endpoint.trim();
    if endpoint.is_empty() {
        bail!("Endpoint cannot be empty");
    }
    if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
        bail!("Endpoint must start with http:// or https://");
    }
    Ok(endpoint.trim_end_matches('/').to_string())
}

fn select_model(models: &[ModelOption], default: Option<&str>) -> Result<String> {
    let options: Vec<String> = models
        .iter()
        .map(|m| format!("{} - {}", m.id, m.label))
        .collect();

    let default_index = default
        .and_then(|d| models.iter().position(|m| m.id == d))
        .unwrap_or(0);

    let selection = Select::new("Default model:", options)
        .with_starting_cursor(default_index)
        .prompt()
        .context("Failed to read model")?;

    // Extract id from "id - Label" format
    let id = selection.split(" - ").next().unwrap_or(&selection);
    Ok(id.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_endpoint_trims() {
        assert_eq!(
            validate_endpoint("  https://chat.example.com/ ").unwrap(),
            "https://chat.example.com"
        );
    }

    #[test]
    fn test_validate_endpoint_requires_scheme() {
        let err = validate_endpoint("localhost:8000").unwrap_err();
        assert!(err.to_string().contains("http://"));
    }

    #[test]
    fn test_validate_endpoint_empty() {
        assert!(validate_endpoint("   ").is_err());
    }
}
