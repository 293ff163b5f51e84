//! Model listing command handler.

use anyhow::Result;

use super::load_resolved_config;
use crate::config::{ModelOption, ResolveOptions};
use crate::ui::Style;

/// Prints the model catalog, marking the model a new session would start with.
pub fn print_models(options: &ResolveOptions) -> Result<()> {
    let config = load_resolved_config(options)?;

    println!("{}\n", Style::header("Available models"));
    for line in model_lines(&config.models, &config.model) {
        println!("{line}");
    }

    Ok(())
}

fn model_lines(models: &[ModelOption], selected: &str) -> Vec<String> {
    let width = models.iter().map(|m| m.id.len()).max().unwrap_or(0);

    models
        .iter()
        .map(|m| {
            let marker = if m.id == selected {
                format!(" {}", Style::selected_marker())
            } else {
                String::new()
            };
            format!(
                "  {}  {}{marker}",
                Style::value(format!("{:<width$}", m.id)),
                Style::secondary(&m.label)
            )
        })
        .collect()
}
