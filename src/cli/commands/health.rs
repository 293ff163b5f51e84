//! Backend health check command handler.

use anyhow::{Context, Result};

use super::load_resolved_config;
use crate::api::HttpChatClient;
use crate::config::ResolveOptions;
use crate::ui::{Spinner, Style};

pub async fn run_health(options: &ResolveOptions) -> Result<()> {
    let config = load_resolved_config(options)?;
    let client = HttpChatClient::new(config.endpoint);

    let spinner = Spinner::checking();
    let result = client.health().await;
    spinner.stop();

    let health = result.with_context(|| format!("Backend at {} is not healthy", client.base_url()))?;

    println!(
        "{} {} is {}",
        Style::success("✓"),
        Style::secondary(client.base_url()),
        Style::value(&health.status)
    );
    if let Some(model) = health.model {
        println!("  {}  {}", Style::label("default model"), Style::value(model));
    }

    Ok(())
}
