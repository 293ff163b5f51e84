use anyhow::{Result, bail};

use super::load_resolved_config;
use crate::api::{ChatBackend, HttpChatClient};
use crate::config::ResolveOptions;
use crate::input::{PromptSource, read_prompt};
use crate::session::{ChatController, TurnOutcome};
use crate::ui::Spinner;

pub struct AskOptions {
    pub resolve: ResolveOptions,
    pub prompt: Option<String>,
    pub file: Option<String>,
}

/// Sends one prompt and prints the reply (or the fallback message) to stdout.
pub async fn run_ask(options: AskOptions) -> Result<TurnOutcome> {
    let config = load_resolved_config(&options.resolve)?;
    let prompt = read_prompt(PromptSource::from_args(options.prompt, options.file))?;

    if prompt.trim().is_empty() {
        bail!("Error: Prompt is empty");
    }

    let backend = HttpChatClient::new(config.endpoint);
    let spinner = Spinner::thinking();
    let (outcome, reply) = ask(backend, config.model, &prompt).await?;
    spinner.stop();

    println!("{reply}");
    Ok(outcome)
}

/// Runs a single turn through a fresh session.
pub async fn ask<B: ChatBackend>(
    backend: B,
    model: String,
    prompt: &str,
) -> Result<(TurnOutcome, String)> {
    let mut controller = ChatController::new(backend, model);

    let Some(outcome) = controller.submit(prompt).await else {
        bail!("Error: Prompt is empty");
    };

    let reply = controller
        .state()
        .messages
        .last()
        .map(|m| m.text.clone())
        .unwrap_or_default();
    Ok((outcome, reply))
}
