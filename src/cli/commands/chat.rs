use anyhow::Result;
use tracing::debug;

use super::load_resolved_config;
use crate::chat::ChatSession;
use crate::config::ResolveOptions;

pub async fn run_chat(options: &ResolveOptions) -> Result<()> {
    let config = load_resolved_config(options)?;
    debug!(endpoint = %config.endpoint, model = %config.model, "starting chat session");

    let mut session = ChatSession::connect(&config);
    session.run().await
}
