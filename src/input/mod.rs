//! Prompt input for one-shot mode.

mod reader;

pub use reader::{MAX_PROMPT_SIZE, PromptSource, read_prompt};
