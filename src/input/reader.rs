use anyhow::{Context, Result, bail};
use std::fs;
use std::io::{self, Read};

pub const MAX_PROMPT_SIZE: usize = 256 * 1024; // 256KB

/// Where a one-shot prompt comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptSource {
    Literal(String),
    File(String),
    Stdin,
}

impl PromptSource {
    /// A literal prompt wins over a file; with neither, stdin is read.
    pub fn from_args(prompt: Option<String>, file: Option<String>) -> Self {
        match (prompt, file) {
            (Some(prompt), _) => Self::Literal(prompt),
            (None, Some(file)) => Self::File(file),
            (None, None) => Self::Stdin,
        }
    }
}

pub fn read_prompt(source: PromptSource) -> Result<String> {
    let prompt = match source {
        PromptSource::Literal(text) => text,
        PromptSource::File(path) => read_file(&path)?,
        PromptSource::Stdin => read_stdin()?,
    };
    check_size(prompt.len())?;
    Ok(prompt)
}

fn check_size(size: usize) -> Result<()> {
    if size > MAX_PROMPT_SIZE {
        bail!(
            "Error: Prompt size ({:.1} KB) exceeds maximum allowed size (256 KB).",
            size as f64 / 1024.0
        );
    }
    Ok(())
}

fn read_file(path: &str) -> Result<String> {
    let metadata = fs::metadata(path).with_context(|| format!("Failed to access file: {path}"))?;
    check_size(metadata.len() as usize)?;

    fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))
}

#[allow(clippy::significant_drop_tightening)]
fn read_stdin() -> Result<String> {
    let mut buffer = Vec::new();
    let mut chunk = [0u8; 8192];
    let mut stdin = io::stdin().lock();

    loop {
        let bytes_read = stdin
            .read(&mut chunk)
            .context("Failed to read from stdin")?;

        if bytes_read == 0 {
            break;
        }

        buffer.extend_from_slice(&chunk[..bytes_read]);
        check_size(buffer.len())?;
    }

    String::from_utf8(buffer).context("Input is not valid UTF-8")
}
