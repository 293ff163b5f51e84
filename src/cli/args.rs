use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "yantra")]
#[command(about = "Terminal chat client for the Yukti Yantra AI assistant")]
#[command(version)]
pub struct Args {
    /// Chat backend base URL (overrides YANTRA_API_URL and the config file)
    #[arg(short = 'e', long, global = true)]
    pub endpoint: Option<String>,

    /// Model identifier
    #[arg(short = 'm', long, global = true)]
    pub model: Option<String>,

    /// Enable debug logging on stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactive chat (the default)
    Chat,
    /// Send a single prompt and print the reply
    Ask {
        /// Prompt text (reads from --file or stdin if not provided)
        prompt: Option<String>,

        /// Read the prompt from a file
        #[arg(short = 'f', long)]
        file: Option<String>,
    },
    /// List available models
    Models,
    /// Check that the chat backend is reachable
    Health,
    /// Configure default endpoint and model
    Configure {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}
