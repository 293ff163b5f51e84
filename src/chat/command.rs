use inquire::autocompletion::{Autocomplete, Replacement};

// Available slash commands: (command, description)
pub const SLASH_COMMANDS: &[(&str, &str)] = &[
    ("/attach", "Attach a file by name"),
    ("/clear", "Archive this conversation and start a new one"),
    ("/config", "Show current configuration"),
    ("/help", "Show available commands"),
    ("/model", "Show the model menu, or select a model"),
    ("/open", "Open an archived conversation"),
    ("/quit", "Exit chat mode"),
    ("/refresh", "Start over without archiving"),
    ("/sidebar", "Show or hide the sidebar"),
];

/// Slash command autocompleter
#[derive(Clone, Default)]
pub struct SlashCommandCompleter;

impl Autocomplete for SlashCommandCompleter {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, inquire::CustomUserError> {
        if !input.starts_with('/') {
            return Ok(vec![]);
        }

        let suggestions: Vec<String> = SLASH_COMMANDS
            .iter()
            .filter(|(cmd, _)| cmd.starts_with(input))
            .map(|(cmd, desc)| format!("{cmd}  {desc}"))
            .collect();

        Ok(suggestions)
    }

    fn get_completion(
        &mut self,
        _input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, inquire::CustomUserError> {
        let replacement =
            highlighted_suggestion.map(|s| s.split_whitespace().next().unwrap_or("").to_string());
        Ok(replacement)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlashCommand {
    Attach(Option<String>),
    Clear,
    Config,
    Help,
    Model(Option<String>),
    Open(Option<String>),
    Quit,
    Refresh,
    Sidebar,
    Unknown(String),
}

#[derive(Debug, PartialEq, Eq)]
pub enum Input {
    /// A message to send, exactly as typed.
    Text(String),
    Command(SlashCommand),
    Empty,
}

pub fn parse_input(input: &str) -> Input {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Input::Empty;
    }

    // "//" escapes a message that starts with a slash.
    if trimmed.starts_with("//") {
        return Input::Text(input.replacen('/', "", 1));
    }

    trimmed
        .strip_prefix('/')
        .map_or_else(|| Input::Text(input.to_string()), parse_slash_command)
}

fn parse_slash_command(cmd: &str) -> Input {
    let (name, rest) = cmd
        .split_once(char::is_whitespace)
        .map_or((cmd, ""), |(name, rest)| (name, rest.trim()));
    let arg = (!rest.is_empty()).then(|| rest.to_string());

    let command = match name {
        "attach" => SlashCommand::Attach(arg),
        "clear" => SlashCommand::Clear,
        "config" => SlashCommand::Config,
        "help" => SlashCommand::Help,
        "model" => SlashCommand::Model(arg),
        "open" => SlashCommand::Open(arg),
        "quit" | "exit" | "q" => SlashCommand::Quit,
        "refresh" => SlashCommand::Refresh,
        "sidebar" => SlashCommand::Sidebar,
        _ => SlashCommand::Unknown(cmd.split_whitespace().collect::<Vec<_>>().join(" ")),
    };
    Input::Command(command)
}
