//! Chat mode UI components.

use crate::config::ModelOption;
use crate::session::{Message, Sender, SessionState};
use crate::ui::Style;

use super::command::SLASH_COMMANDS;
use super::session::SessionConfig;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const APP_NAME: &str = "YUKTI YANTRA";

pub fn print_header() {
    println!(
        "{} {} - AI Assistant",
        Style::header(APP_NAME),
        Style::version(format!("v{VERSION}"))
    );
    println!();
}

pub fn print_goodbye() {
    println!("{}", Style::success("Goodbye!"));
}

pub fn print_message(message: &Message) {
    let tag = match message.sender {
        Sender::User => Style::user("you"),
        Sender::Bot => Style::bot("bot"),
    };
    println!("{tag} {}", message.text);
    println!();
}

pub fn print_transcript(messages: &[Message]) {
    for message in messages {
        print_message(message);
    }
}

/// Prints the sidebar when it is open: selected model and archived conversations.
pub fn print_sidebar(state: &SessionState) {
    if !state.sidebar_open {
        println!("{}", Style::hint("Sidebar hidden (/sidebar to show)"));
        println!();
        return;
    }

    println!(
        "  {}  {}",
        Style::label("model"),
        Style::value(&state.selected_model)
    );
    println!("{}", Style::header("Conversations"));
    if state.conversations.is_empty() {
        println!("  {}", Style::secondary("(none yet, /clear archives the current one)"));
    }
    for (i, conversation) in state.conversations.iter().enumerate() {
        println!("  {}  {}", Style::command(i + 1), conversation.name);
    }
    println!();
}

pub fn print_model_menu(models: &[ModelOption], selected: &str) {
    println!("{}", Style::header("Select Model"));
    for model in models {
        let marker = if model.id == selected {
            format!(" {}", Style::selected_marker())
        } else {
            String::new()
        };
        println!(
            "  {}  {}{marker}",
            Style::value(&model.id),
            Style::secondary(&model.label)
        );
    }
    println!("{}", Style::hint("/model <id> to select"));
    println!();
}

pub fn print_config(config: &SessionConfig, state: &SessionState) {
    println!("{}", Style::header("Configuration"));
    println!(
        "  {}      {}",
        Style::label("model"),
        Style::value(&state.selected_model)
    );
    println!(
        "  {}   {}",
        Style::label("endpoint"),
        Style::secondary(&config.endpoint)
    );
    println!(
        "  {}    {}",
        Style::label("archived"),
        Style::value(state.conversations.len())
    );
    println!();
}

pub fn print_help() {
    println!("{}", Style::header("Available commands"));
    let width = SLASH_COMMANDS
        .iter()
        .map(|(cmd, _)| cmd.len())
        .max()
        .unwrap_or(0);
    for (cmd, desc) in SLASH_COMMANDS {
        println!(
            "  {}  {}",
            Style::command(format!("{cmd:<width$}")),
            Style::secondary(desc)
        );
    }
    println!(
        "\n  {}",
        Style::hint("End a line with \\ to continue on the next line")
    );
    println!(
        "  {}",
        Style::hint("Start a message with // to send text beginning with /")
    );
    println!();
}

pub fn print_success(message: &str) {
    println!("{} {message}", Style::success("✓"));
    println!();
}

pub fn print_error(message: &str) {
    eprintln!("{} {message}", Style::error("Error:"));
    eprintln!();
}
