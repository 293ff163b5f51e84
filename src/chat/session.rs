use anyhow::{Context, Result, anyhow, bail};
use inquire::Text;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};
use std::fs;
use std::path::PathBuf;

use super::command::{Input, SlashCommand, SlashCommandCompleter, parse_input};
use super::ui;
use crate::api::{ChatBackend, HttpChatClient};
use crate::config::{ModelOption, ResolvedConfig, find_model};
use crate::session::{ChatController, Key, KeyAction};
use crate::ui::{Spinner, Style, is_prompt_cancelled};

/// Configuration for a chat session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Base URL of the chat backend (for display).
    pub endpoint: String,
    /// Models offered by `/model`.
    pub models: Vec<ModelOption>,
}

impl From<&ResolvedConfig> for SessionConfig {
    fn from(resolved: &ResolvedConfig) -> Self {
        Self {
            endpoint: resolved.endpoint.clone(),
            models: resolved.models.clone(),
        }
    }
}

/// Whether the REPL keeps reading lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// An interactive chat session.
///
/// Reads lines from the terminal and maps each one onto a
/// [`ChatController`] operation.
pub struct ChatSession<B> {
    config: SessionConfig,
    controller: ChatController<B>,
}

impl ChatSession<HttpChatClient> {
    /// Creates a session talking to the resolved endpoint.
    pub fn connect(resolved: &ResolvedConfig) -> Self {
        let backend = HttpChatClient::new(resolved.endpoint.clone());
        Self::new(SessionConfig::from(resolved), backend, resolved.model.clone())
    }
}

impl<B: ChatBackend> ChatSession<B> {
    pub fn new(config: SessionConfig, backend: B, model: String) -> Self {
        let controller = ChatController::new(backend, model).with_models(config.models.clone());
        Self { config, controller }
    }

    pub const fn controller(&self) -> &ChatController<B> {
        &self.controller
    }

    pub async fn run(&mut self) -> Result<()> {
        ui::print_header();
        ui::print_sidebar(self.controller.state());
        ui::print_transcript(&self.controller.state().messages);

        let prompt_style = Styled::new("❯")
            .with_fg(Color::LightBlue)
            .with_attr(Attributes::BOLD);
        let mut render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);

        // Non-highlighted suggestions: gray
        render_config.option = StyleSheet::new().with_fg(Color::Grey);
        // Highlighted suggestion: purple
        render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));

        loop {
            let continuing = !self.controller.state().input.is_empty();
            let input = Text::new(if continuing { "…" } else { "" })
                .with_render_config(render_config)
                .with_autocomplete(SlashCommandCompleter)
                .with_help_message("Type a message, /help for commands, Ctrl+C to quit")
                .prompt();

            match input {
                Ok(line) => {
                    if self.handle_line(&line).await == Flow::Quit {
                        break;
                    }
                }
                Err(e) if is_prompt_cancelled(&e) => {
                    println!(); // Clear line before goodbye message
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }

        ui::print_goodbye();
        Ok(())
    }

    /// Handles one line typed at the prompt.
    ///
    /// While a multi-line message is being composed, every line is message
    /// text; slash commands are only recognized at the start of a message.
    pub async fn handle_line(&mut self, line: &str) -> Flow {
        if !self.controller.state().input.is_empty() {
            self.handle_text(line).await;
            return Flow::Continue;
        }

        match parse_input(line) {
            Input::Empty => Flow::Continue,
            Input::Command(cmd) => self.handle_command(cmd),
            Input::Text(text) => {
                self.handle_text(&text).await;
                Flow::Continue
            }
        }
    }

    /// A trailing backslash acts like Shift+Enter: the line is added to the
    /// pending input and a newline is inserted instead of sending.
    async fn handle_text(&mut self, line: &str) {
        let (body, shift_held) = line
            .strip_suffix('\\')
            .map_or((line, false), |body| (body, true));

        let mut pending = self.controller.state().input.clone();
        pending.push_str(body);
        self.controller.set_input(pending);

        if shift_held {
            if self.controller.submit_on_enter(Key::Enter, true).await == KeyAction::PassThrough {
                let mut pending = self.controller.state().input.clone();
                pending.push('\n');
                self.controller.set_input(pending);
            }
            return;
        }

        if self.controller.state().input.trim().is_empty() {
            self.controller.set_input(String::new());
            return;
        }

        let spinner = Spinner::thinking();
        let action = self.controller.submit_on_enter(Key::Enter, false).await;
        spinner.stop();

        if let KeyAction::Submitted(Some(_)) = action
            && let Some(reply) = self.controller.state().messages.last()
        {
            ui::print_message(reply);
        }
    }

    fn handle_command(&mut self, cmd: SlashCommand) -> Flow {
        match cmd {
            SlashCommand::Attach(path) => self.attach(path.as_deref()),
            SlashCommand::Clear => {
                self.controller.archive_and_clear();
                if let Some(archived) = self.controller.state().conversations.last() {
                    ui::print_success(&format!("Archived \"{}\"", archived.name));
                }
                ui::print_transcript(&self.controller.state().messages);
            }
            SlashCommand::Config => ui::print_config(&self.config, self.controller.state()),
            SlashCommand::Help => ui::print_help(),
            SlashCommand::Model(None) => {
                self.controller.toggle_model_menu();
                if self.controller.state().model_menu_open {
                    ui::print_model_menu(
                        &self.config.models,
                        &self.controller.state().selected_model,
                    );
                } else {
                    println!("{}", Style::hint("Model menu closed"));
                    println!();
                }
            }
            SlashCommand::Model(Some(query)) => self.select_model(&query),
            SlashCommand::Open(arg) => self.open(arg.as_deref()),
            SlashCommand::Quit => return Flow::Quit,
            SlashCommand::Refresh => {
                self.controller.refresh();
                ui::print_success("Started a new chat");
                ui::print_transcript(&self.controller.state().messages);
            }
            SlashCommand::Sidebar => {
                self.controller.toggle_sidebar();
                ui::print_sidebar(self.controller.state());
            }
            SlashCommand::Unknown(cmd) => {
                ui::print_error(&format!("Unknown command: /{cmd}"));
            }
        }
        Flow::Continue
    }

    /// Accepts a catalog id or label. Unknown ids are passed through and the
    /// controller logs the warning.
    fn select_model(&mut self, query: &str) {
        let id = find_model(&self.config.models, query)
            .map_or_else(|| query.to_string(), |model| model.id.clone());

        ui::print_success(&format!("Model set to {}", Style::value(&id)));
        self.controller.select_model(id);
    }

    fn open(&mut self, arg: Option<&str>) {
        let Some(arg) = arg else {
            ui::print_error("Usage: /open <number>");
            return;
        };

        let index = match arg.parse::<usize>() {
            Ok(n) if n >= 1 => n - 1,
            _ => {
                ui::print_error(&format!("Invalid conversation number: {arg}"));
                return;
            }
        };

        match self.controller.open_conversation(index) {
            Ok(()) => ui::print_transcript(&self.controller.state().messages),
            Err(e) => ui::print_error(&e.to_string()),
        }
    }

    fn attach(&mut self, path: Option<&str>) {
        let Some(path) = path else {
            ui::print_error("Usage: /attach <path>");
            return;
        };

        match attachment_name(path) {
            Ok(name) => {
                self.controller.attach_file(&name);
                if let Some(message) = self.controller.state().messages.last() {
                    ui::print_message(message);
                }
            }
            Err(e) => ui::print_error(&format!("{e:#}")),
        }
    }
}

/// Resolves `path` to the name of an existing file. Contents are not read.
fn attachment_name(path: &str) -> Result<String> {
    let path = expand_home(path)?;
    let metadata =
        fs::metadata(&path).with_context(|| format!("Failed to access file: {}", path.display()))?;

    if !metadata.is_file() {
        bail!("Not a file: {}", path.display());
    }

    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| anyhow!("Not a file: {}", path.display()))
}

fn expand_home(path: &str) -> Result<PathBuf> {
    match path.strip_prefix("~/") {
        Some(rest) => dirs::home_dir()
            .map(|home| home.join(rest))
            .ok_or_else(|| anyhow!("Failed to determine home directory")),
        None => Ok(PathBuf::from(path)),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::api::RequestError;
    use crate::config::builtin_models;
    use crate::session::testing::ScriptedBackend;
    use crate::session::{FALLBACK_REPLY, Message, SEED_GREETING};
    use tempfile::TempDir;

    fn session(replies: Vec<Result<String, RequestError>>) -> ChatSession<ScriptedBackend> {
        let config = SessionConfig {
            endpoint: "http://localhost:8000".to_string(),
            models: builtin_models(),
        };
        ChatSession::new(
            config,
            ScriptedBackend::replying(replies),
            "gemini-1.5-flash".to_string(),
        )
    }

    #[tokio::test]
    async fn test_text_line_is_sent() {
        let mut s = session(vec![Ok("Hello there".to_string())]);

        let flow = s.handle_line("Hello").await;

        assert_eq!(flow, Flow::Continue);
        assert_eq!(
            s.controller().state().messages,
            vec![
                Message::seed(),
                Message::user("Hello"),
                Message::bot("Hello there"),
            ]
        );
    }

    #[tokio::test]
    async fn test_blank_line_sends_nothing() {
        let mut s = session(vec![]);

        s.handle_line("   ").await;

        assert_eq!(s.controller().state().messages.len(), 1);
        assert!(s.controller().backend().requests().is_empty());
    }

    #[tokio::test]
    async fn test_backslash_continues_message() {
        let mut s = session(vec![Ok("ok".to_string())]);

        s.handle_line("first line\\").await;
        assert_eq!(s.controller().state().input, "first line\n");
        assert_eq!(s.controller().state().messages.len(), 1);

        // Slash commands are message text while composing.
        s.handle_line("/help").await;

        let requests = s.controller().backend().requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].prompt, "first line\n/help");
        assert!(s.controller().state().input.is_empty());
    }

    #[tokio::test]
    async fn test_double_slash_sends_leading_slash_text() {
        let mut s = session(vec![Ok("Looks fine".to_string())]);

        let flow = s.handle_line("//etc/hosts looks wrong?").await;

        assert_eq!(flow, Flow::Continue);
        let requests = s.controller().backend().requests();
        assert_eq!(requests[0].prompt, "/etc/hosts looks wrong?");
        assert_eq!(
            s.controller().state().messages[1],
            Message::user("/etc/hosts looks wrong?")
        );
    }

    #[tokio::test]
    async fn test_failed_send_shows_fallback() {
        let mut s = session(vec![Err(RequestError::Status(500))]);

        s.handle_line("Hi").await;

        let last = s.controller().state().messages.last().unwrap();
        assert_eq!(last.text, FALLBACK_REPLY);
    }

    #[tokio::test]
    async fn test_quit_commands() {
        let mut s = session(vec![]);
        assert_eq!(s.handle_line("/quit").await, Flow::Quit);
        assert_eq!(s.handle_line("/q").await, Flow::Quit);
    }

    #[tokio::test]
    async fn test_clear_then_open() {
        let mut s = session(vec![Ok("reply".to_string())]);
        s.handle_line("Hello").await;
        let transcript = s.controller().state().messages.clone();

        s.handle_line("/clear").await;
        assert_eq!(s.controller().state().messages, vec![Message::seed()]);
        assert_eq!(
            s.controller().state().conversations[0].name,
            SEED_GREETING.chars().take(20).collect::<String>()
        );

        s.handle_line("/open 1").await;
        assert_eq!(s.controller().state().messages, transcript);
    }

    #[tokio::test]
    async fn test_open_rejects_bad_numbers() {
        let mut s = session(vec![]);
        s.handle_line("/clear").await;

        for line in ["/open", "/open 0", "/open two", "/open 5"] {
            assert_eq!(s.handle_line(line).await, Flow::Continue);
            assert_eq!(s.controller().state().messages, vec![Message::seed()]);
        }
    }

    #[tokio::test]
    async fn test_refresh_does_not_archive() {
        let mut s = session(vec![Ok("reply".to_string())]);
        s.handle_line("Hello").await;

        s.handle_line("/refresh").await;

        assert_eq!(s.controller().state().messages, vec![Message::seed()]);
        assert!(s.controller().state().conversations.is_empty());
    }

    #[tokio::test]
    async fn test_model_selection_by_label_and_unknown_id() {
        let mut s = session(vec![Ok("a".to_string()), Ok("b".to_string())]);

        s.handle_line("/model Gemini Pro").await;
        assert_eq!(s.controller().state().selected_model, "gemini-pro");
        s.handle_line("question").await;

        s.handle_line("/model experimental").await;
        assert_eq!(s.controller().state().selected_model, "experimental");
        s.handle_line("another").await;

        let models: Vec<_> = s
            .controller()
            .backend()
            .requests()
            .into_iter()
            .map(|r| r.model)
            .collect();
        assert_eq!(models, vec!["gemini-pro", "experimental"]);
    }

    #[tokio::test]
    async fn test_model_menu_and_sidebar_toggle() {
        let mut s = session(vec![]);

        s.handle_line("/model").await;
        assert!(s.controller().state().model_menu_open);
        s.handle_line("/model").await;
        assert!(!s.controller().state().model_menu_open);

        s.handle_line("/sidebar").await;
        assert!(!s.controller().state().sidebar_open);
    }

    #[tokio::test]
    async fn test_attach_records_file_name_only() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("quarterly report.pdf");
        fs::write(&file_path, "secret contents").unwrap();
        let mut s = session(vec![]);

        s.handle_line(&format!("/attach {}", file_path.display()))
            .await;

        let last = s.controller().state().messages.last().unwrap();
        assert_eq!(last, &Message::user("📎 quarterly report.pdf"));
        assert!(s.controller().backend().requests().is_empty());
    }

    #[tokio::test]
    async fn test_attach_missing_file_is_reported() {
        let mut s = session(vec![]);

        s.handle_line("/attach /nonexistent/path/file.txt").await;

        assert_eq!(s.controller().state().messages.len(), 1);
    }

    #[test]
    fn test_attachment_name_rejects_directory() {
        let temp_dir = TempDir::new().unwrap();
        let result = attachment_name(temp_dir.path().to_str().unwrap());
        assert!(result.unwrap_err().to_string().contains("Not a file"));
    }

    #[test]
    fn test_expand_home() {
        let expanded = expand_home("~/notes.txt").unwrap();
        assert!(expanded.ends_with("notes.txt"));
        assert!(!expanded.starts_with("~"));
        assert_eq!(
            expand_home("relative/notes.txt").unwrap(),
            PathBuf::from("relative/notes.txt")
        );
    }
}
