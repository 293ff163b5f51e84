use thiserror::Error;
use tracing::{debug, info, warn};

use super::state::{ATTACHMENT_GLYPH, Conversation, FALLBACK_REPLY, Message, SessionState};
use crate::api::{ChatBackend, ChatRequest, RequestError};
use crate::config::{ModelOption, builtin_models};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("no conversation at index {index} ({count} archived)")]
    NoSuchConversation { index: usize, count: usize },
}

/// How a send resolved. Both outcomes leave a bot message in the transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    Replied,
    Failed,
}

/// A key press delivered by the front end while the user is typing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Char(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// The key was consumed as a send; `None` if nothing was sent.
    Submitted(Option<TurnOutcome>),
    /// The front end should apply its default handling (e.g. insert a newline).
    PassThrough,
}

/// A send whose user message is already in the transcript and whose reply is
/// still outstanding. Hand it back to
/// [`ChatController::finish_submit`] to record the reply.
#[derive(Debug)]
#[must_use = "the session stays busy until the turn is finished"]
pub struct PendingTurn {
    request: ChatRequest,
}

impl PendingTurn {
    pub const fn request(&self) -> &ChatRequest {
        &self.request
    }
}

/// Appends the fallback reply if a send is dropped before its reply arrives.
struct Unanswered<'a> {
    state: Option<&'a mut SessionState>,
}

impl<'a> Unanswered<'a> {
    const fn new(state: &'a mut SessionState) -> Self {
        Self { state: Some(state) }
    }

    fn disarm(mut self) {
        self.state = None;
    }
}

impl Drop for Unanswered<'_> {
    fn drop(&mut self) {
        if let Some(state) = self.state.take() {
            warn!("send dropped before the reply arrived");
            state.messages.push(Message::bot(FALLBACK_REPLY));
            state.is_busy = false;
        }
    }
}

/// Owns a chat session and funnels every user action through a named
/// operation.
pub struct ChatController<B> {
    state: SessionState,
    backend: B,
    models: Vec<ModelOption>,
}

impl<B: ChatBackend> ChatController<B> {
    pub fn new(backend: B, model: impl Into<String>) -> Self {
        Self {
            state: SessionState::new(model),
            backend,
            models: builtin_models(),
        }
    }

    /// Replaces the model catalog `select_model` checks against.
    #[must_use]
    pub fn with_models(mut self, models: Vec<ModelOption>) -> Self {
        self.models = models;
        self
    }

    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    pub const fn backend(&self) -> &B {
        &self.backend
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.state.input = text.into();
    }

    /// Sends `text` and waits for the reply.
    ///
    /// Returns `None` when nothing was sent: blank input, or a send already
    /// in flight. Dropping the returned future before it completes records
    /// the fallback reply and leaves the session idle.
    pub async fn submit(&mut self, text: &str) -> Option<TurnOutcome> {
        let turn = self.begin_submit(text)?;
        let guard = Unanswered::new(&mut self.state);
        let result = self.backend.complete(turn.request()).await;
        guard.disarm();
        Some(self.finish_submit(turn, result))
    }

    /// Synchronous half of [`submit`](Self::submit): records the user message
    /// and marks the session busy.
    pub fn begin_submit(&mut self, text: &str) -> Option<PendingTurn> {
        if text.trim().is_empty() {
            return None;
        }
        if self.state.is_busy {
            debug!("send rejected: a reply is still outstanding");
            return None;
        }

        self.state.messages.push(Message::user(text));
        self.state.input.clear();
        self.state.is_busy = true;

        Some(PendingTurn {
            request: ChatRequest {
                prompt: text.to_string(),
                model: self.state.selected_model.clone(),
            },
        })
    }

    /// Records the reply (or the fallback) for `turn`. The reply is appended
    /// to whatever transcript is current when it arrives.
    pub fn finish_submit(
        &mut self,
        turn: PendingTurn,
        result: Result<String, RequestError>,
    ) -> TurnOutcome {
        let ChatRequest { model, .. } = turn.request;
        let outcome = match result {
            Ok(reply) => {
                self.state.messages.push(Message::bot(reply));
                TurnOutcome::Replied
            }
            Err(err) => {
                debug!(error = %err, model = %model, "chat request failed");
                self.state.messages.push(Message::bot(FALLBACK_REPLY));
                TurnOutcome::Failed
            }
        };
        self.state.is_busy = false;
        outcome
    }

    /// Enter without Shift sends the pending input; anything else is left to
    /// the front end.
    pub async fn submit_on_enter(&mut self, key: Key, shift_held: bool) -> KeyAction {
        if key == Key::Enter && !shift_held {
            let text = self.state.input.clone();
            KeyAction::Submitted(self.submit(&text).await)
        } else {
            KeyAction::PassThrough
        }
    }

    /// Starts a fresh transcript without archiving the current one.
    pub fn refresh(&mut self) {
        self.state.messages = vec![Message::seed()];
        self.state.input.clear();
    }

    /// Archives the current transcript and starts a fresh one.
    pub fn archive_and_clear(&mut self) {
        let messages = std::mem::replace(&mut self.state.messages, vec![Message::seed()]);
        let conversation = Conversation::archive(messages);
        info!(name = %conversation.name, "archived conversation");
        self.state.conversations.push(conversation);
    }

    /// Selects the model for later sends. Ids outside the catalog are
    /// accepted with a warning; returns whether `id` was in the catalog.
    pub fn select_model(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        let known = self.models.iter().any(|m| m.id == id);
        if !known {
            warn!(model = %id, "model is not in the catalog, using it anyway");
        }
        self.state.selected_model = id;
        known
    }

    /// Replaces the transcript with an archived one. The replaced transcript
    /// is discarded.
    pub fn open_conversation(&mut self, index: usize) -> Result<(), SessionError> {
        let conversation =
            self.state
                .conversations
                .get(index)
                .ok_or(SessionError::NoSuchConversation {
                    index,
                    count: self.state.conversations.len(),
                })?;
        self.state.messages = conversation.messages.clone();
        Ok(())
    }

    /// Records an attachment by name. File contents are never read.
    pub fn attach_file(&mut self, file_name: &str) {
        self.state
            .messages
            .push(Message::user(format!("{ATTACHMENT_GLYPH} {file_name}")));
    }

    pub const fn toggle_sidebar(&mut self) {
        self.state.sidebar_open = !self.state.sidebar_open;
    }

    pub const fn toggle_model_menu(&mut self) {
        self.state.model_menu_open = !self.state.model_menu_open;
    }
}
