/// Greeting placed into every fresh transcript.
pub const SEED_GREETING: &str = "Hi there! How can I assist you today?";

/// Bot reply substituted for any failed request.
pub const FALLBACK_REPLY: &str = "Sorry, I encountered an error. Please try again.";

/// Name given to an archived conversation with no messages.
pub const UNTITLED_CONVERSATION: &str = "New Chat";

/// Number of characters of the first message kept as a conversation name.
pub const CONVERSATION_NAME_LEN: usize = 20;

/// Prefix of the message recorded for an attached file.
pub const ATTACHMENT_GLYPH: &str = "📎";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub sender: Sender,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::User,
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::Bot,
        }
    }

    pub fn seed() -> Self {
        Self::bot(SEED_GREETING)
    }
}

/// A named, frozen copy of a past transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversation {
    pub name: String,
    pub messages: Vec<Message>,
}

impl Conversation {
    /// Archives `messages`, naming the conversation after its first message.
    pub fn archive(messages: Vec<Message>) -> Self {
        let name = messages.first().map_or_else(
            || UNTITLED_CONVERSATION.to_string(),
            |m| m.text.chars().take(CONVERSATION_NAME_LEN).collect(),
        );
        Self { name, messages }
    }
}

/// Everything the front end reads to render a session.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub messages: Vec<Message>,
    pub input: String,
    pub selected_model: String,
    pub conversations: Vec<Conversation>,
    pub is_busy: bool,
    pub sidebar_open: bool,
    pub model_menu_open: bool,
}

impl SessionState {
    pub fn new(selected_model: impl Into<String>) -> Self {
        Self {
            messages: vec![Message::seed()],
            input: String::new(),
            selected_model: selected_model.into(),
            conversations: Vec::new(),
            is_busy: false,
            sidebar_open: true,
            model_menu_open: false,
        }
    }
}
