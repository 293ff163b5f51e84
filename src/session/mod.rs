//! Chat session state and the controller that mutates it.
//!
//! The front end never writes session fields directly; it calls the named
//! operations on [`ChatController`] and re-renders from [`SessionState`].

mod controller;
mod state;

pub use controller::{ChatController, Key, KeyAction, PendingTurn, SessionError, TurnOutcome};
pub use state::{
    ATTACHMENT_GLYPH, CONVERSATION_NAME_LEN, Conversation, FALLBACK_REPLY, Message, SEED_GREETING,
    Sender, SessionState, UNTITLED_CONVERSATION,
};

#[cfg(test)]
pub(crate) mod testing;
