//! # yantra - Terminal Chat Client
//!
//! `yantra` is a command-line chat client for the Yukti Yantra assistant. It
//! sends each prompt to a single `POST /chat` endpoint and shows the reply.
//!
//! ## Features
//!
//! - **Interactive chat**: a REPL with slash commands (`yantra` / `yantra chat`)
//! - **Conversation history**: archive the current chat with `/clear` and
//!   reopen it with `/open`, for the lifetime of the session
//! - **Model selection**: switch models at any time with `/model`
//! - **One-shot mode**: `yantra ask "prompt"` for scripts and pipes
//!
//! ## Quick Start
//!
//! ```bash
//! # Start chatting against http://localhost:8000
//! yantra
//!
//! # Point at another backend
//! YANTRA_API_URL=https://chat.example.com yantra
//!
//! # One-shot
//! echo "Summarize the plot of Hamlet" | yantra ask --model gemini-pro
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/yantra/config.toml`:
//!
//! ```toml
//! [yantra]
//! endpoint = "http://localhost:8000"
//! model = "gemini-1.5-flash"
//!
//! [[models]]
//! id = "gemini-1.5-flash"
//! label = "Gemini 1.5 Flash"
//! ```

/// Client for the chat backend.
pub mod api;

/// Interactive chat mode.
pub mod chat;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management and model catalog.
pub mod config;

/// Prompt reading from arguments, files and stdin.
pub mod input;

/// Diagnostic logging setup.
pub mod logging;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Chat session state and controller.
pub mod session;

/// Terminal UI components (spinner, colors).
pub mod ui;
