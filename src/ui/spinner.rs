use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const TICKS: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Shown while waiting on the backend. Cleared on drop.
pub struct Spinner {
    bar: ProgressBar,
}

impl Spinner {
    fn start(label: &'static str) -> Self {
        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner:.magenta} {msg:.dim}") {
            bar.set_style(style.tick_strings(TICKS));
        }
        bar.set_message(label);
        bar.enable_steady_tick(Duration::from_millis(80));
        Self { bar }
    }

    /// A reply is being composed.
    pub fn thinking() -> Self {
        Self::start("Thinking...")
    }

    /// `GET /health` is outstanding.
    pub fn checking() -> Self {
        Self::start("Checking backend...")
    }

    pub fn stop(&self) {
        self.bar.finish_and_clear();
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.bar.finish_and_clear();
    }
}
