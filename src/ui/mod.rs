//! Terminal UI helpers shared by the REPL and the interactive commands.

use anyhow::Result;
use inquire::InquireError;

mod spinner;
mod style;

pub use spinner::Spinner;
pub use style::Style;

/// Whether a prompt ended because the user pressed Ctrl+C or Esc.
pub(crate) const fn is_prompt_cancelled(err: &InquireError) -> bool {
    matches!(
        err,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

/// Runs an interactive step. Returns `Ok(false)` if the user backed out of a
/// prompt, even when the cancellation is wrapped in context.
pub fn completed<F>(step: F) -> Result<bool>
where
    F: FnOnce() -> Result<()>,
{
    match step() {
        Ok(()) => Ok(true),
        Err(e)
            if e.downcast_ref::<InquireError>()
                .is_some_and(is_prompt_cancelled) =>
        {
            Ok(false)
        }
        Err(e) => Err(e),
    }
}
