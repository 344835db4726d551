//! User-facing capabilities the lifecycle operations ask their caller for.
//!
//! The core never touches the terminal itself. The binary supplies a
//! terminal-backed implementation; tests supply a scripted one.

use crate::error::RegistryError;

/// Prompts, confirmations and text editing, supplied by the caller.
pub trait Interaction {
    /// Show an informational message.
    fn inform(&mut self, message: &str);

    /// Ask a yes/no question. `false` means the user declined.
    fn confirm(&mut self, question: &str) -> Result<bool, RegistryError>;

    /// Ask for a single line of text.
    fn prompt(&mut self, label: &str) -> Result<String, RegistryError>;

    /// Let the user edit `initial` in a text editor.
    ///
    /// Returns `None` when the edit was abandoned without saving.
    fn edit_text(&mut self, initial: &str) -> Result<Option<String>, RegistryError>;
}
