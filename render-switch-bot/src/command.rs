//! Chat command parsing

use render_switch_core::Action;
use thiserror::Error;

/// Reply sent when a known command is used without an account selection.
pub const USAGE: &str =
    "Please use the command correctly: /active <indices> or /suspend <indices>";

/// A recognized lifecycle command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub action: Action,
    /// Raw account selection, handed to the orchestrator unparsed.
    pub indices: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("{USAGE}")]
    MissingIndices,
}

impl Command {
    /// Parse a message.
    ///
    /// `Ok(None)` means the message is not a lifecycle command and should be ignored.
    pub fn parse(text: &str) -> Result<Option<Self>, CommandError> {
        let text = text.trim();
        let (head, rest) = text.split_once(char::is_whitespace).unwrap_or((text, ""));

        // `/suspend@my_bot` in group chats
        let name = head.split('@').next().unwrap_or(head);
        let action = if name.eq_ignore_ascii_case("/suspend") {
            Action::Suspend
        } else if name.eq_ignore_ascii_case("/active") || name.eq_ignore_ascii_case("/resume") {
            Action::Resume
        } else {
            return Ok(None);
        };

        let indices = rest.trim();
        if indices.is_empty() {
            return Err(CommandError::MissingIndices);
        }

        Ok(Some(Self {
            action,
            indices: indices.to_string(),
        }))
    }
}
