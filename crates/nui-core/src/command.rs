//! Command vocabulary
//!
//! The closed set of editor intents the interpreter can produce, plus the
//! event value delivered to listeners for each successful classification.

use serde::{Deserialize, Serialize};

/// Editor intent recognized from free text
///
/// Extending the vocabulary is a code change. Only `DictateText` carries a
/// payload; listeners pattern-match on the tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    /// Clear the active document and forget its file
    NewDocument,

    /// Load a document through the embedding application's file flow
    OpenDocument,

    /// Persist the active document
    SaveDocument,

    /// Toggle bold on the selection or whole document
    ApplyBold,

    /// Toggle italic on the selection or whole document
    ApplyItalic,

    /// Set the foreground color to red
    ColorRed,

    /// Set the foreground color to blue
    ColorBlue,

    /// Insert the payload text at the insertion point
    DictateText,
}

impl Command {
    /// Every command, in declaration order
    pub const ALL: [Command; 8] = [
        Command::NewDocument,
        Command::OpenDocument,
        Command::SaveDocument,
        Command::ApplyBold,
        Command::ApplyItalic,
        Command::ColorRed,
        Command::ColorBlue,
        Command::DictateText,
    ];

    /// Stable snake_case tag, identical to the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::NewDocument => "new_document",
            Command::OpenDocument => "open_document",
            Command::SaveDocument => "save_document",
            Command::ApplyBold => "apply_bold",
            Command::ApplyItalic => "apply_italic",
            Command::ColorRed => "color_red",
            Command::ColorBlue => "color_blue",
            Command::DictateText => "dictate_text",
        }
    }

    /// Whether dispatches of this command may carry a non-empty payload
    pub fn carries_payload(&self) -> bool {
        matches!(self, Command::DictateText)
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One classified input, delivered identically to every listener
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchEvent {
    pub command: Command,
    pub payload: String,
}

impl DispatchEvent {
    /// Event for a command without payload
    pub fn new(command: Command) -> Self {
        Self {
            command,
            payload: String::new(),
        }
    }

    /// Event carrying a payload
    pub fn with_payload(command: Command, payload: impl Into<String>) -> Self {
        Self {
            command,
            payload: payload.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_dictate_carries_payload() {
        let carriers: Vec<_> = Command::ALL
            .iter()
            .filter(|c| c.carries_payload())
            .collect();
        assert_eq!(carriers, vec![&Command::DictateText]);
    }

    #[test]
    fn test_tag_matches_serialized_form() {
        for command in Command::ALL {
            let json = serde_json::to_string(&command).unwrap();
            assert_eq!(json, format!("\"{}\"", command.as_str()));
        }
    }

    #[test]
    fn test_display_uses_tag() {
        assert_eq!(Command::ColorBlue.to_string(), "color_blue");
    }

    #[test]
    fn test_dispatch_event_constructors() {
        let plain = DispatchEvent::new(Command::ApplyBold);
        assert_eq!(plain.payload, "");

        let dictated = DispatchEvent::with_payload(Command::DictateText, "Hola");
        assert_eq!(dictated.command, Command::DictateText);
        assert_eq!(dictated.payload, "Hola");
        assert_ne!(plain, dictated);
    }
}
