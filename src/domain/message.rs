//! Conversation transcript entities.

/// Who produced a conversation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Assistant,
}

impl Sender {
    /// Returns a display label for transcript rendering.
    pub fn display_label(&self) -> &'static str {
        match self {
            Sender::User => "you",
            Sender::Assistant => "assistant",
        }
    }
}

/// An immutable transcript entry. Content may carry inline link markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationMessage {
    pub sender: Sender,
    pub content: String,
}

impl ConversationMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            sender: Sender::Assistant,
            content: content.into(),
        }
    }
}

/// Append-only, in-session message log. Entries are never mutated or
/// removed; a new session starts empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageLog {
    entries: Vec<ConversationMessage>,
}

impl MessageLog {
    pub fn push(&mut self, message: ConversationMessage) {
        self.entries.push(message);
    }

    pub fn entries(&self) -> &[ConversationMessage] {
        &self.entries
    }

    pub fn last(&self) -> Option<&ConversationMessage> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
