//! Per-surface chat transcript.

use geoexplorer_protocols::{ChatMessage, ChatRole};

/// Messages shown in a surface's chat panel. Dropped with the surface.
#[derive(Debug, Clone, Default)]
pub struct ChatTranscript {
    messages: Vec<ChatMessage>,
    open: bool,
}

impl ChatTranscript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    /// Number of messages with the given role.
    pub fn count(&self, role: ChatRole) -> usize {
        self.messages.iter().filter(|m| m.role == role).count()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the panel between open and closed, returning the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }
}
