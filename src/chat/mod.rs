//! Chat sidebar.
//!
//! Plain message history kept next to the game. It never touches game
//! state.

use std::collections::VecDeque;

use log::info;
use serde::{Deserialize, Serialize};

/// Messages kept by [`ChatLog::new`].
pub const DEFAULT_CHAT_CAPACITY: usize = 200;

/// An accepted chat message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Position in the log, counting from 0, never reused.
    pub sequence: u64,
    /// Seat name of the sender.
    pub author: String,
    /// Trimmed text.
    pub text: String,
}

/// Bounded chat history.
#[derive(Clone, Debug)]
pub struct ChatLog {
    messages: VecDeque<ChatMessage>,
    capacity: usize,
    next_sequence: u64,
}

impl Default for ChatLog {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatLog {
    /// An empty log keeping [`DEFAULT_CHAT_CAPACITY`] messages.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CHAT_CAPACITY)
    }

    /// A log keeping at most `capacity` messages (at least one).
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            messages: VecDeque::with_capacity(capacity),
            capacity,
            next_sequence: 0,
        }
    }

    /// Post a message.
    ///
    /// Returns `None` and stores nothing when the text is blank.
    pub fn send(&mut self, author: &str, text: &str) -> Option<&ChatMessage> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let message = ChatMessage {
            sequence: self.next_sequence,
            author: author.to_owned(),
            text: text.to_owned(),
        };
        self.next_sequence += 1;
        info!("chat #{} {}: {}", message.sequence, message.author, message.text);

        if self.messages.len() == self.capacity {
            self.messages.pop_front();
        }
        self.messages.push_back(message);
        self.messages.back()
    }

    /// Messages, oldest first.
    pub fn messages(&self) -> impl Iterator<Item = &ChatMessage> {
        self.messages.iter()
    }

    /// Messages currently kept.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// True when nothing is kept.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Drop every message. Sequence numbers keep counting.
    pub fn clear(&mut self) {
        self.messages.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_trims() {
        let mut chat = ChatLog::new();
        let message = chat.send("Player", "  good game \n").unwrap();
        assert_eq!(message.text, "good game");
        assert_eq!(message.author, "Player");
        assert_eq!(message.sequence, 0);
    }

    #[test]
    fn test_blank_ignored() {
        let mut chat = ChatLog::new();
        assert!(chat.send("Player", "").is_none());
        assert!(chat.send("Player", "   \t").is_none());
        assert!(chat.is_empty());

        // Blank sends do not consume a sequence number
        assert_eq!(chat.send("Player", "hi").map(|m| m.sequence), Some(0));
    }

    #[test]
    fn test_oldest_dropped_past_capacity() {
        let mut chat = ChatLog::with_capacity(3);
        for i in 0..5 {
            chat.send("CPU", &format!("msg {i}"));
        }

        let texts: Vec<_> = chat.messages().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["msg 2", "msg 3", "msg 4"]);
        assert_eq!(chat.messages().next().map(|m| m.sequence), Some(2));
    }

    #[test]
    fn test_clear() {
        let mut chat = ChatLog::new();
        chat.send("Player", "one");
        chat.send("Player", "two");
        chat.clear();

        assert!(chat.is_empty());
        assert_eq!(chat.send("Player", "three").map(|m| m.sequence), Some(2));
        assert_eq!(chat.len(), 1);
    }
}
