//! The message log of the channel currently on screen.
//!
//! There is one log, not one per channel. Moving to any channel other than
//! `general` empties it, and moving back to `general` does not bring the
//! seeded history back.

use chatzone_shared::constants::MESSAGE_TIME_FORMAT;
use chatzone_shared::types::ChannelId;
use chrono::{Local, NaiveTime};
use tracing::{debug, info};

use crate::error::{Result, StoreError};
use crate::models::Message;

#[derive(Debug)]
pub struct MessageLog {
    active: ChannelId,
    messages: Vec<Message>,
}

impl MessageLog {
    /// Empty log viewing `general`.
    pub fn new() -> Self {
        Self::with_history(Vec::new())
    }

    /// Log viewing `general`, pre-filled with `history`.
    pub fn with_history(history: Vec<Message>) -> Self {
        Self {
            active: ChannelId::general(),
            messages: history,
        }
    }

    pub fn active(&self) -> &ChannelId {
        &self.active
    }

    /// Switch the visible channel. Returns `false` when `channel_id` was
    /// already active, in which case nothing changes.
    pub fn activate(&mut self, channel_id: ChannelId) -> bool {
        if channel_id == self.active {
            return false;
        }
        if !channel_id.is_general() {
            self.messages.clear();
        }
        info!(from = %self.active, to = %channel_id, "Active channel switched");
        self.active = channel_id;
        true
    }

    /// Append a message stamped with the current local time.
    pub fn send(&mut self, text: &str, author: &str) -> Result<&Message> {
        self.send_at(text, author, Local::now().time())
    }

    /// Append a message stamped with `time`. Rejected when `text` is blank.
    pub fn send_at(&mut self, text: &str, author: &str, time: NaiveTime) -> Result<&Message> {
        if text.trim().is_empty() {
            debug!(channel = %self.active, "Message rejected: empty text");
            return Err(StoreError::EmptyInput);
        }

        let id = self.next_id();
        info!(msg_id = id, channel = %self.active, author = %author, "Message sent");

        self.messages.push(Message {
            id,
            author: author.to_string(),
            text: text.to_string(),
            time: time.format(MESSAGE_TIME_FORMAT).to_string(),
        });
        Ok(&self.messages[self.messages.len() - 1])
    }

    /// Messages in the order they were appended.
    pub fn list(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    fn next_id(&self) -> u64 {
        self.messages.iter().map(|m| m.id).max().map_or(1, |max| max + 1)
    }
}

impl Default for MessageLog {
    fn default() -> Self {
        Self::new()
    }
}
