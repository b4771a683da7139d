//! Domain model structs held by the stores.
//!
//! Both derive `Serialize` so the client can hand them straight to the view
//! layer.

use chatzone_shared::types::ChannelId;
use serde::Serialize;

// ---------------------------------------------------------------------------
// Channel
// ---------------------------------------------------------------------------

/// A named message scope with an explicit member list.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Channel {
    pub id: ChannelId,
    pub name: String,
    /// Usernames in the order they joined. Never contains duplicates.
    pub members: Vec<String>,
}

impl Channel {
    pub fn has_member(&self, username: &str) -> bool {
        self.members.iter().any(|m| m == username)
    }

    /// `general` shows its bare name, other channels append their member count.
    pub fn display_label(&self) -> String {
        if self.id.is_general() {
            self.name.clone()
        } else {
            format!("{} ({})", self.name, self.members.len())
        }
    }
}

// ---------------------------------------------------------------------------
// Message
// ---------------------------------------------------------------------------

/// A single chat line in the visible log.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Message {
    /// Sequence id, increasing within the current log.
    pub id: u64,
    pub author: String,
    /// Text exactly as typed, surrounding whitespace included.
    pub text: String,
    /// Local time, `HH:MM`.
    pub time: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_label() {
        let general = Channel {
            id: ChannelId::general(),
            name: "general".into(),
            members: vec!["Admin".into(), "OldSchoolGamer".into()],
        };
        assert_eq!(general.display_label(), "general");

        let design = Channel {
            id: ChannelId::from("c1"),
            name: "design".into(),
            members: vec!["Carol".into(), "Alice".into(), "Bob".into()],
        };
        assert_eq!(design.display_label(), "design (3)");
        assert!(design.has_member("Alice"));
        assert!(!design.has_member("alice"));
    }
}
