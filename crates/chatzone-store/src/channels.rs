//! Insertion-ordered channel list with mention-derived membership.

use chatzone_shared::constants::{FALLBACK_CHANNEL_NAME, GENERAL_CHANNEL_NAME};
use chatzone_shared::mention::{extract_mentions, strip_mentions};
use chatzone_shared::types::ChannelId;
use tracing::{debug, info};

use crate::error::{Result, StoreError};
use crate::models::Channel;

/// Every channel created during the session, oldest first. The `general`
/// channel is always at index 0 and is never removed.
#[derive(Debug)]
pub struct ChannelRegistry {
    channels: Vec<Channel>,
    fallback_name: String,
}

impl ChannelRegistry {
    /// Registry holding only `general`, with `seed_members` as its members.
    pub fn new<S: Into<String>>(seed_members: impl IntoIterator<Item = S>) -> Self {
        let mut members: Vec<String> = Vec::new();
        for member in seed_members {
            push_unique(&mut members, member.into());
        }

        Self {
            channels: vec![Channel {
                id: ChannelId::general(),
                name: GENERAL_CHANNEL_NAME.to_string(),
                members,
            }],
            fallback_name: FALLBACK_CHANNEL_NAME.to_string(),
        }
    }

    /// Override the name given to channels whose text was only mentions.
    pub fn with_fallback_name(mut self, name: impl Into<String>) -> Self {
        self.fallback_name = name.into();
        self
    }

    // ------------------------------------------------------------------
    // Create
    // ------------------------------------------------------------------

    /// Create a channel from free text such as `"design @Alice @Bob"`.
    ///
    /// Members are the creator followed by each mentioned user that appears
    /// in `known_usernames` (exact, case-sensitive), in order of first
    /// mention. Self-mentions and unknown names are dropped. The display
    /// name is the text with mentions removed, or the fallback name.
    pub fn create_channel<S: AsRef<str>>(
        &mut self,
        raw_text: &str,
        creator: &str,
        known_usernames: &[S],
    ) -> Result<&Channel> {
        if raw_text.trim().is_empty() {
            debug!("Channel creation rejected: empty text");
            return Err(StoreError::EmptyInput);
        }

        let mut members = vec![creator.to_string()];
        for mention in extract_mentions(raw_text) {
            let known = known_usernames.iter().any(|k| k.as_ref() == mention);
            if known && mention != creator {
                push_unique(&mut members, mention);
            }
        }

        let stripped = strip_mentions(raw_text);
        let name = match stripped.trim() {
            "" => self.fallback_name.clone(),
            trimmed => trimmed.to_string(),
        };

        let id = self.allocate_id();
        info!(
            channel = %id,
            name = %name,
            members = members.len(),
            creator = %creator,
            "Channel created"
        );

        self.channels.push(Channel { id, name, members });
        Ok(&self.channels[self.channels.len() - 1])
    }

    // ------------------------------------------------------------------
    // Read
    // ------------------------------------------------------------------

    pub fn get(&self, id: &ChannelId) -> Option<&Channel> {
        self.channels.iter().find(|c| &c.id == id)
    }

    pub fn general(&self) -> &Channel {
        &self.channels[0]
    }

    /// All channels, in creation order.
    pub fn list_channels(&self) -> &[Channel] {
        &self.channels
    }

    pub fn contains(&self, id: &ChannelId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    pub fn display_label(&self, channel: &Channel) -> String {
        channel.display_label()
    }

    fn allocate_id(&self) -> ChannelId {
        loop {
            let id = ChannelId::generate();
            if !self.contains(&id) {
                return id;
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn push_unique(members: &mut Vec<String>, name: String) {
    if !members.contains(&name) {
        members.push(name);
    }
}
