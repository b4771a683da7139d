use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::GENERAL_CHANNEL_ID;

/// Channel identifier. `"general"` is reserved for the default channel,
/// every other id is generated at creation time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ChannelId(pub String);

impl ChannelId {
    pub fn general() -> Self {
        Self(GENERAL_CHANNEL_ID.to_string())
    }

    /// Fresh random id, never equal to `"general"`.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    pub fn is_general(&self) -> bool {
        self.0 == GENERAL_CHANNEL_ID
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ChannelId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl std::fmt::Display for ChannelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
