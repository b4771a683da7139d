//! Client configuration.
//!
//! Every field has a default reproducing the stock demo, so an embedder only
//! needs to supply the values it wants to change.

use chatzone_shared::constants::{CONNECTED_USERS, FALLBACK_CHANNEL_NAME};
use serde::Deserialize;

use crate::error::Result;

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientConfig {
    /// Usernames that can be mentioned into a new channel, besides the
    /// logged-in user.
    pub known_users: Vec<String>,

    /// Members of the `general` channel.
    pub general_members: Vec<String>,

    /// Messages shown in `general` before the first channel switch.
    pub seed_history: Vec<SeedMessage>,

    /// Name for channels created from mentions alone.
    pub fallback_channel_name: String,

    /// Figure shown in the chat status bar.
    pub connected_users: u32,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SeedMessage {
    pub author: String,
    pub text: String,
    /// `HH:MM`
    pub time: String,
}

impl SeedMessage {
    fn new(author: &str, text: &str, time: &str) -> Self {
        Self {
            author: author.to_string(),
            text: text.to_string(),
            time: time.to_string(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        let seed_users: Vec<String> = ["Admin", "OldSchoolGamer", "RetroFan90s"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        Self {
            known_users: seed_users.clone(),
            general_members: seed_users,
            seed_history: vec![
                SeedMessage::new("Admin", "Bienvenue dans le chat général !", "12:34"),
                SeedMessage::new("OldSchoolGamer", "Salut tout le monde ! 😎", "12:35"),
                SeedMessage::new("RetroFan90s", "Qui se souvient des anciens forums ?", "12:36"),
            ],
            fallback_channel_name: FALLBACK_CHANNEL_NAME.to_string(),
            connected_users: CONNECTED_USERS,
        }
    }
}

impl ClientConfig {
    /// Parse a JSON document, falling back to defaults for missing fields.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        tracing::debug!(
            known_users = config.known_users.len(),
            seed_messages = config.seed_history.len(),
            "Loaded client configuration"
        );
        Ok(config)
    }
}
