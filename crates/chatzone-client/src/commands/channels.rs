use std::sync::Mutex;

use serde::Serialize;
use tracing::debug;

use chatzone_shared::types::ChannelId;
use chatzone_store::{Channel, StoreError};

use crate::commands::identity::require_username;
use crate::error::Result;
use crate::state::{lock, AppState};

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChannelDto {
    pub id: String,
    pub name: String,
    /// `name` for `general`, `name (members)` otherwise.
    pub label: String,
    pub members: Vec<String>,
    pub is_active: bool,
}

impl ChannelDto {
    pub fn from_channel(channel: &Channel, active: &ChannelId) -> Self {
        Self {
            id: channel.id.to_string(),
            name: channel.name.clone(),
            label: channel.display_label(),
            members: channel.members.clone(),
            is_active: &channel.id == active,
        }
    }
}

/// Create a channel from text like `"design @Alice @Bob"`, owned by the
/// current user. The active channel does not change.
pub fn create_channel(state: &Mutex<AppState>, text: String) -> Result<ChannelDto> {
    let mut guard = lock(state)?;
    let Ok(creator) = require_username(&guard) else {
        debug!("Channel creation rejected: no identity");
        return Err(StoreError::NoIdentity.into());
    };
    let known = guard.known_usernames();

    let state = &mut *guard;
    let channel = state
        .channels
        .create_channel(&text, &creator, known.as_slice())?;
    Ok(ChannelDto::from_channel(channel, state.messages.active()))
}

pub fn list_channels(state: &Mutex<AppState>) -> Result<Vec<ChannelDto>> {
    let guard = lock(state)?;
    let active = guard.messages.active();
    Ok(guard
        .channels
        .list_channels()
        .iter()
        .map(|c| ChannelDto::from_channel(c, active))
        .collect())
}

/// Make `channel_id` the channel on screen. See [`chatzone_store::MessageLog::activate`]
/// for what happens to the visible messages.
pub fn switch_channel(state: &Mutex<AppState>, channel_id: &str) -> Result<ChannelDto> {
    let mut guard = lock(state)?;
    let id = ChannelId::from(channel_id);

    let state = &mut *guard;
    let channel = state
        .channels
        .get(&id)
        .ok_or_else(|| StoreError::UnknownChannel(id.clone()))?;
    state.messages.activate(id);
    Ok(ChannelDto::from_channel(channel, state.messages.active()))
}
