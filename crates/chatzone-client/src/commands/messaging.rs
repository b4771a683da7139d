use std::sync::Mutex;

use serde::Serialize;
use tracing::debug;

use chatzone_store::{Message, StoreError};

use crate::commands::channels::ChannelDto;
use crate::commands::identity::require_username;
use crate::error::Result;
use crate::state::{lock, AppState};

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MessageDto {
    pub id: u64,
    pub author: String,
    pub text: String,
    pub time: String,
}

impl From<&Message> for MessageDto {
    fn from(m: &Message) -> Self {
        Self {
            id: m.id,
            author: m.author.clone(),
            text: m.text.clone(),
            time: m.time.clone(),
        }
    }
}

/// Everything the chat screen shows at once.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatViewDto {
    pub connected_as: String,
    pub active_channel: ChannelDto,
    pub channels: Vec<ChannelDto>,
    pub messages: Vec<MessageDto>,
    pub message_count: usize,
    pub connected_users: u32,
}

/// Post `text` to the active channel as the current user.
pub fn send_message(state: &Mutex<AppState>, text: String) -> Result<MessageDto> {
    let mut guard = lock(state)?;
    let Ok(author) = require_username(&guard) else {
        debug!("Message rejected: no identity");
        return Err(StoreError::NoIdentity.into());
    };

    let message = guard.messages.send(&text, &author)?;
    Ok(MessageDto::from(message))
}

pub fn get_messages(state: &Mutex<AppState>) -> Result<Vec<MessageDto>> {
    let guard = lock(state)?;
    Ok(guard.messages.list().iter().map(MessageDto::from).collect())
}

/// Snapshot of the chat screen. Requires a logged-in identity.
pub fn chat_view(state: &Mutex<AppState>) -> Result<ChatViewDto> {
    let guard = lock(state)?;
    let connected_as = require_username(&guard)?;

    let active_id = guard.messages.active();
    let channels: Vec<ChannelDto> = guard
        .channels
        .list_channels()
        .iter()
        .map(|c| ChannelDto::from_channel(c, active_id))
        .collect();
    let active_channel = channels
        .iter()
        .find(|c| c.is_active)
        .cloned()
        .ok_or_else(|| StoreError::UnknownChannel(active_id.clone()))?;
    let messages: Vec<MessageDto> = guard.messages.list().iter().map(MessageDto::from).collect();

    Ok(ChatViewDto {
        connected_as,
        active_channel,
        channels,
        message_count: messages.len(),
        messages,
        connected_users: guard.config.connected_users,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::channels::{create_channel, switch_channel};
    use crate::commands::identity::{logout, signup};
    use crate::error::ClientError;
    use chatzone_shared::identity::SignupForm;

    fn logged_in() -> Mutex<AppState> {
        let state = Mutex::new(AppState::default());
        signup(
            &state,
            SignupForm {
                username: "Carol".into(),
                ..Default::default()
            },
        )
        .unwrap();
        state
    }

    #[test]
    fn test_send_appends_after_seed() {
        let state = logged_in();
        let msg = send_message(&state, " salut ".into()).unwrap();
        assert_eq!(msg.id, 4);
        assert_eq!(msg.author, "Carol");
        assert_eq!(msg.text, " salut ");

        let all = get_messages(&state).unwrap();
        assert_eq!(all.len(), 4);
        assert_eq!(all[0].author, "Admin");
        assert_eq!(all[3], msg);
    }

    #[test]
    fn test_blank_send_is_rejected() {
        let state = logged_in();
        for text in ["", "   "] {
            let err = send_message(&state, text.into()).unwrap_err();
            assert!(err.is_rejection());
        }
        assert_eq!(get_messages(&state).unwrap().len(), 3);
    }

    #[test]
    fn test_send_after_logout_is_rejected() {
        let state = logged_in();
        logout(&state).unwrap();
        let err = send_message(&state, "hello?".into()).unwrap_err();
        assert!(matches!(err, ClientError::Store(StoreError::NoIdentity)));
        assert_eq!(get_messages(&state).unwrap().len(), 3);
    }

    #[test]
    fn test_chat_view_snapshot() {
        let state = logged_in();
        let ops = create_channel(&state, "ops @Admin".into()).unwrap();
        switch_channel(&state, &ops.id).unwrap();
        send_message(&state, "first".into()).unwrap();

        let view = chat_view(&state).unwrap();
        assert_eq!(view.connected_as, "Carol");
        assert_eq!(view.active_channel.id, ops.id);
        assert_eq!(view.active_channel.label, "ops (2)");
        assert_eq!(view.channels.len(), 2);
        assert_eq!(view.message_count, 1);
        assert_eq!(view.messages[0].id, 1);
        assert_eq!(view.connected_users, 42);
    }

    #[test]
    fn test_chat_view_requires_identity() {
        let state = Mutex::new(AppState::default());
        assert!(chat_view(&state).unwrap_err().is_rejection());
    }
}
