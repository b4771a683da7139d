//! Application state shared across all commands.
//!
//! The view layer owns an `Arc<Mutex<AppState>>` and passes it to every
//! command; there is no global instance.

use std::sync::{Mutex, MutexGuard};

use chatzone_shared::identity::{Identity, ProfileField};
use chatzone_store::{ChannelRegistry, Message, MessageLog, SessionStore};

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};

/// Central application state.
pub struct AppState {
    /// The logged-in identity, if any.
    pub session: SessionStore,

    /// Every channel created this session, `general` first.
    pub channels: ChannelRegistry,

    /// Messages of the channel on screen.
    pub messages: MessageLog,

    /// Pending profile edit. `None` when the profile is not being edited.
    pub profile_draft: Option<ProfileDraft>,

    pub config: ClientConfig,
}

/// Values typed into the profile edit form, saved all at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileDraft {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl ProfileDraft {
    pub fn from_identity(identity: &Identity) -> Self {
        Self {
            username: identity.username.clone(),
            email: identity.email.clone(),
            password: identity.password.clone(),
        }
    }

    pub fn set(&mut self, field: ProfileField, value: String) {
        match field {
            ProfileField::Username => self.username = value,
            ProfileField::Email => self.email = value,
            ProfileField::Password => self.password = value,
        }
    }
}

impl AppState {
    pub fn new(config: ClientConfig) -> Self {
        let channels = ChannelRegistry::new(config.general_members.iter().cloned())
            .with_fallback_name(config.fallback_channel_name.clone());

        let history = config
            .seed_history
            .iter()
            .zip(1u64..)
            .map(|(seed, id)| Message {
                id,
                author: seed.author.clone(),
                text: seed.text.clone(),
                time: seed.time.clone(),
            })
            .collect();

        Self {
            session: SessionStore::new(),
            channels,
            messages: MessageLog::with_history(history),
            profile_draft: None,
            config,
        }
    }

    /// Usernames a new channel may pull in: the configured directory plus
    /// whoever is logged in.
    pub fn known_usernames(&self) -> Vec<String> {
        let mut names = self.config.known_users.clone();
        if let Some(identity) = self.session.current() {
            if !names.contains(&identity.username) {
                names.push(identity.username.clone());
            }
        }
        names
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}

/// Lock the shared state, mapping poisoning to a [`ClientError`].
pub(crate) fn lock(state: &Mutex<AppState>) -> Result<MutexGuard<'_, AppState>> {
    state
        .lock()
        .map_err(|e| ClientError::LockPoisoned(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatzone_shared::identity::SignupForm;

    #[test]
    fn test_new_state_seeds_general() {
        let state = AppState::default();
        assert!(state.messages.active().is_general());
        let ids: Vec<_> = state.messages.list().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(state.channels.len(), 1);
        assert!(!state.session.is_logged_in());
    }

    #[test]
    fn test_known_usernames_include_current_user_once() {
        let mut state = AppState::default();
        assert_eq!(state.known_usernames().len(), 3);

        state.session.login(SignupForm {
            username: "Carol".into(),
            ..Default::default()
        });
        assert!(state.known_usernames().contains(&"Carol".to_string()));

        state.session.login(SignupForm {
            username: "Admin".into(),
            ..Default::default()
        });
        assert_eq!(state.known_usernames().len(), 3);
    }

    #[test]
    fn test_draft_set_field() {
        let mut draft = ProfileDraft {
            username: "a".into(),
            email: "b".into(),
            password: "c".into(),
        };
        draft.set(ProfileField::Email, "new@mail".into());
        assert_eq!(draft.email, "new@mail");
        assert_eq!(draft.username, "a");
    }
}
