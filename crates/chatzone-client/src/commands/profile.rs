//! Profile screen: read-only view of any user, plus the edit form for the
//! logged-in one.
//!
//! Only the logged-in identity is real. Every other username gets a
//! generated profile so the screen always has something to show.

use std::sync::Mutex;

use serde::Serialize;
use tracing::{debug, info};

use chatzone_shared::constants::{MOCK_EMAIL_DOMAIN, PASSWORD_MASK};
use chatzone_shared::identity::{IdentityUpdate, ProfileField};
use chatzone_store::StoreError;

use crate::commands::identity::IdentityInfoDto;
use crate::error::{ClientError, Result};
use crate::state::{lock, AppState, ProfileDraft};

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDto {
    pub username: String,
    pub email: String,
    /// Masked, and only present on the viewer's own profile.
    pub password: Option<String>,
    pub is_over_18: bool,
    pub accepted_terms: bool,
    pub avatar: Option<String>,
    pub is_own: bool,
    pub is_editing: bool,
    pub stats: ProfileStatsDto,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileStatsDto {
    pub messages_sent: u32,
    pub member_since: u16,
    pub last_seen: String,
    pub status: String,
}

impl Default for ProfileStatsDto {
    fn default() -> Self {
        Self {
            messages_sent: 1337,
            member_since: 2024,
            last_seen: "Maintenant".to_string(),
            status: "En ligne".to_string(),
        }
    }
}

/// Current values of the edit form.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDraftDto {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl From<&ProfileDraft> for ProfileDraftDto {
    fn from(draft: &ProfileDraft) -> Self {
        Self {
            username: draft.username.clone(),
            email: draft.email.clone(),
            password: draft.password.clone(),
        }
    }
}

/// Profile of `username` as seen by the logged-in user.
pub fn view_profile(state: &Mutex<AppState>, username: &str) -> Result<ProfileDto> {
    let guard = lock(state)?;
    let identity = guard.session.current().ok_or(StoreError::NoIdentity)?;

    if identity.username == username {
        return Ok(ProfileDto {
            username: identity.username.clone(),
            email: identity.email.clone(),
            password: Some(PASSWORD_MASK.to_string()),
            is_over_18: identity.is_over_18,
            accepted_terms: identity.accepted_terms,
            avatar: identity.avatar.clone(),
            is_own: true,
            is_editing: guard.profile_draft.is_some(),
            stats: ProfileStatsDto::default(),
        });
    }

    Ok(ProfileDto {
        username: username.to_string(),
        email: format!("{username}@{MOCK_EMAIL_DOMAIN}"),
        password: None,
        is_over_18: true,
        accepted_terms: true,
        avatar: None,
        is_own: false,
        is_editing: false,
        stats: ProfileStatsDto::default(),
    })
}

/// Open the edit form, pre-filled from the current identity. Reopening an
/// open form resets it.
pub fn begin_edit(state: &Mutex<AppState>) -> Result<ProfileDraftDto> {
    let mut guard = lock(state)?;
    let draft = {
        let identity = guard.session.current().ok_or(StoreError::NoIdentity)?;
        ProfileDraft::from_identity(identity)
    };
    let dto = ProfileDraftDto::from(&draft);
    guard.profile_draft = Some(draft);
    Ok(dto)
}

/// Change one field of the open edit form. `field` is the form input name
/// (`username`, `email` or `password`).
pub fn edit_field(state: &Mutex<AppState>, field: &str, value: String) -> Result<ProfileDraftDto> {
    let field: ProfileField = field.parse().map_err(|e: String| {
        debug!(error = %e, "Profile edit rejected");
        ClientError::UnknownField(field.to_string())
    })?;

    let mut guard = lock(state)?;
    let draft = guard.profile_draft.as_mut().ok_or(ClientError::NoDraft)?;
    draft.set(field, value);
    Ok(ProfileDraftDto::from(&*draft))
}

/// Write the edit form over the identity's username, email and password.
pub fn save_edit(state: &Mutex<AppState>) -> Result<IdentityInfoDto> {
    let mut guard = lock(state)?;
    if !guard.session.is_logged_in() {
        guard.profile_draft = None;
        return Err(StoreError::NoIdentity.into());
    }
    let draft = guard.profile_draft.take().ok_or(ClientError::NoDraft)?;

    let identity = guard.session.update_identity(IdentityUpdate {
        username: Some(draft.username),
        email: Some(draft.email),
        password: Some(draft.password),
        ..Default::default()
    })?;
    info!(user = %identity.username, "Profile saved");
    Ok(IdentityInfoDto::from(identity))
}

/// Close the edit form without saving.
pub fn cancel_edit(state: &Mutex<AppState>) -> Result<()> {
    let mut guard = lock(state)?;
    guard.profile_draft = None;
    Ok(())
}
