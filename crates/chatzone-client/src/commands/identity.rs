use std::sync::Mutex;

use serde::Serialize;
use tracing::info;

use chatzone_shared::identity::{Identity, IdentityUpdate, SignupForm};
use chatzone_shared::routes::{self, Route};
use chatzone_store::StoreError;

use crate::error::Result;
use crate::state::{lock, AppState};

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IdentityInfoDto {
    pub username: String,
    pub email: String,
    pub is_over_18: bool,
    pub accepted_terms: bool,
    pub avatar: Option<String>,
}

impl From<&Identity> for IdentityInfoDto {
    fn from(identity: &Identity) -> Self {
        Self {
            username: identity.username.clone(),
            email: identity.email.clone(),
            is_over_18: identity.is_over_18,
            accepted_terms: identity.accepted_terms,
            avatar: identity.avatar.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LoginDto {
    pub identity: IdentityInfoDto,
    /// Where the view should go next.
    pub redirect: Route,
}

/// Submit the signup form. Whatever it holds becomes the current identity.
pub fn signup(state: &Mutex<AppState>, form: SignupForm) -> Result<LoginDto> {
    let mut guard = lock(state)?;
    guard.profile_draft = None;
    let identity = IdentityInfoDto::from(guard.session.login(form));

    Ok(LoginDto {
        identity,
        redirect: Route::Chat,
    })
}

/// Drop the current identity and send the view back to the signup form.
pub fn logout(state: &Mutex<AppState>) -> Result<Route> {
    let mut guard = lock(state)?;
    guard.session.logout();
    guard.profile_draft = None;
    Ok(Route::Signup)
}

pub fn current_identity(state: &Mutex<AppState>) -> Result<Option<IdentityInfoDto>> {
    let guard = lock(state)?;
    Ok(guard.session.current().map(IdentityInfoDto::from))
}

pub fn is_logged_in(state: &Mutex<AppState>) -> Result<bool> {
    Ok(lock(state)?.session.is_logged_in())
}

/// Merge a partial update into the current identity.
pub fn update_identity(
    state: &Mutex<AppState>,
    update: IdentityUpdate,
) -> Result<IdentityInfoDto> {
    let mut guard = lock(state)?;
    let identity = guard.session.update_identity(update)?;
    Ok(IdentityInfoDto::from(identity))
}

/// Map a view path to the route that should actually be shown.
pub fn navigate(state: &Mutex<AppState>, path: &str) -> Result<Route> {
    let requested = Route::parse(path)?;
    let logged_in = lock(state)?.session.is_logged_in();
    let route = routes::resolve(requested.clone(), logged_in);
    if route != requested {
        info!(requested = %path, "Redirected to signup: no identity");
    }
    Ok(route)
}

/// Current username, or [`StoreError::NoIdentity`].
pub(crate) fn require_username(state: &AppState) -> std::result::Result<String, StoreError> {
    state
        .session
        .current()
        .map(|identity| identity.username.clone())
        .ok_or(StoreError::NoIdentity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;

    fn form() -> SignupForm {
        SignupForm {
            username: "Carol".into(),
            email: "carol@chat.zone".into(),
            password: "hunter2".into(),
            is_over_18: true,
            accepted_terms: true,
        }
    }

    #[test]
    fn test_signup_redirects_to_chat() {
        let state = Mutex::new(AppState::default());
        let login = signup(&state, form()).unwrap();
        assert_eq!(login.identity.username, "Carol");
        assert_eq!(login.redirect, Route::Chat);
        assert!(is_logged_in(&state).unwrap());
    }

    #[test]
    fn test_identity_dto_never_carries_password() {
        let state = Mutex::new(AppState::default());
        let login = signup(&state, form()).unwrap();
        let json = serde_json::to_string(&login).unwrap();
        assert!(!json.contains("hunter2"));
        assert!(json.contains("\"isOver18\":true"));
        assert!(json.contains("\"redirect\":{\"view\":\"chat\"}"));
    }

    #[test]
    fn test_update_round_trip() {
        let state = Mutex::new(AppState::default());
        signup(&state, form()).unwrap();
        let updated = update_identity(
            &state,
            IdentityUpdate {
                email: Some("x@y.com".into()),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(updated.email, "x@y.com");

        let current = current_identity(&state).unwrap().unwrap();
        assert_eq!(current.email, "x@y.com");
        assert_eq!(current.username, "Carol");
        assert!(current.accepted_terms);
    }

    #[test]
    fn test_logout_then_update_is_rejected() {
        let state = Mutex::new(AppState::default());
        signup(&state, form()).unwrap();
        assert_eq!(logout(&state).unwrap(), Route::Signup);

        let err = update_identity(&state, IdentityUpdate::default()).unwrap_err();
        assert!(matches!(err, ClientError::Store(StoreError::NoIdentity)));
        assert!(err.is_rejection());
        assert!(current_identity(&state).unwrap().is_none());
    }

    #[test]
    fn test_navigate_guards_routes() {
        let state = Mutex::new(AppState::default());
        assert_eq!(navigate(&state, "/chat").unwrap(), Route::Signup);
        assert_eq!(navigate(&state, "/profile/Admin").unwrap(), Route::Signup);

        signup(&state, form()).unwrap();
        assert_eq!(navigate(&state, "/chat").unwrap(), Route::Chat);
        assert_eq!(
            navigate(&state, "/profile/Admin").unwrap(),
            Route::Profile("Admin".into())
        );
        assert!(matches!(
            navigate(&state, "/nowhere"),
            Err(ClientError::Route(_))
        ));
    }
}
