//! The logged-in identity, if any.

use chatzone_shared::identity::{Identity, IdentityUpdate, SignupForm};
use tracing::{debug, info};

use crate::error::{Result, StoreError};

/// Holds at most one identity. Nothing is validated: the signup form is
/// taken as submitted.
#[derive(Debug, Default)]
pub struct SessionStore {
    current: Option<Identity>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace whatever identity was there with the submitted form.
    pub fn login(&mut self, form: SignupForm) -> &Identity {
        info!(user = %form.username, "Identity logged in");
        self.current.insert(Identity::from(form))
    }

    pub fn logout(&mut self) {
        if let Some(identity) = self.current.take() {
            info!(user = %identity.username, "Identity logged out");
        }
    }

    /// Merge a partial update into the current identity.
    pub fn update_identity(&mut self, update: IdentityUpdate) -> Result<&Identity> {
        let Some(identity) = self.current.as_mut() else {
            debug!("Profile update rejected: no identity");
            return Err(StoreError::NoIdentity);
        };
        identity.apply(update);
        info!(user = %identity.username, "Identity updated");
        Ok(&*identity)
    }

    pub fn current(&self) -> Option<&Identity> {
        self.current.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.current.is_some()
    }
}
