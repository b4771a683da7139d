use std::str::FromStr;

use serde::Deserialize;

/// The logged-in user's profile data. No hashing, no validation: whatever
/// the signup form held is kept as-is for the lifetime of the session.
#[derive(Clone, PartialEq, Eq)]
pub struct Identity {
    pub username: String,
    pub email: String,
    pub password: String,
    pub is_over_18: bool,
    pub accepted_terms: bool,
    pub avatar: Option<String>,
}

/// Raw signup form fields, as submitted by the view layer.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub is_over_18: bool,
    pub accepted_terms: bool,
}

/// Partial profile update. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct IdentityUpdate {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub is_over_18: Option<bool>,
    pub accepted_terms: Option<bool>,
    pub avatar: Option<String>,
}

/// Profile fields editable from the profile view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Username,
    Email,
    Password,
}

impl Identity {
    /// Merge `update` into this identity, field by field.
    pub fn apply(&mut self, update: IdentityUpdate) {
        if let Some(username) = update.username {
            self.username = username;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(password) = update.password {
            self.password = password;
        }
        if let Some(flag) = update.is_over_18 {
            self.is_over_18 = flag;
        }
        if let Some(flag) = update.accepted_terms {
            self.accepted_terms = flag;
        }
        if let Some(avatar) = update.avatar {
            self.avatar = Some(avatar);
        }
    }
}

impl From<SignupForm> for Identity {
    fn from(form: SignupForm) -> Self {
        Self {
            username: form.username,
            email: form.email,
            password: form.password,
            is_over_18: form.is_over_18,
            accepted_terms: form.accepted_terms,
            avatar: None,
        }
    }
}

// Passwords stay out of logs.
impl std::fmt::Debug for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Identity")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("is_over_18", &self.is_over_18)
            .field("accepted_terms", &self.accepted_terms)
            .field("avatar", &self.avatar)
            .finish()
    }
}

impl FromStr for ProfileField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "username" => Ok(Self::Username),
            "email" => Ok(Self::Email),
            "password" => Ok(Self::Password),
            other => Err(format!("Unknown profile field '{other}'")),
        }
    }
}
