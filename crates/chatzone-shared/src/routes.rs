//! View-layer routes and the login guard in front of them.

use serde::Serialize;

use crate::error::RouteError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", content = "username", rename_all = "camelCase")]
pub enum Route {
    /// `/` — signup / login form
    Signup,
    /// `/chat`
    Chat,
    /// `/profile/<username>`
    Profile(String),
}

impl Route {
    pub fn parse(path: &str) -> Result<Self, RouteError> {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Ok(Self::Signup),
            "/chat" => Ok(Self::Chat),
            "/profile" => Err(RouteError::MissingUsername),
            _ => match trimmed.strip_prefix("/profile/") {
                Some(name) if !name.is_empty() && !name.contains('/') => {
                    Ok(Self::Profile(name.to_string()))
                }
                _ => Err(RouteError::Unknown(path.to_string())),
            },
        }
    }

    pub fn path(&self) -> String {
        match self {
            Self::Signup => "/".to_string(),
            Self::Chat => "/chat".to_string(),
            Self::Profile(name) => format!("/profile/{name}"),
        }
    }

    pub fn requires_identity(&self) -> bool {
        !matches!(self, Self::Signup)
    }
}

/// Where the view layer should actually go. Without a logged-in identity
/// every guarded route falls back to the signup form.
pub fn resolve(route: Route, logged_in: bool) -> Route {
    if route.requires_identity() && !logged_in {
        Route::Signup
    } else {
        route
    }
}
