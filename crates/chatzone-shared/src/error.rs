use thiserror::Error;

/// Errors raised while mapping view-layer paths to routes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("Unknown route: {0}")]
    Unknown(String),

    #[error("Profile route is missing a username")]
    MissingUsername,
}
