use chatzone_shared::error::RouteError;
use chatzone_store::StoreError;
use thiserror::Error;

/// Why a command was refused. The view layer may surface or ignore these;
/// application state is unchanged whenever one is returned.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Route error: {0}")]
    Route(#[from] RouteError),

    #[error("No profile edit in progress")]
    NoDraft,

    #[error("Unknown profile field: {0}")]
    UnknownField(String),

    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Lock poisoned: {0}")]
    LockPoisoned(String),
}

impl ClientError {
    /// True for refusals caused by blank input or a missing identity.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::Store(StoreError::EmptyInput) | Self::Store(StoreError::NoIdentity)
        )
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
