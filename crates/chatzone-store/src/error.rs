use chatzone_shared::types::ChannelId;
use thiserror::Error;

/// Intents the stores refuse. State is left untouched in every case.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Message or channel text was empty after trimming.
    #[error("Input is empty")]
    EmptyInput,

    /// The operation needs a logged-in identity.
    #[error("No identity logged in")]
    NoIdentity,

    /// No channel is registered under this id.
    #[error("Unknown channel: {0}")]
    UnknownChannel(ChannelId),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StoreError>;
