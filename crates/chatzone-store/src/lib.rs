//! # chatzone-store
//!
//! In-memory state for the Chat Zone client. Nothing here touches disk or
//! the network: the session, the channel list and the visible message log
//! all live for as long as the owning client does.
//!
//! Each store is a plain struct with synchronous operations. The client
//! crate owns one of each and passes them around explicitly.

pub mod channels;
pub mod messages;
pub mod models;
pub mod session;

mod error;

pub use channels::ChannelRegistry;
pub use error::StoreError;
pub use messages::MessageLog;
pub use models::*;
pub use session::SessionStore;
