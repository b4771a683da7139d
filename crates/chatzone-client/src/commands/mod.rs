//! Command handlers called by the view layer.
//!
//! Each sub-module groups related intents. Every handler takes the shared
//! `Mutex<AppState>` explicitly and returns a serializable DTO the view can
//! render directly.

pub mod channels;
pub mod identity;
pub mod messaging;
pub mod profile;
