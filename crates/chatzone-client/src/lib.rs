//! # chatzone-client
//!
//! Command surface of the Chat Zone demo. A view layer calls [`start`] once,
//! keeps the returned handle, and passes it to the functions in
//! [`commands`] for every user intent. It re-renders from the DTOs they
//! return.

pub mod commands;
pub mod config;
pub mod error;
pub mod state;

use std::sync::{Arc, Mutex};

use tracing_subscriber::{fmt, EnvFilter};

pub use config::ClientConfig;
pub use error::ClientError;
pub use state::AppState;

/// Install the global `tracing` subscriber. `RUST_LOG` overrides the
/// default filter. Calling this twice is harmless.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("chatzone_client=debug,chatzone_store=info,warn"));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init();
}

/// Build a fresh client state: nobody logged in, `general` on screen with
/// its seeded history.
pub fn start(config: ClientConfig) -> Arc<Mutex<AppState>> {
    tracing::info!(
        known_users = config.known_users.len(),
        "Starting {} client",
        chatzone_shared::constants::APP_NAME
    );
    Arc::new(Mutex::new(AppState::new(config)))
}
