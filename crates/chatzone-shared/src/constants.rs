/// Application name
pub const APP_NAME: &str = "Chat Zone";

/// Well-known id of the default channel. It always exists and cannot be removed.
pub const GENERAL_CHANNEL_ID: &str = "general";

/// Display name of the default channel
pub const GENERAL_CHANNEL_NAME: &str = "general";

/// Display name used when channel-creation text only contained mentions
pub const FALLBACK_CHANNEL_NAME: &str = "Nouveau salon";

/// Timestamp layout for chat messages (24-hour, fr-FR style)
pub const MESSAGE_TIME_FORMAT: &str = "%H:%M";

/// Shown in place of a password on profile views
pub const PASSWORD_MASK: &str = "********";

/// Password reported for users other than the logged-in one
pub const MOCK_PASSWORD: &str = "****";

/// Email domain used for mock profiles of other users
pub const MOCK_EMAIL_DOMAIN: &str = "example.com";

/// Fixed figure shown in the chat status bar
pub const CONNECTED_USERS: u32 = 42;
