//! Application configuration.
//!
//! Centralized configuration for the CollabHub frontend.
//! Values are compiled in; the API URL can be overridden at build time
//! with the `COLLABHUB_API_URL` environment variable.

/// External API base URL.
///
/// Receives waitlist submissions.
pub const API_BASE_URL: &str = match option_env!("COLLABHUB_API_URL") {
    Some(url) => url,
    None => "http://localhost:3000",
};

/// Waitlist submission path, appended to [`API_BASE_URL`].
pub const WAITLIST_PATH: &str = "/api/waitlist";

/// Image the user posts during account validation.
pub const VALIDATION_IMAGE_URL: &str = "/assets/collabhub-validacao.png";

/// File name proposed when saving the validation image.
pub const VALIDATION_IMAGE_FILENAME: &str = "collabhub-validacao.png";

/// Delay before a downloaded blob's object URL is released (in milliseconds).
///
/// Revoking in the same tick as the link click can cancel the download.
pub const OBJECT_URL_REVOKE_DELAY_MS: u32 = 1_000;

/// Application name.
pub const APP_NAME: &str = "CollabHub";

/// How long a notification stays on screen (in milliseconds).
pub const TOAST_DURATION_MS: u32 = 4_000;

/// Maximum notifications shown at once.
pub const MAX_TOASTS: usize = 5;
