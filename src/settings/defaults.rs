//! Default values for webhook settings.

/// Default media type, used for both `Accept` and the body's `Content-Type`.
pub const CONTENT_TYPE: &str = "application/json";

/// Default request body.
pub const BODY: &str = "{}";

/// Directory name used under the platform config directory.
pub const APP_DIR: &str = "webhook-action";

/// File name of the persisted settings document.
pub const SETTINGS_FILE: &str = "settings.json";

/// Settings path used when no platform config directory is available.
pub const FALLBACK_SETTINGS_PATH: &str = "webhook-action.json";

/// Returns the default location of the settings document.
///
/// Uses `<config_dir>/webhook-action/settings.json`, or
/// `./webhook-action.json` if the platform has no config directory.
#[must_use]
pub fn settings_path() -> std::path::PathBuf {
    dirs::config_dir().map_or_else(
        || std::path::PathBuf::from(FALLBACK_SETTINGS_PATH),
        |dir| dir.join(APP_DIR).join(SETTINGS_FILE),
    )
}
