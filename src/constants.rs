//! Application-wide constants.

/// The display name of the application.
pub const APP_NAME: &str = "AAC Board";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "aacboard";

/// Directory name used under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "aacboard";

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "AACBOARD_CONFIG_DIR";
