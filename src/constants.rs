//! Application-wide constants.

/// The display name of the application.
pub const APP_NAME: &str = "BrandKit";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "brandkit";

/// Environment variable that overrides the configuration directory.
pub const CONFIG_DIR_ENV: &str = "BRANDKIT_CONFIG_DIR";
