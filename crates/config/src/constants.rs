//! Centralized constants for leadboard configuration
//!
//! Single source of truth for environment prefixes and default paths.

/// Environment variable handling
pub mod env {
    /// Prefix for settings overrides, e.g. `LEADBOARD__RULES__PATH`
    pub const PREFIX: &str = "LEADBOARD";

    /// Separator between nested keys
    pub const SEPARATOR: &str = "__";

    /// Selects `config/{env}` on top of `config/default`
    pub const ENV_SELECTOR: &str = "LEADBOARD_ENV";
}

/// Default configuration file locations
pub mod paths {
    /// Base settings file (extension resolved by the config crate)
    pub const DEFAULT_SETTINGS: &str = "config/default";

    /// Directory holding environment-specific settings files
    pub const SETTINGS_DIR: &str = "config";
}

/// Label used in validation reports for the compiled-in rule table
pub const BUILTIN_RULES_SOURCE: &str = "builtin";
