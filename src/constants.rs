//! Constants used throughout the facades

/// Facade names, used as log targets and in error messages
pub mod facade_names {
    pub const ALERT: &str = "alert";
    pub const CONFIRM: &str = "confirm";
    pub const PROMPT: &str = "prompt";
    pub const NOTIFY: &str = "notify";
    pub const LOADING: &str = "loading";
}

/// Presentation colors shared by the icon tables
pub mod colors {
    pub const COLOR_WARN: &str = "#F2C037";
    pub const COLOR_ERROR: &str = "#C10015";
    pub const COLOR_SUCCESS: &str = "#21BA45";
    pub const COLOR_DEBUG: &str = "#9C27B0";
    pub const COLOR_QUESTION: &str = "#1976D2";
    pub const COLOR_INFO: &str = "#1976D2";
    pub const COLOR_DEFAULT: &str = "#616161";
}

/// Font size of dialog icons
pub const ICON_SIZE: &str = "1.5em";

/// Notification display time in milliseconds; `0` keeps it on screen
pub const DEFAULT_NOTIFY_DURATION_MS: u64 = 3000;

/// Settings file extensions understood by the loader
pub const SETTINGS_JSON_EXTENSIONS: &[&str] = &["json"];
pub const SETTINGS_YAML_EXTENSIONS: &[&str] = &["yaml", "yml"];

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
