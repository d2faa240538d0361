//! Central configuration constants for the control API and the board file.

/// Environment variable holding the control API base URL.
pub const ENV_API_BASE_URL: &str = "HOMEDECK_API_BASE_URL";

/// Environment variable holding the bearer token sent to the control API.
pub const ENV_API_TOKEN: &str = "HOMEDECK_API_TOKEN";

/// Environment variable holding the origin substituted for [`DASHBOARD_BASE_PLACEHOLDER`].
pub const ENV_DASHBOARD_ORIGIN: &str = "HOMEDECK_DASHBOARD_ORIGIN";

/// Environment variable pointing at an explicit board file.
pub const ENV_BOARD_PATH: &str = "HOMEDECK_BOARD";

/// Control API base URL used when none is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

/// Placeholder an app's external URL may start with to mean "wherever the dashboard is served".
pub const DASHBOARD_BASE_PLACEHOLDER: &str = "[dashboard_base]";

/// File name of the board inside the platform config directory.
pub const BOARD_FILE_NAME: &str = "board.json";

/// Treats empty or whitespace-only values as unset.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Configured base URL, or the default when unset.
pub fn base_url_or_default(value: Option<String>) -> String {
    non_blank(value).unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
}
