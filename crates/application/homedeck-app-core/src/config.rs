//! Process configuration, read once at startup.

use std::path::PathBuf;

use homedeck_config::{
    base_url_or_default, non_blank, ENV_API_BASE_URL, ENV_API_TOKEN, ENV_BOARD_PATH,
    ENV_DASHBOARD_ORIGIN,
};
use homedeck_core::ControlCredentials;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub credentials: ControlCredentials,
    pub dashboard_origin: Option<String>,
    pub board_path: Option<PathBuf>,
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            credentials: load_credentials_from(&lookup),
            dashboard_origin: non_blank(lookup(ENV_DASHBOARD_ORIGIN)),
            board_path: non_blank(lookup(ENV_BOARD_PATH)).map(PathBuf::from),
        }
    }
}

pub fn load_credentials() -> ControlCredentials {
    load_credentials_from(|key| std::env::var(key).ok())
}

pub fn load_credentials_from(lookup: impl Fn(&str) -> Option<String>) -> ControlCredentials {
    ControlCredentials::new(
        base_url_or_default(lookup(ENV_API_BASE_URL)),
        lookup(ENV_API_TOKEN),
    )
}
