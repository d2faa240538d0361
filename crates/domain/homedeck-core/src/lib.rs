use serde::{Deserialize, Serialize};

pub mod app;
pub mod command;
pub mod external_url;
pub mod interaction;

pub use app::{App, AppAppearance, AppBehaviour, NamePosition, NameStatus};
pub use command::{
    CommandId, ControlError, ControlErrorKind, LifecycleOutcome, PerCommand, ServiceCommand,
};
pub use interaction::{resolve_mode, Interaction, LinkTarget, TileMode, WindowTarget};

/// Where lifecycle commands are sent and how they authenticate.
///
/// Loaded once at process start and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlCredentials {
    pub base_url: String,
    pub token: Option<String>,
}

impl ControlCredentials {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: homedeck_config::non_blank(token),
        }
    }

    /// `Bearer {token}` when a token is configured.
    pub fn authorization(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {t}"))
    }
}

/// The set of app tiles a dashboard renders.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Board {
    #[serde(default)]
    pub apps: Vec<App>,
}

impl Board {
    /// Exact, case-sensitive lookup.
    pub fn get(&self, name: &str) -> Option<&App> {
        self.apps.iter().find(|a| a.name == name)
    }

    /// Exact match first, then a case-insensitive one.
    pub fn find(&self, name: &str) -> Option<&App> {
        self.apps
            .iter()
            .find(|a| a.name == name)
            .or_else(|| self.apps.iter().find(|a| a.name.eq_ignore_ascii_case(name)))
    }

    /// First app name that appears more than once.
    pub fn duplicate_name(&self) -> Option<&str> {
        self.apps.iter().enumerate().find_map(|(ix, app)| {
            self.apps[..ix]
                .iter()
                .any(|prev| prev.name == app.name)
                .then_some(app.name.as_str())
        })
    }
}
