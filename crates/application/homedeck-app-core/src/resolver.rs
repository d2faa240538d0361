use homedeck_core::external_url::resolve_external_url;
use homedeck_core::App;

use crate::ports::UrlResolver;

/// Resolves `behaviour.externalUrl` (with the dashboard placeholder) or falls back to `url`.
#[derive(Debug, Clone, Default)]
pub struct ExternalUrlResolver {
    dashboard_origin: Option<String>,
}

impl ExternalUrlResolver {
    pub fn new(dashboard_origin: Option<String>) -> Self {
        Self {
            dashboard_origin: homedeck_config::non_blank(dashboard_origin),
        }
    }
}

impl UrlResolver for ExternalUrlResolver {
    fn resolve(&self, app: &App) -> Option<String> {
        resolve_external_url(app, self.dashboard_origin.as_deref())
    }
}
