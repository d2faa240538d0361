use async_trait::async_trait;
use homedeck_core::{App, LifecycleOutcome, LinkTarget, ServiceCommand};

/// Sends lifecycle commands to wherever services are controlled.
///
/// Implementations must fold every error into [`LifecycleOutcome::Failure`].
#[async_trait]
pub trait ServiceLifecycleClient: Send + Sync + 'static {
    async fn issue(&self, command: ServiceCommand, app_name: &str) -> LifecycleOutcome;
}

/// Shows a message to the user and returns once they acknowledged it.
pub trait Notifier: Send + Sync + 'static {
    fn notify(&self, message: &str);
}

/// Opens a link target, e.g. in a browser.
pub trait Navigator: Send + Sync + 'static {
    fn navigate(&self, target: &LinkTarget);
}

/// Maps an app to the URL a user should be sent to.
pub trait UrlResolver: Send + Sync + 'static {
    fn resolve(&self, app: &App) -> Option<String>;
}
