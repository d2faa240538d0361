//! The app tile: interaction gating plus the lifecycle command path.

mod tracker;

use std::sync::Arc;

use homedeck_core::{
    resolve_mode, App, Board, Interaction, LifecycleOutcome, LinkTarget, PerCommand,
    ServiceCommand, WindowTarget,
};
use tokio::task::JoinHandle;
use tracing::{debug, info, info_span, warn, Instrument};

use crate::edit_mode::EditModeSubscription;
use crate::ports::{Navigator, Notifier, ServiceLifecycleClient, UrlResolver};
use crate::reporter::OutcomeReporter;

pub use tracker::{CommandPhase, CommandTicket, CommandTracker};

/// Collaborators shared by every tile on a board.
pub struct TileServices<C, N, V, R> {
    pub client: Arc<C>,
    pub reporter: Arc<OutcomeReporter<N>>,
    pub navigator: Arc<V>,
    pub resolver: Arc<R>,
    pub edit_mode: EditModeSubscription,
}

impl<C, N, V, R> Clone for TileServices<C, N, V, R> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            reporter: self.reporter.clone(),
            navigator: self.navigator.clone(),
            resolver: self.resolver.clone(),
            edit_mode: self.edit_mode.clone(),
        }
    }
}

impl<C, N, V, R> TileServices<C, N, V, R>
where
    C: ServiceLifecycleClient,
    N: Notifier,
    V: Navigator,
    R: UrlResolver,
{
    pub fn new(
        client: C,
        notifier: N,
        navigator: V,
        resolver: R,
        edit_mode: EditModeSubscription,
    ) -> Self {
        Self {
            client: Arc::new(client),
            reporter: Arc::new(OutcomeReporter::new(notifier)),
            navigator: Arc::new(navigator),
            resolver: Arc::new(resolver),
            edit_mode,
        }
    }

    /// One tile per app, in board order.
    pub fn tiles(&self, board: &Board) -> Vec<AppTile<C, N, V, R>> {
        board
            .apps
            .iter()
            .cloned()
            .map(|app| AppTile::new(app, self.clone()))
            .collect()
    }
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct TileView {
    pub name: String,
    pub interaction: Interaction,
    /// Present only when a click on the body would navigate.
    pub link: Option<LinkTarget>,
    pub tooltip: Option<String>,
    pub pending: PerCommand<bool>,
}

/// What a click on the tile body did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TileClick {
    /// Edit mode is on; pointer input is disabled.
    Ignored,
    Navigated(LinkTarget),
    /// Button mode, or a link that resolved to nothing.
    Inert,
}

pub struct AppTile<C, N, V, R> {
    app: Arc<App>,
    services: TileServices<C, N, V, R>,
    tracker: CommandTracker,
}

impl<C, N, V, R> Clone for AppTile<C, N, V, R> {
    fn clone(&self) -> Self {
        Self {
            app: self.app.clone(),
            services: self.services.clone(),
            tracker: self.tracker.clone(),
        }
    }
}

impl<C, N, V, R> AppTile<C, N, V, R>
where
    C: ServiceLifecycleClient,
    N: Notifier,
    V: Navigator,
    R: UrlResolver,
{
    pub fn new(app: App, services: TileServices<C, N, V, R>) -> Self {
        Self {
            app: Arc::new(app),
            services,
            tracker: CommandTracker::default(),
        }
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn services(&self) -> &TileServices<C, N, V, R> {
        &self.services
    }

    /// Re-read on every call; the edit flag may have changed since the last one.
    pub fn interaction(&self) -> Interaction {
        resolve_mode(&self.app, self.services.edit_mode.is_enabled())
    }

    fn link_target(&self, interaction: Interaction) -> Option<LinkTarget> {
        if !interaction.navigates() {
            return None;
        }
        let url = self.services.resolver.resolve(&self.app)?;
        Some(LinkTarget {
            url,
            window: WindowTarget::from_new_tab(self.app.behaviour.is_opening_new_tab),
        })
    }

    pub fn view(&self) -> TileView {
        let interaction = self.interaction();
        let mut pending = PerCommand::default();
        for command in ServiceCommand::ALL {
            *pending.get_mut(command) = self.phase(command) == CommandPhase::Pending;
        }
        TileView {
            name: self.app.name.clone(),
            interaction,
            link: self.link_target(interaction),
            tooltip: self.app.tooltip_text(),
            pending,
        }
    }

    /// Click on the tile body, outside the command buttons.
    pub fn click(&self) -> TileClick {
        let interaction = self.interaction();
        if !interaction.interactive {
            return TileClick::Ignored;
        }
        match self.link_target(interaction) {
            Some(target) => {
                self.services.navigator.navigate(&target);
                TileClick::Navigated(target)
            }
            None => TileClick::Inert,
        }
    }

    pub fn phase(&self, command: ServiceCommand) -> CommandPhase {
        self.tracker.phase(command)
    }

    /// Issues `command` and reports the outcome before returning it.
    ///
    /// Command buttons are not gated by edit mode.
    pub async fn run_command(&self, command: ServiceCommand) -> LifecycleOutcome {
        let ticket = self.tracker.begin(command);
        self.execute(ticket).await
    }

    /// Fire-and-forget variant for event loops. The command is `Pending` as
    /// soon as this returns.
    pub fn spawn_command(
        &self,
        command: ServiceCommand,
        handle: &tokio::runtime::Handle,
    ) -> JoinHandle<LifecycleOutcome> {
        let ticket = self.tracker.begin(command);
        let tile = self.clone();
        handle.spawn(async move { tile.execute(ticket).await })
    }

    async fn execute(&self, mut ticket: CommandTicket) -> LifecycleOutcome {
        let command = ticket.command();
        let app_name = self.app.name.clone();
        let span = info_span!("service_command", command_id = %ticket.id(), %command, app = %app_name);

        let outcome = self
            .services
            .client
            .issue(command, &app_name)
            .instrument(span.clone())
            .await;
        ticket.settle(&outcome);

        span.in_scope(|| match &outcome {
            LifecycleOutcome::Success { status, .. } => info!("{command} {app_name}: {status}"),
            LifecycleOutcome::Failure { reason, .. } => {
                debug!(kind = ?reason.kind(), "{command} {app_name} failed: {reason}")
            }
        });

        // The notifier blocks until acknowledged; keep it off the async workers.
        let reporter = self.services.reporter.clone();
        let reported = outcome.clone();
        if let Err(e) = tokio::task::spawn_blocking(move || reporter.report(&reported)).await {
            warn!("reporting {command} for {app_name} did not complete: {e}");
        }

        drop(ticket);
        outcome
    }
}
