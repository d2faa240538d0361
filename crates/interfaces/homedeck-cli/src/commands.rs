use std::path::Path;

use anyhow::{anyhow, Context, Result};
use homedeck_app_core::http::http_lifecycle_client;
use homedeck_app_core::{
    AppTile, BoardStore, EditModeSubscription, ExternalUrlResolver, Notifier, TileClick,
    TileServices, UrlResolver,
};
use homedeck_core::{
    resolve_mode, App, Board, ControlCredentials, LifecycleOutcome, ServiceCommand, TileMode,
};
use homedeck_infra::HttpLifecycleClient;

use crate::console::PrintNavigator;

type CliTile<N> = AppTile<HttpLifecycleClient, N, PrintNavigator, ExternalUrlResolver>;

fn cli_tile<N: Notifier>(
    app: App,
    credentials: ControlCredentials,
    notifier: N,
    dashboard_origin: Option<String>,
    edit_mode: bool,
) -> Result<CliTile<N>> {
    let client = http_lifecycle_client(credentials).context("Failed to build HTTP client")?;
    let services = TileServices::new(
        client,
        notifier,
        PrintNavigator,
        ExternalUrlResolver::new(dashboard_origin),
        EditModeSubscription::constant(edit_mode),
    );
    Ok(AppTile::new(app, services))
}

pub fn load_board(path: Option<&Path>) -> Result<Board> {
    let store = BoardStore::resolve(path)?;
    store
        .load()
        .with_context(|| format!("Failed to load board from {}", store.path().display()))
}

/// Issues one lifecycle command and reports it through `notifier`.
///
/// The name is sent exactly as given. A board entry is used only on an exact
/// match, so a differently cased name never turns into the board's spelling.
pub async fn cmd_service<N: Notifier>(
    credentials: ControlCredentials,
    board: &Board,
    app_name: &str,
    command: ServiceCommand,
    notifier: N,
) -> Result<LifecycleOutcome> {
    let app = board.get(app_name).cloned().unwrap_or_else(|| {
        tracing::debug!("'{app_name}' is not on the board, sending the name as given");
        App::named(app_name)
    });

    let tile = cli_tile(app, credentials, notifier, None, false)?;
    Ok(tile.run_command(command).await)
}

/// Clicks the tile body of `app_name` and returns what happened.
pub fn cmd_open<N: Notifier>(
    credentials: ControlCredentials,
    board: &Board,
    app_name: &str,
    edit_mode: bool,
    dashboard_origin: Option<String>,
    notifier: N,
) -> Result<TileClick> {
    let app = board
        .find(app_name)
        .cloned()
        .ok_or_else(|| anyhow!("App '{}' not found on board", app_name))?;

    let tile = cli_tile(app, credentials, notifier, dashboard_origin, edit_mode)?;
    Ok(tile.click())
}

pub fn cmd_apps(board: &Board, dashboard_origin: Option<String>) -> Result<()> {
    if board.apps.is_empty() {
        println!("No apps on the board.");
        return Ok(());
    }

    let resolver = ExternalUrlResolver::new(dashboard_origin);
    println!("{:<24} {:<8} {:<48}", "NAME", "MODE", "URL");
    println!("{:-<24} {:-<8} {:-<48}", "", "", "");
    for app in &board.apps {
        let mode = match resolve_mode(app, false).mode {
            TileMode::Link => "link",
            TileMode::Button => "button",
        };
        let url = resolver.resolve(app).unwrap_or_default();
        println!("{:<24} {:<8} {:<48}", app.name, mode, url);
    }

    Ok(())
}
