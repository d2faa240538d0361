use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use homedeck_app_core::{
    AppTile, CommandPhase, EditModeStore, ExternalUrlResolver, Navigator, Notifier,
    ServiceLifecycleClient, TileClick, TileServices,
};
use homedeck_core::{
    App, ControlError, LifecycleOutcome, LinkTarget, ServiceCommand, WindowTarget,
};
use tokio::sync::Notify;

/// Succeeds with "<app>: <command> ok" except for apps named "down", which fail.
/// Start waits for `start_gate` before answering.
#[derive(Default)]
struct ScriptedClient {
    calls: AtomicUsize,
    start_gate: Option<Arc<Notify>>,
}

#[async_trait]
impl ServiceLifecycleClient for ScriptedClient {
    async fn issue(&self, command: ServiceCommand, app_name: &str) -> LifecycleOutcome {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if command == ServiceCommand::Start {
            if let Some(gate) = &self.start_gate {
                gate.notified().await;
            }
        }
        if app_name == "down" {
            return LifecycleOutcome::Failure {
                command,
                reason: ControlError::Network("connection refused".into()),
            };
        }
        LifecycleOutcome::Success {
            command,
            status: format!("{app_name}: {command} ok"),
        }
    }
}

#[derive(Default)]
struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

#[derive(Default)]
struct RecordingNavigator {
    visits: Mutex<Vec<LinkTarget>>,
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, target: &LinkTarget) {
        self.visits.lock().unwrap().push(target.clone());
    }
}

type TestTile = AppTile<ScriptedClient, RecordingNotifier, RecordingNavigator, ExternalUrlResolver>;

fn tile_with(app: App, client: ScriptedClient, store: &EditModeStore) -> TestTile {
    let services = TileServices::new(
        client,
        RecordingNotifier::default(),
        RecordingNavigator::default(),
        ExternalUrlResolver::default(),
        store.subscribe(),
    );
    AppTile::new(app, services)
}

fn services(
    tile: &TestTile,
) -> &TileServices<ScriptedClient, RecordingNotifier, RecordingNavigator, ExternalUrlResolver> {
    tile.services()
}

fn messages(tile: &TestTile) -> Vec<String> {
    services(tile)
        .reporter
        .notifier()
        .messages
        .lock()
        .unwrap()
        .clone()
}

fn visits(tile: &TestTile) -> Vec<LinkTarget> {
    services(tile).navigator.visits.lock().unwrap().clone()
}

#[tokio::test]
async fn edit_mode_click_does_nothing_with_or_without_url() {
    let store = EditModeStore::new(true);

    for app in [App::named("plex").with_url("http://plex.lan"), App::named("folder")] {
        let tile = tile_with(app, ScriptedClient::default(), &store);
        assert_eq!(tile.click(), TileClick::Ignored);
        assert!(visits(&tile).is_empty());
        assert_eq!(services(&tile).client.calls.load(Ordering::SeqCst), 0);
        assert!(messages(&tile).is_empty());
    }
}

#[tokio::test]
async fn click_navigates_with_window_target_from_behaviour() {
    let store = EditModeStore::new(false);

    let mut same_tab = App::named("grafana").with_url("http://grafana.lan");
    same_tab.behaviour.is_opening_new_tab = false;
    let tile = tile_with(same_tab, ScriptedClient::default(), &store);

    let expected = LinkTarget {
        url: "http://grafana.lan".into(),
        window: WindowTarget::SelfWindow,
    };
    assert_eq!(tile.click(), TileClick::Navigated(expected.clone()));
    assert_eq!(visits(&tile), vec![expected]);

    let tile = tile_with(
        App::named("plex").with_url("http://plex.lan"),
        ScriptedClient::default(),
        &store,
    );
    match tile.click() {
        TileClick::Navigated(target) => assert_eq!(target.window.as_attr(), "_blank"),
        other => panic!("expected navigation, got {other:?}"),
    }
    assert_eq!(services(&tile).client.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn click_on_button_tile_is_inert() {
    let store = EditModeStore::new(false);
    let tile = tile_with(App::named("folder"), ScriptedClient::default(), &store);
    assert_eq!(tile.click(), TileClick::Inert);
    assert!(visits(&tile).is_empty());
}

#[tokio::test]
async fn toggling_edit_mode_relocks_a_live_tile() {
    let store = EditModeStore::new(false);
    let tile = tile_with(
        App::named("plex").with_url("http://plex.lan"),
        ScriptedClient::default(),
        &store,
    );
    assert!(matches!(tile.click(), TileClick::Navigated(_)));

    store.set(true);
    assert_eq!(tile.click(), TileClick::Ignored);
    assert_eq!(visits(&tile).len(), 1);
}

#[tokio::test]
async fn success_reports_status_verbatim() {
    let store = EditModeStore::new(false);
    let tile = tile_with(App::named("plex"), ScriptedClient::default(), &store);

    let outcome = tile.run_command(ServiceCommand::Restart).await;
    assert!(outcome.is_success());
    assert_eq!(messages(&tile), vec!["plex: restart ok".to_string()]);
    assert_eq!(tile.phase(ServiceCommand::Restart), CommandPhase::Idle);
}

#[tokio::test]
async fn failure_reports_fixed_message_per_command() {
    let store = EditModeStore::new(false);
    let tile = tile_with(App::named("down"), ScriptedClient::default(), &store);

    for command in ServiceCommand::ALL {
        let outcome = tile.run_command(command).await;
        assert!(!outcome.is_success());
    }
    assert_eq!(
        messages(&tile),
        vec![
            "Failed to start service".to_string(),
            "Failed to stop service".to_string(),
            "Failed to restart service".to_string(),
        ]
    );
}

#[tokio::test]
async fn command_buttons_work_in_edit_mode() {
    let store = EditModeStore::new(true);
    let tile = tile_with(App::named("plex"), ScriptedClient::default(), &store);

    let outcome = tile.run_command(ServiceCommand::Stop).await;
    assert!(outcome.is_success());
    assert_eq!(services(&tile).client.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn start_and_stop_resolve_independently_in_arrival_order() {
    let gate = Arc::new(Notify::new());
    let client = ScriptedClient {
        start_gate: Some(gate.clone()),
        ..Default::default()
    };
    let store = EditModeStore::new(false);
    let tile = tile_with(App::named("plex"), client, &store);
    let handle = tokio::runtime::Handle::current();

    let start = tile.spawn_command(ServiceCommand::Start, &handle);
    let stop = tile.spawn_command(ServiceCommand::Stop, &handle);
    assert_eq!(tile.phase(ServiceCommand::Start), CommandPhase::Pending);

    let stop = stop.await.unwrap();
    assert_eq!(stop.message(), "plex: stop ok");
    assert_eq!(messages(&tile), vec!["plex: stop ok".to_string()]);
    assert_eq!(tile.phase(ServiceCommand::Start), CommandPhase::Pending);
    assert_eq!(tile.phase(ServiceCommand::Stop), CommandPhase::Idle);

    gate.notify_one();
    let start = start.await.unwrap();
    assert_eq!(start.message(), "plex: start ok");
    assert_eq!(
        messages(&tile),
        vec!["plex: stop ok".to_string(), "plex: start ok".to_string()]
    );
    assert_eq!(tile.phase(ServiceCommand::Start), CommandPhase::Idle);
}

#[tokio::test]
async fn repeated_commands_are_not_deduplicated() {
    let store = EditModeStore::new(false);
    let tile = tile_with(App::named("plex"), ScriptedClient::default(), &store);

    let (a, b) = futures::future::join(
        tile.run_command(ServiceCommand::Restart),
        tile.run_command(ServiceCommand::Restart),
    )
    .await;
    assert!(a.is_success() && b.is_success());
    assert_eq!(services(&tile).client.calls.load(Ordering::SeqCst), 2);
    assert_eq!(messages(&tile).len(), 2);
}
