use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::post;
use axum::Router;
use homedeck_core::{ControlCredentials, ControlError, LifecycleOutcome, ServiceCommand};
use homedeck_infra::HttpLifecycleClient;

#[derive(Debug, Clone)]
struct Seen {
    path: String,
    authorization: Option<String>,
}

#[derive(Clone, Default)]
struct MockState {
    seen: Arc<Mutex<Vec<Seen>>>,
}

async fn handle_command(
    State(state): State<MockState>,
    Path((command, name)): Path<(String, String)>,
    headers: HeaderMap,
) -> impl IntoResponse {
    state.seen.lock().unwrap().push(Seen {
        path: format!("/{command}/{name}"),
        authorization: headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
    });

    match name.as_str() {
        "broken" => (StatusCode::INTERNAL_SERVER_ERROR, r#"{"status":"boom"}"#.to_string()),
        "garbled" => (StatusCode::OK, "definitely not json".to_string()),
        _ => (StatusCode::OK, format!(r#"{{"status":"{command} {name}: ok"}}"#)),
    }
}

async fn start_control_api() -> (SocketAddr, MockState, tokio::task::JoinHandle<()>) {
    let state = MockState::default();
    let app = Router::new()
        .route("/:command/:name", post(handle_command))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (addr, state, handle)
}

fn client_for(base_url: String, token: Option<&str>) -> HttpLifecycleClient {
    HttpLifecycleClient::new(
        homedeck_infra::default_http_client().unwrap(),
        ControlCredentials::new(base_url, token.map(str::to_string)),
    )
}

#[tokio::test]
async fn each_command_hits_its_own_endpoint_with_bearer_token() {
    let (addr, state, server) = start_control_api().await;
    let client = client_for(format!("http://{addr}"), Some("t0ken"));

    for command in ServiceCommand::ALL {
        let outcome = client.issue(command, "plex").await;
        assert!(outcome.is_success(), "{command} failed: {outcome:?}");
    }

    let seen = state.seen.lock().unwrap().clone();
    let paths: Vec<&str> = seen.iter().map(|s| s.path.as_str()).collect();
    assert_eq!(paths, ["/start/plex", "/stop/plex", "/restart/plex"]);
    for s in &seen {
        assert_eq!(s.authorization.as_deref(), Some("Bearer t0ken"));
    }

    server.abort();
}

#[tokio::test]
async fn success_status_is_returned_verbatim() {
    let (addr, _state, server) = start_control_api().await;
    let client = client_for(format!("http://{addr}/"), None);

    let outcome = client.issue(ServiceCommand::Stop, "sonarr").await;
    assert_eq!(
        outcome,
        LifecycleOutcome::Success {
            command: ServiceCommand::Stop,
            status: "stop sonarr: ok".into(),
        }
    );

    server.abort();
}

#[tokio::test]
async fn missing_token_sends_no_authorization_header() {
    let (addr, state, server) = start_control_api().await;
    let client = client_for(format!("http://{addr}"), None);

    let _ = client.issue(ServiceCommand::Start, "plex").await;

    let seen = state.seen.lock().unwrap().clone();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].authorization, None);

    server.abort();
}

#[tokio::test]
async fn server_error_is_a_failure_without_reading_the_body() {
    let (addr, _state, server) = start_control_api().await;
    let client = client_for(format!("http://{addr}"), Some("t"));

    let outcome = client.issue(ServiceCommand::Restart, "broken").await;
    match &outcome {
        LifecycleOutcome::Failure { command, reason } => {
            assert_eq!(*command, ServiceCommand::Restart);
            assert_eq!(*reason, ControlError::Server { status: 500 });
        }
        other => panic!("expected failure, got {other:?}"),
    }
    assert_eq!(outcome.message(), "Failed to restart service");

    server.abort();
}

#[tokio::test]
async fn unparseable_success_body_is_a_failure() {
    let (addr, _state, server) = start_control_api().await;
    let client = client_for(format!("http://{addr}"), None);

    let err = client
        .send(ServiceCommand::Start, "garbled")
        .await
        .unwrap_err();
    assert!(matches!(err, ControlError::Decode(_)));

    server.abort();
}

#[tokio::test]
async fn unreachable_server_is_a_network_failure() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = client_for(format!("http://{addr}"), Some("t"));
    let outcome = client.issue(ServiceCommand::Start, "plex").await;
    match outcome {
        LifecycleOutcome::Failure { reason, .. } => {
            assert!(matches!(reason, ControlError::Network(_)), "{reason:?}");
        }
        other => panic!("expected failure, got {other:?}"),
    }
}

#[tokio::test]
async fn concurrent_commands_resolve_independently() {
    let (addr, state, server) = start_control_api().await;
    let client = client_for(format!("http://{addr}"), None);

    let (start, stop) = futures::future::join(
        client.issue(ServiceCommand::Start, "plex"),
        client.issue(ServiceCommand::Stop, "plex"),
    )
    .await;

    assert_eq!(start.message(), "start plex: ok");
    assert_eq!(stop.message(), "stop plex: ok");
    assert_eq!(state.seen.lock().unwrap().len(), 2);

    server.abort();
}

#[tokio::test]
async fn dot_segment_names_never_reach_the_server() {
    let (addr, state, server) = start_control_api().await;
    let client = client_for(format!("http://{addr}"), Some("t"));

    for name in [".", ".."] {
        let outcome = client.issue(ServiceCommand::Start, name).await;
        match &outcome {
            LifecycleOutcome::Failure { reason, .. } => {
                assert!(matches!(reason, ControlError::Endpoint(_)), "{reason:?}");
            }
            other => panic!("expected failure for {name:?}, got {other:?}"),
        }
        assert_eq!(outcome.message(), "Failed to start service");
    }
    assert!(state.seen.lock().unwrap().is_empty());

    server.abort();
}
