use homedeck_core::{ControlCredentials, ControlError, LifecycleOutcome, ServiceCommand};
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Url};
use serde::Deserialize;
use tracing::{debug, warn};

/// Shared client for the control API. Timeouts are left at reqwest's defaults.
pub fn default_http_client() -> reqwest::Result<Client> {
    Client::builder()
        .user_agent(concat!("homedeck/", env!("CARGO_PKG_VERSION")))
        .build()
}

/// `{base}/{command}/{app}`.
///
/// A trailing slash on the base is ignored and the app name is pushed as a
/// single, percent-encoded path segment. Names that cannot be a segment of
/// their own (empty, `.` or `..`) are rejected.
pub fn command_url(
    base_url: &str,
    command: ServiceCommand,
    app_name: &str,
) -> Result<Url, ControlError> {
    if matches!(app_name, "" | "." | "..") {
        return Err(ControlError::Endpoint(format!(
            "app name {app_name:?} cannot be used as a path segment"
        )));
    }
    let mut url = Url::parse(base_url.trim())
        .map_err(|e| ControlError::Endpoint(format!("invalid base url {base_url}: {e}")))?;
    {
        let mut segs = url
            .path_segments_mut()
            .map_err(|_| ControlError::Endpoint(format!("base url {base_url} cannot be a base")))?;
        segs.pop_if_empty();
        segs.push(command.path());
        segs.push(app_name);
    }
    Ok(url)
}

#[derive(Debug, Deserialize)]
struct StatusBody {
    status: String,
}

/// Sends lifecycle commands to the control API over HTTP.
#[derive(Debug, Clone)]
pub struct HttpLifecycleClient {
    client: Client,
    credentials: ControlCredentials,
}

impl HttpLifecycleClient {
    pub fn new(client: Client, credentials: ControlCredentials) -> Self {
        Self {
            client,
            credentials,
        }
    }

    pub fn credentials(&self) -> &ControlCredentials {
        &self.credentials
    }

    /// POSTs the command and returns the server's `status` text.
    pub async fn send(&self, command: ServiceCommand, app_name: &str) -> Result<String, ControlError> {
        let url = command_url(&self.credentials.base_url, command, app_name)?;
        debug!("POST {url}");

        let mut req = self.client.post(url);
        if let Some(auth) = self.credentials.authorization() {
            req = req.header(AUTHORIZATION, auth);
        }

        let resp = req
            .send()
            .await
            .map_err(|e| ControlError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ControlError::Server {
                status: status.as_u16(),
            });
        }

        let bytes = resp
            .bytes()
            .await
            .map_err(|e| ControlError::Network(e.to_string()))?;

        serde_json::from_slice::<StatusBody>(&bytes)
            .map(|b| b.status)
            .map_err(|e| ControlError::Decode(e.to_string()))
    }

    /// Like [`send`](Self::send), but folds every error into a failure outcome.
    pub async fn issue(&self, command: ServiceCommand, app_name: &str) -> LifecycleOutcome {
        match self.send(command, app_name).await {
            Ok(status) => LifecycleOutcome::Success { command, status },
            Err(reason) => {
                warn!(
                    kind = ?reason.kind(),
                    "Error sending {command} for service {app_name}: {reason}"
                );
                LifecycleOutcome::Failure { command, reason }
            }
        }
    }
}
