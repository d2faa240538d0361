use async_trait::async_trait;
use homedeck_core::{ControlCredentials, LifecycleOutcome, ServiceCommand};
use homedeck_infra::HttpLifecycleClient;

use crate::ports::ServiceLifecycleClient;

#[async_trait]
impl ServiceLifecycleClient for HttpLifecycleClient {
    async fn issue(&self, command: ServiceCommand, app_name: &str) -> LifecycleOutcome {
        HttpLifecycleClient::issue(self, command, app_name).await
    }
}

/// HTTP client for `credentials` on the default reqwest stack.
pub fn http_lifecycle_client(
    credentials: ControlCredentials,
) -> Result<HttpLifecycleClient, reqwest::Error> {
    let client = homedeck_infra::default_http_client()?;
    Ok(HttpLifecycleClient::new(client, credentials))
}
