pub mod net;

// Re-exports for convenience
pub use net::{command_url, default_http_client, HttpLifecycleClient};
