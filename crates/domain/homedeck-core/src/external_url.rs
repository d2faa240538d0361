//! Resolves the URL a browser should open for an app.
//!
//! `behaviour.externalUrl` overrides `url` when set. It may start with
//! [`DASHBOARD_BASE_PLACEHOLDER`], which stands for the scheme and host the
//! dashboard itself is reached on.

use homedeck_config::DASHBOARD_BASE_PLACEHOLDER;

use crate::app::App;

/// URL to navigate to for `app`, or `None` when it has nowhere to go.
///
/// The placeholder expands to `scheme://host` without a port, so the external
/// URL can append its own port and path. The host comes from
/// `dashboard_origin`, or from `app.url` when no origin is configured.
pub fn resolve_external_url(app: &App, dashboard_origin: Option<&str>) -> Option<String> {
    let external = app.behaviour.external_url.trim();
    if external.is_empty() {
        return app.link().map(str::to_string);
    }

    match external.strip_prefix(DASHBOARD_BASE_PLACEHOLDER) {
        Some(rest) => {
            let base = match dashboard_origin {
                Some(origin) => host_base(origin),
                None => app.link().and_then(host_base),
            }?;
            Some(format!("{base}{rest}"))
        }
        None => Some(external.to_string()),
    }
}

/// `scheme://host` of an absolute URL, dropping credentials, port and path.
pub fn host_base(url: &str) -> Option<String> {
    let (scheme, rest) = url.trim().split_once("://")?;
    if scheme.is_empty() {
        return None;
    }
    let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
    let host_port = authority.rsplit_once('@').map_or(authority, |(_, h)| h);
    let host = if host_port.starts_with('[') {
        // IPv6 literal; the port follows the closing bracket.
        host_port.split_inclusive(']').next().unwrap_or_default()
    } else {
        host_port.split(':').next().unwrap_or_default()
    };
    if host.is_empty() {
        return None;
    }
    Some(format!("{scheme}://{host}"))
}
