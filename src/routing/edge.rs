//! Edge redirect resolution

use serde::Serialize;

use crate::compiler::{CompiledDomainMap, EdgeRoute};
use crate::domain::value_objects::canonical_host;
use crate::settings::EdgeConfig;

/// Redirect answer for one request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RedirectDecision {
    pub hostname: String,
    pub location: String,
    pub status: u16,
}

impl RedirectDecision {
    /// Reason phrase sent with the status line
    pub fn status_description(&self) -> &'static str {
        match self.status {
            301 => "Permanently Moved",
            302 => "Found",
            307 => "Temporary Redirect",
            308 => "Permanent Redirect",
            _ => "Redirect",
        }
    }
}

/// Resolves request hosts against the compiled edge routes
#[derive(Debug, Clone)]
pub struct EdgeRouter<'a> {
    routes: &'a [EdgeRoute],
    status: u16,
    preserve_path: bool,
}

impl<'a> EdgeRouter<'a> {
    pub fn new(plan: &'a CompiledDomainMap, edge: &EdgeConfig) -> Self {
        Self {
            routes: &plan.edge_routes,
            status: edge.status,
            preserve_path: edge.preserve_path,
        }
    }

    /// First route for `host` (case-insensitive, port ignored)
    pub fn route_for(&self, host: &str) -> Option<&'a EdgeRoute> {
        let host = canonical_host(strip_port(host.trim()));
        self.routes
            .iter()
            .find(|route| canonical_host(&route.hostname) == host)
    }

    /// Redirect for a request, or `None` when the host is unknown or has
    /// no target
    pub fn resolve(&self, host: &str, path: &str) -> Option<RedirectDecision> {
        let route = self.route_for(host)?;
        let target = route.location.as_deref()?;
        let base = with_scheme(target);

        let location = match route.uri_map.get(path) {
            Some(mapped) if mapped.contains("://") => mapped.clone(),
            Some(mapped) => join(&base, mapped),
            None if self.preserve_path => join(&base, path),
            None => base,
        };

        tracing::debug!(host, path, %location, "edge route resolved");

        Some(RedirectDecision {
            hostname: route.hostname.clone(),
            location,
            status: self.status,
        })
    }
}

fn strip_port(host: &str) -> &str {
    match host.rsplit_once(':') {
        Some((name, port)) if !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()) => name,
        _ => host,
    }
}

fn with_scheme(target: &str) -> String {
    if target.contains("://") {
        target.to_string()
    } else {
        format!("https://{}", target)
    }
}

fn join(base: &str, path: &str) -> String {
    if path.is_empty() || path == "/" && base.ends_with('/') {
        return base.to_string();
    }
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
