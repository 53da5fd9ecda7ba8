//! Terminal descriptors
//!
//! Converts an eligible pod into one terminal descriptor per container
//! and attaches per-session auth material to a descriptor before it is
//! handed to the network layer.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::exec_url::{container_exec_url, ExecUrlError};
use crate::headers::Headers;
use crate::pod::Pod;

/// The WebSocket subprotocol negotiated with the exec endpoint.
pub const EXEC_SUBPROTOCOLS: [&str; 1] = ["channel.k8s.io"];

/// Identifies which pod and container a descriptor targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TerminalSelectors {
    pub pod: String,
    pub container: String,
}

/// Everything a WebSocket client needs to open one exec session.
///
/// Built without auth material; [`TerminalDescriptor::authorize`]
/// attaches it once the caller's permission has been checked.
#[derive(Debug, Clone, Serialize)]
pub struct TerminalDescriptor {
    pub selectors: TerminalSelectors,
    pub url: String,
    pub subprotocols: Vec<String>,
    pub headers: Headers,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_session_time: Option<Duration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ca_cert: Option<String>,
}

impl TerminalDescriptor {
    /// Attach session credentials to this descriptor.
    ///
    /// Appends `Bearer <token>` to the `Authorization` header entry,
    /// stamps the session timeout, and stores the CA certificate when a
    /// non-empty one is supplied. Appending means a second call adds a
    /// second bearer value; authorize each descriptor exactly once.
    pub fn authorize(&mut self, token: &str, max_session_time: Duration, ca_cert: Option<&str>) {
        self.headers
            .append("Authorization", format!("Bearer {}", token));
        self.max_session_time = Some(max_session_time);
        if let Some(cert) = ca_cert {
            if !cert.is_empty() {
                self.ca_cert = Some(cert.to_string());
            }
        }
    }
}

/// Convert a pod into terminal descriptors, one per container.
///
/// Returns `Ok(None)` when the pod cannot host a terminal session: no
/// containers, no usable name, or a phase other than `Running`. Container
/// order is preserved; containers without a name are skipped. The only
/// error is an unusable `api_url`.
pub fn terminals_for_pod(
    api_url: &str,
    namespace: &str,
    pod: &Pod,
) -> Result<Option<Vec<TerminalDescriptor>>, ExecUrlError> {
    let containers = pod.spec.containers.as_deref().unwrap_or(&[]);
    let pod_name = pod.metadata.name.as_deref().unwrap_or("");

    if containers.is_empty() || pod_name.trim().is_empty() || !pod.is_running() {
        tracing::debug!("Pod {:?} not eligible for a terminal session", pod_name);
        return Ok(None);
    }

    let created_at = parse_creation_timestamp(pod);

    let mut terminals = Vec::with_capacity(containers.len());
    for container in containers {
        let container_name = match container.name.as_deref() {
            Some(name) => name,
            None => continue,
        };
        terminals.push(TerminalDescriptor {
            selectors: TerminalSelectors {
                pod: pod_name.to_string(),
                container: container_name.to_string(),
            },
            url: container_exec_url(api_url, namespace, pod_name, container_name)?,
            subprotocols: EXEC_SUBPROTOCOLS.iter().map(|s| s.to_string()).collect(),
            headers: Headers::new(),
            created_at,
            max_session_time: None,
            ca_cert: None,
        });
    }

    Ok(Some(terminals))
}

/// Parse the pod's creation timestamp; an unparseable value degrades to
/// `None` without affecting descriptor construction.
fn parse_creation_timestamp(pod: &Pod) -> Option<DateTime<Utc>> {
    let raw = pod.metadata.creation_timestamp.as_deref()?;
    match DateTime::parse_from_rfc3339(raw) {
        Ok(ts) => Some(ts.with_timezone(&Utc)),
        Err(e) => {
            tracing::debug!("Unparseable pod creationTimestamp {:?}: {}", raw, e);
            None
        }
    }
}
