//! Typed pod records
//!
//! Models the slice of the Kubernetes pod schema this crate reads. Every
//! field is optional; the API may omit any of them and a missing field
//! means "not eligible", never an error.

use std::collections::HashMap;

use serde::Deserialize;

/// A pod as returned by the Kubernetes pod-listing endpoint.
///
/// Unknown fields are ignored; the sections below carry only the paths
/// terminal construction needs.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Pod {
    #[serde(default)]
    pub metadata: PodMetadata,
    #[serde(default)]
    pub status: PodStatus,
    #[serde(default)]
    pub spec: PodSpec,
}

/// Pod metadata: name, labels, and creation timestamp.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PodMetadata {
    pub name: Option<String>,
    pub labels: Option<HashMap<String, String>>,
    #[serde(rename = "creationTimestamp")]
    pub creation_timestamp: Option<String>,
}

/// Pod status; only the phase matters here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PodStatus {
    pub phase: Option<String>,
}

/// Pod spec; only the container list matters here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PodSpec {
    pub containers: Option<Vec<ContainerSpec>>,
}

/// A container entry from a pod spec.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContainerSpec {
    pub name: Option<String>,
}

impl Pod {
    /// Whether the pod's phase is `Running`. Only running pods can host
    /// an exec session.
    pub fn is_running(&self) -> bool {
        self.status.phase.as_deref() == Some("Running")
    }
}
