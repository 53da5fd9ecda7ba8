//! Exec endpoint URL construction
//!
//! Builds the WebSocket URL for the Kubernetes pod exec endpoint. The
//! endpoint is picky: path segments must be percent-encoded one by one,
//! the shell command must arrive as repeated `command=` parameters, and
//! the connection is only accepted over `ws`/`wss`.

use thiserror::Error;
use url::Url;

/// The command that starts a terminal session. Kubernetes expects
/// `command=foo&command=bar`, not `command[]=foo&command[]=bar`.
pub const EXEC_COMMAND: [(&str, &str); 3] = [
    ("command", "sh"),
    ("command", "-c"),
    ("command", "bash || sh"),
];

#[derive(Debug, Error)]
pub enum ExecUrlError {
    #[error("Invalid API endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
    #[error("API endpoint does not accept a path")]
    OpaqueEndpoint,
}

/// Build the exec URL for a container.
///
/// Takes the cluster API base URL (any path prefix is kept, trailing
/// slashes are stripped), appends
/// `/api/v1/namespaces/<ns>/pods/<pod>/exec` with each segment
/// percent-encoded, attaches the tty/stdio flags and the shell command
/// as query parameters, and rewrites `http`/`https` to `ws`/`wss`.
pub fn container_exec_url(
    api_url: &str,
    namespace: &str,
    pod_name: &str,
    container_name: &str,
) -> Result<String, ExecUrlError> {
    let mut url = Url::parse(api_url)?;

    let base_path = url.path().trim_end_matches('/').to_string();
    url.set_path(&base_path);
    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|_| ExecUrlError::OpaqueEndpoint)?;
        segments.pop_if_empty();
        segments.extend(["api", "v1", "namespaces", namespace, "pods", pod_name, "exec"]);
    }

    url.set_query(None);
    {
        // Flag block sorted by key, then the command pairs.
        let mut query = url.query_pairs_mut();
        query.append_pair("container", container_name);
        query.append_pair("stderr", "true");
        query.append_pair("stdin", "true");
        query.append_pair("stdout", "true");
        query.append_pair("tty", "true");
        for (key, value) in EXEC_COMMAND {
            query.append_pair(key, value);
        }
    }

    let ws_scheme = match url.scheme() {
        "http" => Some("ws"),
        "https" => Some("wss"),
        _ => None,
    };
    if let Some(scheme) = ws_scheme {
        let _ = url.set_scheme(scheme);
    }

    Ok(url.to_string())
}
