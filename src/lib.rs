//! Terminal descriptor construction for Kubernetes pod exec sessions.
//!
//! Given pod records fetched from the Kubernetes API, this crate filters
//! them by label, expands each eligible pod into one terminal descriptor
//! per running container, and attaches per-session auth material to a
//! chosen descriptor. The descriptor carries everything a WebSocket
//! client needs to open the exec stream: URL, subprotocol, and headers.
//!
//! The crate performs no network I/O. Listing pods and opening the actual
//! exec connection belong to the caller.

pub mod exec_url;
pub mod headers;
pub mod pod;
pub mod selector;
pub mod terminal;

pub use exec_url::{container_exec_url, ExecUrlError, EXEC_COMMAND};
pub use headers::Headers;
pub use pod::{ContainerSpec, Pod, PodMetadata, PodSpec, PodStatus};
pub use selector::filter_pods;
pub use terminal::{terminals_for_pod, TerminalDescriptor, TerminalSelectors, EXEC_SUBPROTOCOLS};
