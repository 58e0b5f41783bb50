use thiserror::Error;

/// Errors surfaced by the sync engine, tagged by where they arose so
/// callers branch on the kind rather than on message contents.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SyncError {
    /// No usable service address. Detected when the service handle is
    /// built; nothing ever reaches the network with this error.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The request never produced an HTTP response (connection refused,
    /// timeout, transport failure). Remediation is connectivity, not the
    /// application, which is why it is distinct from `Service`.
    #[error("network error: {0}")]
    Network(String),

    /// The service answered with a non-success status.
    #[error("service error (status {status}): {}", .message.as_deref().unwrap_or("no detail"))]
    Service {
        status: u16,
        /// Server-supplied reason, from a JSON `message` field when the
        /// error body carried one.
        message: Option<String>,
    },

    /// Local precondition failure (empty title, no-op edit, unknown id).
    /// Never reaches the network and never becomes the held error.
    #[error("{0}")]
    Validation(String),
}

impl SyncError {
    /// Service error from a status code and optional body message.
    pub fn service(status: u16, message: Option<String>) -> Self {
        SyncError::Service { status, message }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, SyncError::Validation(_))
    }

    pub fn is_network(&self) -> bool {
        matches!(self, SyncError::Network(_))
    }

    /// Human-readable reason for display, falling back to the numeric
    /// status when the service sent no message.
    pub fn reason(&self) -> String {
        match self {
            SyncError::Service { status, message } => message
                .clone()
                .unwrap_or_else(|| format!("HTTP error! status: {status}")),
            other => other.to_string(),
        }
    }
}
