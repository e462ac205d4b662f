// Error types for rudolf.
// Covers the puzzle store, the remote endpoint, and invalid arguments.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RudolfError {
    #[error("Cannot open puzzle store at {}: {source}", .path.display())]
    StoreUnavailable {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Failed to read from puzzle store: {0}")]
    StoreReadFailed(#[source] rusqlite::Error),

    #[error("Failed to write to puzzle store: {0}")]
    StoreWriteFailed(#[source] rusqlite::Error),

    #[error("Request failed: {0}")]
    TransportFailed(#[from] reqwest::Error),

    #[error("HTTP {status} received: {body}")]
    RemoteRejected { status: u16, body: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RudolfError {
    /// Short name of the error kind, used in CLI diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            RudolfError::StoreUnavailable { .. } => "StoreUnavailable",
            RudolfError::StoreReadFailed(_) => "StoreReadFailed",
            RudolfError::StoreWriteFailed(_) => "StoreWriteFailed",
            RudolfError::TransportFailed(_) => "TransportFailed",
            RudolfError::RemoteRejected { .. } => "RemoteRejected",
            RudolfError::InvalidInput(_) => "InvalidInput",
            RudolfError::Io(_) => "Io",
        }
    }
}

pub type Result<T> = std::result::Result<T, RudolfError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_rejected_message() {
        let err = RudolfError::RemoteRejected {
            status: 404,
            body: "Not Found".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 404 received: Not Found");
        assert_eq!(err.kind(), "RemoteRejected");
    }

    #[test]
    fn test_store_unavailable_mentions_path() {
        let err = RudolfError::StoreUnavailable {
            path: PathBuf::from("missing/rudolf.db"),
            source: rusqlite::Error::InvalidQuery,
        };
        assert!(err.to_string().contains("missing/rudolf.db"));
    }
}
