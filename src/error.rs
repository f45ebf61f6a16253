//! Error types for figstyle library.

use std::io;
use thiserror::Error;

/// Result type alias for figstyle operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while resolving, extracting or exporting nodes.
#[derive(Error, Debug)]
pub enum Error {
    /// No target node id was supplied.
    #[error("No target node id given")]
    NoTarget,

    /// The identifier does not resolve to any node in the document.
    #[error("Node not found: {0}")]
    NodeNotFound(String),

    /// The host failed to render a node as SVG.
    #[error("SVG export failed: {message}")]
    ExportFailed {
        /// Identifier of the node that was being exported
        node_id: String,
        /// Message reported by the host renderer
        message: String,
    },

    /// A host query failed.
    #[error("Host error: {0}")]
    Host(String),

    /// I/O error when reading snapshot files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Malformed JSON input.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The snapshot parsed but is not a usable document.
    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),

    /// Error during output serialization.
    #[error("Rendering error: {0}")]
    Render(String),
}

impl Error {
    /// Identifier of the node this error concerns, when it is tied to one.
    pub fn node_id(&self) -> Option<&str> {
        match self {
            Error::ExportFailed { node_id, .. } => Some(node_id),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::NodeNotFound("1:234".to_string());
        assert_eq!(err.to_string(), "Node not found: 1:234");

        let err = Error::ExportFailed {
            node_id: "1:2".to_string(),
            message: "renderer crashed".to_string(),
        };
        assert_eq!(err.to_string(), "SVG export failed: renderer crashed");
        assert_eq!(err.node_id(), Some("1:2"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert_eq!(err.node_id(), None);
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
    }
}
