//! Library error types.
//!
//! The terminal itself never fails. Errors only arise at the edges: reading
//! and writing persisted event streams, and validating configuration.

/// Errors from encoding, decoding or persisting an event stream.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("I/O error on event stream: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed event on line {line}: {source}")]
    Malformed {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode event: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Configuration validation failures.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Terminal size must be at least 1x1 (got {cols}x{rows})")]
    InvalidSize { cols: usize, rows: usize },

    #[error("Hook name must not be empty")]
    EmptyHookName,

    #[error("Hook name {0:?} must start with a letter and contain only printable ASCII")]
    InvalidHookName(String),
}
