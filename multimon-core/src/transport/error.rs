use std::path::PathBuf;
use thiserror::Error;

/// Listing the transport directory failed. Fatal for the whole process.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("failed to list transport directory {dir}: {source}")]
    ReadDir {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid transport pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex_lite::Error,
    },
}

/// A single transport could not be used. Only that device is affected.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("failed to open {path} at {baud_rate} baud: {source}")]
    Open {
        path: PathBuf,
        baud_rate: u32,
        #[source]
        source: tokio_serial::Error,
    },

    #[error("read from {path} failed: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
