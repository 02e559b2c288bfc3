//! Error types for the replay crate.

use std::path::PathBuf;

use fuzzbridge_core::{ShimError, Status};

/// Errors that can occur while replaying inputs.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ReplayError {
    /// Reading an input file or directory failed.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An environment override could not be parsed.
    #[error("invalid value for {var}: {reason}")]
    InvalidConfig { var: String, reason: String },

    /// The input exceeds the configured maximum length.
    #[error("input {input} is {len} bytes, limit is {max}")]
    InputTooLarge { input: String, len: usize, max: usize },

    /// The native target returned a non-zero status and the run is
    /// configured to treat that as a failure.
    #[error("input {input} returned non-zero status {status}")]
    NonZeroStatus { input: String, status: Status },

    /// An error propagated from the shim.
    #[error("shim error: {0}")]
    Shim(#[from] ShimError),
}
