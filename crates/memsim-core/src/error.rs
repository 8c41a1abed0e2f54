//! Error types shared by the allocator, the HTTP layer, and the CLI.

use thiserror::Error;

/// Core contract violations.
///
/// An unplaceable process is not an error; it lands in the unallocated
/// group of the report.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AllocError {
    #[error("unknown allocation algorithm: {0:?} (expected First-Fit, Best-Fit or Worst-Fit)")]
    UnknownAlgorithm(String),
}

pub type AllocResult<T> = Result<T, AllocError>;

/// Request shape errors detected before the allocator is invoked.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid or missing JSON payload.")]
    MissingPayload,

    #[error("Processes must be a list of non-negative integers.")]
    InvalidProcesses,

    #[error("Partitions must be a list of non-negative integers.")]
    InvalidPartitions,

    #[error("Invalid algorithm.")]
    InvalidAlgorithm,
}

/// Failures loading `memsim.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to render config: {0}")]
    Render(#[from] toml::ser::Error),
}
