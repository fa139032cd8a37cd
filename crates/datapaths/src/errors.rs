//! # Error Types

use std::path::PathBuf;

/// Errors from datapaths operations.
///
/// Resolving the built-in record never fails; these cover the optional
/// surfaces (artifact files, relative artifact dirs, key lookup by name).
#[derive(Debug, thiserror::Error)]
pub enum DataPathsError {
    /// Reading or writing an artifact file failed.
    #[error("i/o error on {}: {source}", .path.display())]
    Io {
        /// The artifact path.
        path: PathBuf,
        /// The underlying error.
        source: std::io::Error,
    },

    /// The artifact file is not a valid artifact.
    #[error("invalid artifact {}: {source}", .path.display())]
    Parse {
        /// The artifact path.
        path: PathBuf,
        /// The underlying error.
        source: serde_json::Error,
    },

    /// The artifact could not be encoded.
    #[error("failed to encode artifact: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Refused to overwrite an existing artifact file.
    #[error("artifact already exists: {}", .path.display())]
    AlreadyExists {
        /// The existing path.
        path: PathBuf,
    },

    /// The artifact path has no containing directory.
    #[error("no parent directory for {}", .path.display())]
    NoParentDir {
        /// The offending path.
        path: PathBuf,
    },

    /// The current directory was needed to absolutize a path, and is unavailable.
    #[error("failed to resolve current directory: {0}")]
    CurrentDir(#[source] std::io::Error),

    /// Not one of the known path keys.
    #[error("unknown path key: {0:?}")]
    UnknownKey(String),
}

/// Result type for datapaths operations.
pub type DPResult<T> = core::result::Result<T, DataPathsError>;
