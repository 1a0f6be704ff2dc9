//! Error handling for Pathweave
//!
//! Provides error types for every layer of the clustering pipeline:
//! - Path data errors (ingestion and command reversal)
//! - Cluster errors (invalid run parameters)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Path data error type
///
/// Represents problems with a fragment's curve-command text.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathDataError {
    /// The command text produced no drawable point
    #[error("Path data has no endpoints: {data:?}")]
    Empty {
        /// The offending command text.
        data: String,
    },

    /// A command reached the reversal stage without being normalized first
    #[error("Cannot reverse '{command}' command; normalize path data before reversal")]
    UnsupportedReversal {
        /// The command letter that was rejected.
        command: char,
    },
}

/// Cluster error type
///
/// Represents invalid parameters for one clustering run.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClusterError {
    /// Tolerance is zero, negative, or not finite
    #[error("Invalid tolerance {tolerance}: must be finite and greater than zero")]
    InvalidTolerance {
        /// The rejected tolerance.
        tolerance: f64,
    },

    /// Two input segments share an identifier
    #[error("Duplicate segment id {id}")]
    DuplicateSegmentId {
        /// The repeated identifier.
        id: usize,
    },
}

/// Main error type for Pathweave
///
/// A unified error type that can represent any error from the core crates.
#[derive(Error, Debug)]
pub enum Error {
    /// Path data error
    #[error(transparent)]
    PathData(#[from] PathDataError),

    /// Cluster error
    #[error(transparent)]
    Cluster(#[from] ClusterError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a path data error
    pub fn is_path_data_error(&self) -> bool {
        matches!(self, Error::PathData(_))
    }

    /// Check if this is a cluster parameter error
    pub fn is_cluster_error(&self) -> bool {
        matches!(self, Error::Cluster(_))
    }

    /// Check if this signals a broken internal contract rather than bad input
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            Error::PathData(PathDataError::UnsupportedReversal { .. })
        )
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
