//! Error types for the catalog store.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while reading or persisting a catalog artifact.
///
/// Every variant carries the path of the artifact involved so a log line is enough to
/// find the offending file.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The artifact could not be read from disk.
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The artifact was read but does not hold valid JSON of the expected shape.
    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The in-memory value could not be encoded.
    #[error("Failed to serialize {}: {source}", .path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The artifact could not be written to disk.
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The counter has no ids left to hand out.
    #[error("Id space exhausted for {}", .path.display())]
    IdSpaceExhausted { path: PathBuf },
}

impl StoreError {
    /// The artifact this error refers to.
    pub fn path(&self) -> &Path {
        match self {
            StoreError::Read { path, .. }
            | StoreError::Parse { path, .. }
            | StoreError::Serialize { path, .. }
            | StoreError::Write { path, .. }
            | StoreError::IdSpaceExhausted { path } => path,
        }
    }

    /// True when the failure happened while loading data rather than persisting it.
    pub fn is_read_failure(&self) -> bool {
        matches!(self, StoreError::Read { .. } | StoreError::Parse { .. })
    }
}
