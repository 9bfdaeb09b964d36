use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort a generation run.
///
/// Malformed entry lines and unrecognized filenames are not errors and never
/// produce one of these.
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to read handbooks directory {path}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read handbook {path}")]
    ReadDocument {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}")]
    WriteArtifact {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize translation dictionary")]
    Serialize(#[source] serde_json::Error),

    #[error("failed to load translation dictionary from {path}")]
    Load {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

pub type Result<T> = std::result::Result<T, DictionaryError>;
