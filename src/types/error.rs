//! Error types for kua

use std::path::PathBuf;
use thiserror::Error;

/// Broad classification of a [`KuaError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing path, unreadable file, or a read failure mid-stream
    Io,
    /// Invalid options, raised before any comparison begins
    Configuration,
}

/// Error types for kua operations
#[derive(Debug, Error)]
pub enum KuaError {
    /// Standard IO error (automatically converted via #[from])
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A candidate file could not be opened, inspected, or read
    #[error("Cannot read {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The reference file could not be opened or hashed
    #[error("Could not read reference file {}: {source}", path.display())]
    Reference {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Algorithm name outside md5, sha1, sha256, b3, xxh64
    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),
}

impl KuaError {
    /// Attach a path to an IO error coming from a candidate file
    pub fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        KuaError::FileAccess {
            path: path.into(),
            source,
        }
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            KuaError::Io(_) | KuaError::FileAccess { .. } | KuaError::Reference { .. } => {
                ErrorKind::Io
            }
            KuaError::Config(_) | KuaError::UnknownAlgorithm(_) => ErrorKind::Configuration,
        }
    }

    /// Check if the search can carry on with the next candidate
    pub fn is_recoverable(&self) -> bool {
        matches!(self, KuaError::Io(_) | KuaError::FileAccess { .. })
    }

    /// Check if this error ends the whole run
    pub fn is_fatal(&self) -> bool {
        !self.is_recoverable()
    }

    /// Check if this error is a configuration error
    pub fn is_config_error(&self) -> bool {
        self.kind() == ErrorKind::Configuration
    }

    /// Re-tag a candidate-side failure as a failure of the reference file
    pub(crate) fn into_reference(self, reference: &std::path::Path) -> Self {
        match self {
            KuaError::FileAccess { source, .. } | KuaError::Io(source) => KuaError::Reference {
                path: reference.to_path_buf(),
                source,
            },
            other => other,
        }
    }
}
