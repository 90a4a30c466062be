//! Error types for cache operations.

use std::path::PathBuf;

/// Errors that can occur while loading or persisting the stamp manifest.
///
/// Callers treat these as degraded-mode signals, not failures: a load error
/// becomes an empty cache and a save error skips persistence for that run.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    /// An I/O error occurred while reading or writing the manifest file.
    #[error("cache I/O error at {path}: {source}")]
    Io {
        /// The path that caused the error.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The manifest file exists but could not be parsed.
    #[error("failed to parse cache manifest {path}: {reason}")]
    Parse {
        /// The manifest file path.
        path: PathBuf,
        /// Description of the parse failure.
        reason: String,
    },

    /// The manifest could not be serialized for writing.
    #[error("failed to serialize cache manifest: {reason}")]
    Serialize {
        /// Description of the serialization failure.
        reason: String,
    },
}

impl CacheError {
    /// Returns `true` if the error simply means no manifest exists yet.
    pub fn is_missing(&self) -> bool {
        matches!(
            self,
            CacheError::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_display() {
        let err = CacheError::Io {
            path: PathBuf::from(".spvbake-cache.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        let msg = err.to_string();
        assert!(msg.contains("cache I/O error"));
        assert!(msg.contains(".spvbake-cache.json"));
    }

    #[test]
    fn parse_error_display() {
        let err = CacheError::Parse {
            path: PathBuf::from("cache.json"),
            reason: "unexpected EOF".to_string(),
        };
        assert!(err.to_string().contains("unexpected EOF"));
    }

    #[test]
    fn missing_detection() {
        let missing = CacheError::Io {
            path: PathBuf::from("cache.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(missing.is_missing());

        let denied = CacheError::Io {
            path: PathBuf::from("cache.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(!denied.is_missing());

        let corrupt = CacheError::Parse {
            path: PathBuf::from("cache.json"),
            reason: "bad".to_string(),
        };
        assert!(!corrupt.is_missing());
    }
}
