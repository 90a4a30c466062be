//! Source modification stamps for staleness detection.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::io;
use std::path::Path;
use std::time::UNIX_EPOCH;

/// An opaque signature of a source file's modification time.
///
/// Two stamps compare equal exactly when they were captured from the same
/// modification time. The pipeline treats any inequality as "the file
/// changed"; no ordering is defined or needed. Stored in the cache manifest
/// as a plain string so the representation can evolve without a format bump.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceStamp(String);

impl SourceStamp {
    /// Captures the stamp of the file at `path` from its current metadata.
    pub fn of_file(path: &Path) -> io::Result<Self> {
        let modified = std::fs::metadata(path)?.modified()?;
        let since_epoch = modified
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        Ok(Self(format!(
            "{}.{:09}",
            since_epoch.as_secs(),
            since_epoch.subsec_nanos()
        )))
    }

    /// Wraps a raw stamp string, e.g. one read back from the manifest.
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the stamp's string representation.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SourceStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for SourceStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SourceStamp({})", self.0)
    }
}
