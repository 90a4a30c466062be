//! The persisted stamp manifest.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use spvbake_common::SourceStamp;

/// Mapping from shader source path to the modification stamp it carried the
/// last time it was successfully compiled.
///
/// At most one stamp per path; a path with no entry has never been compiled
/// (or the cache was lost) and must be treated as stale. Persisted as a
/// single JSON object, fully rewritten after every successful compile so a
/// crash mid-run loses at most the in-flight entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StampManifest {
    /// Per-source stamps, keyed by the path as discovered.
    pub entries: BTreeMap<PathBuf, SourceStamp>,
}

impl StampManifest {
    /// Creates an empty manifest.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded stamp for a source, if any.
    pub fn get(&self, source: &Path) -> Option<&SourceStamp> {
        self.entries.get(source)
    }

    /// Records `stamp` for `source`, replacing any previous entry.
    pub fn insert(&mut self, source: &Path, stamp: SourceStamp) {
        self.entries.insert(source.to_path_buf(), stamp);
    }

    /// Returns the number of recorded sources.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no sources are recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
