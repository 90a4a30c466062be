//! High-level cache orchestrator.
//!
//! Ties the stamp manifest and its storage port together behind the policy
//! the pipeline relies on: load is fail-soft, staleness combines the stamp
//! comparison with an artifact-presence check, and every record is expected
//! to be followed by an immediate save.

use std::path::Path;

use spvbake_common::{artifact_path, SourceStamp};

use crate::error::CacheError;
use crate::manifest::StampManifest;
use crate::store::ManifestStore;

/// Stamp cache for the build pipeline.
///
/// Owns the in-memory manifest and the store it persists to. Mutated only
/// through [`record`](ShaderCache::record); the pipeline saves after each
/// successful compile so a crash loses at most one entry.
pub struct ShaderCache {
    manifest: StampManifest,
    store: Box<dyn ManifestStore>,
}

impl ShaderCache {
    /// Loads the cache from `store`.
    ///
    /// Policy: the cache is an optimization, never a correctness
    /// requirement. A missing manifest starts empty silently; an unreadable
    /// or corrupt one is logged at warn level and also starts empty,
    /// degrading to a full rebuild.
    pub fn load(store: Box<dyn ManifestStore>) -> Self {
        let manifest = match store.load() {
            Ok(manifest) => manifest,
            Err(e) if e.is_missing() => {
                log::debug!("no shader cache found, starting fresh");
                StampManifest::new()
            }
            Err(e) => {
                log::warn!("ignoring unreadable shader cache: {e}");
                StampManifest::new()
            }
        };
        Self { manifest, store }
    }

    /// Returns `true` if `source` must be recompiled.
    ///
    /// A source is stale when it has no recorded stamp, its recorded stamp
    /// differs from `current`, or its `.spv` artifact is missing on disk.
    /// The artifact check guards against the cache claiming freshness for
    /// an output a user deleted manually.
    pub fn is_stale(&self, source: &Path, current: &SourceStamp) -> bool {
        match self.manifest.get(source) {
            Some(recorded) if recorded == current => !artifact_path(source).exists(),
            _ => true,
        }
    }

    /// Records `stamp` as the compiled state of `source`.
    pub fn record(&mut self, source: &Path, stamp: SourceStamp) {
        self.manifest.insert(source, stamp);
    }

    /// Persists the current manifest through the store.
    pub fn save(&self) -> Result<(), CacheError> {
        self.store.save(&self.manifest)
    }

    /// Returns a reference to the in-memory manifest.
    pub fn manifest(&self) -> &StampManifest {
        &self.manifest
    }
}
