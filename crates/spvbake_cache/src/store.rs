//! Storage ports for manifest persistence.
//!
//! Persistence is isolated behind the [`ManifestStore`] trait so the build
//! pipeline can be exercised against an in-memory store in tests. The
//! production implementation is [`JsonFileStore`], which writes through a
//! sibling temp file and renames so a concurrent reader never observes a
//! partially written manifest.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::CacheError;
use crate::manifest::StampManifest;

/// Abstract manifest persistence.
pub trait ManifestStore {
    /// Reads the persisted manifest.
    fn load(&self) -> Result<StampManifest, CacheError>;

    /// Overwrites the persisted manifest. Atomic from a reader's
    /// perspective: a load concurrent with a save yields either the old or
    /// the new manifest, never a torn one.
    fn save(&self, manifest: &StampManifest) -> Result<(), CacheError>;
}

/// Manifest persistence in a single JSON file on disk.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The manifest file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_err(&self, source: std::io::Error) -> CacheError {
        CacheError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl ManifestStore for JsonFileStore {
    fn load(&self) -> Result<StampManifest, CacheError> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| self.io_err(e))?;
        serde_json::from_str(&content).map_err(|e| CacheError::Parse {
            path: self.path.clone(),
            reason: e.to_string(),
        })
    }

    fn save(&self, manifest: &StampManifest) -> Result<(), CacheError> {
        let json = serde_json::to_string_pretty(manifest).map_err(|e| CacheError::Serialize {
            reason: e.to_string(),
        })?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| self.io_err(e))?;
            }
        }

        // Write to a sibling temp file, then rename over the destination.
        let mut tmp_path = self.path.as_os_str().to_owned();
        tmp_path.push(".tmp");
        let tmp_path = PathBuf::from(tmp_path);

        if let Err(e) = std::fs::write(&tmp_path, json) {
            let _ = std::fs::remove_file(&tmp_path);
            return Err(self.io_err(e));
        }

        match std::fs::rename(&tmp_path, &self.path) {
            Ok(()) => Ok(()),
            Err(e) if cfg!(windows) && self.path.exists() => {
                // Windows rename does not overwrite; clear the destination
                // and retry once.
                std::fs::remove_file(&self.path).map_err(|e| self.io_err(e))?;
                std::fs::rename(&tmp_path, &self.path).map_err(|_| self.io_err(e))
            }
            Err(e) => {
                let _ = std::fs::remove_file(&tmp_path);
                Err(self.io_err(e))
            }
        }
    }
}

/// Manifest persistence in memory, for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryStore {
    manifest: Mutex<Option<StampManifest>>,
}

impl MemoryStore {
    /// Creates an empty store with no saved manifest.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ManifestStore for MemoryStore {
    fn load(&self) -> Result<StampManifest, CacheError> {
        match self.manifest.lock() {
            Ok(guard) => guard.clone().ok_or(CacheError::Io {
                path: PathBuf::from("<memory>"),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "nothing saved"),
            }),
            Err(_) => Err(CacheError::Serialize {
                reason: "memory store poisoned".to_string(),
            }),
        }
    }

    fn save(&self, manifest: &StampManifest) -> Result<(), CacheError> {
        match self.manifest.lock() {
            Ok(mut guard) => {
                *guard = Some(manifest.clone());
                Ok(())
            }
            Err(_) => Err(CacheError::Serialize {
                reason: "memory store poisoned".to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spvbake_common::SourceStamp;

    fn sample_manifest() -> StampManifest {
        let mut m = StampManifest::new();
        m.insert(
            Path::new("shaders/sky.frag.glsl"),
            SourceStamp::from_raw("1700000000.000000001"),
        );
        m
    }

    #[test]
    fn json_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("cache.json"));

        store.save(&sample_manifest()).unwrap();
        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(
            loaded.get(Path::new("shaders/sky.frag.glsl")),
            Some(&SourceStamp::from_raw("1700000000.000000001"))
        );
    }

    #[test]
    fn json_store_load_missing_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("cache.json"));
        let err = store.load().unwrap_err();
        assert!(err.is_missing());
    }

    #[test]
    fn json_store_load_corrupt_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cache.json");
        std::fs::write(&path, "not valid json {{{").unwrap();
        let err = JsonFileStore::new(&path).load().unwrap_err();
        assert!(matches!(err, CacheError::Parse { .. }));
        assert!(!err.is_missing());
    }

    #[test]
    fn json_store_save_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("cache.json"));
        store.save(&sample_manifest()).unwrap();

        let leftovers: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .filter(|n| n.to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn json_store_save_overwrites_previous() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("cache.json"));
        store.save(&sample_manifest()).unwrap();

        let mut second = StampManifest::new();
        second.insert(Path::new("a.vert.glsl"), SourceStamp::from_raw("2.0"));
        store.save(&second).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert!(loaded.get(Path::new("shaders/sky.frag.glsl")).is_none());
    }

    #[test]
    fn json_store_save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("build").join("cache").join("stamps.json");
        let store = JsonFileStore::new(&nested);
        store.save(&sample_manifest()).unwrap();
        assert!(nested.exists());
    }

    #[test]
    fn memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert!(store.load().unwrap_err().is_missing());

        store.save(&sample_manifest()).unwrap();
        assert_eq!(store.load().unwrap().len(), 1);
    }
}
