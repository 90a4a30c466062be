//! Incremental-build cache for compiled shader stamps.
//!
//! Persists a mapping from source path to modification stamp so that
//! unchanged shaders are skipped on subsequent runs. All reads are
//! fail-soft: a missing or corrupt cache degrades to a full rebuild,
//! never to an error.

#![warn(missing_docs)]

pub mod cache;
pub mod error;
pub mod manifest;
pub mod store;

pub use cache::ShaderCache;
pub use error::CacheError;
pub use manifest::StampManifest;
pub use store::{JsonFileStore, ManifestStore, MemoryStore};
