//! Shared foundational types for the spvbake shader build driver.
//!
//! This crate provides the source modification stamp used for staleness
//! detection, the shader stage enumeration with its file-suffix conventions,
//! and the artifact path derivation shared by the cache and the pipeline.

#![warn(missing_docs)]

pub mod paths;
pub mod stage;
pub mod stamp;

pub use paths::{artifact_path, temp_output_path, ARTIFACT_SUFFIX};
pub use stage::ShaderStage;
pub use stamp::SourceStamp;
