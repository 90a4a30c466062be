//! Parsing of optional `spvbake.toml` build configuration files.
//!
//! The tool runs with sensible defaults when no configuration exists; a
//! `spvbake.toml` in the build root overrides the shader root, toolchain
//! discovery, compile timeout, and cache location.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_from_str};
pub use types::{BakeConfig, CacheConfig, ShaderConfig, ToolchainConfig};
