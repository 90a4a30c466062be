//! Configuration types deserialized from `spvbake.toml`.

use serde::Deserialize;
use std::path::PathBuf;

/// Default compile timeout in seconds. `timeout_secs = 0` disables it.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Default cache file path, relative to the invocation working directory.
pub const DEFAULT_CACHE_PATH: &str = ".spvbake-cache.json";

/// The top-level build configuration parsed from `spvbake.toml`.
///
/// Every section is optional; an absent file is equivalent to
/// `BakeConfig::default()`.
#[derive(Debug, Default, Deserialize)]
pub struct BakeConfig {
    /// Shader source tree settings.
    #[serde(default)]
    pub shaders: ShaderConfig,
    /// External toolchain settings.
    #[serde(default)]
    pub toolchain: ToolchainConfig,
    /// Cache persistence settings.
    #[serde(default)]
    pub cache: CacheConfig,
}

/// Shader source tree settings.
#[derive(Debug, Deserialize)]
pub struct ShaderConfig {
    /// Root directory searched for shader sources, relative to the build
    /// root. Defaults to the build root itself.
    #[serde(default = "default_shader_root")]
    pub root: PathBuf,
}

impl Default for ShaderConfig {
    fn default() -> Self {
        Self {
            root: default_shader_root(),
        }
    }
}

fn default_shader_root() -> PathBuf {
    PathBuf::from(".")
}

/// External toolchain settings.
#[derive(Debug, Deserialize)]
pub struct ToolchainConfig {
    /// Vulkan SDK directory to probe for `glslangValidator`. Overrides the
    /// `VULKAN_SDK` environment variable.
    #[serde(default)]
    pub vulkan_sdk: Option<PathBuf>,

    /// Explicit path to the validator binary. Skips SDK probing entirely.
    #[serde(default)]
    pub validator: Option<PathBuf>,

    /// Wall-clock limit for a single compile, in seconds. `0` disables the
    /// limit; expiry counts as a compile failure for that source.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ToolchainConfig {
    fn default() -> Self {
        Self {
            vulkan_sdk: None,
            validator: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// Cache persistence settings.
#[derive(Debug, Deserialize)]
pub struct CacheConfig {
    /// Path of the stamp manifest file, relative to the invocation working
    /// directory unless absolute.
    #[serde(default = "default_cache_path")]
    pub path: PathBuf,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            path: default_cache_path(),
        }
    }
}

fn default_cache_path() -> PathBuf {
    PathBuf::from(DEFAULT_CACHE_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let config = BakeConfig::default();
        assert_eq!(config.shaders.root, PathBuf::from("."));
        assert!(config.toolchain.vulkan_sdk.is_none());
        assert!(config.toolchain.validator.is_none());
        assert_eq!(config.toolchain.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.cache.path, PathBuf::from(DEFAULT_CACHE_PATH));
    }
}
