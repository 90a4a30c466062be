//! Configuration file loading.

use crate::error::ConfigError;
use crate::types::BakeConfig;
use std::path::Path;

/// Name of the configuration file within the build root.
pub const CONFIG_FILE: &str = "spvbake.toml";

/// Loads the `spvbake.toml` configuration from a build root directory.
///
/// An absent file yields `BakeConfig::default()` — the tool is fully usable
/// without configuration. A file that exists but cannot be read or parsed is
/// a hard error, not a silent fallback.
pub fn load_config(root: &Path) -> Result<BakeConfig, ConfigError> {
    let config_path = root.join(CONFIG_FILE);
    let content = match std::fs::read_to_string(&config_path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Ok(BakeConfig::default());
        }
        Err(e) => return Err(ConfigError::IoError(e)),
    };
    load_config_from_str(&content)
}

/// Parses a configuration from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_config_from_str(content: &str) -> Result<BakeConfig, ConfigError> {
    toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
}
