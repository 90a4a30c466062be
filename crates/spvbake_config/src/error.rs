//! Error types for configuration loading.

/// Errors that can occur when loading a `spvbake.toml` configuration.
///
/// A missing configuration file is not an error (defaults apply); these
/// variants cover files that exist but cannot be read or parsed.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An I/O error occurred while reading an existing configuration file.
    #[error("failed to read configuration: {0}")]
    IoError(#[from] std::io::Error),

    /// The TOML content could not be parsed.
    #[error("failed to parse configuration: {0}")]
    ParseError(String),
}
