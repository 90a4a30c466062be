//! Error types for toolchain discovery and compiler invocation.

use std::path::PathBuf;
use std::time::Duration;

/// Errors locating the `glslangValidator` executable.
///
/// These are process-fatal: with no compiler there is nothing to fall back
/// to, so the pipeline aborts before touching any source.
#[derive(Debug, thiserror::Error)]
pub enum ToolchainError {
    /// The configured SDK directory does not exist.
    #[error("Vulkan SDK directory not found: {sdk}")]
    SdkMissing {
        /// The SDK path that was probed.
        sdk: PathBuf,
    },

    /// No validator binary was found under the SDK.
    #[error("glslangValidator not found under {sdk} (looked in Bin/ and bin/)")]
    ValidatorNotFound {
        /// The SDK path that was probed.
        sdk: PathBuf,
    },

    /// Neither an explicit validator path nor an SDK location was available.
    #[error("no Vulkan SDK configured; set VULKAN_SDK, pass --sdk, or set [toolchain] in spvbake.toml")]
    NoSdkConfigured,
}

/// Errors from compiling a single shader source.
///
/// All variants are per-source failures: the batch continues with the next
/// source and the aggregate status reflects the count.
#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    /// The validator ran and rejected the source.
    #[error("glslangValidator exited with status {code}")]
    Rejected {
        /// The validator's exit code.
        code: i32,
        /// Captured standard output (diagnostic text).
        stdout: String,
        /// Captured standard error (diagnostic text).
        stderr: String,
    },

    /// The validator process could not be launched at all.
    #[error("failed to launch glslangValidator: {source}")]
    Spawn {
        /// The underlying spawn error.
        source: std::io::Error,
    },

    /// The compile exceeded the configured wall-clock limit.
    #[error("compile timed out after {limit:?}")]
    TimedOut {
        /// The limit that expired.
        limit: Duration,
    },

    /// An I/O fault occurred around the compiler's temporary output.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// The path involved.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

impl CompileError {
    /// The validator's captured diagnostic text, if this error carries any.
    pub fn diagnostics(&self) -> Option<(&str, &str)> {
        match self {
            CompileError::Rejected { stdout, stderr, .. } => Some((stdout, stderr)),
            _ => None,
        }
    }
}
