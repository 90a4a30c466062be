//! Locating `glslangValidator` inside a Vulkan SDK installation.

use std::path::{Path, PathBuf};

use crate::error::ToolchainError;

/// Candidate locations of the validator below an SDK root. SDK layouts vary
/// between platforms and versions in the `Bin`/`bin` casing and the `.exe`
/// suffix, so all four combinations are probed.
const CANDIDATES: [&str; 4] = [
    "Bin/glslangValidator",
    "Bin/glslangValidator.exe",
    "bin/glslangValidator",
    "bin/glslangValidator.exe",
];

/// Probes the candidate paths under `sdk` and returns the first existing
/// validator binary, or `None`.
pub fn locate_validator(sdk: &Path) -> Option<PathBuf> {
    CANDIDATES
        .iter()
        .map(|candidate| sdk.join(candidate))
        .find(|path| path.is_file())
}

/// Resolves the validator binary to invoke.
///
/// An explicit binary path wins outright (it must exist). Otherwise the SDK
/// directory is probed; `sdk` is typically `--sdk`, `[toolchain]
/// vulkan_sdk`, or `$VULKAN_SDK`, in that precedence, decided by the
/// caller. Failure here is fatal to the whole run.
pub fn resolve_validator(
    explicit: Option<&Path>,
    sdk: Option<&Path>,
) -> Result<PathBuf, ToolchainError> {
    if let Some(binary) = explicit {
        if binary.is_file() {
            return Ok(binary.to_path_buf());
        }
        return Err(ToolchainError::ValidatorNotFound {
            sdk: binary.to_path_buf(),
        });
    }

    let sdk = sdk.ok_or(ToolchainError::NoSdkConfigured)?;
    if !sdk.is_dir() {
        return Err(ToolchainError::SdkMissing {
            sdk: sdk.to_path_buf(),
        });
    }
    locate_validator(sdk).ok_or_else(|| ToolchainError::ValidatorNotFound {
        sdk: sdk.to_path_buf(),
    })
}
