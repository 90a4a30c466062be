//! Derivation of artifact and temporary output paths from source paths.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Suffix appended to a source path to form its encoded artifact path.
pub const ARTIFACT_SUFFIX: &str = ".spv";

/// Suffix appended to a source path to form the compiler's temporary output.
const TEMP_SUFFIX: &str = ".tmp.spv";

/// Returns the encoded artifact path for a shader source: the sibling file
/// `<source>.spv` (e.g. `sky.frag.glsl` → `sky.frag.glsl.spv`).
pub fn artifact_path(source: &Path) -> PathBuf {
    append_suffix(source, ARTIFACT_SUFFIX)
}

/// Returns the temporary compiler output path for a shader source:
/// `<source>.tmp.spv`. Unique per source, so concurrent compilations of
/// distinct sources never collide.
pub fn temp_output_path(source: &Path) -> PathBuf {
    append_suffix(source, TEMP_SUFFIX)
}

fn append_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn artifact_is_sibling_with_spv_suffix() {
        assert_eq!(
            artifact_path(Path::new("shaders/sky.frag.glsl")),
            PathBuf::from("shaders/sky.frag.glsl.spv")
        );
    }

    #[test]
    fn temp_output_is_distinct_from_artifact() {
        let source = Path::new("shaders/sky.frag.glsl");
        assert_eq!(
            temp_output_path(source),
            PathBuf::from("shaders/sky.frag.glsl.tmp.spv")
        );
        assert_ne!(temp_output_path(source), artifact_path(source));
    }

    #[test]
    fn preserves_parent_directories() {
        let artifact = artifact_path(Path::new("a/b/c/terrain.comp.glsl"));
        assert_eq!(artifact.parent(), Some(Path::new("a/b/c")));
    }
}
