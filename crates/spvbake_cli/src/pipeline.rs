//! Shared helpers for CLI commands.
//!
//! Source discovery and the root/cache path resolution used by both
//! `build` and `clean`.

use std::io;
use std::path::{Path, PathBuf};

use spvbake_common::ShaderStage;
use spvbake_config::BakeConfig;

/// Discovers shader source files under `dir` (recursive).
///
/// Selects files whose names end in one of the recognized stage suffixes
/// (exact, case-sensitive) and returns them sorted by path so processing
/// order is deterministic.
pub fn discover_shader_files(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    walk_dir(dir, &mut files)?;
    files.sort();
    Ok(files)
}

/// Recursively walks a directory collecting shader sources.
fn walk_dir(dir: &Path, files: &mut Vec<PathBuf>) -> io::Result<()> {
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            walk_dir(&path, files)?;
        } else if ShaderStage::of_path(&path).is_some() {
            files.push(path);
        }
    }
    Ok(())
}

/// Resolves the build root from an optional CLI argument.
pub fn resolve_root(arg: Option<&Path>) -> PathBuf {
    arg.map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Resolves the stamp cache file: CLI override, else configuration.
///
/// The result is used as-is, so a relative path stays relative to the
/// invocation working directory.
pub fn resolve_cache_path(cli_override: Option<&Path>, config: &BakeConfig) -> PathBuf {
    cli_override
        .map(Path::to_path_buf)
        .unwrap_or_else(|| config.cache.path.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn discover_finds_only_shader_suffixes() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("sky.vert.glsl"), "").unwrap();
        fs::write(tmp.path().join("sky.frag.glsl"), "").unwrap();
        fs::write(tmp.path().join("sky.frag.glsl.spv"), "").unwrap();
        fs::write(tmp.path().join("readme.txt"), "").unwrap();

        let files = discover_shader_files(tmp.path()).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|p| p.extension().unwrap() == "glsl"));
    }

    #[test]
    fn discover_recurses_and_sorts() {
        let tmp = TempDir::new().unwrap();
        let deep = tmp.path().join("effects").join("blur");
        fs::create_dir_all(&deep).unwrap();
        fs::write(deep.join("blur.comp.glsl"), "").unwrap();
        fs::write(tmp.path().join("a.vert.glsl"), "").unwrap();

        let files = discover_shader_files(tmp.path()).unwrap();
        assert_eq!(files.len(), 2);
        let mut sorted = files.clone();
        sorted.sort();
        assert_eq!(files, sorted);
    }

    #[test]
    fn discover_empty_dir() {
        let tmp = TempDir::new().unwrap();
        assert!(discover_shader_files(tmp.path()).unwrap().is_empty());
    }

    #[test]
    fn discover_missing_dir_errors() {
        assert!(discover_shader_files(Path::new("/nonexistent/shaders")).is_err());
    }

    #[test]
    fn resolve_root_defaults_to_cwd() {
        assert_eq!(resolve_root(None), PathBuf::from("."));
        assert_eq!(
            resolve_root(Some(Path::new("engine"))),
            PathBuf::from("engine")
        );
    }

    #[test]
    fn resolve_cache_path_prefers_cli() {
        let config = BakeConfig::default();
        assert_eq!(
            resolve_cache_path(Some(Path::new("custom.json")), &config),
            PathBuf::from("custom.json")
        );
        assert_eq!(
            resolve_cache_path(None, &config),
            PathBuf::from(".spvbake-cache.json")
        );
    }
}
