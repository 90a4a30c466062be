//! `spvbake clean` — remove generated artifacts and the stamp cache.
//!
//! Everything spvbake produces is regenerable, so clean simply deletes the
//! `.spv` artifact of every discovered source plus the cache file. Sources
//! themselves are never touched.

use std::path::Path;

use spvbake_common::artifact_path;

use crate::pipeline::{discover_shader_files, resolve_cache_path, resolve_root};
use crate::{CleanArgs, GlobalArgs};

/// Runs the `spvbake clean` command.
pub fn run(args: &CleanArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let root = resolve_root(args.root.as_deref());
    let config = spvbake_config::load_config(&root)?;

    let shader_root = root.join(&config.shaders.root);
    let mut removed = 0usize;

    if shader_root.is_dir() {
        for source in discover_shader_files(&shader_root)? {
            removed += remove_quietly(&artifact_path(&source));
        }
    }

    let cache_path = resolve_cache_path(args.cache.as_deref(), &config);
    let cache_removed = remove_quietly(&cache_path) == 1;

    if !global.quiet {
        eprintln!(
            "   Removed {removed} artifact(s){}",
            if cache_removed { " and the stamp cache" } else { "" }
        );
    }

    Ok(0)
}

/// Removes a file if it exists; returns 1 if something was deleted.
///
/// Absence is not an error. Any other failure is reported but does not
/// abort the clean.
fn remove_quietly(path: &Path) -> usize {
    match std::fs::remove_file(path) {
        Ok(()) => 1,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => 0,
        Err(e) => {
            eprintln!("warning: could not remove {}: {e}", path.display());
            0
        }
    }
}
