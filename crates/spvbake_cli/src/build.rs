//! `spvbake build` — the incremental compile-and-encode pipeline.
//!
//! For each discovered shader source: capture its modification stamp,
//! consult the cache, invoke the validator if stale, encode the SPIR-V as
//! hex literals, write the artifact only on content change, and persist the
//! cache entry immediately. One shader's failure never aborts the batch.

use std::path::{Path, PathBuf};
use std::time::Duration;

use spvbake_cache::{JsonFileStore, ShaderCache};
use spvbake_common::{artifact_path, SourceStamp};
use spvbake_emit::{hex_literals, write_if_changed, WriteOutcome};
use spvbake_glslang::{resolve_validator, CompileError, GlslangCompiler, ShaderCompiler};

use crate::pipeline::{discover_shader_files, resolve_cache_path, resolve_root};
use crate::{BuildArgs, GlobalArgs};

/// Aggregate result of one pipeline run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BuildOutcome {
    /// Sources compiled successfully.
    pub compiled: usize,
    /// Of the compiled sources, how many artifacts were actually rewritten.
    pub written: usize,
    /// Of the compiled sources, how many artifacts were byte-identical.
    pub unchanged: usize,
    /// Sources skipped as up to date (no process spawned).
    pub skipped: usize,
    /// Sources that failed to compile or to write their artifact.
    pub failed: usize,
}

/// Terminal state of one source within a run.
enum SourceStatus {
    /// Cache hit: stamp matched and the artifact exists.
    Skipped,
    /// Compiled; artifact content changed and was rewritten.
    Written,
    /// Compiled; artifact content was already identical.
    Unchanged,
}

/// Why one source failed, for diagnostic reporting.
enum SourceFailure {
    /// The source file's metadata could not be read.
    Stamp(std::io::Error),
    /// The validator rejected the source, could not be launched, or the
    /// compile faulted around its temporary output.
    Compile(CompileError),
    /// The encoded artifact could not be read or written.
    Artifact(std::io::Error),
}

/// Runs the `spvbake build` command.
///
/// Returns the failed-compile count as the process exit code: zero means
/// every source compiled or was skipped cleanly.
pub fn run(args: &BuildArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    // Step 1: Resolve the build root and load configuration.
    let root = resolve_root(args.root.as_deref());
    let config = spvbake_config::load_config(&root)?;

    // Step 2: Locate the validator. Fatal before any source is touched.
    let sdk = args
        .sdk
        .clone()
        .or_else(|| config.toolchain.vulkan_sdk.clone())
        .or_else(|| std::env::var_os("VULKAN_SDK").map(PathBuf::from));
    let validator = resolve_validator(config.toolchain.validator.as_deref(), sdk.as_deref())?;
    log::debug!("using validator {}", validator.display());

    let timeout = match config.toolchain.timeout_secs {
        0 => None,
        secs => Some(Duration::from_secs(secs)),
    };
    let compiler = GlslangCompiler::new(validator).with_timeout(timeout);

    // Step 3: Discover shader sources.
    let shader_root = root.join(&config.shaders.root);
    if !shader_root.is_dir() {
        return Err(format!("shader root {} is not a directory", shader_root.display()).into());
    }
    let sources = discover_shader_files(&shader_root)?;
    if sources.is_empty() {
        if !global.quiet {
            eprintln!("warning: no shader sources found under {}", shader_root.display());
        }
        return Ok(0);
    }

    if !global.quiet {
        eprintln!("   Checking {} shader source(s)", sources.len());
    }

    // Step 4: Load the stamp cache (fail-soft).
    let cache_path = resolve_cache_path(args.cache.as_deref(), &config);
    let mut cache = ShaderCache::load(Box::new(JsonFileStore::new(cache_path)));

    // Step 5: Run the pipeline.
    let outcome = compile_all(&sources, &compiler, &mut cache, global.quiet);

    // Step 6: Summary.
    if !global.quiet {
        eprintln!();
        eprintln!(
            "   Result: {} compiled ({} written, {} unchanged), {} skipped, {} failed",
            outcome.compiled, outcome.written, outcome.unchanged, outcome.skipped, outcome.failed
        );
    }

    Ok(outcome.failed as i32)
}

/// Processes every source through the compile-and-encode pipeline.
///
/// Sources are independent: processing order is discovery order but carries
/// no semantics, and a failure is isolated to its source. The cache is
/// saved after every successful compile so an interrupted run keeps all
/// prior progress.
pub fn compile_all(
    sources: &[PathBuf],
    compiler: &dyn ShaderCompiler,
    cache: &mut ShaderCache,
    quiet: bool,
) -> BuildOutcome {
    let mut outcome = BuildOutcome::default();

    for source in sources {
        match process_source(source, compiler, cache) {
            Ok(SourceStatus::Skipped) => {
                outcome.skipped += 1;
                log::debug!("{} is up to date", source.display());
            }
            Ok(SourceStatus::Written) => {
                outcome.compiled += 1;
                outcome.written += 1;
                if !quiet {
                    eprintln!("   Compiled {}", source.display());
                }
            }
            Ok(SourceStatus::Unchanged) => {
                outcome.compiled += 1;
                outcome.unchanged += 1;
                if !quiet {
                    eprintln!("   Compiled {} (artifact unchanged)", source.display());
                }
            }
            Err(failure) => {
                outcome.failed += 1;
                report_failure(source, &failure);
            }
        }
    }

    outcome
}

/// Runs one source through stamp → staleness gate → compile → encode →
/// write → record.
///
/// The artifact and the cache entry change together or not at all: the
/// cache is recorded only after the artifact write succeeded. A cache
/// persistence failure is logged and swallowed — the cache is an
/// optimization, so it must never turn a good compile into a failure.
fn process_source(
    source: &Path,
    compiler: &dyn ShaderCompiler,
    cache: &mut ShaderCache,
) -> Result<SourceStatus, SourceFailure> {
    let stamp = SourceStamp::of_file(source).map_err(SourceFailure::Stamp)?;

    if !cache.is_stale(source, &stamp) {
        return Ok(SourceStatus::Skipped);
    }

    let compiled = compiler.compile(source).map_err(SourceFailure::Compile)?;

    let encoded = hex_literals(&compiled.binary);
    let written = write_if_changed(&artifact_path(source), encoded.as_bytes())
        .map_err(SourceFailure::Artifact)?;

    // The input changed, so the stamp is recorded even when the output
    // bytes happened to be identical.
    cache.record(source, stamp);
    if let Err(e) = cache.save() {
        log::warn!("could not persist shader cache: {e}");
    }

    Ok(match written {
        WriteOutcome::Written => SourceStatus::Written,
        WriteOutcome::Unchanged => SourceStatus::Unchanged,
    })
}

/// Prints a failing source's diagnostics to stderr.
fn report_failure(source: &Path, failure: &SourceFailure) {
    match failure {
        SourceFailure::Compile(e) => {
            eprintln!("error: {}: {e}", source.display());
            if let Some((stdout, stderr)) = e.diagnostics() {
                if !stdout.trim().is_empty() {
                    eprintln!("{}", stdout.trim_end());
                }
                if !stderr.trim().is_empty() {
                    eprintln!("{}", stderr.trim_end());
                }
            }
        }
        SourceFailure::Stamp(e) => {
            eprintln!("error: {}: cannot read source metadata: {e}", source.display());
        }
        SourceFailure::Artifact(e) => {
            eprintln!("error: {}: cannot write artifact: {e}", source.display());
        }
    }
}
