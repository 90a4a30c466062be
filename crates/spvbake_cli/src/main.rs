//! spvbake CLI — the command-line interface for the shader build driver.
//!
//! Provides `spvbake build` to incrementally compile a shader tree into
//! embeddable hex-literal artifacts, and `spvbake clean` to remove the
//! generated artifacts and the stamp cache.

#![warn(missing_docs)]

mod build;
mod clean;
mod pipeline;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

/// spvbake — incremental GLSL to SPIR-V build driver.
#[derive(Parser, Debug)]
#[command(name = "spvbake", version, about = "Incremental GLSL -> SPIR-V build driver")]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose (debug-level) output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compile stale shader sources and refresh their artifacts.
    Build(BuildArgs),
    /// Remove generated artifacts and the stamp cache.
    Clean(CleanArgs),
}

/// Arguments for the `spvbake build` subcommand.
#[derive(Parser, Debug)]
pub struct BuildArgs {
    /// Build root containing `spvbake.toml` and the shader tree. Defaults
    /// to the current directory.
    pub root: Option<PathBuf>,

    /// Vulkan SDK directory to probe for glslangValidator. Overrides the
    /// configuration file and the VULKAN_SDK environment variable.
    #[arg(long)]
    pub sdk: Option<PathBuf>,

    /// Stamp cache file. Overrides the configuration file.
    #[arg(long)]
    pub cache: Option<PathBuf>,
}

/// Arguments for the `spvbake clean` subcommand.
#[derive(Parser, Debug)]
pub struct CleanArgs {
    /// Build root containing `spvbake.toml` and the shader tree. Defaults
    /// to the current directory.
    pub root: Option<PathBuf>,

    /// Stamp cache file. Overrides the configuration file.
    #[arg(long)]
    pub cache: Option<PathBuf>,
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress non-error output.
    pub quiet: bool,
    /// Whether to print verbose/debug information.
    pub verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .init();

    let global = GlobalArgs {
        quiet: cli.quiet,
        verbose: cli.verbose,
    };

    let result = match cli.command {
        Command::Build(ref args) => build::run(args, &global),
        Command::Clean(ref args) => clean::run(args, &global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}
