//! Invocation of the external `glslangValidator` compiler.
//!
//! This crate locates the validator inside a Vulkan SDK installation and
//! wraps the synchronous "run external process" port used by the build
//! pipeline: one source file in, captured diagnostics and (on success) the
//! raw SPIR-V bytes out.

#![warn(missing_docs)]

pub mod error;
pub mod invoke;
pub mod toolchain;

pub use error::{CompileError, ToolchainError};
pub use invoke::{CompiledShader, GlslangCompiler, ShaderCompiler};
pub use toolchain::{locate_validator, resolve_validator};
