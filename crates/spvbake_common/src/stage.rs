//! Shader stage detection from file naming conventions.

use std::path::Path;

/// A shader pipeline stage, identified by its source file suffix.
///
/// Suffix matching is exact and case-sensitive: `foo.vert.glsl` is a vertex
/// shader, `foo.VERT.GLSL` is not a shader source at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShaderStage {
    /// Vertex shader (`.vert.glsl`).
    Vertex,
    /// Fragment shader (`.frag.glsl`).
    Fragment,
    /// Geometry shader (`.geom.glsl`).
    Geometry,
    /// Tessellation control shader (`.tesc.glsl`).
    TessControl,
    /// Tessellation evaluation shader (`.tese.glsl`).
    TessEval,
    /// Compute shader (`.comp.glsl`).
    Compute,
}

impl ShaderStage {
    /// All recognized stages, in a fixed order.
    pub const ALL: [ShaderStage; 6] = [
        ShaderStage::Vertex,
        ShaderStage::Fragment,
        ShaderStage::Geometry,
        ShaderStage::TessControl,
        ShaderStage::TessEval,
        ShaderStage::Compute,
    ];

    /// The exact source file suffix for this stage.
    pub fn suffix(self) -> &'static str {
        match self {
            ShaderStage::Vertex => ".vert.glsl",
            ShaderStage::Fragment => ".frag.glsl",
            ShaderStage::Geometry => ".geom.glsl",
            ShaderStage::TessControl => ".tesc.glsl",
            ShaderStage::TessEval => ".tese.glsl",
            ShaderStage::Compute => ".comp.glsl",
        }
    }

    /// Detects the stage from a path's file name, or `None` if the name does
    /// not carry a recognized suffix.
    pub fn of_path(path: &Path) -> Option<ShaderStage> {
        let name = path.file_name()?.to_str()?;
        Self::ALL
            .into_iter()
            .find(|stage| name.ends_with(stage.suffix()))
    }
}
