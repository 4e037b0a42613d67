//! How the renderer should shade a mesh.
//!
//! A loaded mesh starts out [`Shading::Textured`]. Region painting swaps it
//! to [`Shading::VertexColors`], which tells the backend to ignore the
//! texture and read the per-vertex color attribute instead.

use serde::{Deserialize, Serialize};

/// Physically-based surface parameters for the vertex-colored material.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceFinish {
    pub roughness: f32,
    pub metalness: f32,
    pub transparent: bool,
    pub opacity: f32,
}

impl Default for SurfaceFinish {
    fn default() -> Self {
        Self {
            roughness: 0.4,
            metalness: 0.1,
            transparent: true,
            opacity: 1.0,
        }
    }
}

/// Shading mode of a mesh.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Shading {
    /// Whatever texture the asset shipped with.
    #[default]
    Textured,
    /// Per-vertex colors from the mesh's color attribute.
    VertexColors(SurfaceFinish),
}

impl Shading {
    /// Returns true if the renderer should read the color attribute.
    pub fn uses_vertex_colors(&self) -> bool {
        matches!(self, Shading::VertexColors(_))
    }
}
