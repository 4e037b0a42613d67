//! Core triangle mesh type with SoA (Structure of Arrays) positions.
//!
//! The SoA layout stores each coordinate channel contiguously:
//! - `pos_x: [x0, x1, x2, ...]`
//! - `pos_y: [y0, y1, y2, ...]`
//! - `pos_z: [z0, z1, z2, ...]`
//!
//! Per-vertex distance queries (region painting) stream through these
//! channels linearly. The color attribute, once attached, is interleaved
//! because that is the layout the renderer uploads.

use serde::{Deserialize, Serialize};
use neurolume_math::Vec3;
use neurolume_types::{NeurolumeError, NeurolumeResult};

use crate::attribute::AttributeBuffer;
use crate::shading::{Shading, SurfaceFinish};

/// A triangle mesh stored in Structure-of-Arrays layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriangleMesh {
    // --- Vertex data (SoA) ---
    /// X coordinates of all vertices.
    pub pos_x: Vec<f32>,
    /// Y coordinates of all vertices.
    pub pos_y: Vec<f32>,
    /// Z coordinates of all vertices.
    pub pos_z: Vec<f32>,

    // --- Triangle data ---
    /// Triangle indices: each triangle is [v0, v1, v2].
    /// Stored flat: `[t0v0, t0v1, t0v2, t1v0, t1v1, t1v2, ...]`
    pub indices: Vec<u32>,

    // --- Render state ---
    /// Per-vertex RGB attribute, present once vertex coloring is enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    colors: Option<AttributeBuffer>,
    /// Shading mode the renderer should use.
    #[serde(default)]
    shading: Shading,
}

impl TriangleMesh {
    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.pos_x.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns the position of vertex `i` as `[x, y, z]`.
    #[inline]
    pub fn position(&self, i: usize) -> [f32; 3] {
        [self.pos_x[i], self.pos_y[i], self.pos_z[i]]
    }

    /// Returns the position as a `glam::Vec3`.
    #[inline]
    pub fn position_vec3(&self, i: usize) -> Vec3 {
        Vec3::new(self.pos_x[i], self.pos_y[i], self.pos_z[i])
    }

    /// Returns the three vertex indices of triangle `t`.
    #[inline]
    pub fn triangle(&self, t: usize) -> [u32; 3] {
        let base = t * 3;
        [self.indices[base], self.indices[base + 1], self.indices[base + 2]]
    }

    /// Returns the corner positions of triangle `t`.
    #[inline]
    pub fn triangle_corners(&self, t: usize) -> [Vec3; 3] {
        let [a, b, c] = self.triangle(t);
        [
            self.position_vec3(a as usize),
            self.position_vec3(b as usize),
            self.position_vec3(c as usize),
        ]
    }

    /// Area of triangle `t` (half the magnitude of the edge cross product).
    pub fn triangle_area(&self, t: usize) -> f32 {
        let [a, b, c] = self.triangle_corners(t);
        0.5 * (b - a).cross(c - a).length()
    }

    /// Sum of all triangle areas.
    pub fn surface_area(&self) -> f32 {
        (0..self.triangle_count()).map(|t| self.triangle_area(t)).sum()
    }

    /// Largest vertex distance from the mesh's local origin.
    pub fn bounding_radius(&self) -> f32 {
        (0..self.vertex_count())
            .map(|i| self.position_vec3(i).length())
            .fold(0.0f32, f32::max)
    }

    /// Sets the position of vertex `i`.
    #[inline]
    pub fn set_position(&mut self, i: usize, x: f32, y: f32, z: f32) {
        self.pos_x[i] = x;
        self.pos_y[i] = y;
        self.pos_z[i] = z;
    }

    /// Creates an empty mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_capacity: usize, triangle_capacity: usize) -> Self {
        Self {
            pos_x: Vec::with_capacity(vertex_capacity),
            pos_y: Vec::with_capacity(vertex_capacity),
            pos_z: Vec::with_capacity(vertex_capacity),
            indices: Vec::with_capacity(triangle_capacity * 3),
            colors: None,
            shading: Shading::Textured,
        }
    }

    // --- Vertex coloring ---

    /// Attaches a per-vertex color attribute and switches the mesh to
    /// vertex-color shading with the given finish.
    ///
    /// The buffer must hold one RGB item per vertex.
    pub fn enable_vertex_colors(
        &mut self,
        colors: AttributeBuffer,
        finish: SurfaceFinish,
    ) -> NeurolumeResult<()> {
        if colors.item_size() != 3 || colors.count() != self.vertex_count() {
            return Err(NeurolumeError::InvalidMesh(format!(
                "Color attribute has {} items of size {}, expected {} RGB items",
                colors.count(),
                colors.item_size(),
                self.vertex_count()
            )));
        }
        self.colors = Some(colors);
        self.shading = Shading::VertexColors(finish);
        Ok(())
    }

    /// Returns the color attribute, if vertex coloring is enabled.
    pub fn colors(&self) -> Option<&AttributeBuffer> {
        self.colors.as_ref()
    }

    /// Returns the color attribute for in-place writes.
    pub fn colors_mut(&mut self) -> Option<&mut AttributeBuffer> {
        self.colors.as_mut()
    }

    /// Recomputes every vertex color from its position and flags the
    /// attribute for re-upload.
    ///
    /// Returns `false` without calling `shade` if vertex coloring has not
    /// been enabled.
    pub fn paint_vertices<F>(&mut self, mut shade: F) -> bool
    where
        F: FnMut(Vec3) -> [f32; 3],
    {
        let Some(colors) = self.colors.as_mut() else {
            return false;
        };
        for i in 0..self.pos_x.len() {
            let p = Vec3::new(self.pos_x[i], self.pos_y[i], self.pos_z[i]);
            let [r, g, b] = shade(p);
            colors.set_xyz(i, r, g, b);
        }
        colors.mark_needs_update();
        true
    }

    /// Returns the current shading mode.
    pub fn shading(&self) -> Shading {
        self.shading
    }

    /// Validates mesh integrity.
    ///
    /// Checks:
    /// - All position arrays have the same length
    /// - Triangle indices are within bounds
    /// - No triangles with repeated vertex indices
    /// - The color attribute, if any, holds one RGB item per vertex
    pub fn validate(&self) -> NeurolumeResult<()> {
        let n = self.pos_x.len();

        if self.pos_y.len() != n || self.pos_z.len() != n {
            return Err(NeurolumeError::InvalidMesh(
                "Position arrays have inconsistent lengths".into(),
            ));
        }

        if self.indices.len() % 3 != 0 {
            return Err(NeurolumeError::InvalidMesh(
                "Index count is not divisible by 3".into(),
            ));
        }

        for (i, &idx) in self.indices.iter().enumerate() {
            if idx as usize >= n {
                return Err(NeurolumeError::InvalidMesh(format!(
                    "Index {} at position {} is out of range (vertex count: {})",
                    idx, i, n
                )));
            }
        }

        for t in 0..self.triangle_count() {
            let [a, b, c] = self.triangle(t);
            if a == b || b == c || a == c {
                return Err(NeurolumeError::InvalidMesh(format!(
                    "Triangle {} has repeated vertex indices: [{}, {}, {}]",
                    t, a, b, c
                )));
            }
        }

        if let Some(colors) = &self.colors {
            if colors.item_size() != 3 {
                return Err(NeurolumeError::InvalidMesh(format!(
                    "Color attribute item size is {}, expected 3",
                    colors.item_size()
                )));
            }
            if colors.count() != n {
                return Err(NeurolumeError::InvalidMesh(format!(
                    "Color attribute count ({}) != vertex count ({})",
                    colors.count(),
                    n
                )));
            }
        }

        Ok(())
    }

    /// Constructs a mesh from interleaved position data.
    ///
    /// Converts `[x0, y0, z0, x1, y1, z1, ...]` to SoA layout, the format
    /// browser-side geometry buffers export.
    pub fn from_interleaved(positions: &[f32], indices: &[u32]) -> NeurolumeResult<Self> {
        if positions.len() % 3 != 0 {
            return Err(NeurolumeError::InvalidMesh(
                "Interleaved positions length not divisible by 3".into(),
            ));
        }

        let n = positions.len() / 3;
        let mut mesh = Self::with_capacity(n, indices.len() / 3);

        for p in positions.chunks_exact(3) {
            mesh.pos_x.push(p[0]);
            mesh.pos_y.push(p[1]);
            mesh.pos_z.push(p[2]);
        }
        mesh.indices = indices.to_vec();

        mesh.validate()?;
        Ok(mesh)
    }
}
