//! Area-weighted random sampling of points on a mesh surface.
//!
//! Picking a triangle uniformly by index over-samples regions with dense,
//! small triangles. The sampler instead builds a cumulative area table
//! once and picks a triangle by binary search over it, so every unit of
//! surface area is equally likely:
//!
//! ```text
//! areas:      [ 2.0 | 0.5 | 1.5 ]
//! cumulative: [ 2.0 , 2.5 , 4.0 ]    r ∈ [0, 4.0)
//! r = 2.2  →  partition_point(c <= 2.2) = 1  →  triangle 1
//! ```
//!
//! Within the chosen triangle a point is drawn uniformly with folded
//! barycentric coordinates.

use rand::Rng;
use neurolume_math::Vec3;
use neurolume_types::constants::DEGENERATE_AREA_THRESHOLD;
use neurolume_types::{NeurolumeError, NeurolumeResult, TriangleId};

use crate::mesh::TriangleMesh;

/// Uniform-by-area point sampler over a triangle mesh.
///
/// Owns a copy of the triangle corners, so the mesh can be handed to
/// another component after the sampler is built.
#[derive(Debug, Clone)]
pub struct SurfaceSampler {
    /// Corner positions per triangle.
    corners: Vec<[Vec3; 3]>,
    /// Running sum of triangle areas; `cumulative[i]` covers triangles `0..=i`.
    cumulative: Vec<f64>,
    /// Total surface area (last entry of `cumulative`).
    total_area: f64,
}

impl SurfaceSampler {
    /// Builds the cumulative area table.
    ///
    /// Fails with [`NeurolumeError::DegenerateMesh`] if the mesh has no
    /// vertices, no triangles, or (near-)zero total area, and with
    /// [`NeurolumeError::InvalidMesh`] if its indices are malformed.
    pub fn build(mesh: &TriangleMesh) -> NeurolumeResult<Self> {
        if mesh.vertex_count() == 0 {
            return Err(NeurolumeError::DegenerateMesh("mesh has no vertices".into()));
        }
        if mesh.triangle_count() == 0 {
            return Err(NeurolumeError::DegenerateMesh("mesh has no triangles".into()));
        }
        mesh.validate()?;

        let tri_count = mesh.triangle_count();
        let mut corners = Vec::with_capacity(tri_count);
        let mut cumulative = Vec::with_capacity(tri_count);
        let mut running = 0.0f64;

        for t in 0..tri_count {
            let [a, b, c] = mesh.triangle_corners(t);
            let area = 0.5 * (b - a).cross(c - a).length();
            if !area.is_finite() {
                return Err(NeurolumeError::InvalidMesh(format!(
                    "Triangle {} has non-finite area",
                    t
                )));
            }
            running += area as f64;
            corners.push([a, b, c]);
            cumulative.push(running);
        }

        if running <= DEGENERATE_AREA_THRESHOLD as f64 {
            return Err(NeurolumeError::DegenerateMesh(format!(
                "total surface area {:.3e} is too small to sample",
                running
            )));
        }

        tracing::debug!(triangles = tri_count, total_area = running, "surface sampler built");

        Ok(Self {
            corners,
            cumulative,
            total_area: running,
        })
    }

    /// Total surface area of the sampled mesh.
    pub fn total_area(&self) -> f64 {
        self.total_area
    }

    /// Number of triangles in the table (including zero-area ones).
    pub fn triangle_count(&self) -> usize {
        self.corners.len()
    }

    /// Picks a triangle with probability proportional to its area.
    pub fn pick_triangle<R: Rng + ?Sized>(&self, rng: &mut R) -> TriangleId {
        let r = rng.gen::<f64>() * self.total_area;
        TriangleId(self.triangle_at(r) as u32)
    }

    /// Index of the triangle covering cumulative area `r`.
    ///
    /// Zero-area triangles own an empty interval and are never returned
    /// for `r` strictly below the total area.
    fn triangle_at(&self, r: f64) -> usize {
        let idx = self.cumulative.partition_point(|&c| c <= r);
        idx.min(self.cumulative.len() - 1)
    }

    /// Draws one point uniformly over the mesh surface.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec3 {
        let t = self.pick_triangle(rng).index();
        let [a, b, c] = self.corners[t];

        let mut u: f32 = rng.gen();
        let mut v: f32 = rng.gen();
        // Fold the unit square onto the triangle.
        if u + v > 1.0 {
            u = 1.0 - u;
            v = 1.0 - v;
        }
        a + (b - a) * u + (c - a) * v
    }
}
