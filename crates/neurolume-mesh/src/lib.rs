//! # neurolume-mesh
//!
//! Triangle mesh representation with Structure-of-Arrays (SoA) position
//! layout, plus the per-vertex attribute buffers a renderer re-uploads.
//!
//! ## Key Types
//!
//! - [`TriangleMesh`]: Positions, triangle indices, an optional color
//!   attribute, and the shading mode the renderer should use.
//! - [`AttributeBuffer`]: Flat `f32` attribute storage with a dirty flag.
//! - [`SurfaceSampler`]: Area-weighted random points on the mesh surface.
//! - Procedural generators for tests and benchmarks (grids, spheres, ellipsoids).

pub mod attribute;
pub mod generators;
pub mod mesh;
pub mod sampler;
pub mod shading;

pub use attribute::AttributeBuffer;
pub use mesh::TriangleMesh;
pub use sampler::SurfaceSampler;
pub use shading::{Shading, SurfaceFinish};
