//! Renderer trait and HeadlessRenderer stub.
//!
//! The renderer is called once per frame. It receives only the buffers
//! that changed since the previous frame, mirroring how a GPU backend
//! re-uploads attributes whose dirty flag is set.

use neurolume_mesh::{AttributeBuffer, TriangleMesh};
use neurolume_types::NeurolumeResult;

use crate::material::PointsMaterial;

/// The buffers that changed during one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderFrame {
    /// Frame index (0-based).
    pub frame: u32,
    /// Interleaved particle positions, if they changed.
    pub particle_positions: Option<Vec<f32>>,
    /// Interleaved vertex colors, if they changed.
    pub vertex_colors: Option<Vec<f32>>,
}

impl RenderFrame {
    /// Collects dirty buffers and clears their flags, as an upload would.
    pub fn collect(
        frame: u32,
        particles: Option<&mut AttributeBuffer>,
        colors: Option<&mut AttributeBuffer>,
    ) -> Self {
        Self {
            frame,
            particle_positions: particles.and_then(upload),
            vertex_colors: colors.and_then(upload),
        }
    }

    /// Returns true if nothing needs uploading.
    pub fn is_empty(&self) -> bool {
        self.particle_positions.is_none() && self.vertex_colors.is_none()
    }
}

/// Copies a dirty buffer and clears its flag; `None` if it is clean.
fn upload(buf: &mut AttributeBuffer) -> Option<Vec<f32>> {
    buf.take_needs_update().then(|| buf.as_slice().to_vec())
}

/// Trait for presenting painted meshes and particle flows.
///
/// # Implementations
/// - [`HeadlessRenderer`]: Discards frames (benchmarks, CI)
/// - [`JsonFrameExporter`](crate::JsonFrameExporter): Records frames for the browser viewer
pub trait Renderer: Send {
    /// Initialize the renderer with the mesh geometry and particle material.
    fn init(&mut self, mesh: &TriangleMesh, points: &PointsMaterial) -> NeurolumeResult<()>;

    /// Submit a frame for rendering.
    fn submit_frame(&mut self, frame: &RenderFrame) -> NeurolumeResult<()>;

    /// Finalize rendering (flush buffers, close files, etc.).
    fn finalize(&mut self) -> NeurolumeResult<()>;

    /// Returns the renderer name.
    fn name(&self) -> &str;

    /// Returns the number of frames submitted.
    fn frame_count(&self) -> u32;
}

/// Headless renderer: discards all frames.
///
/// Counts uploads so benchmarks can check that hidden flows stop
/// producing position data.
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    frames: u32,
    particle_uploads: u32,
    color_uploads: u32,
}

impl HeadlessRenderer {
    /// Creates a new headless renderer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames that carried particle positions.
    pub fn particle_uploads(&self) -> u32 {
        self.particle_uploads
    }

    /// Frames that carried vertex colors.
    pub fn color_uploads(&self) -> u32 {
        self.color_uploads
    }
}

impl Renderer for HeadlessRenderer {
    fn init(&mut self, _mesh: &TriangleMesh, _points: &PointsMaterial) -> NeurolumeResult<()> {
        Ok(())
    }

    fn submit_frame(&mut self, frame: &RenderFrame) -> NeurolumeResult<()> {
        self.frames += 1;
        if frame.particle_positions.is_some() {
            self.particle_uploads += 1;
        }
        if frame.vertex_colors.is_some() {
            self.color_uploads += 1;
        }
        Ok(())
    }

    fn finalize(&mut self) -> NeurolumeResult<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "headless"
    }

    fn frame_count(&self) -> u32 {
        self.frames
    }
}
