//! JSON frame exporter: records frames for browser playback.
//!
//! Implements the `Renderer` trait. Captures mesh geometry once at `init`
//! and the changed buffers of every frame, then serializes the recording
//! to a JSON file on `finalize()`. A frame without particle positions
//! means the particles were hidden or unchanged; the viewer keeps the
//! previous ones.

use serde::Serialize;
use neurolume_mesh::{Shading, TriangleMesh};
use neurolume_types::{NeurolumeError, NeurolumeResult};

use crate::material::PointsMaterial;
use crate::renderer::{RenderFrame, Renderer};
use crate::sprite::{SpriteImage, SpriteSource};

/// A single recorded frame.
#[derive(Serialize)]
struct FrameData {
    frame: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    particles: Option<Vec<f32>>, // Interleaved [x0,y0,z0, x1,y1,z1, ...]
    #[serde(skip_serializing_if = "Option::is_none")]
    colors: Option<Vec<f32>>, // Interleaved [r0,g0,b0, ...]
}

/// Complete recording for JSON export.
#[derive(Serialize)]
struct Recording<'a> {
    vertex_count: usize,
    triangle_count: usize,
    positions: &'a [f32],
    indices: &'a [u32],
    shading: Shading,
    points: Option<PointsMaterial>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sprite_source: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sprite: Option<&'a SpriteImage>,
    frames: &'a [FrameData],
}

/// Exports frames to a JSON file for the browser viewer.
///
/// Usage:
/// ```text
/// let mut exporter = JsonFrameExporter::new("brain.json").with_sprite(&RadialGlowSprite::default());
/// exporter.init(painter.mesh()?, &PointsMaterial::default())?;
/// // ... submit_frame() each frame ...
/// exporter.finalize()?; // Writes the JSON file
/// ```
pub struct JsonFrameExporter {
    output_path: String,
    positions: Vec<f32>,
    indices: Vec<u32>,
    vertex_count: usize,
    triangle_count: usize,
    shading: Shading,
    points: Option<PointsMaterial>,
    sprite_source: Option<String>,
    sprite: Option<SpriteImage>,
    frames: Vec<FrameData>,
}

impl JsonFrameExporter {
    /// Creates a new exporter that will write to the given path.
    pub fn new(output_path: &str) -> Self {
        Self {
            output_path: output_path.to_string(),
            positions: Vec::new(),
            indices: Vec::new(),
            vertex_count: 0,
            triangle_count: 0,
            shading: Shading::default(),
            points: None,
            sprite_source: None,
            sprite: None,
            frames: Vec::new(),
        }
    }

    /// Embeds the particle sprite image in the recording.
    pub fn with_sprite(mut self, source: &dyn SpriteSource) -> Self {
        self.sprite_source = Some(source.name().to_string());
        self.sprite = Some(source.sprite());
        self
    }

    /// Serializes the recording without writing it.
    pub fn to_json(&self) -> NeurolumeResult<String> {
        let recording = Recording {
            vertex_count: self.vertex_count,
            triangle_count: self.triangle_count,
            positions: &self.positions,
            indices: &self.indices,
            shading: self.shading,
            points: self.points,
            sprite_source: self.sprite_source.as_deref(),
            sprite: self.sprite.as_ref(),
            frames: &self.frames,
        };
        serde_json::to_string(&recording)
            .map_err(|e| NeurolumeError::Serialization(format!("JSON serialization failed: {e}")))
    }

    /// Path the recording is written to.
    pub fn output_path(&self) -> &str {
        &self.output_path
    }
}

impl Renderer for JsonFrameExporter {
    fn init(&mut self, mesh: &TriangleMesh, points: &PointsMaterial) -> NeurolumeResult<()> {
        self.vertex_count = mesh.vertex_count();
        self.triangle_count = mesh.triangle_count();
        self.positions = (0..mesh.vertex_count())
            .flat_map(|i| mesh.position(i))
            .collect();
        self.indices = mesh.indices.clone();
        self.shading = mesh.shading();
        self.points = Some(*points);
        Ok(())
    }

    fn submit_frame(&mut self, frame: &RenderFrame) -> NeurolumeResult<()> {
        if let Some(colors) = &frame.vertex_colors {
            if colors.len() != self.vertex_count * 3 {
                return Err(NeurolumeError::Render(format!(
                    "Frame {} carries {} color floats, expected {}",
                    frame.frame,
                    colors.len(),
                    self.vertex_count * 3
                )));
            }
        }
        self.frames.push(FrameData {
            frame: frame.frame,
            particles: frame.particle_positions.clone(),
            colors: frame.vertex_colors.clone(),
        });
        Ok(())
    }

    fn finalize(&mut self) -> NeurolumeResult<()> {
        let json = self.to_json()?;
        std::fs::write(&self.output_path, json)?;
        tracing::info!(path = %self.output_path, frames = self.frames.len(), "recording written");
        self.frames.clear();
        Ok(())
    }

    fn name(&self) -> &str {
        "json_exporter"
    }

    fn frame_count(&self) -> u32 {
        self.frames.len() as u32
    }
}
