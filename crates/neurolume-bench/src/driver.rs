//! Scene driver: owns the painter and particle flow and steps them
//! once per frame.
//!
//! Each frame:
//! 1. Apply the requested region if it changed
//! 2. Advance the particle flow
//! 3. Collect dirty buffers into a [`RenderFrame`] and submit it
//! 4. Emit telemetry

use std::time::Instant;

use neurolume_flow::ParticleFlow;
use neurolume_io::SceneConfig;
use neurolume_mesh::TriangleMesh;
use neurolume_regions::RegionPainter;
use neurolume_render::{PointsMaterial, RenderFrame, Renderer};
use neurolume_telemetry::{EventBus, EventKind, SceneEvent};
use neurolume_types::{NeurolumeError, NeurolumeResult};

/// Per-frame result of [`SceneDriver::step`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStats {
    /// Frame number that was just completed.
    pub frame: u32,
    /// Particles that wrapped this frame.
    pub wrapped: usize,
    /// Whether the vertex colors were repainted this frame.
    pub repainted: bool,
    /// Wall-clock time for the frame (seconds).
    pub wall_time: f64,
}

/// Drives a [`RegionPainter`] and a [`ParticleFlow`] over one mesh.
pub struct SceneDriver {
    painter: RegionPainter,
    flow: ParticleFlow,
    points: PointsMaterial,
    /// Last region name passed to `step`, to avoid repainting every frame.
    requested: Option<String>,
    frame: u32,
}

impl SceneDriver {
    /// Builds and initializes both components from a scene config.
    ///
    /// The flow samples `mesh` before the painter takes ownership of it.
    pub fn new(config: &SceneConfig, mesh: TriangleMesh, bus: &EventBus) -> NeurolumeResult<Self> {
        let mut painter = config.build_painter()?;
        let mut flow = ParticleFlow::new();

        flow.initialize_from_config(&mesh, &config.flow)?;
        let surface_area = mesh.surface_area() as f64;
        let vertex_count = mesh.vertex_count();
        painter.initialize(mesh)?;

        bus.emit(SceneEvent::new(
            0,
            EventKind::PainterInitialized {
                vertex_count: vertex_count as u32,
                zone_count: painter.zones().len() as u32,
            },
        ));
        bus.emit(SceneEvent::new(
            0,
            EventKind::FlowInitialized {
                particle_count: flow.particle_count() as u32,
                surface_area,
            },
        ));

        Ok(Self {
            painter,
            flow,
            points: PointsMaterial::default(),
            requested: None,
            frame: 0,
        })
    }

    /// Sends the painted mesh and particle material to `renderer`.
    pub fn attach(&self, renderer: &mut dyn Renderer) -> NeurolumeResult<()> {
        let mesh = self
            .painter
            .mesh()
            .ok_or_else(|| NeurolumeError::Render("Painter has no mesh to attach".into()))?;
        renderer.init(mesh, &self.points)
    }

    /// Advances one frame with `region` selected (`None` keeps the
    /// current selection) and submits the result to `renderer`.
    pub fn step(
        &mut self,
        region: Option<&str>,
        renderer: &mut dyn Renderer,
        bus: &EventBus,
    ) -> NeurolumeResult<FrameStats> {
        let start = Instant::now();
        let frame = self.frame;
        bus.emit(SceneEvent::new(frame, EventKind::FrameBegin));

        let mut repainted = false;
        if let Some(name) = region {
            if self.requested.as_deref() != Some(name) {
                self.requested = Some(name.to_string());
                if let Some(report) = self.painter.highlight(name) {
                    repainted = true;
                    let kind = match report.region {
                        Some(region) => EventKind::RegionHighlighted {
                            region,
                            painted_vertices: report.painted_vertices as u32,
                        },
                        None => EventKind::RegionReset,
                    };
                    bus.emit(SceneEvent::new(frame, kind));
                }
            }
        }

        let wrapped = self.flow.update();
        if wrapped > 0 {
            bus.emit(SceneEvent::new(
                frame,
                EventKind::ParticlesWrapped {
                    count: wrapped as u32,
                },
            ));
        }

        let colors = self.painter.mesh_mut().and_then(|m| m.colors_mut());
        let render_frame = RenderFrame::collect(frame, Some(self.flow.positions_mut()), colors);
        renderer.submit_frame(&render_frame)?;

        let wall_time = start.elapsed().as_secs_f64();
        bus.emit(SceneEvent::new(frame, EventKind::FrameEnd { wall_time }));
        self.frame += 1;

        Ok(FrameStats {
            frame,
            wrapped,
            repainted,
            wall_time,
        })
    }

    /// Shows or hides the particles.
    pub fn set_visible(&mut self, visible: bool, bus: &EventBus) {
        if self.flow.is_visible() != visible {
            self.flow.set_visible(visible);
            bus.emit(SceneEvent::new(
                self.frame,
                EventKind::VisibilityChanged { visible },
            ));
        }
    }

    pub fn painter(&self) -> &RegionPainter {
        &self.painter
    }

    pub fn flow(&self) -> &ParticleFlow {
        &self.flow
    }

    /// Number of frames stepped so far.
    pub fn frame(&self) -> u32 {
        self.frame
    }
}
