//! Per-vertex region painter.
//!
//! The painter owns the mesh once initialized. Each highlight request
//! repaints every vertex in a single pass:
//!
//! ```text
//! d = |p - center|
//! d <  radius  →  base.lerp(active, falloff(1 - d / radius))
//! d >= radius  →  base
//! ```
//!
//! Only the matched zone is tested; overlapping zones are not combined.

use neurolume_math::Rgb;
use neurolume_mesh::{AttributeBuffer, SurfaceFinish, TriangleMesh};
use neurolume_types::NeurolumeResult;

use crate::falloff::Falloff;
use crate::palette::Palette;
use crate::zone::ZoneTable;

/// Outcome of a highlight pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaintReport {
    /// Zone that was painted, or `None` if the mesh was reset to base.
    pub region: Option<String>,
    /// Vertices strictly inside the zone sphere.
    pub painted_vertices: usize,
}

/// Paints anatomical regions onto a mesh's vertex colors.
#[derive(Debug, Clone)]
pub struct RegionPainter {
    zones: ZoneTable,
    palette: Palette,
    falloff: Falloff,
    finish: SurfaceFinish,
    mesh: Option<TriangleMesh>,
    active: Option<String>,
}

impl RegionPainter {
    /// Creates a painter with no mesh attached.
    pub fn new(zones: ZoneTable, palette: Palette, falloff: Falloff) -> Self {
        Self {
            zones,
            palette,
            falloff,
            finish: SurfaceFinish::default(),
            mesh: None,
            active: None,
        }
    }

    /// Overrides the surface finish applied at initialization.
    pub fn with_finish(mut self, finish: SurfaceFinish) -> Self {
        self.finish = finish;
        self
    }

    /// Takes ownership of `mesh`, attaches a base-colored vertex color
    /// attribute, and switches it to vertex-color shading.
    ///
    /// Returns the previously attached mesh, if any. Fails only if the
    /// mesh itself is malformed; the painter is left unchanged in that case.
    pub fn initialize(&mut self, mut mesh: TriangleMesh) -> NeurolumeResult<Option<TriangleMesh>> {
        mesh.validate()?;

        let count = mesh.vertex_count();
        let mut colors = AttributeBuffer::filled(count, &self.palette.base.to_array());
        colors.mark_needs_update();
        mesh.enable_vertex_colors(colors, self.finish)?;

        tracing::info!(vertices = count, zones = self.zones.len(), "region painter initialized");

        self.active = None;
        Ok(self.mesh.replace(mesh))
    }

    /// Repaints the mesh for `region`.
    ///
    /// Unknown names and the reset sentinels restore the base color.
    /// Returns `None` (and does nothing) if no mesh is attached.
    pub fn highlight(&mut self, region: &str) -> Option<PaintReport> {
        let mesh = self.mesh.as_mut()?;

        let Some(zone) = self.zones.get(region) else {
            tracing::debug!(region, "no matching zone, resetting to base color");
            return self.reset();
        };

        let (center, radius) = (zone.center, zone.radius);
        let palette = self.palette;
        let falloff = self.falloff;
        let mut inside = 0usize;

        mesh.paint_vertices(|p| {
            let d = p.distance(center);
            if d < radius {
                inside += 1;
                let intensity = falloff.apply(1.0 - d / radius);
                palette.blend(intensity).to_array()
            } else {
                palette.base.to_array()
            }
        });

        tracing::debug!(region, painted = inside, "region highlighted");
        self.active = Some(zone.name.clone());
        Some(PaintReport {
            region: Some(zone.name.clone()),
            painted_vertices: inside,
        })
    }

    /// Restores every vertex to the base color.
    pub fn reset(&mut self) -> Option<PaintReport> {
        let mesh = self.mesh.as_mut()?;
        let base = self.palette.base.to_array();
        mesh.paint_vertices(|_| base);
        self.active = None;
        Some(PaintReport {
            region: None,
            painted_vertices: 0,
        })
    }

    /// Known zone names, in table order.
    pub fn list_region_names(&self) -> Vec<&str> {
        self.zones.names()
    }

    /// Name of the currently highlighted zone.
    pub fn active_region(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Color a vertex at distance `d` from the center of a zone with `radius` receives.
    pub fn color_at_distance(&self, d: f32, radius: f32) -> Rgb {
        if d < radius {
            self.palette.blend(self.falloff.apply(1.0 - d / radius))
        } else {
            self.palette.base
        }
    }

    pub fn zones(&self) -> &ZoneTable {
        &self.zones
    }

    pub fn palette(&self) -> Palette {
        self.palette
    }

    pub fn falloff(&self) -> Falloff {
        self.falloff
    }

    pub fn is_initialized(&self) -> bool {
        self.mesh.is_some()
    }

    /// The painted mesh, for the renderer.
    pub fn mesh(&self) -> Option<&TriangleMesh> {
        self.mesh.as_ref()
    }

    /// Mutable access so the renderer can clear the color dirty flag after upload.
    pub fn mesh_mut(&mut self) -> Option<&mut TriangleMesh> {
        self.mesh.as_mut()
    }

    /// Detaches and returns the mesh, leaving the painter uninitialized.
    pub fn take_mesh(&mut self) -> Option<TriangleMesh> {
        self.active = None;
        self.mesh.take()
    }
}

impl Default for RegionPainter {
    fn default() -> Self {
        Self::new(ZoneTable::brain_defaults(), Palette::default(), Falloff::default())
    }
}
