//! Benchmark scenarios: procedural mesh + scene config + region cycle.
//!
//! Three canonical scenarios for regression testing:
//! 1. **Brain ellipsoid**: Brain-sized ellipsoid, default zones and flow
//! 2. **Unit sphere**: Small sphere with two polar zones and a preview flow
//! 3. **Dense brain**: High-resolution ellipsoid with 10k particles

use serde::{Deserialize, Serialize};

use neurolume_flow::FlowConfig;
use neurolume_io::SceneConfig;
use neurolume_math::Vec3;
use neurolume_mesh::generators::{ellipsoid, uv_sphere};
use neurolume_mesh::TriangleMesh;
use neurolume_regions::{RegionZone, ZoneTable};

/// Semi-axes of the procedural brain stand-in (x = width, y = height,
/// z = front-to-back), matching the default zone layout.
const BRAIN_RADII: Vec3 = Vec3::new(3.0, 3.5, 4.0);

/// Procedural brain stand-in: an ellipsoid sized to the default zones.
pub fn brain_mesh(stacks: usize, slices: usize) -> TriangleMesh {
    ellipsoid(BRAIN_RADII, stacks, slices)
}

/// Which benchmark scenario to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenarioKind {
    /// Brain-sized ellipsoid with the default zone table.
    BrainEllipsoid,
    /// Unit sphere with two polar zones.
    UnitSphere,
    /// High-resolution ellipsoid with a large particle count.
    DenseBrain,
}

impl ScenarioKind {
    /// Returns all scenario kinds.
    pub fn all() -> &'static [ScenarioKind] {
        &[
            ScenarioKind::BrainEllipsoid,
            ScenarioKind::UnitSphere,
            ScenarioKind::DenseBrain,
        ]
    }

    /// Returns a human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            ScenarioKind::BrainEllipsoid => "brain_ellipsoid",
            ScenarioKind::UnitSphere => "unit_sphere",
            ScenarioKind::DenseBrain => "dense_brain",
        }
    }

    /// Looks up a kind by its [`name`](Self::name).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|k| k.name() == name)
    }
}

/// A fully specified benchmark scenario.
#[derive(Debug, Clone)]
pub struct Scenario {
    /// Scenario type.
    pub kind: ScenarioKind,
    /// Surface to paint and sample.
    pub mesh: TriangleMesh,
    /// Painter, flow, and zone configuration.
    pub config: SceneConfig,
    /// Number of frames to run.
    pub frames: u32,
    /// Region names cycled through during the run.
    pub region_cycle: Vec<String>,
    /// Frames spent on each region before switching.
    pub frames_per_region: u32,
}

impl Scenario {
    /// Create the brain ellipsoid scenario.
    ///
    /// Visits every default zone followed by `"All"`, 60 frames each,
    /// with the default 2000 particles.
    pub fn brain_ellipsoid() -> Self {
        let mut config = SceneConfig::default();
        config.flow.seed = Some(42);

        let mut region_cycle: Vec<String> = ZoneTable::brain_defaults()
            .names()
            .into_iter()
            .map(String::from)
            .collect();
        region_cycle.push("All".to_string());

        Self {
            kind: ScenarioKind::BrainEllipsoid,
            mesh: brain_mesh(32, 48),
            config,
            frames: 60 * region_cycle.len() as u32,
            region_cycle,
            frames_per_region: 60,
        }
    }

    /// Create the unit sphere scenario.
    pub fn unit_sphere() -> Self {
        let config = SceneConfig {
            flow: FlowConfig::preview(),
            zones: Some(vec![
                RegionZone::new("North", Vec3::Y, 0.8),
                RegionZone::new("South", Vec3::NEG_Y, 0.8),
            ]),
            ..Default::default()
        };

        Self {
            kind: ScenarioKind::UnitSphere,
            mesh: uv_sphere(1.0, 16, 24),
            config,
            frames: 120,
            region_cycle: vec!["North".into(), "South".into(), "None".into()],
            frames_per_region: 30,
        }
    }

    /// Create the dense brain scenario.
    ///
    /// Stress test for per-frame particle updates and full-mesh repaints.
    pub fn dense_brain() -> Self {
        let mut config = SceneConfig::default();
        config.flow.particle_count = 10_000;
        config.flow.seed = Some(7);

        let region_cycle: Vec<String> = ZoneTable::brain_defaults()
            .names()
            .into_iter()
            .map(String::from)
            .collect();

        Self {
            kind: ScenarioKind::DenseBrain,
            mesh: brain_mesh(96, 128),
            config,
            frames: 300,
            region_cycle,
            frames_per_region: 30,
        }
    }

    /// Create a scenario from its kind.
    pub fn from_kind(kind: ScenarioKind) -> Self {
        match kind {
            ScenarioKind::BrainEllipsoid => Self::brain_ellipsoid(),
            ScenarioKind::UnitSphere => Self::unit_sphere(),
            ScenarioKind::DenseBrain => Self::dense_brain(),
        }
    }

    /// Region selected at `frame`, or `None` if the cycle is empty.
    pub fn region_for_frame(&self, frame: u32) -> Option<&str> {
        if self.region_cycle.is_empty() {
            return None;
        }
        let slot = (frame / self.frames_per_region.max(1)) as usize % self.region_cycle.len();
        Some(self.region_cycle[slot].as_str())
    }
}
