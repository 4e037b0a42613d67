//! The particle flow system.
//!
//! Owns a fixed-size particle collection and the flat position buffer a
//! renderer draws as points. Paths never change after initialization;
//! only progress advances.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use neurolume_math::{QuadraticBezier, Vec3};
use neurolume_mesh::{AttributeBuffer, SurfaceSampler, TriangleMesh};
use neurolume_types::{NeurolumeResult, ParticleId};

use crate::config::FlowConfig;
use crate::particle::Particle;

/// Frame-driven particle system bound to a mesh surface.
#[derive(Debug, Clone)]
pub struct ParticleFlow {
    particles: Vec<Particle>,
    /// One xyz item per particle.
    positions: AttributeBuffer,
    visible: bool,
    initialized: bool,
}

impl ParticleFlow {
    /// Creates an empty, visible, uninitialized flow.
    pub fn new() -> Self {
        Self {
            particles: Vec::new(),
            positions: AttributeBuffer::zeros(0, 3),
            visible: true,
            initialized: false,
        }
    }

    /// Samples `config.particle_count` paths on `mesh` and allocates the
    /// position buffer.
    ///
    /// Rejects an invalid config or a mesh with no samplable area. On
    /// failure any previous state is kept as-is.
    pub fn initialize<R: Rng + ?Sized>(
        &mut self,
        mesh: &TriangleMesh,
        config: &FlowConfig,
        rng: &mut R,
    ) -> NeurolumeResult<()> {
        config.validate()?;
        let sampler = SurfaceSampler::build(mesh).map_err(|e| {
            tracing::warn!(error = %e, "particle flow rejected mesh");
            e
        })?;

        let count = config.particle_count;
        let mut particles = Vec::with_capacity(count);
        let mut positions = AttributeBuffer::zeros(count, 3);

        for i in 0..count {
            let start = sampler.sample(rng);
            let end = sampler.sample(rng);
            let path = arched_path(start, end, config.arc_height);

            let progress: f32 = rng.gen();
            let speed = if config.speed_max > config.speed_min {
                rng.gen_range(config.speed_min..config.speed_max)
            } else {
                config.speed_min
            };

            let particle = Particle::new(path, progress, speed);
            let p = particle.position();
            positions.set_xyz(i, p.x, p.y, p.z);
            particles.push(particle);
        }
        positions.mark_needs_update();

        self.particles = particles;
        self.positions = positions;
        self.initialized = true;

        tracing::info!(
            particles = count,
            surface_area = sampler.total_area(),
            arc_height = config.arc_height,
            path_bound = self.path_bound(),
            "particle flow initialized"
        );
        Ok(())
    }

    /// Initializes with an RNG seeded from `config.seed`, or from OS
    /// entropy when no seed is set.
    pub fn initialize_from_config(
        &mut self,
        mesh: &TriangleMesh,
        config: &FlowConfig,
    ) -> NeurolumeResult<()> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.initialize(mesh, config, &mut rng)
    }

    /// Shows or hides the particles. Hidden flows skip `update` entirely.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Advances every particle one frame and rewrites the position buffer.
    ///
    /// Returns how many particles wrapped back to their path start.
    /// Does nothing (and returns 0) if uninitialized or hidden.
    pub fn update(&mut self) -> usize {
        if !self.initialized || !self.visible {
            return 0;
        }

        let mut wrapped = 0;
        for (i, particle) in self.particles.iter_mut().enumerate() {
            if particle.advance() {
                wrapped += 1;
            }
            let p = particle.position();
            self.positions.set_xyz(i, p.x, p.y, p.z);
        }
        self.positions.mark_needs_update();
        wrapped
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// The particle in slot `id`, if it exists.
    pub fn particle(&self, id: ParticleId) -> Option<&Particle> {
        self.particles.get(id.index())
    }

    /// Flat `[x0, y0, z0, x1, ...]` particle positions.
    pub fn positions(&self) -> &AttributeBuffer {
        &self.positions
    }

    /// Mutable access so the renderer can clear the dirty flag after upload.
    pub fn positions_mut(&mut self) -> &mut AttributeBuffer {
        &mut self.positions
    }

    /// Largest distance of any current particle position from the origin.
    pub fn max_radius(&self) -> f32 {
        (0..self.positions.count())
            .map(|i| Vec3::from(self.positions.get_xyz(i)).length())
            .fold(0.0f32, f32::max)
    }

    /// Radius of an origin-centered sphere containing every particle path.
    ///
    /// `max_radius()` never exceeds this, whatever the current progress.
    pub fn path_bound(&self) -> f32 {
        self.particles
            .iter()
            .map(|p| p.path.hull_radius())
            .fold(0.0f32, f32::max)
    }
}

impl Default for ParticleFlow {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds the curve from `start` to `end`, with the control point pushed
/// outward from the mesh origin by `arc_height * |end - start|`.
pub fn arched_path(start: Vec3, end: Vec3, arc_height: f32) -> QuadraticBezier {
    let mid = (start + end) * 0.5;
    let outward = mid.normalize_or_zero();
    let control = mid + outward * (arc_height * start.distance(end));
    QuadraticBezier::new(start, control, end)
}
