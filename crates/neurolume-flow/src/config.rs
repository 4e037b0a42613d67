//! Particle flow configuration.
//!
//! Parameters that control how many particles exist, how fast they
//! move, and how far their paths arch away from the surface.

use serde::{Deserialize, Serialize};
use neurolume_types::constants::{
    DEFAULT_ARC_HEIGHT, DEFAULT_PARTICLE_COUNT, DEFAULT_SPEED_MAX, DEFAULT_SPEED_MIN,
    MAX_ARC_HEIGHT,
};
use neurolume_types::{NeurolumeError, NeurolumeResult};

/// Configuration for a [`ParticleFlow`](crate::ParticleFlow).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowConfig {
    /// Number of particles. Fixed for the lifetime of the flow.
    pub particle_count: usize,

    /// Smallest per-frame progress increment.
    pub speed_min: f32,

    /// Largest per-frame progress increment (exclusive).
    pub speed_max: f32,

    /// Outward offset of each path's control point, as a fraction of the
    /// start–end distance. Bounded by [`MAX_ARC_HEIGHT`].
    pub arc_height: f32,

    /// RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            speed_min: DEFAULT_SPEED_MIN,
            speed_max: DEFAULT_SPEED_MAX,
            arc_height: DEFAULT_ARC_HEIGHT,
            seed: None,
        }
    }
}

impl FlowConfig {
    /// A small, deterministic config for previews and tests.
    pub fn preview() -> Self {
        Self {
            particle_count: 200,
            seed: Some(0x5eed),
            ..Default::default()
        }
    }

    /// Checks that every parameter is in range.
    pub fn validate(&self) -> NeurolumeResult<()> {
        if self.particle_count == 0 {
            return Err(NeurolumeError::InvalidConfig(
                "particle_count must be >= 1".into(),
            ));
        }
        if !(self.speed_min.is_finite() && self.speed_max.is_finite()) {
            return Err(NeurolumeError::InvalidConfig(
                "Speed range must be finite".into(),
            ));
        }
        if self.speed_min <= 0.0 {
            return Err(NeurolumeError::InvalidConfig(format!(
                "speed_min must be positive, got {}",
                self.speed_min
            )));
        }
        if self.speed_max < self.speed_min {
            return Err(NeurolumeError::InvalidConfig(format!(
                "speed_max ({}) < speed_min ({})",
                self.speed_max, self.speed_min
            )));
        }
        if self.speed_max > 1.0 {
            return Err(NeurolumeError::InvalidConfig(format!(
                "speed_max ({}) > 1.0 would skip whole paths per frame",
                self.speed_max
            )));
        }
        if !(0.0..=MAX_ARC_HEIGHT).contains(&self.arc_height) {
            return Err(NeurolumeError::InvalidConfig(format!(
                "arc_height must be within [0, {}], got {}",
                MAX_ARC_HEIGHT, self.arc_height
            )));
        }
        Ok(())
    }

    /// Mean per-frame speed.
    pub fn mean_speed(&self) -> f32 {
        0.5 * (self.speed_min + self.speed_max)
    }

    /// Frames after which every particle has completed at least one lap.
    ///
    /// One frame of slack absorbs rounding in the accumulated progress.
    pub fn frames_per_guaranteed_lap(&self) -> u32 {
        ((1.0 / self.speed_min).ceil() as u32).saturating_add(1)
    }
}
