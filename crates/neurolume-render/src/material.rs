//! Particle material description.

use serde::{Deserialize, Serialize};
use neurolume_math::Rgb;
use neurolume_types::constants::{DEFAULT_PARTICLE_COLOR, DEFAULT_PARTICLE_SIZE};

/// How overlapping fragments combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlendMode {
    #[default]
    Normal,
    /// Colors add up, so dense clusters glow.
    Additive,
}

/// Point-sprite material for the particle flow.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointsMaterial {
    /// Tint multiplied with the sprite.
    pub color: Rgb,
    /// Point size in world units.
    pub size: f32,
    pub opacity: f32,
    pub transparent: bool,
    pub blending: BlendMode,
    /// Additive sprites must not occlude each other.
    pub depth_write: bool,
}

impl Default for PointsMaterial {
    fn default() -> Self {
        Self {
            color: Rgb::from_hex(DEFAULT_PARTICLE_COLOR),
            size: DEFAULT_PARTICLE_SIZE,
            opacity: 0.8,
            transparent: true,
            blending: BlendMode::Additive,
            depth_write: false,
        }
    }
}
