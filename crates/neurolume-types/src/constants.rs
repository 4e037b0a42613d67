//! Visual defaults and numeric thresholds.

/// Default number of flow particles ("neurons").
pub const DEFAULT_PARTICLE_COUNT: usize = 2000;

/// Lower bound of the per-particle speed range (progress per frame).
pub const DEFAULT_SPEED_MIN: f32 = 0.002;

/// Upper bound (exclusive) of the per-particle speed range.
pub const DEFAULT_SPEED_MAX: f32 = 0.007;

/// Default outward arc height, as a fraction of the start–end distance.
pub const DEFAULT_ARC_HEIGHT: f32 = 0.15;

/// Largest allowed arc height. Higher values let particles leave the silhouette.
pub const MAX_ARC_HEIGHT: f32 = 0.2;

/// Base vertex color (light pink).
pub const DEFAULT_BASE_COLOR: u32 = 0xffb6c1;

/// Highlight color for the active region (deep pink).
pub const DEFAULT_ACTIVE_COLOR: u32 = 0xcc0055;

/// Particle tint (electric cyan).
pub const DEFAULT_PARTICLE_COLOR: u32 = 0x00ffff;

/// Rendered point size of a particle, in world units.
pub const DEFAULT_PARTICLE_SIZE: f32 = 0.05;

/// Region names that clear the highlight instead of selecting a zone.
pub const RESET_SENTINELS: [&str; 2] = ["All", "None"];

/// Total surface area below which a mesh cannot be sampled.
pub const DEGENERATE_AREA_THRESHOLD: f32 = 1.0e-10;
