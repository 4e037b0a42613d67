//! Scene event types.
//!
//! Structured events emitted by the frame driver. Events are lightweight
//! value types that carry just enough data to be useful for monitoring
//! and debugging.

use serde::{Deserialize, Serialize};

/// A scene event, tagged with the frame it occurred in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneEvent {
    /// Frame number (0-indexed).
    pub frame: u32,
    /// Event payload.
    pub kind: EventKind,
}

/// Event payload variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EventKind {
    /// Frame started.
    FrameBegin,

    /// Frame completed.
    FrameEnd {
        /// Wall-clock time for the whole frame (seconds).
        wall_time: f64,
    },

    /// Region painter took ownership of a mesh.
    PainterInitialized {
        vertex_count: u32,
        zone_count: u32,
    },

    /// A zone was painted.
    RegionHighlighted {
        region: String,
        /// Vertices strictly inside the zone.
        painted_vertices: u32,
    },

    /// Vertex colors were restored to the base color.
    RegionReset,

    /// Particle paths were sampled.
    FlowInitialized {
        particle_count: u32,
        /// Total sampled surface area.
        surface_area: f64,
    },

    /// Particles that looped back to their path start this frame.
    ParticlesWrapped { count: u32 },

    /// Particle visibility toggled.
    VisibilityChanged { visible: bool },

    /// Custom event for extensibility.
    Custom {
        /// Arbitrary label.
        label: String,
        /// JSON-encoded payload.
        payload: String,
    },
}

impl SceneEvent {
    /// Creates a new event for the given frame.
    pub fn new(frame: u32, kind: EventKind) -> Self {
        Self { frame, kind }
    }
}
