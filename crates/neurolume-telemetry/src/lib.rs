//! # neurolume-telemetry
//!
//! Event bus for scene telemetry. Emits structured events (frame timing,
//! region changes, particle wraps, visibility) that can be consumed by
//! pluggable sinks (tracing logs, in-memory capture, etc.).

pub mod bus;
pub mod events;
pub mod sinks;

pub use bus::EventBus;
pub use events::{EventKind, SceneEvent};
pub use sinks::{EventSink, TracingSink, VecSink};
