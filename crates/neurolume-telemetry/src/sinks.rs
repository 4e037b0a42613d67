//! Pluggable event sinks.
//!
//! Sinks consume events from the bus and process them
//! (log through `tracing`, collect in memory, etc.).

use std::sync::{Arc, Mutex, PoisonError};

use crate::events::{EventKind, SceneEvent};

/// Trait for event consumers.
///
/// Implement this to create custom telemetry outputs.
pub trait EventSink: Send {
    /// Process a single event.
    fn handle(&mut self, event: &SceneEvent);

    /// Called when the scene shuts down. Flush buffers, close files, etc.
    fn finalize(&mut self) {}

    /// Returns a human-readable name for this sink.
    fn name(&self) -> &str;
}

/// Collects events in memory.
///
/// Clone the handle from [`events`](Self::events) before boxing the sink
/// to inspect what was delivered.
#[derive(Default)]
pub struct VecSink {
    events: Arc<Mutex<Vec<SceneEvent>>>,
}

impl VecSink {
    /// Creates an empty vec sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared handle to the collected events.
    pub fn events(&self) -> Arc<Mutex<Vec<SceneEvent>>> {
        Arc::clone(&self.events)
    }
}

impl EventSink for VecSink {
    fn handle(&mut self, event: &SceneEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event.clone());
    }

    fn name(&self) -> &str {
        "vec_sink"
    }
}

/// A sink that logs events using the `tracing` crate.
///
/// Per-frame events (`FrameBegin`, `FrameEnd`, `ParticlesWrapped`) go to
/// `trace`; state changes go to `info`.
#[derive(Debug, Default)]
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for TracingSink {
    fn handle(&mut self, event: &SceneEvent) {
        match &event.kind {
            EventKind::FrameBegin
            | EventKind::FrameEnd { .. }
            | EventKind::ParticlesWrapped { .. } => {
                tracing::trace!(frame = event.frame, event = ?event.kind, "scene_event");
            }
            kind => {
                tracing::info!(frame = event.frame, event = ?kind, "scene_event");
            }
        }
    }

    fn name(&self) -> &str {
        "tracing_sink"
    }
}
