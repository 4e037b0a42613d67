//! Integration tests for neurolume-telemetry.

use std::sync::{Arc, PoisonError};

use neurolume_telemetry::{EventBus, EventKind, SceneEvent, TracingSink, VecSink};

#[test]
fn emit_and_flush_delivers_in_order() {
    let mut bus = EventBus::new();
    let sink = VecSink::new();
    let log = sink.events();
    bus.add_sink(Box::new(sink));

    bus.emit(SceneEvent::new(0, EventKind::FrameBegin));
    bus.emit(SceneEvent::new(0, EventKind::FrameEnd { wall_time: 0.001 }));
    assert!(log.lock().unwrap().is_empty());

    bus.flush();
    let events = log.lock().unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].kind, EventKind::FrameBegin);
}

#[test]
fn disabled_bus_drops_events() {
    let mut bus = EventBus::new();
    let sink = VecSink::new();
    let log = sink.events();
    bus.add_sink(Box::new(sink));

    bus.set_enabled(false);
    assert!(!bus.is_enabled());
    bus.emit(SceneEvent::new(0, EventKind::RegionReset));
    bus.flush();
    assert!(log.lock().unwrap().is_empty());
}

#[test]
fn every_sink_sees_every_event() {
    let mut bus = EventBus::new();
    let a = VecSink::new();
    let b = VecSink::new();
    let (log_a, log_b) = (a.events(), b.events());
    bus.add_sink(Box::new(a));
    bus.add_sink(Box::new(b));
    bus.add_sink(Box::new(TracingSink::new()));
    assert_eq!(bus.sink_count(), 3);

    bus.emit(SceneEvent::new(4, EventKind::VisibilityChanged { visible: false }));
    bus.shutdown();
    assert_eq!(log_a.lock().unwrap().len(), 1);
    assert_eq!(log_b.lock().unwrap().len(), 1);
}

#[test]
fn event_serialization() {
    let event = SceneEvent::new(
        12,
        EventKind::RegionHighlighted {
            region: "Cerebellum".into(),
            painted_vertices: 88,
        },
    );
    let json = serde_json::to_string(&event).unwrap();
    assert!(json.contains("Cerebellum"));
    let recovered: SceneEvent = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered, event);
}

#[test]
fn vec_sink_keeps_collecting_after_poisoned_lock() {
    let mut bus = EventBus::new();
    let sink = VecSink::new();
    let log = sink.events();
    bus.add_sink(Box::new(sink));

    let holder = Arc::clone(&log);
    let _ = std::thread::spawn(move || {
        let _guard = holder.lock().unwrap();
        panic!("reader crashed while holding the event log");
    })
    .join();
    assert!(log.is_poisoned());

    bus.emit(SceneEvent::new(1, EventKind::RegionReset));
    bus.flush();
    let events = log.lock().unwrap_or_else(PoisonError::into_inner);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].kind, EventKind::RegionReset);
}
