//! Integration tests for neurolume-bench.

use neurolume_bench::driver::SceneDriver;
use neurolume_bench::metrics::BenchmarkMetrics;
use neurolume_bench::runner::BenchmarkRunner;
use neurolume_bench::scenarios::{Scenario, ScenarioKind};
use neurolume_render::{HeadlessRenderer, Renderer};
use neurolume_telemetry::{EventBus, EventKind, VecSink};

// ─── Scenario Tests ───────────────────────────────────────────

#[test]
fn brain_ellipsoid_setup() {
    let s = Scenario::brain_ellipsoid();
    assert_eq!(s.kind, ScenarioKind::BrainEllipsoid);
    assert_eq!(s.region_cycle.len(), 9); // 8 zones + "All"
    assert_eq!(s.region_cycle.last().map(String::as_str), Some("All"));
    assert_eq!(s.frames, 540);
    assert!(s.mesh.validate().is_ok());
}

#[test]
fn all_scenarios() {
    assert_eq!(ScenarioKind::all().len(), 3);
    for &kind in ScenarioKind::all() {
        assert_eq!(ScenarioKind::from_name(kind.name()), Some(kind));
        assert_eq!(Scenario::from_kind(kind).kind, kind);
    }
    assert_eq!(ScenarioKind::from_name("nope"), None);
}

#[test]
fn region_cycle_switches_on_schedule() {
    let s = Scenario::unit_sphere();
    assert_eq!(s.region_for_frame(0), Some("North"));
    assert_eq!(s.region_for_frame(29), Some("North"));
    assert_eq!(s.region_for_frame(30), Some("South"));
    assert_eq!(s.region_for_frame(60), Some("None"));
    assert_eq!(s.region_for_frame(90), Some("North"));

    let mut empty = Scenario::unit_sphere();
    empty.region_cycle.clear();
    assert_eq!(empty.region_for_frame(10), None);
}

// ─── Driver Tests ─────────────────────────────────────────────

fn unit_driver(bus: &EventBus) -> SceneDriver {
    let s = Scenario::unit_sphere();
    SceneDriver::new(&s.config, s.mesh, bus).unwrap()
}

#[test]
fn driver_emits_initialization_events() {
    let mut bus = EventBus::new();
    let sink = VecSink::new();
    let log = sink.events();
    bus.add_sink(Box::new(sink));

    let driver = unit_driver(&bus);
    bus.flush();

    assert!(driver.painter().is_initialized());
    assert!(driver.flow().is_initialized());
    let events = log.lock().unwrap();
    assert!(matches!(
        events[0].kind,
        EventKind::PainterInitialized { zone_count: 2, .. }
    ));
    assert!(matches!(
        events[1].kind,
        EventKind::FlowInitialized { particle_count: 200, .. }
    ));
}

#[test]
fn driver_repaints_only_on_region_change() {
    let bus = EventBus::new();
    let mut driver = unit_driver(&bus);
    let mut renderer = HeadlessRenderer::new();
    driver.attach(&mut renderer).unwrap();

    let first = driver.step(Some("North"), &mut renderer, &bus).unwrap();
    assert!(first.repainted);
    assert_eq!(driver.painter().active_region(), Some("North"));
    assert_eq!(renderer.color_uploads(), 1);

    let second = driver.step(Some("North"), &mut renderer, &bus).unwrap();
    assert!(!second.repainted);
    assert_eq!(renderer.color_uploads(), 1);

    let third = driver.step(None, &mut renderer, &bus).unwrap();
    assert!(!third.repainted);

    let fourth = driver.step(Some("All"), &mut renderer, &bus).unwrap();
    assert!(fourth.repainted);
    assert_eq!(driver.painter().active_region(), None);
    assert_eq!(renderer.color_uploads(), 2);

    assert_eq!(renderer.particle_uploads(), 4);
    assert_eq!(renderer.frame_count(), 4);
    assert_eq!(driver.frame(), 4);
}

#[test]
fn hidden_particles_skip_uploads() {
    let mut bus = EventBus::new();
    let sink = VecSink::new();
    let log = sink.events();
    bus.add_sink(Box::new(sink));

    let mut driver = unit_driver(&bus);
    let mut renderer = HeadlessRenderer::new();
    driver.step(None, &mut renderer, &bus).unwrap();
    assert_eq!(renderer.particle_uploads(), 1);

    driver.set_visible(false, &bus);
    driver.set_visible(false, &bus); // no second event
    for _ in 0..10 {
        let stats = driver.step(None, &mut renderer, &bus).unwrap();
        assert_eq!(stats.wrapped, 0);
    }
    assert_eq!(renderer.particle_uploads(), 1);

    bus.flush();
    let toggles = log
        .lock()
        .unwrap()
        .iter()
        .filter(|e| matches!(e.kind, EventKind::VisibilityChanged { .. }))
        .count();
    assert_eq!(toggles, 1);
}

// ─── Runner Tests ─────────────────────────────────────────────

#[test]
fn run_unit_sphere() {
    let scenario = Scenario::unit_sphere();
    let mut renderer = HeadlessRenderer::new();
    let mut bus = EventBus::new();
    let sink = VecSink::new();
    let log = sink.events();
    bus.add_sink(Box::new(sink));

    let metrics = BenchmarkRunner::run(&scenario, &mut renderer, &mut bus).unwrap();

    assert_eq!(metrics.scenario, "unit_sphere");
    assert_eq!(metrics.frames, 120);
    assert_eq!(metrics.particle_count, 200);
    assert_eq!(metrics.repaints, 4); // North, South, None, North
    assert!(metrics.total_wraps > 0);
    assert!(metrics.min_frame_time <= metrics.max_frame_time);
    assert!(metrics.max_particle_radius <= 1.0 * (1.0 + 2.0 * 0.15) + 1e-4);
    assert_eq!(renderer.frame_count(), 120);

    let begins = log
        .lock()
        .unwrap()
        .iter()
        .filter(|e| e.kind == EventKind::FrameBegin)
        .count();
    assert_eq!(begins, 120);
}

#[test]
fn zero_frame_run() {
    let mut scenario = Scenario::unit_sphere();
    scenario.frames = 0;
    let mut renderer = HeadlessRenderer::new();
    let mut bus = EventBus::new();
    let metrics = BenchmarkRunner::run(&scenario, &mut renderer, &mut bus).unwrap();
    assert_eq!(metrics.frames, 0);
    assert_eq!(metrics.avg_frame_time, 0.0);
    assert_eq!(metrics.min_frame_time, 0.0);
    assert_eq!(metrics.total_wraps, 0);
}

#[test]
fn invalid_scenario_config_fails() {
    let mut scenario = Scenario::unit_sphere();
    scenario.config.flow.particle_count = 0;
    let mut renderer = HeadlessRenderer::new();
    let mut bus = EventBus::new();
    assert!(BenchmarkRunner::run(&scenario, &mut renderer, &mut bus).is_err());
}

// ─── Metrics Tests ────────────────────────────────────────────

#[test]
fn csv_columns_line_up() {
    let mut scenario = Scenario::unit_sphere();
    scenario.frames = 5;
    let mut renderer = HeadlessRenderer::new();
    let mut bus = EventBus::new();
    let metrics = BenchmarkRunner::run(&scenario, &mut renderer, &mut bus).unwrap();

    let csv = BenchmarkMetrics::to_csv(&[metrics.clone(), metrics]);
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 3);
    let header_cols = lines[0].split(',').count();
    assert_eq!(header_cols, 13);
    for line in &lines[1..] {
        assert_eq!(line.split(',').count(), header_cols);
        assert!(line.starts_with("unit_sphere,"));
    }
}
