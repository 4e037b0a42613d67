//! Integration tests for neurolume-flow.

use rand::rngs::StdRng;
use rand::SeedableRng;

use neurolume_math::{QuadraticBezier, Vec3};
use neurolume_mesh::generators::{quad_grid, uv_sphere};
use neurolume_mesh::TriangleMesh;
use neurolume_flow::{arched_path, FlowConfig, Particle, ParticleFlow};
use neurolume_types::{NeurolumeError, ParticleId};

fn rng() -> StdRng {
    StdRng::seed_from_u64(2024)
}

fn small_config() -> FlowConfig {
    FlowConfig {
        particle_count: 300,
        ..Default::default()
    }
}

fn initialized_flow(config: &FlowConfig) -> ParticleFlow {
    let mesh = uv_sphere(2.0, 12, 24);
    let mut flow = ParticleFlow::new();
    flow.initialize(&mesh, config, &mut rng()).unwrap();
    flow
}

// ─── Config Tests ─────────────────────────────────────────────

#[test]
fn default_config_is_valid() {
    let config = FlowConfig::default();
    assert_eq!(config.particle_count, 2000);
    assert!(config.validate().is_ok());
    assert!((config.mean_speed() - 0.0045).abs() < 1e-6);
    assert_eq!(config.frames_per_guaranteed_lap(), 501);
}

#[test]
fn config_rejects_out_of_range_values() {
    let bad = [
        FlowConfig { particle_count: 0, ..Default::default() },
        FlowConfig { speed_min: 0.0, ..Default::default() },
        FlowConfig { speed_min: 0.01, speed_max: 0.005, ..Default::default() },
        FlowConfig { speed_max: 1.5, ..Default::default() },
        FlowConfig { arc_height: 0.5, ..Default::default() },
        FlowConfig { arc_height: -0.1, ..Default::default() },
        FlowConfig { arc_height: f32::NAN, ..Default::default() },
    ];
    for config in bad {
        assert!(
            matches!(config.validate(), Err(NeurolumeError::InvalidConfig(_))),
            "accepted {:?}",
            config
        );
    }
}

#[test]
fn lap_bound_saturates_for_tiny_speeds() {
    let config = FlowConfig {
        speed_min: 1e-10,
        speed_max: 1e-9,
        ..Default::default()
    };
    assert!(config.validate().is_ok());
    assert_eq!(config.frames_per_guaranteed_lap(), u32::MAX);
}

#[test]
fn config_from_partial_json() {
    let config: FlowConfig = serde_json::from_str(r#"{"particle_count": 50, "seed": 9}"#).unwrap();
    assert_eq!(config.particle_count, 50);
    assert_eq!(config.seed, Some(9));
    assert_eq!(config.speed_max, FlowConfig::default().speed_max);
}

// ─── Particle Tests ───────────────────────────────────────────

#[test]
fn particle_wraps_to_zero() {
    let path = QuadraticBezier::new(Vec3::ZERO, Vec3::Y, Vec3::X);
    let mut p = Particle::new(path, 0.95, 0.05);
    assert!(p.advance());
    assert_eq!(p.progress, 0.0);
    assert_eq!(p.laps, 1);
    assert_eq!(p.position(), Vec3::ZERO);
}

#[test]
fn arched_path_pushes_control_outward() {
    let start = Vec3::new(1.0, 0.0, 0.0);
    let end = Vec3::new(0.0, 1.0, 0.0);
    let path = arched_path(start, end, 0.2);
    let mid = (start + end) * 0.5;
    let offset = path.control - mid;
    // Offset is along the mid direction with length 0.2 * |end - start|.
    assert!((offset.length() - 0.2 * 2f32.sqrt()).abs() < 1e-5);
    assert!(offset.normalize().dot(mid.normalize()) > 0.9999);
}

#[test]
fn arched_path_through_origin_has_no_offset() {
    let path = arched_path(Vec3::new(-1.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0), 0.2);
    assert_eq!(path.control, Vec3::ZERO);
}

// ─── Initialization Tests ─────────────────────────────────────

#[test]
fn initialize_allocates_fixed_buffers() {
    let flow = initialized_flow(&small_config());
    assert!(flow.is_initialized());
    assert!(flow.is_visible());
    assert_eq!(flow.particle_count(), 300);
    assert_eq!(flow.positions().count(), 300);
    assert_eq!(flow.positions().item_size(), 3);
    assert!(flow.positions().needs_update());
    assert!(flow.particle(ParticleId(299)).is_some());
    assert!(flow.particle(ParticleId(300)).is_none());
}

#[test]
fn initial_state_is_staggered_and_in_range() {
    let config = small_config();
    let flow = initialized_flow(&config);
    let mut distinct = flow.particles().iter().map(|p| p.progress.to_bits()).collect::<Vec<_>>();
    distinct.sort_unstable();
    distinct.dedup();
    assert!(distinct.len() > 250, "progress values should be staggered");

    for p in flow.particles() {
        assert!((0.0..1.0).contains(&p.progress));
        assert!(p.speed >= config.speed_min && p.speed < config.speed_max);
    }
}

#[test]
fn path_endpoints_lie_on_sphere_surface() {
    let flow = initialized_flow(&small_config());
    for p in flow.particles() {
        // Points on flat facets sit slightly inside the true sphere.
        assert!(p.path.start.length() <= 2.0 + 1e-4);
        assert!(p.path.start.length() > 1.9);
        assert!(p.path.end.length() <= 2.0 + 1e-4);
        assert!(p.path.end.length() > 1.9);
    }
}

#[test]
fn same_seed_same_paths() {
    let a = initialized_flow(&small_config());
    let b = initialized_flow(&small_config());
    assert_eq!(a.particles(), b.particles());
}

#[test]
fn initialize_from_config_uses_seed() {
    let mesh = uv_sphere(1.0, 8, 16);
    let config = FlowConfig::preview();
    let mut a = ParticleFlow::new();
    let mut b = ParticleFlow::new();
    a.initialize_from_config(&mesh, &config).unwrap();
    b.initialize_from_config(&mesh, &config).unwrap();
    assert_eq!(a.particles(), b.particles());
    assert_eq!(a.particle_count(), 200);
}

#[test]
fn degenerate_meshes_are_rejected() {
    let mut flow = ParticleFlow::new();
    let empty = TriangleMesh::with_capacity(0, 0);
    assert!(matches!(
        flow.initialize(&empty, &small_config(), &mut rng()),
        Err(NeurolumeError::DegenerateMesh(_))
    ));

    let flat = TriangleMesh::from_interleaved(&[0.0; 9], &[]).unwrap();
    assert!(flow.initialize(&flat, &small_config(), &mut rng()).is_err());
    assert!(!flow.is_initialized());
    assert_eq!(flow.update(), 0);
}

// ─── Update Tests ─────────────────────────────────────────────

#[test]
fn update_before_initialize_is_noop() {
    let mut flow = ParticleFlow::new();
    assert_eq!(flow.update(), 0);
    assert!(flow.positions().is_empty());
}

#[test]
fn progress_stays_in_unit_interval() {
    let mut flow = initialized_flow(&small_config());
    for _ in 0..1_200 {
        flow.update();
        for p in flow.particles() {
            assert!(p.progress >= 0.0 && p.progress < 1.0, "progress {}", p.progress);
        }
    }
}

#[test]
fn emitted_position_equals_curve_at_progress() {
    let mut flow = initialized_flow(&small_config());
    for _ in 0..37 {
        flow.update();
    }
    for (i, p) in flow.particles().iter().enumerate() {
        let expected = p.path.point(p.progress);
        assert_eq!(flow.positions().get_xyz(i), expected.to_array());
    }
}

#[test]
fn update_marks_positions_dirty() {
    let mut flow = initialized_flow(&small_config());
    flow.positions_mut().take_needs_update();
    flow.update();
    assert!(flow.positions().needs_update());
}

#[test]
fn hidden_flow_does_no_work() {
    let mut flow = initialized_flow(&small_config());
    flow.positions_mut().take_needs_update();
    let before = flow.positions().clone();
    let progress_before: Vec<f32> = flow.particles().iter().map(|p| p.progress).collect();

    flow.set_visible(false);
    for _ in 0..50 {
        assert_eq!(flow.update(), 0);
    }
    assert_eq!(flow.positions(), &before);
    assert!(!flow.positions().needs_update());
    let progress_after: Vec<f32> = flow.particles().iter().map(|p| p.progress).collect();
    assert_eq!(progress_before, progress_after);

    flow.set_visible(true);
    flow.update();
    assert_ne!(flow.positions(), &before);
}

#[test]
fn every_particle_laps_and_stays_near_surface() {
    let radius = 3.0;
    let mesh = uv_sphere(radius, 16, 32);
    let config = FlowConfig::default();
    let mut flow = ParticleFlow::new();
    flow.initialize(&mesh, &config, &mut rng()).unwrap();
    assert_eq!(flow.particle_count(), 2000);

    let bound = mesh.bounding_radius() * (1.0 + 2.0 * config.arc_height) + 1e-4;
    let mut total_wraps = 0;
    for _ in 0..config.frames_per_guaranteed_lap() {
        total_wraps += flow.update();
        assert!(flow.max_radius() <= bound);
        assert!(flow.max_radius() <= flow.path_bound() + 1e-5);
    }
    assert!(flow.path_bound() <= bound);
    assert!(flow.particles().iter().all(|p| p.laps >= 1));
    let laps: u32 = flow.particles().iter().map(|p| p.laps).sum();
    assert_eq!(laps as usize, total_wraps);
}

#[test]
fn flat_mesh_paths_stay_in_plane_bounds() {
    // On a plane through the origin, outward offsets stay in-plane.
    let mesh = quad_grid(4, 4, 2.0, 2.0);
    let mut flow = ParticleFlow::new();
    flow.initialize(&mesh, &small_config(), &mut rng()).unwrap();
    for _ in 0..100 {
        flow.update();
    }
    for i in 0..flow.particle_count() {
        let [_, _, z] = flow.positions().get_xyz(i);
        assert_eq!(z, 0.0);
    }
}
