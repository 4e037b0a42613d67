//! # neurolume-flow
//!
//! Animated "neuron" particles that travel across a mesh surface.
//!
//! Each particle follows a fixed quadratic Bézier path between two
//! area-weighted random surface points, arched slightly outward, and
//! loops back to the start when it reaches the end.
//!
//! ```text
//! let mut flow = ParticleFlow::new();
//! flow.initialize(&mesh, &FlowConfig::default(), &mut rng)?;
//! loop {
//!     flow.update();               // once per rendered frame
//!     upload(flow.positions());
//! }
//! ```

pub mod config;
pub mod flow;
pub mod particle;

pub use config::FlowConfig;
pub use flow::{arched_path, ParticleFlow};
pub use particle::Particle;
