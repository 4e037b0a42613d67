//! # neurolume-bench
//!
//! Frame-loop driver and benchmark suite for Neurolume scenes.
//!
//! Provides 3 procedural scenarios, a [`SceneDriver`] that advances the
//! painter and particle flow one frame at a time, metric collection,
//! and CSV export for regression tracking.

pub mod driver;
pub mod metrics;
pub mod runner;
pub mod scenarios;

pub use driver::{FrameStats, SceneDriver};
pub use metrics::BenchmarkMetrics;
pub use runner::BenchmarkRunner;
pub use scenarios::{Scenario, ScenarioKind};
