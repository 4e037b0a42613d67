//! # neurolume-io
//!
//! Scene configuration contract and input validation.
//!
//! Defines the boundary types that external systems (CLI, asset pipeline,
//! a host page) use to configure the region painter and particle flow.

pub mod contract;
pub mod validator;

pub use contract::{load_mesh, PainterSettings, SceneConfig};
pub use validator::{validate_config, validate_mesh, validate_path, ValidatedInput};
