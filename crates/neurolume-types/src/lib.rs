//! # neurolume-types
//!
//! Shared types, identifiers, error types, and default constants
//! for the Neurolume brain visualization core.
//!
//! This crate has zero domain logic: it defines the vocabulary
//! that all other Neurolume crates share.

pub mod constants;
pub mod error;
pub mod ids;

pub use error::{NeurolumeError, NeurolumeResult};
pub use ids::{ParticleId, TriangleId};
