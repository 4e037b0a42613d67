//! # neurolume-render
//!
//! Backend-agnostic rendering seams for Neurolume.
//!
//! The painting and flow algorithms never talk to a GPU. They fill
//! attribute buffers and flag them dirty; a [`Renderer`] picks up the
//! dirty buffers once per frame. This crate provides:
//!
//! - [`Renderer`] with [`HeadlessRenderer`] (discard) and
//!   [`JsonFrameExporter`] (browser viewer playback)
//! - [`PointsMaterial`] describing how particles are drawn
//! - [`SpriteSource`] / [`RadialGlowSprite`] for the soft round particle sprite

pub mod json_exporter;
pub mod material;
pub mod renderer;
pub mod sprite;

pub use json_exporter::JsonFrameExporter;
pub use material::{BlendMode, PointsMaterial};
pub use renderer::{HeadlessRenderer, RenderFrame, Renderer};
pub use sprite::{GradientStop, RadialGlowSprite, SpriteImage, SpriteSource};
