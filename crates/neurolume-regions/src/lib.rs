//! # neurolume-regions
//!
//! Highlights anatomical regions on a brain mesh by painting per-vertex
//! colors. Each region is a sphere zone; vertices inside the active zone
//! blend from the base color toward the active color as they approach
//! the zone center.
//!
//! ## Key Types
//!
//! - [`ZoneTable`]: Immutable, ordered name → sphere lookup (injected).
//! - [`Falloff`]: How normalized distance maps to highlight intensity.
//! - [`Palette`]: Base and active colors.
//! - [`RegionPainter`]: Owns the mesh and repaints it on request.

pub mod falloff;
pub mod painter;
pub mod palette;
pub mod zone;

pub use falloff::Falloff;
pub use painter::{PaintReport, RegionPainter};
pub use palette::Palette;
pub use zone::{is_reset_sentinel, RegionZone, ZoneTable};
