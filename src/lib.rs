//!
//! # shape_raster
//!
//! A 2D path-geometry engine for rasterization support: it flattens vector paths to
//! polylines, answers per-scanline intersection queries for fill rasterization under
//! a winding rule, computes boolean set operations between polygon sets, and widens
//! centerlines into stroke outlines with caps, joins and dash patterns.
//!
//! The engine is purely in-memory geometry: painting coverage onto pixels, color
//! blending and glyph outline extraction live outside this crate. Regions and the
//! paths underneath them are immutable once built, so scanline queries can run from
//! many worker threads at once (the `multithreading` feature adds a rayon-based
//! helper for exactly that).
//!

/// Points, bounds, transforms and the shared comparison/sorting utilities
pub mod geometry;

/// Building paths from drawing commands and flattening beziers to polylines
pub mod path;

/// Scanline intersection queries against closed regions
pub mod scan;

/// Boolean set operations between labelled polygon sets
pub mod clip;

/// Widening centerline paths into stroke outlines
pub mod stroke;

pub use geometry::*;
pub use path::*;
pub use scan::*;
pub use clip::*;
pub use stroke::*;
