//! Pure domain types with minimal dependencies
//!
//! This module contains the polygon model and the geometry primitives it is
//! built on. Types here have no raster or I/O dependencies so they can be
//! used from session handling, rendering and export without circular imports.

pub mod geometry;
pub mod polygon;

pub use geometry::*;
pub use polygon::*;
