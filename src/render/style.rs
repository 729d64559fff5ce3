//! Style and hit-test constants, in display-surface pixels
//!
//! The same values drive drawing and pointer hit testing so what the user
//! sees is exactly what they can grab.

/// Radius of a drawn vertex handle, and the pointer hit-test radius
pub const POINT_RADIUS: f32 = 6.0;

/// How close a click must land to an edge to insert a vertex on it
pub const LINE_CLICK_TOLERANCE: f32 = 8.0;

/// Stroke width for the polygon outline and vertex handle rings
pub const OUTLINE_WIDTH: f32 = 2.0;
