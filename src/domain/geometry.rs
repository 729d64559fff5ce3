//! Point primitives and distance helpers for hit testing

/// A position on the display surface, origin top-left, in surface pixels
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a new point from surface coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Euclidean distance between two points
pub fn distance(a: Point, b: Point) -> f32 {
    (a.x - b.x).hypot(a.y - b.y)
}

/// Shortest distance from `p` to the segment from `v` to `w`
///
/// Projects `p` onto the line through `v` and `w`, clamps the projection to
/// the segment, and measures to the clamped point. A degenerate segment
/// (`v == w`) falls back to the plain point distance.
pub fn distance_to_segment(p: Point, v: Point, w: Point) -> f32 {
    let l2 = (v.x - w.x).powi(2) + (v.y - w.y).powi(2);
    if l2 == 0.0 {
        return distance(p, v);
    }
    let t = ((p.x - v.x) * (w.x - v.x) + (p.y - v.y) * (w.y - v.y)) / l2;
    let t = t.clamp(0.0, 1.0);
    let nearest = Point::new(v.x + t * (w.x - v.x), v.y + t * (w.y - v.y));
    distance(p, nearest)
}
