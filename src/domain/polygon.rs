//! Editable polygon: an ordered vertex loop with a 3-vertex floor
//!
//! Vertex order is edge order: edge `i` runs from vertex `i` to vertex
//! `(i + 1) % n`, closing the loop. All mutation goes through the methods
//! here so the minimum-size invariant can never be broken.

use super::geometry::{self, Point};

/// Fewest vertices a polygon may have
pub const MIN_VERTICES: usize = 3;

/// Default octagon, as offsets from the surface center
const DEFAULT_SHAPE: [(f32, f32); 8] = [
    (-75.0, -50.0),
    (-25.0, -70.0),
    (25.0, -60.0),
    (75.0, -30.0),
    (65.0, 50.0),
    (25.0, 70.0),
    (-25.0, 60.0),
    (-65.0, 20.0),
];

/// A rejected polygon mutation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PolygonError {
    /// The mutation would leave fewer than [`MIN_VERTICES`] vertices
    MinimumVertices,
}

impl std::fmt::Display for PolygonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PolygonError::MinimumVertices => {
                write!(f, "a polygon needs at least {MIN_VERTICES} vertices")
            }
        }
    }
}

impl std::error::Error for PolygonError {}

/// Ordered vertex loop defining the clip region
///
/// The default value is empty and stands for "no polygon yet"; a real
/// polygon only exists once [`Polygon::new`] or [`Polygon::from_vertices`]
/// has run, and from then on always has at least [`MIN_VERTICES`] vertices.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    /// Default octagon centered on a surface of the given size
    pub fn new(surface_w: u32, surface_h: u32) -> Self {
        let cx = surface_w as f32 / 2.0;
        let cy = surface_h as f32 / 2.0;
        let vertices = DEFAULT_SHAPE
            .iter()
            .map(|&(dx, dy)| Point::new(cx + dx, cy + dy))
            .collect();
        Self { vertices }
    }

    /// Build a polygon from an explicit vertex loop
    ///
    /// Rejected when fewer than [`MIN_VERTICES`] vertices are given.
    pub fn from_vertices(vertices: Vec<Point>) -> Result<Self, PolygonError> {
        if vertices.len() < MIN_VERTICES {
            return Err(PolygonError::MinimumVertices);
        }
        Ok(Self { vertices })
    }

    /// Read-only view of the vertex sequence
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Number of vertices
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// True before any polygon has been initialized
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// First vertex strictly closer than `radius` to `p`
    ///
    /// Scans in sequence order, so the earliest index wins when several
    /// vertices are in range.
    pub fn find_vertex_near(&self, p: Point, radius: f32) -> Option<usize> {
        self.vertices
            .iter()
            .position(|&v| geometry::distance(p, v) < radius)
    }

    /// First edge strictly closer than `tolerance` to `p`
    ///
    /// Edge `i` runs from vertex `i` to vertex `(i + 1) % n`, so the closing
    /// edge back to vertex 0 is hit-tested too. Earliest edge index wins.
    pub fn find_edge_near(&self, p: Point, tolerance: f32) -> Option<usize> {
        let n = self.vertices.len();
        (0..n).find(|&i| {
            let v = self.vertices[i];
            let w = self.vertices[(i + 1) % n];
            geometry::distance_to_segment(p, v, w) < tolerance
        })
    }

    /// Insert a new vertex immediately after `index`, shifting the rest
    ///
    /// Panics when `index` is out of bounds; callers obtain indices from the
    /// `find_*` hit tests, which only hand out valid ones.
    pub fn insert_after(&mut self, index: usize, p: Point) {
        self.vertices.insert(index + 1, p);
    }

    /// Remove the vertex at `index`
    ///
    /// Rejected with [`PolygonError::MinimumVertices`] when the polygon is
    /// already at the floor; the sequence is left untouched. Panics when
    /// `index` is out of bounds.
    pub fn remove_at(&mut self, index: usize) -> Result<(), PolygonError> {
        if self.vertices.len() <= MIN_VERTICES {
            return Err(PolygonError::MinimumVertices);
        }
        self.vertices.remove(index);
        Ok(())
    }

    /// Overwrite the position of the vertex at `index`
    ///
    /// Panics when `index` is out of bounds.
    pub fn move_vertex(&mut self, index: usize, p: Point) {
        self.vertices[index] = p;
    }
}
