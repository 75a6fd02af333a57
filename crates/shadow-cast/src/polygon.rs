//! Output polygons handed to 2D shape holders.

use nalgebra::Point2;

use crate::Triangle2;

/// A simple polygon in a plane's 2D space, produced by clipping one
/// projected triangle.
///
/// Holds 3 or 4 vertices in the order the clipper emitted them.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon2 {
    vertices: Vec<Point2<f32>>,
}

impl Polygon2 {
    /// Creates a polygon from a list of vertices.
    ///
    /// # Panics (debug builds only)
    /// Panics if the vertex count is not 3 or 4.
    pub fn new(vertices: Vec<Point2<f32>>) -> Self {
        debug_assert!(
            (3..=4).contains(&vertices.len()),
            "Shadow polygon must have 3 or 4 vertices"
        );
        Self { vertices }
    }

    /// Returns the vertices of the polygon.
    #[inline]
    pub fn vertices(&self) -> &[Point2<f32>] {
        &self.vertices
    }

    /// Consumes the polygon, returning its vertex path.
    #[inline]
    pub fn into_vertices(self) -> Vec<Point2<f32>> {
        self.vertices
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true if the polygon has no vertices (always false for valid polygons).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Signed area by the shoelace formula; positive for counter-clockwise
    /// winding.
    pub fn signed_area(&self) -> f32 {
        let n = self.vertices.len();
        let twice: f32 = (0..n)
            .map(|i| {
                let p = self.vertices[i];
                let q = self.vertices[(i + 1) % n];
                p.x * q.y - q.x * p.y
            })
            .sum();
        0.5 * twice
    }

    #[inline]
    pub fn area(&self) -> f32 {
        self.signed_area().abs()
    }
}

impl From<Triangle2> for Polygon2 {
    fn from(triangle: Triangle2) -> Self {
        Self {
            vertices: triangle.vertices().to_vec(),
        }
    }
}

impl From<&Triangle2> for Polygon2 {
    fn from(triangle: &Triangle2) -> Self {
        Self {
            vertices: triangle.vertices().to_vec(),
        }
    }
}
