//! Projected triangle in a plane's 2D space.

use nalgebra::Point2;

/// One caster triangle after projection onto a shadow plane.
///
/// Vertex order follows the caster's index order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle2 {
    vertices: [Point2<f32>; 3],
}

impl Triangle2 {
    pub fn new(a: Point2<f32>, b: Point2<f32>, c: Point2<f32>) -> Self {
        Self {
            vertices: [a, b, c],
        }
    }

    /// Returns the three vertices in order.
    #[inline]
    pub fn vertices(&self) -> &[Point2<f32>; 3] {
        &self.vertices
    }

    /// Signed area; positive when the vertices wind counter-clockwise.
    pub fn signed_area(&self) -> f32 {
        let [a, b, c] = &self.vertices;
        let ab = b - a;
        let ac = c - a;
        0.5 * ab.perp(&ac)
    }

    #[inline]
    pub fn area(&self) -> f32 {
        self.signed_area().abs()
    }

    /// Returns `true` if no coordinate is infinite or NaN.
    ///
    /// Projection of a vertex along a ray parallel to the plane produces
    /// non-finite coordinates.
    pub fn is_finite(&self) -> bool {
        self.vertices
            .iter()
            .all(|p| p.x.is_finite() && p.y.is_finite())
    }
}

impl From<[Point2<f32>; 3]> for Triangle2 {
    fn from(vertices: [Point2<f32>; 3]) -> Self {
        Self { vertices }
    }
}
