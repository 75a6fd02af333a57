//! Half-plane boundary used to clip projected shadows.

use nalgebra::Point3;
use serde::{Deserialize, Serialize};

/// Which side of a clip boundary a 2D point lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The point is kept (its x is at or beyond the boundary, or NaN).
    Inside,
    /// The point is discarded (its x is strictly less than the boundary).
    Outside,
}

/// Classifies an x coordinate against a boundary line `x = boundary_x`.
///
/// A point is outside only when `x < boundary_x`. Points on the line are
/// inside, and so is NaN, because every comparison with NaN is false.
#[inline]
pub fn classify_x(x: f32, boundary_x: f32) -> Side {
    if x < boundary_x {
        Side::Outside
    } else {
        Side::Inside
    }
}

/// A clip boundary given by a reference point in world space.
///
/// The boundary line runs through the reference point's coordinate on the
/// target plane's 2D x axis; see [`ShadowPlane::boundary_x`](crate::ShadowPlane::boundary_x).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Boundary {
    reference: Point3<f32>,
}

impl Boundary {
    pub fn new(reference: Point3<f32>) -> Self {
        Self { reference }
    }

    /// A boundary at ambient `x`, for planes using the ambient frame.
    pub fn from_x(x: f32) -> Self {
        Self::new(Point3::new(x, 0.0, 0.0))
    }

    #[inline]
    pub fn reference(&self) -> Point3<f32> {
        self.reference
    }

    /// Returns `true` if every coordinate of the reference point is finite.
    pub fn is_finite(&self) -> bool {
        self.reference.iter().all(|c| c.is_finite())
    }
}

impl From<Point3<f32>> for Boundary {
    fn from(reference: Point3<f32>) -> Self {
        Self::new(reference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strictly_less_is_outside() {
        assert_eq!(classify_x(-0.5, 0.0), Side::Outside);
        assert_eq!(classify_x(0.0, 0.0), Side::Inside);
        assert_eq!(classify_x(0.5, 0.0), Side::Inside);
    }

    #[test]
    fn non_finite_coordinates() {
        assert_eq!(classify_x(f32::NAN, 0.0), Side::Inside);
        assert_eq!(classify_x(f32::NEG_INFINITY, 0.0), Side::Outside);
        assert_eq!(classify_x(f32::INFINITY, 0.0), Side::Inside);
        // A NaN boundary keeps everything.
        assert_eq!(classify_x(-1e30, f32::NAN), Side::Inside);
    }

    #[test]
    fn boundary_from_x() {
        let boundary = Boundary::from_x(2.5);
        assert_eq!(boundary.reference().x, 2.5);
        assert!(boundary.is_finite());
        assert!(!Boundary::new(Point3::new(0.0, f32::NAN, 0.0)).is_finite());
    }
}
