//! Target planes that receive a projected shadow.

use nalgebra::{Point2, Point3, Vector3};
use serde::{Deserialize, Serialize};

use crate::projector::project_point;

/// How points lying on a [`ShadowPlane`] are mapped to 2D coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaneFrame {
    /// Reuse the ambient `(x, y)` coordinates of the projected point.
    ///
    /// Only meaningful for planes whose normal is parallel to the z axis;
    /// for any other plane the result is a parallel projection onto z = 0.
    #[default]
    Ambient,
    /// Express the point in an orthonormal basis of the plane, relative to
    /// the plane origin.
    Local,
}

/// A plane a shadow is cast onto: a point it passes through and a normal.
///
/// The normal is stored as given. Projection is invariant to its length, and
/// only [`PlaneFrame::Local`] normalizes it internally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShadowPlane {
    origin: Point3<f32>,
    normal: Vector3<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

impl ShadowPlane {
    /// Creates a plane through `origin` facing along `normal`.
    pub fn new(origin: Point3<f32>, normal: Vector3<f32>) -> Self {
        Self {
            origin,
            normal,
            name: None,
        }
    }

    /// Attaches a label used in logs and pass output.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Returns the point the plane passes through.
    #[inline]
    pub fn origin(&self) -> Point3<f32> {
        self.origin
    }

    /// Returns the plane normal exactly as it was supplied.
    #[inline]
    pub fn normal(&self) -> Vector3<f32> {
        self.normal
    }

    /// Returns the plane label, if any.
    #[inline]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Centrally projects `vertex` onto the plane from a point light at `light`.
    #[inline]
    pub fn project(&self, vertex: Point3<f32>, light: Point3<f32>) -> Point3<f32> {
        project_point(vertex, light, self.origin, self.normal)
    }

    /// Returns the in-plane axes `(u, v)` used by [`PlaneFrame::Local`].
    ///
    /// Together with the unit normal they form a right-handed frame. A plane
    /// facing +z gets `u = +x` and `v = +y`. A zero normal yields NaN axes.
    pub fn basis(&self) -> (Vector3<f32>, Vector3<f32>) {
        let n = self.normal.normalize();
        let up = if n.y.abs() > 0.9 {
            Vector3::z()
        } else {
            Vector3::y()
        };
        let u = up.cross(&n).normalize();
        let v = n.cross(&u);
        (u, v)
    }

    /// Maps a point on the plane to 2D coordinates in the given frame.
    pub fn to_2d(&self, point: Point3<f32>, frame: PlaneFrame) -> Point2<f32> {
        match frame {
            PlaneFrame::Ambient => Point2::new(point.x, point.y),
            PlaneFrame::Local => {
                let (u, v) = self.basis();
                let offset = point - self.origin;
                Point2::new(offset.dot(&u), offset.dot(&v))
            }
        }
    }

    /// Coordinate of a boundary reference point on the frame's x axis.
    #[inline]
    pub fn boundary_x(&self, reference: Point3<f32>, frame: PlaneFrame) -> f32 {
        self.to_2d(reference, frame).x
    }

    /// Maps 2D frame coordinates back onto the plane.
    ///
    /// In [`PlaneFrame::Ambient`] the z coordinate is solved from the plane
    /// equation, which is non-finite when the normal has no z component.
    pub fn lift(&self, point: Point2<f32>, frame: PlaneFrame) -> Point3<f32> {
        match frame {
            PlaneFrame::Ambient => {
                let n = self.normal;
                let o = self.origin;
                let z = o.z - (n.x * (point.x - o.x) + n.y * (point.y - o.y)) / n.z;
                Point3::new(point.x, point.y, z)
            }
            PlaneFrame::Local => {
                let (u, v) = self.basis();
                self.origin + u * point.x + v * point.y
            }
        }
    }
}
