//! Clipping projected triangles against a vertical half-plane boundary.

use nalgebra::Point2;

use crate::boundary::{classify_x, Side};
use crate::{Polygon2, Triangle2};

/// How projected triangles are turned into output polygons.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClipMode {
    /// Every triangle is emitted unchanged.
    PassThrough,
    /// Only the part of each triangle with `x >= boundary_x` is kept.
    HalfPlane {
        /// The boundary line `x = boundary_x` in plane 2D coordinates.
        boundary_x: f32,
    },
}

impl ClipMode {
    /// Converts one projected triangle into zero, one or two polygons.
    pub fn apply(&self, triangle: &Triangle2) -> Vec<Polygon2> {
        match *self {
            ClipMode::PassThrough => vec![Polygon2::from(triangle)],
            ClipMode::HalfPlane { boundary_x } => {
                let [a, b, c] = *triangle.vertices();
                clip_triangle(a, b, c, boundary_x)
            }
        }
    }
}

/// Clips triangle `(a, b, c)` against the line `x = boundary_x`, keeping the
/// side where `x >= boundary_x`.
///
/// Output by number of outside vertices:
///
/// - **0**: `[a, b, c]` unchanged.
/// - **1**: two triangles `[n1, in1, in2]` and `[n1, n2, in2]`, where `in1`
///   and `in2` are the inside vertices in `a, b, c` order and `n1`, `n2` are
///   the boundary crossings of edges `in1-out` and `in2-out`.
/// - **2**: one triangle `[n1, n2, in]`, where `n1`, `n2` are the crossings
///   of edges `in-out1` and `in-out2`, outside vertices in `a, b, c` order.
/// - **3**: nothing.
///
/// The second triangle of the one-outside case winds opposite to the input.
pub fn clip_triangle(
    a: Point2<f32>,
    b: Point2<f32>,
    c: Point2<f32>,
    boundary_x: f32,
) -> Vec<Polygon2> {
    let vertices = [a, b, c];

    let mut inside = Vec::with_capacity(3);
    let mut outside = Vec::with_capacity(3);
    for vertex in vertices {
        match classify_x(vertex.x, boundary_x) {
            Side::Inside => inside.push(vertex),
            Side::Outside => outside.push(vertex),
        }
    }

    match (inside.as_slice(), outside.as_slice()) {
        (_, []) => vec![Polygon2::new(vertices.to_vec())],
        (&[in1, in2], &[out1]) => {
            let n1 = intersect_at_x(in1, out1, boundary_x);
            let n2 = intersect_at_x(in2, out1, boundary_x);
            vec![
                Polygon2::new(vec![n1, in1, in2]),
                Polygon2::new(vec![n1, n2, in2]),
            ]
        }
        (&[in1], &[out1, out2]) => {
            let n1 = intersect_at_x(in1, out1, boundary_x);
            let n2 = intersect_at_x(in1, out2, boundary_x);
            vec![Polygon2::new(vec![n1, n2, in1])]
        }
        _ => Vec::new(),
    }
}

/// Point where the segment from `inside` to `outside` reaches `x = boundary_x`.
///
/// Divides by `outside.x - inside.x` without a guard; equal x coordinates
/// give a non-finite result.
#[inline]
pub fn intersect_at_x(inside: Point2<f32>, outside: Point2<f32>, boundary_x: f32) -> Point2<f32> {
    let t = (boundary_x - inside.x) / (outside.x - inside.x);
    inside + (outside - inside) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f32, y: f32) -> Point2<f32> {
        Point2::new(x, y)
    }

    fn make_triangle(a: [f32; 2], b: [f32; 2], c: [f32; 2]) -> Triangle2 {
        Triangle2::new(p(a[0], a[1]), p(b[0], b[1]), p(c[0], c[1]))
    }

    #[test]
    fn all_outside_is_discarded() {
        let out = clip_triangle(p(-3.0, 0.0), p(-2.0, 5.0), p(-1.0, -1.0), 0.0);
        assert!(out.is_empty());
    }

    #[test]
    fn all_inside_is_unchanged() {
        let out = clip_triangle(p(1.0, 0.0), p(0.0, 5.0), p(3.0, -1.0), 0.0);
        assert_eq!(out, vec![Polygon2::new(vec![p(1.0, 0.0), p(0.0, 5.0), p(3.0, -1.0)])]);
    }

    #[test]
    fn vertex_on_boundary_is_inside() {
        let out = clip_triangle(p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0), 0.0);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].vertices(), &[p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0)]);
    }

    #[test]
    fn one_outside_splits_into_two() {
        let out = clip_triangle(p(-2.0, 0.0), p(2.0, 0.0), p(2.0, 2.0), 0.0);
        assert_eq!(
            out,
            vec![
                Polygon2::new(vec![p(0.0, 0.0), p(2.0, 0.0), p(2.0, 2.0)]),
                Polygon2::new(vec![p(0.0, 0.0), p(0.0, 1.0), p(2.0, 2.0)]),
            ]
        );
    }

    #[test]
    fn one_outside_in_middle_position() {
        // b is outside; in1 = a, in2 = c.
        let out = clip_triangle(p(2.0, 0.0), p(-2.0, 1.0), p(2.0, 2.0), 0.0);
        assert_eq!(
            out,
            vec![
                Polygon2::new(vec![p(0.0, 0.5), p(2.0, 0.0), p(2.0, 2.0)]),
                Polygon2::new(vec![p(0.0, 0.5), p(0.0, 1.5), p(2.0, 2.0)]),
            ]
        );
    }

    #[test]
    fn two_outside_keeps_tip() {
        // a inside, b and c outside.
        let out = clip_triangle(p(2.0, 0.0), p(-2.0, 0.0), p(-2.0, 4.0), 0.0);
        assert_eq!(
            out,
            vec![Polygon2::new(vec![p(0.0, 0.0), p(0.0, 2.0), p(2.0, 0.0)])]
        );
    }

    #[test]
    fn two_outside_order_follows_abc() {
        // c inside; out1 = a, out2 = b.
        let out = clip_triangle(p(-2.0, 4.0), p(-2.0, 0.0), p(2.0, 0.0), 0.0);
        assert_eq!(
            out,
            vec![Polygon2::new(vec![p(0.0, 2.0), p(0.0, 0.0), p(2.0, 0.0)])]
        );
    }

    #[test]
    fn intersection_lies_on_boundary() {
        let n = intersect_at_x(p(3.0, 1.0), p(-1.0, 5.0), 1.0);
        assert_eq!(n, p(1.0, 3.0));
    }

    #[test]
    fn pass_through_ignores_boundary() {
        let tri = make_triangle([-5.0, 0.0], [-4.0, 1.0], [-6.0, 2.0]);
        let out = ClipMode::PassThrough.apply(&tri);
        assert_eq!(out, vec![Polygon2::from(tri)]);
    }

    #[test]
    fn half_plane_mode_clips() {
        let tri = make_triangle([-5.0, 0.0], [-4.0, 1.0], [-6.0, 2.0]);
        assert!(ClipMode::HalfPlane { boundary_x: 0.0 }.apply(&tri).is_empty());
        assert_eq!(ClipMode::HalfPlane { boundary_x: -10.0 }.apply(&tri).len(), 1);
    }

    #[test]
    fn nan_vertices_count_as_inside() {
        let out = clip_triangle(p(f32::NAN, 0.0), p(f32::NAN, 1.0), p(f32::NAN, 2.0), 0.0);
        assert_eq!(out.len(), 1);
        assert!(out[0].vertices().iter().all(|v| v.x.is_nan()));
    }
}
