//! Central projection of caster geometry onto shadow planes.

use nalgebra::{Point2, Point3, Vector3};

use crate::{Caster, PlaneFrame, ShadowPlane, Triangle2};

/// Projects `vertex` onto a plane along the ray from a point light.
///
/// The ray starts at `light` and passes through `vertex`; the result is where
/// its extension meets the plane through `plane_point` with normal
/// `plane_normal`. The parameter is measured from the vertex, so a plane
/// lying between the light and the vertex still yields its intersection.
///
/// When the ray is parallel to the plane, or the vertex coincides with the
/// light, the denominator is zero and the returned coordinates are infinite
/// or NaN. No attempt is made to detect this.
#[inline]
pub fn project_point(
    vertex: Point3<f32>,
    light: Point3<f32>,
    plane_point: Point3<f32>,
    plane_normal: Vector3<f32>,
) -> Point3<f32> {
    let direction = vertex - light;
    let t = (plane_point - vertex).dot(&plane_normal) / direction.dot(&plane_normal);
    vertex + direction * t
}

/// Projects `vertex` onto `plane` and expresses the result in `frame`.
#[inline]
pub fn project_point_2d(
    vertex: Point3<f32>,
    light: Point3<f32>,
    plane: &ShadowPlane,
    frame: PlaneFrame,
) -> Point2<f32> {
    plane.to_2d(plane.project(vertex, light), frame)
}

/// Projects the three corners of one caster triangle.
///
/// # Panics
/// Panics if `triangle` is not a valid triangle index of the caster mesh.
pub fn project_triangle(
    caster: &Caster,
    triangle: usize,
    light: Point3<f32>,
    plane: &ShadowPlane,
    frame: PlaneFrame,
) -> Triangle2 {
    let [a, b, c] = caster
        .world_triangle(triangle)
        .map(|vertex| project_point_2d(vertex, light, plane, frame));
    Triangle2::new(a, b, c)
}

/// Projects every triangle of the caster, in index-list order.
///
/// Shared vertices are projected once per referencing corner.
pub fn project_mesh(
    caster: &Caster,
    light: Point3<f32>,
    plane: &ShadowPlane,
    frame: PlaneFrame,
) -> Vec<Triangle2> {
    (0..caster.mesh().triangle_count())
        .map(|i| project_triangle(caster, i, light, plane, frame))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mesh;
    use approx::assert_relative_eq;
    use nalgebra::{Affine3, Matrix4};

    fn z_plane() -> ShadowPlane {
        ShadowPlane::new(Point3::origin(), Vector3::z())
    }

    fn make_caster(vertices: &[[f32; 3]], indices: &[u32]) -> Caster {
        let vertices = vertices
            .iter()
            .map(|v| Point3::new(v[0], v[1], v[2]))
            .collect();
        Caster::new(Mesh::new(vertices, indices.to_vec()).unwrap())
    }

    #[test]
    fn projects_through_vertex_to_plane() {
        let p = project_point(
            Point3::new(1.0, 2.0, 5.0),
            Point3::new(0.0, 0.0, 10.0),
            Point3::origin(),
            Vector3::z(),
        );
        assert_eq!(p, Point3::new(2.0, 4.0, 0.0));
    }

    #[test]
    fn projection_ignores_normal_length() {
        let vertex = Point3::new(0.3, -0.7, 2.0);
        let light = Point3::new(1.0, 1.0, 6.0);
        let unit = project_point(vertex, light, Point3::origin(), Vector3::z());
        let scaled = project_point(vertex, light, Point3::origin(), Vector3::new(0.0, 0.0, -8.0));
        assert_relative_eq!(unit, scaled, epsilon = 1e-6);
    }

    #[test]
    fn projected_point_lies_on_tilted_plane() {
        let plane = ShadowPlane::new(Point3::new(0.0, -1.0, 0.0), Vector3::new(0.0, 1.0, 0.5));
        let p = plane.project(Point3::new(0.5, 1.0, 0.5), Point3::new(0.0, 4.0, 1.0));
        let distance = (p - plane.origin()).dot(&plane.normal());
        assert_relative_eq!(distance, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn vertex_on_plane_maps_to_itself() {
        let vertex = Point3::new(3.0, -1.0, 0.0);
        let p = project_point(vertex, Point3::new(0.0, 0.0, 10.0), Point3::origin(), Vector3::z());
        assert_eq!(p, vertex);
    }

    #[test]
    fn parallel_ray_is_not_finite() {
        // Light and vertex at the same height above a floor.
        let p = project_point(
            Point3::new(1.0, 0.0, 5.0),
            Point3::new(0.0, 0.0, 5.0),
            Point3::origin(),
            Vector3::z(),
        );
        assert!(!p.x.is_finite());
        assert!(!p.z.is_finite());
    }

    #[test]
    fn vertex_at_light_is_nan() {
        let light = Point3::new(0.0, 0.0, 5.0);
        let p = project_point(light, light, Point3::origin(), Vector3::z());
        assert!(p.x.is_nan());
    }

    #[test]
    fn project_mesh_keeps_triangle_order_and_duplicates() {
        // Two triangles sharing an edge.
        let caster = make_caster(
            &[[0.0, 0.0, 5.0], [1.0, 0.0, 5.0], [1.0, 1.0, 5.0], [0.0, 1.0, 5.0]],
            &[0, 1, 2, 0, 2, 3],
        );
        let light = Point3::new(0.0, 0.0, 10.0);
        let triangles = project_mesh(&caster, light, &z_plane(), PlaneFrame::Ambient);

        assert_eq!(triangles.len(), 2);
        assert_eq!(
            triangles[0].vertices(),
            &[Point2::new(0.0, 0.0), Point2::new(2.0, 0.0), Point2::new(2.0, 2.0)]
        );
        assert_eq!(
            triangles[1].vertices(),
            &[Point2::new(0.0, 0.0), Point2::new(2.0, 2.0), Point2::new(0.0, 2.0)]
        );
    }

    #[test]
    fn caster_transform_is_applied_before_projection() {
        let mut caster = make_caster(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]], &[0, 1, 2]);
        caster.set_transform(Affine3::from_matrix_unchecked(Matrix4::new_translation(
            &Vector3::new(0.0, 0.0, 5.0),
        )));

        let tri = project_triangle(
            &caster,
            0,
            Point3::new(0.0, 0.0, 10.0),
            &z_plane(),
            PlaneFrame::Ambient,
        );
        assert_eq!(
            tri.vertices(),
            &[Point2::new(0.0, 0.0), Point2::new(2.0, 0.0), Point2::new(0.0, 2.0)]
        );
    }

    #[test]
    fn empty_mesh_projects_nothing() {
        let caster = make_caster(&[], &[]);
        let triangles = project_mesh(&caster, Point3::new(0.0, 0.0, 1.0), &z_plane(), PlaneFrame::Local);
        assert!(triangles.is_empty());
    }
}
