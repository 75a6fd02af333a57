//! Scene setup and drawing helpers for the shadow projection viewer.

use std::path::Path;

use macroquad::models::{draw_mesh, Mesh as DrawMesh, Vertex};
use macroquad::prelude::*;
use nalgebra::{Point2, Point3};
use shadow_cast::{Caster, Mesh, PlaneFrame, Polygon2, ProjectionSettings, ShadowPlane};

pub mod light;
pub use light::OrbitLight;

/// Converts a nalgebra point to a macroquad vector.
#[inline]
pub fn to_vec3(p: Point3<f32>) -> Vec3 {
    vec3(p.x, p.y, p.z)
}

/// Builds an axis-aligned cube mesh centred on the origin.
///
/// Each face is split into two triangles wound counter-clockwise when viewed
/// from outside.
pub fn cube_mesh(size: f32) -> Mesh {
    let half = size / 2.0;
    let vertices = vec![
        Point3::new(-half, -half, -half), // 0: left-bottom-back
        Point3::new(half, -half, -half),  // 1: right-bottom-back
        Point3::new(half, half, -half),   // 2: right-top-back
        Point3::new(-half, half, -half),  // 3: left-top-back
        Point3::new(-half, -half, half),  // 4: left-bottom-front
        Point3::new(half, -half, half),   // 5: right-bottom-front
        Point3::new(half, half, half),    // 6: right-top-front
        Point3::new(-half, half, half),   // 7: left-top-front
    ];

    let faces: [[u32; 4]; 6] = [
        [4, 5, 6, 7], // +z
        [1, 0, 3, 2], // -z
        [0, 4, 7, 3], // -x
        [5, 1, 2, 6], // +x
        [7, 6, 2, 3], // +y
        [0, 1, 5, 4], // -y
    ];
    let indices = faces
        .iter()
        .flat_map(|[a, b, c, d]| [*a, *b, *c, *a, *c, *d])
        .collect();

    // Indices above are all in range.
    Mesh::new(vertices, indices).unwrap_or_default()
}

/// Loads pass settings from a JSON file, falling back to defaults.
pub fn load_settings(path: Option<&Path>) -> ProjectionSettings {
    let Some(path) = path else {
        return ProjectionSettings::default();
    };

    let parsed = std::fs::read_to_string(path)
        .map_err(|e| e.to_string())
        .and_then(|text| serde_json::from_str::<ProjectionSettings>(&text).map_err(|e| e.to_string()))
        .and_then(|settings| settings.validate().map(|_| settings).map_err(|e| e.to_string()));

    match parsed {
        Ok(settings) => {
            tracing::info!(path = %path.display(), ?settings, "Loaded settings");
            settings
        }
        Err(error) => {
            tracing::warn!(path = %path.display(), %error, "Using default settings");
            ProjectionSettings::default()
        }
    }
}

/// Picks a stable colour for the `index`-th shadow polygon.
pub fn shadow_color(index: usize) -> Color {
    let hash = (index as u32).wrapping_mul(0x9E37_79B9);
    let r = ((hash >> 24) as u8).max(60);
    let g = ((hash >> 16) as u8).max(60);
    let b = ((hash >> 8) as u8).max(60);
    Color::from_rgba(r, g, b, 200)
}

/// Draws a fan-triangulated convex polygon given in world space.
fn draw_fan(points: &[Vec3], color: Color) {
    if points.len() < 3 {
        return;
    }

    let vertices: Vec<Vertex> = points
        .iter()
        .map(|p| Vertex::new2(*p, vec2(0.0, 0.0), color))
        .collect();

    let mut indices: Vec<u16> = Vec::with_capacity((points.len() - 2) * 3);
    for i in 1..points.len() - 1 {
        indices.push(0);
        indices.push(i as u16);
        indices.push((i + 1) as u16);
    }

    draw_mesh(&DrawMesh {
        vertices,
        indices,
        texture: None,
    });
}

/// Draws the caster's triangles in world space.
pub fn draw_caster(caster: &Caster, color: Color) {
    for i in 0..caster.mesh().triangle_count() {
        let corners = caster.world_triangle(i).map(to_vec3);
        draw_fan(&corners, color);
        draw_line_3d(corners[0], corners[1], BLACK);
        draw_line_3d(corners[1], corners[2], BLACK);
        draw_line_3d(corners[2], corners[0], BLACK);
    }
}

/// Draws a square patch of `plane` with the given half extent.
pub fn draw_plane(plane: &ShadowPlane, half_extent: f32, color: Color) {
    let corners = [
        Point2::new(-half_extent, -half_extent),
        Point2::new(half_extent, -half_extent),
        Point2::new(half_extent, half_extent),
        Point2::new(-half_extent, half_extent),
    ]
    .map(|p| to_vec3(plane.lift(p, PlaneFrame::Local)));
    draw_fan(&corners, color);
}

/// Draws shadow polygons on their plane, nudged along the normal so they
/// sit on top of the plane patch.
///
/// Polygons whose lifted vertices are not finite are skipped.
pub fn draw_shadow(plane: &ShadowPlane, polygons: &[Polygon2], frame: PlaneFrame) {
    let nudge = to_vec3(Point3::from(plane.normal().normalize() * 0.01));
    for (k, polygon) in polygons.iter().enumerate() {
        let points: Vec<Vec3> = polygon
            .vertices()
            .iter()
            .map(|p| to_vec3(plane.lift(*p, frame)) + nudge)
            .collect();
        if points.iter().all(|p| p.is_finite()) {
            draw_fan(&points, shadow_color(k));
        }
    }
}

/// Draws the clip line `x = boundary_x` across a plane patch.
pub fn draw_boundary(plane: &ShadowPlane, boundary_x: f32, half_extent: f32, frame: PlaneFrame) {
    let start = to_vec3(plane.lift(Point2::new(boundary_x, -half_extent), frame));
    let end = to_vec3(plane.lift(Point2::new(boundary_x, half_extent), frame));
    if start.is_finite() && end.is_finite() {
        draw_line_3d(start, end, RED);
    }
}

/// Draws 2D polygon paths into a screen-space panel, `scale` pixels per unit,
/// with the 2D origin at the panel centre and y pointing up.
pub fn draw_paths_panel<'a>(
    paths: impl IntoIterator<Item = &'a [Point2<f32>]>,
    panel: Rect,
    scale: f32,
) {
    draw_rectangle(panel.x, panel.y, panel.w, panel.h, Color::from_rgba(10, 10, 16, 220));
    draw_rectangle_lines(panel.x, panel.y, panel.w, panel.h, 1.0, GRAY);

    let center = panel.center();
    let to_screen = |p: &Point2<f32>| vec2(center.x + p.x * scale, center.y - p.y * scale);

    for (k, path) in paths.into_iter().enumerate() {
        let points: Vec<Vec2> = path.iter().map(to_screen).collect();
        if points.len() < 3 || !points.iter().all(|p| p.is_finite()) {
            continue;
        }
        for i in 1..points.len() - 1 {
            draw_triangle(points[0], points[i], points[i + 1], shadow_color(k));
        }
        for i in 0..points.len() {
            draw_line(
                points[i].x,
                points[i].y,
                points[(i + 1) % points.len()].x,
                points[(i + 1) % points.len()].y,
                1.0,
                WHITE,
            );
        }
    }
}
