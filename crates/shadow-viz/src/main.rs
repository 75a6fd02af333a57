use std::path::PathBuf;

use macroquad::prelude::*;
use nalgebra::{Affine3, Point3, Translation3, UnitQuaternion, Vector3};
use shadow_cast::{
    Boundary, Caster, ClipMode, PathHolder, PlaneFrame, PlaneGroup, ShadowPass, ShadowPlane,
    ShapeHolders,
};
use shadow_viz::{
    cube_mesh, draw_boundary, draw_caster, draw_paths_panel, draw_plane, draw_shadow,
    load_settings, to_vec3, OrbitLight,
};
use tracing_subscriber::EnvFilter;

const PLANE_HALF_EXTENT: f32 = 4.0;

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,shadow_cast=debug")),
        )
        .init();
}

/// A tilted cube floating above the origin.
fn make_caster() -> Caster {
    let rotation = UnitQuaternion::from_euler_angles(0.3, 0.2, 0.6);
    let placement = Translation3::new(0.0, 0.0, 1.5) * rotation;
    let transform = Affine3::from_matrix_unchecked(placement.to_homogeneous());
    Caster::with_transform(cube_mesh(1.0), transform)
}

fn make_groups() -> Vec<PlaneGroup> {
    vec![
        PlaneGroup::new(
            "ground",
            vec![ShadowPlane::new(Point3::origin(), Vector3::z()).with_name("floor")],
        ),
        PlaneGroup::new(
            "walls",
            vec![ShadowPlane::new(Point3::new(0.0, -4.0, 0.0), Vector3::y()).with_name("back wall")],
        ),
    ]
}

#[macroquad::main("Shadow Projection")]
async fn main() {
    init_tracing();

    let settings = load_settings(std::env::args().nth(1).map(PathBuf::from).as_deref());
    let caster = make_caster();
    let mut light = OrbitLight::new(Point3::origin(), 1.5, 5.0).with_height_limits(2.5, 12.0);

    let mut pass = match ShadowPass::from_groups(light.position(), make_groups(), settings) {
        Ok(pass) => pass,
        Err(error) => {
            tracing::error!(%error, "Cannot set up shadow pass");
            return;
        }
    };
    let mut holders: Vec<ShapeHolders<PathHolder>> =
        pass.planes().map(|_| ShapeHolders::new()).collect();

    let camera = Camera3D {
        position: vec3(8.0, 7.0, 6.0),
        up: vec3(0.0, 0.0, 1.0),
        target: vec3(0.0, 0.0, 0.5),
        ..Default::default()
    };

    loop {
        light.update();
        pass.set_light(light.position());

        if is_key_pressed(KeyCode::C) {
            let mut next = pass.settings().clone();
            next.clip_enabled = !next.clip_enabled;
            if next.boundary.is_none() {
                next.boundary = Some(Boundary::from_x(0.0));
            }
            if let Err(error) = pass.set_settings(next) {
                tracing::warn!(%error, "Rejected settings change");
            }
        }
        if is_key_pressed(KeyCode::F) {
            let mut next = pass.settings().clone();
            next.frame = match next.frame {
                PlaneFrame::Ambient => PlaneFrame::Local,
                PlaneFrame::Local => PlaneFrame::Ambient,
            };
            if let Err(error) = pass.set_settings(next) {
                tracing::warn!(%error, "Rejected settings change");
            }
        }

        let output = pass.run_pass(&caster);
        for (shapes, shadow) in holders.iter_mut().zip(&output.planes) {
            shapes.bind(&shadow.polygons, PathHolder::new);
        }

        clear_background(Color::from_rgba(20, 20, 30, 255));
        set_camera(&camera);

        let frame = pass.settings().frame;
        for (plane, shadow) in pass.planes().zip(&output.planes) {
            draw_plane(plane, PLANE_HALF_EXTENT, Color::from_rgba(70, 70, 80, 255));
            draw_shadow(plane, &shadow.polygons, frame);
            if let ClipMode::HalfPlane { boundary_x } = pass.settings().clip_mode(plane) {
                draw_boundary(plane, boundary_x, PLANE_HALF_EXTENT, frame);
            }
        }
        draw_caster(&caster, Color::from_rgba(200, 160, 90, 255));
        draw_sphere(to_vec3(light.position()), 0.1, None, YELLOW);
        draw_line_3d(to_vec3(light.position()), vec3(0.0, 0.0, 1.5), Color::from_rgba(255, 255, 0, 80));

        set_default_camera();

        let settings = pass.settings();
        draw_text("Shadow Projection", 10.0, 25.0, 24.0, WHITE);
        draw_text(
            &format!(
                "Clipping: {} | Frame: {:?} | Polygons: {}",
                if settings.clip_enabled { "on" } else { "off" },
                settings.frame,
                output.total_polygons()
            ),
            10.0,
            48.0,
            18.0,
            GRAY,
        );
        for (i, (shadow, shapes)) in output.planes.iter().zip(&holders).enumerate() {
            draw_text(
                &format!(
                    "{} / {}: {} holders",
                    shadow.group.as_deref().unwrap_or("-"),
                    shadow.name.as_deref().unwrap_or("-"),
                    shapes.len()
                ),
                10.0,
                70.0 + i as f32 * 18.0,
                16.0,
                GRAY,
            );
        }
        draw_text(
            "C: clip  F: frame  Space: orbit  Arrows: move light",
            10.0,
            screen_height() - 30.0,
            16.0,
            DARKGRAY,
        );
        draw_text(&format!("FPS: {}", get_fps()), 10.0, screen_height() - 12.0, 16.0, DARKGRAY);

        if let Some(floor) = holders.first() {
            let panel = Rect::new(screen_width() - 270.0, 10.0, 260.0, 260.0);
            draw_paths_panel(floor.as_slice().iter().map(PathHolder::path), panel, 25.0);
        }

        next_frame().await
    }
}
