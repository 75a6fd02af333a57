//! Point light that circles above the scene.

use macroquad::prelude::*;
use nalgebra::Point3;

/// A point light orbiting a vertical axis through `center`.
pub struct OrbitLight {
    pub center: Point3<f32>,
    pub radius: f32,
    /// Height above `center`.
    pub height: f32,
    /// Angle around the axis, in radians.
    pub angle: f32,
    /// Radians per second while auto-rotating.
    pub speed: f32,
    pub auto_rotate: bool,
    /// Lowest allowed height; keeps the light above the caster.
    pub min_height: f32,
    pub max_height: f32,
}

impl OrbitLight {
    /// Creates an auto-rotating light.
    pub fn new(center: Point3<f32>, radius: f32, height: f32) -> Self {
        Self {
            center,
            radius,
            height,
            angle: 0.0,
            speed: 0.5,
            auto_rotate: true,
            min_height: 0.5,
            max_height: 20.0,
        }
    }

    /// Sets the allowed height range.
    pub fn with_height_limits(mut self, min: f32, max: f32) -> Self {
        self.min_height = min;
        self.max_height = max;
        self.height = self.height.clamp(min, max);
        self
    }

    /// Advances the orbit by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        if self.auto_rotate {
            self.angle = (self.angle + self.speed * dt).rem_euclid(std::f32::consts::TAU);
        }
    }

    /// Updates light state from keyboard input.
    ///
    /// Left/Right move around the orbit, Up/Down change height,
    /// Space toggles auto-rotation. Returns `true` if the light moved.
    pub fn update(&mut self) -> bool {
        let before = self.position();

        if is_key_pressed(KeyCode::Space) {
            self.auto_rotate = !self.auto_rotate;
        }
        if is_key_down(KeyCode::Left) {
            self.angle += 0.02;
        }
        if is_key_down(KeyCode::Right) {
            self.angle -= 0.02;
        }
        if is_key_down(KeyCode::Up) {
            self.height += 0.05;
        }
        if is_key_down(KeyCode::Down) {
            self.height -= 0.05;
        }
        self.height = self.height.clamp(self.min_height, self.max_height);
        self.advance(get_frame_time());

        self.position() != before
    }

    /// Returns the light's world position.
    pub fn position(&self) -> Point3<f32> {
        Point3::new(
            self.center.x + self.radius * self.angle.cos(),
            self.center.y + self.radius * self.angle.sin(),
            self.center.z + self.height,
        )
    }
}
