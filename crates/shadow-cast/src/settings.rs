//! Shadow pass configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ShadowError};
use crate::{Boundary, ClipMode, PlaneFrame, ShadowPlane};

/// Options shared by every plane of a shadow pass.
///
/// Deserializes from partial input; missing fields take their defaults:
///
/// ```json
/// { "clip_enabled": true, "boundary": [0.5, 0.0, 0.0], "frame": "local" }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionSettings {
    /// Clip each projected triangle against the boundary.
    pub clip_enabled: bool,
    /// Boundary reference point. Required when clipping is enabled.
    pub boundary: Option<Boundary>,
    /// 2D embedding of projected points.
    pub frame: PlaneFrame,
}

impl ProjectionSettings {
    /// Settings that clip against `boundary`.
    pub fn clipped(boundary: impl Into<Boundary>) -> Self {
        Self {
            clip_enabled: true,
            boundary: Some(boundary.into()),
            ..Default::default()
        }
    }

    /// Sets the 2D frame.
    pub fn with_frame(mut self, frame: PlaneFrame) -> Self {
        self.frame = frame;
        self
    }

    /// Validate settings.
    pub fn validate(&self) -> Result<()> {
        if self.clip_enabled && self.boundary.is_none() {
            return Err(ShadowError::MissingBoundary);
        }
        if let Some(boundary) = &self.boundary {
            if !boundary.is_finite() {
                return Err(ShadowError::InvalidSettings(
                    "boundary point must be finite".into(),
                ));
            }
        }
        Ok(())
    }

    /// Resolves the clip mode for one plane.
    ///
    /// Falls back to pass-through when clipping is disabled or no boundary
    /// is set; [`validate`](Self::validate) rejects the latter up front.
    pub fn clip_mode(&self, plane: &ShadowPlane) -> ClipMode {
        match (self.clip_enabled, self.boundary) {
            (true, Some(boundary)) => ClipMode::HalfPlane {
                boundary_x: plane.boundary_x(boundary.reference(), self.frame),
            },
            _ => ClipMode::PassThrough,
        }
    }
}
