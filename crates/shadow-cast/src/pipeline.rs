//! Shadow pass: projection and clipping of a caster onto every target plane.

use nalgebra::Point3;
use tracing::{debug, trace, warn};

use crate::error::Result;
use crate::projector::project_triangle;
use crate::{Caster, Polygon2, ProjectionSettings, ShadowPlane};

/// A named set of target planes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlaneGroup {
    pub name: String,
    pub planes: Vec<ShadowPlane>,
}

impl PlaneGroup {
    pub fn new(name: impl Into<String>, planes: Vec<ShadowPlane>) -> Self {
        Self {
            name: name.into(),
            planes,
        }
    }
}

/// Shadow polygons computed for one plane.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaneShadow {
    /// Group the plane came from, if it was added through a [`PlaneGroup`].
    pub group: Option<String>,
    /// The plane label, if any.
    pub name: Option<String>,
    /// Output polygons in triangle order.
    pub polygons: Vec<Polygon2>,
}

/// Everything a pass produces, one entry per plane in configuration order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PassOutput {
    pub planes: Vec<PlaneShadow>,
}

impl PassOutput {
    /// Total number of polygons over all planes.
    pub fn total_polygons(&self) -> usize {
        self.planes.iter().map(|p| p.polygons.len()).sum()
    }
}

/// A point light and the planes it casts shadows onto.
///
/// Passes are pure: running the same pass on the same caster always yields
/// equal output, and nothing is carried over between runs.
#[derive(Debug, Clone)]
pub struct ShadowPass {
    light: Point3<f32>,
    planes: Vec<(Option<String>, ShadowPlane)>,
    settings: ProjectionSettings,
}

impl ShadowPass {
    /// Creates a pass over `planes` after validating `settings`.
    pub fn new(
        light: Point3<f32>,
        planes: Vec<ShadowPlane>,
        settings: ProjectionSettings,
    ) -> Result<Self> {
        settings.validate()?;
        Ok(Self {
            light,
            planes: planes.into_iter().map(|plane| (None, plane)).collect(),
            settings,
        })
    }

    /// Creates a pass over every plane of every group, flattened in order.
    pub fn from_groups(
        light: Point3<f32>,
        groups: Vec<PlaneGroup>,
        settings: ProjectionSettings,
    ) -> Result<Self> {
        settings.validate()?;
        let planes = groups
            .into_iter()
            .flat_map(|group| {
                let name = group.name;
                group
                    .planes
                    .into_iter()
                    .map(move |plane| (Some(name.clone()), plane))
            })
            .collect();
        Ok(Self {
            light,
            planes,
            settings,
        })
    }

    #[inline]
    pub fn light(&self) -> Point3<f32> {
        self.light
    }

    /// Moves the light for subsequent passes.
    pub fn set_light(&mut self, light: Point3<f32>) {
        self.light = light;
    }

    #[inline]
    pub fn settings(&self) -> &ProjectionSettings {
        &self.settings
    }

    /// Replaces the settings, keeping the old ones if the new ones are invalid.
    pub fn set_settings(&mut self, settings: ProjectionSettings) -> Result<()> {
        settings.validate()?;
        self.settings = settings;
        Ok(())
    }

    /// Returns the target planes in pass order.
    pub fn planes(&self) -> impl Iterator<Item = &ShadowPlane> {
        self.planes.iter().map(|(_, plane)| plane)
    }

    /// Projects and clips the caster onto every plane.
    pub fn run_pass(&self, caster: &Caster) -> PassOutput {
        let triangle_count = caster.mesh().triangle_count();
        debug!(
            planes = self.planes.len(),
            triangles = triangle_count,
            clip = self.settings.clip_enabled,
            frame = ?self.settings.frame,
            "Running shadow pass"
        );

        let planes = self
            .planes
            .iter()
            .map(|(group, plane)| PlaneShadow {
                group: group.clone(),
                name: plane.name().map(str::to_owned),
                polygons: self.shadow_on(caster, plane),
            })
            .collect();

        PassOutput { planes }
    }

    /// Projects and clips the caster onto a single plane.
    pub fn shadow_on(&self, caster: &Caster, plane: &ShadowPlane) -> Vec<Polygon2> {
        let mode = self.settings.clip_mode(plane);
        let mut polygons = Vec::with_capacity(caster.mesh().triangle_count());
        let mut degenerate = 0usize;

        for i in 0..caster.mesh().triangle_count() {
            let triangle = project_triangle(caster, i, self.light, plane, self.settings.frame);
            if !triangle.is_finite() {
                degenerate += 1;
            }
            polygons.extend(mode.apply(&triangle));
        }

        if degenerate > 0 {
            warn!(
                plane = plane.name().unwrap_or("<unnamed>"),
                degenerate,
                "Projected triangles with non-finite coordinates"
            );
        }
        trace!(
            plane = plane.name().unwrap_or("<unnamed>"),
            ?mode,
            polygons = polygons.len(),
            "Plane shadow computed"
        );

        polygons
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Boundary, Mesh, ShadowError};
    use nalgebra::{Point2, Vector3};

    fn make_caster(vertices: &[[f32; 3]], indices: &[u32]) -> Caster {
        let vertices = vertices
            .iter()
            .map(|v| Point3::new(v[0], v[1], v[2]))
            .collect();
        Caster::new(Mesh::new(vertices, indices.to_vec()).unwrap())
    }

    fn floor(name: &str) -> ShadowPlane {
        ShadowPlane::new(Point3::origin(), Vector3::z()).with_name(name)
    }

    fn light() -> Point3<f32> {
        Point3::new(0.0, 0.0, 10.0)
    }

    #[test]
    fn pass_through_keeps_one_polygon_per_triangle() {
        let caster = make_caster(
            &[[-1.0, 0.0, 5.0], [1.0, 0.0, 5.0], [1.0, 1.0, 5.0], [-1.0, 1.0, 5.0]],
            &[0, 1, 2, 0, 2, 3],
        );
        let pass = ShadowPass::new(light(), vec![floor("floor")], ProjectionSettings::default())
            .unwrap();
        let output = pass.run_pass(&caster);

        assert_eq!(output.planes.len(), 1);
        assert_eq!(output.planes[0].name.as_deref(), Some("floor"));
        assert_eq!(output.planes[0].group, None);
        assert_eq!(output.total_polygons(), 2);
        assert_eq!(
            output.planes[0].polygons[0].vertices(),
            &[Point2::new(-2.0, 0.0), Point2::new(2.0, 0.0), Point2::new(2.0, 2.0)]
        );
    }

    #[test]
    fn clipping_splits_straddling_triangle() {
        // Projects to (-2,0), (2,0), (2,2) on the floor.
        let caster = make_caster(&[[-1.0, 0.0, 5.0], [1.0, 0.0, 5.0], [1.0, 1.0, 5.0]], &[0, 1, 2]);
        let pass = ShadowPass::new(
            light(),
            vec![floor("floor")],
            ProjectionSettings::clipped(Boundary::from_x(0.0)),
        )
        .unwrap();

        let polygons = &pass.run_pass(&caster).planes[0].polygons;
        assert_eq!(polygons.len(), 2);
        assert_eq!(polygons[0].vertices()[0], Point2::new(0.0, 0.0));
        assert_eq!(polygons[1].vertices()[0], Point2::new(0.0, 0.0));
        assert_eq!(polygons[1].vertices()[1], Point2::new(0.0, 1.0));
    }

    #[test]
    fn every_plane_gets_its_own_output() {
        let caster = make_caster(&[[0.0, 0.0, 5.0], [1.0, 0.0, 5.0], [0.0, 1.0, 5.0]], &[0, 1, 2]);
        let lower = ShadowPlane::new(Point3::new(0.0, 0.0, -5.0), Vector3::z());
        let pass = ShadowPass::new(light(), vec![floor("floor"), lower], ProjectionSettings::default())
            .unwrap();

        let output = pass.run_pass(&caster);
        assert_eq!(output.planes.len(), 2);
        assert_eq!(output.planes[0].polygons[0].vertices()[1], Point2::new(2.0, 0.0));
        assert_eq!(output.planes[1].polygons[0].vertices()[1], Point2::new(3.0, 0.0));
        assert_eq!(output.planes[1].name, None);
    }

    #[test]
    fn groups_flatten_in_order() {
        let caster = make_caster(&[[0.0, 0.0, 5.0], [1.0, 0.0, 5.0], [0.0, 1.0, 5.0]], &[0, 1, 2]);
        let groups = vec![
            PlaneGroup::new("walls", vec![floor("a"), floor("b")]),
            PlaneGroup::new("ground", vec![floor("c")]),
        ];
        let pass = ShadowPass::from_groups(light(), groups, ProjectionSettings::default()).unwrap();
        assert_eq!(pass.planes().count(), 3);

        let output = pass.run_pass(&caster);
        let labels: Vec<_> = output
            .planes
            .iter()
            .map(|p| (p.group.as_deref().unwrap(), p.name.as_deref().unwrap()))
            .collect();
        assert_eq!(labels, vec![("walls", "a"), ("walls", "b"), ("ground", "c")]);
    }

    #[test]
    fn invalid_settings_are_rejected() {
        let settings = ProjectionSettings {
            clip_enabled: true,
            ..Default::default()
        };
        let err = ShadowPass::new(light(), vec![], settings.clone()).unwrap_err();
        assert_eq!(err, ShadowError::MissingBoundary);

        let mut pass = ShadowPass::new(light(), vec![], ProjectionSettings::default()).unwrap();
        assert!(pass.set_settings(settings).is_err());
        assert!(!pass.settings().clip_enabled);
    }

    #[test]
    fn no_planes_yields_empty_output() {
        let caster = make_caster(&[[0.0, 0.0, 5.0], [1.0, 0.0, 5.0], [0.0, 1.0, 5.0]], &[0, 1, 2]);
        let pass = ShadowPass::new(light(), vec![], ProjectionSettings::default()).unwrap();
        assert_eq!(pass.run_pass(&caster), PassOutput::default());
    }

    #[test]
    fn moving_the_light_changes_the_shadow() {
        let caster = make_caster(&[[0.0, 0.0, 5.0], [1.0, 0.0, 5.0], [0.0, 1.0, 5.0]], &[0, 1, 2]);
        let mut pass = ShadowPass::new(light(), vec![floor("floor")], ProjectionSettings::default())
            .unwrap();
        let before = pass.run_pass(&caster);
        pass.set_light(Point3::new(0.0, 0.0, 20.0));
        let after = pass.run_pass(&caster);

        assert_eq!(pass.light(), Point3::new(0.0, 0.0, 20.0));
        assert_ne!(before, after);
    }
}
