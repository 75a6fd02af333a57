//! Shadow silhouettes of triangle meshes on planes.
//!
//! A [`ShadowPass`] projects every triangle of a [`Caster`] onto each target
//! [`ShadowPlane`] by central projection from a point light, then either
//! clips the projected triangle against a vertical half-plane boundary or
//! passes it through. The result is a list of simple 2D polygons per plane,
//! ready to be bound to 2D shape holders with [`ShapeHolders`].
//!
//! # Example
//!
//! ```
//! use nalgebra::{Point3, Vector3};
//! use shadow_cast::{Boundary, Caster, Mesh, ProjectionSettings, ShadowPass, ShadowPlane};
//!
//! let mesh = Mesh::new(
//!     vec![
//!         Point3::new(-1.0, 0.0, 5.0),
//!         Point3::new(1.0, 0.0, 5.0),
//!         Point3::new(1.0, 1.0, 5.0),
//!     ],
//!     vec![0, 1, 2],
//! )?;
//! let floor = ShadowPlane::new(Point3::origin(), Vector3::z());
//! let settings = ProjectionSettings::clipped(Boundary::from_x(0.0));
//! let pass = ShadowPass::new(Point3::new(0.0, 0.0, 10.0), vec![floor], settings)?;
//!
//! let output = pass.run_pass(&Caster::new(mesh));
//! assert_eq!(output.planes[0].polygons.len(), 2);
//! # Ok::<(), shadow_cast::ShadowError>(())
//! ```
//!
//! Degenerate input (a vertex level with the light relative to the plane, or
//! a vertex at the light) is not an error: it yields infinite or NaN
//! coordinates which flow through clipping unchanged.

pub mod error;
pub mod holders;

mod boundary;
mod clip;
mod mesh;
mod pipeline;
mod plane;
mod polygon;
mod projector;
mod settings;
mod triangle;

pub use boundary::{classify_x, Boundary, Side};
pub use clip::{clip_triangle, intersect_at_x, ClipMode};
pub use error::{MeshError, Result, ShadowError};
pub use holders::{reconcile, PathHolder, Reconcile, ShapeHolder, ShapeHolders};
pub use mesh::{Caster, Mesh};
pub use pipeline::{PassOutput, PlaneGroup, PlaneShadow, ShadowPass};
pub use plane::{PlaneFrame, ShadowPlane};
pub use polygon::Polygon2;
pub use projector::{project_mesh, project_point, project_point_2d, project_triangle};
pub use settings::ProjectionSettings;
pub use triangle::Triangle2;
