//! Caster geometry: an indexed triangle mesh and its placement in the world.

use nalgebra::{Affine3, Point3};

use crate::error::MeshError;

/// An indexed triangle mesh in the caster's local space.
///
/// Every three consecutive indices form one triangle. Construction validates
/// the index list, so the projection code can index without checks.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Mesh {
    vertices: Vec<Point3<f32>>,
    indices: Vec<u32>,
}

impl Mesh {
    /// Creates a mesh after checking that `indices` describes whole
    /// triangles and only references existing vertices.
    pub fn new(vertices: Vec<Point3<f32>>, indices: Vec<u32>) -> Result<Self, MeshError> {
        if indices.len() % 3 != 0 {
            return Err(MeshError::IndexCountNotTriangles(indices.len()));
        }
        if let Some(&index) = indices.iter().find(|&&i| i as usize >= vertices.len()) {
            return Err(MeshError::IndexOutOfRange {
                index,
                vertex_count: vertices.len(),
            });
        }
        Ok(Self { vertices, indices })
    }

    /// Returns the vertex positions.
    #[inline]
    pub fn vertices(&self) -> &[Point3<f32>] {
        &self.vertices
    }

    /// Returns the triangle index list.
    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns the corners of triangle `i` in index order.
    ///
    /// # Panics
    /// Panics if `i >= triangle_count()`.
    pub fn triangle(&self, i: usize) -> [Point3<f32>; 3] {
        let base = i * 3;
        [
            self.vertices[self.indices[base] as usize],
            self.vertices[self.indices[base + 1] as usize],
            self.vertices[self.indices[base + 2] as usize],
        ]
    }

    /// Iterates over all triangles in index order.
    pub fn triangles(&self) -> impl Iterator<Item = [Point3<f32>; 3]> + '_ {
        (0..self.triangle_count()).map(|i| self.triangle(i))
    }
}

/// A mesh placed in the world by an affine local-to-world transform.
#[derive(Debug, Clone)]
pub struct Caster {
    mesh: Mesh,
    transform: Affine3<f32>,
}

impl Caster {
    /// Creates a caster with the identity transform.
    pub fn new(mesh: Mesh) -> Self {
        Self::with_transform(mesh, Affine3::identity())
    }

    /// Creates a caster placed by `transform`.
    pub fn with_transform(mesh: Mesh, transform: Affine3<f32>) -> Self {
        Self { mesh, transform }
    }

    #[inline]
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    #[inline]
    pub fn transform(&self) -> &Affine3<f32> {
        &self.transform
    }

    pub fn set_transform(&mut self, transform: Affine3<f32>) {
        self.transform = transform;
    }

    /// Transforms a local-space point into world space.
    #[inline]
    pub fn world_vertex(&self, local: Point3<f32>) -> Point3<f32> {
        self.transform * local
    }

    /// Returns the world-space corners of triangle `i`.
    ///
    /// # Panics
    /// Panics if `i` is not a valid triangle index.
    pub fn world_triangle(&self, i: usize) -> [Point3<f32>; 3] {
        self.mesh.triangle(i).map(|v| self.world_vertex(v))
    }
}
