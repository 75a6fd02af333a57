//! Error types for shadow projection.
//!
//! The geometric core never fails: degenerate input produces non-finite
//! coordinates instead of errors. These types cover the checks a caller runs
//! before handing data to the core.

use thiserror::Error;

/// Problems with the index/vertex data of a caster mesh.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MeshError {
    /// The index list does not describe whole triangles.
    #[error("index count {0} is not a multiple of 3")]
    IndexCountNotTriangles(usize),

    /// A triangle references a vertex that does not exist.
    #[error("index {index} out of range for {vertex_count} vertices")]
    IndexOutOfRange {
        /// The offending index.
        index: u32,
        /// Number of vertices in the mesh.
        vertex_count: usize,
    },
}

/// Errors raised while preparing a shadow pass.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShadowError {
    /// The caster mesh failed validation.
    #[error(transparent)]
    Mesh(#[from] MeshError),

    /// Clipping was requested but no boundary reference point was given.
    #[error("clipping is enabled but no boundary point is configured")]
    MissingBoundary,

    /// Settings are present but unusable.
    #[error("invalid settings: {0}")]
    InvalidSettings(String),
}

/// Result type for shadow pass preparation.
pub type Result<T> = std::result::Result<T, ShadowError>;
