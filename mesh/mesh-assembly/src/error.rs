//! Error types for batch assembly.

use mesh_sphere::SphereMeshError;
use thiserror::Error;

/// Result type for assembly operations.
pub type AssemblyResult<T> = Result<T, AssemblyError>;

/// Errors that can occur while assembling a batch of shots.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum AssemblyError {
    /// The batch has no shots.
    #[error("Cannot assemble an empty batch")]
    EmptyBatch,

    /// Coordinate and radius lists differ in length.
    #[error("Got {coordinates} coordinates but {radii} radii")]
    LengthMismatch {
        /// Number of coordinates.
        coordinates: usize,
        /// Number of radii.
        radii: usize,
    },

    /// Meshing one shot failed.
    #[error("Shot {index} could not be meshed: {source}")]
    Shot {
        /// Position of the shot in the batch.
        index: usize,
        /// The underlying meshing error.
        #[source]
        source: SphereMeshError,
    },

    /// Offset node or element ids no longer fit in `u32`.
    #[error("Id space exhausted while offsetting shot {index}")]
    IdOverflow {
        /// Position of the shot whose ids overflowed.
        index: usize,
    },
}
