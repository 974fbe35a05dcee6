//! Error types for sphere mesh generation.

use thiserror::Error;

/// Result type alias for sphere mesh operations.
pub type SphereResult<T> = Result<T, SphereMeshError>;

/// Errors that can occur while meshing a sphere.
///
/// Every variant except [`SphereMeshError::InternalConsistency`] is a
/// configuration error: it is raised before any lattice work starts and is
/// fully determined by the inputs.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum SphereMeshError {
    /// The sphere radius is zero, negative or not finite.
    #[error("sphere radius must be positive and finite, got {0}")]
    InvalidRadius(f64),

    /// The target element length is zero, negative or not finite.
    #[error("element length must be positive and finite, got {0}")]
    InvalidElementLength(f64),

    /// A sphere center coordinate is not finite.
    #[error("sphere center must be finite, got {center:?}")]
    InvalidCenter {
        /// The offending center.
        center: [f64; 3],
    },

    /// The mesh method key is not one of the four known variants.
    #[error(
        "unknown mesh method '{0}', expected one of spherified_cube, normalized_cube, spherified_cube_alt, normalized_cube_alt"
    )]
    UnknownMeshMethod(String),

    /// The spacing method key is neither `linear` nor `nonlinear`.
    #[error("unknown spacing method '{0}', expected linear or nonlinear")]
    UnknownSpacingMethod(String),

    /// The element length is too coarse for the radius: the lattice order
    /// rounds to zero.
    #[error(
        "element length {element_length} is too large for radius {radius}: lattice order rounds to zero (density {density:.3})"
    )]
    DegenerateLattice {
        /// Requested radius.
        radius: f64,
        /// Requested element length.
        element_length: f64,
        /// Unrounded element density.
        density: f64,
    },

    /// The radial layer count resolved to zero.
    #[error("radial layer count resolved to zero for lattice order {lattice_order}")]
    DegenerateLayers {
        /// The resolved lattice order.
        lattice_order: f64,
    },

    /// The mesh would need more node or element ids than fit in `u32`.
    #[error("mesh too large: {nodes} nodes and {elements} elements exceed the u32 id space")]
    MeshTooLarge {
        /// Projected node count before compaction.
        nodes: u128,
        /// Projected element count.
        elements: u128,
    },

    /// An element references a node index that does not exist.
    ///
    /// This indicates a defect in the connectivity index arithmetic and is
    /// never recovered from.
    #[error(
        "internal consistency error: element {element} references node index {index}, but only {node_count} nodes exist"
    )]
    InternalConsistency {
        /// 0-based element position.
        element: usize,
        /// 0-based node index that failed to resolve.
        index: usize,
        /// Number of nodes before compaction.
        node_count: usize,
    },
}

impl SphereMeshError {
    /// Returns `true` for errors caused by invalid inputs.
    #[must_use]
    pub const fn is_configuration_error(&self) -> bool {
        !matches!(self, Self::InternalConsistency { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SphereMeshError::InvalidRadius(-1.0);
        assert!(format!("{err}").contains("-1"));

        let err = SphereMeshError::UnknownMeshMethod("cubed".to_string());
        assert!(format!("{err}").contains("'cubed'"));

        let err = SphereMeshError::DegenerateLattice {
            radius: 1.0,
            element_length: 10.0,
            density: 0.0707,
        };
        assert!(format!("{err}").contains("0.071"));
    }

    #[test]
    fn test_error_classification() {
        assert!(SphereMeshError::InvalidElementLength(0.0).is_configuration_error());
        assert!(SphereMeshError::UnknownSpacingMethod("cubic".into()).is_configuration_error());
        assert!(
            !SphereMeshError::InternalConsistency {
                element: 0,
                index: 9,
                node_count: 8,
            }
            .is_configuration_error()
        );
    }
}
