//! Structured hexahedral meshing of spherical shots.
//!
//! This umbrella crate re-exports the shot-mesh crates under one name:
//! sphere meshing, batch assembly and the mesh value types they share.
//!
//! # Quick Start
//!
//! ```
//! use shot_mesh::prelude::*;
//!
//! // One shot
//! let result = generate_sphere_mesh(&SphereMeshParams::spherified(1.0, 0.25)).unwrap();
//! assert!(validate_hex_mesh(&result.mesh).is_valid());
//!
//! // A batch of shots merged into one id space
//! let shots = [
//!     Shot::from_coords(0.0, 0.0, 2.0, 1.0),
//!     Shot::from_coords(0.0, 2.0, 0.0, 1.0),
//! ];
//! let batch = assemble_batch(&shots, &BatchParams::new(0.25)).unwrap();
//! assert_eq!(batch.element_count(), 2 * result.element_count());
//! ```
//!
//! # Module Organization
//!
//! - [`types`] - Nodes, hexahedra, `HexMesh`, `Aabb`
//! - [`sphere`] - Single-sphere meshing and its pipeline stages
//! - [`assembly`] - Batch meshing with id offsets and overlap checks
//!
//! # Feature Flags
//!
//! - `serde` - Serialization of parameters, configurations and meshes

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

// =============================================================================
// Re-exports
// =============================================================================

/// Nodes, hexahedra and hexahedral meshes.
pub use mesh_types as types;

/// Structured sphere meshing.
pub use mesh_sphere as sphere;

/// Batch meshing of shots.
pub use mesh_assembly as assembly;

// =============================================================================
// Prelude
// =============================================================================

/// Common imports for shot meshing.
///
/// # Usage
///
/// ```
/// use shot_mesh::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use mesh_types::{Aabb, HexMesh, Hexahedron, MeshBounds, MeshTopology, Node, Point3};

    // Sphere meshing
    pub use mesh_sphere::{
        MeshMethod, SpacingMethod, SphereMeshError, SphereMeshParams, SphereMeshResult,
        generate_sphere_mesh, validate_hex_mesh,
    };

    // Batches
    pub use mesh_assembly::{AssemblyError, BatchParams, Shot, ShotBatch, assemble_batch};
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prelude_imports() {
        use prelude::*;

        let mesh = HexMesh::new();
        assert_eq!(mesh.node_count(), 0);
        assert_eq!(mesh.element_count(), 0);
        assert_eq!(MeshMethod::default(), MeshMethod::SpherifiedCube);
    }

    #[test]
    fn test_module_reexports() {
        assert!(types::HexMesh::new().is_locally_numbered());
        assert_eq!(
            sphere::SphereMeshParams::default().spacing_method,
            sphere::SpacingMethod::Nonlinear
        );
        let batch = assembly::BatchParams::default();
        assert_eq!(batch.id_offset, 0);
        assert!(batch.parallel);
    }
}
