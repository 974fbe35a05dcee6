//! Structured hexahedral meshing of solid spheres.
//!
//! A sphere is meshed by building a cube lattice, projecting it onto the
//! sphere and filling the space between the cube and the sphere with radial
//! layers of hexahedra. The cube interior is filled with its own lattice
//! cells. The result is an all-hex, conforming mesh with 1-based local ids,
//! ready to be written as solver input.
//!
//! # Mesh Methods
//!
//! - **`spherified_cube`**: Analytic cube-to-sphere map, low distortion
//! - **`normalized_cube`**: Radial projection of the cube lattice
//! - **`*_alt`**: Same projections with a curved inner shell instead of the
//!   flat inner cube
//!
//! # Quick Start
//!
//! ```
//! use mesh_sphere::{generate_sphere_mesh, SphereMeshParams};
//! use nalgebra::Point3;
//!
//! // A 2 mm shot centered at (0, 0, 10) with 0.2 mm elements
//! let params = SphereMeshParams::spherified(1.0, 0.2)
//!     .with_center(Point3::new(0.0, 0.0, 10.0));
//! let result = generate_sphere_mesh(&params).unwrap();
//!
//! println!(
//!     "{} nodes, {} elements, achieved element length {:.4}",
//!     result.node_count(),
//!     result.element_count(),
//!     result.real_element_length(),
//! );
//! ```
//!
//! # Pipeline
//!
//! The stages are exposed individually for callers that need the
//! intermediate arrays:
//!
//! 1. [`MeshConfig::resolve`] - lattice order, layer count, spacing factor
//! 2. [`CubeLattice::build`] - the inner cube lattice
//! 3. [`project`] / [`curved_inner_shell`] - outer sphere and inner shell
//! 4. [`interpolate_layers`] - stacked radial layers
//! 5. [`build_connectivity`] - hexahedra by stride arithmetic
//! 6. [`compact`] - unreferenced node removal and renumbering

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

mod compact;
mod config;
mod connectivity;
mod error;
mod generate;
mod lattice;
mod params;
mod projection;
mod spacing;
mod types;
mod validation;

pub use compact::compact;
pub use config::{MeshConfig, SCALE_FACTOR, round_to_half, surface_point_count};
pub use connectivity::{FacePatch, build_connectivity, cube_patch, shell_faces};
pub use error::{SphereMeshError, SphereResult};
pub use generate::{SphereMeshResult, generate_sphere_mesh, mesh_from_config};
pub use lattice::{CubeLattice, LatticeStrides};
pub use params::SphereMeshParams;
pub use projection::{curved_inner_shell, normalize_point, project, spherify_point};
pub use spacing::{interpolate_layers, layer_denominators};
pub use types::{
    MeshMethod, NORMALIZED_CORRECTION_FACTOR, Projection, SPHERIFIED_CORRECTION_FACTOR,
    SpacingMethod,
};
pub use validation::{
    IntegrityIssue, MeshIntegrity, SurfaceDeviation, surface_deviation, validate_hex_mesh,
};
