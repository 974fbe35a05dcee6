//! Core solid-mesh types for shot meshing.
//!
//! This crate provides the value types exchanged between the sphere mesh
//! generator, the batch assembler and downstream solver writers:
//!
//! - [`Node`] - A numbered point in 3D space
//! - [`Hexahedron`] - An eight-node solid element referencing node ids
//! - [`HexCell`] - A hexahedron with resolved corner positions
//! - [`HexMesh`] - Node and element arrays of one solid mesh
//! - [`Aabb`] - Axis-aligned bounding box
//!
//! # Numbering
//!
//! Node and element ids are **1-based**, matching the keyword formats of
//! explicit solvers. Elements store node *ids*, never array positions.
//!
//! # Corner Ordering
//!
//! Hexahedra use the VTK / LS-DYNA corner order: bottom face `0..4`, top
//! face `4..8`, bottom wound counter-clockwise when seen from the top.
//! Correctly oriented elements have positive [`HexCell::signed_volume`].
//!
//! # Units
//!
//! This library is **unit-agnostic**. All coordinates are `f64`.
//!
//! # Example
//!
//! ```
//! use mesh_types::{HexMesh, Hexahedron, Node, MeshTopology};
//!
//! let mut mesh = HexMesh::new();
//! for (i, z) in [0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0].iter().enumerate() {
//!     let (x, y) = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)][i % 4];
//!     mesh.nodes.push(Node::from_coords(i as u32 + 1, x, y, *z));
//! }
//! mesh.elements.push(Hexahedron::new(1, [1, 2, 3, 4, 5, 6, 7, 8]));
//!
//! assert_eq!(mesh.element_count(), 1);
//! assert!(mesh.cell(0).is_some_and(|c| c.signed_volume() > 0.0));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

mod bounds;
mod hexahedron;
mod mesh;
mod node;
mod traits;

pub use bounds::Aabb;
pub use hexahedron::{HexCell, Hexahedron};
pub use mesh::HexMesh;
pub use node::Node;
pub use traits::{MeshBounds, MeshTopology};

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
