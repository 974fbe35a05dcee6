//! Batch meshing of shot-peening shots.
//!
//! A shot stream is a list of spheres. This crate meshes every shot with
//! [`mesh_sphere`] and merges the results into a single hexahedral mesh
//! with one contiguous id space, ready to be written as one solver part.
//!
//! # Overview
//!
//! - [`Shot`] - A sphere center and radius
//! - [`BatchParams`] - Meshing parameters shared by every shot
//! - [`assemble_batch`] - Mesh and merge a batch, optionally in parallel
//! - [`ShotBatch`] - The merged mesh plus per-shot id ranges
//! - [`check_overlaps`] - Report interpenetrating shots
//!
//! # Quick Start
//!
//! ```
//! use mesh_assembly::{assemble_batch, shots_from_coordinates, BatchParams};
//! use mesh_sphere::SpacingMethod;
//!
//! // Three unit shots placed on the coordinate axes
//! let shots = shots_from_coordinates(
//!     &[[0.0, 0.0, 2.0], [0.0, 2.0, 0.0], [2.0, 0.0, 0.0]],
//!     &[1.0, 1.0, 1.0],
//! )
//! .unwrap();
//!
//! let params = BatchParams::new(0.2).with_spacing_method(SpacingMethod::Linear);
//! let batch = assemble_batch(&shots, &params).unwrap();
//!
//! for record in &batch.shots {
//!     println!("nodes {:?}, elements {:?}", record.node_ids, record.element_ids);
//! }
//! ```
//!
//! # Id Offsets
//!
//! Shot `k` receives ids directly after shot `k - 1`. A global
//! [`BatchParams::id_offset`] shifts the whole batch so it can be combined
//! with other parts of a larger model without collisions.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

mod batch;
mod error;
mod shot;
mod validation;

pub use batch::{BatchParams, ShotBatch, ShotRecord, assemble_batch};
pub use error::{AssemblyError, AssemblyResult};
pub use shot::{Shot, shots_from_coordinates};
pub use validation::{Overlap, OverlapReport, check_overlaps, find_overlaps};

// Re-export commonly used types for convenience
pub use mesh_types::{HexMesh, Point3};
