//! Batch meshing of shots into one hexahedral mesh.
//!
//! Every shot is meshed on its own with [`generate_sphere_mesh`], in
//! parallel when requested, and the results are merged in shot order. Each
//! shot's node ids, element ids and corner references are shifted by the
//! counts of all earlier shots plus a global id offset, so the merged mesh
//! has one contiguous id space starting at `id_offset + 1`.

use std::ops::RangeInclusive;

use mesh_sphere::{
    MeshConfig, MeshMethod, SpacingMethod, SphereMeshParams, SphereMeshResult,
    generate_sphere_mesh,
};
use mesh_types::{HexMesh, MeshTopology};
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::error::{AssemblyError, AssemblyResult};
use crate::shot::Shot;
use crate::validation::find_overlaps;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Parameters shared by every shot of a batch.
///
/// # Example
///
/// ```
/// use mesh_assembly::BatchParams;
/// use mesh_sphere::SpacingMethod;
///
/// let params = BatchParams::new(0.04)
///     .with_spacing_method(SpacingMethod::Linear)
///     .with_part_id(3)
///     .with_id_offset(1_000_000);
/// assert!(params.parallel);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BatchParams {
    /// Projection and inner-surface variant for every shot.
    pub mesh_method: MeshMethod,
    /// Radial spacing for every shot.
    pub spacing_method: SpacingMethod,
    /// Requested element length for every shot.
    pub element_length: f64,
    /// Solver part id the batch is assigned to.
    pub part_id: u32,
    /// Added to every node and element id of the merged mesh.
    pub id_offset: u32,
    /// Mesh shots on the rayon thread pool.
    pub parallel: bool,
}

impl Default for BatchParams {
    fn default() -> Self {
        Self {
            mesh_method: MeshMethod::default(),
            spacing_method: SpacingMethod::default(),
            element_length: 0.1,
            part_id: 1,
            id_offset: 0,
            parallel: true,
        }
    }
}

impl BatchParams {
    /// Default parameters with the given element length.
    #[must_use]
    pub fn new(element_length: f64) -> Self {
        Self {
            element_length,
            ..Self::default()
        }
    }

    /// Sets the mesh method.
    #[must_use]
    pub const fn with_mesh_method(mut self, method: MeshMethod) -> Self {
        self.mesh_method = method;
        self
    }

    /// Sets the radial spacing method.
    #[must_use]
    pub const fn with_spacing_method(mut self, method: SpacingMethod) -> Self {
        self.spacing_method = method;
        self
    }

    /// Sets the solver part id.
    #[must_use]
    pub const fn with_part_id(mut self, part_id: u32) -> Self {
        self.part_id = part_id;
        self
    }

    /// Sets the global id offset.
    #[must_use]
    pub const fn with_id_offset(mut self, offset: u32) -> Self {
        self.id_offset = offset;
        self
    }

    /// Enables or disables parallel meshing.
    #[must_use]
    pub const fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sphere parameters for one shot.
    #[must_use]
    pub fn sphere_params(&self, shot: &Shot) -> SphereMeshParams {
        SphereMeshParams::new()
            .with_mesh_method(self.mesh_method)
            .with_spacing_method(self.spacing_method)
            .with_radius(shot.radius)
            .with_element_length(self.element_length)
            .with_center(shot.center)
    }
}

/// Where one shot landed in the merged mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct ShotRecord {
    /// The shot.
    pub shot: Shot,
    /// Resolved mesh configuration of the shot.
    pub config: MeshConfig,
    /// Node ids of the shot in the merged mesh.
    pub node_ids: RangeInclusive<u32>,
    /// Element ids of the shot in the merged mesh.
    pub element_ids: RangeInclusive<u32>,
}

impl ShotRecord {
    /// Number of nodes of this shot.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.node_ids.clone().count()
    }

    /// Number of elements of this shot.
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.element_ids.clone().count()
    }
}

/// A merged batch of meshed shots.
#[derive(Debug, Clone, PartialEq)]
pub struct ShotBatch {
    /// All nodes and elements, ids offset per shot.
    pub mesh: HexMesh,
    /// Solver part id of the batch.
    pub part_id: u32,
    /// One record per shot, in batch order.
    pub shots: Vec<ShotRecord>,
}

impl ShotBatch {
    /// Number of shots.
    #[must_use]
    pub fn shot_count(&self) -> usize {
        self.shots.len()
    }

    /// Total node count.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.mesh.node_count()
    }

    /// Total element count.
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.mesh.element_count()
    }

    /// Sum of the exact sphere volumes of all shots.
    #[must_use]
    pub fn shot_volume(&self) -> f64 {
        self.shots.iter().map(|r| r.shot.volume()).sum()
    }
}

/// Mesh every shot and merge the results into one id space.
///
/// # Errors
///
/// Returns [`AssemblyError`] if:
/// - `shots` is empty
/// - any shot cannot be meshed (reported with its index)
/// - the offset ids overflow `u32`
///
/// # Example
///
/// ```
/// use mesh_assembly::{assemble_batch, shots_from_coordinates, BatchParams};
///
/// let shots = shots_from_coordinates(
///     &[[0.0, 0.0, 2.0], [0.0, 2.0, 0.0], [2.0, 0.0, 0.0]],
///     &[1.0, 1.0, 1.0],
/// )
/// .unwrap();
/// let batch = assemble_batch(&shots, &BatchParams::new(0.25)).unwrap();
///
/// assert_eq!(batch.shot_count(), 3);
/// assert_eq!(batch.shots[1].node_ids.start() - 1, *batch.shots[0].node_ids.end());
/// ```
pub fn assemble_batch(shots: &[Shot], params: &BatchParams) -> AssemblyResult<ShotBatch> {
    if shots.is_empty() {
        return Err(AssemblyError::EmptyBatch);
    }

    info!(
        shots = shots.len(),
        element_length = params.element_length,
        method = %params.mesh_method,
        parallel = params.parallel,
        "Assembling shot batch"
    );

    let overlaps = find_overlaps(shots);
    if !overlaps.is_empty() {
        warn!(count = overlaps.len(), "Batch contains overlapping shots");
    }

    let mesh_shot = |(index, shot): (usize, &Shot)| {
        generate_sphere_mesh(&params.sphere_params(shot))
            .map_err(|source| AssemblyError::Shot { index, source })
    };

    let results: Vec<AssemblyResult<SphereMeshResult>> = if params.parallel {
        shots.par_iter().enumerate().map(mesh_shot).collect()
    } else {
        shots.iter().enumerate().map(mesh_shot).collect()
    };

    let meshed = results.into_iter().collect::<AssemblyResult<Vec<_>>>()?;
    let batch = merge(shots, meshed, params)?;

    info!(
        nodes = batch.node_count(),
        elements = batch.element_count(),
        "Shot batch assembled"
    );

    Ok(batch)
}

/// Serially offset and append every shot mesh.
fn merge(
    shots: &[Shot],
    meshed: Vec<SphereMeshResult>,
    params: &BatchParams,
) -> AssemblyResult<ShotBatch> {
    let total_nodes = meshed.iter().map(SphereMeshResult::node_count).sum();
    let total_elements = meshed.iter().map(SphereMeshResult::element_count).sum();

    let mut mesh = HexMesh::with_capacity(total_nodes, total_elements);
    let mut records = Vec::with_capacity(shots.len());
    let mut node_offset = params.id_offset;
    let mut element_offset = params.id_offset;

    for (index, (shot, result)) in shots.iter().zip(meshed).enumerate() {
        let overflow = || AssemblyError::IdOverflow { index };

        let nodes = u32::try_from(result.node_count()).map_err(|_| overflow())?;
        let elements = u32::try_from(result.element_count()).map_err(|_| overflow())?;
        let node_end = node_offset.checked_add(nodes).ok_or_else(overflow)?;
        let element_end = element_offset.checked_add(elements).ok_or_else(overflow)?;

        let shifted = result
            .mesh
            .renumbered(node_offset, element_offset)
            .ok_or_else(overflow)?;

        debug!(
            index,
            first_node = node_offset + 1,
            first_element = element_offset + 1,
            "Offset shot mesh"
        );

        records.push(ShotRecord {
            shot: *shot,
            config: result.config,
            node_ids: node_offset + 1..=node_end,
            element_ids: element_offset + 1..=element_end,
        });
        mesh.append(shifted);

        node_offset = node_end;
        element_offset = element_end;
    }

    Ok(ShotBatch {
        mesh,
        part_id: params.part_id,
        shots: records,
    })
}
