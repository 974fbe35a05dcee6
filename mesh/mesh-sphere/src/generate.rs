//! Sphere mesh generation pipeline.
//!
//! Resolve the configuration, build the cube lattice, project it onto the
//! sphere, interpolate the radial layers, connect the hexahedra, compact the
//! node array and move the result to the sphere center.

use std::ops::RangeInclusive;

use mesh_types::{HexMesh, MeshTopology, Node};
use nalgebra::Point3;
use tracing::{debug, info};

use crate::compact::compact;
use crate::config::{MeshConfig, surface_point_count};
use crate::connectivity::build_connectivity;
use crate::error::SphereResult;
use crate::lattice::CubeLattice;
use crate::params::SphereMeshParams;
use crate::projection::{curved_inner_shell, project};
use crate::spacing::{interpolate_layers, layer_denominators};

/// Generates a hexahedral mesh of one sphere.
///
/// # Arguments
///
/// * `params` - Sphere and meshing parameters
///
/// # Returns
///
/// A [`SphereMeshResult`] with a locally numbered mesh: node ids
/// `1..=node_count`, element ids `1..=element_count`.
///
/// # Errors
///
/// Returns [`crate::SphereMeshError`] if:
/// - The parameters are invalid
/// - The element length is too coarse for the radius
/// - The mesh would not fit the `u32` id space
///
/// # Examples
///
/// ```
/// use mesh_sphere::{generate_sphere_mesh, SpacingMethod, SphereMeshParams};
///
/// let params = SphereMeshParams::spherified(1.0, 0.5)
///     .with_spacing_method(SpacingMethod::Linear);
/// let result = generate_sphere_mesh(&params).unwrap();
///
/// assert_eq!(result.element_count(), 189);
/// assert_eq!(result.node_count(), 232);
/// ```
pub fn generate_sphere_mesh(params: &SphereMeshParams) -> SphereResult<SphereMeshResult> {
    params.validate()?;

    let config = MeshConfig::resolve(
        params.mesh_method,
        params.spacing_method,
        params.radius,
        params.element_length,
    )?;

    info!(
        method = %config.mesh_method,
        spacing = %config.spacing_method,
        radius = params.radius,
        element_length = params.element_length,
        "Starting sphere meshing"
    );

    let (mut mesh, removed_nodes) = mesh_from_config(&config)?;
    mesh.translate(params.center.coords);

    info!(
        real_element_length = format!("{:.6}", config.real_element_length),
        nodes = mesh.node_count(),
        elements = mesh.element_count(),
        "Sphere meshing complete"
    );

    Ok(SphereMeshResult {
        mesh,
        config,
        center: params.center,
        removed_nodes,
    })
}

/// Builds the sphere mesh for a resolved configuration, centered at the
/// origin.
///
/// Returns the compacted mesh and the number of nodes compaction removed.
///
/// # Errors
///
/// Returns [`crate::SphereMeshError::InternalConsistency`] if the
/// connectivity references a node outside the stacked node array.
pub fn mesh_from_config(config: &MeshConfig) -> SphereResult<(HexMesh, usize)> {
    let half_length = config.half_length;
    let projection = config.mesh_method.projection();

    let lattice = CubeLattice::build(half_length, config.edge_elements);
    let outer = project(
        &lattice.points,
        projection,
        half_length,
        config.sphere_radius(),
    );
    let inner = if config.mesh_method.has_curved_inner() {
        curved_inner_shell(&lattice.points, projection, half_length)
    } else {
        lattice.points
    };

    let denominators = layer_denominators(
        config.spacing_method,
        config.layer_count,
        config.spacing_factor,
    );
    let nodes = interpolate_layers(&inner, &outer, config.layer_count, &denominators);
    let cells = build_connectivity(config.edge_elements, config.layer_count);

    debug!(
        lattice_points = inner.len(),
        stacked_nodes = nodes.len(),
        cells = cells.len(),
        "Built lattice layers and connectivity"
    );

    let mesh = compact(&nodes, &cells)?;
    let removed = nodes.len() - mesh.node_count();

    debug!(kept = mesh.node_count(), removed, "Compacted node array");

    Ok((mesh, removed))
}

/// Result of meshing one sphere.
#[derive(Debug, Clone, PartialEq)]
pub struct SphereMeshResult {
    /// The generated mesh, translated to `center`.
    pub mesh: HexMesh,

    /// The resolved configuration the mesh was built from.
    pub config: MeshConfig,

    /// Sphere center.
    pub center: Point3<f64>,

    /// Number of stacked-array nodes dropped by compaction.
    pub removed_nodes: usize,
}

impl SphereMeshResult {
    /// Returns the number of nodes in the mesh.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.mesh.node_count()
    }

    /// Returns the number of elements in the mesh.
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.mesh.element_count()
    }

    /// Radius of the outer sphere.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.config.sphere_radius()
    }

    /// Element length the lattice actually achieves.
    #[must_use]
    pub const fn real_element_length(&self) -> f64 {
        self.config.real_element_length
    }

    /// Id range of the nodes on the outer sphere surface.
    ///
    /// Compaction keeps block order, so the outermost layer's surface nodes
    /// are always the last ids.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_sphere::{generate_sphere_mesh, SphereMeshParams};
    ///
    /// let result = generate_sphere_mesh(&SphereMeshParams::normalized(1.0, 0.25)).unwrap();
    /// let ids = result.surface_node_ids();
    /// assert_eq!(*ids.end() as usize, result.node_count());
    /// ```
    #[must_use]
    pub fn surface_node_ids(&self) -> RangeInclusive<u32> {
        let total = self.mesh.nodes.len();
        let surface = surface_point_count(self.config.edge_elements).min(total);
        let first = u32::try_from(total - surface + 1).unwrap_or(u32::MAX);
        let last = u32::try_from(total).unwrap_or(u32::MAX);
        first..=last
    }

    /// The nodes on the outer sphere surface.
    pub fn surface_nodes(&self) -> impl Iterator<Item = &Node> {
        let surface = surface_point_count(self.config.edge_elements);
        let skip = self.mesh.nodes.len().saturating_sub(surface);
        self.mesh.nodes[skip..].iter()
    }
}
