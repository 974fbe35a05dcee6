//! Mesh integrity checks.
//!
//! Verifies the structural guarantees of generated meshes before they are
//! handed to a solver: every corner resolves, every node is used, ids are
//! contiguous and no element is collapsed or inverted. Ids may start at any
//! offset, so merged batches validate the same way as single spheres.

#![allow(clippy::cast_precision_loss)]

use hashbrown::HashSet;
use mesh_types::{HexMesh, MeshTopology};
use tracing::{debug, info, warn};

use crate::generate::SphereMeshResult;

/// Result of a mesh integrity check.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshIntegrity {
    /// Total node count.
    pub node_count: usize,
    /// Total element count.
    pub element_count: usize,
    /// Corner references to node ids that do not exist.
    pub dangling_references: usize,
    /// Nodes no element references.
    pub orphan_nodes: usize,
    /// Whether node ids count up by one from the first stored id.
    pub contiguous_node_ids: bool,
    /// Whether element ids count up by one from the first stored id.
    pub contiguous_element_ids: bool,
    /// Elements with a repeated corner id.
    pub repeated_corner_elements: usize,
    /// Elements with zero or negative signed volume.
    pub inverted_elements: usize,
    /// List of issues found.
    pub issues: Vec<IntegrityIssue>,
}

impl MeshIntegrity {
    /// Check if the mesh passed every check.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    /// Get the total number of issues found.
    #[must_use]
    pub fn issue_count(&self) -> usize {
        self.issues.len()
    }
}

impl std::fmt::Display for MeshIntegrity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Mesh Integrity:")?;
        writeln!(f, "  Nodes: {}", self.node_count)?;
        writeln!(f, "  Elements: {}", self.element_count)?;
        writeln!(f, "  Dangling references: {}", self.dangling_references)?;
        writeln!(f, "  Orphan nodes: {}", self.orphan_nodes)?;
        writeln!(
            f,
            "  Contiguous ids: nodes {}, elements {}",
            if self.contiguous_node_ids { "yes" } else { "NO" },
            if self.contiguous_element_ids { "yes" } else { "NO" }
        )?;
        writeln!(f, "  Repeated corners: {}", self.repeated_corner_elements)?;
        writeln!(f, "  Inverted elements: {}", self.inverted_elements)?;

        if !self.issues.is_empty() {
            writeln!(f, "  Issues ({}):", self.issues.len())?;
            for issue in &self.issues {
                writeln!(f, "    - {issue}")?;
            }
        }

        Ok(())
    }
}

/// Issues that can be found by [`validate_hex_mesh`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntegrityIssue {
    /// The mesh has no elements.
    EmptyMesh,
    /// Elements reference missing node ids.
    DanglingReferences {
        /// Number of unresolved corner references.
        count: usize,
    },
    /// Nodes are not used by any element.
    OrphanNodes {
        /// Number of unused nodes.
        count: usize,
    },
    /// Node ids do not count up by one in storage order.
    NonContiguousNodeIds,
    /// Element ids do not count up by one in storage order.
    NonContiguousElementIds,
    /// Elements list the same node more than once.
    RepeatedCorners {
        /// Number of affected elements.
        count: usize,
    },
    /// Elements have non-positive signed volume.
    InvertedElements {
        /// Number of affected elements.
        count: usize,
    },
}

impl std::fmt::Display for IntegrityIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyMesh => write!(f, "Mesh is empty (no elements)"),
            Self::DanglingReferences { count } => {
                write!(f, "{count} corner references point to missing nodes")
            }
            Self::OrphanNodes { count } => write!(f, "{count} nodes are not referenced"),
            Self::NonContiguousNodeIds => write!(f, "Node ids are not contiguous"),
            Self::NonContiguousElementIds => {
                write!(f, "Element ids are not contiguous")
            }
            Self::RepeatedCorners { count } => {
                write!(f, "{count} elements have repeated corners")
            }
            Self::InvertedElements { count } => {
                write!(f, "{count} elements have non-positive volume")
            }
        }
    }
}

/// Validate a hexahedral mesh.
///
/// Checks:
/// - Every corner reference resolves to an existing node
/// - Every node is referenced by some element
/// - Node and element ids are contiguous from their first id
/// - No element repeats a corner
/// - Every resolvable element has positive signed volume
///
/// # Example
///
/// ```
/// use mesh_sphere::{generate_sphere_mesh, validate_hex_mesh, SphereMeshParams};
///
/// let result = generate_sphere_mesh(&SphereMeshParams::normalized(1.0, 0.25)).unwrap();
/// let report = validate_hex_mesh(&result.mesh);
/// assert!(report.is_valid(), "{report}");
/// ```
#[must_use]
pub fn validate_hex_mesh(mesh: &HexMesh) -> MeshIntegrity {
    info!(
        nodes = mesh.node_count(),
        elements = mesh.element_count(),
        "Validating hex mesh"
    );

    let mut report = MeshIntegrity {
        node_count: mesh.node_count(),
        element_count: mesh.element_count(),
        contiguous_node_ids: ids_are_consecutive(mesh.nodes.iter().map(|n| n.id)),
        contiguous_element_ids: ids_are_consecutive(mesh.elements.iter().map(|e| e.id)),
        ..MeshIntegrity::default()
    };

    if mesh.elements.is_empty() {
        report.issues.push(IntegrityIssue::EmptyMesh);
        warn!("Mesh has no elements");
        return report;
    }

    let node_ids: HashSet<u32> = mesh.nodes.iter().map(|n| n.id).collect();
    let mut referenced: HashSet<u32> = HashSet::with_capacity(mesh.nodes.len());

    for element in &mesh.elements {
        for &corner in &element.corners {
            if node_ids.contains(&corner) {
                referenced.insert(corner);
            } else {
                report.dangling_references += 1;
            }
        }
        if !element.has_distinct_corners() {
            report.repeated_corner_elements += 1;
        }
    }

    report.orphan_nodes = mesh
        .nodes
        .iter()
        .filter(|n| !referenced.contains(&n.id))
        .count();
    report.inverted_elements = mesh.cells().filter(|c| c.signed_volume() <= 0.0).count();

    collect_issues(&mut report);

    if report.is_valid() {
        info!("Hex mesh validation passed");
    } else {
        warn!(issues = report.issue_count(), "Hex mesh validation found issues");
    }

    debug!("{}", report);

    report
}

/// True if every id is one more than the previous.
fn ids_are_consecutive(mut ids: impl Iterator<Item = u32>) -> bool {
    let Some(mut previous) = ids.next() else {
        return true;
    };
    ids.all(|id| {
        let next = previous.checked_add(1) == Some(id);
        previous = id;
        next
    })
}

fn collect_issues(report: &mut MeshIntegrity) {
    if report.dangling_references > 0 {
        warn!(
            count = report.dangling_references,
            "Mesh has dangling corner references"
        );
        report.issues.push(IntegrityIssue::DanglingReferences {
            count: report.dangling_references,
        });
    }
    if report.orphan_nodes > 0 {
        warn!(count = report.orphan_nodes, "Mesh has orphan nodes");
        report.issues.push(IntegrityIssue::OrphanNodes {
            count: report.orphan_nodes,
        });
    }
    if !report.contiguous_node_ids {
        warn!("Node ids are not contiguous");
        report.issues.push(IntegrityIssue::NonContiguousNodeIds);
    }
    if !report.contiguous_element_ids {
        warn!("Element ids are not contiguous");
        report.issues.push(IntegrityIssue::NonContiguousElementIds);
    }
    if report.repeated_corner_elements > 0 {
        warn!(
            count = report.repeated_corner_elements,
            "Mesh has elements with repeated corners"
        );
        report.issues.push(IntegrityIssue::RepeatedCorners {
            count: report.repeated_corner_elements,
        });
    }
    if report.inverted_elements > 0 {
        warn!(count = report.inverted_elements, "Mesh has inverted elements");
        report.issues.push(IntegrityIssue::InvertedElements {
            count: report.inverted_elements,
        });
    }
}

/// Radial deviation of the surface nodes from the requested sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceDeviation {
    /// Number of surface nodes measured.
    pub count: usize,
    /// Mean signed deviation `|p - center| - radius`.
    pub mean: f64,
    /// Largest signed deviation.
    pub max: f64,
    /// Smallest signed deviation.
    pub min: f64,
    /// Mean squared deviation.
    pub mean_square: f64,
}

impl SurfaceDeviation {
    /// Largest absolute deviation.
    #[must_use]
    pub fn max_abs(&self) -> f64 {
        self.max.abs().max(self.min.abs())
    }
}

/// Measure how far the surface nodes of a generated sphere sit from the
/// sphere of the requested radius around its center.
#[must_use]
pub fn surface_deviation(result: &SphereMeshResult) -> SurfaceDeviation {
    let radius = result.radius();
    let mut deviation = SurfaceDeviation {
        count: 0,
        mean: 0.0,
        max: f64::NEG_INFINITY,
        min: f64::INFINITY,
        mean_square: 0.0,
    };

    for node in result.surface_nodes() {
        let d = node.distance_to(&result.center) - radius;
        deviation.count += 1;
        deviation.mean += d;
        deviation.mean_square += d * d;
        deviation.max = deviation.max.max(d);
        deviation.min = deviation.min.min(d);
    }

    if deviation.count == 0 {
        return SurfaceDeviation {
            count: 0,
            mean: 0.0,
            max: 0.0,
            min: 0.0,
            mean_square: 0.0,
        };
    }

    let n = deviation.count as f64;
    deviation.mean /= n;
    deviation.mean_square /= n;
    deviation
}
