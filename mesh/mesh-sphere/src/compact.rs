//! Removal of unreferenced nodes and contiguous renumbering.

use mesh_types::{HexMesh, Hexahedron, Node};
use nalgebra::Point3;

use crate::error::{SphereMeshError, SphereResult};

/// Turn the stacked node array and 0-based cells into a locally numbered
/// [`HexMesh`].
///
/// Nodes no cell references are dropped. The survivors keep their relative
/// order and get ids `1..=n`; elements get ids `1..=m` in input order and
/// their corners are rewritten to the new node ids.
///
/// # Errors
///
/// Returns [`SphereMeshError::InternalConsistency`] if a cell references an
/// index outside `points`.
///
/// # Example
///
/// ```
/// use mesh_sphere::compact;
/// use mesh_types::MeshTopology;
/// use nalgebra::Point3;
///
/// let points: Vec<_> = (0..10).map(|i| Point3::new(f64::from(i), 0.0, 0.0)).collect();
/// let mesh = compact(&points, &[[1, 2, 3, 4, 6, 7, 8, 9]]).unwrap();
///
/// assert_eq!(mesh.node_count(), 8);
/// assert_eq!(mesh.elements[0].corners, [1, 2, 3, 4, 5, 6, 7, 8]);
/// assert_eq!(mesh.nodes[4].position.x, 6.0);
/// ```
pub fn compact(points: &[Point3<f64>], cells: &[[usize; 8]]) -> SphereResult<HexMesh> {
    let mut referenced = vec![false; points.len()];
    for (element, cell) in cells.iter().enumerate() {
        for &index in cell {
            match referenced.get_mut(index) {
                Some(slot) => *slot = true,
                None => {
                    return Err(SphereMeshError::InternalConsistency {
                        element,
                        index,
                        node_count: points.len(),
                    });
                }
            }
        }
    }

    // new id of every kept node, 0 for dropped ones
    let mut new_ids = vec![0u32; points.len()];
    let mut nodes = Vec::with_capacity(referenced.iter().filter(|&&r| r).count());
    let mut next_id = 0u32;
    for ((point, &keep), slot) in points.iter().zip(&referenced).zip(&mut new_ids) {
        if keep {
            next_id += 1;
            *slot = next_id;
            nodes.push(Node::new(next_id, *point));
        }
    }

    let elements = cells
        .iter()
        .zip(1u32..)
        .map(|(cell, id)| Hexahedron::new(id, cell.map(|index| new_ids[index])))
        .collect();

    Ok(HexMesh::from_parts(nodes, elements))
}
