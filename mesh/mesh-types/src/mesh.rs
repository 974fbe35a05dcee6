//! Hexahedral solid mesh.

use crate::{Aabb, HexCell, Hexahedron, MeshBounds, MeshTopology, Node};
use hashbrown::HashMap;
use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A hexahedral solid mesh.
///
/// Nodes and elements are stored as plain arrays, the way explicit solvers
/// consume them. Elements reference nodes by 1-based node id, not by array
/// position.
///
/// # Memory Layout
///
/// - `nodes`: `Vec<Node>` - numbered node coordinates
/// - `elements`: `Vec<Hexahedron>` - numbered eight-node elements
///
/// A mesh is *locally numbered* when node ids run `1..=nodes.len()` and
/// element ids run `1..=elements.len()` in storage order. Meshes produced
/// by the sphere generator are always locally numbered.
///
/// # Example
///
/// ```
/// use mesh_types::{HexMesh, Hexahedron, Node, MeshTopology};
///
/// let mut mesh = HexMesh::new();
/// for (i, &(x, y, z)) in [
///     (0.0, 0.0, 0.0), (1.0, 0.0, 0.0), (1.0, 1.0, 0.0), (0.0, 1.0, 0.0),
///     (0.0, 0.0, 1.0), (1.0, 0.0, 1.0), (1.0, 1.0, 1.0), (0.0, 1.0, 1.0),
/// ].iter().enumerate() {
///     mesh.nodes.push(Node::from_coords(i as u32 + 1, x, y, z));
/// }
/// mesh.elements.push(Hexahedron::new(1, [1, 2, 3, 4, 5, 6, 7, 8]));
///
/// assert!(mesh.is_locally_numbered());
/// assert!((mesh.total_volume() - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HexMesh {
    /// Node data.
    pub nodes: Vec<Node>,

    /// Hexahedral elements referencing node ids.
    pub elements: Vec<Hexahedron>,
}

impl HexMesh {
    /// Create a new empty mesh.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            nodes: Vec::new(),
            elements: Vec::new(),
        }
    }

    /// Create a mesh with pre-allocated capacity.
    #[inline]
    #[must_use]
    pub fn with_capacity(node_count: usize, element_count: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(node_count),
            elements: Vec::with_capacity(element_count),
        }
    }

    /// Create a mesh from nodes and elements.
    #[inline]
    #[must_use]
    pub const fn from_parts(nodes: Vec<Node>, elements: Vec<Hexahedron>) -> Self {
        Self { nodes, elements }
    }

    /// Check whether node and element ids are `1..=len` in storage order.
    #[must_use]
    pub fn is_locally_numbered(&self) -> bool {
        let nodes_ok = self
            .nodes
            .iter()
            .zip(1u32..)
            .all(|(node, expected)| node.id == expected);
        let elements_ok = self
            .elements
            .iter()
            .zip(1u32..)
            .all(|(element, expected)| element.id == expected);
        nodes_ok && elements_ok
    }

    /// Translate every node by the given vector.
    pub fn translate(&mut self, offset: Vector3<f64>) {
        for node in &mut self.nodes {
            node.position += offset;
        }
    }

    /// Sum of the signed element volumes.
    #[must_use]
    pub fn total_volume(&self) -> f64 {
        self.cells().map(|cell| cell.signed_volume()).sum()
    }

    /// Return a copy with every node id shifted by `node_offset` and every
    /// element id by `element_offset`. Corner references follow the node
    /// shift.
    ///
    /// Returns `None` if any shifted id would overflow `u32`.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::{HexMesh, Hexahedron, Node};
    ///
    /// let mesh = HexMesh::from_parts(
    ///     (1..=8).map(|id| Node::from_coords(id, 0.0, 0.0, f64::from(id))).collect(),
    ///     vec![Hexahedron::new(1, [1, 2, 3, 4, 5, 6, 7, 8])],
    /// );
    /// let shifted = mesh.renumbered(100, 10).unwrap();
    /// assert_eq!(shifted.nodes[0].id, 101);
    /// assert_eq!(shifted.elements[0].id, 11);
    /// assert_eq!(shifted.elements[0].corners[7], 108);
    /// ```
    #[must_use]
    pub fn renumbered(&self, node_offset: u32, element_offset: u32) -> Option<Self> {
        let nodes = self
            .nodes
            .iter()
            .map(|n| n.id.checked_add(node_offset).map(|id| Node::new(id, n.position)))
            .collect::<Option<Vec<_>>>()?;

        let elements = self
            .elements
            .iter()
            .map(|e| {
                let id = e.id.checked_add(element_offset)?;
                let mut corners = e.corners;
                for c in &mut corners {
                    *c = c.checked_add(node_offset)?;
                }
                Some(Hexahedron::new(id, corners))
            })
            .collect::<Option<Vec<_>>>()?;

        Some(Self { nodes, elements })
    }

    /// Move all nodes and elements of `other` to the end of this mesh.
    ///
    /// Ids are taken as-is; use [`HexMesh::renumbered`] first when the two
    /// id spaces overlap.
    pub fn append(&mut self, mut other: Self) {
        self.nodes.append(&mut other.nodes);
        self.elements.append(&mut other.elements);
    }

    /// Reserve capacity for additional nodes and elements.
    pub fn reserve(&mut self, additional_nodes: usize, additional_elements: usize) {
        self.nodes.reserve(additional_nodes);
        self.elements.reserve(additional_elements);
    }

    /// Id of the first stored node, if ids run consecutively from it.
    ///
    /// True for locally numbered meshes and for meshes shifted with
    /// [`HexMesh::renumbered`] or merged in order with [`HexMesh::append`].
    #[must_use]
    pub fn consecutive_node_start(&self) -> Option<u32> {
        let first = self.nodes.first()?.id;
        consecutive_from(first, self.nodes.iter().map(|n| n.id)).then_some(first)
    }

    fn resolve(&self, index: &NodeIndex, element: &Hexahedron) -> Option<HexCell> {
        let mut corners = [nalgebra::Point3::origin(); 8];
        for (slot, &id) in corners.iter_mut().zip(&element.corners) {
            *slot = self.nodes.get(index.position(id)?)?.position;
        }
        Some(HexCell::new(corners))
    }
}

/// True if `ids` are `first, first + 1, ...` without overflow.
fn consecutive_from(first: u32, ids: impl Iterator<Item = u32>) -> bool {
    let mut expected = Some(first);
    for id in ids {
        if expected != Some(id) {
            return false;
        }
        expected = id.checked_add(1);
    }
    true
}

/// Node id to array position, built once per pass over the elements.
enum NodeIndex {
    /// Ids run consecutively from the given first id.
    Offset(u32),
    /// Arbitrary ids; the last node wins on duplicates.
    Map(HashMap<u32, usize>),
}

impl NodeIndex {
    fn build(mesh: &HexMesh) -> Self {
        match mesh.consecutive_node_start() {
            Some(first) => Self::Offset(first),
            None => Self::Map(
                mesh.nodes
                    .iter()
                    .enumerate()
                    .map(|(position, node)| (node.id, position))
                    .collect(),
            ),
        }
    }

    fn position(&self, id: u32) -> Option<usize> {
        match self {
            Self::Offset(first) => usize::try_from(id.checked_sub(*first)?).ok(),
            Self::Map(map) => map.get(&id).copied(),
        }
    }
}

impl MeshTopology for HexMesh {
    #[inline]
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    fn element_count(&self) -> usize {
        self.elements.len()
    }

    fn node(&self, id: u32) -> Option<&Node> {
        // Ids counted from the first stored node resolve in O(1), which covers
        // local and offset numbering. Anything else falls back to a scan.
        let first = self.nodes.first()?.id;
        let direct = id
            .checked_sub(first)
            .and_then(|offset| usize::try_from(offset).ok())
            .and_then(|index| self.nodes.get(index))
            .filter(|node| node.id == id);
        direct.or_else(|| self.nodes.iter().find(|n| n.id == id))
    }

    #[inline]
    fn element(&self, index: usize) -> Option<&Hexahedron> {
        self.elements.get(index)
    }

    fn cell(&self, index: usize) -> Option<HexCell> {
        let element = self.elements.get(index)?;
        let mut corners = [nalgebra::Point3::origin(); 8];
        for (slot, &id) in corners.iter_mut().zip(&element.corners) {
            *slot = self.node(id)?.position;
        }
        Some(HexCell::new(corners))
    }

    fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    fn elements(&self) -> impl Iterator<Item = &Hexahedron> {
        self.elements.iter()
    }

    fn cells(&self) -> impl Iterator<Item = HexCell> {
        let index = NodeIndex::build(self);
        self.elements
            .iter()
            .filter_map(move |e| self.resolve(&index, e))
    }
}

impl MeshBounds for HexMesh {
    fn bounds(&self) -> Aabb {
        Aabb::from_points(self.nodes.iter().map(|n| &n.position))
    }
}
