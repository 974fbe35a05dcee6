//! Traits for mesh types.

use crate::{Aabb, HexCell, Hexahedron, Node};
use nalgebra::Point3;

/// Trait for types that provide solid-mesh topology information.
///
/// This is the minimal interface the validation and assembly code works
/// against.
pub trait MeshTopology {
    /// Number of nodes.
    fn node_count(&self) -> usize;

    /// Number of elements.
    fn element_count(&self) -> usize;

    /// Check if the mesh is empty.
    fn is_empty(&self) -> bool {
        self.node_count() == 0 || self.element_count() == 0
    }

    /// Get a node by its 1-based id.
    ///
    /// Returns `None` if no node carries that id.
    fn node(&self, id: u32) -> Option<&Node>;

    /// Get an element by position in the element array.
    fn element(&self, index: usize) -> Option<&Hexahedron>;

    /// Get the element at `index` with resolved corner positions.
    ///
    /// Returns `None` if the index is out of bounds or a corner id does not
    /// resolve to a node.
    fn cell(&self, index: usize) -> Option<HexCell>;

    /// Iterate over all nodes.
    fn nodes(&self) -> impl Iterator<Item = &Node>;

    /// Iterate over all elements.
    fn elements(&self) -> impl Iterator<Item = &Hexahedron>;

    /// Iterate over every element whose corners all resolve.
    fn cells(&self) -> impl Iterator<Item = HexCell>;
}

/// Trait for types that can compute a bounding box.
pub trait MeshBounds {
    /// Compute the axis-aligned bounding box.
    ///
    /// Returns an empty AABB if the mesh has no nodes.
    fn bounds(&self) -> Aabb;

    /// Compute the bounding box, returning `None` if empty.
    fn bounds_opt(&self) -> Option<Aabb> {
        let b = self.bounds();
        if b.is_empty() { None } else { Some(b) }
    }

    /// Get the center of the bounding box.
    fn center(&self) -> Point3<f64> {
        self.bounds().center()
    }
}
