//! Mesh nodes.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A numbered point of a finite-element mesh.
///
/// Node ids are 1-based, as expected by explicit solvers. Within a
/// finalized [`HexMesh`](crate::HexMesh) the node with id `k` is stored at
/// index `k - 1`.
///
/// # Example
///
/// ```
/// use mesh_types::Node;
///
/// let node = Node::from_coords(1, 0.0, 3.0, 4.0);
/// assert_eq!(node.id, 1);
/// assert!((node.distance_to_origin() - 5.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Node {
    /// 1-based node id.
    pub id: u32,
    /// Node coordinates.
    pub position: Point3<f64>,
}

impl Node {
    /// Create a node from an id and a position.
    #[inline]
    #[must_use]
    pub const fn new(id: u32, position: Point3<f64>) -> Self {
        Self { id, position }
    }

    /// Create a node from an id and raw coordinates.
    #[inline]
    #[must_use]
    pub fn from_coords(id: u32, x: f64, y: f64, z: f64) -> Self {
        Self::new(id, Point3::new(x, y, z))
    }

    /// Euclidean distance to another point.
    #[inline]
    #[must_use]
    pub fn distance_to(&self, point: &Point3<f64>) -> f64 {
        nalgebra::distance(&self.position, point)
    }

    /// Euclidean distance to the coordinate origin.
    #[inline]
    #[must_use]
    pub fn distance_to_origin(&self) -> f64 {
        self.position.coords.norm()
    }

    /// Return a copy moved by `offset`.
    #[inline]
    #[must_use]
    pub fn translated(&self, offset: &Vector3<f64>) -> Self {
        Self::new(self.id, self.position + offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn node_distance() {
        let node = Node::from_coords(7, 1.0, 2.0, 2.0);
        assert_relative_eq!(node.distance_to_origin(), 3.0);
        assert_relative_eq!(node.distance_to(&Point3::new(1.0, 2.0, 0.0)), 2.0);
    }

    #[test]
    fn node_translated_keeps_id() {
        let node = Node::from_coords(3, 1.0, 1.0, 1.0);
        let moved = node.translated(&Vector3::new(-1.0, 0.0, 2.0));
        assert_eq!(moved.id, 3);
        assert_relative_eq!(moved.position, Point3::new(0.0, 1.0, 3.0));
    }
}
