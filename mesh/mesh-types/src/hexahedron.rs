//! Eight-node hexahedral elements.

use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tetrahedra splitting a hexahedron around its 0-6 diagonal.
///
/// Each tuple is wound so that a right-handed unit cube in VTK order
/// yields six positive volumes.
const DIAGONAL_TETS: [[usize; 4]; 6] = [
    [0, 1, 2, 6],
    [0, 2, 3, 6],
    [0, 3, 7, 6],
    [0, 7, 4, 6],
    [0, 4, 5, 6],
    [0, 5, 1, 6],
];

/// An eight-node hexahedral solid element referencing nodes by id.
///
/// # Corner Ordering
///
/// Corners follow the VTK / LS-DYNA convention: `corners[0..4]` is the
/// bottom face and `corners[4..8]` the top face, with `corners[i + 4]`
/// directly above `corners[i]`. The bottom face is wound counter-clockwise
/// when viewed from the top face, which gives a positive signed volume.
///
/// # Example
///
/// ```
/// use mesh_types::Hexahedron;
///
/// let hex = Hexahedron::new(1, [1, 2, 3, 4, 5, 6, 7, 8]);
/// assert_eq!(hex.bottom(), [1, 2, 3, 4]);
/// assert_eq!(hex.top(), [5, 6, 7, 8]);
/// assert!(hex.has_distinct_corners());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Hexahedron {
    /// 1-based element id.
    pub id: u32,
    /// Node ids of the eight corners.
    pub corners: [u32; 8],
}

impl Hexahedron {
    /// Create an element from its id and corner node ids.
    #[inline]
    #[must_use]
    pub const fn new(id: u32, corners: [u32; 8]) -> Self {
        Self { id, corners }
    }

    /// Node ids of the bottom face.
    #[inline]
    #[must_use]
    pub const fn bottom(&self) -> [u32; 4] {
        [self.corners[0], self.corners[1], self.corners[2], self.corners[3]]
    }

    /// Node ids of the top face.
    #[inline]
    #[must_use]
    pub const fn top(&self) -> [u32; 4] {
        [self.corners[4], self.corners[5], self.corners[6], self.corners[7]]
    }

    /// Check that no node id appears twice among the corners.
    #[must_use]
    pub fn has_distinct_corners(&self) -> bool {
        let mut sorted = self.corners;
        sorted.sort_unstable();
        sorted.windows(2).all(|w| w[0] != w[1])
    }
}

/// A hexahedron with its corner positions resolved.
///
/// This is the geometric counterpart of [`Hexahedron`], in the same way a
/// resolved triangle relates to an index triple.
///
/// # Example
///
/// ```
/// use mesh_types::{HexCell, Point3};
///
/// let cell = HexCell::new([
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(2.0, 0.0, 0.0),
///     Point3::new(2.0, 1.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
///     Point3::new(0.0, 0.0, 1.0),
///     Point3::new(2.0, 0.0, 1.0),
///     Point3::new(2.0, 1.0, 1.0),
///     Point3::new(0.0, 1.0, 1.0),
/// ]);
/// assert!((cell.signed_volume() - 2.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HexCell {
    /// Corner positions in element corner order.
    pub corners: [Point3<f64>; 8],
}

impl HexCell {
    /// Create a cell from eight corner positions.
    #[inline]
    #[must_use]
    pub const fn new(corners: [Point3<f64>; 8]) -> Self {
        Self { corners }
    }

    /// Signed volume from a six-tetrahedra split around the 0-6 diagonal.
    ///
    /// Exact for cells with planar faces. For warped faces it is the volume
    /// of this particular piecewise-linear interpolation. Negative values
    /// mean the corner ordering is inverted.
    #[must_use]
    pub fn signed_volume(&self) -> f64 {
        let c = &self.corners;
        DIAGONAL_TETS
            .iter()
            .map(|&[a, b, d, e]| {
                let ab = c[b] - c[a];
                let ad = c[d] - c[a];
                let ae = c[e] - c[a];
                ab.dot(&ad.cross(&ae))
            })
            .sum::<f64>()
            / 6.0
    }

    /// Absolute volume.
    #[inline]
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.signed_volume().abs()
    }

    /// Arithmetic mean of the eight corners.
    #[must_use]
    pub fn centroid(&self) -> Point3<f64> {
        let sum = self
            .corners
            .iter()
            .fold(nalgebra::Vector3::zeros(), |acc, p| acc + p.coords);
        Point3::from(sum / 8.0)
    }

    /// Shortest distance between two corners connected by an element edge.
    #[must_use]
    pub fn min_edge_length(&self) -> f64 {
        const EDGES: [(usize, usize); 12] = [
            (0, 1),
            (1, 2),
            (2, 3),
            (3, 0),
            (4, 5),
            (5, 6),
            (6, 7),
            (7, 4),
            (0, 4),
            (1, 5),
            (2, 6),
            (3, 7),
        ];
        EDGES
            .iter()
            .map(|&(a, b)| nalgebra::distance(&self.corners[a], &self.corners[b]))
            .fold(f64::INFINITY, f64::min)
    }
}
