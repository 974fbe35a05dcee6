//! Structured point lattice of the inner cube.

#![allow(clippy::cast_precision_loss)]

use nalgebra::Point3;

/// Flat-array strides of a cubic lattice.
///
/// Points are stored x fastest, then y, then z, so the point at integer
/// coordinates `(i, j, k)` lives at `k * grid2 + j * grid1 + i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatticeStrides {
    /// Elements along one edge.
    pub edge_elements: usize,
    /// Points along one edge, also the y stride.
    pub grid1: usize,
    /// Points in one z slice, also the z stride.
    pub grid2: usize,
    /// Points in the whole lattice, also the stride between stacked layers.
    pub grid3: usize,
}

impl LatticeStrides {
    /// Strides for a lattice with `edge_elements` elements per edge.
    #[must_use]
    pub const fn new(edge_elements: usize) -> Self {
        let grid1 = edge_elements + 1;
        let grid2 = grid1 * grid1;
        Self {
            edge_elements,
            grid1,
            grid2,
            grid3: grid2 * grid1,
        }
    }

    /// Flat index of lattice point `(i, j, k)`.
    #[inline]
    #[must_use]
    pub const fn index(&self, i: usize, j: usize, k: usize) -> usize {
        k * self.grid2 + j * self.grid1 + i
    }

    /// Integer coordinates of a flat index.
    #[inline]
    #[must_use]
    pub const fn coords(&self, index: usize) -> (usize, usize, usize) {
        (
            index % self.grid1,
            (index / self.grid1) % self.grid1,
            index / self.grid2,
        )
    }

    /// Whether the flat index lies on the cube surface.
    #[must_use]
    pub const fn is_surface(&self, index: usize) -> bool {
        let (i, j, k) = self.coords(index);
        let e = self.edge_elements;
        i == 0 || j == 0 || k == 0 || i == e || j == e || k == e
    }
}

/// The full Cartesian point lattice of the inner cube.
///
/// # Example
///
/// ```
/// use mesh_sphere::CubeLattice;
///
/// let lattice = CubeLattice::build(1.0, 2);
/// assert_eq!(lattice.points.len(), 27);
/// assert_eq!(lattice.points[0].x, -1.0);
/// assert_eq!(lattice.points[13].coords.norm(), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CubeLattice {
    /// Half side of the cube.
    pub half_length: f64,
    /// Index strides.
    pub strides: LatticeStrides,
    /// Lattice points, x fastest, then y, then z.
    pub points: Vec<Point3<f64>>,
}

impl CubeLattice {
    /// Build the `(edge_elements + 1)^3` lattice spanning
    /// `[-half_length, half_length]^3`.
    ///
    /// Coordinates are computed from integer offsets, so boundary points sit
    /// exactly on `±half_length` and the center of an even lattice is exactly
    /// the origin.
    #[must_use]
    pub fn build(half_length: f64, edge_elements: usize) -> Self {
        let strides = LatticeStrides::new(edge_elements);
        let axis = axis_coordinates(half_length, edge_elements);

        let mut points = Vec::with_capacity(strides.grid3);
        for &z in &axis {
            for &y in &axis {
                for &x in &axis {
                    points.push(Point3::new(x, y, z));
                }
            }
        }

        Self {
            half_length,
            strides,
            points,
        }
    }
}

/// Evenly spaced coordinates `h * (2k - e) / e` for `k = 0..=e`.
///
/// The ratio is formed first so the end points are exactly `±1 * h`.
fn axis_coordinates(half_length: f64, edge_elements: usize) -> Vec<f64> {
    let e = edge_elements as f64;
    (0..=edge_elements)
        .map(|k| half_length * ((2.0 * k as f64 - e) / e))
        .collect()
}
