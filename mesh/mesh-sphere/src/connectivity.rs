//! Hexahedral connectivity by stride arithmetic.
//!
//! Connectivity depends only on the lattice edge element count and the
//! radial layer count, never on coordinates. Corners are 0-based indices into
//! the stacked node array built by [`crate::interpolate_layers`]: block `b`
//! starts at `b * grid3`.
//!
//! Every quad template is wound so that extruding it along its step (outward
//! for shell faces, `+z` for the cube fill) gives a hexahedron in VTK corner
//! order with positive volume.

use crate::lattice::LatticeStrides;

/// One corner-index template tiled over a lattice face.
///
/// Quad `(u, v)` is `base + u * step_u + v * step_v`, for `u, v` in
/// `0..edge_elements`, `u` fastest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FacePatch {
    /// Corner indices of the first quad.
    pub base: [usize; 4],
    /// Offset between neighbouring quads along the fast direction.
    pub step_u: usize,
    /// Offset between neighbouring quads along the slow direction.
    pub step_v: usize,
}

impl FacePatch {
    /// Every quad of the patch, fast direction first.
    pub fn quads(&self, edge_elements: usize) -> impl Iterator<Item = [usize; 4]> + '_ {
        (0..edge_elements).flat_map(move |v| {
            (0..edge_elements).map(move |u| {
                let offset = u * self.step_u + v * self.step_v;
                self.base.map(|c| c + offset)
            })
        })
    }
}

/// The six shell faces of the cube lattice, wound outward.
///
/// Order: `y = 0`, `y = max`, `x = max`, `x = 0`, `z = 0`, `z = max`.
#[must_use]
pub const fn shell_faces(strides: &LatticeStrides) -> [FacePatch; 6] {
    let e = strides.edge_elements;
    let g1 = strides.grid1;
    let g2 = strides.grid2;
    let y_max = e * g1;
    let z_max = e * g2;

    [
        FacePatch {
            base: [0, 1, 1 + g2, g2],
            step_u: 1,
            step_v: g2,
        },
        FacePatch {
            base: [y_max + g2, y_max + 1 + g2, y_max + 1, y_max],
            step_u: 1,
            step_v: g2,
        },
        FacePatch {
            base: [e, e + g1, e + g1 + g2, e + g2],
            step_u: g1,
            step_v: g2,
        },
        FacePatch {
            base: [g2, g1 + g2, g1, 0],
            step_u: g1,
            step_v: g2,
        },
        FacePatch {
            base: [g1, 1 + g1, 1, 0],
            step_u: 1,
            step_v: g1,
        },
        FacePatch {
            base: [z_max, z_max + 1, z_max + 1 + g1, z_max + g1],
            step_u: 1,
            step_v: g1,
        },
    ]
}

/// The `z = 0` slice of the cube, wound towards `+z`.
#[must_use]
pub const fn cube_patch(strides: &LatticeStrides) -> FacePatch {
    let g1 = strides.grid1;
    FacePatch {
        base: [0, 1, 1 + g1, g1],
        step_u: 1,
        step_v: g1,
    }
}

/// Build all hexahedra of one sphere.
///
/// Radial shell elements come first, layer by layer and face by face, then
/// the cube interior slice by slice. The result has
/// `6 * e^2 * layer_count + e^3` entries.
///
/// # Example
///
/// ```
/// use mesh_sphere::build_connectivity;
///
/// let cells = build_connectivity(3, 3);
/// assert_eq!(cells.len(), 189);
/// assert_eq!(cells[0], [0, 1, 17, 16, 64, 65, 81, 80]);
/// ```
#[must_use]
pub fn build_connectivity(edge_elements: usize, layer_count: usize) -> Vec<[usize; 8]> {
    let strides = LatticeStrides::new(edge_elements);
    let e = edge_elements;
    let mut cells = Vec::with_capacity(6 * e * e * layer_count + e * e * e);

    let faces = shell_faces(&strides);
    for layer in 0..layer_count {
        let bottom = layer * strides.grid3;
        let top = bottom + strides.grid3;
        for face in &faces {
            cells.extend(face.quads(e).map(|q| extrude(q, bottom, top)));
        }
    }

    let cube = cube_patch(&strides);
    for slice in 0..e {
        let bottom = slice * strides.grid2;
        let top = bottom + strides.grid2;
        cells.extend(cube.quads(e).map(|q| extrude(q, bottom, top)));
    }

    cells
}

fn extrude(quad: [usize; 4], bottom: usize, top: usize) -> [usize; 8] {
    [
        quad[0] + bottom,
        quad[1] + bottom,
        quad[2] + bottom,
        quad[3] + bottom,
        quad[0] + top,
        quad[1] + top,
        quad[2] + top,
        quad[3] + top,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use hashbrown::HashSet;

    #[test]
    fn test_element_count() {
        for (e, layers) in [(1, 1), (2, 3), (3, 3), (5, 4), (8, 8)] {
            assert_eq!(
                build_connectivity(e, layers).len(),
                6 * e * e * layers + e * e * e
            );
        }
    }

    #[test]
    fn test_faces_cover_shell() {
        let strides = LatticeStrides::new(4);
        let mut covered = HashSet::new();
        for face in shell_faces(&strides) {
            for quad in face.quads(4) {
                for c in quad {
                    assert!(strides.is_surface(c), "corner {c} is not on the shell");
                    covered.insert(c);
                }
            }
        }
        assert_eq!(covered.len(), crate::config::surface_point_count(4));
    }

    #[test]
    fn test_face_quads_are_distinct() {
        let strides = LatticeStrides::new(3);
        let mut seen = HashSet::new();
        for face in shell_faces(&strides) {
            for mut quad in face.quads(3) {
                quad.sort_unstable();
                assert!(seen.insert(quad), "quad {quad:?} repeated");
            }
        }
        assert_eq!(seen.len(), 6 * 9);
    }

    #[test]
    fn test_indices_stay_in_range() {
        let (e, layers) = (4, 5);
        let strides = LatticeStrides::new(e);
        let limit = (layers + 1) * strides.grid3;
        let cells = build_connectivity(e, layers);
        assert!(cells.iter().flatten().all(|&c| c < limit));

        // the cube fill only touches the base block
        let first_cube = 6 * e * e * layers;
        assert!(cells[first_cube..].iter().flatten().all(|&c| c < strides.grid3));
    }

    #[test]
    fn test_cube_fill_slices() {
        let cells = build_connectivity(2, 1);
        let cube = &cells[24..];
        assert_eq!(cube.len(), 8);
        assert_eq!(cube[0], [0, 1, 4, 3, 9, 10, 13, 12]);
        assert_eq!(cube[7], [13, 14, 17, 16, 22, 23, 26, 25]);
    }

    #[test]
    fn test_connectivity_is_deterministic() {
        assert_eq!(build_connectivity(5, 7), build_connectivity(5, 7));
    }
}
