//! Mesh parameter resolution.
//!
//! Turns the user-facing inputs (method, radius, target element length) into
//! the integer lattice and layer counts the generator works with.

// Lattice and layer counts are small non-negative integers by construction.
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]

use crate::error::{SphereMeshError, SphereResult};
use crate::types::{MeshMethod, SpacingMethod};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Ratio between sphere radius and inner cube half side.
///
/// Tuned so that the projected surface lands on the requested radius.
pub const SCALE_FACTOR: f64 = 3.4142;

/// Resolved, immutable mesh parameters for one sphere.
///
/// # Example
///
/// ```
/// use mesh_sphere::{MeshConfig, MeshMethod, SpacingMethod};
///
/// let config = MeshConfig::resolve(
///     MeshMethod::SpherifiedCube,
///     SpacingMethod::Linear,
///     1.0,
///     0.5,
/// )
/// .unwrap();
///
/// assert!((config.lattice_order - 1.5).abs() < f64::EPSILON);
/// assert_eq!(config.edge_elements, 3);
/// assert_eq!(config.layer_count, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MeshConfig {
    /// Projection and inner-surface variant.
    pub mesh_method: MeshMethod,
    /// Radial spacing rule.
    pub spacing_method: SpacingMethod,
    /// Half side length of the inner cube.
    pub half_length: f64,
    /// Half-side element count, a multiple of one half.
    pub lattice_order: f64,
    /// Elements along one cube edge, `2 * lattice_order`.
    pub edge_elements: usize,
    /// Ratio between sphere radius and `half_length`.
    pub scale_factor: f64,
    /// Ratio between requested and achieved element length.
    pub correction_factor: f64,
    /// Number of radial element layers between inner surface and sphere.
    pub layer_count: usize,
    /// Element length the lattice actually achieves.
    pub real_element_length: f64,
    /// Ratio of achieved element length to even radial layer thickness.
    pub spacing_factor: f64,
}

impl MeshConfig {
    /// Resolve mesh parameters from the user inputs.
    ///
    /// # Errors
    ///
    /// Returns a configuration [`SphereMeshError`] if:
    /// - `radius` or `element_length` is not positive and finite
    /// - the lattice order or the layer count rounds to zero
    /// - the resulting mesh would not fit the `u32` id space
    pub fn resolve(
        mesh_method: MeshMethod,
        spacing_method: SpacingMethod,
        radius: f64,
        element_length: f64,
    ) -> SphereResult<Self> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(SphereMeshError::InvalidRadius(radius));
        }
        if !(element_length.is_finite() && element_length > 0.0) {
            return Err(SphereMeshError::InvalidElementLength(element_length));
        }

        let correction_factor = mesh_method.correction_factor();
        let scale_factor = SCALE_FACTOR;
        let half_length = radius / scale_factor;

        let density = correction_factor * radius / element_length;
        let lattice_order = round_to_half(density);
        if lattice_order <= 0.0 {
            return Err(SphereMeshError::DegenerateLattice {
                radius,
                element_length,
                density,
            });
        }
        if !lattice_order.is_finite() || lattice_order > f64::from(u32::MAX) {
            return Err(SphereMeshError::MeshTooLarge {
                nodes: u128::MAX,
                elements: u128::MAX,
            });
        }

        // lattice_order is a multiple of 0.5, so doubling it is exact.
        let edge_elements = (2.0 * lattice_order).round() as usize;

        let layer_count = match spacing_method {
            SpacingMethod::Linear => (2.0 * lattice_order).floor() as usize,
            SpacingMethod::Nonlinear => {
                (lattice_order + (lattice_order / 2.0).floor() + 1.0).floor() as usize
            }
        };
        if layer_count == 0 {
            return Err(SphereMeshError::DegenerateLayers { lattice_order });
        }

        let (nodes, elements) = projected_sizes(edge_elements, layer_count);
        if nodes > u128::from(u32::MAX) || elements > u128::from(u32::MAX) {
            return Err(SphereMeshError::MeshTooLarge { nodes, elements });
        }

        let spacing_length = (radius - radius / scale_factor) / layer_count as f64;
        let real_element_length = correction_factor * radius / lattice_order;
        let spacing_factor = real_element_length / spacing_length;

        Ok(Self {
            mesh_method,
            spacing_method,
            half_length,
            lattice_order,
            edge_elements,
            scale_factor,
            correction_factor,
            layer_count,
            real_element_length,
            spacing_factor,
        })
    }

    /// Radius of the projected outer sphere, `half_length * scale_factor`.
    #[inline]
    #[must_use]
    pub fn sphere_radius(&self) -> f64 {
        self.half_length * self.scale_factor
    }

    /// Lattice points along one cube edge, `edge_elements + 1`.
    #[inline]
    #[must_use]
    pub const fn points_per_edge(&self) -> usize {
        self.edge_elements + 1
    }

    /// Node count before compaction: `layer_count + 1` stacked lattices.
    #[must_use]
    pub const fn raw_node_count(&self) -> usize {
        let g = self.points_per_edge();
        (self.layer_count + 1) * g * g * g
    }

    /// Node count after compaction.
    ///
    /// The base lattice is kept whole; every further layer keeps only its
    /// cube-surface points.
    #[must_use]
    pub const fn node_count(&self) -> usize {
        let g = self.points_per_edge();
        g * g * g + self.layer_count * surface_point_count(self.edge_elements)
    }

    /// Element count: `6 * (2n)^2 * layers` shell elements plus `(2n)^3`
    /// cube elements.
    #[must_use]
    pub const fn element_count(&self) -> usize {
        let e = self.edge_elements;
        6 * e * e * self.layer_count + e * e * e
    }
}

/// Number of lattice points on the surface of a cube with `edge_elements`
/// elements per edge.
#[must_use]
pub const fn surface_point_count(edge_elements: usize) -> usize {
    let g = edge_elements + 1;
    let inner = edge_elements.saturating_sub(1);
    g * g * g - inner * inner * inner
}

/// Round to the nearest half-integer with quarter thresholds.
///
/// A fractional part below 0.25 rounds down, `[0.25, 0.75)` rounds to
/// `floor + 0.5`, and 0.75 or more rounds up.
///
/// # Example
///
/// ```
/// use mesh_sphere::round_to_half;
///
/// assert_eq!(round_to_half(1.2), 1.0);
/// assert_eq!(round_to_half(1.415), 1.5);
/// assert_eq!(round_to_half(1.75), 2.0);
/// ```
#[must_use]
pub fn round_to_half(value: f64) -> f64 {
    let floor = value.floor();
    let fraction = value - floor;
    if fraction < 0.25 {
        floor
    } else if fraction < 0.75 {
        floor + 0.5
    } else {
        value.ceil()
    }
}

fn projected_sizes(edge_elements: usize, layer_count: usize) -> (u128, u128) {
    let e = edge_elements as u128;
    let g = e + 1;
    let layers = layer_count as u128;
    ((layers + 1) * g * g * g, 6 * e * e * layers + e * e * e)
}
