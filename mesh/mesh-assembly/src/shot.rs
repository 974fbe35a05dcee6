//! Individual shots in a batch.
//!
//! A [`Shot`] is one sphere to be meshed: a center and a radius. Batches are
//! plain slices of shots, built by hand, from coordinate lists, or by an
//! external placement tool.

use mesh_types::{Aabb, Point3};

use crate::error::{AssemblyError, AssemblyResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single sphere in a batch.
///
/// # Example
///
/// ```
/// use mesh_assembly::Shot;
/// use mesh_types::Point3;
///
/// let shot = Shot::new(Point3::new(0.0, 0.0, 2.0), 1.0);
/// assert!((shot.diameter() - 2.0).abs() < f64::EPSILON);
/// assert!(shot.bounds().contains(&Point3::new(0.0, 0.0, 3.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Shot {
    /// Sphere center.
    pub center: Point3<f64>,
    /// Sphere radius.
    pub radius: f64,
}

impl Shot {
    /// Create a shot from its center and radius.
    #[must_use]
    pub const fn new(center: Point3<f64>, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Create a shot from center coordinates and radius.
    #[must_use]
    pub fn from_coords(x: f64, y: f64, z: f64, radius: f64) -> Self {
        Self::new(Point3::new(x, y, z), radius)
    }

    /// Sphere diameter.
    #[must_use]
    pub fn diameter(&self) -> f64 {
        2.0 * self.radius
    }

    /// Exact sphere volume, `4/3 * pi * r^3`.
    #[must_use]
    pub fn volume(&self) -> f64 {
        4.0 / 3.0 * std::f64::consts::PI * self.radius.powi(3)
    }

    /// Axis-aligned box enclosing the sphere.
    #[must_use]
    pub fn bounds(&self) -> Aabb {
        Aabb::around_sphere(self.center, self.radius)
    }

    /// Depth by which two spheres interpenetrate.
    ///
    /// Positive when they overlap, zero when they touch, negative (the gap
    /// width) when they are apart.
    #[must_use]
    pub fn penetration(&self, other: &Self) -> f64 {
        self.radius + other.radius - nalgebra::distance(&self.center, &other.center)
    }
}

/// Build a structured batch from matching coordinate and radius lists.
///
/// # Errors
///
/// Returns [`AssemblyError::LengthMismatch`] if the lists differ in length.
///
/// # Example
///
/// ```
/// use mesh_assembly::shots_from_coordinates;
///
/// let shots = shots_from_coordinates(
///     &[[0.0, 0.0, 2.0], [0.0, 2.0, 0.0], [2.0, 0.0, 0.0]],
///     &[1.0, 1.0, 1.0],
/// )
/// .unwrap();
/// assert_eq!(shots.len(), 3);
/// ```
pub fn shots_from_coordinates(
    coordinates: &[[f64; 3]],
    radii: &[f64],
) -> AssemblyResult<Vec<Shot>> {
    if coordinates.len() != radii.len() {
        return Err(AssemblyError::LengthMismatch {
            coordinates: coordinates.len(),
            radii: radii.len(),
        });
    }

    Ok(coordinates
        .iter()
        .zip(radii)
        .map(|(&[x, y, z], &radius)| Shot::from_coords(x, y, z, radius))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_volume() {
        let shot = Shot::from_coords(1.0, 2.0, 3.0, 2.0);
        assert_relative_eq!(shot.volume(), 32.0 / 3.0 * std::f64::consts::PI);
    }

    #[test]
    fn test_penetration() {
        let a = Shot::from_coords(0.0, 0.0, 0.0, 1.0);
        assert_relative_eq!(a.penetration(&Shot::from_coords(1.5, 0.0, 0.0, 1.0)), 0.5);
        assert_relative_eq!(a.penetration(&Shot::from_coords(0.0, 2.0, 0.0, 1.0)), 0.0);
        assert_relative_eq!(a.penetration(&Shot::from_coords(0.0, 0.0, 3.0, 0.5)), -1.5);
    }

    #[test]
    fn test_bounds() {
        let bounds = Shot::from_coords(1.0, 0.0, 0.0, 0.5).bounds();
        assert_relative_eq!(bounds.min, Point3::new(0.5, -0.5, -0.5));
        assert_relative_eq!(bounds.max, Point3::new(1.5, 0.5, 0.5));
    }

    #[test]
    fn test_length_mismatch() {
        let err = shots_from_coordinates(&[[0.0; 3], [1.0; 3]], &[1.0]).unwrap_err();
        assert_eq!(
            err,
            AssemblyError::LengthMismatch {
                coordinates: 2,
                radii: 1,
            }
        );
    }

    #[test]
    fn test_from_coordinates_keeps_order() {
        let shots =
            shots_from_coordinates(&[[0.0, 0.0, 2.0], [0.0, 2.0, 0.0]], &[1.0, 0.5]).unwrap();
        assert_eq!(shots[1], Shot::from_coords(0.0, 2.0, 0.0, 0.5));
    }
}
