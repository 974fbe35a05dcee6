//! Cube-to-sphere projections.
//!
//! Both projections map the surface of the cube `[-h, h]^3` exactly onto a
//! sphere and keep the number and order of points. Interior lattice points
//! are mapped as well; the generator only keeps the ones it needs.

use nalgebra::Point3;

use crate::types::Projection;

/// Spherified cube mapping of one point.
///
/// The point is normalized by `half_length` to `(a, b, c)` and each
/// component is scaled by a function of the other two, which sends the unit
/// cube surface onto the unit sphere with low distortion.
///
/// # Example
///
/// ```
/// use mesh_sphere::spherify_point;
/// use nalgebra::Point3;
///
/// let p = spherify_point(&Point3::new(0.5, 0.5, 0.5), 0.5, 2.0);
/// assert!((p.coords.norm() - 2.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn spherify_point(p: &Point3<f64>, half_length: f64, target_radius: f64) -> Point3<f64> {
    let a = p.x / half_length;
    let b = p.y / half_length;
    let c = p.z / half_length;
    let (a2, b2, c2) = (a * a, b * b, c * c);

    Point3::new(
        a * (1.0 - b2 / 2.0 - c2 / 2.0 + b2 * c2 / 3.0).sqrt(),
        b * (1.0 - c2 / 2.0 - a2 / 2.0 + c2 * a2 / 3.0).sqrt(),
        c * (1.0 - a2 / 2.0 - b2 / 2.0 + a2 * b2 / 3.0).sqrt(),
    ) * target_radius
}

/// Radial projection of one point onto the sphere of `target_radius`.
///
/// Only the exact origin has no direction; it stays where it is. The
/// direction is taken after scaling by the largest component, so points of
/// arbitrarily small lattices keep their own direction.
#[must_use]
pub fn normalize_point(p: &Point3<f64>, target_radius: f64) -> Point3<f64> {
    let scale = p.coords.amax();
    if scale == 0.0 {
        return Point3::origin();
    }
    let direction = p.coords / scale;
    Point3::from(direction * (target_radius / direction.norm()))
}

/// Project every point of a cube lattice onto the sphere of `target_radius`.
///
/// Returns a new array of the same length and order.
#[must_use]
pub fn project(
    points: &[Point3<f64>],
    projection: Projection,
    half_length: f64,
    target_radius: f64,
) -> Vec<Point3<f64>> {
    match projection {
        Projection::Spherified => points
            .iter()
            .map(|p| spherify_point(p, half_length, target_radius))
            .collect(),
        Projection::Normalized => points
            .iter()
            .map(|p| normalize_point(p, target_radius))
            .collect(),
    }
}

/// Curved inner shell of radius `half_length` for the `*_alt` methods.
///
/// The spherified mapping already fills the ball smoothly. The normalized
/// mapping would collapse every interior point onto the shell, so each point
/// is instead moved onto the concentric sphere whose radius is its own
/// max-norm: cube face points land on the shell, deeper points on smaller
/// spheres.
#[must_use]
pub fn curved_inner_shell(
    points: &[Point3<f64>],
    projection: Projection,
    half_length: f64,
) -> Vec<Point3<f64>> {
    match projection {
        Projection::Spherified => project(points, projection, half_length, half_length),
        Projection::Normalized => points
            .iter()
            .map(|p| normalize_point(p, p.coords.amax()))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lattice::CubeLattice;
    use approx::assert_relative_eq;

    #[test]
    fn test_spherify_face_points_on_sphere() {
        let lattice = CubeLattice::build(0.3, 6);
        let projected = project(&lattice.points, Projection::Spherified, 0.3, 1.0);
        assert_eq!(projected.len(), lattice.points.len());

        for (i, p) in projected.iter().enumerate() {
            let norm = p.coords.norm();
            if lattice.strides.is_surface(i) {
                assert_relative_eq!(norm, 1.0, epsilon = 1e-12);
            } else {
                assert!(norm < 1.0);
            }
        }
    }

    #[test]
    fn test_spherify_keeps_axes() {
        let p = spherify_point(&Point3::new(0.0, 0.0, 2.0), 2.0, 5.0);
        assert_relative_eq!(p, Point3::new(0.0, 0.0, 5.0));

        let center = spherify_point(&Point3::origin(), 2.0, 5.0);
        assert_relative_eq!(center, Point3::origin());
    }

    #[test]
    fn test_normalize_center_stays_put() {
        let lattice = CubeLattice::build(1.0, 2);
        let projected = project(&lattice.points, Projection::Normalized, 1.0, 3.0);
        assert_relative_eq!(projected[13], Point3::origin());
        for (i, p) in projected.iter().enumerate().filter(|(i, _)| *i != 13) {
            assert_relative_eq!(p.coords.norm(), 3.0, epsilon = 1e-12);
            // direction preserved
            assert_relative_eq!(
                p.coords.normalize(),
                lattice.points[i].coords.normalize(),
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn test_normalize_tiny_lattice() {
        let h = 1e-13;
        let lattice = CubeLattice::build(h, 4);
        let center = lattice.strides.index(2, 2, 2);
        let projected = project(&lattice.points, Projection::Normalized, h, 3.0 * h);

        assert_eq!(projected[center], Point3::origin());
        for (i, p) in projected.iter().enumerate().filter(|(i, _)| *i != center) {
            assert_relative_eq!(p.coords.norm(), 3.0 * h, max_relative = 1e-12);
            assert_relative_eq!(
                p.coords.normalize(),
                lattice.points[i].coords.normalize(),
                epsilon = 1e-12
            );
        }

        // far below the square root of the smallest normal float
        let deep = normalize_point(&Point3::new(1e-200, -2e-200, 0.0), 1.0);
        assert_relative_eq!(deep.coords.norm(), 1.0, epsilon = 1e-12);
        assert!(deep.y < 0.0);
    }

    #[test]
    fn test_normalized_inner_shell_is_concentric() {
        let lattice = CubeLattice::build(1.0, 4);
        let shell = curved_inner_shell(&lattice.points, Projection::Normalized, 1.0);

        for (p, q) in lattice.points.iter().zip(&shell) {
            assert_relative_eq!(q.coords.norm(), p.coords.amax(), epsilon = 1e-12);
        }
        // face points sit on the shell of radius half_length
        assert_relative_eq!(shell[0].coords.norm(), 1.0, epsilon = 1e-12);
        // half-way points sit on the half-radius sphere
        let mid = lattice.strides.index(1, 2, 2);
        assert_relative_eq!(shell[mid].coords.norm(), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_spherified_inner_shell_radius() {
        let lattice = CubeLattice::build(0.5, 3);
        let shell = curved_inner_shell(&lattice.points, Projection::Spherified, 0.5);
        assert_relative_eq!(shell[0].coords.norm(), 0.5, epsilon = 1e-12);
    }
}
