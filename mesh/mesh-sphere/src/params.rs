//! Sphere mesh generation parameters.

use nalgebra::Point3;

use crate::error::{SphereMeshError, SphereResult};
use crate::types::{MeshMethod, SpacingMethod};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration parameters for meshing one sphere.
///
/// Use the builder methods to configure the mesh, or one of the preset
/// constructors like [`SphereMeshParams::spherified`] or
/// [`SphereMeshParams::normalized`].
///
/// # Examples
///
/// ```
/// use mesh_sphere::{MeshMethod, SpacingMethod, SphereMeshParams};
/// use nalgebra::Point3;
///
/// // Unit sphere with the defaults
/// let params = SphereMeshParams::new();
/// assert_eq!(params.mesh_method, MeshMethod::SpherifiedCube);
///
/// // Small shot with even layers, placed off the origin
/// let params = SphereMeshParams::normalized(0.5, 0.05)
///     .with_spacing_method(SpacingMethod::Linear)
///     .with_center(Point3::new(1.0, 2.0, 3.0));
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SphereMeshParams {
    /// Projection and inner-surface variant.
    pub mesh_method: MeshMethod,

    /// Radial layer spacing.
    pub spacing_method: SpacingMethod,

    /// Sphere radius.
    pub radius: f64,

    /// Requested element edge length.
    ///
    /// The achieved length differs because the lattice order is rounded to
    /// a half-integer; see [`crate::MeshConfig::real_element_length`].
    pub element_length: f64,

    /// Sphere center. The mesh is generated at the origin and translated
    /// here.
    pub center: Point3<f64>,
}

impl Default for SphereMeshParams {
    fn default() -> Self {
        Self {
            mesh_method: MeshMethod::default(),
            spacing_method: SpacingMethod::default(),
            radius: 1.0,
            element_length: 0.1,
            center: Point3::origin(),
        }
    }
}

impl SphereMeshParams {
    /// Creates new parameters with default values.
    ///
    /// # Examples
    ///
    /// ```
    /// use mesh_sphere::SphereMeshParams;
    ///
    /// let params = SphereMeshParams::new();
    /// assert!((params.radius - 1.0).abs() < f64::EPSILON);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Spherified cube mesh of the given radius and element length.
    #[must_use]
    pub fn spherified(radius: f64, element_length: f64) -> Self {
        Self {
            mesh_method: MeshMethod::SpherifiedCube,
            radius,
            element_length,
            ..Self::default()
        }
    }

    /// Normalized cube mesh of the given radius and element length.
    #[must_use]
    pub fn normalized(radius: f64, element_length: f64) -> Self {
        Self {
            mesh_method: MeshMethod::NormalizedCube,
            radius,
            element_length,
            ..Self::default()
        }
    }

    /// Sets the mesh method.
    #[must_use]
    pub const fn with_mesh_method(mut self, method: MeshMethod) -> Self {
        self.mesh_method = method;
        self
    }

    /// Sets the radial spacing method.
    #[must_use]
    pub const fn with_spacing_method(mut self, method: SpacingMethod) -> Self {
        self.spacing_method = method;
        self
    }

    /// Sets the sphere radius.
    #[must_use]
    pub const fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Sets the requested element length.
    #[must_use]
    pub const fn with_element_length(mut self, element_length: f64) -> Self {
        self.element_length = element_length;
        self
    }

    /// Sets the sphere center.
    ///
    /// # Examples
    ///
    /// ```
    /// use mesh_sphere::SphereMeshParams;
    /// use nalgebra::Point3;
    ///
    /// let params = SphereMeshParams::new().with_center(Point3::new(0.0, 0.0, 5.0));
    /// assert!((params.center.z - 5.0).abs() < f64::EPSILON);
    /// ```
    #[must_use]
    pub const fn with_center(mut self, center: Point3<f64>) -> Self {
        self.center = center;
        self
    }

    /// Validates the parameters.
    ///
    /// Checks the inputs themselves; lattice-level problems such as a too
    /// coarse element length surface from [`crate::MeshConfig::resolve`].
    ///
    /// # Errors
    ///
    /// Returns [`SphereMeshError`] if the radius or element length is not
    /// positive and finite, or the center is not finite.
    pub fn validate(&self) -> SphereResult<()> {
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(SphereMeshError::InvalidRadius(self.radius));
        }

        if !(self.element_length.is_finite() && self.element_length > 0.0) {
            return Err(SphereMeshError::InvalidElementLength(self.element_length));
        }

        if !self.center.coords.iter().all(|c| c.is_finite()) {
            return Err(SphereMeshError::InvalidCenter {
                center: [self.center.x, self.center.y, self.center.z],
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params() {
        let params = SphereMeshParams::default();
        assert_eq!(params.mesh_method, MeshMethod::SpherifiedCube);
        assert_eq!(params.spacing_method, SpacingMethod::Nonlinear);
        assert!((params.radius - 1.0).abs() < f64::EPSILON);
        assert!((params.element_length - 0.1).abs() < f64::EPSILON);
        assert_eq!(params.center, Point3::origin());
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_presets() {
        let params = SphereMeshParams::normalized(2.0, 0.25);
        assert_eq!(params.mesh_method, MeshMethod::NormalizedCube);
        assert!((params.radius - 2.0).abs() < f64::EPSILON);

        let params = SphereMeshParams::spherified(3.0, 0.5)
            .with_mesh_method(MeshMethod::SpherifiedCubeAlt);
        assert_eq!(params.mesh_method, MeshMethod::SpherifiedCubeAlt);
    }

    #[test]
    fn test_builder_chain() {
        let params = SphereMeshParams::new()
            .with_radius(0.7)
            .with_element_length(0.07)
            .with_spacing_method(SpacingMethod::Linear);
        assert!((params.radius - 0.7).abs() < f64::EPSILON);
        assert!((params.element_length - 0.07).abs() < f64::EPSILON);
        assert_eq!(params.spacing_method, SpacingMethod::Linear);
    }

    #[test]
    fn test_validate_rejects_bad_inputs() {
        assert!(matches!(
            SphereMeshParams::new().with_radius(0.0).validate(),
            Err(SphereMeshError::InvalidRadius(_))
        ));
        assert!(matches!(
            SphereMeshParams::new().with_element_length(-0.1).validate(),
            Err(SphereMeshError::InvalidElementLength(_))
        ));
        assert!(matches!(
            SphereMeshParams::new()
                .with_center(Point3::new(0.0, f64::NAN, 0.0))
                .validate(),
            Err(SphereMeshError::InvalidCenter { .. })
        ));
    }
}
