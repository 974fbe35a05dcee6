//! Method selectors for sphere meshing.

use std::fmt;
use std::str::FromStr;

use crate::error::SphereMeshError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Correction factor relating requested and achieved element length for the
/// spherified projection.
pub const SPHERIFIED_CORRECTION_FACTOR: f64 = 0.707_543_222;

/// Correction factor for the normalized projection.
pub const NORMALIZED_CORRECTION_FACTOR: f64 = 1.0;

/// How the cube lattice is mapped onto the sphere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Projection {
    /// Analytic "spherified cube" mapping with near-uniform distortion.
    Spherified,
    /// Radial projection of each point onto the sphere.
    Normalized,
}

/// Mesh method: projection strategy plus inner-surface variant.
///
/// The `*Alt` variants replace the flat inner cube surface by a curved
/// shell of radius `half_length`, which improves element shape near the
/// cube at the cost of an extra projection pass.
///
/// # Example
///
/// ```
/// use mesh_sphere::{MeshMethod, Projection};
///
/// let method: MeshMethod = "normalized_cube_alt".parse().unwrap();
/// assert_eq!(method.projection(), Projection::Normalized);
/// assert!(method.has_curved_inner());
/// assert_eq!(method.key(), "normalized_cube_alt");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MeshMethod {
    /// Spherified projection, flat inner cube.
    #[default]
    SpherifiedCube,
    /// Normalized projection, flat inner cube.
    NormalizedCube,
    /// Spherified projection, curved inner shell.
    SpherifiedCubeAlt,
    /// Normalized projection, curved inner shell.
    NormalizedCubeAlt,
}

impl MeshMethod {
    /// All variants, in declaration order.
    pub const ALL: [Self; 4] = [
        Self::SpherifiedCube,
        Self::NormalizedCube,
        Self::SpherifiedCubeAlt,
        Self::NormalizedCubeAlt,
    ];

    /// The projection strategy used for the sphere surface.
    #[must_use]
    pub const fn projection(self) -> Projection {
        match self {
            Self::SpherifiedCube | Self::SpherifiedCubeAlt => Projection::Spherified,
            Self::NormalizedCube | Self::NormalizedCubeAlt => Projection::Normalized,
        }
    }

    /// Whether the inner surface is a curved shell instead of the flat cube.
    #[must_use]
    pub const fn has_curved_inner(self) -> bool {
        matches!(self, Self::SpherifiedCubeAlt | Self::NormalizedCubeAlt)
    }

    /// Empirical ratio between requested and achieved element length.
    #[must_use]
    pub const fn correction_factor(self) -> f64 {
        match self.projection() {
            Projection::Spherified => SPHERIFIED_CORRECTION_FACTOR,
            Projection::Normalized => NORMALIZED_CORRECTION_FACTOR,
        }
    }

    /// The string key of this method.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::SpherifiedCube => "spherified_cube",
            Self::NormalizedCube => "normalized_cube",
            Self::SpherifiedCubeAlt => "spherified_cube_alt",
            Self::NormalizedCubeAlt => "normalized_cube_alt",
        }
    }
}

impl fmt::Display for MeshMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for MeshMethod {
    type Err = SphereMeshError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.key() == s)
            .ok_or_else(|| SphereMeshError::UnknownMeshMethod(s.to_string()))
    }
}

/// Radial spacing of the layers between inner surface and sphere.
///
/// # Example
///
/// ```
/// use mesh_sphere::SpacingMethod;
///
/// assert_eq!("linear".parse::<SpacingMethod>().unwrap(), SpacingMethod::Linear);
/// assert!("cubic".parse::<SpacingMethod>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SpacingMethod {
    /// Evenly spaced layers.
    Linear,
    /// Layer spacing graded by the spacing factor.
    #[default]
    Nonlinear,
}

impl SpacingMethod {
    /// The string key of this method.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Nonlinear => "nonlinear",
        }
    }
}

impl fmt::Display for SpacingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SpacingMethod {
    type Err = SphereMeshError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linear" => Ok(Self::Linear),
            "nonlinear" => Ok(Self::Nonlinear),
            other => Err(SphereMeshError::UnknownSpacingMethod(other.to_string())),
        }
    }
}
