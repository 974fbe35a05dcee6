//! Radial layer interpolation between the inner surface and the sphere.

#![allow(clippy::cast_precision_loss)]

use nalgebra::Point3;

use crate::types::SpacingMethod;

/// Per-layer denominators of the radial interpolation.
///
/// Linear spacing divides by one everywhere. Nonlinear spacing runs the
/// denominator evenly from `spacing_factor` down to one, which thins the
/// layers next to the inner surface and grows them towards the sphere.
///
/// # Example
///
/// ```
/// use mesh_sphere::{layer_denominators, SpacingMethod};
///
/// let j = layer_denominators(SpacingMethod::Nonlinear, 3, 2.0);
/// assert_eq!(j, vec![2.0, 1.5, 1.0]);
/// ```
#[must_use]
pub fn layer_denominators(
    spacing_method: SpacingMethod,
    layer_count: usize,
    spacing_factor: f64,
) -> Vec<f64> {
    match spacing_method {
        SpacingMethod::Linear => vec![1.0; layer_count],
        SpacingMethod::Nonlinear => linspace(spacing_factor, 1.0, layer_count),
    }
}

/// `count` evenly spaced values from `start` to `end` inclusive.
///
/// A single value is `start`.
fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            (0..count)
                .map(|i| {
                    if i == count - 1 {
                        end
                    } else {
                        step.mul_add(i as f64, start)
                    }
                })
                .collect()
        }
    }
}

/// Stack the inner lattice, the interpolated layers and the outer sphere
/// into one node array.
///
/// The result holds `layer_count + 1` blocks of `inner.len()` points:
/// `[inner, layer_0, .., layer_{L-2}, outer]`, where
/// `layer_i = inner + (outer - inner) / L * (i + 1) / denominators[i]`.
/// Point `p` of block `b` lives at `b * inner.len() + p`.
///
/// `inner` and `outer` must have the same length. Only the first
/// `layer_count - 1` denominators are read.
#[must_use]
pub fn interpolate_layers(
    inner: &[Point3<f64>],
    outer: &[Point3<f64>],
    layer_count: usize,
    denominators: &[f64],
) -> Vec<Point3<f64>> {
    let block = inner.len();
    let mut nodes = Vec::with_capacity(block * (layer_count + 1));
    nodes.extend_from_slice(inner);

    let layers = layer_count as f64;
    for (i, &denominator) in denominators
        .iter()
        .enumerate()
        .take(layer_count.saturating_sub(1))
    {
        let fraction = (i + 1) as f64 / layers / denominator;
        nodes.extend(
            inner
                .iter()
                .zip(outer)
                .map(|(a, b)| a + (b - a) * fraction),
        );
    }

    nodes.extend_from_slice(outer);
    nodes
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn segment() -> (Vec<Point3<f64>>, Vec<Point3<f64>>) {
        (
            vec![Point3::new(1.0, 0.0, 0.0), Point3::new(0.0, -1.0, 0.0)],
            vec![Point3::new(5.0, 0.0, 0.0), Point3::new(0.0, -5.0, 0.0)],
        )
    }

    #[test]
    fn test_linear_denominators() {
        assert_eq!(layer_denominators(SpacingMethod::Linear, 4, 2.7), vec![1.0; 4]);
    }

    #[test]
    fn test_linspace_edges() {
        assert!(linspace(2.0, 1.0, 0).is_empty());
        assert_eq!(linspace(2.0, 1.0, 1), vec![2.0]);
        assert_eq!(linspace(3.0, 1.0, 2), vec![3.0, 1.0]);
    }

    #[test]
    fn test_linear_layers_are_even() {
        let (inner, outer) = segment();
        let nodes = interpolate_layers(&inner, &outer, 4, &[1.0; 4]);
        assert_eq!(nodes.len(), 2 * 5);

        let radii: Vec<f64> = nodes.iter().step_by(2).map(|p| p.x).collect();
        for (r, expected) in radii.iter().zip([1.0, 2.0, 3.0, 4.0, 5.0]) {
            assert_relative_eq!(*r, expected, epsilon = 1e-12);
        }
        assert_relative_eq!(nodes[9], Point3::new(0.0, -5.0, 0.0));
    }

    #[test]
    fn test_nonlinear_layers_grow_outwards() {
        let (inner, outer) = segment();
        let j = layer_denominators(SpacingMethod::Nonlinear, 5, 1.8);
        let nodes = interpolate_layers(&inner, &outer, 5, &j);
        assert_eq!(nodes.len(), 2 * 6);

        let radii: Vec<f64> = nodes.iter().step_by(2).map(|p| p.x).collect();
        let gaps: Vec<f64> = radii.windows(2).map(|w| w[1] - w[0]).collect();
        assert!(gaps.iter().all(|&g| g > 0.0));
        assert!(gaps[0] < gaps[3]);
        assert_relative_eq!(radii[5], 5.0);
    }

    #[test]
    fn test_single_layer_is_inner_and_outer() {
        let (inner, outer) = segment();
        let nodes = interpolate_layers(&inner, &outer, 1, &[2.0]);
        assert_eq!(nodes, [inner, outer].concat());
    }
}
