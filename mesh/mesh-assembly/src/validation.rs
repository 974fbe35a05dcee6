//! Batch validation.
//!
//! Shots are meshed independently, so overlapping spheres produce
//! interpenetrating meshes that the solver has to resolve through contact.
//! That is sometimes intended (a compacted shot stream) and sometimes a
//! placement error, so overlaps are reported rather than rejected.

use tracing::warn;

use crate::shot::Shot;

/// Two shots that interpenetrate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overlap {
    /// Index of the first shot.
    pub first: usize,
    /// Index of the second shot, always greater than `first`.
    pub second: usize,
    /// Penetration depth, sum of radii minus center distance.
    pub depth: f64,
}

/// Result of checking a batch for overlapping shots.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverlapReport {
    /// All overlapping pairs, ordered by `(first, second)`.
    pub overlaps: Vec<Overlap>,
    /// Smallest surface gap between non-overlapping shots, if any pair is apart.
    pub min_clearance: Option<f64>,
}

impl OverlapReport {
    /// True when no two shots interpenetrate.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.overlaps.is_empty()
    }

    /// Number of overlapping pairs.
    #[must_use]
    pub fn issue_count(&self) -> usize {
        self.overlaps.len()
    }

    /// Deepest penetration in the batch.
    #[must_use]
    pub fn max_depth(&self) -> Option<f64> {
        self.overlaps.iter().map(|o| o.depth).reduce(f64::max)
    }

    /// One-line summary.
    #[must_use]
    pub fn summary(&self) -> String {
        match self.max_depth() {
            None => "No overlapping shots".to_string(),
            Some(depth) => format!(
                "{} overlapping shot pair(s), max depth {depth:.4}",
                self.overlaps.len()
            ),
        }
    }
}

/// Find all pairs of shots whose spheres interpenetrate.
///
/// Touching spheres do not count as overlapping.
///
/// # Example
///
/// ```
/// use mesh_assembly::{find_overlaps, Shot};
///
/// let shots = [
///     Shot::from_coords(0.0, 0.0, 0.0, 1.0),
///     Shot::from_coords(1.5, 0.0, 0.0, 1.0),
///     Shot::from_coords(5.0, 0.0, 0.0, 1.0),
/// ];
/// let overlaps = find_overlaps(&shots);
/// assert_eq!(overlaps.len(), 1);
/// assert_eq!((overlaps[0].first, overlaps[0].second), (0, 1));
/// ```
#[must_use]
pub fn find_overlaps(shots: &[Shot]) -> Vec<Overlap> {
    check_overlaps(shots).overlaps
}

/// Check every shot pair and collect overlaps and the minimum clearance.
#[must_use]
pub fn check_overlaps(shots: &[Shot]) -> OverlapReport {
    let mut report = OverlapReport::default();

    for (first, a) in shots.iter().enumerate() {
        for (offset, b) in shots[first + 1..].iter().enumerate() {
            let depth = a.penetration(b);
            if depth > 0.0 {
                let second = first + 1 + offset;
                warn!(first, second, depth, "Shots overlap");
                report.overlaps.push(Overlap {
                    first,
                    second,
                    depth,
                });
            } else {
                let gap = -depth;
                report.min_clearance = Some(report.min_clearance.map_or(gap, |m| m.min(gap)));
            }
        }
    }

    report
}
