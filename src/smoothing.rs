//! Constrained smoothing of lane polylines and junction continuity.
//!
//! Smoothing runs repeated Laplacian relaxation passes over the interior
//! points of a polyline, with the endpoints pinned and a hard bound on
//! how far the result may drift from the original chain. The drift is
//! measured against the cleaned input every iteration (cumulative, not
//! incremental), so accepted shapes monotonically approach the bound and
//! the first violating pass is rejected outright.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::core::Point3D;
use crate::error::{GeometryError, Result};
use crate::geometry::{angle_between_degrees, max_deviation, remove_consecutive_duplicates};

/// Fraction of the way each interior point moves toward its neighbor
/// midpoint per relaxation pass.
const RELAXATION_ALPHA: f32 = 0.5;

/// Smoothing configuration.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct SmoothingConfig {
    /// Maximum allowed deviation from the original polyline (meters).
    pub max_deviation: f32,
    /// Hard cap on relaxation iterations.
    pub max_iterations: usize,
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            max_deviation: 0.3,
            max_iterations: 20,
        }
    }
}

/// Iterative polyline smoother with a geometric-deviation stopping rule.
#[derive(Clone, Debug, Default)]
pub struct LaneSmoother {
    config: SmoothingConfig,
}

impl LaneSmoother {
    /// Create a smoother with the given configuration.
    pub fn new(config: SmoothingConfig) -> Self {
        Self { config }
    }

    /// Create a smoother with the default configuration (0.3 m bound,
    /// 20 iterations).
    pub fn with_defaults() -> Self {
        Self::new(SmoothingConfig::default())
    }

    /// Smooth a polyline.
    ///
    /// Consecutive near-duplicate points are removed first; the cleaned
    /// sequence is the deviation baseline and its endpoints are pinned
    /// for the whole run. Each iteration pulls every interior point 50%
    /// toward the midpoint of its neighbors, then accepts the pass only
    /// if the deviation from the baseline stays within the bound; the
    /// first rejected pass terminates the loop and the last accepted
    /// sequence is returned.
    ///
    /// The result has the same point count as the cleaned input, and its
    /// endpoints equal the cleaned input's endpoints exactly.
    ///
    /// # Errors
    /// - [`GeometryError::InvalidIterationCap`] if the cap is zero.
    /// - [`GeometryError::DegeneratePolyline`] if fewer than 2 points
    ///   survive duplicate removal.
    pub fn smooth(&self, polyline: &[Point3D]) -> Result<Vec<Point3D>> {
        if self.config.max_iterations < 1 {
            return Err(GeometryError::InvalidIterationCap {
                cap: self.config.max_iterations,
            });
        }

        let cleaned = remove_consecutive_duplicates(polyline);
        if cleaned.len() < 2 {
            return Err(GeometryError::DegeneratePolyline {
                points: cleaned.len(),
            });
        }
        if cleaned.len() < polyline.len() {
            debug!(
                "removed {} duplicate point(s), {} remain",
                polyline.len() - cleaned.len(),
                cleaned.len()
            );
        }

        let n = cleaned.len();
        let first = cleaned[0];
        let last = cleaned[n - 1];
        let original = cleaned.clone();
        let mut pts = cleaned;

        for iteration in 1..=self.config.max_iterations {
            let mut candidate = pts.clone();
            for j in 1..n - 1 {
                let target = (pts[j - 1] + pts[j + 1]) * 0.5;
                candidate[j] = pts[j] + (target - pts[j]) * RELAXATION_ALPHA;
            }
            // Endpoints are pinned invariants; re-assert them after the
            // pass even though interior-only iteration leaves them alone.
            candidate[0] = first;
            candidate[n - 1] = last;

            let deviation = max_deviation(&original, &candidate);
            if deviation <= self.config.max_deviation {
                trace!("iteration {iteration}: deviation {deviation:.4} m, accepted");
                pts = candidate;
            } else {
                debug!(
                    "iteration {iteration}: deviation {deviation:.4} m exceeds {:.4} m, stopping",
                    self.config.max_deviation
                );
                return Ok(pts);
            }
        }

        debug!(
            "stopped at iteration cap ({})",
            self.config.max_iterations
        );
        Ok(pts)
    }
}

/// Junction tolerances for polyline connectivity.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ConnectionThresholds {
    /// Maximum endpoint gap for C0 continuity (meters).
    pub max_gap_m: f32,
    /// Maximum tangent-angle difference for C1 continuity (degrees).
    pub max_angle_deg: f32,
}

impl Default for ConnectionThresholds {
    fn default() -> Self {
        Self {
            max_gap_m: 0.1,
            max_angle_deg: 15.0,
        }
    }
}

/// Connectivity report for the junction where polyline A ends and
/// polyline B begins.
///
/// Carries the raw gap and angle alongside the classifications so
/// callers can annotate plots and reports with ε and θ.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConnectionReport {
    /// Euclidean distance from A's last point to B's first point (meters).
    pub gap_m: f32,
    /// Whether the junction is positionally continuous.
    pub is_c0: bool,
    /// Angle between A's exit tangent and B's entry tangent (degrees).
    /// `None` when either polyline has fewer than 2 points.
    pub angle_deg: Option<f32>,
    /// Whether the junction is tangent-continuous; `None` whenever the
    /// angle is undefined.
    pub is_c1: Option<bool>,
}

/// Check C0/C1 continuity between two polylines with the default
/// tolerances (0.1 m gap, 15° tangent angle).
pub fn check_connection(a: &[Point3D], b: &[Point3D]) -> Result<ConnectionReport> {
    check_connection_with(a, b, ConnectionThresholds::default())
}

/// Check C0/C1 continuity between two polylines.
///
/// The gap is the full-dimension Euclidean distance between A's last and
/// B's first point. The tangent angle compares A's final segment
/// direction with B's first segment direction; it is reported as absent
/// (not an error) when either polyline has a single point.
///
/// # Errors
/// - [`GeometryError::EmptyPolyline`] if either polyline is empty.
/// - [`GeometryError::ZeroLengthDirection`] if a boundary segment has
///   zero length (the caller should clean duplicates first).
pub fn check_connection_with(
    a: &[Point3D],
    b: &[Point3D],
    thresholds: ConnectionThresholds,
) -> Result<ConnectionReport> {
    let (end_a, start_b) = match (a.last(), b.first()) {
        (Some(end_a), Some(start_b)) => (*end_a, *start_b),
        _ => return Err(GeometryError::EmptyPolyline),
    };

    let gap_m = end_a.distance(&start_b);
    let is_c0 = gap_m < thresholds.max_gap_m;

    let angle_deg = if a.len() >= 2 && b.len() >= 2 {
        let exit_dir = a[a.len() - 1] - a[a.len() - 2];
        let entry_dir = b[1] - b[0];
        Some(angle_between_degrees(exit_dir, entry_dir)?)
    } else {
        None
    };
    let is_c1 = angle_deg.map(|angle| angle < thresholds.max_angle_deg);

    Ok(ConnectionReport {
        gap_m,
        is_c0,
        angle_deg,
        is_c1,
    })
}
