//! Shared geometric primitives for polyline processing.
//!
//! These are the leaf operations the lateral sorter and the smoother are
//! built on: closest-point-on-segment distance, one-sided chain deviation,
//! angle between directions, and consecutive-duplicate removal.

use crate::core::math::rad_to_deg;
use crate::core::Point3D;
use crate::error::Result;

/// Tolerance for treating consecutive polyline points as duplicates.
///
/// Compared per coordinate; a point equal to its predecessor in every
/// coordinate within this tolerance is dropped before geometric
/// processing.
pub const DUPLICATE_EPSILON: f32 = 1e-6;

/// Distance from a point to a line segment (closest point on the
/// segment, not the infinite line).
///
/// A zero-length segment degenerates to point-to-point distance; this is
/// a defined fallback, not an error.
pub fn point_to_segment_distance(p: Point3D, a: Point3D, b: Point3D) -> f32 {
    let ab = b - a;
    let ab_len_sq = ab.dot(&ab);
    if ab_len_sq == 0.0 {
        return p.distance(&a);
    }

    let t = ((p - a).dot(&ab) / ab_len_sq).clamp(0.0, 1.0);
    let projection = a + ab * t;
    p.distance(&projection)
}

/// One-sided deviation of `candidate` from the polygonal chain `original`.
///
/// For every candidate point, take the minimum distance to any consecutive
/// segment of `original`; return the maximum of those minima. This is the
/// fidelity metric for smoothing; index-aligned point matching would
/// overstate deviation once points start migrating along the chain.
///
/// A single-point `original` is treated as a degenerate chain (distance to
/// that point); an empty `original` or `candidate` yields 0.
pub fn max_deviation(original: &[Point3D], candidate: &[Point3D]) -> f32 {
    if original.is_empty() {
        return 0.0;
    }

    let mut max_dev = 0.0f32;
    for p in candidate {
        let min_dist = if original.len() == 1 {
            p.distance(&original[0])
        } else {
            original
                .windows(2)
                .map(|seg| point_to_segment_distance(*p, seg[0], seg[1]))
                .fold(f32::INFINITY, f32::min)
        };
        max_dev = max_dev.max(min_dist);
    }
    max_dev
}

/// Angle between two direction vectors, in degrees within `[0, 180]`.
///
/// # Errors
/// [`crate::GeometryError::ZeroLengthDirection`] if either vector has
/// zero length.
pub fn angle_between_degrees(u: Point3D, v: Point3D) -> Result<f32> {
    let un = u.try_normalized()?;
    let vn = v.try_normalized()?;
    Ok(rad_to_deg(un.dot(&vn).clamp(-1.0, 1.0).acos()))
}

/// Remove consecutive near-duplicate points from a polyline.
///
/// Points equal to their predecessor in every coordinate within
/// [`DUPLICATE_EPSILON`] are dropped. Non-consecutive repeats are kept.
pub fn remove_consecutive_duplicates(polyline: &[Point3D]) -> Vec<Point3D> {
    let mut cleaned: Vec<Point3D> = Vec::with_capacity(polyline.len());
    for p in polyline {
        match cleaned.last() {
            Some(last) if p.approx_eq(last, DUPLICATE_EPSILON) => {}
            _ => cleaned.push(*p),
        }
    }
    cleaned
}

/// Total length of a polyline (sum of consecutive segment lengths).
pub fn polyline_length(polyline: &[Point3D]) -> f32 {
    polyline.windows(2).map(|w| w[0].distance(&w[1])).sum()
}
