//! Lateral ordering of directed lane lines.
//!
//! Parallel lanes are ordered right-to-left by projecting each lane's
//! midpoint onto a shared lateral axis. The axis is derived from the
//! vector mean of the per-lane forward directions, so the ordering is
//! only meaningful for roughly co-directional lanes; widely divergent
//! directions can cancel in the mean (this is an explicit assumption of
//! the algorithm, not a case it resolves).

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::Point2D;
use crate::error::{GeometryError, Result};

/// A 2D line segment with an orientation: `start → end` is "forward".
///
/// Identity is the `id`; the geometry is immutable once constructed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DirectedLine {
    /// Stable lane identifier.
    pub id: String,
    /// Start point.
    pub start: Point2D,
    /// End point (defines the forward direction together with `start`).
    pub end: Point2D,
}

impl DirectedLine {
    /// Create a new directed line.
    pub fn new(id: impl Into<String>, start: Point2D, end: Point2D) -> Self {
        Self {
            id: id.into(),
            start,
            end,
        }
    }

    /// Direction vector from start to end (not normalized).
    #[inline]
    pub fn direction(&self) -> Point2D {
        self.end - self.start
    }

    /// Midpoint of the segment, the representative point for lateral
    /// projection.
    #[inline]
    pub fn midpoint(&self) -> Point2D {
        (self.start + self.end) * 0.5
    }
}

/// Order lanes right-to-left as seen when facing the shared forward
/// direction, returning their ids rightmost first.
///
/// Zero-length lines have no direction and are excluded from both the
/// forward average and the result. The sort is stable: equal projections
/// keep their input encounter order.
///
/// # Errors
/// - [`GeometryError::EmptyLineSet`] if no non-degenerate line remains.
/// - [`GeometryError::ZeroLengthDirection`] if the forward directions
///   cancel to a zero mean (anti-parallel input).
pub fn order_right_to_left(lines: &[DirectedLine]) -> Result<Vec<String>> {
    let mut usable: Vec<(&DirectedLine, Point2D)> = Vec::with_capacity(lines.len());
    for line in lines {
        match line.direction().try_normalized() {
            Ok(dir) => usable.push((line, dir)),
            Err(_) => debug!("lane '{}' has zero length, excluded from ordering", line.id),
        }
    }
    if usable.is_empty() {
        return Err(GeometryError::EmptyLineSet);
    }

    let sum = usable
        .iter()
        .fold(Point2D::ZERO, |acc, (_, dir)| acc + *dir);
    let forward = (sum * (1.0 / usable.len() as f32)).try_normalized()?;

    // Clockwise quarter turn: facing `forward`, this points right.
    let right = Point2D::new(forward.y, -forward.x);
    debug_assert!(
        forward.dot(&right).abs() < 1e-6,
        "lateral axis must be perpendicular to forward"
    );

    let mut projected: Vec<(&str, f32)> = usable
        .iter()
        .map(|(line, _)| (line.id.as_str(), line.midpoint().dot(&right)))
        .collect();
    // Highest projection first = rightmost first. Stable, so ties keep
    // input order.
    projected.sort_by(|a, b| b.1.total_cmp(&a.1));

    Ok(projected.into_iter().map(|(id, _)| id.to_string()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Five parallel lanes running along the (1, 1) diagonal.
    fn fixture_lanes() -> Vec<DirectedLine> {
        vec![
            DirectedLine::new(
                "65",
                Point2D::new(-0.707_106_77, 0.707_106_77),
                Point2D::new(9.899_495, 11.313_708),
            ),
            DirectedLine::new(
                "41",
                Point2D::new(1.414_213_5, -1.414_213_5),
                Point2D::new(12.020_815, 9.192_388),
            ),
            DirectedLine::new(
                "13",
                Point2D::new(-1.414_213_5, 1.414_213_5),
                Point2D::new(9.192_388, 12.020_815),
            ),
            DirectedLine::new(
                "39",
                Point2D::new(0.707_106_77, -0.707_106_77),
                Point2D::new(11.313_708, 9.899_495),
            ),
            DirectedLine::new(
                "87",
                Point2D::new(0.0, 0.0),
                Point2D::new(10.606_602, 10.606_602),
            ),
        ]
    }

    #[test]
    fn test_fixture_order() {
        let order = order_right_to_left(&fixture_lanes()).unwrap();
        assert_eq!(order, vec!["41", "39", "87", "65", "13"]);
    }

    #[test]
    fn test_order_is_permutation_of_input_ids() {
        let lanes = fixture_lanes();
        let mut order = order_right_to_left(&lanes).unwrap();
        order.sort();
        let mut ids: Vec<String> = lanes.iter().map(|l| l.id.clone()).collect();
        ids.sort();
        assert_eq!(order, ids);
    }

    #[test]
    fn test_zero_length_line_excluded() {
        let mut lanes = fixture_lanes();
        lanes.push(DirectedLine::new(
            "degenerate",
            Point2D::new(1.0, 1.0),
            Point2D::new(1.0, 1.0),
        ));
        let order = order_right_to_left(&lanes).unwrap();
        assert_eq!(order.len(), 5);
        assert!(!order.iter().any(|id| id == "degenerate"));
    }

    #[test]
    fn test_all_degenerate_fails() {
        let lanes = vec![DirectedLine::new(
            "a",
            Point2D::new(2.0, 3.0),
            Point2D::new(2.0, 3.0),
        )];
        assert_eq!(
            order_right_to_left(&lanes),
            Err(GeometryError::EmptyLineSet)
        );
    }

    #[test]
    fn test_empty_input_fails() {
        assert_eq!(order_right_to_left(&[]), Err(GeometryError::EmptyLineSet));
    }

    #[test]
    fn test_anti_parallel_directions_fail() {
        let lanes = vec![
            DirectedLine::new("fwd", Point2D::new(0.0, 0.0), Point2D::new(1.0, 0.0)),
            DirectedLine::new("back", Point2D::new(0.0, 1.0), Point2D::new(-1.0, 1.0)),
        ];
        assert_eq!(
            order_right_to_left(&lanes),
            Err(GeometryError::ZeroLengthDirection)
        );
    }

    #[test]
    fn test_horizontal_lanes_order_by_y() {
        // Facing +x, right is -y: the lane with the lowest y is rightmost.
        let lanes = vec![
            DirectedLine::new("mid", Point2D::new(0.0, 0.0), Point2D::new(10.0, 0.0)),
            DirectedLine::new("left", Point2D::new(0.0, 3.5), Point2D::new(10.0, 3.5)),
            DirectedLine::new("right", Point2D::new(0.0, -3.5), Point2D::new(10.0, -3.5)),
        ];
        let order = order_right_to_left(&lanes).unwrap();
        assert_eq!(order, vec!["right", "mid", "left"]);
    }
}
