//! Piecewise-polynomial lane-width profiles.
//!
//! A lane's width along the road is described by cubic polynomial
//! segments, each valid from its start offset to the next segment's
//! start offset: `w(s) = a + b·Δs + c·Δs² + d·Δs³` with
//! `Δs = s − s_offset`. Junctions between adjacent segments are
//! classified for positional (C0) and slope (C1) continuity; a
//! discontinuity is data for the caller, never an error.

use serde::{Deserialize, Serialize};

use crate::core::math::rad_to_deg;
use crate::error::{GeometryError, Result};

/// One cubic width segment, valid from `s_offset` onward.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WidthSegment {
    /// Start offset along the road (meters).
    pub s_offset: f32,
    /// Constant coefficient (width at `Δs = 0`).
    pub a: f32,
    /// Linear coefficient.
    pub b: f32,
    /// Quadratic coefficient.
    pub c: f32,
    /// Cubic coefficient.
    pub d: f32,
}

impl WidthSegment {
    /// Create a new segment.
    pub fn new(s_offset: f32, a: f32, b: f32, c: f32, d: f32) -> Self {
        Self { s_offset, a, b, c, d }
    }

    /// Width at offset `delta_s` from this segment's start.
    #[inline]
    pub fn width(&self, delta_s: f32) -> f32 {
        self.a + self.b * delta_s + self.c * delta_s * delta_s + self.d * delta_s * delta_s * delta_s
    }

    /// Width derivative (slope) at offset `delta_s` from this segment's start.
    #[inline]
    pub fn slope(&self, delta_s: f32) -> f32 {
        self.b + 2.0 * self.c * delta_s + 3.0 * self.d * delta_s * delta_s
    }
}

/// Continuity tolerances for junction classification.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ContinuityThresholds {
    /// Maximum width gap for C0 continuity (meters).
    pub max_gap_m: f32,
    /// Maximum slope-angle difference for C1 continuity (degrees).
    pub max_angle_deg: f32,
}

impl Default for ContinuityThresholds {
    fn default() -> Self {
        Self {
            max_gap_m: 0.01,
            max_angle_deg: 10.0,
        }
    }
}

/// Continuity report for the junction between two adjacent segments.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct JunctionContinuity {
    /// Road offset of the junction (meters).
    pub junction_s: f32,
    /// Width evaluated from the left segment at the junction (meters).
    pub left_width: f32,
    /// Width evaluated from the right segment at the junction (meters).
    pub right_width: f32,
    /// Absolute width gap (meters).
    pub gap_m: f32,
    /// Whether the junction is positionally continuous.
    pub is_c0: bool,
    /// Slope of the left segment at the junction.
    pub left_slope: f32,
    /// Slope of the right segment at the junction.
    pub right_slope: f32,
    /// Absolute difference between the slope angles (degrees).
    pub angle_diff_deg: f32,
    /// Whether the junction is approximately slope-continuous.
    pub is_c1: bool,
}

/// An ordered table of width segments for one lane.
///
/// Segments are kept sorted ascending by `s_offset`; lookup selects the
/// last segment whose offset does not exceed the query position. Queries
/// before the first segment's offset clamp to the first segment, i.e. its
/// polynomial is extrapolated backward rather than failing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WidthProfile {
    segments: Vec<WidthSegment>,
}

impl WidthProfile {
    /// Build a profile from a segment list.
    ///
    /// Segments are sorted ascending by start offset (a stable sort, so
    /// already-ordered input keeps its order).
    ///
    /// # Errors
    /// [`GeometryError::EmptyProfile`] if the list is empty.
    pub fn new(mut segments: Vec<WidthSegment>) -> Result<Self> {
        if segments.is_empty() {
            return Err(GeometryError::EmptyProfile);
        }
        segments.sort_by(|a, b| a.s_offset.total_cmp(&b.s_offset));
        Ok(Self { segments })
    }

    /// The segments, ascending by start offset.
    pub fn segments(&self) -> &[WidthSegment] {
        &self.segments
    }

    /// Select the segment governing position `s`: the last segment whose
    /// start offset is `<= s`, or the first segment when `s` lies before
    /// all offsets.
    fn segment_at(&self, s: f32) -> &WidthSegment {
        self.segments
            .iter()
            .rev()
            .find(|seg| seg.s_offset <= s)
            .unwrap_or(&self.segments[0])
    }

    /// Lane width at position `s` (meters).
    pub fn width_at(&self, s: f32) -> f32 {
        let seg = self.segment_at(s);
        seg.width(s - seg.s_offset)
    }

    /// Width slope (dw/ds) at position `s`.
    pub fn slope_at(&self, s: f32) -> f32 {
        let seg = self.segment_at(s);
        seg.slope(s - seg.s_offset)
    }

    /// Continuity reports for every adjacent segment pair, using the
    /// default tolerances (1 cm gap, 10° slope angle).
    pub fn junctions(&self) -> Vec<JunctionContinuity> {
        self.junctions_with(ContinuityThresholds::default())
    }

    /// Continuity reports for every adjacent segment pair.
    ///
    /// At each junction the left segment is evaluated at the junction
    /// offset and the right segment at `Δs = 0`; both the width gap and
    /// the `atan(slope)` angle difference are reported alongside their
    /// boolean classifications.
    pub fn junctions_with(&self, thresholds: ContinuityThresholds) -> Vec<JunctionContinuity> {
        self.segments
            .windows(2)
            .map(|pair| {
                let (left, right) = (&pair[0], &pair[1]);
                let junction_s = right.s_offset;
                let delta = junction_s - left.s_offset;

                let left_width = left.width(delta);
                let right_width = right.width(0.0);
                let gap_m = (left_width - right_width).abs();

                let left_slope = left.slope(delta);
                let right_slope = right.slope(0.0);
                let angle_diff_deg =
                    (rad_to_deg(left_slope.atan()) - rad_to_deg(right_slope.atan())).abs();

                JunctionContinuity {
                    junction_s,
                    left_width,
                    right_width,
                    gap_m,
                    is_c0: gap_m < thresholds.max_gap_m,
                    left_slope,
                    right_slope,
                    angle_diff_deg,
                    is_c1: angle_diff_deg < thresholds.max_angle_deg,
                }
            })
            .collect()
    }

    /// Evaluate the width function at `count` evenly spaced positions
    /// between `s_start` and `s_end` inclusive.
    ///
    /// Returns `(s, width)` pairs; callers use this for profile plots and
    /// reports. A count of 0 yields an empty vector, a count of 1 yields
    /// just `s_start`.
    pub fn sample(&self, s_start: f32, s_end: f32, count: usize) -> Vec<(f32, f32)> {
        match count {
            0 => Vec::new(),
            1 => vec![(s_start, self.width_at(s_start))],
            _ => (0..count)
                .map(|i| {
                    let t = i as f32 / (count - 1) as f32;
                    let s = s_start + (s_end - s_start) * t;
                    (s, self.width_at(s))
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_segment_profile() -> WidthProfile {
        WidthProfile::new(vec![
            WidthSegment::new(0.0, 3.0, 0.1, 0.0, 0.0),
            WidthSegment::new(20.0, 5.0, -0.05, 0.001, 0.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_empty_profile_rejected() {
        assert_eq!(WidthProfile::new(vec![]), Err(GeometryError::EmptyProfile));
    }

    #[test]
    fn test_width_matches_closed_form() {
        let profile = two_segment_profile();
        assert!((profile.width_at(0.0) - 3.0).abs() < 1e-6);
        assert!((profile.width_at(10.0) - 4.0).abs() < 1e-6);
        // Junction belongs to the second segment.
        assert!((profile.width_at(20.0) - 5.0).abs() < 1e-6);
        // 5 - 0.05*5 + 0.001*25 = 4.775
        assert!((profile.width_at(25.0) - 4.775).abs() < 1e-5);
    }

    #[test]
    fn test_query_before_first_offset_clamps_left() {
        let profile = two_segment_profile();
        // Segment 1's polynomial extrapolated backward: 3 + 0.1 * (-5)
        assert!((profile.width_at(-5.0) - 2.5).abs() < 1e-6);
    }

    #[test]
    fn test_slope_at() {
        let profile = two_segment_profile();
        assert!((profile.slope_at(10.0) - 0.1).abs() < 1e-6);
        // Second segment at Δs = 5: -0.05 + 2*0.001*5 = -0.04
        assert!((profile.slope_at(25.0) - (-0.04)).abs() < 1e-6);
    }

    #[test]
    fn test_segments_sorted_on_construction() {
        let profile = WidthProfile::new(vec![
            WidthSegment::new(20.0, 5.0, -0.05, 0.001, 0.0),
            WidthSegment::new(0.0, 3.0, 0.1, 0.0, 0.0),
        ])
        .unwrap();
        assert_eq!(profile.segments()[0].s_offset, 0.0);
        assert!((profile.width_at(10.0) - 4.0).abs() < 1e-6);
    }

    #[test]
    fn test_junction_continuity_fixture() {
        let profile = two_segment_profile();
        let junctions = profile.junctions();
        assert_eq!(junctions.len(), 1);

        let j = &junctions[0];
        assert_eq!(j.junction_s, 20.0);
        // 3 + 0.1*20 = 5 meets the second segment's a = 5 exactly.
        assert!(j.gap_m < 1e-6);
        assert!(j.is_c0);
        // atan(0.1) ≈ 5.71°, atan(-0.05) ≈ -2.86°, difference ≈ 8.57° < 10°.
        assert!((j.angle_diff_deg - 8.573).abs() < 0.01);
        assert!(j.is_c1);
    }

    #[test]
    fn test_junction_discontinuity_reported_not_raised() {
        let profile = WidthProfile::new(vec![
            WidthSegment::new(0.0, 3.0, 0.0, 0.0, 0.0),
            WidthSegment::new(10.0, 4.0, 2.0, 0.0, 0.0),
        ])
        .unwrap();
        let j = profile.junctions()[0];
        assert!((j.gap_m - 1.0).abs() < 1e-6);
        assert!(!j.is_c0);
        assert!(!j.is_c1);
    }

    #[test]
    fn test_sample_spans_range() {
        let profile = two_segment_profile();
        let samples = profile.sample(0.0, 40.0, 5);
        assert_eq!(samples.len(), 5);
        assert_eq!(samples[0].0, 0.0);
        assert_eq!(samples[4].0, 40.0);
        assert!((samples[2].1 - profile.width_at(20.0)).abs() < 1e-6);
        assert!(profile.sample(0.0, 40.0, 0).is_empty());
        assert_eq!(profile.sample(0.0, 40.0, 1).len(), 1);
    }
}
