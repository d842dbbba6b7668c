//! Small math helpers shared across the crate.
//!
//! All angles produced by the public API are in degrees (matching how
//! lane-continuity tolerances are specified); conversions live here.

use std::f32::consts::PI;

/// Convert radians to degrees.
#[inline]
pub fn rad_to_deg(rad: f32) -> f32 {
    rad * 180.0 / PI
}

/// Convert degrees to radians.
#[inline]
pub fn deg_to_rad(deg: f32) -> f32 {
    deg * PI / 180.0
}

/// Square of a value. Useful for avoiding `powi(2)`.
#[inline]
pub fn sq(x: f32) -> f32 {
    x * x
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_angle_conversions_round_trip() {
        assert!((rad_to_deg(PI) - 180.0).abs() < 1e-4);
        assert!((deg_to_rad(rad_to_deg(1.25)) - 1.25).abs() < 1e-6);
    }

    #[test]
    fn test_sq() {
        assert_eq!(sq(3.0), 9.0);
    }
}
