//! Point types for lane geometry.
//!
//! [`Point2D`] is used for directed lane lines and lateral ordering.
//! [`Point3D`] is the polyline point type: lane centerlines carry an
//! auxiliary third coordinate (treated as an opaque extra dimension),
//! and 2D polylines embed with `z = 0`, which leaves every distance and
//! smoothing result identical to the plain 2D computation.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

use crate::error::{GeometryError, Result};

/// A 2D point (meters, f32).
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2D {
    /// X coordinate in meters.
    pub x: f32,
    /// Y coordinate in meters.
    pub y: f32,
}

impl Point2D {
    /// Zero point (origin).
    pub const ZERO: Point2D = Point2D { x: 0.0, y: 0.0 };

    /// Create a new point.
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance(&self, other: &Point2D) -> f32 {
        (*self - *other).length()
    }

    /// Length (magnitude) of this point as a vector from the origin.
    #[inline]
    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Dot product with another point (as vectors).
    #[inline]
    pub fn dot(&self, other: &Point2D) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Unit vector in this direction.
    ///
    /// # Errors
    /// [`GeometryError::ZeroLengthDirection`] if the vector has zero length.
    #[inline]
    pub fn try_normalized(&self) -> Result<Point2D> {
        let len = self.length();
        if len > 0.0 {
            Ok(Point2D::new(self.x / len, self.y / len))
        } else {
            Err(GeometryError::ZeroLengthDirection)
        }
    }
}

impl Add for Point2D {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Point2D::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Point2D {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Point2D::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f32> for Point2D {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: f32) -> Self {
        Point2D::new(self.x * scalar, self.y * scalar)
    }
}

/// A polyline point (meters, f32).
///
/// The third coordinate is carried through arithmetic, distances, and
/// duplicate comparison exactly like the first two; callers with plain
/// 2D data use [`Point3D::from_xy`].
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Point3D {
    /// X coordinate in meters.
    pub x: f32,
    /// Y coordinate in meters.
    pub y: f32,
    /// Auxiliary third coordinate (zero for 2D polylines).
    pub z: f32,
}

impl Point3D {
    /// Zero point (origin).
    pub const ZERO: Point3D = Point3D {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Create a new point.
    #[inline]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Create a 2D point embedded with `z = 0`.
    #[inline]
    pub fn from_xy(x: f32, y: f32) -> Self {
        Self { x, y, z: 0.0 }
    }

    /// Euclidean distance to another point, over all three coordinates.
    #[inline]
    pub fn distance(&self, other: &Point3D) -> f32 {
        (*self - *other).length()
    }

    /// Length (magnitude) of this point as a vector from the origin.
    #[inline]
    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Dot product with another point (as vectors).
    #[inline]
    pub fn dot(&self, other: &Point3D) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Unit vector in this direction.
    ///
    /// # Errors
    /// [`GeometryError::ZeroLengthDirection`] if the vector has zero length.
    #[inline]
    pub fn try_normalized(&self) -> Result<Point3D> {
        let len = self.length();
        if len > 0.0 {
            Ok(Point3D::new(self.x / len, self.y / len, self.z / len))
        } else {
            Err(GeometryError::ZeroLengthDirection)
        }
    }

    /// Component-wise approximate equality within an absolute tolerance.
    #[inline]
    pub fn approx_eq(&self, other: &Point3D, epsilon: f32) -> bool {
        (self.x - other.x).abs() <= epsilon
            && (self.y - other.y).abs() <= epsilon
            && (self.z - other.z).abs() <= epsilon
    }
}

impl Add for Point3D {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Point3D::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for Point3D {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Point3D::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Mul<f32> for Point3D {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: f32) -> Self {
        Point3D::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}
