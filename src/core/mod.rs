//! Core value types for lane geometry.
//!
//! - [`Point2D`]: directed-line endpoints and lateral-axis math
//! - [`Point3D`]: polyline points (auxiliary third coordinate, zero for 2D)
//! - [`math`]: angle conversions and small helpers

pub mod math;
mod point;

pub use point::{Point2D, Point3D};
