//! # Marga-Lanes: Lane-Level Road Geometry
//!
//! A small geometry engine for lane-level maps: evaluating
//! piecewise-polynomial lane-width functions, ordering parallel lanes
//! laterally (right-to-left), and smoothing/validating the connectivity
//! of lane-centerline polylines.
//!
//! ## Quick Start
//!
//! ```rust
//! use marga_lanes::{LaneSmoother, WidthProfile, WidthSegment};
//! use marga_lanes::core::Point3D;
//!
//! // Lane width: 3 m widening by 0.1 m/m from s = 0.
//! let profile = WidthProfile::new(vec![
//!     WidthSegment::new(0.0, 3.0, 0.1, 0.0, 0.0),
//! ]).unwrap();
//! assert!((profile.width_at(10.0) - 4.0).abs() < 1e-6);
//!
//! // Smooth a centerline, keeping it within 0.3 m of the original.
//! let centerline = vec![
//!     Point3D::from_xy(0.0, 0.0),
//!     Point3D::from_xy(1.0, 0.4),
//!     Point3D::from_xy(2.0, 0.0),
//! ];
//! let smoothed = LaneSmoother::with_defaults().smooth(&centerline).unwrap();
//! assert_eq!(smoothed.len(), 3);
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: point types and angle helpers
//! - [`geometry`]: closest-point distances, chain deviation, duplicate
//!   removal (the leaf primitives everything else consumes)
//! - [`profile`]: cubic width segments, lookup, junction continuity
//! - [`ordering`]: lateral right-to-left ordering of directed lines
//! - [`smoothing`]: bounded Laplacian smoothing and junction checks
//! - [`error`]: error types
//!
//! ## Data Flow
//!
//! ```text
//! segment tables / point lists
//!         │
//!         ▼
//!   geometry primitives ──► LateralSorter / LaneSmoother / WidthProfile
//!         │                          │
//!         ▼                          ▼
//!   scalar distances        ordered ids, smoothed polylines,
//!                           continuity reports
//! ```
//!
//! All operations are pure functions over immutable input data:
//! no shared state, no I/O, every algorithm bounded. Independent calls
//! are safe to run in parallel without coordination.
//!
//! Coordinates are in meters. Right-handed 2D frame: facing a forward
//! direction `(fx, fy)`, "right" is the clockwise quarter turn
//! `(fy, -fx)`.

pub mod core;
pub mod error;
pub mod geometry;
pub mod ordering;
pub mod profile;
pub mod smoothing;

pub use self::core::{Point2D, Point3D};
pub use error::{GeometryError, Result};
pub use geometry::{
    max_deviation, point_to_segment_distance, polyline_length, remove_consecutive_duplicates,
};
pub use ordering::{order_right_to_left, DirectedLine};
pub use profile::{ContinuityThresholds, JunctionContinuity, WidthProfile, WidthSegment};
pub use smoothing::{
    check_connection, check_connection_with, ConnectionReport, ConnectionThresholds, LaneSmoother,
    SmoothingConfig,
};
