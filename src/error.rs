//! Error types for the lane-geometry core.
//!
//! All errors are deterministic geometric conditions detected at the call
//! site and surfaced to the caller unchanged. There is no retry path:
//! either the input satisfies the operation's precondition or it does not.
//! Discontinuity at a junction is reported as data, never as an error.

use thiserror::Error;

/// Errors raised by lane-geometry operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    /// A unit direction was requested from a zero-length vector.
    ///
    /// Raised when normalizing a degenerate lane direction or when a
    /// set of near-anti-parallel lines averages out to a zero forward
    /// vector.
    #[error("cannot normalize a zero-length vector")]
    ZeroLengthDirection,

    /// A polyline collapsed below two points after duplicate removal.
    #[error("polyline has {points} point(s) after duplicate removal, need at least 2")]
    DegeneratePolyline {
        /// Points remaining after cleaning.
        points: usize,
    },

    /// A polyline was empty where at least one point is required.
    #[error("polyline is empty")]
    EmptyPolyline,

    /// A width profile was constructed with no segments.
    #[error("width profile has no segments")]
    EmptyProfile,

    /// No non-degenerate lines remained for lateral ordering.
    #[error("no non-degenerate lines to order")]
    EmptyLineSet,

    /// The smoothing iteration cap must be at least 1.
    #[error("iteration cap must be at least 1 (got {cap})")]
    InvalidIterationCap {
        /// The rejected cap value.
        cap: usize,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GeometryError>;
