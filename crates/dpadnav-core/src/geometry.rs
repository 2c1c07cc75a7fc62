#![forbid(unsafe_code)]

//! Axis-aligned geometry in the host's shared coordinate space.
//!
//! Coordinates are `f64` because hosts report logical pixels (TV and kiosk
//! layouts routinely use fractional device-independent units). The engine
//! never produces geometry; it only ranks rectangles the host feeds in.
//!
//! # Invariants
//!
//! 1. A well-formed [`Rect`] has `x0 <= x1` and `y0 <= y1`; constructors
//!    normalize swapped corners.
//! 2. Degenerate rectangles (non-finite or zero-area) are representable but
//!    must be filtered by callers via [`Rect::is_degenerate`] — the scoring
//!    layer treats them as non-qualifying, never as errors.

use serde::{Deserialize, Serialize};

/// A point in the host coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle: `(x0, y0)` top-left, `(x1, y1)` bottom-right.
///
/// The y axis grows downward, matching UI layout conventions: `y0` is the
/// top edge and `y1` the bottom edge.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl Rect {
    /// Create a rectangle from two corners, normalizing swapped coordinates.
    #[must_use]
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self {
            x0: x0.min(x1),
            y0: y0.min(y1),
            x1: x0.max(x1),
            y1: y0.max(y1),
        }
    }

    /// Create a rectangle from origin and size.
    #[must_use]
    pub fn from_origin_size(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(x, y, x + width, y + height)
    }

    /// Width of the rectangle.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    /// Height of the rectangle.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    /// Center point.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new((self.x0 + self.x1) / 2.0, (self.y0 + self.y1) / 2.0)
    }

    /// Whether this rectangle is unusable for navigation: any non-finite
    /// coordinate, or no extent on either axis.
    ///
    /// A stale node whose geometry query failed typically reports a zero
    /// rect; it must drop out of candidate sets rather than win with a
    /// zero distance.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        !(self.x0.is_finite() && self.y0.is_finite() && self.x1.is_finite() && self.y1.is_finite())
            || self.width() <= 0.0
            || self.height() <= 0.0
    }

    /// Whether a point lies inside (edges inclusive).
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x0 && p.x <= self.x1 && p.y >= self.y0 && p.y <= self.y1
    }
}

// =========================================================================
// Tests
// =========================================================================
