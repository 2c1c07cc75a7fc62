#![forbid(unsafe_code)]

//! Directional nearest-neighbor scoring.
//!
//! Pure function ranking candidate rectangles for a "move focus in direction
//! D" request. Used both for within-region traversal and as the whole-scene
//! geometric fallback.
//!
//! # Algorithm
//!
//! 1. Keep only candidates strictly in direction D from the reference,
//!    using a half-plane test with a 1-unit tolerance so that rectangles
//!    sharing an edge (common in grid layouts after rounding) still qualify.
//! 2. Score each survivor as `primary + 2 × perpendicular`, where `primary`
//!    is the center-to-center distance along the navigation axis and
//!    `perpendicular` the absolute center-to-center distance on the
//!    orthogonal axis.
//! 3. Minimum score wins; ties keep the first candidate seen, so the result
//!    is deterministic given deterministic candidate order.
//!
//! The ×2 perpendicular weighting biases selection toward elements directly
//! ahead over elements merely closer in raw Euclidean distance but off-axis,
//! which is what D-pad users expect in grids and lists.
//!
//! # Invariants
//!
//! 1. The returned candidate always passes the half-plane test.
//! 2. Degenerate rectangles (stale geometry) never qualify.
//! 3. `None` is a normal outcome: the edge of the navigable area.

use crate::direction::Direction;
use crate::geometry::Rect;
use crate::node::NodeId;

/// Tolerance absorbing adjacency rounding in the half-plane test.
const EDGE_TOLERANCE: f64 = 1.0;

/// Perpendicular offsets count double against a candidate.
const PERPENDICULAR_WEIGHT: f64 = 2.0;

/// Whether `candidate` lies in `direction` from `reference`, with tolerance.
#[must_use]
pub fn qualifies(reference: Rect, candidate: Rect, direction: Direction) -> bool {
    if candidate.is_degenerate() {
        return false;
    }
    match direction {
        Direction::Up => candidate.y1 <= reference.y0 + EDGE_TOLERANCE,
        Direction::Down => candidate.y0 >= reference.y1 - EDGE_TOLERANCE,
        Direction::Left => candidate.x1 <= reference.x0 + EDGE_TOLERANCE,
        Direction::Right => candidate.x0 >= reference.x1 - EDGE_TOLERANCE,
    }
}

/// Score a qualifying candidate. Lower is better.
fn score(reference: Rect, candidate: Rect, direction: Direction) -> f64 {
    let rc = reference.center();
    let cc = candidate.center();
    let (primary, perpendicular) = if direction.is_vertical() {
        ((rc.y - cc.y).abs(), (rc.x - cc.x).abs())
    } else {
        ((rc.x - cc.x).abs(), (rc.y - cc.y).abs())
    };
    primary + PERPENDICULAR_WEIGHT * perpendicular
}

/// Pick the best navigation target in `direction` from `reference`.
///
/// Candidates are visited in iteration order; on equal scores the first
/// candidate seen wins. Returns `None` when nothing qualifies or the
/// reference geometry itself is degenerate.
#[must_use]
pub fn best_in_direction(
    reference: Rect,
    candidates: impl IntoIterator<Item = (NodeId, Rect)>,
    direction: Direction,
) -> Option<NodeId> {
    if reference.is_degenerate() {
        return None;
    }

    let mut best: Option<(NodeId, f64)> = None;
    for (id, rect) in candidates {
        if !qualifies(reference, rect, direction) {
            continue;
        }
        let s = score(reference, rect, direction);
        match best {
            Some((_, best_score)) if s >= best_score => {}
            _ => best = Some((id, s)),
        }
    }
    best.map(|(id, _)| id)
}

// =========================================================================
// Tests
// =========================================================================
