#![forbid(unsafe_code)]

//! Core: geometry, directions, the node record model, and directional scoring.
//!
//! # Role in dpadnav
//! `dpadnav-core` is the pure layer. It owns the 2D types a navigation
//! decision is computed over and the stateless nearest-neighbor scoring
//! function. Nothing in this crate holds engine state.
//!
//! # Primary responsibilities
//! - **Rect/Point**: axis-aligned geometry in the host's coordinate space.
//! - **Direction**: the four D-pad directions and their opposites.
//! - **FocusNode**: the per-node record the registry stores.
//! - **Scoring**: `best_in_direction`, the pure half-plane + weighted-distance
//!   candidate ranking.
//!
//! # How it fits in the system
//! The engine crate (`dpadnav`) consumes these types to run the region-aware
//! navigation policy. Hosts mostly touch `Rect` and `Direction` when feeding
//! geometry in and key presses down.

pub mod direction;
pub mod geometry;
pub mod node;
pub mod scoring;

pub use direction::Direction;
pub use geometry::{Point, Rect};
pub use node::{FocusNode, NodeId, RegionId, RouteId};
pub use scoring::best_in_direction;
