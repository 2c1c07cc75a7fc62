#![forbid(unsafe_code)]

//! Region-aware directional focus navigation for D-pad driven UIs.
//!
//! # Role
//! `dpadnav` is the engine layer: given a changing population of focusable
//! nodes grouped into named regions, it decides which node should receive
//! focus for each directional key press, and keeps enough history to restore
//! a sensible position on back-navigation or region re-entry.
//!
//! # Primary responsibilities
//! - **NodeRegistry**: live focusable-node records and their region tags.
//! - **RegionTable**: region membership and prioritized entry points.
//! - **RuleTable**: ordered cross-region transition rules with bidirectional
//!   mirror expansion.
//! - **FocusHistory**: bounded focus-event stack backing the memory strategy
//!   and back-navigation.
//! - **Navigator**: the per-root decision entry point tying it all together.
//!
//! # How it fits in the system
//! The host UI layer owns widget lifetime, layout, and rendering. It feeds
//! node registrations and geometry updates in, calls [`Navigator::decide`]
//! per key press, and performs the actual focus move on whatever node the
//! engine returns. "No candidate" is an ordinary `None`, never an error: it
//! means the edge of the navigable area.
//!
//! One [`Navigator`] instance serves one navigation root. Nested or parallel
//! roots must each own an independent instance; nothing in this crate is
//! global.

pub mod config;
pub mod history;
pub mod navigator;
pub mod region;
pub mod registry;
pub mod rules;

pub use config::{ConfigError, NavConfig};
pub use dpadnav_core::{Direction, FocusNode, NodeId, Point, Rect, RegionId, RouteId};
pub use history::{FocusHistory, HistoryEntry};
pub use navigator::{FocusEvent, Navigator};
pub use region::RegionTable;
pub use registry::NodeRegistry;
pub use rules::{NavigationRule, Resolver, ResolverContext, RuleTable, Strategy, StrategyKind};
