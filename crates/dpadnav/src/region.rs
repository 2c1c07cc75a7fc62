#![forbid(unsafe_code)]

//! Region membership and prioritized entry points.
//!
//! A region is a named grouping of focusable nodes (a tab bar, a sidebar, a
//! content grid). Membership order is insertion order and doubles as the
//! deterministic fallback ordering for scoring and entry-point selection.
//!
//! # Invariants
//!
//! 1. A node appears at most once in a region's member list.
//! 2. Entry points are sorted descending by priority; equal priorities keep
//!    insertion order (stable sort).
//! 3. Liveness is always checked at read time against the registry — a
//!    stale id sitting in a member list can never be returned, only skipped.
//!    `cleanup` purges stale ids on demand; no mutation does so implicitly.

use indexmap::IndexMap;

use dpadnav_core::{FocusNode, NodeId, RegionId};

use crate::registry::NodeRegistry;

/// One region's membership and entry points.
#[derive(Debug, Default, Clone)]
struct Region {
    /// Member ids in insertion order.
    members: Vec<NodeId>,
    /// Entry points sorted descending by priority, stable on insertion order.
    entry_points: Vec<(NodeId, i32)>,
}

/// Table of named regions.
#[derive(Debug, Default, Clone)]
pub struct RegionTable {
    regions: IndexMap<RegionId, Region>,
}

impl RegionTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node to a region's membership.
    ///
    /// Idempotent on membership: re-adding an existing member is a no-op,
    /// except that re-registering with `entry_priority` updates (or inserts)
    /// its entry-point priority and re-sorts.
    pub fn register(&mut self, region: &str, id: NodeId, entry_priority: Option<i32>) {
        let entry = self.regions.entry(region.to_string()).or_default();
        if !entry.members.contains(&id) {
            entry.members.push(id);
        }
        if let Some(priority) = entry_priority {
            match entry.entry_points.iter_mut().find(|(eid, _)| *eid == id) {
                Some(slot) => slot.1 = priority,
                None => entry.entry_points.push((id, priority)),
            }
            // Stable: equal priorities keep registration order.
            entry.entry_points.sort_by(|a, b| b.1.cmp(&a.1));
        }
    }

    /// Remove a node from a region's membership and entry points.
    pub fn remove_node(&mut self, region: &str, id: NodeId) {
        if let Some(entry) = self.regions.get_mut(region) {
            entry.members.retain(|m| *m != id);
            entry.entry_points.retain(|(eid, _)| *eid != id);
        }
    }

    /// The node a region hands focus to when entered from outside.
    ///
    /// First live entry point in priority order; if none, the first live
    /// plain member in insertion order; `None` for an empty or unknown
    /// region.
    #[must_use]
    pub fn entry_point_for(&self, region: &str, registry: &NodeRegistry) -> Option<NodeId> {
        let entry = self.regions.get(region)?;
        entry
            .entry_points
            .iter()
            .map(|(id, _)| *id)
            .find(|id| registry.is_live(*id))
            .or_else(|| {
                entry
                    .members
                    .iter()
                    .copied()
                    .find(|id| registry.is_live(*id))
            })
    }

    /// Live members of a region, in insertion order.
    #[must_use]
    pub fn members_of<'a>(&self, region: &str, registry: &'a NodeRegistry) -> Vec<&'a FocusNode> {
        let Some(entry) = self.regions.get(region) else {
            return Vec::new();
        };
        entry
            .members
            .iter()
            .filter_map(|id| registry.get(*id))
            .filter(|n| n.focusable)
            .collect()
    }

    /// Whether a region exists in the table.
    #[must_use]
    pub fn contains(&self, region: &str) -> bool {
        self.regions.contains_key(region)
    }

    /// Region names, in first-registration order.
    pub fn regions(&self) -> impl Iterator<Item = &str> {
        self.regions.keys().map(String::as_str)
    }

    /// Purge all non-live ids from every membership and entry-point list.
    ///
    /// Called periodically or on demand; reads stay correct without it
    /// because liveness is filtered at read time. Returns the number of
    /// stale references removed.
    pub fn cleanup(&mut self, registry: &NodeRegistry) -> usize {
        let mut removed = 0;
        for entry in self.regions.values_mut() {
            let before = entry.members.len() + entry.entry_points.len();
            entry.members.retain(|id| registry.is_live(*id));
            entry.entry_points.retain(|(id, _)| registry.is_live(*id));
            removed += before - (entry.members.len() + entry.entry_points.len());
        }
        removed
    }
}

// =========================================================================
// Tests
// =========================================================================
