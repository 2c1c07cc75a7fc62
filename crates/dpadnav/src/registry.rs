#![forbid(unsafe_code)]

//! Registry of live focusable-node records.
//!
//! The registry is the engine's single source of truth for which nodes exist
//! and whether they may receive focus. The host registers a record when a
//! widget becomes focusable, pushes geometry updates as layout changes, and
//! unregisters synchronously when the widget is disabled or destroyed —
//! liveness is an explicit flag flip, never discovered by probing.
//!
//! # Invariants
//!
//! 1. Node IDs are unique within the registry; re-registering replaces the
//!    record.
//! 2. `unregister` is idempotent.
//! 3. Iteration order is registration order (deterministic fallback
//!    candidate ordering depends on it).
//! 4. History entries referencing an unregistered node become merely stale;
//!    the registry never reaches into the history stack.

use indexmap::IndexMap;

use dpadnav_core::{FocusNode, NodeId, Rect, RegionId};

/// Ordered table of focusable-node records.
#[derive(Debug, Default, Clone)]
pub struct NodeRegistry {
    nodes: IndexMap<NodeId, FocusNode>,
}

impl NodeRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node record. Replaces any existing record with the same id.
    pub fn register(&mut self, node: FocusNode) {
        self.nodes.insert(node.id, node);
    }

    /// Unregister a node. Idempotent; returns the removed record, if any.
    ///
    /// Removal preserves the registration order of the remaining nodes.
    /// Cascading removal from region membership is the navigator's job —
    /// the registry knows nothing about the region table.
    pub fn unregister(&mut self, id: NodeId) -> Option<FocusNode> {
        self.nodes.shift_remove(&id)
    }

    /// Look up a node record.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&FocusNode> {
        self.nodes.get(&id)
    }

    /// Whether a node is registered at all (live or not).
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Whether a node is present and currently able to receive focus.
    ///
    /// A disabled node is invisible to navigation but stays registered.
    #[must_use]
    pub fn is_live(&self, id: NodeId) -> bool {
        self.nodes.get(&id).is_some_and(|n| n.focusable)
    }

    /// Update a node's geometry. No-op for unknown ids.
    pub fn update_bounds(&mut self, id: NodeId, bounds: Rect) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.bounds = bounds;
        }
    }

    /// Flip a node's focusable flag. No-op for unknown ids.
    pub fn set_focusable(&mut self, id: NodeId, focusable: bool) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.focusable = focusable;
        }
    }

    /// Set or clear a node's region tag. No-op for unknown ids.
    pub fn set_region(&mut self, id: NodeId, region: Option<RegionId>) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.region = region;
        }
    }

    /// All live nodes tagged with `region`, in registration order.
    pub fn all_live_in<'a>(&'a self, region: &'a str) -> impl Iterator<Item = &'a FocusNode> {
        self.nodes
            .values()
            .filter(move |n| n.focusable && n.region.as_deref() == Some(region))
    }

    /// All live nodes, in registration order.
    pub fn all_live(&self) -> impl Iterator<Item = &FocusNode> {
        self.nodes.values().filter(|n| n.focusable)
    }

    /// Number of registered nodes (live or not).
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

// =========================================================================
// Tests
// =========================================================================
