#![forbid(unsafe_code)]

//! The per-root navigation policy.
//!
//! One [`Navigator`] owns the node registry, region table, rule table, and
//! focus history for a single navigation root, and is the decision entry
//! point invoked once per directional key press.
//!
//! # Decision order (per [`Navigator::decide`])
//!
//! 1. Disabled engine or regionless current node: whole-scene geometric
//!    scoring.
//! 2. Same-region scoring over the current region's live members. A
//!    same-region candidate always outranks cross-region rules, so a region
//!    is exhausted (including off-screen members) before a boundary is
//!    crossed.
//! 3. Rule lookup for `(region, direction)`; the matching rule's strategy
//!    resolves the target.
//! 4. Whole-scene geometric fallback.
//!
//! Every step may yield nothing; `None` is the ordinary "edge of navigable
//! area" outcome and never an error.
//!
//! # Isolation
//!
//! Nested navigators (e.g. an overlay with its own D-pad scope) must each
//! own an independent instance. There is no shared or global state.

use tracing::{debug, trace};

use dpadnav_core::{Direction, FocusNode, NodeId, Rect, best_in_direction};

use crate::config::{ConfigError, NavConfig};
use crate::history::{FocusHistory, HistoryEntry};
use crate::region::RegionTable;
use crate::registry::NodeRegistry;
use crate::rules::{NavigationRule, ResolverContext, RuleTable, Strategy};

/// Focus change events emitted by the navigator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FocusEvent {
    FocusGained { id: NodeId },
    FocusLost { id: NodeId },
    FocusMoved { from: NodeId, to: NodeId },
}

/// Region-aware directional navigation engine for one navigation root.
#[derive(Debug)]
pub struct Navigator {
    config: NavConfig,
    registry: NodeRegistry,
    regions: RegionTable,
    rules: RuleTable,
    history: FocusHistory,
    current: Option<NodeId>,
    last_event: Option<FocusEvent>,
}

impl Navigator {
    /// Create a navigator from a validated configuration.
    pub fn new(config: NavConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let history = FocusHistory::new(config.max_history)?;
        let rules = RuleTable::with_rules(config.rules.clone());
        Ok(Self {
            config,
            registry: NodeRegistry::new(),
            regions: RegionTable::new(),
            rules,
            history,
            current: None,
            last_event: None,
        })
    }

    /// Navigator with the default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(NavConfig::default()).expect("default config is valid")
    }

    // --- Registration -----------------------------------------------------

    /// Register a node. If the record carries a region tag, the node joins
    /// that region's membership (as a plain member, not an entry point).
    pub fn register_node(&mut self, node: FocusNode) {
        let region = node.region.clone();
        self.register_internal(node, region.as_deref(), None);
    }

    /// Register a node into a region, optionally as an entry point with the
    /// given priority.
    pub fn register_in_region(
        &mut self,
        node: FocusNode,
        region: &str,
        entry_priority: Option<i32>,
    ) {
        self.register_internal(node, Some(region), entry_priority);
    }

    fn register_internal(
        &mut self,
        mut node: FocusNode,
        region: Option<&str>,
        entry_priority: Option<i32>,
    ) {
        // One region per node: joining a new region leaves the old one.
        if let Some(prev) = self.registry.get(node.id).and_then(|n| n.region.clone())
            && region != Some(prev.as_str())
        {
            self.regions.remove_node(&prev, node.id);
        }
        node.region = region.map(str::to_string);
        let id = node.id;
        self.registry.register(node);
        if let Some(region) = region {
            self.regions.register(region, id, entry_priority);
        }
    }

    /// Unregister a node. Idempotent; cascades to region membership and
    /// entry points. History entries for the node become stale but are not
    /// force-deleted.
    pub fn unregister_node(&mut self, id: NodeId) {
        if let Some(record) = self.registry.unregister(id) {
            if let Some(region) = record.region.as_deref() {
                self.regions.remove_node(region, id);
            }
            if self.current == Some(id) {
                self.current = None;
                self.last_event = Some(FocusEvent::FocusLost { id });
            }
        }
    }

    /// Push a geometry update for a node.
    pub fn update_bounds(&mut self, id: NodeId, bounds: Rect) {
        self.registry.update_bounds(id, bounds);
    }

    /// Flip a node's focusable flag.
    pub fn set_focusable(&mut self, id: NodeId, focusable: bool) {
        self.registry.set_focusable(id, focusable);
    }

    // --- Focus tracking ---------------------------------------------------

    /// The node currently holding focus, as last reported by the host.
    #[must_use]
    pub fn current(&self) -> Option<NodeId> {
        self.current
    }

    /// Whether a node is the current focus.
    #[must_use]
    pub fn is_focused(&self, id: NodeId) -> bool {
        self.current == Some(id)
    }

    /// Host notification: `id` became focused.
    ///
    /// Records a history entry for the newly focused node when focus memory
    /// is enabled and the node's region is tracked. The echo push after a
    /// back-navigation restore is suppressed exactly once: if `id` matches
    /// the node most recently popped from history, the marker is consumed
    /// and nothing is pushed.
    pub fn record_focus(&mut self, id: NodeId, route: Option<&str>) {
        let prev = self.current;
        self.current = Some(id);
        self.last_event = Some(match prev {
            Some(from) if from != id => FocusEvent::FocusMoved { from, to: id },
            Some(_) => return,
            None => FocusEvent::FocusGained { id },
        });

        if !self.config.enabled {
            return;
        }
        if self.history.last_popped() == Some(id) {
            self.history.take_last_popped();
            trace!(node = id, "suppressing echo push of restored node");
            return;
        }

        let record = self.registry.get(id);
        let region = record.and_then(|n| n.region.clone());
        if !self.config.tracks(region.as_deref()) {
            return;
        }
        let mut entry = HistoryEntry::new(id);
        entry.region = region;
        entry.route = route.map(str::to_string);
        entry.debug_label = record.and_then(|n| n.debug_label.clone());
        self.history.push(entry);
    }

    /// Host notification: focus left the root entirely.
    pub fn blur(&mut self) -> Option<NodeId> {
        let prev = self.current.take();
        if let Some(id) = prev {
            self.last_event = Some(FocusEvent::FocusLost { id });
        }
        prev
    }

    /// The last focus event.
    #[must_use]
    pub fn focus_event(&self) -> Option<&FocusEvent> {
        self.last_event.as_ref()
    }

    /// Take and clear the last focus event.
    pub fn take_focus_event(&mut self) -> Option<FocusEvent> {
        self.last_event.take()
    }

    // --- Decisions --------------------------------------------------------

    /// Decide the navigation target for a key press from the current focus.
    ///
    /// Pure with respect to geometry: identical snapshots produce identical
    /// results. `None` means the edge of the navigable area; the caller's
    /// default traversal applies.
    pub fn decide(&mut self, direction: Direction) -> Option<NodeId> {
        let current = self.current?;
        self.decide_from(current, direction)
    }

    /// Decide the navigation target from an explicit reference node.
    pub fn decide_from(&mut self, current: NodeId, direction: Direction) -> Option<NodeId> {
        let record = self.registry.get(current)?;
        let bounds = record.bounds;

        let Some(region) = record.region.clone().filter(|_| self.config.enabled) else {
            trace!(
                node = current,
                ?direction,
                enabled = self.config.enabled,
                "no region in play, whole-scene geometric"
            );
            return self.geometric_fallback(current, bounds, direction);
        };

        // Same-region candidates always outrank cross-region rules.
        let same_region = self
            .regions
            .members_of(&region, &self.registry)
            .iter()
            .filter(|n| n.id != current)
            .map(|n| (n.id, n.bounds))
            .collect::<Vec<_>>();
        if let Some(winner) = best_in_direction(bounds, same_region, direction) {
            debug!(node = current, to = winner, region = %region, ?direction, "same-region move");
            return Some(winner);
        }

        let Some(rule) = self.rules.find_rule(&region, direction) else {
            // No rule: the configured default strategy applies. Without a
            // target region only unrestricted geometry is meaningful, so
            // non-geometric defaults degrade to the same fallback.
            trace!(region = %region, ?direction, "no rule matched, default strategy");
            return self.geometric_fallback(current, bounds, direction);
        };

        debug!(
            from = %region,
            to = %rule.to,
            ?direction,
            strategy = ?rule.strategy,
            "cross-region rule"
        );
        match &rule.strategy {
            Strategy::Geometric => self.geometric_fallback(current, bounds, direction),
            Strategy::FixedEntry => self.regions.entry_point_for(&rule.to, &self.registry),
            Strategy::Memory => {
                let registry = &self.registry;
                self.history.remove_stale(|id| registry.is_live(id));
                self.history
                    .last_focus_in_region(&rule.to)
                    .map(|e| e.node)
                    .filter(|id| self.registry.is_live(*id))
                    .or_else(|| self.regions.entry_point_for(&rule.to, &self.registry))
            }
            Strategy::Custom(resolver) => {
                let candidates: Vec<NodeId> = self
                    .regions
                    .members_of(&rule.to, &self.registry)
                    .iter()
                    .map(|n| n.id)
                    .collect();
                let ctx = ResolverContext {
                    current,
                    target_region: &rule.to,
                    direction,
                    candidates: &candidates,
                };
                // Re-validate whatever the resolver returns; a resolver
                // pointing at a dead node is the same as no candidate.
                // Its None propagates with no fallback.
                resolver(&ctx).filter(|id| self.registry.is_live(*id))
            }
        }
    }

    /// Whole-scene geometric scoring over every live node except `current`.
    fn geometric_fallback(
        &self,
        current: NodeId,
        bounds: Rect,
        direction: Direction,
    ) -> Option<NodeId> {
        let candidates = self
            .registry
            .all_live()
            .filter(|n| n.id != current)
            .map(|n| (n.id, n.bounds));
        best_in_direction(bounds, candidates, direction)
    }

    // --- Back-navigation --------------------------------------------------

    /// Pop the history stack and return the node focus should be restored
    /// to, or `None` when no usable history remains.
    ///
    /// The top entry usually references the active node itself (it was
    /// pushed when that node gained focus), so an entry matching the current
    /// focus is discarded and the true previous entry is popped instead.
    /// The caller performs the actual focus request; the resulting focus
    /// notification is absorbed by the echo suppression in
    /// [`Navigator::record_focus`].
    pub fn navigate_back(&mut self) -> Option<NodeId> {
        let registry = &self.registry;
        self.history.remove_stale(|id| registry.is_live(id));

        let mut entry = self.history.pop()?;
        if Some(entry.node) == self.current {
            entry = match self.history.pop() {
                Some(e) => e,
                None => {
                    debug!("history exhausted behind current focus");
                    return None;
                }
            };
        }
        debug!(node = entry.node, region = ?entry.region, "restoring focus from history");
        Some(entry.node)
    }

    // --- Introspection ----------------------------------------------------

    /// Copy of the history stack, oldest first.
    #[must_use]
    pub fn history_snapshot(&self) -> Vec<HistoryEntry> {
        self.history.snapshot()
    }

    /// Live members of a region, in insertion order.
    #[must_use]
    pub fn region_members(&self, region: &str) -> Vec<NodeId> {
        self.regions
            .members_of(region, &self.registry)
            .iter()
            .map(|n| n.id)
            .collect()
    }

    /// The node a region would hand focus to when entered from outside.
    #[must_use]
    pub fn entry_point(&self, region: &str) -> Option<NodeId> {
        self.regions.entry_point_for(region, &self.registry)
    }

    /// Explicit navigation rules in declaration order.
    #[must_use]
    pub fn rules(&self) -> &[NavigationRule] {
        self.rules.rules()
    }

    /// The full explicit + derived rule set.
    #[must_use]
    pub fn expanded_rules(&self) -> Vec<NavigationRule> {
        self.rules.expanded_rules()
    }

    /// Enable or disable cross-region rules at runtime.
    pub fn set_rules_enabled(&mut self, enabled: bool) {
        self.rules.set_enabled(enabled);
    }

    /// Drop all recorded history.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Update history capacity; trims immediately when shrinking.
    pub fn set_max_history(&mut self, max_size: usize) -> Result<(), ConfigError> {
        self.history.set_max_size(max_size)
    }

    /// Purge stale ids from region tables and history. On-demand cost
    /// control; reads stay correct without it.
    pub fn cleanup(&mut self) -> usize {
        let from_regions = self.regions.cleanup(&self.registry);
        let registry = &self.registry;
        let from_history = self.history.remove_stale(|id| registry.is_live(id));
        from_regions + from_history
    }

    /// Access the registry (read-only).
    #[must_use]
    pub fn registry(&self) -> &NodeRegistry {
        &self.registry
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::StrategyKind;
    use std::sync::Arc;

    fn node_at(id: NodeId, x: f64, y: f64, w: f64, h: f64) -> FocusNode {
        FocusNode::new(id, Rect::from_origin_size(x, y, w, h))
    }

    /// Three tabs along the top, two content cells below.
    fn two_region_nav(rules: Vec<NavigationRule>) -> Navigator {
        let mut nav = Navigator::new(NavConfig {
            rules,
            ..NavConfig::default()
        })
        .unwrap();
        nav.register_in_region(node_at(1, 0.0, 0.0, 100.0, 20.0), "tabs", None);
        nav.register_in_region(node_at(2, 100.0, 0.0, 100.0, 20.0), "tabs", None);
        nav.register_in_region(node_at(3, 200.0, 0.0, 100.0, 20.0), "tabs", None);
        nav.register_in_region(node_at(10, 90.0, 50.0, 20.0, 20.0), "content", Some(0));
        nav.register_in_region(node_at(11, 200.0, 50.0, 20.0, 20.0), "content", None);
        nav
    }

    // --- Registration / cascade ---

    #[test]
    fn register_with_region_tag_joins_region() {
        let mut nav = Navigator::with_defaults();
        nav.register_node(node_at(1, 0.0, 0.0, 10.0, 10.0).with_region("tabs"));
        assert_eq!(nav.region_members("tabs"), vec![1]);
    }

    #[test]
    fn reregistering_in_new_region_leaves_old_one() {
        let mut nav = Navigator::with_defaults();
        nav.register_in_region(node_at(1, 0.0, 0.0, 10.0, 10.0), "tabs", None);
        nav.register_in_region(node_at(1, 0.0, 0.0, 10.0, 10.0), "content", None);
        assert!(nav.region_members("tabs").is_empty());
        assert_eq!(nav.region_members("content"), vec![1]);
    }

    #[test]
    fn unregister_cascades_and_clears_current() {
        let mut nav = Navigator::with_defaults();
        nav.register_in_region(node_at(1, 0.0, 0.0, 10.0, 10.0), "tabs", Some(5));
        nav.record_focus(1, None);
        nav.unregister_node(1);
        assert!(nav.region_members("tabs").is_empty());
        assert_eq!(nav.entry_point("tabs"), None);
        assert_eq!(nav.current(), None);
        // Idempotent.
        nav.unregister_node(1);
    }

    #[test]
    fn unregister_leaves_history_stale_not_deleted() {
        let mut nav = Navigator::with_defaults();
        nav.register_in_region(node_at(1, 0.0, 0.0, 10.0, 10.0), "tabs", None);
        nav.register_in_region(node_at(2, 20.0, 0.0, 10.0, 10.0), "tabs", None);
        nav.record_focus(1, None);
        nav.record_focus(2, None);
        nav.unregister_node(1);
        assert_eq!(nav.history_snapshot().len(), 2);
        assert_eq!(nav.cleanup(), 1);
        assert_eq!(nav.history_snapshot().len(), 1);
    }

    // --- decide: same-region precedence ---

    #[test]
    fn same_region_candidate_outranks_rule() {
        // Rule says Right from tabs goes to content, but tab 3 is to the
        // right of tab 2 inside the region — the region wins.
        let mut nav = two_region_nav(vec![NavigationRule::new(
            "tabs",
            "content",
            Direction::Right,
            Strategy::FixedEntry,
        )]);
        nav.record_focus(2, None);
        assert_eq!(nav.decide(Direction::Right), Some(3));
    }

    #[test]
    fn exhausted_region_crosses_boundary() {
        let mut nav = two_region_nav(vec![NavigationRule::new(
            "tabs",
            "content",
            Direction::Down,
            Strategy::FixedEntry,
        )]);
        nav.record_focus(2, None);
        // Nothing below tab 2 inside "tabs" → rule fires.
        assert_eq!(nav.decide(Direction::Down), Some(10));
    }

    #[test]
    fn decide_without_current_returns_none() {
        let mut nav = two_region_nav(Vec::new());
        assert_eq!(nav.decide(Direction::Down), None);
    }

    #[test]
    fn decide_twice_is_deterministic() {
        let mut nav = two_region_nav(Vec::new());
        nav.record_focus(2, None);
        let first = nav.decide(Direction::Down);
        let second = nav.decide(Direction::Down);
        assert_eq!(first, second);
    }

    // --- decide: disabled / regionless ---

    #[test]
    fn disabled_engine_defers_to_whole_scene_geometry() {
        let mut nav = Navigator::new(
            NavConfig::default()
                .with_enabled(false)
                .with_rule(NavigationRule::new(
                    "tabs",
                    "content",
                    Direction::Down,
                    Strategy::FixedEntry,
                )),
        )
        .unwrap();
        nav.register_in_region(node_at(1, 0.0, 0.0, 20.0, 20.0), "tabs", None);
        // Geometrically nearest below is 11, not the entry point 10.
        nav.register_in_region(node_at(10, 300.0, 50.0, 20.0, 20.0), "content", Some(0));
        nav.register_in_region(node_at(11, 0.0, 50.0, 20.0, 20.0), "content", None);
        nav.record_focus(1, None);
        assert_eq!(nav.decide(Direction::Down), Some(11));
    }

    #[test]
    fn regionless_node_uses_whole_scene_geometry() {
        let mut nav = Navigator::with_defaults();
        nav.register_node(node_at(1, 0.0, 0.0, 20.0, 20.0));
        nav.register_node(node_at(2, 0.0, 50.0, 20.0, 20.0));
        nav.record_focus(1, None);
        assert_eq!(nav.decide(Direction::Down), Some(2));
    }

    // --- decide: strategies ---

    #[test]
    fn fixed_entry_ignores_geometric_closeness() {
        let mut nav = two_region_nav(vec![NavigationRule::new(
            "tabs",
            "content",
            Direction::Down,
            Strategy::FixedEntry,
        )]);
        // Tab 3 is directly above content node 11, but the entry point is 10.
        nav.record_focus(3, None);
        assert_eq!(nav.decide(Direction::Down), Some(10));
    }

    #[test]
    fn geometric_strategy_is_unrestricted_whole_scene() {
        let mut nav = two_region_nav(vec![NavigationRule::new(
            "tabs",
            "content",
            Direction::Down,
            Strategy::Geometric,
        )]);
        nav.record_focus(3, None);
        // Whole-scene scoring from tab 3: content node 11 is directly below.
        assert_eq!(nav.decide(Direction::Down), Some(11));
    }

    #[test]
    fn memory_strategy_restores_last_focus_in_target_region() {
        let mut nav = two_region_nav(vec![
            NavigationRule::new("tabs", "content", Direction::Down, Strategy::FixedEntry)
                .bidirectional(),
        ]);
        nav.record_focus(2, None);
        let target = nav.decide(Direction::Down).unwrap();
        assert_eq!(target, 10);
        nav.record_focus(target, None);
        // Mirror rule (content, Up) resolves via memory to tab 2, even
        // though tab 1 is geometrically closest to the entry point.
        assert_eq!(nav.decide(Direction::Up), Some(2));
    }

    #[test]
    fn memory_without_history_behaves_like_fixed_entry() {
        let mut nav = two_region_nav(vec![NavigationRule::new(
            "tabs",
            "content",
            Direction::Down,
            Strategy::Memory,
        )]);
        nav.record_focus(2, None);
        assert_eq!(nav.decide(Direction::Down), Some(10));
    }

    #[test]
    fn memory_skips_stale_entries() {
        let mut nav = two_region_nav(vec![
            NavigationRule::new("tabs", "content", Direction::Down, Strategy::FixedEntry)
                .bidirectional(),
        ]);
        nav.record_focus(2, None); // remembered tabs position
        nav.record_focus(10, None);
        nav.set_focusable(2, false);
        // The memory entry for tab 2 is stale, and tabs has no entry
        // points, so the first live member wins.
        assert_eq!(nav.decide(Direction::Up), Some(1));
    }

    #[test]
    fn custom_resolver_output_is_revalidated() {
        let resolver: crate::rules::Resolver = Arc::new(|_| Some(999));
        let mut nav = two_region_nav(vec![NavigationRule::new(
            "tabs",
            "content",
            Direction::Down,
            Strategy::Custom(resolver),
        )]);
        nav.record_focus(2, None);
        // 999 is not a live node; misconfigured resolver means no candidate.
        assert_eq!(nav.decide(Direction::Down), None);
    }

    #[test]
    fn custom_resolver_none_propagates_without_fallback() {
        let resolver: crate::rules::Resolver = Arc::new(|_| None);
        let mut nav = two_region_nav(vec![NavigationRule::new(
            "tabs",
            "content",
            Direction::Down,
            Strategy::Custom(resolver),
        )]);
        nav.record_focus(2, None);
        assert_eq!(nav.decide(Direction::Down), None);
    }

    #[test]
    fn custom_resolver_sees_target_candidates() {
        let resolver: crate::rules::Resolver = Arc::new(|ctx| ctx.candidates.last().copied());
        let mut nav = two_region_nav(vec![NavigationRule::new(
            "tabs",
            "content",
            Direction::Down,
            Strategy::Custom(resolver),
        )]);
        nav.record_focus(2, None);
        assert_eq!(nav.decide(Direction::Down), Some(11));
    }

    #[test]
    fn rules_disabled_at_runtime_fall_back_to_geometry() {
        let mut nav = two_region_nav(vec![NavigationRule::new(
            "tabs",
            "content",
            Direction::Down,
            Strategy::FixedEntry,
        )]);
        nav.set_rules_enabled(false);
        nav.record_focus(3, None);
        assert_eq!(nav.decide(Direction::Down), Some(11));
    }

    #[test]
    fn edge_of_scene_is_none() {
        let mut nav = two_region_nav(Vec::new());
        nav.record_focus(1, None);
        assert_eq!(nav.decide(Direction::Left), None);
        assert_eq!(nav.decide(Direction::Up), None);
    }

    #[test]
    fn degenerate_current_bounds_yield_none_not_panic() {
        let mut nav = Navigator::with_defaults();
        nav.register_node(node_at(1, 0.0, 0.0, 10.0, 10.0));
        nav.register_node(node_at(2, 0.0, 50.0, 10.0, 10.0));
        nav.update_bounds(1, Rect::default());
        nav.record_focus(1, None);
        assert_eq!(nav.decide(Direction::Down), None);
    }

    // --- record_focus / history / anti-echo ---

    #[test]
    fn record_focus_pushes_history_with_region() {
        let mut nav = two_region_nav(Vec::new());
        nav.record_focus(1, Some("home"));
        let snap = nav.history_snapshot();
        assert_eq!(snap.len(), 1);
        assert_eq!(snap[0].node, 1);
        assert_eq!(snap[0].region.as_deref(), Some("tabs"));
        assert_eq!(snap[0].route.as_deref(), Some("home"));
    }

    #[test]
    fn refocusing_same_node_records_nothing() {
        let mut nav = two_region_nav(Vec::new());
        nav.record_focus(1, None);
        nav.record_focus(1, None);
        assert_eq!(nav.history_snapshot().len(), 1);
        assert_eq!(nav.current(), Some(1));
    }

    #[test]
    fn untracked_region_is_not_recorded() {
        let mut nav = Navigator::new(NavConfig::default().track_region("tabs")).unwrap();
        nav.register_in_region(node_at(1, 0.0, 0.0, 10.0, 10.0), "tabs", None);
        nav.register_in_region(node_at(2, 0.0, 50.0, 10.0, 10.0), "content", None);
        nav.record_focus(1, None);
        nav.record_focus(2, None);
        let snap = nav.history_snapshot();
        assert_eq!(snap.len(), 1);
        assert_eq!(snap[0].node, 1);
        // Focus tracking itself is unaffected by history gating.
        assert_eq!(nav.current(), Some(2));
    }

    #[test]
    fn disabled_engine_records_no_history() {
        let mut nav = Navigator::new(NavConfig::default().with_enabled(false)).unwrap();
        nav.register_node(node_at(1, 0.0, 0.0, 10.0, 10.0));
        nav.record_focus(1, None);
        assert!(nav.history_snapshot().is_empty());
    }

    #[test]
    fn restored_node_does_not_reecho_into_history() {
        let mut nav = two_region_nav(Vec::new());
        nav.record_focus(1, None);
        nav.record_focus(2, None);
        nav.record_focus(3, None);

        let restored = nav.navigate_back().unwrap();
        assert_eq!(restored, 2);
        // Host refocuses the restored node; the notification is absorbed.
        nav.record_focus(restored, None);
        let nodes: Vec<NodeId> = nav.history_snapshot().iter().map(|e| e.node).collect();
        assert_eq!(nodes, vec![1]);
        assert_eq!(nav.current(), Some(2));

        // Suppression is one-shot: focusing 2 again later records normally.
        nav.record_focus(3, None);
        nav.record_focus(2, None);
        let nodes: Vec<NodeId> = nav.history_snapshot().iter().map(|e| e.node).collect();
        assert_eq!(nodes, vec![1, 3, 2]);
    }

    // --- navigate_back ---

    #[test]
    fn back_discards_entry_matching_current() {
        let mut nav = two_region_nav(Vec::new());
        nav.record_focus(1, None);
        nav.record_focus(2, None);
        nav.record_focus(3, None);
        // Stack is [1, 2, 3], current = 3: top matches current, so the
        // true previous entry 2 is restored, leaving [1].
        assert_eq!(nav.navigate_back(), Some(2));
        let nodes: Vec<NodeId> = nav.history_snapshot().iter().map(|e| e.node).collect();
        assert_eq!(nodes, vec![1]);
    }

    #[test]
    fn back_with_empty_history_is_none() {
        let mut nav = two_region_nav(Vec::new());
        assert_eq!(nav.navigate_back(), None);
    }

    #[test]
    fn back_with_only_current_in_history_is_none() {
        let mut nav = two_region_nav(Vec::new());
        nav.record_focus(1, None);
        assert_eq!(nav.navigate_back(), None);
    }

    #[test]
    fn back_skips_stale_entries() {
        let mut nav = two_region_nav(Vec::new());
        nav.record_focus(1, None);
        nav.record_focus(2, None);
        nav.record_focus(3, None);
        nav.set_focusable(2, false);
        // 2 is stale: back from 3 lands on 1.
        assert_eq!(nav.navigate_back(), Some(1));
    }

    // --- Events ---

    #[test]
    fn focus_events_mirror_transitions() {
        let mut nav = two_region_nav(Vec::new());
        nav.record_focus(1, None);
        assert_eq!(
            nav.take_focus_event(),
            Some(FocusEvent::FocusGained { id: 1 })
        );
        nav.record_focus(2, None);
        assert_eq!(
            nav.take_focus_event(),
            Some(FocusEvent::FocusMoved { from: 1, to: 2 })
        );
        nav.blur();
        assert_eq!(nav.take_focus_event(), Some(FocusEvent::FocusLost { id: 2 }));
        assert!(nav.take_focus_event().is_none());
    }

    // --- Config plumbing ---

    #[test]
    fn invalid_config_rejected_at_construction() {
        assert!(Navigator::new(NavConfig::default().with_max_history(0)).is_err());
    }

    #[test]
    fn config_rules_land_in_the_table() {
        let nav = two_region_nav(vec![
            NavigationRule::new("tabs", "content", Direction::Down, Strategy::FixedEntry)
                .bidirectional(),
        ]);
        assert_eq!(nav.rules().len(), 1);
        let expanded = nav.expanded_rules();
        assert_eq!(expanded.len(), 2);
        assert_eq!(expanded[1].strategy.kind(), StrategyKind::Memory);
    }

    #[test]
    fn set_max_history_trims() {
        let mut nav = two_region_nav(Vec::new());
        for id in [1, 2, 3, 10, 11] {
            nav.record_focus(id, None);
        }
        nav.set_max_history(2).unwrap();
        assert_eq!(nav.history_snapshot().len(), 2);
        assert!(nav.set_max_history(0).is_err());
    }

    // --- Isolation ---

    #[test]
    fn independent_roots_share_nothing() {
        let mut a = Navigator::with_defaults();
        let mut b = Navigator::with_defaults();
        a.register_node(node_at(1, 0.0, 0.0, 10.0, 10.0));
        a.record_focus(1, None);
        assert_eq!(b.current(), None);
        assert!(b.history_snapshot().is_empty());
        b.register_node(node_at(1, 0.0, 0.0, 10.0, 10.0));
        b.record_focus(1, None);
        a.unregister_node(1);
        assert!(b.registry().is_live(1));
    }
}
