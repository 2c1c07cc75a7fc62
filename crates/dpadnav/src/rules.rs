#![forbid(unsafe_code)]

//! Cross-region navigation rules.
//!
//! A rule says: when focus leaves region `from` in `direction`, resolve the
//! target inside region `to` using a [`Strategy`]. Rules are consulted only
//! after within-region scoring has found nothing.
//!
//! # Invariants
//!
//! 1. Lookup is first-match-wins over explicit rules in declaration order,
//!    then over derived mirror rules in the declaration order of their
//!    originating rule.
//! 2. A bidirectional rule derives exactly one mirror:
//!    `(to, from, opposite(direction))` with the reverse strategy, defaulting
//!    to [`Strategy::Memory`].
//! 3. A disabled table never matches.

use std::fmt;
use std::sync::Arc;

use dpadnav_core::{Direction, NodeId, RegionId};

/// Context handed to a custom resolver.
#[derive(Debug)]
pub struct ResolverContext<'a> {
    /// The node currently holding focus.
    pub current: NodeId,
    /// The region the rule transitions into.
    pub target_region: &'a str,
    /// The requested navigation direction.
    pub direction: Direction,
    /// Live members of the target region, in insertion order.
    pub candidates: &'a [NodeId],
}

/// A custom resolver: pure, re-entrant, invoked on every matching key press.
pub type Resolver = Arc<dyn Fn(&ResolverContext<'_>) -> Option<NodeId> + Send + Sync>;

/// How a cross-region transition picks its target node.
#[derive(Clone)]
pub enum Strategy {
    /// Defer to unrestricted whole-scene geometric scoring (not constrained
    /// to the target region).
    Geometric,
    /// Focus the target region's entry point.
    FixedEntry,
    /// Focus the most recently focused node of the target region, falling
    /// back to its entry point when no history exists.
    Memory,
    /// Delegate to caller code. Whatever it returns propagates, including
    /// `None` — no implicit fallback.
    Custom(Resolver),
}

impl Strategy {
    /// Discriminant for comparisons and introspection; resolvers themselves
    /// are not comparable.
    #[must_use]
    pub fn kind(&self) -> StrategyKind {
        match self {
            Strategy::Geometric => StrategyKind::Geometric,
            Strategy::FixedEntry => StrategyKind::FixedEntry,
            Strategy::Memory => StrategyKind::Memory,
            Strategy::Custom(_) => StrategyKind::Custom,
        }
    }
}

impl fmt::Debug for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Geometric => f.write_str("Geometric"),
            Strategy::FixedEntry => f.write_str("FixedEntry"),
            Strategy::Memory => f.write_str("Memory"),
            Strategy::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Strategy discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    Geometric,
    FixedEntry,
    Memory,
    Custom,
}

/// One cross-region transition rule.
#[derive(Debug, Clone)]
pub struct NavigationRule {
    /// Region the transition leaves.
    pub from: RegionId,
    /// Region the transition enters.
    pub to: RegionId,
    /// Direction that triggers the rule.
    pub direction: Direction,
    /// How the target node is resolved.
    pub strategy: Strategy,
    /// Whether a mirror rule is derived for the opposite direction.
    pub bidirectional: bool,
    /// Strategy of the derived mirror rule; `Memory` when unset.
    pub reverse_strategy: Option<Strategy>,
}

impl NavigationRule {
    /// Create a rule.
    #[must_use]
    pub fn new(
        from: impl Into<RegionId>,
        to: impl Into<RegionId>,
        direction: Direction,
        strategy: Strategy,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            direction,
            strategy,
            bidirectional: false,
            reverse_strategy: None,
        }
    }

    /// Builder: derive a mirror rule for the opposite direction.
    #[must_use]
    pub fn bidirectional(mut self) -> Self {
        self.bidirectional = true;
        self
    }

    /// Builder: strategy for the derived mirror rule.
    #[must_use]
    pub fn with_reverse_strategy(mut self, strategy: Strategy) -> Self {
        self.reverse_strategy = Some(strategy);
        self
    }

    /// The implicit mirror of a bidirectional rule, or `None`.
    #[must_use]
    pub fn mirror(&self) -> Option<NavigationRule> {
        if !self.bidirectional {
            return None;
        }
        Some(NavigationRule {
            from: self.to.clone(),
            to: self.from.clone(),
            direction: self.direction.opposite(),
            strategy: self
                .reverse_strategy
                .clone()
                .unwrap_or(Strategy::Memory),
            bidirectional: false,
            reverse_strategy: None,
        })
    }

    fn matches(&self, from: &str, direction: Direction) -> bool {
        self.from == from && self.direction == direction
    }
}

/// Ordered rule list with first-match-wins lookup.
#[derive(Debug, Default, Clone)]
pub struct RuleTable {
    rules: Vec<NavigationRule>,
    enabled: bool,
}

impl RuleTable {
    /// Create an empty, enabled table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            enabled: true,
        }
    }

    /// Create a table from an ordered rule list.
    #[must_use]
    pub fn with_rules(rules: Vec<NavigationRule>) -> Self {
        Self {
            rules,
            enabled: true,
        }
    }

    /// Append a rule. Declaration order is lookup order.
    pub fn add(&mut self, rule: NavigationRule) {
        self.rules.push(rule);
    }

    /// Enable or disable the whole table. Disabled tables never match.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Whether the table is enabled.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Find the rule governing a `(from, direction)` transition.
    ///
    /// Explicit rules first in declaration order, then derived mirrors in the
    /// declaration order of their originating rule. At most one rule applies.
    #[must_use]
    pub fn find_rule(&self, from: &str, direction: Direction) -> Option<NavigationRule> {
        if !self.enabled {
            return None;
        }
        if let Some(rule) = self.rules.iter().find(|r| r.matches(from, direction)) {
            return Some(rule.clone());
        }
        self.rules
            .iter()
            .filter_map(NavigationRule::mirror)
            .find(|r| r.matches(from, direction))
    }

    /// Explicit rules in declaration order.
    #[must_use]
    pub fn rules(&self) -> &[NavigationRule] {
        &self.rules
    }

    /// The full explicit + derived rule set, for introspection and tests.
    #[must_use]
    pub fn expanded_rules(&self) -> Vec<NavigationRule> {
        let mut out = self.rules.clone();
        out.extend(self.rules.iter().filter_map(NavigationRule::mirror));
        out
    }
}

// =========================================================================
// Tests
// =========================================================================
