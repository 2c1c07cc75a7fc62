#![forbid(unsafe_code)]

//! Bounded focus-history stack.
//!
//! LIFO access from the top, FIFO eviction from the bottom when capacity is
//! exceeded. Backs the `Memory` cross-region strategy and back-navigation.
//!
//! # Invariants
//!
//! 1. No two consecutive entries reference the same node: pushing the node
//!    already on top is a no-op.
//! 2. `len() <= max_size()` at all times; shrinking the capacity evicts from
//!    the bottom immediately.
//! 3. Entries referencing dead nodes are merely stale: they are skipped at
//!    read time and purged only by [`FocusHistory::remove_stale`].
//! 4. `pop` records the popped entry as `last_popped`, consumed exactly once
//!    by the caller to suppress the echo push when the restored node re-fires
//!    its focus notification.

use std::collections::VecDeque;
use std::time::Instant;

use dpadnav_core::{NodeId, RegionId, RouteId};

use crate::config::ConfigError;

/// Default history capacity.
pub const DEFAULT_MAX_SIZE: usize = 20;

/// One recorded focus event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// The node that held focus.
    pub node: NodeId,
    /// Region of the node at push time, if any.
    pub region: Option<RegionId>,
    /// Caller-supplied route tag, opaque to the stack.
    pub route: Option<RouteId>,
    /// When the entry was pushed.
    pub at: Instant,
    /// Diagnostics only.
    pub debug_label: Option<String>,
}

impl HistoryEntry {
    /// Create an entry stamped now.
    #[must_use]
    pub fn new(node: NodeId) -> Self {
        Self {
            node,
            region: None,
            route: None,
            at: Instant::now(),
            debug_label: None,
        }
    }

    /// Builder: set region tag.
    #[must_use]
    pub fn with_region(mut self, region: impl Into<RegionId>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Builder: set route tag.
    #[must_use]
    pub fn with_route(mut self, route: impl Into<RouteId>) -> Self {
        self.route = Some(route.into());
        self
    }

    /// Builder: set debug label.
    #[must_use]
    pub fn with_debug_label(mut self, label: impl Into<String>) -> Self {
        self.debug_label = Some(label.into());
        self
    }
}

/// Bounded stack of focus events.
///
/// Bottom of the stack is index 0 (oldest); the top is the most recent.
#[derive(Debug, Clone)]
pub struct FocusHistory {
    entries: VecDeque<HistoryEntry>,
    max_size: usize,
    last_popped: Option<NodeId>,
}

impl Default for FocusHistory {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SIZE).expect("default capacity is valid")
    }
}

impl FocusHistory {
    /// Create a history stack with the given capacity.
    ///
    /// A zero capacity is a configuration error: it would make every push a
    /// silent drop.
    pub fn new(max_size: usize) -> Result<Self, ConfigError> {
        if max_size == 0 {
            return Err(ConfigError::zero_history());
        }
        Ok(Self {
            entries: VecDeque::with_capacity(max_size),
            max_size,
            last_popped: None,
        })
    }

    /// Push an entry.
    ///
    /// No-op if the top entry already references the same node. Evicts the
    /// oldest entry when the stack would exceed capacity. Any distinct push
    /// clears the pending `last_popped` marker.
    pub fn push(&mut self, entry: HistoryEntry) {
        if self.peek_current().is_some_and(|top| top.node == entry.node) {
            return;
        }
        self.last_popped = None;
        if self.entries.len() >= self.max_size {
            let evicted = self.entries.pop_front();
            if let Some(e) = evicted {
                tracing::trace!(node = e.node, "history capacity reached, evicting oldest");
            }
        }
        self.entries.push_back(entry);
    }

    /// Remove and return the top entry, recording it as `last_popped`.
    pub fn pop(&mut self) -> Option<HistoryEntry> {
        let entry = self.entries.pop_back()?;
        self.last_popped = Some(entry.node);
        Some(entry)
    }

    /// The top entry.
    #[must_use]
    pub fn peek_current(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    /// The second-from-top entry.
    #[must_use]
    pub fn peek_previous(&self) -> Option<&HistoryEntry> {
        self.entries.len().checked_sub(2).and_then(|i| self.entries.get(i))
    }

    /// Most recent entry whose region matches, scanning top to bottom.
    #[must_use]
    pub fn last_focus_in_region(&self, region: &str) -> Option<&HistoryEntry> {
        self.entries
            .iter()
            .rev()
            .find(|e| e.region.as_deref() == Some(region))
    }

    /// Most recent entry whose route matches, scanning top to bottom.
    #[must_use]
    pub fn last_focus_in_route(&self, route: &str) -> Option<&HistoryEntry> {
        self.entries
            .iter()
            .rev()
            .find(|e| e.route.as_deref() == Some(route))
    }

    /// Drop entries whose node is no longer live. Returns the count removed.
    ///
    /// Must run before any memory-strategy lookup and before a
    /// back-navigation pop, so dead references are never resurrected.
    pub fn remove_stale(&mut self, is_live: impl Fn(NodeId) -> bool) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| is_live(e.node));
        before - self.entries.len()
    }

    /// Update capacity; trims from the bottom immediately if over.
    pub fn set_max_size(&mut self, max_size: usize) -> Result<(), ConfigError> {
        if max_size == 0 {
            return Err(ConfigError::zero_history());
        }
        self.max_size = max_size;
        while self.entries.len() > self.max_size {
            self.entries.pop_front();
        }
        Ok(())
    }

    /// Current capacity.
    #[must_use]
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// The node most recently returned by [`FocusHistory::pop`], if no
    /// distinct push has happened since.
    #[must_use]
    pub fn last_popped(&self) -> Option<NodeId> {
        self.last_popped
    }

    /// Consume the `last_popped` marker.
    pub fn take_last_popped(&mut self) -> Option<NodeId> {
        self.last_popped.take()
    }

    /// Copy of the stack, bottom (oldest) to top (newest).
    #[must_use]
    pub fn snapshot(&self) -> Vec<HistoryEntry> {
        self.entries.iter().cloned().collect()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the stack is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.last_popped = None;
    }
}

// =========================================================================
// Tests
// =========================================================================
