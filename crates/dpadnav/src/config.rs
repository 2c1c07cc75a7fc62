#![forbid(unsafe_code)]

//! Navigator configuration and validation.
//!
//! Capacity invariants are rejected here, at construction time, so the hot
//! path never re-validates them.

use std::fmt;

use indexmap::IndexSet;

use dpadnav_core::RegionId;

use crate::history::DEFAULT_MAX_SIZE;
use crate::rules::{NavigationRule, Strategy};

/// Configuration error with field context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub field: &'static str,
    pub message: String,
}

impl ConfigError {
    pub(crate) fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }

    pub(crate) fn zero_history() -> Self {
        Self::new("max_history", "history capacity must be greater than 0")
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

/// Construction-time configuration for a [`Navigator`](crate::Navigator).
///
/// [`Strategy::Custom`] carries a resolver closure, so the config is `Clone`
/// but deliberately not serializable.
#[derive(Debug, Clone)]
pub struct NavConfig {
    /// Master switch. When off, every decision defers to whole-scene
    /// geometry and no history is recorded.
    pub enabled: bool,
    /// Focus-history capacity. Must be greater than 0.
    pub max_history: usize,
    /// Regions whose focus events are recorded. Empty means all.
    pub tracked_regions: IndexSet<RegionId>,
    /// Ordered cross-region rules; declaration order is lookup order.
    pub rules: Vec<NavigationRule>,
    /// Strategy applied when no rule matches a cross-region step.
    pub default_strategy: Strategy,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_history: DEFAULT_MAX_SIZE,
            tracked_regions: IndexSet::new(),
            rules: Vec::new(),
            default_strategy: Strategy::Geometric,
        }
    }
}

impl NavConfig {
    /// Default configuration: enabled, 20 history entries, all regions
    /// tracked, no rules, geometric default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: master switch.
    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Builder: history capacity.
    #[must_use]
    pub fn with_max_history(mut self, max_history: usize) -> Self {
        self.max_history = max_history;
        self
    }

    /// Builder: restrict history recording to the named regions.
    #[must_use]
    pub fn track_region(mut self, region: impl Into<RegionId>) -> Self {
        self.tracked_regions.insert(region.into());
        self
    }

    /// Builder: append a navigation rule.
    #[must_use]
    pub fn with_rule(mut self, rule: NavigationRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Builder: strategy used when no rule matches.
    #[must_use]
    pub fn with_default_strategy(mut self, strategy: Strategy) -> Self {
        self.default_strategy = strategy;
        self
    }

    /// Whether focus events in `region` should be recorded.
    #[must_use]
    pub fn tracks(&self, region: Option<&str>) -> bool {
        if self.tracked_regions.is_empty() {
            return true;
        }
        region.is_some_and(|r| self.tracked_regions.contains(r))
    }

    /// Validate capacity invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_history == 0 {
            return Err(ConfigError::zero_history());
        }
        Ok(())
    }
}

// =========================================================================
// Tests
// =========================================================================
