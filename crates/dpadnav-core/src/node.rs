#![forbid(unsafe_code)]

//! The focusable-node record model.
//!
//! A [`FocusNode`] is the engine's view of one host widget: stable identity,
//! last-reported geometry, a focusable flag, and at most one region tag. The
//! host owns widget lifetime; the engine only registers and unregisters these
//! records and never constructs or frees the underlying widget.
//!
//! Liveness is explicit: the host flips `focusable` (or unregisters the node)
//! synchronously when a widget is disabled or destroyed. The engine never
//! probes a widget to discover whether it still exists.

use serde::{Deserialize, Serialize};

use crate::geometry::Rect;

/// Unique identifier for a focusable node. Allocated by the host.
pub type NodeId = u64;

/// Name of a logical region ("tabs", "sidebar", "content", ...).
pub type RegionId = String;

/// Opaque route identifier carried on history entries.
pub type RouteId = String;

/// A focusable node record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FocusNode {
    /// Stable identity.
    pub id: NodeId,
    /// Last geometry reported by the host, in the shared coordinate space.
    pub bounds: Rect,
    /// Whether this node can currently receive focus. A node with
    /// `focusable == false` is invisible to navigation.
    pub focusable: bool,
    /// Region membership tag. At most one region at a time.
    pub region: Option<RegionId>,
    /// Diagnostics only; never used for decisions.
    pub debug_label: Option<String>,
}

impl FocusNode {
    /// Create a focusable node record.
    #[must_use]
    pub fn new(id: NodeId, bounds: Rect) -> Self {
        Self {
            id,
            bounds,
            focusable: true,
            region: None,
            debug_label: None,
        }
    }

    /// Builder: set focusable flag.
    #[must_use]
    pub fn with_focusable(mut self, focusable: bool) -> Self {
        self.focusable = focusable;
        self
    }

    /// Builder: set region tag.
    #[must_use]
    pub fn with_region(mut self, region: impl Into<RegionId>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Builder: set debug label.
    #[must_use]
    pub fn with_debug_label(mut self, label: impl Into<String>) -> Self {
        self.debug_label = Some(label.into());
        self
    }
}

// =========================================================================
// Tests
// =========================================================================
