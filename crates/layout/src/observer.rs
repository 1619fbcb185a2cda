//! Layout tier tracking across resize notifications.

use crate::tier::LayoutTier;

/// Tracks the active [`LayoutTier`] for a viewport.
///
/// The observer re-classifies on every resize notification and reports
/// whether the tier actually changed, so downstream consumers can treat
/// identical consecutive values as a no-op. Resize events can arrive at high
/// frequency; suppressing redundant work is the consumer's side of the
/// contract, correctness only requires the current tier to be accurate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutObserver {
    tier: LayoutTier,
}

impl LayoutObserver {
    /// Initialize from the viewport width at construction time.
    pub fn new(width: f64) -> Self {
        Self {
            tier: LayoutTier::for_width(width),
        }
    }

    /// The currently active tier.
    pub fn tier(&self) -> LayoutTier {
        self.tier
    }

    /// Handle a resize notification carrying the new viewport width.
    ///
    /// Recomputes unconditionally; returns `true` only when the tier value
    /// changed.
    pub fn on_resize(&mut self, width: f64) -> bool {
        let next = LayoutTier::for_width(width);
        let changed = next != self.tier;
        self.tier = next;
        changed
    }
}
