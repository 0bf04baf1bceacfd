//! Ordered waypoint progression.

use paper_rally_core::WaypointSnapshot;

/// Tracks which waypoint symbol the racer must visit next.
///
/// The index never decreases and stops at the last symbol instead of wrapping,
/// so the final waypoint doubles as the finish line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WaypointTracker {
    order: Vec<char>,
    current: usize,
}

impl WaypointTracker {
    /// Creates a tracker expecting the first symbol of `order`.
    #[must_use]
    pub fn new(order: &[char]) -> Self {
        Self {
            order: order.to_vec(),
            current: 0,
        }
    }

    /// Index of the symbol expected next.
    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.current
    }

    /// Symbol expected next.
    #[must_use]
    pub fn expected(&self) -> Option<char> {
        self.order.get(self.current).copied()
    }

    /// Advances past the expected symbol when `symbol` matches it.
    ///
    /// Returns `true` when the index moved.
    pub fn advance(&mut self, symbol: Option<char>) -> bool {
        let Some(symbol) = symbol else {
            return false;
        };
        if self.expected() == Some(symbol) && self.current < self.last_index() {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Reports whether the race is finished for a racer standing on a cell
    /// carrying `symbol_at_position`.
    #[must_use]
    pub fn is_complete(&self, symbol_at_position: Option<char>) -> bool {
        !self.order.is_empty()
            && self.current == self.last_index()
            && symbol_at_position.is_some()
            && symbol_at_position == self.expected()
    }

    /// Captures an immutable snapshot of the progress.
    #[must_use]
    pub fn snapshot(&self) -> WaypointSnapshot {
        WaypointSnapshot {
            current_index: self.current,
            expected: self.expected(),
            total: self.order.len(),
        }
    }

    pub(crate) fn reset(&mut self) {
        self.current = 0;
    }

    fn last_index(&self) -> usize {
        self.order.len().saturating_sub(1)
    }
}
