//! Mutable per-player state.

use paper_rally_core::{CellCoord, RacerSnapshot, Velocity};

/// Car driven across the track.
///
/// Position only ever changes one cell at a time through [`Racer::drive`], and
/// damage only grows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Racer {
    position: CellCoord,
    velocity: Velocity,
    damage: u32,
}

impl Racer {
    /// Creates a stationary, undamaged racer at the provided cell.
    #[must_use]
    pub const fn at(position: CellCoord) -> Self {
        Self {
            position,
            velocity: Velocity::ZERO,
            damage: 0,
        }
    }

    /// Grid cell currently occupied by the racer.
    #[must_use]
    pub const fn position(&self) -> CellCoord {
        self.position
    }

    /// Current velocity.
    #[must_use]
    pub const fn velocity(&self) -> Velocity {
        self.velocity
    }

    /// Number of wall impacts accumulated so far.
    #[must_use]
    pub const fn damage(&self) -> u32 {
        self.damage
    }

    /// Adds `delta` to the velocity without validation.
    pub fn accelerate(&mut self, delta: Velocity) {
        self.velocity = self.velocity + delta;
    }

    /// Moves to `target` when it is at most one cell away in any direction.
    ///
    /// Any farther target is dropped silently and `false` is returned.
    pub fn drive(&mut self, target: CellCoord) -> bool {
        if self.position.chebyshev_distance(target) > 1 {
            return false;
        }
        self.position = target;
        true
    }

    /// Captures an immutable snapshot of the racer.
    #[must_use]
    pub const fn snapshot(&self) -> RacerSnapshot {
        RacerSnapshot {
            position: self.position,
            velocity: self.velocity,
            damage: self.damage,
        }
    }

    pub(crate) fn take_hit(&mut self) -> u32 {
        self.damage = self.damage.saturating_add(1);
        self.damage
    }

    pub(crate) fn reset(&mut self, start: CellCoord) {
        *self = Self::at(start);
    }
}
