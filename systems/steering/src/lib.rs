#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure steering system that checks cell selections against the acceleration
//! envelope.

use paper_rally_core::{CellCoord, IllegalMove, RacerSnapshot, Velocity};

/// Largest change per axis a racer may apply in one turn.
pub const MAX_ACCELERATION: i32 = 1;

/// Validates selected cells and derives the acceleration they imply.
#[derive(Clone, Copy, Debug, Default)]
pub struct MoveValidator;

impl MoveValidator {
    /// Creates a new validator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Returns the acceleration that makes the racer land on `target`.
    ///
    /// The legal targets form the 3x3 block of cells centred on the coasting
    /// position `position + velocity`. Any other cell is rejected.
    pub fn validate(&self, racer: &RacerSnapshot, target: CellCoord) -> Result<Velocity, IllegalMove> {
        let coasting = racer.coasting_position();
        if coasting.chebyshev_distance(target) > MAX_ACCELERATION.unsigned_abs() {
            return Err(IllegalMove { target, coasting });
        }
        Ok(target - racer.position - racer.velocity)
    }

    /// Enumerates the legal targets in row-major order.
    #[must_use]
    pub fn envelope(&self, racer: &RacerSnapshot) -> Vec<CellCoord> {
        let coasting = racer.coasting_position();
        let mut cells = Vec::with_capacity(9);
        for dy in -MAX_ACCELERATION..=MAX_ACCELERATION {
            for dx in -MAX_ACCELERATION..=MAX_ACCELERATION {
                cells.push(coasting + Velocity::new(dx, dy));
            }
        }
        cells
    }

    /// Reports whether `target` lies inside the envelope.
    #[must_use]
    pub fn is_legal(&self, racer: &RacerSnapshot, target: CellCoord) -> bool {
        self.validate(racer, target).is_ok()
    }
}
