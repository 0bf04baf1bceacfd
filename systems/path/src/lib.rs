#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Deterministic path system that rasterizes a turn's straight-line travel
//! into grid cells.

use paper_rally_core::{CellCoord, Velocity};

/// Converts velocities into the ordered cells a racer passes through.
#[derive(Clone, Copy, Debug, Default)]
pub struct PathRasterizer;

impl PathRasterizer {
    /// Creates a new rasterizer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Cells visited when travelling `velocity` from `origin`.
    ///
    /// The origin is excluded and the final cell is `origin + velocity`. The
    /// path has exactly `max(|vx|, |vy|)` cells, so a zero velocity yields an
    /// empty path.
    #[must_use]
    pub fn rasterize(&self, origin: CellCoord, velocity: Velocity) -> Vec<CellCoord> {
        self.steps(origin, velocity).collect()
    }

    /// Lazily yields the cells produced by [`PathRasterizer::rasterize`].
    #[must_use]
    pub fn steps(&self, origin: CellCoord, velocity: Velocity) -> Steps {
        Steps::new(origin, velocity)
    }
}

/// Iterator over rasterized path cells.
///
/// Walks the fast axis (larger magnitude, x on ties) one cell per step and
/// takes a diagonal step whenever the accumulated error drops below zero. The
/// error is stored doubled so the initial half-step stays an exact integer.
#[derive(Clone, Debug)]
pub struct Steps {
    position: CellCoord,
    straight: Velocity,
    diagonal: Velocity,
    fine: i64,
    coarse: i64,
    error: i64,
    remaining: u32,
}

impl Steps {
    fn new(origin: CellCoord, velocity: Velocity) -> Self {
        let sign = Velocity::new(velocity.x().signum(), velocity.y().signum());
        let x_magnitude = velocity.x().unsigned_abs();
        let y_magnitude = velocity.y().unsigned_abs();

        let (straight, fine, coarse) = if x_magnitude >= y_magnitude {
            (Velocity::new(sign.x(), 0), x_magnitude, y_magnitude)
        } else {
            (Velocity::new(0, sign.y()), y_magnitude, x_magnitude)
        };

        Self {
            position: origin,
            straight,
            diagonal: sign,
            fine: i64::from(fine),
            coarse: i64::from(coarse),
            error: i64::from(fine),
            remaining: fine,
        }
    }
}

impl Iterator for Steps {
    type Item = CellCoord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        self.error -= 2 * self.coarse;
        let step = if self.error < 0 {
            self.error += 2 * self.fine;
            self.diagonal
        } else {
            self.straight
        };
        self.position = self.position + step;
        Some(self.position)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.remaining).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Steps {}
