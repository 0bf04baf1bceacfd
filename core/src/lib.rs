#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Paper Rally engine.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative world, and pure systems. The turn controller submits
//! [`Command`] values describing desired mutations, the world executes those
//! commands via its `apply` entry point, and then reports [`Event`] values
//! that the controller folds into a [`TurnOutcome`]. Systems only ever see
//! immutable snapshots such as [`RacerSnapshot`].

use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Canonical banner emitted when the experience boots.
pub const WELCOME_BANNER: &str = "Welcome to Paper Rally.";

/// Location of a single grid cell expressed as column and row coordinates.
///
/// Coordinates are signed so that coasting positions and rasterized paths may
/// leave the grid without wrapping; the track decides what lies outside.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoord {
    x: i32,
    y: i32,
}

impl CellCoord {
    /// Creates a new grid cell coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Zero-based column index of the cell.
    #[must_use]
    pub const fn x(&self) -> i32 {
        self.x
    }

    /// Zero-based row index of the cell.
    #[must_use]
    pub const fn y(&self) -> i32 {
        self.y
    }

    /// Computes the Chebyshev (king move) distance between two cells.
    #[must_use]
    pub fn chebyshev_distance(self, other: CellCoord) -> u32 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }
}

impl Add<Velocity> for CellCoord {
    type Output = CellCoord;

    fn add(self, offset: Velocity) -> Self::Output {
        CellCoord::new(self.x + offset.x, self.y + offset.y)
    }
}

impl Sub for CellCoord {
    type Output = Velocity;

    fn sub(self, origin: CellCoord) -> Self::Output {
        Velocity::new(self.x - origin.x, self.y - origin.y)
    }
}

/// Integer displacement per turn. Accelerations share the same representation.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Velocity {
    x: i32,
    y: i32,
}

impl Velocity {
    /// Velocity of a racer standing still.
    pub const ZERO: Velocity = Velocity::new(0, 0);

    /// Creates a new velocity vector.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Horizontal component, positive towards increasing columns.
    #[must_use]
    pub const fn x(&self) -> i32 {
        self.x
    }

    /// Vertical component, positive towards increasing rows.
    #[must_use]
    pub const fn y(&self) -> i32 {
        self.y
    }

    /// Reports whether both components are zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.x == 0 && self.y == 0
    }
}

impl Add for Velocity {
    type Output = Velocity;

    fn add(self, delta: Velocity) -> Self::Output {
        Velocity::new(self.x + delta.x, self.y + delta.y)
    }
}

impl Sub for Velocity {
    type Output = Velocity;

    fn sub(self, other: Velocity) -> Self::Output {
        Velocity::new(self.x - other.x, self.y - other.y)
    }
}

/// Terrain kinds a track cell can carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Terrain {
    /// Drivable tarmac.
    Open,
    /// Barrier that halts the racer and inflicts damage.
    Wall,
}

/// Contents of a single track cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    terrain: Terrain,
    symbol: Option<char>,
}

impl Cell {
    /// Creates a cell with the provided terrain and optional waypoint symbol.
    #[must_use]
    pub const fn new(terrain: Terrain, symbol: Option<char>) -> Self {
        Self { terrain, symbol }
    }

    /// Terrain that occupies the cell.
    #[must_use]
    pub const fn terrain(&self) -> Terrain {
        self.terrain
    }

    /// Waypoint symbol painted on the cell, if any.
    #[must_use]
    pub const fn symbol(&self) -> Option<char> {
        self.symbol
    }

    /// Reports whether the cell is a wall.
    #[must_use]
    pub fn is_wall(&self) -> bool {
        self.terrain == Terrain::Wall
    }
}

/// Settings read by the turn controller at the start of every turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaceConfig {
    /// Applies the turn's acceleration after movement instead of before it.
    ///
    /// When enabled the path travelled this turn uses the previous velocity
    /// and the new velocity only takes effect on the following turn.
    #[serde(default)]
    pub delayed_acceleration: bool,
}

/// Commands that express all permissible world mutations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Adds the provided delta to the racer's velocity.
    Accelerate {
        /// Change applied to each velocity component.
        delta: Velocity,
    },
    /// Drives the racer along a rasterized path until it ends or hits a wall.
    FollowPath {
        /// Cells to traverse, excluding the racer's current cell.
        path: Vec<CellCoord>,
    },
    /// Restores the racer and waypoint progress to the start of the race.
    ResetRace,
}

/// Events reported by the world after processing commands.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// Confirms that the racer's velocity changed.
    RacerAccelerated {
        /// Velocity before the change.
        from: Velocity,
        /// Velocity after the change.
        to: Velocity,
    },
    /// Confirms that the racer advanced a single cell.
    RacerMoved {
        /// Cell the racer occupied before moving.
        from: CellCoord,
        /// Cell the racer occupies after moving.
        to: CellCoord,
    },
    /// Announces that the racer passed the waypoint it was expected to visit.
    WaypointAdvanced {
        /// Symbol of the waypoint that was passed.
        symbol: char,
        /// Index of the waypoint expected next.
        next_index: usize,
    },
    /// Reports that the racer hit a wall or the edge of the grid.
    WallHit {
        /// First blocked cell along the path.
        cell: CellCoord,
        /// Total damage after the impact.
        damage: u32,
    },
    /// Confirms that the race was restarted.
    RaceReset {
        /// Cell the racer was placed on.
        start: CellCoord,
    },
}

/// Immutable representation of the racer's state used for queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RacerSnapshot {
    /// Grid cell currently occupied by the racer.
    pub position: CellCoord,
    /// Velocity that will be travelled with zero acceleration.
    pub velocity: Velocity,
    /// Number of wall impacts accumulated so far.
    pub damage: u32,
}

impl RacerSnapshot {
    /// Cell the racer reaches next turn when it neither accelerates nor brakes.
    #[must_use]
    pub fn coasting_position(&self) -> CellCoord {
        self.position + self.velocity
    }
}

/// Read-only view of the waypoint progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WaypointSnapshot {
    /// Index into the waypoint order of the symbol expected next.
    pub current_index: usize,
    /// Symbol expected next, absent when the order is empty.
    pub expected: Option<char>,
    /// Number of symbols in the waypoint order.
    pub total: usize,
}

/// Result of resolving a single cell selection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOutcome {
    /// Whether the selection was inside the legal envelope.
    pub accepted: bool,
    /// Racer position once the turn finished.
    pub final_position: CellCoord,
    /// Rasterized path the racer attempted to travel.
    pub path: Vec<CellCoord>,
    /// Whether the racer hit a wall along the path.
    pub collided: bool,
    /// Damage inflicted during the turn, either zero or one.
    pub damage_delta: u32,
    /// Whether at least one waypoint was passed during the turn.
    pub waypoint_advanced: bool,
    /// First blocked cell along the path, if any.
    pub impact: Option<CellCoord>,
    /// Acceleration derived from the selection.
    pub acceleration: Option<Velocity>,
    /// Whether the race is complete after the turn.
    pub completed: bool,
}

impl TurnOutcome {
    /// Outcome of a selection outside the legal envelope: nothing happened.
    ///
    /// `completed` still reflects the race, which may already be over.
    #[must_use]
    pub fn rejected(position: CellCoord, completed: bool) -> Self {
        Self {
            accepted: false,
            final_position: position,
            path: Vec::new(),
            collided: false,
            damage_delta: 0,
            waypoint_advanced: false,
            impact: None,
            acceleration: None,
            completed,
        }
    }
}

/// Reasons a track may fail to load or be queried.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TrackError {
    /// The requested coordinate lies outside the grid.
    #[error("cell ({}, {}) lies outside the {width}x{height} track", .cell.x(), .cell.y())]
    OutOfBounds {
        /// Coordinate that was requested.
        cell: CellCoord,
        /// Number of columns in the grid.
        width: u32,
        /// Number of rows in the grid.
        height: u32,
    },
    /// The row list was empty or its rows differ in length.
    #[error("malformed track: {0}")]
    MalformedTrack(String),
    /// The waypoint order was empty.
    #[error("track defines no waypoints")]
    MissingWaypoints,
    /// The waypoint order names a symbol that no cell carries.
    #[error("waypoint '{0}' does not appear on the track")]
    UnknownWaypoint(char),
    /// The start cell is off the grid or on a wall.
    #[error("start cell ({}, {}) is not an open cell", .0.x(), .0.y())]
    InvalidStart(CellCoord),
}

/// Rejection raised when a selected cell lies outside the legal 3x3 envelope.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("cell ({}, {}) is not reachable from coasting position ({}, {})", .target.x(), .target.y(), .coasting.x(), .coasting.y())]
pub struct IllegalMove {
    /// Cell the player selected.
    pub target: CellCoord,
    /// Centre of the legal envelope.
    pub coasting: CellCoord,
}

#[cfg(test)]
mod tests {
    use super::{CellCoord, Event, RaceConfig, RacerSnapshot, TurnOutcome, Velocity};
    use serde::{de::DeserializeOwned, Serialize};

    fn assert_round_trip<T>(value: &T)
    where
        T: Serialize + DeserializeOwned + PartialEq + std::fmt::Debug,
    {
        let bytes = bincode::serialize(value).expect("serialize");
        let restored: T = bincode::deserialize(&bytes).expect("deserialize");
        assert_eq!(&restored, value);
    }

    #[test]
    fn chebyshev_distance_uses_larger_axis() {
        let origin = CellCoord::new(1, 1);
        assert_eq!(origin.chebyshev_distance(CellCoord::new(4, 3)), 3);
        assert_eq!(origin.chebyshev_distance(CellCoord::new(0, 0)), 1);
        assert_eq!(origin.chebyshev_distance(origin), 0);
    }

    #[test]
    fn coordinate_arithmetic_produces_displacements() {
        let from = CellCoord::new(8, 11);
        let to = CellCoord::new(9, 10);
        assert_eq!(to - from, Velocity::new(1, -1));
        assert_eq!(from + Velocity::new(1, -1), to);
        assert_eq!(Velocity::new(2, 3) + Velocity::new(-1, -1), Velocity::new(1, 2));
    }

    #[test]
    fn coasting_position_adds_velocity() {
        let snapshot = RacerSnapshot {
            position: CellCoord::new(3, 4),
            velocity: Velocity::new(-2, 1),
            damage: 0,
        };
        assert_eq!(snapshot.coasting_position(), CellCoord::new(1, 5));
    }

    #[test]
    fn race_config_defaults_to_immediate_acceleration() {
        assert!(!RaceConfig::default().delayed_acceleration);
    }

    #[test]
    fn turn_outcome_survives_bincode() {
        let outcome = TurnOutcome {
            accepted: true,
            final_position: CellCoord::new(2, 0),
            path: vec![CellCoord::new(1, 0), CellCoord::new(2, 0), CellCoord::new(3, 0)],
            collided: true,
            damage_delta: 1,
            waypoint_advanced: false,
            impact: Some(CellCoord::new(3, 0)),
            acceleration: Some(Velocity::new(1, 0)),
            completed: false,
        };
        assert_round_trip(&outcome);
        assert_round_trip(&Event::WallHit {
            cell: CellCoord::new(3, 0),
            damage: 1,
        });
    }

    #[test]
    fn rejected_outcome_reports_no_movement() {
        let outcome = TurnOutcome::rejected(CellCoord::new(5, 5), false);
        assert!(!outcome.accepted);
        assert!(!outcome.completed);
        assert!(outcome.path.is_empty());
        assert_eq!(outcome.final_position, CellCoord::new(5, 5));
        assert_eq!(outcome.damage_delta, 0);
    }
}
