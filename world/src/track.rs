//! Immutable track geometry and waypoint layout.

use std::collections::BTreeSet;

use paper_rally_core::{Cell, CellCoord, Terrain, TrackError};
use serde::{Deserialize, Serialize};

const WALL_GLYPH: char = '#';
const OPEN_GLYPH: char = ' ';

const RALLY_ROWS: [&str; 24] = [
    "#################",
    "####           ##",
    "#  1            #",
    "#  11           #",
    "#   11          #",
    "#    1######    #",
    "#    ########333#",
    "#    ##    ##333#",
    "#   ###4444##   #",
    "#   ##44444##   #",
    "#   ##     ##   #",
    "#   ##     ##   #",
    "#   ###    ##   #",
    "#   ##     ##   #",
    "#   ###    ##   #",
    "#   ####    ##  #",
    "#   ####    ##  #",
    "#    ###    #   #",
    "#          ##   #",
    "#          #    #",
    "##         2    #",
    "##        22    #",
    "###       2    ##",
    "#################",
];
const RALLY_WAYPOINTS: &str = "1234";
const RALLY_START: CellCoord = CellCoord::new(8, 11);

/// Load-time description of a track as supplied by an asset file.
///
/// Every row is a string of equal length where `#` marks a wall, a space marks
/// open tarmac, and any other character marks an open cell carrying that
/// waypoint symbol. `waypoints` lists the symbols in visiting order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackDefinition {
    /// Grid rows from top to bottom.
    pub rows: Vec<String>,
    /// Waypoint symbols in the order they must be visited.
    pub waypoints: String,
    /// Cell the racer occupies when the race starts.
    pub start: CellCoord,
}

impl TrackDefinition {
    /// Built-in circuit shipped with the game.
    #[must_use]
    pub fn rally() -> Self {
        Self {
            rows: RALLY_ROWS.iter().map(|row| (*row).to_owned()).collect(),
            waypoints: RALLY_WAYPOINTS.to_owned(),
            start: RALLY_START,
        }
    }
}

/// Rectangular grid of cells that the racer drives across.
///
/// Terrain never changes once loaded. The only mutable state is the set of
/// impact markers, which adapters use to highlight walls the racer hit.
#[derive(Clone, Debug)]
pub struct Track {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
    waypoints: Vec<char>,
    start: CellCoord,
    impacts: BTreeSet<CellCoord>,
}

impl Track {
    /// Builds a track from its definition, validating the grid shape.
    pub fn load(definition: &TrackDefinition) -> Result<Self, TrackError> {
        let Some(first) = definition.rows.first() else {
            return Err(TrackError::MalformedTrack("track has no rows".to_owned()));
        };
        let row_length = first.chars().count();
        if row_length == 0 {
            return Err(TrackError::MalformedTrack("track rows are empty".to_owned()));
        }

        let mut cells = Vec::with_capacity(row_length * definition.rows.len());
        for (index, row) in definition.rows.iter().enumerate() {
            let length = row.chars().count();
            if length != row_length {
                return Err(TrackError::MalformedTrack(format!(
                    "row {index} has {length} cells, expected {row_length}"
                )));
            }
            cells.extend(row.chars().map(cell_from_glyph));
        }

        let width = u32::try_from(row_length)
            .map_err(|_| TrackError::MalformedTrack("track is too wide".to_owned()))?;
        let height = u32::try_from(definition.rows.len())
            .map_err(|_| TrackError::MalformedTrack("track is too tall".to_owned()))?;

        let waypoints: Vec<char> = definition.waypoints.chars().collect();
        if waypoints.is_empty() {
            return Err(TrackError::MissingWaypoints);
        }
        for symbol in &waypoints {
            if !cells.iter().any(|cell| cell.symbol() == Some(*symbol)) {
                return Err(TrackError::UnknownWaypoint(*symbol));
            }
        }

        let track = Self {
            width,
            height,
            cells,
            waypoints,
            start: definition.start,
            impacts: BTreeSet::new(),
        };

        match track.cell_at(definition.start) {
            Ok(cell) if !cell.is_wall() => Ok(track),
            _ => Err(TrackError::InvalidStart(definition.start)),
        }
    }

    /// Number of columns in the grid.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows in the grid.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Cell the racer occupies at the start of the race.
    #[must_use]
    pub const fn start(&self) -> CellCoord {
        self.start
    }

    /// Waypoint symbols in visiting order.
    #[must_use]
    pub fn waypoints(&self) -> &[char] {
        &self.waypoints
    }

    /// Reports whether the coordinate lies on the grid.
    #[must_use]
    pub fn contains(&self, cell: CellCoord) -> bool {
        self.index(cell).is_some()
    }

    /// Looks up the contents of a cell.
    pub fn cell_at(&self, cell: CellCoord) -> Result<Cell, TrackError> {
        self.index(cell)
            .and_then(|index| self.cells.get(index).copied())
            .ok_or(TrackError::OutOfBounds {
                cell,
                width: self.width,
                height: self.height,
            })
    }

    /// Waypoint symbol painted on the cell, `None` for plain or off-grid cells.
    #[must_use]
    pub fn symbol_at(&self, cell: CellCoord) -> Option<char> {
        self.cell_at(cell).ok().and_then(|cell| cell.symbol())
    }

    /// Marks a cell as the site of an impact. Off-grid cells are ignored.
    pub fn mark_impact(&mut self, cell: CellCoord) -> bool {
        if self.contains(cell) {
            self.impacts.insert(cell)
        } else {
            false
        }
    }

    /// Reports whether the cell carries an impact marker.
    #[must_use]
    pub fn is_impact(&self, cell: CellCoord) -> bool {
        self.impacts.contains(&cell)
    }

    /// Impact markers ordered by column, then by row within a column.
    pub fn impacts(&self) -> impl Iterator<Item = CellCoord> + '_ {
        self.impacts.iter().copied()
    }

    /// Removes every impact marker.
    pub fn clear_impacts(&mut self) {
        self.impacts.clear();
    }

    fn index(&self, cell: CellCoord) -> Option<usize> {
        let column = u32::try_from(cell.x()).ok()?;
        let row = u32::try_from(cell.y()).ok()?;
        if column < self.width && row < self.height {
            let width = usize::try_from(self.width).ok()?;
            let row = usize::try_from(row).ok()?;
            let column = usize::try_from(column).ok()?;
            Some(row * width + column)
        } else {
            None
        }
    }
}

fn cell_from_glyph(glyph: char) -> Cell {
    match glyph {
        WALL_GLYPH => Cell::new(Terrain::Wall, None),
        OPEN_GLYPH => Cell::new(Terrain::Open, None),
        symbol => Cell::new(Terrain::Open, Some(symbol)),
    }
}
