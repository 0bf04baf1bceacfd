//! Plain-text presentation of the race.

use std::collections::HashSet;

use paper_rally_core::{CellCoord, TurnOutcome};
use paper_rally_system_turn::TurnController;
use paper_rally_world::query;

const RACER_GLYPH: char = '@';
const TARGET_GLYPH: char = '+';
const IMPACT_GLYPH: char = 'X';
const WALL_GLYPH: char = '#';
const OPEN_GLYPH: char = '.';

/// Draws the track with the racer, its legal targets and any impact sites.
pub(crate) fn render(controller: &TurnController) -> String {
    let track = query::track(controller.world());
    let racer = controller.racer();
    let targets: HashSet<CellCoord> = controller.legal_targets().into_iter().collect();

    let width = i32::try_from(track.width()).unwrap_or(i32::MAX);
    let height = i32::try_from(track.height()).unwrap_or(i32::MAX);
    let mut board = String::new();
    for y in 0..height {
        for x in 0..width {
            let cell = CellCoord::new(x, y);
            let Ok(contents) = track.cell_at(cell) else {
                continue;
            };
            let glyph = if cell == racer.position {
                RACER_GLYPH
            } else if track.is_impact(cell) {
                IMPACT_GLYPH
            } else if contents.is_wall() {
                WALL_GLYPH
            } else if targets.contains(&cell) {
                TARGET_GLYPH
            } else {
                contents.symbol().unwrap_or(OPEN_GLYPH)
            };
            board.push(glyph);
        }
        board.push('\n');
    }
    board
}

/// One-line summary of the racer and waypoint progress.
pub(crate) fn status(controller: &TurnController) -> String {
    let racer = controller.racer();
    let waypoints = controller.waypoints();
    let next = waypoints
        .expected
        .map_or_else(|| "-".to_owned(), |symbol| symbol.to_string());
    let timing = if controller.config().delayed_acceleration {
        "delayed"
    } else {
        "immediate"
    };
    format!(
        "turn {} | at ({}, {}) | velocity ({}, {}) | damage {} | next waypoint {} ({}/{}) | acceleration {}",
        controller.turn_count(),
        racer.position.x(),
        racer.position.y(),
        racer.velocity.x(),
        racer.velocity.y(),
        racer.damage,
        next,
        waypoints.current_index + 1,
        waypoints.total,
        timing
    )
}

/// Short description of what a turn did.
pub(crate) fn describe(outcome: &TurnOutcome) -> String {
    if !outcome.accepted {
        return "that cell is out of reach this turn".to_owned();
    }
    let mut summary = format!(
        "moved {} of {} cells",
        outcome
            .path
            .iter()
            .position(|cell| Some(*cell) == outcome.impact)
            .unwrap_or(outcome.path.len()),
        outcome.path.len()
    );
    if let Some(impact) = outcome.impact {
        summary.push_str(&format!(", crashed at ({}, {})", impact.x(), impact.y()));
    }
    if outcome.waypoint_advanced {
        summary.push_str(", waypoint passed");
    }
    if outcome.completed {
        summary.push_str(", race complete!");
    }
    summary
}
