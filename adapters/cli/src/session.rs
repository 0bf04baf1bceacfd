//! Drives a race from a line-oriented input stream.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use paper_rally_core::{CellCoord, RaceConfig};
use paper_rally_system_turn::TurnController;

use crate::{
    board,
    input::{self, Input, HELP},
};

/// Reads commands until the input ends or the player quits.
pub(crate) fn run_interactive<R, W>(
    controller: &mut TurnController,
    reader: R,
    output: &mut W,
) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    print_state(controller, output)?;
    writeln!(output, "{HELP}")?;

    for line in reader.lines() {
        let line = line.context("failed to read from stdin")?;
        match input::parse(&line) {
            Ok(None) => continue,
            Ok(Some(Input::Quit)) => break,
            Ok(Some(Input::Help)) => writeln!(output, "{HELP}")?,
            Ok(Some(Input::Reset)) => {
                controller.reset();
                writeln!(output, "race restarted")?;
                print_state(controller, output)?;
            }
            Ok(Some(Input::Delayed(enabled))) => {
                controller.set_config(RaceConfig {
                    delayed_acceleration: enabled,
                });
                writeln!(output, "{}", board::status(controller))?;
            }
            Ok(Some(Input::Select(cell))) => {
                if play_turn(controller, cell, output)? {
                    break;
                }
            }
            Err(error) => writeln!(output, "{error}")?,
        }
    }

    Ok(())
}

/// Plays a fixed list of selections, stopping early when the race completes.
pub(crate) fn run_script<W: Write>(
    controller: &mut TurnController,
    moves: &[CellCoord],
    output: &mut W,
) -> Result<()> {
    print_state(controller, output)?;
    for cell in moves {
        writeln!(output, "> {} {}", cell.x(), cell.y())?;
        if play_turn(controller, *cell, output)? {
            break;
        }
    }
    Ok(())
}

fn play_turn<W: Write>(
    controller: &mut TurnController,
    cell: CellCoord,
    output: &mut W,
) -> Result<bool> {
    let outcome = controller.handle_selection(cell);
    writeln!(output, "{}", board::describe(&outcome))?;
    if outcome.accepted {
        print_state(controller, output)?;
    }
    if outcome.completed {
        writeln!(
            output,
            "finished in {} turns with {} damage",
            controller.turn_count(),
            controller.racer().damage
        )?;
    }
    Ok(outcome.completed)
}

fn print_state<W: Write>(controller: &TurnController, output: &mut W) -> Result<()> {
    write!(output, "{}", board::render(controller))?;
    writeln!(output, "{}", board::status(controller))?;
    Ok(())
}
