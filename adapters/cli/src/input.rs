//! Parsing of player commands typed at the prompt or passed via `--moves`.

use paper_rally_core::CellCoord;
use thiserror::Error;

/// A single instruction from the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Input {
    /// Select the cell the racer should head for.
    Select(CellCoord),
    /// Restart the race.
    Reset,
    /// Switch delayed acceleration on or off.
    Delayed(bool),
    /// Print the command summary.
    Help,
    /// Leave the game.
    Quit,
}

/// Reasons a line could not be understood.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub(crate) enum InputError {
    #[error("expected `on` or `off` after `delayed`, found `{0}`")]
    InvalidToggle(String),
    #[error("could not read a cell from `{0}`; type `x y` or `x,y`")]
    InvalidCell(String),
}

pub(crate) const HELP: &str = "commands: `x y` or `x,y` selects a cell, `reset`, `delayed on|off`, `help`, `quit`";

/// Parses one line. Blank lines yield `None`.
pub(crate) fn parse(line: &str) -> Result<Option<Input>, InputError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let lowered = line.to_ascii_lowercase();
    let mut words = lowered.split_whitespace();
    let input = match words.next() {
        Some("quit" | "exit" | "q") => Input::Quit,
        Some("reset" | "restart") => Input::Reset,
        Some("help" | "?") => Input::Help,
        Some("delayed") => match words.next() {
            Some("on" | "true") => Input::Delayed(true),
            Some("off" | "false") => Input::Delayed(false),
            other => return Err(InputError::InvalidToggle(other.unwrap_or("").to_owned())),
        },
        _ => Input::Select(parse_cell(line)?),
    };
    Ok(Some(input))
}

/// Splits a `--moves` script such as `"9,10 10,9"` into selections.
pub(crate) fn parse_moves(script: &str) -> Result<Vec<CellCoord>, InputError> {
    script.split_whitespace().map(parse_cell).collect()
}

fn parse_cell(text: &str) -> Result<CellCoord, InputError> {
    let invalid = || InputError::InvalidCell(text.to_owned());
    let mut parts = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty());
    let x = parts.next().ok_or_else(invalid)?;
    let y = parts.next().ok_or_else(invalid)?;
    if parts.next().is_some() {
        return Err(invalid());
    }
    let x = x.parse::<i32>().map_err(|_| invalid())?;
    let y = y.parse::<i32>().map_err(|_| invalid())?;
    Ok(CellCoord::new(x, y))
}
