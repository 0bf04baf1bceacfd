//! Loading track definitions from TOML files.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use paper_rally_core::{CellCoord, RaceConfig};
use paper_rally_world::TrackDefinition;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct TrackFile {
    rows: Vec<String>,
    waypoints: String,
    start: CellCoord,
    #[serde(default)]
    race: RaceConfig,
}

/// Reads a track file and returns its definition and race settings.
pub(crate) fn load(path: &Path) -> Result<(TrackDefinition, RaceConfig)> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read track file at {}", path.display()))?;
    parse(&contents).with_context(|| format!("failed to parse track file {}", path.display()))
}

fn parse(contents: &str) -> Result<(TrackDefinition, RaceConfig)> {
    let file: TrackFile = toml::from_str(contents).context("invalid track toml")?;
    let definition = TrackDefinition {
        rows: file.rows,
        waypoints: file.waypoints,
        start: file.start,
    };
    Ok((definition, file.race))
}
