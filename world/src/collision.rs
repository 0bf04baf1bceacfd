//! Walks a rasterized path against the track, committing movement cell by cell.

use paper_rally_core::{CellCoord, Event};

use crate::{Racer, Track, WaypointTracker};

/// Drives `racer` along `path` until the path ends or a blocked cell is met.
///
/// Returns the blocked cell, if any. Cells off the grid block movement like
/// walls but are not marked as impact sites. The blocked cell and everything
/// after it are never driven onto. Every other outcome of the walk is reported
/// through `out_events`.
pub fn resolve_path(
    track: &mut Track,
    racer: &mut Racer,
    waypoints: &mut WaypointTracker,
    path: &[CellCoord],
    out_events: &mut Vec<Event>,
) -> Option<CellCoord> {
    for &cell in path {
        let blocked = track.cell_at(cell).map_or(true, |contents| contents.is_wall());
        if blocked {
            let _ = track.mark_impact(cell);
            let damage = racer.take_hit();
            log::info!(
                "racer hit the wall at ({}, {}), damage now {damage}",
                cell.x(),
                cell.y()
            );
            out_events.push(Event::WallHit { cell, damage });
            return Some(cell);
        }

        let from = racer.position();
        if racer.drive(cell) {
            out_events.push(Event::RacerMoved { from, to: cell });
        } else {
            log::trace!(
                "dropped non-adjacent path cell ({}, {}) from ({}, {})",
                cell.x(),
                cell.y(),
                from.x(),
                from.y()
            );
        }

        let symbol = track.symbol_at(cell);
        if waypoints.advance(symbol) {
            if let Some(symbol) = symbol {
                log::debug!(
                    "passed waypoint '{symbol}', next index {}",
                    waypoints.current_index()
                );
                out_events.push(Event::WaypointAdvanced {
                    symbol,
                    next_index: waypoints.current_index(),
                });
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TrackDefinition;

    fn straight_track(row: &str, waypoints: &str) -> Track {
        Track::load(&TrackDefinition {
            rows: vec![row.to_owned()],
            waypoints: waypoints.to_owned(),
            start: CellCoord::new(0, 0),
        })
        .expect("track loads")
    }

    fn straight_path(length: i32) -> Vec<CellCoord> {
        (1..=length).map(|x| CellCoord::new(x, 0)).collect()
    }

    #[test]
    fn open_path_is_driven_to_the_end() {
        let mut track = straight_track("     1", "1");
        let mut racer = Racer::at(CellCoord::new(0, 0));
        let mut waypoints = WaypointTracker::new(track.waypoints());
        let mut events = Vec::new();

        let impact = resolve_path(
            &mut track,
            &mut racer,
            &mut waypoints,
            &straight_path(4),
            &mut events,
        );

        assert_eq!(impact, None);
        assert_eq!(racer.position(), CellCoord::new(4, 0));
        assert_eq!(events.len(), 4);
    }

    #[test]
    fn wall_stops_before_the_impact_cell() {
        let mut track = straight_track("   #  1", "1");
        let mut racer = Racer::at(CellCoord::new(0, 0));
        let mut waypoints = WaypointTracker::new(track.waypoints());
        let mut events = Vec::new();

        let impact = resolve_path(
            &mut track,
            &mut racer,
            &mut waypoints,
            &straight_path(4),
            &mut events,
        );

        assert_eq!(impact, Some(CellCoord::new(3, 0)));
        assert_eq!(racer.position(), CellCoord::new(2, 0));
        assert_eq!(racer.damage(), 1);
        assert!(track.is_impact(CellCoord::new(3, 0)));
        assert!(!events.iter().any(|event| matches!(
            event,
            Event::RacerMoved { to, .. } if to.x() >= 3
        )));
        assert_eq!(
            events.last(),
            Some(&Event::WallHit {
                cell: CellCoord::new(3, 0),
                damage: 1
            })
        );
    }

    #[test]
    fn wall_on_first_cell_keeps_position() {
        let mut track = straight_track(" #  1", "1");
        let mut racer = Racer::at(CellCoord::new(0, 0));
        let mut waypoints = WaypointTracker::new(track.waypoints());
        let mut events = Vec::new();

        let impact = resolve_path(
            &mut track,
            &mut racer,
            &mut waypoints,
            &straight_path(3),
            &mut events,
        );

        assert_eq!(impact, Some(CellCoord::new(1, 0)));
        assert_eq!(racer.position(), CellCoord::new(0, 0));
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn grid_edge_blocks_like_a_wall() {
        let mut track = straight_track("  1", "1");
        let mut racer = Racer::at(CellCoord::new(0, 0));
        let mut waypoints = WaypointTracker::new(track.waypoints());
        let mut events = Vec::new();

        let impact = resolve_path(
            &mut track,
            &mut racer,
            &mut waypoints,
            &straight_path(5),
            &mut events,
        );

        assert_eq!(impact, Some(CellCoord::new(3, 0)));
        assert_eq!(racer.damage(), 1);
        assert_eq!(racer.position(), CellCoord::new(2, 0));
        assert_eq!(track.impacts().count(), 0);
    }

    #[test]
    fn waypoints_advance_in_order_along_the_path() {
        let mut track = straight_track(" 2 1 2 3", "123");
        let mut racer = Racer::at(CellCoord::new(0, 0));
        let mut waypoints = WaypointTracker::new(track.waypoints());
        let mut events = Vec::new();

        let impact = resolve_path(
            &mut track,
            &mut racer,
            &mut waypoints,
            &straight_path(7),
            &mut events,
        );

        assert_eq!(impact, None);
        assert_eq!(waypoints.current_index(), 2);
        let advanced: Vec<char> = events
            .iter()
            .filter_map(|event| match event {
                Event::WaypointAdvanced { symbol, .. } => Some(*symbol),
                _ => None,
            })
            .collect();
        assert_eq!(advanced, vec!['1', '2']);
    }

    #[test]
    fn dropped_cells_still_count_towards_waypoints() {
        let mut track = straight_track("  1 2", "12");
        let mut racer = Racer::at(CellCoord::new(0, 0));
        let mut waypoints = WaypointTracker::new(track.waypoints());
        let mut events = Vec::new();

        let impact = resolve_path(
            &mut track,
            &mut racer,
            &mut waypoints,
            &[CellCoord::new(2, 0)],
            &mut events,
        );

        assert_eq!(impact, None);
        assert_eq!(racer.position(), CellCoord::new(0, 0));
        assert_eq!(waypoints.current_index(), 1);
        assert!(!events
            .iter()
            .any(|event| matches!(event, Event::RacerMoved { .. })));
        assert_eq!(
            events,
            vec![Event::WaypointAdvanced {
                symbol: '1',
                next_index: 1
            }]
        );
    }
}
