#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative world state management for Paper Rally.

mod collision;
mod racer;
mod track;
mod waypoints;

use paper_rally_core::{Command, Event, WELCOME_BANNER};

pub use collision::resolve_path;
pub use racer::Racer;
pub use track::{Track, TrackDefinition};
pub use waypoints::WaypointTracker;

/// Represents the authoritative Paper Rally world state.
#[derive(Debug)]
pub struct World {
    banner: &'static str,
    track: Track,
    racer: Racer,
    waypoints: WaypointTracker,
}

impl World {
    /// Creates a world with the racer parked on the track's start cell.
    #[must_use]
    pub fn new(track: Track) -> Self {
        Self {
            banner: WELCOME_BANNER,
            racer: Racer::at(track.start()),
            waypoints: WaypointTracker::new(track.waypoints()),
            track,
        }
    }
}

/// Applies the provided command to the world, mutating state deterministically.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::Accelerate { delta } => {
            let from = world.racer.velocity();
            world.racer.accelerate(delta);
            out_events.push(Event::RacerAccelerated {
                from,
                to: world.racer.velocity(),
            });
        }
        Command::FollowPath { path } => {
            let impact = resolve_path(
                &mut world.track,
                &mut world.racer,
                &mut world.waypoints,
                &path,
                out_events,
            );
            log::debug!(
                "resolved path of {} cells, collided: {}",
                path.len(),
                impact.is_some()
            );
        }
        Command::ResetRace => {
            let start = world.track.start();
            world.racer.reset(start);
            world.waypoints.reset();
            world.track.clear_impacts();
            log::info!("race reset to ({}, {})", start.x(), start.y());
            out_events.push(Event::RaceReset { start });
        }
    }
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use paper_rally_core::{RacerSnapshot, WaypointSnapshot};

    use super::{Track, World};

    /// Retrieves the welcome banner that adapters may display to players.
    #[must_use]
    pub fn welcome_banner(world: &World) -> &'static str {
        world.banner
    }

    /// Provides read-only access to the track.
    #[must_use]
    pub fn track(world: &World) -> &Track {
        &world.track
    }

    /// Captures the racer's position, velocity and damage.
    #[must_use]
    pub fn racer(world: &World) -> RacerSnapshot {
        world.racer.snapshot()
    }

    /// Captures the waypoint progress.
    #[must_use]
    pub fn waypoints(world: &World) -> WaypointSnapshot {
        world.waypoints.snapshot()
    }

    /// Reports whether the racer has visited every waypoint and stands on the
    /// final one.
    #[must_use]
    pub fn is_complete(world: &World) -> bool {
        let symbol = world.track.symbol_at(world.racer.position());
        world.waypoints.is_complete(symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paper_rally_core::{CellCoord, Velocity};

    fn rally_world() -> World {
        World::new(Track::load(&TrackDefinition::rally()).expect("rally track loads"))
    }

    #[test]
    fn new_world_parks_racer_on_start() {
        let world = rally_world();
        let racer = query::racer(&world);
        assert_eq!(racer.position, CellCoord::new(8, 11));
        assert_eq!(racer.velocity, Velocity::ZERO);
        assert_eq!(racer.damage, 0);
        assert_eq!(query::waypoints(&world).current_index, 0);
        assert_eq!(query::waypoints(&world).expected, Some('1'));
        assert_eq!(query::welcome_banner(&world), WELCOME_BANNER);
    }

    #[test]
    fn accelerate_reports_velocity_change() {
        let mut world = rally_world();
        let mut events = Vec::new();
        apply(
            &mut world,
            Command::Accelerate {
                delta: Velocity::new(1, -1),
            },
            &mut events,
        );

        assert_eq!(query::racer(&world).velocity, Velocity::new(1, -1));
        assert_eq!(
            events,
            vec![Event::RacerAccelerated {
                from: Velocity::ZERO,
                to: Velocity::new(1, -1)
            }]
        );
    }

    #[test]
    fn reset_restores_start_state_and_clears_impacts() {
        let mut world = rally_world();
        let mut events = Vec::new();
        apply(
            &mut world,
            Command::FollowPath {
                path: vec![CellCoord::new(9, 11), CellCoord::new(10, 11), CellCoord::new(11, 11)],
            },
            &mut events,
        );
        assert_eq!(query::racer(&world).position, CellCoord::new(10, 11));
        assert_eq!(query::racer(&world).damage, 1);
        assert!(query::track(&world).is_impact(CellCoord::new(11, 11)));

        events.clear();
        apply(&mut world, Command::ResetRace, &mut events);

        assert_eq!(query::racer(&world).position, CellCoord::new(8, 11));
        assert_eq!(query::racer(&world).damage, 0);
        assert_eq!(query::track(&world).impacts().count(), 0);
        assert_eq!(
            events,
            vec![Event::RaceReset {
                start: CellCoord::new(8, 11)
            }]
        );
    }

    #[test]
    fn rally_is_not_complete_at_start() {
        assert!(!query::is_complete(&rally_world()));
    }
}
