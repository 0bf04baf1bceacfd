#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Turn controller that orchestrates validation, acceleration, rasterization
//! and path resolution for a single racer.

use paper_rally_core::{
    CellCoord, Command, Event, RaceConfig, RacerSnapshot, TurnOutcome, Velocity,
    WaypointSnapshot,
};
use paper_rally_system_path::PathRasterizer;
use paper_rally_system_steering::MoveValidator;
use paper_rally_world::{self as world, query, Track, World};

/// Owns the race state and resolves one cell selection at a time.
#[derive(Debug)]
pub struct TurnController {
    world: World,
    config: RaceConfig,
    validator: MoveValidator,
    rasterizer: PathRasterizer,
    events: Vec<Event>,
    turns: u32,
}

impl TurnController {
    /// Starts a race on the provided track.
    #[must_use]
    pub fn new(track: Track, config: RaceConfig) -> Self {
        Self {
            world: World::new(track),
            config,
            validator: MoveValidator::new(),
            rasterizer: PathRasterizer::new(),
            events: Vec::new(),
            turns: 0,
        }
    }

    /// Resolves a selected cell into a complete turn.
    ///
    /// Selections outside the legal envelope leave every piece of state
    /// untouched and produce a rejected outcome.
    pub fn handle_selection(&mut self, target: CellCoord) -> TurnOutcome {
        let racer = query::racer(&self.world);
        let acceleration = match self.validator.validate(&racer, target) {
            Ok(acceleration) => acceleration,
            Err(rejection) => {
                log::trace!("ignored selection: {rejection}");
                return TurnOutcome::rejected(racer.position, query::is_complete(&self.world));
            }
        };

        let config = self.config;
        let mut events = std::mem::take(&mut self.events);
        events.clear();

        if !config.delayed_acceleration {
            world::apply(
                &mut self.world,
                Command::Accelerate {
                    delta: acceleration,
                },
                &mut events,
            );
        }

        let velocity = query::racer(&self.world).velocity;
        let path = self.rasterizer.rasterize(racer.position, velocity);
        world::apply(
            &mut self.world,
            Command::FollowPath { path: path.clone() },
            &mut events,
        );

        if config.delayed_acceleration {
            world::apply(
                &mut self.world,
                Command::Accelerate {
                    delta: acceleration,
                },
                &mut events,
            );
        }

        self.turns = self.turns.saturating_add(1);
        let outcome = self.fold_outcome(path, acceleration, &events);
        self.events = events;
        log::debug!(
            "turn {} finished at ({}, {}) after {} cells",
            self.turns,
            outcome.final_position.x(),
            outcome.final_position.y(),
            outcome.path.len()
        );
        if outcome.completed {
            log::info!("race completed in {} turns", self.turns);
        }
        outcome
    }

    /// Restarts the race from the track's start cell.
    pub fn reset(&mut self) {
        self.events.clear();
        world::apply(&mut self.world, Command::ResetRace, &mut self.events);
        self.turns = 0;
    }

    /// Events reported by the world during the most recent accepted turn or
    /// reset, in the order they happened.
    #[must_use]
    pub fn last_events(&self) -> &[Event] {
        &self.events
    }

    /// Current racer state.
    #[must_use]
    pub fn racer(&self) -> RacerSnapshot {
        query::racer(&self.world)
    }

    /// Current waypoint progress.
    #[must_use]
    pub fn waypoints(&self) -> WaypointSnapshot {
        query::waypoints(&self.world)
    }

    /// Cells the racer may select this turn.
    #[must_use]
    pub fn legal_targets(&self) -> Vec<CellCoord> {
        self.validator.envelope(&self.racer())
    }

    /// Reports whether the race has been completed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        query::is_complete(&self.world)
    }

    /// Number of accepted turns since the race started.
    #[must_use]
    pub const fn turn_count(&self) -> u32 {
        self.turns
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> RaceConfig {
        self.config
    }

    /// Replaces the configuration used from the next turn onward.
    pub fn set_config(&mut self, config: RaceConfig) {
        self.config = config;
    }

    /// Read-only access to the world for presentation.
    #[must_use]
    pub const fn world(&self) -> &World {
        &self.world
    }

    fn fold_outcome(
        &self,
        path: Vec<CellCoord>,
        acceleration: Velocity,
        events: &[Event],
    ) -> TurnOutcome {
        let mut outcome = TurnOutcome {
            accepted: true,
            final_position: query::racer(&self.world).position,
            path,
            collided: false,
            damage_delta: 0,
            waypoint_advanced: false,
            impact: None,
            acceleration: Some(acceleration),
            completed: query::is_complete(&self.world),
        };

        for event in events {
            match event {
                Event::WallHit { cell, .. } => {
                    outcome.collided = true;
                    outcome.damage_delta += 1;
                    outcome.impact = Some(*cell);
                }
                Event::WaypointAdvanced { .. } => outcome.waypoint_advanced = true,
                Event::RacerAccelerated { .. }
                | Event::RacerMoved { .. }
                | Event::RaceReset { .. } => {}
            }
        }

        outcome
    }
}
