//! Simulation engine — the core of the game.
//!
//! `SimulationEngine` owns the hecs world of units, the affiliation
//! board, and the two team rosters. It validates move requests against
//! the board, starts and advances per-unit animations, and applies
//! territorial changes the moment a move commits. The engine never
//! renders and never sleeps; the frame loop feeds it measured elapsed
//! time and reads back snapshots.

use hecs::{Entity, World};

use hexfront_core::components::{
    Allegiance, GridPosition, Mobility, MoveAnimation, MoveState, UnitId,
};
use hexfront_core::constants::{BASE_MOVE_DURATION_MS, DEFAULT_SEED, RED_SEED_SALT};
use hexfront_core::enums::{Direction, MovementMode, Team};
use hexfront_core::errors::SpawnError;
use hexfront_core::events::SimEvent;
use hexfront_core::state::{SimSnapshot, TerritorySplit};
use hexfront_core::types::{HexCoord, SimTime};
use hexfront_grid::{geometry, HexBoard};
use hexfront_policy::{IntentSource, RandomWalk};

use crate::manifest::UnitRecord;
use crate::roster::Roster;
use crate::systems::{animation, snapshot};

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Copy)]
pub struct SimConfig {
    pub rows: u32,
    pub cols: u32,
    /// Seed for the rosters' random-walk policies. Same seed = same
    /// simulation.
    pub seed: u64,
    pub movement: MovementMode,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            rows: 10,
            cols: 10,
            seed: DEFAULT_SEED,
            movement: MovementMode::default(),
        }
    }
}

/// Outcome of a move request.
///
/// Rejections are defined no-ops, deliberately not a `Result` — the
/// caller cannot mistake a dropped request for a failure, and nothing
/// here is ever logged or raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveReceipt {
    /// The unit flipped to `Moving` (or committed, in instant mode).
    Started,
    /// A move is already in flight for this unit; request dropped.
    AlreadyMoving,
    /// The target hex is off the board; request dropped.
    OutOfBounds,
    /// The handle is not a live unit of this engine.
    UnknownUnit,
}

/// The simulation engine. Owns all mutable game state.
pub struct SimulationEngine {
    world: World,
    board: HexBoard,
    time: SimTime,
    movement: MovementMode,
    rosters: [Roster; 2],
    events: Vec<SimEvent>,
    next_unit_id: u32,
}

impl SimulationEngine {
    /// Create an engine with an empty board and one roster per team,
    /// each on its own deterministic random-walk stream.
    pub fn new(config: SimConfig) -> Self {
        let rosters = [
            Roster::new(Team::Blue, Box::new(RandomWalk::seeded(config.seed))),
            Roster::new(
                Team::Red,
                Box::new(RandomWalk::seeded(config.seed ^ RED_SEED_SALT)),
            ),
        ];
        Self {
            world: World::new(),
            board: HexBoard::new(config.rows, config.cols),
            time: SimTime::default(),
            movement: config.movement,
            rosters,
            events: Vec::new(),
            next_unit_id: 0,
        }
    }

    /// Spawn one unit and enroll it in its team's roster. The spawn
    /// cell is claimed for the team immediately.
    pub fn spawn_unit(
        &mut self,
        coord: HexCoord,
        team: Team,
        speed: f64,
    ) -> Result<Entity, SpawnError> {
        if !speed.is_finite() || speed <= 0.0 {
            return Err(SpawnError::InvalidSpeed(speed));
        }
        if !self.board.contains(coord) {
            return Err(SpawnError::OutOfBounds(coord));
        }

        let unit_id = UnitId(self.next_unit_id);
        let entity = self.world.spawn((
            unit_id,
            Allegiance { team },
            Mobility { speed },
            GridPosition { coord },
            MoveAnimation::idle(),
        ));
        self.rosters[team.index()].add_unit(entity, team)?;
        self.next_unit_id += 1;

        let previous = self.board.claim(coord, team);
        self.events.push(SimEvent::CellClaimed {
            coord,
            team,
            previous,
        });
        Ok(entity)
    }

    /// Spawn every manifest record, in order. The first bad record
    /// aborts setup.
    pub fn spawn_units(&mut self, records: &[UnitRecord]) -> Result<(), SpawnError> {
        for record in records {
            self.spawn_unit(HexCoord::new(record.col, record.row), record.team, record.speed)?;
        }
        Ok(())
    }

    /// Request a move for one unit. Rejections are silent no-ops
    /// reported through the receipt, never as errors.
    pub fn request_move(&mut self, unit: Entity, direction: Direction) -> MoveReceipt {
        let Self {
            world,
            board,
            movement,
            events,
            ..
        } = self;
        Self::start_move(world, board, *movement, events, unit, direction)
    }

    /// Ask `team`'s intent source for a direction per roster unit and
    /// submit each as a move request. Illegal picks and already-moving
    /// units are dropped, as the movement rules define.
    pub fn issue_moves(&mut self, team: Team) {
        let Self {
            world,
            board,
            movement,
            rosters,
            events,
            ..
        } = self;
        let (units, intents) = rosters[team.index()].split_mut();
        for &unit in units {
            let coord = match world.get::<&GridPosition>(unit) {
                Ok(position) => position.coord,
                Err(_) => continue,
            };
            let direction = intents.direction_for(team, coord);
            let _ = Self::start_move(world, board, *movement, events, unit, direction);
        }
    }

    /// Advance every in-flight animation by `delta_ms` and return the
    /// resulting snapshot with the tick's event batch. Negative deltas
    /// clamp to zero; a zero delta is legal and moves nothing.
    pub fn tick(&mut self, delta_ms: f64) -> SimSnapshot {
        let delta_ms = delta_ms.max(0.0);
        animation::run(&mut self.world, &mut self.board, delta_ms, &mut self.events);
        self.time.advance(delta_ms);

        let events = std::mem::take(&mut self.events);
        snapshot::build_snapshot(&self.world, &self.board, &self.time, events)
    }

    /// Read-only snapshot of the current state. Does not drain events;
    /// those belong to the next `tick`.
    pub fn snapshot(&self) -> SimSnapshot {
        snapshot::build_snapshot(&self.world, &self.board, &self.time, Vec::new())
    }

    /// Swap a roster's movement policy (e.g. a scripted test double).
    pub fn set_intent_source(&mut self, team: Team, intents: Box<dyn IntentSource + Send>) {
        self.rosters[team.index()].set_intents(intents);
    }

    /// Get a read-only reference to the unit world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get a read-only reference to the board.
    pub fn board(&self) -> &HexBoard {
        &self.board
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the configured movement mode.
    pub fn movement(&self) -> MovementMode {
        self.movement
    }

    /// Get a read-only reference to a team's roster.
    pub fn roster(&self, team: Team) -> &Roster {
        &self.rosters[team.index()]
    }

    /// Current territory percentages (derived, read-only).
    pub fn territory(&self) -> TerritorySplit {
        self.board.territory_split()
    }

    /// Validate and begin (or, in instant mode, commit) a single move.
    ///
    /// An associated function over split engine fields so the intent
    /// pass can drive it while holding a roster borrow.
    fn start_move(
        world: &World,
        board: &mut HexBoard,
        movement: MovementMode,
        events: &mut Vec<SimEvent>,
        unit: Entity,
        direction: Direction,
    ) -> MoveReceipt {
        let Ok(mut anim) = world.get::<&mut MoveAnimation>(unit) else {
            return MoveReceipt::UnknownUnit;
        };
        if anim.is_moving() {
            return MoveReceipt::AlreadyMoving;
        }

        // The spawn bundle guarantees the rest of the components; a
        // miss means a foreign entity handle.
        let (Ok(unit_id), Ok(allegiance), Ok(mobility), Ok(mut position)) = (
            world.get::<&UnitId>(unit),
            world.get::<&Allegiance>(unit),
            world.get::<&Mobility>(unit),
            world.get::<&mut GridPosition>(unit),
        ) else {
            return MoveReceipt::UnknownUnit;
        };

        let from = position.coord;
        if !geometry::is_move_valid(from, direction, board.rows(), board.cols()) {
            return MoveReceipt::OutOfBounds;
        }
        let target = geometry::neighbor_of(from, direction);

        match movement {
            MovementMode::Animated => {
                anim.state = MoveState::Moving {
                    start: from,
                    target,
                    elapsed_ms: 0.0,
                    duration_ms: BASE_MOVE_DURATION_MS / mobility.speed,
                    progress: 0.0,
                };
                events.push(SimEvent::MoveStarted {
                    unit_id: unit_id.0,
                    team: allegiance.team,
                    from,
                    to: target,
                });
            }
            MovementMode::Instant => {
                animation::commit_move(
                    board,
                    events,
                    unit_id.0,
                    allegiance.team,
                    &mut position,
                    from,
                    target,
                );
            }
        }
        MoveReceipt::Started
    }
}
