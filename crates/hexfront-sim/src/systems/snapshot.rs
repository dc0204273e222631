//! Snapshot system: queries the world and board and builds a complete
//! `SimSnapshot`.
//!
//! This system is read-only — it never modifies the simulation.

use hecs::World;

use hexfront_core::components::{Allegiance, GridPosition, MoveAnimation, MoveState, UnitId};
use hexfront_core::events::SimEvent;
use hexfront_core::state::{CellView, MotionView, SimSnapshot, UnitView};
use hexfront_core::types::SimTime;
use hexfront_grid::HexBoard;

/// Build a complete snapshot from the current state.
pub fn build_snapshot(
    world: &World,
    board: &HexBoard,
    time: &SimTime,
    events: Vec<SimEvent>,
) -> SimSnapshot {
    SimSnapshot {
        time: *time,
        rows: board.rows(),
        cols: board.cols(),
        units: build_units(world),
        cells: build_cells(board),
        territory: board.territory_split(),
        events,
    }
}

/// Build the unit views, sorted by id for stable output.
fn build_units(world: &World) -> Vec<UnitView> {
    let mut units: Vec<UnitView> = world
        .query::<(&UnitId, &Allegiance, &GridPosition, &MoveAnimation)>()
        .iter()
        .map(|(_, (unit_id, allegiance, position, animation))| UnitView {
            unit_id: unit_id.0,
            team: allegiance.team,
            position: position.coord,
            motion: match animation.state {
                MoveState::Idle => MotionView::Idle,
                MoveState::Moving {
                    start,
                    target,
                    progress,
                    ..
                } => MotionView::Moving {
                    start,
                    target,
                    progress,
                },
            },
        })
        .collect();

    units.sort_by_key(|u| u.unit_id);
    units
}

fn build_cells(board: &HexBoard) -> Vec<CellView> {
    board
        .cells()
        .iter()
        .map(|cell| CellView {
            coord: cell.coord,
            affiliation: cell.affiliation,
        })
        .collect()
}
