//! Movement animation system.
//!
//! Advances every in-flight move by the frame's elapsed milliseconds
//! and commits the ones that reach full progress. Progress is a pure
//! function of accumulated elapsed time over the move's duration —
//! never of frame count — so completion timing is independent of frame
//! pacing. Idle units are untouched.

use hecs::World;

use hexfront_core::components::{Allegiance, GridPosition, MoveAnimation, MoveState, UnitId};
use hexfront_core::enums::Team;
use hexfront_core::events::SimEvent;
use hexfront_core::types::HexCoord;
use hexfront_grid::HexBoard;

/// Advance all animations by `delta_ms` (non-negative).
pub fn run(world: &mut World, board: &mut HexBoard, delta_ms: f64, events: &mut Vec<SimEvent>) {
    for (_entity, (unit_id, allegiance, position, animation)) in
        world.query_mut::<(&UnitId, &Allegiance, &mut GridPosition, &mut MoveAnimation)>()
    {
        let MoveState::Moving {
            start,
            target,
            elapsed_ms,
            duration_ms,
            progress,
        } = &mut animation.state
        else {
            continue;
        };

        *elapsed_ms += delta_ms;
        *progress = (*elapsed_ms / *duration_ms).min(1.0);
        if *progress >= 1.0 {
            let (from, to) = (*start, *target);
            animation.state = MoveState::Idle;
            commit_move(board, events, unit_id.0, allegiance.team, position, from, to);
        }
    }
}

/// Commit a finished move: the discrete position jumps to the target
/// and the destination cell changes hands. Shared by the animated
/// completion path above and the instant-commit movement mode.
pub(crate) fn commit_move(
    board: &mut HexBoard,
    events: &mut Vec<SimEvent>,
    unit_id: u32,
    team: Team,
    position: &mut GridPosition,
    from: HexCoord,
    to: HexCoord,
) {
    position.coord = to;
    events.push(SimEvent::MoveCompleted {
        unit_id,
        team,
        from,
        to,
    });
    let previous = board.claim(to, team);
    events.push(SimEvent::CellClaimed {
        coord: to,
        team,
        previous,
    });
}
