//! Events emitted by the simulation for UI feedback and tests.

use serde::{Deserialize, Serialize};

use crate::enums::Team;
use crate::types::HexCoord;

/// Simulation events recorded during a tick and drained into its
/// snapshot. Rejected move requests deliberately emit nothing — they
/// are silent no-ops, not reportable conditions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A unit began animating from `from` toward `to`.
    MoveStarted {
        unit_id: u32,
        team: Team,
        from: HexCoord,
        to: HexCoord,
    },
    /// A unit's move committed; its discrete position is now `to`.
    MoveCompleted {
        unit_id: u32,
        team: Team,
        from: HexCoord,
        to: HexCoord,
    },
    /// A cell changed hands (or was re-claimed by its current holder).
    CellClaimed {
        coord: HexCoord,
        team: Team,
        previous: Option<Team>,
    },
}
