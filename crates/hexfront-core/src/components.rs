//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods beyond small
//! constructors/predicates. Game logic lives in the sim crate's systems.

use serde::{Deserialize, Serialize};

use crate::enums::Team;
use crate::types::HexCoord;

/// Stable display/ordering identifier assigned at spawn, in manifest order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnitId(pub u32);

/// Which faction a unit fights for. Immutable after spawn.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Allegiance {
    pub team: Team,
}

/// Movement rate in hexes per nominal time unit (1000 ms).
///
/// Validated positive at spawn; a move takes
/// `BASE_MOVE_DURATION_MS / speed` milliseconds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Mobility {
    pub speed: f64,
}

/// Authoritative discrete grid location.
///
/// While a move animates this stays at the pre-move hex; bounds checks
/// and new move requests read it, never the interpolated position. It
/// jumps to the target only when the animation commits.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GridPosition {
    pub coord: HexCoord,
}

/// Per-unit movement animation: Idle -> Moving -> Idle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MoveAnimation {
    pub state: MoveState,
}

impl MoveAnimation {
    pub fn idle() -> Self {
        Self {
            state: MoveState::Idle,
        }
    }

    pub fn is_moving(&self) -> bool {
        matches!(self.state, MoveState::Moving { .. })
    }
}

/// A unit is in exactly one of these states at a time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum MoveState {
    Idle,
    Moving {
        start: HexCoord,
        target: HexCoord,
        elapsed_ms: f64,
        duration_ms: f64,
        /// Fraction of the move completed, clamped to [0.0, 1.0].
        progress: f64,
    },
}
