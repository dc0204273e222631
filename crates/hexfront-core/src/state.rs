//! Read-only snapshot views — the complete visible state handed to a
//! renderer after each tick. Nothing in here mutates the simulation.

use serde::{Deserialize, Serialize};

use crate::enums::Team;
use crate::events::SimEvent;
use crate::types::{HexCoord, SimTime};

/// Complete visible simulation state for one tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimSnapshot {
    pub time: SimTime,
    pub rows: u32,
    pub cols: u32,
    /// All units, sorted by `unit_id`.
    pub units: Vec<UnitView>,
    /// All board cells, row-major.
    pub cells: Vec<CellView>,
    pub territory: TerritorySplit,
    /// Events recorded since the previous tick.
    pub events: Vec<SimEvent>,
}

/// One unit as a renderer sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitView {
    pub unit_id: u32,
    pub team: Team,
    /// Authoritative discrete position (pre-move while animating).
    pub position: HexCoord,
    pub motion: MotionView,
}

/// Animation state for rendering.
///
/// Interpolating between `start` and `target` by `progress` is the
/// renderer's job; the simulation only supplies the endpoints and the
/// fraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum MotionView {
    Idle,
    Moving {
        start: HexCoord,
        target: HexCoord,
        progress: f64,
    },
}

/// One board cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellView {
    pub coord: HexCoord,
    pub affiliation: Option<Team>,
}

/// Share of the board held by each faction, in percent.
///
/// The three values sum to exactly 100 for any non-empty board (the
/// unclaimed share is derived as the remainder, not counted); an empty
/// board reports all zeros.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TerritorySplit {
    pub blue_pct: f64,
    pub red_pct: f64,
    pub none_pct: f64,
}
