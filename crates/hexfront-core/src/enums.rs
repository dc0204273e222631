//! Enumeration types shared across the simulation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{InvalidDirection, InvalidTeam};

/// One of the two opposing factions. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    Blue,
    Red,
}

impl Team {
    /// Both teams, in roster order.
    pub const BOTH: [Team; 2] = [Team::Blue, Team::Red];

    /// The opposing faction.
    pub fn opponent(self) -> Team {
        match self {
            Team::Blue => Team::Red,
            Team::Red => Team::Blue,
        }
    }

    /// Stable index for per-team storage.
    pub fn index(self) -> usize {
        match self {
            Team::Blue => 0,
            Team::Red => 1,
        }
    }

    /// Manifest/wire name.
    pub fn name(self) -> &'static str {
        match self {
            Team::Blue => "blue",
            Team::Red => "red",
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Team {
    type Err = InvalidTeam;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "blue" => Ok(Team::Blue),
            "red" => Ok(Team::Red),
            other => Err(InvalidTeam(other.to_string())),
        }
    }
}

/// The six hex directions. Closed set.
///
/// Declaration order is the index into the neighbor offset tables in
/// `hexfront-grid`; keep them in sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "west")]
    W,
    #[serde(rename = "northeast")]
    NE,
    #[serde(rename = "southeast")]
    SE,
    #[serde(rename = "east")]
    E,
    #[serde(rename = "southwest")]
    SW,
    #[serde(rename = "northwest")]
    NW,
}

impl Direction {
    /// All six directions, in offset-table order.
    pub const ALL: [Direction; 6] = [
        Direction::W,
        Direction::NE,
        Direction::SE,
        Direction::E,
        Direction::SW,
        Direction::NW,
    ];

    /// Long-form lowercase name, matching the manifest/serde spelling.
    pub fn name(self) -> &'static str {
        match self {
            Direction::W => "west",
            Direction::NE => "northeast",
            Direction::SE => "southeast",
            Direction::E => "east",
            Direction::SW => "southwest",
            Direction::NW => "northwest",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = InvalidDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "west" => Ok(Direction::W),
            "northeast" => Ok(Direction::NE),
            "southeast" => Ok(Direction::SE),
            "east" => Ok(Direction::E),
            "southwest" => Ok(Direction::SW),
            "northwest" => Ok(Direction::NW),
            other => Err(InvalidDirection(other.to_string())),
        }
    }
}

/// How a validated move request is applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementMode {
    /// Moves animate over `BASE_MOVE_DURATION_MS / speed` and commit on
    /// completion.
    #[default]
    Animated,
    /// Moves commit at request time with no animation.
    Instant,
}
