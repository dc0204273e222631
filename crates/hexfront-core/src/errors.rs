//! Error taxonomy for the startup and construction paths.
//!
//! Everything here is fatal where it occurs: configuration and manifest
//! errors abort startup, construction errors abort setup. Rejected move
//! requests are NOT errors — they are defined no-ops, reported through
//! the sim crate's `MoveReceipt` so the two channels cannot be confused.

use thiserror::Error;

use crate::enums::Team;
use crate::types::HexCoord;

/// A direction name outside the closed six-value set.
///
/// Unreachable through the `Direction` enum itself; raised only at the
/// string boundary (scripted plans, serde).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid direction '{0}'")]
pub struct InvalidDirection(pub String);

/// A team name outside {"blue", "red"}.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid team '{0}'")]
pub struct InvalidTeam(pub String);

/// Errors loading or validating `config.json`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("config is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("missing field `{0}`")]
    MissingField(&'static str),

    #[error("field `{0}` must be an integer")]
    NotAnInteger(&'static str),

    #[error("field `{0}` must be a number")]
    NotANumber(&'static str),

    #[error("field `{0}` must be positive")]
    NonPositive(&'static str),

    #[error("field `movement` must be \"animated\" or \"instant\", got '{0}'")]
    InvalidMovementMode(String),
}

/// Errors loading or validating the unit manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read unit manifest: {0}")]
    Io(#[from] std::io::Error),

    #[error("unit manifest is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unit record is not a JSON object")]
    MalformedRecord,

    #[error("missing field `{0}` in unit record")]
    MissingField(&'static str),

    #[error("field `{0}` in unit record has the wrong type")]
    InvalidField(&'static str),

    #[error(transparent)]
    InvalidTeam(#[from] InvalidTeam),

    #[error("unit speed must be positive, got {0}")]
    InvalidSpeed(f64),
}

/// Construction errors raised while spawning units into the engine.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SpawnError {
    #[error("unit speed must be positive, got {0}")]
    InvalidSpeed(f64),

    #[error("spawn position ({}, {}) is off the board", .0.col, .0.row)]
    OutOfBounds(HexCoord),

    #[error("cannot add a {unit} unit to the {roster} roster")]
    TeamMismatch { unit: Team, roster: Team },
}
