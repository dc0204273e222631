//! Movement intent policies for Hexfront rosters.
//!
//! An intent source decides *which way* a unit wants to go; the sim
//! engine decides whether the move is legal and executes it. Keeping
//! the seam here lets deterministic test doubles (or a future scripted
//! or player-driven policy) replace the random walk without touching
//! the engine. No ECS dependency — policies operate on plain data.

pub mod intent;

pub use intent::{IntentSource, RandomWalk, Scripted};

#[cfg(test)]
mod tests;
