//! Headless runner wiring for Hexfront: startup configuration and the
//! frame-loop thread. The binary in `main.rs` glues these to the CLI.

pub mod config;
pub mod game_loop;
