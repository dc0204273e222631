//! Simulation constants and tuning parameters.

/// Move duration in milliseconds for a unit of speed 1.0.
/// A move takes `BASE_MOVE_DURATION_MS / speed`, so duration is
/// inversely proportional to speed.
pub const BASE_MOVE_DURATION_MS: f64 = 1000.0;

/// RNG seed used when the config does not supply one.
/// Same seed = same simulation.
pub const DEFAULT_SEED: u64 = 42;

/// Seed salt separating the red roster's RNG stream from the blue one,
/// so a single config seed yields two independent deterministic streams.
pub const RED_SEED_SALT: u64 = 0x9E37_79B9_7F4A_7C15;

// --- Presentation defaults (parsed from config, surfaced to an external
// renderer; the headless runner only uses the frame rate) ---

pub const DEFAULT_WINDOW_WIDTH: u32 = 1280;

pub const DEFAULT_WINDOW_HEIGHT: u32 = 720;

/// Frame loop rate (frames per second).
pub const DEFAULT_FRAME_RATE: u32 = 30;

/// Hex radius (center to vertex) in pixels.
pub const DEFAULT_HEX_RADIUS: f64 = 32.0;
