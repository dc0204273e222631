//! Startup configuration loading.
//!
//! `config.json` supplies the grid dimensions plus presentation and
//! runtime parameters. `rows` and `cols` are required — missing,
//! non-integer, or non-positive values fail fast before the simulation
//! starts. Everything else falls back to a default. Parsing walks
//! `serde_json::Value` by hand so errors name the offending field.

use std::fs;
use std::path::Path;

use serde_json::Value;

use hexfront_core::constants::{
    DEFAULT_FRAME_RATE, DEFAULT_HEX_RADIUS, DEFAULT_SEED, DEFAULT_WINDOW_HEIGHT,
    DEFAULT_WINDOW_WIDTH,
};
use hexfront_core::enums::MovementMode;
use hexfront_core::errors::ConfigError;

/// Validated startup configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppConfig {
    pub rows: u32,
    pub cols: u32,
    /// Window size in pixels, for an external renderer.
    pub window_width: u32,
    pub window_height: u32,
    /// Frame loop rate (frames per second).
    pub frame_rate: u32,
    /// Hex radius (center to vertex) in pixels, for an external renderer.
    pub hex_radius: f64,
    pub seed: u64,
    pub movement: MovementMode,
}

/// Read and parse a config file.
pub fn load(path: &Path) -> Result<AppConfig, ConfigError> {
    parse(&fs::read_to_string(path)?)
}

/// Parse and validate a config document.
pub fn parse(json: &str) -> Result<AppConfig, ConfigError> {
    let doc: Value = serde_json::from_str(json)?;

    let rows = required_dimension(&doc, "rows")?;
    let cols = required_dimension(&doc, "cols")?;

    let window_width = optional_dimension(&doc, "window_width", DEFAULT_WINDOW_WIDTH)?;
    let window_height = optional_dimension(&doc, "window_height", DEFAULT_WINDOW_HEIGHT)?;
    let frame_rate = optional_dimension(&doc, "frame_rate", DEFAULT_FRAME_RATE)?;

    let hex_radius = match doc.get("hex_radius") {
        None => DEFAULT_HEX_RADIUS,
        Some(value) => {
            let radius = value
                .as_f64()
                .ok_or(ConfigError::NotANumber("hex_radius"))?;
            if radius <= 0.0 {
                return Err(ConfigError::NonPositive("hex_radius"));
            }
            radius
        }
    };

    let seed = match doc.get("seed") {
        None => DEFAULT_SEED,
        Some(value) => value.as_u64().ok_or(ConfigError::NotAnInteger("seed"))?,
    };

    let movement = match doc.get("movement") {
        None => MovementMode::default(),
        Some(value) => match value.as_str() {
            Some("animated") => MovementMode::Animated,
            Some("instant") => MovementMode::Instant,
            _ => return Err(ConfigError::InvalidMovementMode(value.to_string())),
        },
    };

    Ok(AppConfig {
        rows,
        cols,
        window_width,
        window_height,
        frame_rate,
        hex_radius,
        seed,
        movement,
    })
}

fn required_dimension(doc: &Value, name: &'static str) -> Result<u32, ConfigError> {
    dimension(doc.get(name).ok_or(ConfigError::MissingField(name))?, name)
}

fn optional_dimension(doc: &Value, name: &'static str, default: u32) -> Result<u32, ConfigError> {
    match doc.get(name) {
        None => Ok(default),
        Some(value) => dimension(value, name),
    }
}

fn dimension(value: &Value, name: &'static str) -> Result<u32, ConfigError> {
    let value = value.as_i64().ok_or(ConfigError::NotAnInteger(name))?;
    if value <= 0 {
        return Err(ConfigError::NonPositive(name));
    }
    u32::try_from(value).map_err(|_| ConfigError::NotAnInteger(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = parse(r#"{ "rows": 12, "cols": 9 }"#).unwrap();
        assert_eq!(config.rows, 12);
        assert_eq!(config.cols, 9);
        assert_eq!(config.window_width, DEFAULT_WINDOW_WIDTH);
        assert_eq!(config.window_height, DEFAULT_WINDOW_HEIGHT);
        assert_eq!(config.frame_rate, DEFAULT_FRAME_RATE);
        assert_eq!(config.hex_radius, DEFAULT_HEX_RADIUS);
        assert_eq!(config.seed, DEFAULT_SEED);
        assert_eq!(config.movement, MovementMode::Animated);
    }

    #[test]
    fn test_full_config() {
        let config = parse(
            r#"{
                "rows": 10, "cols": 14,
                "window_width": 800, "window_height": 600,
                "frame_rate": 60, "hex_radius": 24.5,
                "seed": 7, "movement": "instant"
            }"#,
        )
        .unwrap();
        assert_eq!(config.window_width, 800);
        assert_eq!(config.frame_rate, 60);
        assert_eq!(config.hex_radius, 24.5);
        assert_eq!(config.seed, 7);
        assert_eq!(config.movement, MovementMode::Instant);
    }

    #[test]
    fn test_missing_grid_dimension_fails_fast() {
        let err = parse(r#"{ "rows": 10 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::MissingField("cols")));
    }

    #[test]
    fn test_non_integer_dimension_fails_fast() {
        let err = parse(r#"{ "rows": 7.5, "cols": 10 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::NotAnInteger("rows")));
        let err = parse(r#"{ "rows": "ten", "cols": 10 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::NotAnInteger("rows")));
    }

    #[test]
    fn test_non_positive_dimension_fails_fast() {
        let err = parse(r#"{ "rows": 0, "cols": 10 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::NonPositive("rows")));
        let err = parse(r#"{ "rows": 10, "cols": -3 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::NonPositive("cols")));
    }

    #[test]
    fn test_invalid_movement_mode() {
        let err = parse(r#"{ "rows": 5, "cols": 5, "movement": "teleport" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidMovementMode(_)));
    }

    #[test]
    fn test_invalid_json_fails_fast() {
        assert!(matches!(parse("{"), Err(ConfigError::Json(_))));
    }
}
