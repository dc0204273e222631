#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use crate::components::{MoveAnimation, MoveState};
    use crate::enums::{Direction, MovementMode, Team};
    use crate::errors::{InvalidDirection, InvalidTeam};
    use crate::types::{HexCoord, SimTime};

    /// Verify the shared enums round-trip through serde_json.
    #[test]
    fn test_team_serde() {
        for team in Team::BOTH {
            let json = serde_json::to_string(&team).unwrap();
            let back: Team = serde_json::from_str(&json).unwrap();
            assert_eq!(team, back);
        }
        assert_eq!(serde_json::to_string(&Team::Blue).unwrap(), "\"blue\"");
        assert_eq!(serde_json::to_string(&Team::Red).unwrap(), "\"red\"");
    }

    #[test]
    fn test_direction_serde() {
        for dir in Direction::ALL {
            let json = serde_json::to_string(&dir).unwrap();
            let back: Direction = serde_json::from_str(&json).unwrap();
            assert_eq!(dir, back);
        }
        assert_eq!(
            serde_json::to_string(&Direction::NE).unwrap(),
            "\"northeast\""
        );
    }

    #[test]
    fn test_movement_mode_serde_and_default() {
        assert_eq!(MovementMode::default(), MovementMode::Animated);
        let back: MovementMode = serde_json::from_str("\"instant\"").unwrap();
        assert_eq!(back, MovementMode::Instant);
    }

    #[test]
    fn test_team_from_str() {
        assert_eq!(Team::from_str("blue").unwrap(), Team::Blue);
        assert_eq!(Team::from_str("red").unwrap(), Team::Red);
        assert_eq!(
            Team::from_str("green"),
            Err(InvalidTeam("green".to_string()))
        );
        // Names are exact; no case folding at the boundary.
        assert!(Team::from_str("Blue").is_err());
    }

    #[test]
    fn test_direction_from_str() {
        for dir in Direction::ALL {
            assert_eq!(Direction::from_str(dir.name()).unwrap(), dir);
        }
        assert_eq!(
            Direction::from_str("north"),
            Err(InvalidDirection("north".to_string()))
        );
    }

    #[test]
    fn test_team_opponent_and_index() {
        assert_eq!(Team::Blue.opponent(), Team::Red);
        assert_eq!(Team::Red.opponent(), Team::Blue);
        assert_eq!(Team::Blue.index(), 0);
        assert_eq!(Team::Red.index(), 1);
    }

    #[test]
    fn test_hex_coord_parity() {
        assert!(!HexCoord::new(3, 0).odd_row());
        assert!(HexCoord::new(3, 1).odd_row());
        assert!(HexCoord::new(0, -1).odd_row());
        assert!(!HexCoord::new(0, -2).odd_row());
    }

    #[test]
    fn test_hex_coord_offset_by() {
        let c = HexCoord::new(2, 3).offset_by((-1, 1));
        assert_eq!(c, HexCoord::new(1, 4));
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        time.advance(16.0);
        time.advance(0.0);
        assert_eq!(time.tick, 2);
        assert!((time.elapsed_ms - 16.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_move_state_serde_tag() {
        let anim = MoveAnimation {
            state: MoveState::Moving {
                start: HexCoord::new(0, 0),
                target: HexCoord::new(1, 0),
                elapsed_ms: 250.0,
                duration_ms: 1000.0,
                progress: 0.25,
            },
        };
        let json = serde_json::to_string(&anim).unwrap();
        assert!(json.contains("\"state\":\"moving\""));
        let back: MoveAnimation = serde_json::from_str(&json).unwrap();
        assert!(back.is_moving());

        let idle = serde_json::to_string(&MoveAnimation::idle()).unwrap();
        assert!(idle.contains("\"state\":\"idle\""));
    }
}
