//! Tests for the intent policies.

use hexfront_core::enums::{Direction, Team};
use hexfront_core::types::HexCoord;

use crate::intent::{IntentSource, RandomWalk, Scripted};

fn draw(source: &mut dyn IntentSource, n: usize) -> Vec<Direction> {
    (0..n)
        .map(|_| source.direction_for(Team::Blue, HexCoord::new(0, 0)))
        .collect()
}

// ---- RandomWalk ----

#[test]
fn test_random_walk_same_seed_same_sequence() {
    let mut a = RandomWalk::seeded(7);
    let mut b = RandomWalk::seeded(7);
    assert_eq!(draw(&mut a, 64), draw(&mut b, 64));
}

#[test]
fn test_random_walk_different_seeds_diverge() {
    let mut a = RandomWalk::seeded(1);
    let mut b = RandomWalk::seeded(2);
    assert_ne!(draw(&mut a, 64), draw(&mut b, 64));
}

#[test]
fn test_random_walk_covers_all_directions() {
    let mut source = RandomWalk::seeded(42);
    let picks = draw(&mut source, 600);
    for dir in Direction::ALL {
        assert!(picks.contains(&dir), "{dir} never picked in 600 draws");
    }
}

// ---- Scripted ----

#[test]
fn test_scripted_cycles_plan() {
    let mut source = Scripted::new(vec![Direction::E, Direction::NE]);
    assert_eq!(
        draw(&mut source, 5),
        vec![
            Direction::E,
            Direction::NE,
            Direction::E,
            Direction::NE,
            Direction::E,
        ]
    );
}

#[test]
fn test_scripted_from_plan() {
    let mut source = Scripted::from_plan("east, northeast ,west").unwrap();
    assert_eq!(
        draw(&mut source, 3),
        vec![Direction::E, Direction::NE, Direction::W]
    );
}

#[test]
fn test_scripted_rejects_unknown_direction() {
    let err = Scripted::from_plan("east,upward").unwrap_err();
    assert_eq!(err.0, "upward");
}

#[test]
fn test_scripted_empty_plan_falls_back_to_west() {
    let mut source = Scripted::new(Vec::new());
    assert_eq!(draw(&mut source, 2), vec![Direction::W, Direction::W]);
}
