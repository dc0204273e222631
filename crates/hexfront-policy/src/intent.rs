//! The intent-source seam and its two implementations.

use std::str::FromStr;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use hexfront_core::enums::{Direction, Team};
use hexfront_core::errors::InvalidDirection;
use hexfront_core::types::HexCoord;

/// Produces a movement direction for one unit.
///
/// Called once per unit per frame by the engine's intent pass. The
/// source never sees the board; illegal picks are dropped by the
/// engine as defined no-ops, so a policy is free to suggest walking
/// off the edge.
pub trait IntentSource {
    fn direction_for(&mut self, team: Team, position: HexCoord) -> Direction;
}

/// Uniformly random direction per call, independent per unit and per
/// call. Seeded ChaCha8 so a run is reproducible from its seed.
pub struct RandomWalk {
    rng: ChaCha8Rng,
}

impl RandomWalk {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl IntentSource for RandomWalk {
    fn direction_for(&mut self, _team: Team, _position: HexCoord) -> Direction {
        Direction::ALL[self.rng.gen_range(0..Direction::ALL.len())]
    }
}

/// Fixed direction plan, cycled forever. The deterministic test double.
#[derive(Debug)]
pub struct Scripted {
    plan: Vec<Direction>,
    next: usize,
}

impl Scripted {
    /// A plan from an explicit direction list. Empty plans fall back to
    /// a single `W` so the source always has an answer.
    pub fn new(plan: Vec<Direction>) -> Self {
        let plan = if plan.is_empty() {
            vec![Direction::W]
        } else {
            plan
        };
        Self { plan, next: 0 }
    }

    /// Parse a comma-separated plan of long-form direction names,
    /// e.g. `"east,northeast,west"`.
    pub fn from_plan(plan: &str) -> Result<Self, InvalidDirection> {
        let directions = plan
            .split(',')
            .map(|name| Direction::from_str(name.trim()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(directions))
    }
}

impl IntentSource for Scripted {
    fn direction_for(&mut self, _team: Team, _position: HexCoord) -> Direction {
        let dir = self.plan[self.next];
        self.next = (self.next + 1) % self.plan.len();
        dir
    }
}
