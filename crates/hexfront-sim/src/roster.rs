//! Team rosters: per-faction unit membership plus its movement policy.

use hecs::Entity;

use hexfront_core::enums::Team;
use hexfront_core::errors::SpawnError;
use hexfront_policy::IntentSource;

/// The units fighting for one team, and the intent source that
/// proposes their moves.
///
/// A roster holds unit identities only — the engine's world owns the
/// units themselves. Every enrolled unit has the roster's team
/// (enforced at insertion); membership never changes after spawn.
pub struct Roster {
    team: Team,
    units: Vec<Entity>,
    intents: Box<dyn IntentSource + Send>,
}

impl Roster {
    pub fn new(team: Team, intents: Box<dyn IntentSource + Send>) -> Self {
        Self {
            team,
            units: Vec::new(),
            intents,
        }
    }

    pub fn team(&self) -> Team {
        self.team
    }

    /// Enroll a unit. A team mismatch is a construction-time error and
    /// leaves the roster unchanged.
    pub fn add_unit(&mut self, unit: Entity, unit_team: Team) -> Result<(), SpawnError> {
        if unit_team != self.team {
            return Err(SpawnError::TeamMismatch {
                unit: unit_team,
                roster: self.team,
            });
        }
        self.units.push(unit);
        Ok(())
    }

    /// Unit identities, in enrollment order.
    pub fn units(&self) -> &[Entity] {
        &self.units
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Swap the movement policy (e.g. for a deterministic test double).
    pub fn set_intents(&mut self, intents: Box<dyn IntentSource + Send>) {
        self.intents = intents;
    }

    /// Split borrow for the engine's intent pass: the unit list and the
    /// policy that serves it, usable simultaneously.
    pub(crate) fn split_mut(&mut self) -> (&[Entity], &mut dyn IntentSource) {
        (&self.units, self.intents.as_mut())
    }
}
