//! Keeps going in one direction until it is blocked.

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::ensure_legal;
use super::error::PolicyError;
use super::random::choose_moving;
use super::trait_::Policy;
use crate::environment::Snapshot;
use crate::geometry::Direction;

/// Repeats the previous move while it stays legal, otherwise picks a new
/// non-`Stop` move at random and sticks with it.
pub struct PersistencePolicy {
    rng: StdRng,
    last: Direction,
}

impl PersistencePolicy {
    /// Creates a policy seeded from system entropy.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Creates a reproducible policy.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            rng,
            last: Direction::Stop,
        }
    }

    /// The move chosen on the previous tick (`Stop` before the first one).
    pub fn last_direction(&self) -> Direction {
        self.last
    }
}

impl Default for PersistencePolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl Policy for PersistencePolicy {
    fn decide(&mut self, snapshot: &Snapshot) -> Result<Direction, PolicyError> {
        ensure_legal(snapshot)?;
        if !self.last.is_stop() && snapshot.is_legal(self.last) {
            return Ok(self.last);
        }
        let pick = choose_moving(snapshot, &mut self.rng)
            .ok_or(PolicyError::NoLegalMove(snapshot.position))?;
        self.last = pick;
        Ok(pick)
    }

    fn name(&self) -> &str {
        "persistence"
    }
}
