//! Greedy westward mover.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::ensure_legal;
use super::error::PolicyError;
use super::trait_::Policy;
use crate::environment::Snapshot;
use crate::geometry::Direction;

/// Goes west whenever it can; otherwise picks at random among the legal
/// moves that do not lead back east.
pub struct GoWestPolicy {
    rng: StdRng,
}

impl GoWestPolicy {
    /// Creates a policy seeded from system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a reproducible policy.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for GoWestPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl Policy for GoWestPolicy {
    fn decide(&mut self, snapshot: &Snapshot) -> Result<Direction, PolicyError> {
        ensure_legal(snapshot)?;
        if snapshot.is_legal(Direction::West) {
            return Ok(Direction::West);
        }

        // East alone is still better than an illegal move.
        let mut candidates = snapshot.legal_without(Direction::East);
        if candidates.is_empty() {
            candidates = snapshot.legal.clone();
        }
        candidates
            .choose(&mut self.rng)
            .copied()
            .ok_or(PolicyError::NoLegalMove(snapshot.position))
    }

    fn name(&self) -> &str {
        "go_west"
    }
}
