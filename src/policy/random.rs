//! Uniform random policy, the baseline every other agent is compared to.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::ensure_legal;
use super::error::PolicyError;
use super::trait_::Policy;
use crate::environment::Snapshot;
use crate::geometry::Direction;

/// Picks uniformly among the legal moves other than `Stop`.
pub struct RandomPolicy {
    rng: StdRng,
}

impl RandomPolicy {
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

impl Default for RandomPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl Policy for RandomPolicy {
    fn decide(&mut self, snapshot: &Snapshot) -> Result<Direction, PolicyError> {
        ensure_legal(snapshot)?;
        choose_moving(snapshot, &mut self.rng)
            .ok_or(PolicyError::NoLegalMove(snapshot.position))
    }

    fn name(&self) -> &str {
        "random"
    }
}

/// Uniform choice among the non-`Stop` legal moves.
///
/// When `Stop` is the only legal move it is returned; `None` only for an
/// empty legal set.
pub(crate) fn choose_moving<R: Rng + ?Sized>(
    snapshot: &Snapshot,
    rng: &mut R,
) -> Option<Direction> {
    let moving = snapshot.legal_without(Direction::Stop);
    if moving.is_empty() {
        return snapshot.legal.first().copied();
    }
    moving.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(legal: &[Direction]) -> Snapshot {
        Snapshot::builder()
            .legal(legal.iter().copied())
            .position((1, 1))
            .facing(Direction::Stop)
            .build()
            .unwrap()
    }

    #[test]
    fn never_stops_when_it_can_move() {
        let mut policy = RandomPolicy::seeded(7);
        let snap = snapshot(&[Direction::North, Direction::West, Direction::Stop]);
        for _ in 0..200 {
            let d = policy.decide(&snap).unwrap();
            assert!(d == Direction::North || d == Direction::West);
        }
    }

    #[test]
    fn covers_every_moving_option() {
        let mut policy = RandomPolicy::seeded(11);
        let snap = snapshot(&[
            Direction::North,
            Direction::East,
            Direction::South,
            Direction::Stop,
        ]);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(policy.decide(&snap).unwrap());
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn stop_only_returns_stop() {
        let mut policy = RandomPolicy::seeded(1);
        let stuck = snapshot(&[Direction::Stop]);
        assert_eq!(policy.decide(&stuck), Ok(Direction::Stop));
    }

    #[test]
    fn empty_legal_set_is_an_error() {
        let mut policy = RandomPolicy::seeded(1);
        assert_eq!(
            policy.decide(&snapshot(&[])),
            Err(PolicyError::NoLegalMove((1, 1).into()))
        );
    }
}
