//! Perimeter-then-seek policy.
//!
//! The agent first hugs the wall on its left until it returns to a junction
//! it has already visited, which signals that the boundary has been covered.
//! From then on it scans along the four compass axes for the nearest
//! unobstructed item, wandering with a bias toward its previous move when
//! nothing is in sight.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::ensure_legal;
use super::error::PolicyError;
use super::trait_::Policy;
use crate::config::PolicyConfig;
use crate::environment::Snapshot;
use crate::geometry::{Direction, Position};

/// Behavioural phase of a [`PerimeterSeekPolicy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Left-hand wall following.
    Exploring,
    /// Line-of-sight item search. Terminal for the episode.
    Seeking,
}

/// Stateful two-phase policy: wall following, then item seeking.
///
/// Each call to [`decide`](Policy::decide):
///
/// ```text
/// Exploring ──(revisited cell with > junction_threshold legal moves)──▶ Seeking
/// ```
///
/// While exploring, candidates are tried in the order
/// `left(facing)`, `facing`, `right(facing)`, `reverse(facing)`, where a
/// `Stop` facing counts as north. While seeking, the nearest item lying on a
/// compass axis within `scan_radius`, with no obstacle on the way and a legal
/// move toward it, wins; equal distances go to north, east, south, then west.
pub struct PerimeterSeekPolicy {
    config: PolicyConfig,
    rng: StdRng,
    visited: HashSet<Position>,
    last_direction: Direction,
    phase: Phase,
}

impl PerimeterSeekPolicy {
    /// Creates a policy seeded from system entropy.
    pub fn new(config: PolicyConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Creates a reproducible policy.
    pub fn seeded(config: PolicyConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    /// Creates a policy drawing its random tie-breaks from `rng`.
    pub fn with_rng(config: PolicyConfig, rng: StdRng) -> Self {
        Self {
            config,
            rng,
            visited: HashSet::new(),
            last_direction: Direction::Stop,
            phase: Phase::Exploring,
        }
    }

    /// Current behavioural phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Cells occupied while exploring.
    pub fn visited(&self) -> &HashSet<Position> {
        &self.visited
    }

    /// The move returned by the previous call (`Stop` before the first one).
    pub fn last_direction(&self) -> Direction {
        self.last_direction
    }

    /// Thresholds this policy was built with.
    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    fn at_revisited_junction(&self, snapshot: &Snapshot) -> bool {
        self.visited.contains(&snapshot.position)
            && snapshot.legal.len() > self.config.junction_threshold
    }

    fn follow_wall(&mut self, snapshot: &Snapshot) -> Direction {
        self.visited.insert(snapshot.position);

        let facing = snapshot.facing.normalized();
        [facing.left(), facing, facing.right(), facing.reverse()]
            .into_iter()
            .find(|d| snapshot.is_legal(*d))
            .unwrap_or(Direction::Stop)
    }

    /// Nearest item visible along a compass axis, as the direction toward it.
    ///
    /// Distances are measured per item, so the radius may span the whole
    /// coordinate range without walking it cell by cell.
    fn line_of_sight(&self, snapshot: &Snapshot) -> Option<Direction> {
        let here = snapshot.position;
        let mut nearest: Option<(u32, Direction)> = None;
        for direction in Direction::COMPASS {
            if !snapshot.is_legal(direction) {
                continue;
            }
            for item in &snapshot.items {
                let Some(distance) = here.axis_distance(item, direction) else {
                    continue;
                };
                let closer = !matches!(nearest, Some((best, _)) if best <= distance);
                if closer
                    && distance <= self.config.scan_radius
                    && here.has_clear_path(direction, distance, &snapshot.obstacles)
                {
                    nearest = Some((distance, direction));
                }
            }
        }

        let (distance, direction) = nearest?;
        debug!(%direction, distance, "item in sight");
        Some(direction)
    }

    fn wander(&mut self, snapshot: &Snapshot) -> Direction {
        let moving = snapshot.legal_without(Direction::Stop);
        let Some(&random) = moving.choose(&mut self.rng) else {
            // Only Stop is legal.
            return Direction::Stop;
        };

        let can_persist = !self.last_direction.is_stop() && snapshot.is_legal(self.last_direction);
        if can_persist && self.rng.gen::<f64>() < self.config.persist_probability {
            self.last_direction
        } else {
            random
        }
    }
}

impl Default for PerimeterSeekPolicy {
    fn default() -> Self {
        Self::new(PolicyConfig::default())
    }
}

impl Policy for PerimeterSeekPolicy {
    fn decide(&mut self, snapshot: &Snapshot) -> Result<Direction, PolicyError> {
        ensure_legal(snapshot)?;

        if self.phase == Phase::Exploring && self.at_revisited_junction(snapshot) {
            debug!(
                position = %snapshot.position,
                visited = self.visited.len(),
                "perimeter covered, seeking"
            );
            self.phase = Phase::Seeking;
        }

        let choice = match self.phase {
            Phase::Exploring => self.follow_wall(snapshot),
            Phase::Seeking => match self.line_of_sight(snapshot) {
                Some(direction) => direction,
                None => self.wander(snapshot),
            },
        };

        self.last_direction = choice;
        Ok(choice)
    }

    fn name(&self) -> &str {
        "perimeter_seek"
    }
}
