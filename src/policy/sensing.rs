//! A policy that never moves and only reports what it senses.

use std::collections::HashSet;

use tracing::{info, warn};

use super::ensure_legal;
use super::error::PolicyError;
use super::trait_::Policy;
use crate::environment::Snapshot;
use crate::geometry::{Direction, Position};

/// Stands still and logs the full snapshot at `info` level every tick.
#[derive(Debug, Default)]
pub struct SensingPolicy {
    ticks: u64,
}

impl SensingPolicy {
    /// Creates a policy that has reported nothing yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of snapshots reported so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    fn report(&self, snapshot: &Snapshot) {
        info!(
            tick = self.ticks,
            legal = ?snapshot.legal,
            position = %snapshot.position,
            "sensor report"
        );
        for (adversary, distance) in snapshot
            .adversaries
            .iter()
            .zip(snapshot.adversary_distances())
        {
            info!(position = %adversary, distance, "adversary");
        }
        info!(capsules = ?sorted(&snapshot.capsules), "capsule locations");
        info!(items = ?sorted(&snapshot.items), "item locations");
        info!(obstacles = ?sorted(&snapshot.obstacles), "obstacle locations");
    }
}

fn sorted(cells: &HashSet<Position>) -> Vec<Position> {
    let mut cells: Vec<_> = cells.iter().copied().collect();
    cells.sort();
    cells
}

impl Policy for SensingPolicy {
    fn decide(&mut self, snapshot: &Snapshot) -> Result<Direction, PolicyError> {
        ensure_legal(snapshot)?;
        self.report(snapshot);
        self.ticks += 1;

        if snapshot.is_legal(Direction::Stop) {
            return Ok(Direction::Stop);
        }
        let fallback = snapshot.legal[0];
        warn!(%fallback, "stop is not legal; taking first legal move");
        Ok(fallback)
    }

    fn name(&self) -> &str {
        "sensing"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_stops() {
        let mut policy = SensingPolicy::new();
        let snap = Snapshot::builder()
            .legal([Direction::North, Direction::Stop])
            .position((2, 2))
            .facing(Direction::North)
            .adversaries([Position::new(4, 4)])
            .items([Position::new(2, 3)])
            .obstacles([Position::new(1, 2)])
            .build()
            .unwrap();
        for _ in 0..3 {
            assert_eq!(policy.decide(&snap), Ok(Direction::Stop));
        }
        assert_eq!(policy.ticks(), 3);
    }

    #[test]
    fn falls_back_when_stop_is_illegal() {
        let mut policy = SensingPolicy::new();
        let snap = Snapshot::builder()
            .legal([Direction::East])
            .position((0, 0))
            .facing(Direction::East)
            .build()
            .unwrap();
        assert_eq!(policy.decide(&snap), Ok(Direction::East));
    }
}
