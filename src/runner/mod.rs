//! Episode runner: the tick loop that connects a policy to a host.
//!
//! Each tick follows the same sequence:
//! observe → decide → commit → record.

pub mod metrics;

pub use metrics::EvaluationMetrics;

use std::collections::HashSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::RunConfig;
use crate::environment::{Environment, Snapshot};
use crate::geometry::Position;
use crate::policy::{Policy, PolicyError};

/// Outcome of a single episode.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EpisodeReport {
    /// Name of the policy that played the episode.
    pub policy: String,
    /// Number of decisions taken.
    pub ticks: u32,
    /// Items present at the start but gone at the end.
    pub items_collected: usize,
    /// Distinct cells occupied, including the start cell.
    pub cells_visited: usize,
    /// Whether the environment reported a natural end.
    pub terminal: bool,
}

/// Drives policies through episodes under a [`RunConfig`].
#[derive(Debug, Clone, Default)]
pub struct Runner {
    config: RunConfig,
}

impl Runner {
    /// Creates a runner with the given limits.
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    /// Limits applied to every episode.
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Plays one episode of `policy` in `env`.
    ///
    /// # Errors
    ///
    /// Propagates the first [`PolicyError`] raised by the policy; the host is
    /// left in the state reached before the failing tick.
    pub fn run<E>(
        &self,
        env: &mut E,
        policy: &mut dyn Policy,
    ) -> Result<EpisodeReport, PolicyError>
    where
        E: Environment + ?Sized,
    {
        let initial_items = env.item_positions().len();
        let mut visited: HashSet<Position> = HashSet::new();
        visited.insert(env.position());

        let mut ticks = 0;
        while ticks < self.config.max_ticks {
            if self.config.stop_when_terminal && env.is_terminal() {
                break;
            }
            let snapshot = Snapshot::observe(&*env);
            let chosen = policy.decide(&snapshot)?;
            let executed = env.commit(chosen, &snapshot.legal);
            ticks += 1;
            visited.insert(env.position());
            debug!(tick = ticks, %chosen, %executed, position = %env.position(), "tick");
        }

        let report = EpisodeReport {
            policy: policy.name().to_string(),
            ticks,
            items_collected: initial_items.saturating_sub(env.item_positions().len()),
            cells_visited: visited.len(),
            terminal: env.is_terminal(),
        };
        info!(
            policy = %report.policy,
            ticks = report.ticks,
            items = report.items_collected,
            cells = report.cells_visited,
            terminal = report.terminal,
            "episode finished"
        );
        Ok(report)
    }

    /// Plays `n_episodes` fresh episodes and aggregates their reports.
    ///
    /// `make_env` and `make_policy` are called once per episode so that no
    /// state leaks between episodes.
    pub fn evaluate<E, FE, FP>(
        &self,
        n_episodes: usize,
        mut make_env: FE,
        mut make_policy: FP,
    ) -> Result<EvaluationMetrics, PolicyError>
    where
        E: Environment,
        FE: FnMut(usize) -> E,
        FP: FnMut(usize) -> Box<dyn Policy>,
    {
        let mut reports = Vec::with_capacity(n_episodes);
        for episode in 0..n_episodes {
            let mut env = make_env(episode);
            let mut policy = make_policy(episode);
            reports.push(self.run(&mut env, policy.as_mut())?);
        }
        Ok(EvaluationMetrics::from_reports(&reports))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PolicyConfig;
    use crate::environment::Maze;
    use crate::geometry::Direction;
    use crate::policy::{PerimeterSeekPolicy, SensingPolicy};

    #[test]
    fn stops_at_max_ticks() {
        let runner = Runner::new(RunConfig {
            max_ticks: 7,
            ..RunConfig::default()
        });
        let mut maze = Maze::open(4, 4, Position::new(0, 0))
            .with_item(Position::new(3, 3));
        let mut policy = SensingPolicy::new();
        let report = runner.run(&mut maze, &mut policy).unwrap();
        assert_eq!(report.ticks, 7);
        assert_eq!(report.cells_visited, 1);
        assert_eq!(report.items_collected, 0);
        assert!(!report.terminal);
        assert_eq!(report.policy, "sensing");
        assert_eq!(policy.ticks(), 7);
    }

    #[test]
    fn terminal_environment_ends_early() {
        let runner = Runner::default();
        let mut maze = Maze::open(3, 1, Position::new(0, 0))
            .with_item(Position::new(0, 0));
        // The agent starts on its only item, which a host only removes on entry.
        let legal = maze.legal_moves();
        maze.commit(Direction::Stop, &legal);
        assert!(maze.is_terminal());

        let mut policy = PerimeterSeekPolicy::seeded(PolicyConfig::default(), 1);
        let report = runner.run(&mut maze, &mut policy).unwrap();
        assert_eq!(report.ticks, 0);
        assert!(report.terminal);
    }

    struct Walled;

    impl Environment for Walled {
        fn legal_moves(&self) -> Vec<Direction> {
            Vec::new()
        }
        fn position(&self) -> Position {
            Position::new(0, 0)
        }
        fn adversary_positions(&self) -> Vec<Position> {
            Vec::new()
        }
        fn item_positions(&self) -> HashSet<Position> {
            HashSet::new()
        }
        fn obstacle_positions(&self) -> HashSet<Position> {
            HashSet::new()
        }
        fn facing(&self) -> Direction {
            Direction::Stop
        }
        fn commit(&mut self, direction: Direction, _legal: &[Direction]) -> Direction {
            direction
        }
    }

    #[test]
    fn policy_error_propagates() {
        let runner = Runner::default();
        let mut policy = PerimeterSeekPolicy::seeded(PolicyConfig::default(), 1);
        assert_eq!(
            runner.run(&mut Walled, &mut policy),
            Err(PolicyError::NoLegalMove(Position::new(0, 0)))
        );
    }
}
