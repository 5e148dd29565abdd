//! The sensing/actuation boundary between policies and the host simulation.
//!
//! A host implements [`Environment`]; each tick the runner captures a
//! [`Snapshot`] from it, hands the snapshot to a policy and commits the
//! returned move back through [`Environment::commit`].

pub mod error;
pub mod maze;

pub use error::{LayoutError, SnapshotError};
pub use maze::Maze;

use std::collections::HashSet;

use crate::geometry::{Direction, Position};

/// Sensing and actuation interface exposed by a host simulation.
pub trait Environment {
    /// Moves the agent may execute this tick.
    fn legal_moves(&self) -> Vec<Direction>;

    /// The agent's current cell.
    fn position(&self) -> Position;

    /// Adversary cells, in a stable order.
    fn adversary_positions(&self) -> Vec<Position>;

    /// Remaining collectible items.
    fn item_positions(&self) -> HashSet<Position>;

    /// Remaining capsules. Hosts without capsules keep the default.
    fn capsule_positions(&self) -> HashSet<Position> {
        HashSet::new()
    }

    /// Static walls.
    fn obstacle_positions(&self) -> HashSet<Position>;

    /// The agent's current orientation.
    fn facing(&self) -> Direction;

    /// Finalizes the chosen move. The host may validate or transform it and
    /// returns the move it actually executed.
    fn commit(&mut self, direction: Direction, legal: &[Direction]) -> Direction;

    /// Whether the episode has reached a natural end.
    fn is_terminal(&self) -> bool {
        false
    }
}

/// Read-only view of the environment for a single tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub legal: Vec<Direction>,
    pub position: Position,
    pub adversaries: Vec<Position>,
    pub items: HashSet<Position>,
    pub capsules: HashSet<Position>,
    pub obstacles: HashSet<Position>,
    pub facing: Direction,
}

impl Snapshot {
    /// Captures the current state of `env`.
    pub fn observe<E: Environment + ?Sized>(env: &E) -> Self {
        Self {
            legal: env.legal_moves(),
            position: env.position(),
            adversaries: env.adversary_positions(),
            items: env.item_positions(),
            capsules: env.capsule_positions(),
            obstacles: env.obstacle_positions(),
            facing: env.facing(),
        }
    }

    /// Starts a snapshot by hand; used by hosts that do not implement
    /// [`Environment`] and by tests.
    pub fn builder() -> SnapshotBuilder {
        SnapshotBuilder::default()
    }

    /// Returns true if `direction` is among the legal moves.
    pub fn is_legal(&self, direction: Direction) -> bool {
        self.legal.contains(&direction)
    }

    /// Legal moves with `excluded` removed.
    pub fn legal_without(&self, excluded: Direction) -> Vec<Direction> {
        self.legal
            .iter()
            .copied()
            .filter(|d| *d != excluded)
            .collect()
    }

    /// Manhattan distance from the agent to each adversary, in adversary order.
    pub fn adversary_distances(&self) -> Vec<u32> {
        self.adversaries
            .iter()
            .map(|a| self.position.manhattan(a))
            .collect()
    }
}

/// Incremental constructor for [`Snapshot`].
///
/// Legal moves, position and facing are required; the collections default to
/// empty.
#[derive(Debug, Default, Clone)]
pub struct SnapshotBuilder {
    legal: Option<Vec<Direction>>,
    position: Option<Position>,
    facing: Option<Direction>,
    adversaries: Vec<Position>,
    items: HashSet<Position>,
    capsules: HashSet<Position>,
    obstacles: HashSet<Position>,
}

impl SnapshotBuilder {
    /// Required.
    pub fn legal(mut self, legal: impl IntoIterator<Item = Direction>) -> Self {
        self.legal = Some(legal.into_iter().collect());
        self
    }

    /// Required.
    pub fn position(mut self, position: impl Into<Position>) -> Self {
        self.position = Some(position.into());
        self
    }

    /// Required.
    pub fn facing(mut self, facing: Direction) -> Self {
        self.facing = Some(facing);
        self
    }

    pub fn adversaries(mut self, adversaries: impl IntoIterator<Item = Position>) -> Self {
        self.adversaries = adversaries.into_iter().collect();
        self
    }

    pub fn items(mut self, items: impl IntoIterator<Item = Position>) -> Self {
        self.items = items.into_iter().collect();
        self
    }

    pub fn capsules(mut self, capsules: impl IntoIterator<Item = Position>) -> Self {
        self.capsules = capsules.into_iter().collect();
        self
    }

    pub fn obstacles(mut self, obstacles: impl IntoIterator<Item = Position>) -> Self {
        self.obstacles = obstacles.into_iter().collect();
        self
    }

    /// Finishes the snapshot, failing on the first missing required field.
    pub fn build(self) -> Result<Snapshot, SnapshotError> {
        Ok(Snapshot {
            legal: self.legal.ok_or(SnapshotError::MissingField("legal"))?,
            position: self
                .position
                .ok_or(SnapshotError::MissingField("position"))?,
            facing: self.facing.ok_or(SnapshotError::MissingField("facing"))?,
            adversaries: self.adversaries,
            items: self.items,
            capsules: self.capsules,
            obstacles: self.obstacles,
        })
    }
}
