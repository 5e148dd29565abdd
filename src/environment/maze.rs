//! A minimal grid host used to exercise policies end-to-end.
//!
//! Adversaries are static and nothing is scored: the maze only tracks walls,
//! remaining items and the agent's pose.

use std::collections::HashSet;
use std::str::FromStr;

use petgraph::graphmap::UnGraphMap;
use petgraph::visit::Bfs;
use tracing::{debug, warn};

use super::error::LayoutError;
use super::Environment;
use crate::geometry::{Direction, Position};

/// Rectangular maze with walls, food, capsules and static adversaries.
///
/// Cell `(0, 0)` is the bottom-left corner; `y` grows northward.
#[derive(Debug, Clone)]
pub struct Maze {
    width: i32,
    height: i32,
    walls: HashSet<Position>,
    food: HashSet<Position>,
    capsules: HashSet<Position>,
    adversaries: Vec<Position>,
    agent: Position,
    facing: Direction,
    collected: usize,
}

impl Maze {
    /// An open `width` × `height` grid with the agent at `start`, facing `Stop`.
    pub fn open(width: i32, height: i32, start: Position) -> Self {
        Self {
            width,
            height,
            walls: HashSet::new(),
            food: HashSet::new(),
            capsules: HashSet::new(),
            adversaries: Vec::new(),
            agent: start,
            facing: Direction::Stop,
            collected: 0,
        }
    }

    /// Adds a food item.
    pub fn with_item(mut self, position: Position) -> Self {
        self.food.insert(position);
        self
    }

    /// Adds a capsule.
    pub fn with_capsule(mut self, position: Position) -> Self {
        self.capsules.insert(position);
        self
    }

    /// Adds a wall.
    pub fn with_obstacle(mut self, position: Position) -> Self {
        self.walls.insert(position);
        self
    }

    /// Adds a static adversary.
    pub fn with_adversary(mut self, position: Position) -> Self {
        self.adversaries.push(position);
        self
    }

    /// Number of columns.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Number of food items eaten so far.
    pub fn collected(&self) -> usize {
        self.collected
    }

    /// Returns true if `position` is inside the grid and not a wall.
    pub fn is_open(&self, position: Position) -> bool {
        (0..self.width).contains(&position.x)
            && (0..self.height).contains(&position.y)
            && !self.walls.contains(&position)
    }

    /// Every open cell connected to the agent's current cell.
    pub fn reachable_cells(&self) -> HashSet<Position> {
        let mut graph = UnGraphMap::<Position, ()>::new();
        if !self.is_open(self.agent) {
            return HashSet::new();
        }
        graph.add_node(self.agent);
        for x in 0..self.width {
            for y in 0..self.height {
                let cell = Position::new(x, y);
                if !self.is_open(cell) {
                    continue;
                }
                graph.add_node(cell);
                for direction in [Direction::North, Direction::East] {
                    if let Some(next) = cell.step(direction).filter(|n| self.is_open(*n)) {
                        graph.add_edge(cell, next, ());
                    }
                }
            }
        }

        let mut reachable = HashSet::new();
        let mut bfs = Bfs::new(&graph, self.agent);
        while let Some(cell) = bfs.next(&graph) {
            reachable.insert(cell);
        }
        reachable
    }
}

impl FromStr for Maze {
    type Err = LayoutError;

    /// Parses a layout where `%` is a wall, `.` food, `o` a capsule, `P` the
    /// agent and `G` an adversary. The first line is the northern edge.
    fn from_str(layout: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = layout
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .filter(|line| !line.is_empty())
            .collect();
        let expected = rows.first().ok_or(LayoutError::Empty)?.chars().count();
        let height = rows.len() as i32;

        let mut maze = Maze::open(expected as i32, height, Position::new(0, 0));
        let mut agent = None;

        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != expected {
                return Err(LayoutError::RaggedRow {
                    row,
                    expected,
                    found,
                });
            }
            let y = height - 1 - row as i32;
            for (column, tile) in line.chars().enumerate() {
                let cell = Position::new(column as i32, y);
                match tile {
                    '%' => {
                        maze.walls.insert(cell);
                    }
                    '.' => {
                        maze.food.insert(cell);
                    }
                    'o' => {
                        maze.capsules.insert(cell);
                    }
                    'G' => maze.adversaries.push(cell),
                    'P' => {
                        if agent.replace(cell).is_some() {
                            return Err(LayoutError::DuplicateAgent);
                        }
                    }
                    ' ' => {}
                    _ => return Err(LayoutError::UnknownTile { tile, row, column }),
                }
            }
        }

        maze.agent = agent.ok_or(LayoutError::MissingAgent)?;
        Ok(maze)
    }
}

impl Environment for Maze {
    fn legal_moves(&self) -> Vec<Direction> {
        let mut legal: Vec<Direction> = [
            Direction::North,
            Direction::South,
            Direction::East,
            Direction::West,
        ]
        .into_iter()
        .filter(|d| self.agent.step(*d).is_some_and(|next| self.is_open(next)))
        .collect();
        legal.push(Direction::Stop);
        legal
    }

    fn position(&self) -> Position {
        self.agent
    }

    fn adversary_positions(&self) -> Vec<Position> {
        self.adversaries.clone()
    }

    fn item_positions(&self) -> HashSet<Position> {
        self.food.clone()
    }

    fn capsule_positions(&self) -> HashSet<Position> {
        self.capsules.clone()
    }

    fn obstacle_positions(&self) -> HashSet<Position> {
        self.walls.clone()
    }

    fn facing(&self) -> Direction {
        self.facing
    }

    fn commit(&mut self, direction: Direction, legal: &[Direction]) -> Direction {
        let direction = if legal.contains(&direction) {
            direction
        } else {
            warn!(%direction, position = %self.agent, "illegal move replaced by stop");
            Direction::Stop
        };

        if let Some(next) = self.agent.step(direction) {
            self.agent = next;
        }
        self.facing = direction;
        if self.food.remove(&self.agent) {
            self.collected += 1;
            debug!(position = %self.agent, remaining = self.food.len(), "item collected");
        }
        self.capsules.remove(&self.agent);
        direction
    }

    fn is_terminal(&self) -> bool {
        self.food.is_empty()
    }
}
