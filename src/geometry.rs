//! Grid geometry: positions, compass directions and rotations.
//!
//! Coordinates follow the maze convention where NORTH increases `y` and EAST
//! increases `x`.

use std::collections::HashSet;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A cell on the maze grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Creates a new position.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step in `direction`.
    ///
    /// `Direction::Stop` returns `self`; `None` past the edge of the
    /// coordinate space.
    pub fn step(&self, direction: Direction) -> Option<Self> {
        self.step_by(direction, 1)
    }

    /// The cell `distance` steps away along `direction`, or `None` when it
    /// cannot be represented.
    pub fn step_by(&self, direction: Direction, distance: i32) -> Option<Self> {
        let (dx, dy) = direction.offset();
        Some(Self {
            x: self.x.checked_add(dx.checked_mul(distance)?)?,
            y: self.y.checked_add(dy.checked_mul(distance)?)?,
        })
    }

    /// Manhattan distance to another position.
    pub fn manhattan(&self, other: &Position) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Number of steps from `self` to `other` along `direction`.
    ///
    /// `None` unless `other` lies on that ray at least one step away.
    pub fn axis_distance(&self, other: &Position, direction: Direction) -> Option<u32> {
        let dx = i64::from(other.x) - i64::from(self.x);
        let dy = i64::from(other.y) - i64::from(self.y);
        let along = match direction {
            Direction::North if dx == 0 => dy,
            Direction::South if dx == 0 => -dy,
            Direction::East if dy == 0 => dx,
            Direction::West if dy == 0 => -dx,
            _ => return None,
        };
        u32::try_from(along).ok().filter(|d| *d > 0)
    }

    /// Returns true if no obstacle lies on cells `1..=distance` along `direction`.
    pub fn has_clear_path(
        &self,
        direction: Direction,
        distance: u32,
        obstacles: &HashSet<Position>,
    ) -> bool {
        !obstacles
            .iter()
            .any(|o| matches!(self.axis_distance(o, direction), Some(d) if d <= distance))
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A discrete move. `Stop` keeps the agent in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Direction {
    North,
    South,
    East,
    West,
    Stop,
}

impl Direction {
    /// Compass directions in clockwise order, starting at north.
    ///
    /// Equal-distance sightings are broken in this order.
    pub const COMPASS: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Maps `Stop` to `North`; compass directions are unchanged.
    pub fn normalized(self) -> Self {
        match self {
            Direction::Stop => Direction::North,
            other => other,
        }
    }

    /// Rotates by a number of quarter turns (positive is clockwise).
    ///
    /// `Stop` rotates as if it were `North`.
    pub fn rotate(self, clockwise_steps: i32) -> Self {
        let index = match self {
            Direction::North | Direction::Stop => 0,
            Direction::East => 1,
            Direction::South => 2,
            Direction::West => 3,
        };
        Self::COMPASS[(index + clockwise_steps).rem_euclid(4) as usize]
    }

    /// Quarter turn counter-clockwise.
    pub fn left(self) -> Self {
        self.rotate(-1)
    }

    /// Quarter turn clockwise.
    pub fn right(self) -> Self {
        self.rotate(1)
    }

    /// Half turn.
    pub fn reverse(self) -> Self {
        self.rotate(2)
    }

    /// Unit `(dx, dy)` displacement of this move.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (0, 1),
            Direction::South => (0, -1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
            Direction::Stop => (0, 0),
        }
    }

    /// Returns true for `Direction::Stop`.
    pub fn is_stop(self) -> bool {
        self == Direction::Stop
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::North => write!(f, "north"),
            Direction::South => write!(f, "south"),
            Direction::East => write!(f, "east"),
            Direction::West => write!(f, "west"),
            Direction::Stop => write!(f, "stop"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_and_right_are_quarter_turns() {
        assert_eq!(Direction::North.left(), Direction::West);
        assert_eq!(Direction::West.left(), Direction::South);
        assert_eq!(Direction::South.left(), Direction::East);
        assert_eq!(Direction::East.left(), Direction::North);
        assert_eq!(Direction::North.right(), Direction::East);
        assert_eq!(Direction::West.right(), Direction::North);
    }

    #[test]
    fn reverse_is_two_lefts() {
        for d in Direction::COMPASS {
            assert_eq!(d.reverse(), d.left().left());
            assert_eq!(d.reverse().reverse(), d);
        }
    }

    #[test]
    fn stop_rotates_as_north() {
        assert_eq!(Direction::Stop.left(), Direction::West);
        assert_eq!(Direction::Stop.rotate(0), Direction::North);
        assert_eq!(Direction::Stop.rotate(-6), Direction::South);
    }

    #[test]
    fn step_follows_compass_convention() {
        let p = Position::new(2, 2);
        assert_eq!(p.step(Direction::North), Some(Position::new(2, 3)));
        assert_eq!(p.step(Direction::East), Some(Position::new(3, 2)));
        assert_eq!(p.step(Direction::South), Some(Position::new(2, 1)));
        assert_eq!(p.step(Direction::West), Some(Position::new(1, 2)));
        assert_eq!(p.step(Direction::Stop), Some(p));
        assert_eq!(p.step_by(Direction::West, 3), Some(Position::new(-1, 2)));
    }

    #[test]
    fn step_past_coordinate_limit_is_none() {
        let edge = Position::new(i32::MAX, i32::MIN);
        assert_eq!(edge.step(Direction::East), None);
        assert_eq!(edge.step(Direction::South), None);
        assert_eq!(
            edge.step(Direction::West),
            Some(Position::new(i32::MAX - 1, i32::MIN))
        );
        let origin = Position::new(0, 0);
        assert_eq!(origin.step_by(Direction::West, i32::MIN), None);
    }

    #[test]
    fn axis_distance_only_along_the_ray() {
        let origin = Position::new(0, 0);
        let north = Position::new(0, 3);
        assert_eq!(origin.axis_distance(&north, Direction::North), Some(3));
        assert_eq!(origin.axis_distance(&north, Direction::South), None);
        assert_eq!(origin.axis_distance(&north, Direction::East), None);
        assert_eq!(origin.axis_distance(&origin, Direction::North), None);
        let off_axis = Position::new(2, 1);
        assert_eq!(origin.axis_distance(&off_axis, Direction::East), None);
    }

    #[test]
    fn axis_distance_spans_whole_coordinate_range() {
        let west_edge = Position::new(i32::MIN, 0);
        let east_edge = Position::new(i32::MAX, 0);
        assert_eq!(
            west_edge.axis_distance(&east_edge, Direction::East),
            Some(u32::MAX)
        );
        assert_eq!(
            east_edge.axis_distance(&west_edge, Direction::West),
            Some(u32::MAX)
        );
    }

    #[test]
    fn manhattan_distance() {
        let a = Position::new(0, 0);
        let b = Position::new(-3, 4);
        assert_eq!(a.manhattan(&b), 7);
        assert_eq!(b.manhattan(&a), 7);
    }

    #[test]
    fn clear_path_checks_every_cell_up_to_target() {
        let origin = Position::new(0, 0);
        let walls: HashSet<Position> = [Position::new(0, 2)].into_iter().collect();
        assert!(origin.has_clear_path(Direction::North, 1, &walls));
        assert!(!origin.has_clear_path(Direction::North, 2, &walls));
        assert!(!origin.has_clear_path(Direction::North, 4, &walls));
        assert!(origin.has_clear_path(Direction::East, 5, &walls));
        let open = HashSet::new();
        assert!(origin.has_clear_path(Direction::North, u32::MAX - 1, &open));
    }

    #[test]
    fn clear_path_at_coordinate_limit() {
        let edge = Position::new(i32::MAX - 1, 0);
        let walls: HashSet<Position> = [Position::new(i32::MAX, 0)].into_iter().collect();
        assert!(!edge.has_clear_path(Direction::East, 1, &walls));
        assert!(edge.has_clear_path(Direction::West, u32::MAX, &walls));
    }
}
