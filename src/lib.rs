//! mazewalk - reactive move policies for a grid-maze agent
//!
//! Policies observe a per-tick [`Snapshot`](environment::Snapshot) of the
//! maze (legal moves, position, adversaries, items, walls) and return one
//! [`Direction`](geometry::Direction). The central one is the
//! [`PerimeterSeekPolicy`](policy::PerimeterSeekPolicy), which follows the
//! left-hand wall until the boundary is covered and then hunts items along
//! lines of sight.

pub mod config;
pub mod environment;
pub mod geometry;
pub mod policy;
pub mod runner;

pub use config::{ConfigError, PolicyConfig, RunConfig};
pub use environment::{Environment, Maze, Snapshot};
pub use geometry::{Direction, Position};
pub use policy::{Policy, PolicyError};
pub use runner::{EpisodeReport, Runner};
