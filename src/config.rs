//! Configuration for the policies and the episode runner.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors reported by [`PolicyConfig::validate`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Scan radius must be at least 1")]
    ZeroScanRadius,

    #[error("Persistence probability must lie in [0, 1], got {0}")]
    InvalidProbability(f64),
}

/// Tuning parameters of the perimeter-then-seek policy.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PolicyConfig {
    /// Maximum axis distance, in cells, of the line-of-sight scan.
    pub scan_radius: u32,
    /// A cell is a junction when it offers strictly more legal moves than this.
    pub junction_threshold: usize,
    /// Probability of repeating the last move when no item is visible.
    pub persist_probability: f64,
}

impl PolicyConfig {
    /// Checks that every parameter is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.scan_radius == 0 {
            return Err(ConfigError::ZeroScanRadius);
        }
        if !(0.0..=1.0).contains(&self.persist_probability) {
            return Err(ConfigError::InvalidProbability(self.persist_probability));
        }
        Ok(())
    }
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            scan_radius: 5,
            junction_threshold: 3,
            persist_probability: 0.5,
        }
    }
}

/// Limits applied by the [`Runner`](crate::runner::Runner).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RunConfig {
    /// Hard cap on the number of ticks in one episode.
    pub max_ticks: u32,
    /// End the episode as soon as the environment reports it is terminal.
    pub stop_when_terminal: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            max_ticks: 1000,
            stop_when_terminal: true,
        }
    }
}
