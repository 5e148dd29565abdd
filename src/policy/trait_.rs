//! Policy trait shared by every agent.

use super::error::PolicyError;
use crate::environment::Snapshot;
use crate::geometry::Direction;

/// A decision rule that maps one environment snapshot to one move.
///
/// Implementations may keep state across ticks (visited cells, the previous
/// move) but must always return a direction contained in `snapshot.legal`.
pub trait Policy: Send + Sync {
    /// Chooses the move for this tick.
    ///
    /// # Errors
    ///
    /// [`PolicyError::NoLegalMove`] when the snapshot offers no legal move.
    fn decide(&mut self, snapshot: &Snapshot) -> Result<Direction, PolicyError>;

    /// Returns a human-readable name for this policy.
    fn name(&self) -> &str;
}
