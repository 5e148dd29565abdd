//! Policy trait and implementations.

pub mod error;
pub mod perimeter;
pub mod persistence;
pub mod random;
pub mod sensing;
pub mod trait_;
pub mod west;

pub use error::PolicyError;
pub use perimeter::{PerimeterSeekPolicy, Phase};
pub use persistence::PersistencePolicy;
pub use random::RandomPolicy;
pub use sensing::SensingPolicy;
pub use trait_::Policy;
pub use west::GoWestPolicy;

use crate::environment::Snapshot;

/// Fails with [`PolicyError::NoLegalMove`] when the snapshot offers nothing.
pub(crate) fn ensure_legal(snapshot: &Snapshot) -> Result<(), PolicyError> {
    if snapshot.legal.is_empty() {
        return Err(PolicyError::NoLegalMove(snapshot.position));
    }
    Ok(())
}
