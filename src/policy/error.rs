use thiserror::Error;

use crate::geometry::Position;

/// Errors a policy can raise while deciding.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PolicyError {
    #[error("No legal move available at {0}")]
    NoLegalMove(Position),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_legal_move_display() {
        let e = PolicyError::NoLegalMove(Position::new(3, 4));
        assert_eq!(e.to_string(), "No legal move available at (3, 4)");
    }
}
