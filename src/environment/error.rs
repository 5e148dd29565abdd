use thiserror::Error;

/// A snapshot was assembled without one of its required fields.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    #[error("Snapshot is missing required field `{0}`")]
    MissingField(&'static str),
}

/// Errors raised while parsing a maze layout.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("Layout is empty")]
    Empty,

    #[error("Row {row} has width {found}, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Unknown tile {tile:?} at row {row}, column {column}")]
    UnknownTile {
        tile: char,
        row: usize,
        column: usize,
    },

    #[error("Layout has no agent start tile")]
    MissingAgent,

    #[error("Layout has more than one agent start tile")]
    DuplicateAgent,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_display() {
        let e = SnapshotError::MissingField("position");
        assert_eq!(
            e.to_string(),
            "Snapshot is missing required field `position`"
        );
    }

    #[test]
    fn unknown_tile_display() {
        let e = LayoutError::UnknownTile {
            tile: '#',
            row: 1,
            column: 4,
        };
        assert_eq!(e.to_string(), "Unknown tile '#' at row 1, column 4");
    }
}
