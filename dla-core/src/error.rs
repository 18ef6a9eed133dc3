//! Error types for growth and rasterization.

use crate::types::Cell;
use std::fmt;

/// Errors arising from cluster growth.
#[derive(Debug, Clone, PartialEq)]
pub enum GrowError {
    /// A walker's neighbour set was empty, so the walk cannot proceed.
    EmptyNeighbourhood {
        /// Position of the stranded walker.
        cell: Cell,
        /// Spawn radius in effect at the time.
        radius: f32,
    },
    /// A walk exceeded the configured step cap without sticking.
    WalkTimeout {
        /// Number of move steps taken before giving up.
        steps: u64,
    },
    /// The growth configuration is invalid.
    InvalidConfig {
        /// What is wrong with it.
        reason: String,
    },
}

impl fmt::Display for GrowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyNeighbourhood { cell, radius } => {
                write!(
                    f,
                    "walker at ({}, {}) has no neighbours within radius {radius}",
                    cell.x, cell.y
                )
            }
            Self::WalkTimeout { steps } => {
                write!(f, "walk did not stick within {steps} steps")
            }
            Self::InvalidConfig { reason } => {
                write!(f, "invalid configuration: {reason}")
            }
        }
    }
}

impl std::error::Error for GrowError {}

/// Errors arising from rasterizing the cluster to a grid.
#[derive(Debug, Clone, PartialEq)]
pub enum RasterError {
    /// A cell's offset coordinates fall outside the target grid.
    CellOutOfBounds {
        /// The offending cluster cell.
        cell: Cell,
        /// Side length of the target grid.
        size: usize,
    },
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CellOutOfBounds { cell, size } => {
                write!(
                    f,
                    "cell ({}, {}) does not fit a {size}x{size} grid",
                    cell.x, cell.y
                )
            }
        }
    }
}

impl std::error::Error for RasterError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grow_error_messages_name_the_offender() {
        let e = GrowError::EmptyNeighbourhood {
            cell: Cell::new(3, -4),
            radius: 16.0,
        };
        assert_eq!(
            e.to_string(),
            "walker at (3, -4) has no neighbours within radius 16"
        );

        let e = GrowError::WalkTimeout { steps: 500 };
        assert_eq!(e.to_string(), "walk did not stick within 500 steps");

        let e = GrowError::InvalidConfig {
            reason: "dr must be positive, got 0".into(),
        };
        assert!(e.to_string().contains("dr must be positive"));
    }

    #[test]
    fn raster_error_names_cell_and_size() {
        let e = RasterError::CellOutOfBounds {
            cell: Cell::new(40, 0),
            size: 64,
        };
        assert_eq!(e.to_string(), "cell (40, 0) does not fit a 64x64 grid");
    }
}
