//! Rasterization of the cluster into a square grayscale grid.
//!
//! This is the pure half of the rendering collaborator: it produces a
//! row-major byte buffer; encoding (PNG, on-screen texture, ...) is the
//! consumer's job.

use crate::error::RasterError;
use crate::types::Cell;

/// Grid value for unoccupied cells.
pub const BACKGROUND: u8 = 0xFF;
/// Grid value for cluster cells.
pub const FOREGROUND: u8 = 0x00;

/// Rasterizes `cells` into a `size × size` row-major grid.
///
/// Each cell `(x, y)` marks the grid entry at column `x + size/2`,
/// row `y + size/2` (integer-truncated center offset). A cell whose
/// offset coordinates fall outside `[0, size)` yields
/// [`RasterError::CellOutOfBounds`]; nothing is silently clipped or
/// wrapped.
pub fn rasterize(cells: &[Cell], size: usize) -> Result<Vec<u8>, RasterError> {
    let half = (size / 2) as i64;
    let side = size as i64;
    let mut grid = vec![BACKGROUND; size * size];

    for &cell in cells {
        let col = cell.x as i64 + half;
        let row = cell.y as i64 + half;
        if col < 0 || row < 0 || col >= side || row >= side {
            return Err(RasterError::CellOutOfBounds { cell, size });
        }
        grid[(row * side + col) as usize] = FOREGROUND;
    }
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_cells_at_the_offset_position() {
        let grid = rasterize(&[Cell::ZERO, Cell::new(1, -2)], 8).unwrap();
        assert_eq!(grid.len(), 64);

        // (0, 0) -> row 4, col 4; (1, -2) -> row 2, col 5.
        assert_eq!(grid[4 * 8 + 4], FOREGROUND);
        assert_eq!(grid[2 * 8 + 5], FOREGROUND);

        let marked = grid.iter().filter(|&&v| v == FOREGROUND).count();
        assert_eq!(marked, 2);
    }

    #[test]
    fn empty_cluster_yields_a_blank_grid() {
        let grid = rasterize(&[], 4).unwrap();
        assert!(grid.iter().all(|&v| v == BACKGROUND));
    }

    #[test]
    fn out_of_range_cell_is_an_error() {
        // size 4, half 2: x + 2 must be in [0, 4).
        let err = rasterize(&[Cell::new(2, 0)], 4).unwrap_err();
        assert_eq!(
            err,
            RasterError::CellOutOfBounds {
                cell: Cell::new(2, 0),
                size: 4
            }
        );

        assert!(rasterize(&[Cell::new(-3, 0)], 4).is_err());
        assert!(rasterize(&[Cell::new(0, 2)], 4).is_err());
        assert!(rasterize(&[Cell::new(1, -2)], 4).is_ok());
    }

    #[test]
    fn odd_sizes_truncate_the_center_offset() {
        // size 5, half 2: x in [-2, 2] fits.
        assert!(rasterize(&[Cell::new(2, 2)], 5).is_ok());
        assert!(rasterize(&[Cell::new(-2, -2)], 5).is_ok());
        assert!(rasterize(&[Cell::new(3, 0)], 5).is_err());
    }
}
