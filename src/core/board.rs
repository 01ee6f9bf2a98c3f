//! Board module - the playfield the snake moves on
//!
//! The board is a fixed rectangle of cells; it stores no occupancy itself
//! (the snake body is the only occupancy there is). Coordinates: (x, y) with
//! x ranging 0..cols left to right and y ranging 0..rows top to bottom.

use crate::types::{Cell, GRID_COLS, GRID_ROWS};

/// Rectangular grid of cells, fixed at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cols: i8,
    rows: i8,
}

impl Board {
    pub fn new(cols: i8, rows: i8) -> Self {
        assert!(cols > 0 && rows > 0, "board must have at least one cell");
        Self { cols, rows }
    }

    pub fn cols(&self) -> i8 {
        self.cols
    }

    pub fn rows(&self) -> i8 {
        self.rows
    }

    /// Total number of cells.
    pub fn capacity(&self) -> usize {
        (self.cols as usize) * (self.rows as usize)
    }

    /// Whether `cell` lies inside the board bounds.
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.cols && cell.y >= 0 && cell.y < self.rows
    }

    /// Center cell, where the snake head starts.
    pub fn center(&self) -> Cell {
        Cell::new(self.cols / 2, self.rows / 2)
    }

    /// The cell at flat index `idx` (row-major order).
    ///
    /// Used by food placement to address the k-th cell without allocating.
    pub fn cell_at(&self, idx: usize) -> Cell {
        debug_assert!(idx < self.capacity());
        Cell::new((idx % self.cols as usize) as i8, (idx / self.cols as usize) as i8)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(GRID_COLS, GRID_ROWS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_board_is_21x21() {
        let board = Board::default();
        assert_eq!(board.cols(), 21);
        assert_eq!(board.rows(), 21);
        assert_eq!(board.capacity(), 441);
        assert_eq!(board.center(), Cell::new(10, 10));
    }

    #[test]
    fn test_bounds() {
        let board = Board::new(5, 4);
        assert!(board.contains(Cell::new(0, 0)));
        assert!(board.contains(Cell::new(4, 3)));
        assert!(!board.contains(Cell::new(5, 0)));
        assert!(!board.contains(Cell::new(0, 4)));
        assert!(!board.contains(Cell::new(-1, 2)));
        assert!(!board.contains(Cell::new(2, -1)));
    }

    #[test]
    fn test_cell_at_row_major() {
        let board = Board::new(3, 2);
        assert_eq!(board.cell_at(0), Cell::new(0, 0));
        assert_eq!(board.cell_at(2), Cell::new(2, 0));
        assert_eq!(board.cell_at(3), Cell::new(0, 1));
        assert_eq!(board.cell_at(5), Cell::new(2, 1));
    }
}
