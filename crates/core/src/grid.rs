//! Grid module - the fixed-size cell array the snake moves on
//!
//! Dimensions are chosen at construction and never change afterwards.
//! Storage is a flat row-major vector (`row * columns + col`).
//! Lookups past an edge yield [`Cell::OutsideBoundary`]; that value is never stored.

use crate::error::GridError;
use crate::types::{Cell, Position};

/// The playfield - `rows` x `columns` cells in flat storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    columns: usize,
    /// Flat array of cells, row-major order (row * columns + col)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new empty grid
    ///
    /// Both dimensions must be positive and representable as `i32`.
    pub fn new(rows: usize, columns: usize) -> Result<Self, GridError> {
        let invalid = GridError::InvalidDimensions { rows, columns };
        if rows == 0 || columns == 0 || rows > i32::MAX as usize || columns > i32::MAX as usize {
            return Err(invalid);
        }
        let size = rows.checked_mul(columns).ok_or(invalid)?;

        Ok(Self {
            rows,
            columns,
            cells: vec![Cell::Empty; size],
        })
    }

    /// Calculate flat index from a position
    #[inline(always)]
    fn index(&self, pos: Position) -> Option<usize> {
        if !self.contains(pos) {
            return None;
        }
        Some(pos.row as usize * self.columns + pos.col as usize)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Check if position lies within the grid
    pub fn contains(&self, pos: Position) -> bool {
        pos.row >= 0
            && pos.col >= 0
            && (pos.row as usize) < self.rows
            && (pos.col as usize) < self.columns
    }

    /// Get the stored cell at `pos`
    /// Returns None if out of bounds
    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.index(pos).map(|idx| self.cells[idx])
    }

    /// Classify `pos`, mapping out-of-bounds to [`Cell::OutsideBoundary`]
    pub fn classify(&self, pos: Position) -> Cell {
        self.get(pos).unwrap_or(Cell::OutsideBoundary)
    }

    /// Set cell at `pos`
    /// Returns false if out of bounds or if `cell` is the outside sentinel
    pub fn set(&mut self, pos: Position, cell: Cell) -> bool {
        if cell == Cell::OutsideBoundary {
            return false;
        }
        match self.index(pos) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// All positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let columns = self.columns as i32;
        (0..self.rows as i32).flat_map(move |row| (0..columns).map(move |col| Position::new(row, col)))
    }

    /// Lazily scan for empty cells in row-major order
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.positions()
            .zip(self.cells.iter())
            .filter(|(_, cell)| **cell == Cell::Empty)
            .map(|(pos, _)| pos)
    }

    /// Number of cells holding `cell`
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|c| **c == cell).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_rejects_zero_dimensions() {
        assert_eq!(
            Grid::new(0, 5),
            Err(GridError::InvalidDimensions { rows: 0, columns: 5 })
        );
        assert!(Grid::new(5, 0).is_err());
        assert!(Grid::new(i32::MAX as usize + 1, 1).is_err());
        assert!(Grid::new(1, i32::MAX as usize + 1).is_err());
        assert!(Grid::new(1, 1).is_ok());
    }

    #[test]
    fn test_grid_index_calculation() {
        let grid = Grid::new(3, 4).unwrap();
        assert_eq!(grid.index(Position::new(0, 0)), Some(0));
        assert_eq!(grid.index(Position::new(0, 3)), Some(3));
        assert_eq!(grid.index(Position::new(1, 0)), Some(4));
        assert_eq!(grid.index(Position::new(2, 3)), Some(11));
        assert_eq!(grid.index(Position::new(-1, 0)), None);
        assert_eq!(grid.index(Position::new(0, 4)), None);
        assert_eq!(grid.index(Position::new(3, 0)), None);
    }

    #[test]
    fn test_grid_flat_array() {
        let mut grid = Grid::new(5, 5).unwrap();

        assert!(grid.set(Position::new(0, 0), Cell::Food));
        assert!(grid.set(Position::new(2, 3), Cell::SnakeBody));

        assert_eq!(grid.get(Position::new(0, 0)), Some(Cell::Food));
        assert_eq!(grid.get(Position::new(2, 3)), Some(Cell::SnakeBody));

        assert_eq!(grid.cells[0], Cell::Food);
        assert_eq!(grid.cells[2 * 5 + 3], Cell::SnakeBody);
    }

    #[test]
    fn test_outside_sentinel_is_never_stored() {
        let mut grid = Grid::new(2, 2).unwrap();
        assert!(!grid.set(Position::new(0, 0), Cell::OutsideBoundary));
        assert!(!grid.set(Position::new(5, 5), Cell::Food));
        assert_eq!(grid.count(Cell::OutsideBoundary), 0);
        assert_eq!(grid.classify(Position::new(0, -1)), Cell::OutsideBoundary);
        assert_eq!(grid.classify(Position::new(0, 0)), Cell::Empty);
    }

    #[test]
    fn test_empty_positions_row_major() {
        let mut grid = Grid::new(2, 3).unwrap();
        grid.set(Position::new(0, 1), Cell::SnakeBody);
        grid.set(Position::new(1, 0), Cell::Food);

        let empty: Vec<_> = grid.empty_positions().collect();
        assert_eq!(
            empty,
            vec![
                Position::new(0, 0),
                Position::new(0, 2),
                Position::new(1, 1),
                Position::new(1, 2),
            ]
        );

        // Restartable: a second scan yields the same sequence
        assert_eq!(grid.empty_positions().count(), 4);
    }
}
