//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no behaviour beyond arithmetic on positions,
//! which keeps them usable from the simulation core, drivers and tests alike.
//!
//! # Coordinates
//!
//! Positions are `(row, col)` pairs. Row 0 is the top of the grid and column 0
//! is the left edge. Coordinates are signed so that a position one step past an
//! edge is still representable; the grid reports such positions as
//! [`Cell::OutsideBoundary`].
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_ROWS` | 20 | Grid height used by the runner |
//! | `DEFAULT_COLUMNS` | 20 | Grid width used by the runner |
//! | `INITIAL_SNAKE_LEN` | 3 | Body length at construction |
//! | `DEFAULT_MAX_STEPS` | 10 000 | Step cap for headless runs |
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Direction, Position};
//!
//! let p = Position::new(2, 3);
//! assert_eq!(p.translate(Direction::Right), Position::new(2, 4));
//! assert_eq!(p.translate(Direction::Up).translate(Direction::Down), p);
//!
//! assert_eq!(Direction::Left.opposite(), Direction::Right);
//! ```

use serde::{Deserialize, Serialize};

/// Grid height used when the runner is given no `--rows`
pub const DEFAULT_ROWS: usize = 20;

/// Grid width used when the runner is given no `--cols`
pub const DEFAULT_COLUMNS: usize = 20;

/// Number of body segments the snake starts with
pub const INITIAL_SNAKE_LEN: usize = 3;

/// Column of the initial tail segment; the body extends rightwards from here
pub const INITIAL_TAIL_COLUMN: i32 = 1;

/// Step cap for headless runs so a looping autopilot terminates
pub const DEFAULT_MAX_STEPS: u32 = 10_000;

/// A cell position on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Move one cell in `direction`
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::{Direction, Position};
    ///
    /// let p = Position::new(0, 0);
    /// assert_eq!(p.translate(Direction::Up), Position::new(-1, 0));
    /// assert_eq!(p.translate(Direction::Down), Position::new(1, 0));
    /// assert_eq!(p.translate(Direction::Left), Position::new(0, -1));
    /// assert_eq!(p.translate(Direction::Right), Position::new(0, 1));
    /// ```
    pub fn translate(&self, direction: Direction) -> Self {
        let (dr, dc) = direction.delta();
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }

    /// Manhattan distance between two positions
    pub fn distance(&self, other: Position) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

/// Direction of travel
///
/// The snake moves one cell per tick in its current direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in declaration order
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit offset as `(d_row, d_col)`
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// The direction pointing the other way
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::Direction;
    ///
    /// assert_eq!(Direction::Up.opposite(), Direction::Down);
    /// assert_eq!(Direction::Right.opposite(), Direction::Left);
    /// ```
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Classification of a grid position
///
/// `OutsideBoundary` is never stored in a grid. It is what a lookup returns
/// for a position past the edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Cell {
    #[default]
    Empty,
    SnakeBody,
    Food,
    OutsideBoundary,
}

impl Cell {
    /// Compact code used by snapshots: 0 empty, 1 snake, 2 food, 3 outside
    pub fn code(&self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::SnakeBody => 1,
            Cell::Food => 2,
            Cell::OutsideBoundary => 3,
        }
    }

    /// True for classifications that end the game when the head enters them
    pub fn is_fatal(&self) -> bool {
        matches!(self, Cell::SnakeBody | Cell::OutsideBoundary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_then_opposite_returns_origin() {
        let origins = [
            Position::new(0, 0),
            Position::new(3, 7),
            Position::new(-2, 5),
        ];
        for p in origins {
            for d in Direction::ALL {
                assert_eq!(p.translate(d).translate(d.opposite()), p, "{:?} {:?}", p, d);
            }
        }
    }

    #[test]
    fn test_opposite_is_involution() {
        for d in Direction::ALL {
            assert_ne!(d.opposite(), d);
            assert_eq!(d.opposite().opposite(), d);
        }
    }

    #[test]
    fn test_distance() {
        let a = Position::new(1, 1);
        assert_eq!(a.distance(a), 0);
        assert_eq!(a.distance(Position::new(4, -1)), 5);
    }

    #[test]
    fn test_cell_codes_and_fatality() {
        assert_eq!(Cell::default(), Cell::Empty);
        assert_eq!(Cell::Food.code(), 2);
        assert!(Cell::SnakeBody.is_fatal());
        assert!(Cell::OutsideBoundary.is_fatal());
        assert!(!Cell::Empty.is_fatal());
        assert!(!Cell::Food.is_fatal());
    }

    #[test]
    fn test_direction_serializes_lowercase() {
        let json = serde_json::to_string(&Direction::Left).unwrap();
        assert_eq!(json, "\"left\"");
    }
}
