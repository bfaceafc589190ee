//! Construction errors

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("Invalid grid dimensions {rows}x{columns}: both must be positive and fit in i32")]
    InvalidDimensions { rows: usize, columns: usize },

    #[error("A {rows}x{columns} grid cannot hold the initial snake: needs at least {min_columns} columns")]
    SnakeDoesNotFit {
        rows: usize,
        columns: usize,
        min_columns: usize,
    },
}
