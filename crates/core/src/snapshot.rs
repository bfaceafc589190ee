use serde::{Deserialize, Serialize};

use crate::types::{Direction, Position};

/// FNV-1a 64-bit over the snapshot cell codes.
pub fn fnv1a64(bytes: &[u8]) -> u64 {
    let mut h: u64 = 0xcbf29ce484222325;
    for &b in bytes {
        h ^= b as u64;
        h = h.wrapping_mul(0x00000100000001B3);
    }
    h
}

/// Owned copy of everything a driver observes after a tick.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub rows: usize,
    pub columns: usize,
    /// Row-major cell codes, see [`Cell::code`](crate::types::Cell::code).
    pub cells: Vec<u8>,
    pub cells_hash: u64,
    /// Body positions, head first.
    pub snake: Vec<Position>,
    pub direction: Direction,
    pub food: Option<Position>,
    pub score: u32,
    pub ticks: u32,
    pub game_over: bool,
}

impl GameSnapshot {
    /// Reset to the empty state, keeping allocated buffers.
    pub fn clear(&mut self) {
        self.rows = 0;
        self.columns = 0;
        self.cells.clear();
        self.cells_hash = fnv1a64(&[]);
        self.snake.clear();
        self.direction = Direction::Right;
        self.food = None;
        self.score = 0;
        self.ticks = 0;
        self.game_over = false;
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            rows: 0,
            columns: 0,
            cells: Vec::new(),
            cells_hash: 0,
            snake: Vec::new(),
            direction: Direction::Right,
            food: None,
            score: 0,
            ticks: 0,
            game_over: false,
        };
        s.clear();
        s
    }
}
