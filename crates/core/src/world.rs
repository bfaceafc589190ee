//! World module - the complete snake simulation
//!
//! Ties together the grid, the body sequence, the heading and the food
//! source. One call to [`GridWorld::step`] is one tick; drivers call
//! [`GridWorld::change_direction`] between ticks in response to input.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

use crate::error::GridError;
use crate::grid::Grid;
use crate::rng::SimpleRng;
use crate::snapshot::{fnv1a64, GameSnapshot};
use crate::types::{Cell, Direction, Position, INITIAL_SNAKE_LEN, INITIAL_TAIL_COLUMN};

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Head advanced into an empty cell (or the vacated tail cell)
    Moved,
    /// Head advanced onto food; the body grew by one
    Ate,
    /// Head would have entered a fatal cell; the game is now over
    Collided(Cell),
    /// The game was already over; nothing changed
    Finished,
}

impl StepOutcome {
    /// True once the game is over, whether it ended this tick or earlier
    pub fn is_terminal(&self) -> bool {
        matches!(self, StepOutcome::Collided(_) | StepOutcome::Finished)
    }
}

/// Complete simulation state
///
/// Generic over the food RNG so callers can inject a seeded source.
#[derive(Debug, Clone)]
pub struct GridWorld<R = StdRng> {
    grid: Grid,
    /// Head at the front, tail at the back. Never empty.
    body: VecDeque<Position>,
    direction: Direction,
    food: Option<Position>,
    score: u32,
    /// Ticks processed while running, including the fatal one. Saturates.
    ticks: u32,
    game_over: bool,
    rng: R,
}

impl GridWorld<StdRng> {
    /// Create a world whose food placement is seeded from OS entropy
    pub fn new(rows: usize, columns: usize) -> Result<Self, GridError> {
        Self::with_rng(rows, columns, StdRng::from_entropy())
    }
}

impl GridWorld<SimpleRng> {
    /// Create a world with reproducible food placement
    pub fn seeded(rows: usize, columns: usize, seed: u32) -> Result<Self, GridError> {
        Self::with_rng(rows, columns, SimpleRng::new(seed))
    }
}

impl<R: Rng> GridWorld<R> {
    /// Create a world drawing food positions from `rng`
    ///
    /// The snake starts on row `rows / 2`, tail at column 1 and head at
    /// column 3, heading right. One food item is then placed.
    pub fn with_rng(rows: usize, columns: usize, rng: R) -> Result<Self, GridError> {
        let grid = Grid::new(rows, columns)?;

        let min_columns = INITIAL_TAIL_COLUMN as usize + INITIAL_SNAKE_LEN;
        if columns < min_columns {
            return Err(GridError::SnakeDoesNotFit {
                rows,
                columns,
                min_columns,
            });
        }

        let mut world = Self {
            grid,
            body: VecDeque::with_capacity(INITIAL_SNAKE_LEN),
            direction: Direction::Right,
            food: None,
            score: 0,
            ticks: 0,
            game_over: false,
            rng,
        };
        world.add_snake();
        world.place_food();
        Ok(world)
    }

    fn add_snake(&mut self) {
        let row = (self.grid.rows() / 2) as i32;
        let tail = INITIAL_TAIL_COLUMN;
        for col in tail..tail + INITIAL_SNAKE_LEN as i32 {
            self.add_head(Position::new(row, col));
        }
    }

    /// Put food on a uniformly chosen empty cell; no-op on a full grid
    fn place_food(&mut self) {
        let Some(pos) = self.grid.empty_positions().choose(&mut self.rng) else {
            debug!(len = self.body.len(), "no empty cell left for food");
            return;
        };
        self.grid.set(pos, Cell::Food);
        self.food = Some(pos);
        debug!(row = pos.row, col = pos.col, "food placed");
    }

    /// Advance the simulation by one tick
    pub fn step(&mut self) -> StepOutcome {
        if self.game_over {
            return StepOutcome::Finished;
        }
        self.ticks = self.ticks.saturating_add(1);

        let new_head = self.head_position().translate(self.direction);
        let hit = self.will_hit(new_head);
        let outcome = if hit.is_fatal() {
            self.game_over = true;
            debug!(
                score = self.score,
                len = self.body.len(),
                cause = ?hit,
                "game over"
            );
            StepOutcome::Collided(hit)
        } else if hit == Cell::Food {
            self.add_head(new_head);
            self.food = None;
            self.score += 1;
            self.place_food();
            StepOutcome::Ate
        } else {
            self.remove_tail();
            self.add_head(new_head);
            StepOutcome::Moved
        };

        trace!(tick = self.ticks, ?outcome, row = new_head.row, col = new_head.col, "step");
        outcome
    }
}

impl<R> GridWorld<R> {
    /// Classify the cell the head is about to enter
    ///
    /// The current tail counts as empty since it moves out this tick.
    fn will_hit(&self, new_head: Position) -> Cell {
        if !self.grid.contains(new_head) {
            return Cell::OutsideBoundary;
        }
        if new_head == self.tail_position() {
            return Cell::Empty;
        }
        self.grid.classify(new_head)
    }

    fn add_head(&mut self, pos: Position) {
        self.body.push_front(pos);
        self.grid.set(pos, Cell::SnakeBody);
    }

    fn remove_tail(&mut self) {
        if let Some(tail) = self.body.pop_back() {
            self.grid.set(tail, Cell::Empty);
        }
    }

    /// Overwrite the heading. No reversal check is made.
    pub fn change_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    pub fn head_position(&self) -> Position {
        self.body[0]
    }

    pub fn tail_position(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    /// Body positions from head to tail; call again to restart
    pub fn snake_cells(&self) -> impl DoubleEndedIterator<Item = Position> + ExactSizeIterator + '_ {
        self.body.iter().copied()
    }

    /// Grid lookup; positions past an edge read as [`Cell::OutsideBoundary`]
    pub fn cell(&self, pos: Position) -> Cell {
        self.grid.classify(pos)
    }

    pub fn is_over(&self) -> bool {
        self.game_over
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn food_position(&self) -> Option<Position> {
        self.food
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false; the body holds at least one segment
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn columns(&self) -> usize {
        self.grid.columns()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Fill `out`, reusing its buffers.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.rows = self.grid.rows();
        out.columns = self.grid.columns();
        out.cells.clear();
        out.cells.extend(self.grid.cells().iter().map(Cell::code));
        out.cells_hash = fnv1a64(&out.cells);
        out.snake.clear();
        out.snake.extend(self.body.iter().copied());
        out.direction = self.direction;
        out.food = self.food;
        out.score = self.score;
        out.ticks = self.ticks;
        out.game_over = self.game_over;
    }
}
