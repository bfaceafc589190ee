//! Greedy steering for headless runs.
//!
//! The autopilot plays the role of the input device: it looks at the world
//! between ticks and picks the next heading. It never looks more than one
//! cell ahead, so it can still box itself in.

use arrayvec::ArrayVec;

use crate::core::GridWorld;
use crate::types::{Direction, Position};

/// Stateless one-step lookahead policy
#[derive(Debug, Clone, Copy, Default)]
pub struct Autopilot;

impl Autopilot {
    pub fn new() -> Self {
        Self
    }

    /// Would the head survive entering `pos` on the next tick?
    pub fn is_safe<R>(world: &GridWorld<R>, pos: Position) -> bool {
        // The tail moves out this tick.
        pos == world.tail_position() || !world.cell(pos).is_fatal()
    }

    /// Directions that do not end the game next tick, in [`Direction::ALL`] order
    pub fn safe_directions<R>(world: &GridWorld<R>) -> ArrayVec<Direction, 4> {
        let head = world.head_position();
        Direction::ALL
            .into_iter()
            .filter(|&d| Self::is_safe(world, head.translate(d)))
            .collect()
    }

    /// Pick the next heading
    ///
    /// Among safe directions, the one closest to the food wins; ties keep the
    /// current heading. With no food on the grid the current heading is kept
    /// while it is safe. When nothing is safe the current heading is returned.
    pub fn choose<R>(&self, world: &GridWorld<R>) -> Direction {
        let current = world.direction();
        let safe = Self::safe_directions(world);
        let head = world.head_position();

        match world.food_position() {
            Some(food) => safe
                .iter()
                .copied()
                .min_by_key(|&d| (head.translate(d).distance(food), d != current))
                .unwrap_or(current),
            None if safe.contains(&current) => current,
            None => safe.first().copied().unwrap_or(current),
        }
    }

    /// Choose a heading and apply it to `world`
    pub fn steer<R>(&self, world: &mut GridWorld<R>) -> Direction {
        let direction = self.choose(world);
        world.change_direction(direction);
        direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SimpleRng;

    fn world() -> GridWorld<SimpleRng> {
        GridWorld::seeded(5, 5, 12345).unwrap()
    }

    #[test]
    fn test_initial_safe_directions_exclude_neck() {
        let w = world();
        let safe = Autopilot::safe_directions(&w);
        assert!(!safe.contains(&Direction::Left));
        assert!(safe.contains(&Direction::Up));
        assert!(safe.contains(&Direction::Down));
        assert!(safe.contains(&Direction::Right));
    }

    #[test]
    fn test_edge_is_unsafe() {
        let mut w = world();
        w.change_direction(Direction::Right);
        // head (2,3) -> (2,4): cell past the right edge becomes unsafe
        while w.head_position().col < 4 && !w.is_over() {
            w.step();
        }
        if !w.is_over() {
            assert!(!Autopilot::safe_directions(&w).contains(&Direction::Right));
        }
    }

    #[test]
    fn test_choice_is_always_safe_when_possible() {
        let pilot = Autopilot::new();
        let mut w = GridWorld::seeded(8, 8, 7).unwrap();
        for _ in 0..200 {
            if w.is_over() {
                break;
            }
            let safe = Autopilot::safe_directions(&w);
            let d = pilot.steer(&mut w);
            if !safe.is_empty() {
                assert!(safe.contains(&d));
            }
            w.step();
        }
    }

    #[test]
    fn test_choice_moves_towards_food() {
        let w = world();
        let food = w.food_position().unwrap();
        let head = w.head_position();
        let chosen = Autopilot::new().choose(&w);
        let best = Autopilot::safe_directions(&w)
            .iter()
            .map(|&d| head.translate(d).distance(food))
            .min()
            .unwrap();
        assert_eq!(head.translate(chosen).distance(food), best);
    }
}
