//! read-only view of the game handed to renderers
use crate::types::{Cell, GameState};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An immutable copy of everything a renderer needs to draw a frame. The
/// engine builds a fresh one after every accepted move; nothing in here
/// aliases the engine's own containers, so holding on to old snapshots is
/// fine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// side length of the square grid
    pub grid_size: i32,
    /// snake body ordered tail first, head last
    pub segments: Vec<Cell>,
    /// the current apple, `None` once the game has been won
    pub apple: Option<Cell>,
    /// apples eaten so far
    pub score: u32,
    /// whether the game is still running
    pub state: GameState,
}

impl Snapshot {
    /// the snake's head, the last segment
    pub fn head(&self) -> Option<Cell> {
        self.segments.last().copied()
    }

    /// the snake's tail, the first segment
    pub fn tail(&self) -> Option<Cell> {
        self.segments.first().copied()
    }

    /// current snake length in cells
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// true when there are no segments, which a live engine never produces
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        for i in 0..self.grid_size {
            let k = self.grid_size - i - 1;
            let row = (0..self.grid_size).map(|j| {
                let position = Cell { x: j, y: k };
                if self.apple == Some(position) {
                    'a'
                } else if self.head() == Some(position) {
                    'H'
                } else if self.segments.contains(&position) {
                    's'
                } else {
                    '.'
                }
            });
            writeln!(f, "{}", row.format(" "))?;
        }
        write!(f, "score: {} state: {}", self.score, self.state)
    }
}
