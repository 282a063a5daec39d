//! vocabulary types for the toroidal snake board
use serde::{Deserialize, Serialize};
use std::fmt;

/// A vector with which to do positional math
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vector {
    /// x component
    pub x: i32,
    /// y component
    pub y: i32,
}

impl Vector {
    /// rotates this vector a quarter turn in the snake's "left" sense
    pub fn rotate_left(self) -> Vector {
        Vector {
            x: self.y,
            y: -self.x,
        }
    }

    /// rotates this vector a quarter turn in the snake's "right" sense
    pub fn rotate_right(self) -> Vector {
        Vector {
            x: -self.y,
            y: self.x,
        }
    }
}

/// A single cell on the toroidal grid. Coordinates always satisfy
/// `0 <= x, y < grid_size` after wrapping arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    /// x position
    pub x: i32,
    /// y position
    pub y: i32,
}

impl Cell {
    /// adds a direction vector to this cell, wrapping modulo `grid_size` on
    /// each axis independently. `rem_euclid` keeps negative intermediate
    /// coordinates on the grid.
    pub fn wrapping_add(self, v: Vector, grid_size: i32) -> Cell {
        Cell {
            x: (self.x + v.x).rem_euclid(grid_size),
            y: (self.y + v.y).rem_euclid(grid_size),
        }
    }

    /// the vector pointing from `other` to this cell, unwrapped
    pub fn sub(self, other: Cell) -> Vector {
        Vector {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

/// Represents a relative-turn control input. There are no absolute-direction
/// controls, the snake only knows forward and its two quarter turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    #[allow(missing_docs)]
    Forward,
    #[allow(missing_docs)]
    Left,
    #[allow(missing_docs)]
    Right,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Forward => write!(f, "forward"),
            Command::Left => write!(f, "left"),
            Command::Right => write!(f, "right"),
        }
    }
}

impl Command {
    /// the direction vector this command produces given the snake's current
    /// orientation
    pub fn direction(self, orientation: Vector) -> Vector {
        match self {
            Command::Forward => orientation,
            Command::Left => orientation.rotate_left(),
            Command::Right => orientation.rotate_right(),
        }
    }

    /// returns a vec of all possible commands
    pub fn all() -> Vec<Command> {
        vec![Command::Forward, Command::Left, Command::Right]
    }
}

/// Life-cycle of a game. `Won` and `Lost` are terminal, the engine ignores
/// every control input once it has reached either one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    #[allow(missing_docs)]
    Running,
    #[allow(missing_docs)]
    Won,
    #[allow(missing_docs)]
    Lost,
}

impl GameState {
    /// checks if this state is terminal
    pub fn is_over(self) -> bool {
        !matches!(self, GameState::Running)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameState::Running => write!(f, "running"),
            GameState::Won => write!(f, "won"),
            GameState::Lost => write!(f, "lost"),
        }
    }
}
