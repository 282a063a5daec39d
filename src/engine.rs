//! the game-state machine: movement, growth, collision, apples, win/loss
use crate::render::Renderer;
use crate::snapshot::Snapshot;
use crate::types::{Cell, Command, GameState, Vector};
use fxhash::FxHashSet;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;
use std::error::Error;
use std::fmt;
use tracing::instrument;

/// Why a [`GameEngine`] could not be constructed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// the grid must be at least 4x4, smaller boards make initial placement
    /// or win detection degenerate
    GridTooSmall(i32),
    /// the snake needs at least 3 segments so its orientation is always
    /// derivable from the last two
    SnakeTooShort(usize),
    /// the initial horizontal run must fit in one row without wrapping onto
    /// itself
    SnakeTooLong {
        /// requested side length
        grid_size: i32,
        /// requested snake length
        initial_length: usize,
    },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::GridTooSmall(n) => {
                write!(f, "grid size {} is too small, need at least 4", n)
            }
            EngineError::SnakeTooShort(l) => {
                write!(f, "initial length {} is too short, need at least 3", l)
            }
            EngineError::SnakeTooLong {
                grid_size,
                initial_length,
            } => write!(
                f,
                "initial length {} doesn't fit in one row of a size {} grid",
                initial_length, grid_size
            ),
        }
    }
}

impl Error for EngineError {}

/// Single-player snake on a toroidal grid, driven entirely by relative-turn
/// controls. The engine owns all state; renderers only ever see [`Snapshot`]
/// copies. Coordinates wrap modulo the grid size on both axes, so there are
/// no walls to die on, only the snake's own body.
#[derive(Debug)]
pub struct GameEngine<R = SmallRng> {
    grid_size: i32,
    // tail at the front, head at the back
    segments: VecDeque<Cell>,
    // mirrors `segments` exactly, for O(1) membership tests
    occupied: FxHashSet<Cell>,
    apple: Option<Cell>,
    /// apples eaten. Left public so a host can tamper with it, cheating is
    /// part of the interface.
    pub score: u32,
    /// life-cycle state, public for the same reason as `score`. Setting it
    /// back to `Running` revives a dead game.
    pub state: GameState,
    rng: R,
}

impl GameEngine<SmallRng> {
    /// a fresh game with the default initial length of 3 and an
    /// entropy-seeded rng
    pub fn new(grid_size: i32) -> Result<Self, EngineError> {
        Self::with_rng(grid_size, 3, SmallRng::from_entropy())
    }

    /// a fresh game with a longer starting snake
    pub fn with_initial_length(
        grid_size: i32,
        initial_length: usize,
    ) -> Result<Self, EngineError> {
        Self::with_rng(grid_size, initial_length, SmallRng::from_entropy())
    }
}

impl Default for GameEngine<SmallRng> {
    /// the stock game: a 10x10 grid and a snake of length 3
    fn default() -> Self {
        Self::new(10).expect("the default grid size is valid")
    }
}

impl<R: Rng> GameEngine<R> {
    /// a fresh game with a caller-provided rng, which also makes apple
    /// placement deterministic for tests
    pub fn with_rng(grid_size: i32, initial_length: usize, rng: R) -> Result<Self, EngineError> {
        if grid_size < 4 {
            return Err(EngineError::GridTooSmall(grid_size));
        }
        if initial_length < 3 {
            return Err(EngineError::SnakeTooShort(initial_length));
        }
        if initial_length > grid_size as usize {
            return Err(EngineError::SnakeTooLong {
                grid_size,
                initial_length,
            });
        }

        // horizontal run centered on the grid, head east-most, so the
        // derived orientation starts out as (1, 0). Runs longer than half
        // the grid wrap around the row, same arithmetic as every move.
        let mid = grid_size / 2;
        let segments: VecDeque<Cell> = (0..initial_length)
            .map(|i| Cell {
                x: (mid - (initial_length - 1 - i) as i32).rem_euclid(grid_size),
                y: mid,
            })
            .collect();
        let occupied: FxHashSet<Cell> = segments.iter().copied().collect();

        let mut engine = Self {
            grid_size,
            segments,
            occupied,
            apple: None,
            score: 0,
            state: GameState::Running,
            rng,
        };
        engine.place_apple();
        Ok(engine)
    }

    /// side length of the square grid
    pub fn grid_size(&self) -> i32 {
        self.grid_size
    }

    /// the snake's head cell
    pub fn head(&self) -> Cell {
        *self.segments.back().expect("snake always has a head")
    }

    /// the snake's tail cell
    pub fn tail(&self) -> Cell {
        *self.segments.front().expect("snake always has a tail")
    }

    /// the current apple, `None` only after a win
    pub fn apple(&self) -> Option<Cell> {
        self.apple
    }

    /// current snake length in cells, never below the initial length
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// a live engine never has zero segments
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The direction the snake faces, derived from its last two segments
    /// every time. There is no stored facing field to fall out of sync.
    pub fn orientation(&self) -> Vector {
        let head = self.segments[self.segments.len() - 1];
        let neck = self.segments[self.segments.len() - 2];
        head.sub(neck)
    }

    /// turn a quarter left and advance one cell
    pub fn turn_left<T: Renderer>(&mut self, renderer: &T) {
        self.apply(Command::Left, renderer)
    }

    /// turn a quarter right and advance one cell
    pub fn turn_right<T: Renderer>(&mut self, renderer: &T) {
        self.apply(Command::Right, renderer)
    }

    /// advance one cell in the direction the snake already faces
    pub fn move_forward<T: Renderer>(&mut self, renderer: &T) {
        self.apply(Command::Forward, renderer)
    }

    /// Applies one control input. A no-op on a terminal game, in which case
    /// the renderer is not called either; otherwise the renderer receives a
    /// fresh snapshot after the move, accepted or fatal alike.
    #[instrument(level = "trace", skip(self, renderer))]
    pub fn apply<T: Renderer>(&mut self, command: Command, renderer: &T) {
        if self.state.is_over() {
            return;
        }
        let dir = command.direction(self.orientation());
        self.step(dir);
        renderer.render(&self.snapshot());
    }

    /// an immutable copy of the whole game for renderers and inspection
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            grid_size: self.grid_size,
            segments: self.segments.iter().copied().collect(),
            apple: self.apple,
            score: self.score,
            state: self.state,
        }
    }

    /// Checks that the occupied set mirrors the segment list exactly and
    /// that no cell appears twice. False means a logic bug, not bad input.
    pub fn assert_consistency(&self) -> bool {
        if self.occupied.len() != self.segments.len() {
            return false;
        }
        self.segments.iter().all(|c| self.occupied.contains(c))
    }

    fn step(&mut self, dir: Vector) {
        let next = self.head().wrapping_add(dir, self.grid_size);

        // the whole current body blocks, including the tail cell about to be
        // vacated: trailing into one's own last segment is a collision, not
        // a follow-move
        if self.occupied.contains(&next) {
            tracing::debug!(x = next.x, y = next.y, "ran into own body");
            self.state = GameState::Lost;
            return;
        }

        if self.apple == Some(next) {
            // grow: the tail stays put
            self.segments.push_back(next);
            self.occupied.insert(next);
            self.score += 1;
            tracing::debug!(score = self.score, length = self.segments.len(), "ate the apple");
            self.place_apple();
        } else {
            let freed = self.segments.pop_front().expect("snake always has a tail");
            self.occupied.remove(&freed);
            self.segments.push_back(next);
            self.occupied.insert(next);
        }
    }

    /// Win check, then uniform placement on a free cell. The win fires one
    /// cell early, at <= 1 free rather than 0: observed behavior of the
    /// game this engine reproduces, kept as-is rather than "fixed".
    fn place_apple(&mut self) {
        let free = self.grid_size * self.grid_size - self.occupied.len() as i32;
        if free <= 1 {
            self.apple = None;
            self.state = GameState::Won;
            tracing::info!(score = self.score, "board filled, game won");
            return;
        }

        // rejection sampling terminates fast, at least two cells are free
        loop {
            let candidate = Cell {
                x: self.rng.gen_range(0..self.grid_size),
                y: self.rng.gen_range(0..self.grid_size),
            };
            if !self.occupied.contains(&candidate) {
                self.apple = Some(candidate);
                return;
            }
        }
    }

    #[cfg(test)]
    fn from_parts(grid_size: i32, segments: Vec<Cell>, apple: Cell, rng: R) -> Self {
        let occupied: FxHashSet<Cell> = segments.iter().copied().collect();
        Self {
            grid_size,
            segments: segments.into(),
            occupied,
            apple: Some(apple),
            score: 0,
            state: GameState::Running,
            rng,
        }
    }
}
