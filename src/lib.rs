#![deny(
    warnings,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs
)]
//! Headless game-state engine for single-player snake on a toroidal grid.
//! The goal is a fully testable core with no drawing surface attached: the
//! [`engine::GameEngine`] owns every piece of state and hands read-only
//! [`snapshot::Snapshot`] copies to whatever implements [`render::Renderer`].
//! Controls are relative turns (left, right, forward), the facing direction
//! is always derived from the last two body segments rather than stored.
//! Edges wrap, so the only way to lose is running into your own body, and
//! the game is won when eating leaves at most one free cell on the board.

pub mod engine;
pub mod render;
pub mod snapshot;
pub mod types;

use snapshot::Snapshot;

/// Loads a snapshot fixture from a given string
pub fn snapshot_fixture(fixture: &str) -> Snapshot {
    let s: Result<Snapshot, _> = serde_json::from_str(fixture);
    s.expect("the json literal is valid")
}
