//! the seam between the engine and whatever draws it
use crate::snapshot::Snapshot;

/// A collaborator that is handed a fresh [`Snapshot`] after every accepted
/// move. Implementations draw, log, or record; the engine never looks at a
/// return value and never calls this for moves it rejected as no-ops.
pub trait Renderer {
    /// consume one frame worth of game state
    fn render(&self, snapshot: &Snapshot);
}

/// headless play: the unit renderer draws nothing
impl Renderer for () {
    fn render(&self, _snapshot: &Snapshot) {}
}

/// A renderer that emits the ascii board through `tracing` after every
/// accepted move, useful when debugging a game without a real surface.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer {}

impl Renderer for TextRenderer {
    fn render(&self, snapshot: &Snapshot) {
        tracing::info!(score = snapshot.score, state = %snapshot.state, "{}", snapshot);
    }
}
