//! Move history kept by the caller rather than by the cube state itself.

use crate::{
    cube::CubeState,
    engine::MoveEngine,
    moves::{Move, MoveSequence, ParseError},
};
use log::trace;

/// A cube state paired with the record of every move applied to it.
///
/// [`CubeState`] stays a pure value; everything about auditing and undoing
/// lives here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackedCube {
    state: CubeState,
    history: MoveSequence,
}

impl TrackedCube {
    /// A solved cube with an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking from an arbitrary state.
    #[must_use]
    pub fn from_state(state: CubeState) -> Self {
        Self {
            state,
            history: MoveSequence::new(),
        }
    }

    #[must_use]
    pub fn state(&self) -> &CubeState {
        &self.state
    }

    #[must_use]
    pub fn history(&self) -> &MoveSequence {
        &self.history
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.state.is_solved()
    }

    pub fn apply(&mut self, move_: Move) {
        trace!("Applying {move_}");
        MoveEngine::apply(&mut self.state, move_);
        self.history.push(move_);
    }

    pub fn apply_sequence<'a>(&mut self, moves: impl IntoIterator<Item = &'a Move>) {
        for &move_ in moves {
            self.apply(move_);
        }
    }

    /// Parse and apply `moves`. Nothing is applied or recorded if any token
    /// is invalid.
    ///
    /// # Errors
    ///
    /// If any token is outside the move grammar.
    pub fn apply_str(&mut self, moves: &str) -> Result<(), ParseError> {
        let sequence: MoveSequence = moves.parse()?;
        self.apply_sequence(&sequence);
        Ok(())
    }

    /// Number of recorded moves, each half turn counting once.
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Number of recorded quarter turns, each half turn counting twice.
    #[must_use]
    pub fn quarter_turn_count(&self) -> usize {
        self.history.quarter_turn_count()
    }

    /// The sequence that takes the current state back to where tracking
    /// started. When tracking started from a solved cube this is a solution
    /// of any length, which is the fallback for scrambles too deep to search.
    #[must_use]
    pub fn reverse_history(&self) -> MoveSequence {
        self.history.inverse()
    }

    /// Apply [`TrackedCube::reverse_history`] and forget the history. Returns
    /// the moves that were applied.
    pub fn undo_all(&mut self) -> MoveSequence {
        let undo = self.reverse_history();
        MoveEngine::apply_sequence(&mut self.state, &undo);
        self.history.clear();
        undo
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

impl From<CubeState> for TrackedCube {
    fn from(state: CubeState) -> Self {
        Self::from_state(state)
    }
}
