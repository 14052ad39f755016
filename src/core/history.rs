//! Undo/redo history of applied moves.
//!
//! The history owns two stacks of moves, not states: undoing replays the
//! inverse of the most recent move, redoing replays the move itself. State
//! values stay pure and flow through the calls unchanged.

use super::state::PyraminxState;
use crate::moves::Move;
use serde::{Deserialize, Serialize};

/// Ordered undo/redo stacks for a sequence of applied moves.
///
/// Applying a move pushes it onto the undo stack and clears the redo
/// stack, so a fresh branch of moves discards any previously undone
/// future.
///
/// # Example
///
/// ```rust
/// use pyraminx::core::Face;
/// use pyraminx::{History, Move, PyraminxState};
///
/// let mut history = History::new();
/// let mut state = PyraminxState::solved();
///
/// state = history.apply(&state, Move::layer(Face::U, 1));
/// state = history.apply(&state, Move::tip(Face::R, 2));
/// assert_eq!(history.to_alg(), "U r2");
///
/// state = history.undo(&state);
/// state = history.undo(&state);
/// assert!(state.is_solved());
/// assert_eq!(history.redo_len(), 2);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct History {
    undo: Vec<Move>,
    redo: Vec<Move>,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        History {
            undo: Vec::new(),
            redo: Vec::new(),
        }
    }

    /// Apply `mv` to `state`, recording it for undo.
    ///
    /// Any undone moves waiting for redo are discarded.
    pub fn apply(&mut self, state: &PyraminxState, mv: Move) -> PyraminxState {
        self.undo.push(mv);
        self.redo.clear();
        mv.apply(state)
    }

    /// Take back the most recent move.
    ///
    /// With nothing to undo, the state comes back unchanged.
    pub fn undo(&mut self, state: &PyraminxState) -> PyraminxState {
        match self.undo.pop() {
            Some(mv) => {
                self.redo.push(mv);
                mv.inverse().apply(state)
            }
            None => state.clone(),
        }
    }

    /// Replay the most recently undone move.
    ///
    /// With nothing to redo, the state comes back unchanged.
    pub fn redo(&mut self, state: &PyraminxState) -> PyraminxState {
        match self.redo.pop() {
            Some(mv) => {
                self.undo.push(mv);
                mv.apply(state)
            }
            None => state.clone(),
        }
    }

    /// Forget both stacks.
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }

    /// Number of moves available to undo.
    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    /// Number of moves available to redo.
    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }

    /// The applied moves in chronological order, as notation.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pyraminx::core::Face;
    /// use pyraminx::{History, Move, PyraminxState};
    ///
    /// let mut history = History::new();
    /// let state = PyraminxState::solved();
    /// let state = history.apply(&state, Move::layer(Face::U, 1));
    /// let _ = history.apply(&state, Move::layer(Face::L, 2));
    ///
    /// assert_eq!(history.to_alg(), "U L2");
    /// ```
    pub fn to_alg(&self) -> String {
        self.undo
            .iter()
            .map(Move::notation)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// The move sequence that returns the current state to where the
    /// history started: inverses of the applied moves, newest first.
    pub fn solution_alg(&self) -> String {
        self.undo
            .iter()
            .rev()
            .map(|mv| mv.inverse().notation())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
