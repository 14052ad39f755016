//! Stateful session facade over the pure engine.
//!
//! A [`Session`] owns the current state and its undo/redo history, and
//! optionally keeps an autosave file current. Every public mutation
//! writes the autosave once; write failures are logged and swallowed so
//! a full disk never breaks play. The next successful mutation retries
//! naturally.

use crate::core::{History, PyraminxState};
use crate::moves::{self, parse, Move, ParseError};
use crate::persist;
use std::path::PathBuf;
use tracing::warn;

/// Current puzzle state plus history, with optional autosave.
///
/// # Example
///
/// ```rust
/// use pyraminx::Session;
///
/// let mut session = Session::new();
/// session.apply_alg("U R u2").unwrap();
/// assert_eq!(session.move_count(), 3);
/// assert_eq!(session.alg_text(), "U R u2");
///
/// session.solve_by_undo_all();
/// assert!(session.state().is_solved());
/// ```
#[derive(Debug)]
pub struct Session {
    state: PyraminxState,
    history: History,
    autosave_dir: Option<PathBuf>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// An in-memory session starting from the solved state. Nothing is
    /// ever written to disk.
    pub fn new() -> Self {
        Session {
            state: PyraminxState::solved(),
            history: History::new(),
            autosave_dir: None,
        }
    }

    /// A session autosaving into `dir`.
    ///
    /// Startup restores the previous autosave from `dir` when one exists
    /// and decodes; a missing or corrupted save silently becomes the
    /// solved state. The autosave file is (re)written immediately, so it
    /// exists from this call onward.
    pub fn with_autosave(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let session = Session {
            state: persist::load_or_default(&dir),
            history: History::new(),
            autosave_dir: Some(dir),
        };
        session.autosave();
        session
    }

    /// The current state.
    pub fn state(&self) -> &PyraminxState {
        &self.state
    }

    /// Number of moves available to undo.
    pub fn move_count(&self) -> usize {
        self.history.undo_len()
    }

    /// The applied moves as notation, oldest first.
    pub fn alg_text(&self) -> String {
        self.history.to_alg()
    }

    /// Apply a single move.
    pub fn apply(&mut self, mv: Move) {
        self.state = self.history.apply(&self.state, mv);
        self.autosave();
    }

    /// Parse and apply a whole algorithm as one transaction.
    ///
    /// Parsing happens up front: a bad token leaves the session
    /// untouched.
    pub fn apply_alg(&mut self, alg: &str) -> Result<(), ParseError> {
        let sequence = parse(alg)?;
        self.apply_all(&sequence);
        Ok(())
    }

    /// Apply a list of moves as one transaction, autosaving once.
    pub fn apply_all(&mut self, sequence: &[Move]) {
        for &mv in sequence {
            self.state = self.history.apply(&self.state, mv);
        }
        self.autosave();
    }

    /// Take back the most recent move, if any.
    pub fn undo(&mut self) {
        self.state = self.history.undo(&self.state);
        self.autosave();
    }

    /// Replay the most recently undone move, if any.
    pub fn redo(&mut self) {
        self.state = self.history.redo(&self.state);
        self.autosave();
    }

    /// Back to solved with an empty history.
    pub fn reset(&mut self) {
        self.history.clear();
        self.state = PyraminxState::solved();
        self.autosave();
    }

    /// Apply `count` random moves, seeded from the wall clock.
    ///
    /// The moves go through the history, so a scramble can be undone
    /// move by move.
    pub fn scramble(&mut self, count: usize) {
        let sequence = moves::scramble_unseeded(count);
        self.apply_all(&sequence);
    }

    /// Apply a reproducible `count`-move scramble for `seed`.
    pub fn scramble_seeded(&mut self, count: usize, seed: u64) {
        let sequence = moves::scramble(count, seed);
        self.apply_all(&sequence);
    }

    /// Solve by rewinding the entire undo stack.
    ///
    /// Only reaches the solved state when the session started solved;
    /// in general it restores whatever state the history began from.
    pub fn solve_by_undo_all(&mut self) {
        while self.history.undo_len() > 0 {
            self.state = self.history.undo(&self.state);
        }
        self.autosave();
    }

    fn autosave(&self) {
        let Some(dir) = &self.autosave_dir else {
            return;
        };
        if let Err(err) = persist::autosave(dir, &self.state) {
            warn!(dir = %dir.display(), error = %err, "autosave failed");
        }
    }
}
