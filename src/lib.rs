//! Pyraminx: a pure functional state engine for the Pyraminx puzzle.
//!
//! The engine is built around immutable state values: applying a move
//! returns a new state and never touches the old one, and every state
//! that leaves the engine satisfies the full set of legality
//! invariants. Side effects stay at the edges, in the persistence
//! layer and the [`Session`] facade.
//!
//! # Core Concepts
//!
//! - **State**: an immutable, always-legal assignment of tips, edges,
//!   and centers ([`PyraminxState`])
//! - **Moves**: tip twists and layer turns with exact inverses ([`Move`])
//! - **Notation**: a small text language for move sequences ([`parse`])
//! - **History**: undo/redo stacks over applied moves ([`History`])
//! - **Snapshots**: a versioned one-line text format for persistence
//!
//! # Example
//!
//! ```rust
//! use pyraminx::{parse, History, PyraminxState};
//!
//! let mut history = History::new();
//! let mut state = PyraminxState::solved();
//!
//! for mv in parse("U L' r2 u").unwrap() {
//!     state = history.apply(&state, mv);
//! }
//! assert!(!state.is_solved());
//! assert_eq!(history.to_alg(), "U L2 r2 u");
//!
//! while history.undo_len() > 0 {
//!     state = history.undo(&state);
//! }
//! assert!(state.is_solved());
//! ```

pub mod core;
pub mod moves;
pub mod persist;
mod rng;
pub mod session;
pub mod snapshot;
pub mod validator;

// Re-export commonly used types
pub use core::{CenterPos, EdgePos, Face, History, PyraminxState};
pub use moves::{parse, scramble, scramble_unseeded, Move, ParseError, Turns};
pub use session::Session;
pub use snapshot::{SnapshotError, SNAPSHOT_VERSION};
pub use validator::{require_legal, ValidationError};
