//! Core puzzle types and logic.
//!
//! This module contains the pure heart of the engine:
//! - Position vocabulary: [`Face`], [`EdgePos`], [`CenterPos`]
//! - The immutable, always-legal [`PyraminxState`]
//! - Undo/redo [`History`] over applied moves
//!
//! Everything here except the `History` stacks is a pure value; states
//! are never mutated in place.

mod face;
mod history;
mod state;

pub use face::{CenterPos, EdgePos, Face, CENTER_COUNT, EDGE_COUNT, TIP_COUNT};
pub use history::History;
pub use state::PyraminxState;
