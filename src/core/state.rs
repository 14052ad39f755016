//! Immutable Pyraminx configuration value.
//!
//! A `PyraminxState` is a value, not an object: moves and updates return
//! new states and never mutate the receiver. Every state reachable through
//! this API satisfies the model invariants checked by
//! [`require_legal`](crate::validator::require_legal).

use super::face::{CenterPos, EdgePos, Face, CENTER_COUNT, EDGE_COUNT, TIP_COUNT};
use crate::moves::Move;
use crate::snapshot::{self, SnapshotError};
use crate::validator::{self, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unvalidated bundle of the five component arrays.
///
/// Serde passes through this type in both directions, so deserialized data
/// re-enters via [`PyraminxState::checked_of`] and cannot skip the
/// legality gate.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawParts {
    pub(crate) tip_ori: [u8; TIP_COUNT],
    pub(crate) edge_at: [u8; EDGE_COUNT],
    pub(crate) edge_ori: [u8; EDGE_COUNT],
    pub(crate) center_at: [u8; CENTER_COUNT],
    pub(crate) center_ori: [u8; CENTER_COUNT],
}

/// One complete configuration of the puzzle.
///
/// The backing representation is position-centric: `edge_at[pos]` is the
/// piece currently sitting at `pos`, `edge_ori[pos]` its flip bit, and so
/// on. Tips and centers never change position, only orientation.
///
/// # Example
///
/// ```rust
/// use pyraminx::core::Face;
/// use pyraminx::{Move, PyraminxState};
///
/// let solved = PyraminxState::solved();
/// let turned = solved.apply(Move::layer(Face::U, 1));
///
/// assert!(solved.is_solved()); // original untouched
/// assert!(!turned.is_solved());
/// assert_eq!(turned.apply(Move::layer(Face::U, 2)), solved);
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "RawParts", into = "RawParts")]
pub struct PyraminxState {
    tip_ori: [u8; TIP_COUNT],
    edge_at: [u8; EDGE_COUNT],
    edge_ori: [u8; EDGE_COUNT],
    center_at: [u8; CENTER_COUNT],
    center_ori: [u8; CENTER_COUNT],
}

impl PyraminxState {
    /// The canonical solved state: every piece home, every orientation zero.
    pub fn solved() -> Self {
        Self {
            tip_ori: [0; TIP_COUNT],
            edge_at: [0, 1, 2, 3, 4, 5],
            edge_ori: [0; EDGE_COUNT],
            center_at: [0, 1, 2, 3],
            center_ori: [0; CENTER_COUNT],
        }
    }

    /// Build a state from raw arrays, enforcing legality immediately.
    ///
    /// This is the only entry point for externally assembled
    /// configurations; an illegal input never becomes a state.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pyraminx::PyraminxState;
    ///
    /// // A lone 2-cycle of edges has odd parity and is unreachable.
    /// let result = PyraminxState::checked_of(
    ///     [0, 0, 0, 0],
    ///     [1, 0, 2, 3, 4, 5],
    ///     [0, 0, 0, 0, 0, 0],
    ///     [0, 1, 2, 3],
    ///     [0, 0, 0, 0],
    /// );
    /// assert!(result.is_err());
    /// ```
    pub fn checked_of(
        tip_ori: [u8; TIP_COUNT],
        edge_at: [u8; EDGE_COUNT],
        edge_ori: [u8; EDGE_COUNT],
        center_at: [u8; CENTER_COUNT],
        center_ori: [u8; CENTER_COUNT],
    ) -> Result<Self, ValidationError> {
        let candidate = Self {
            tip_ori,
            edge_at,
            edge_ori,
            center_at,
            center_ori,
        };
        validator::require_legal(&candidate)?;
        Ok(candidate)
    }

    /// Orientation of the tip on `face`, in `{0, 1, 2}`.
    pub fn tip_orientation(&self, face: Face) -> u8 {
        self.tip_ori[face.index()]
    }

    /// Piece currently sitting at edge position `pos`, in `0..=5`.
    pub fn edge_at(&self, pos: EdgePos) -> u8 {
        self.edge_at[pos.index()]
    }

    /// Flip bit of the edge sitting at `pos`.
    pub fn edge_orientation(&self, pos: EdgePos) -> u8 {
        self.edge_ori[pos.index()]
    }

    /// Piece at center position `pos`; equals `pos.index()` on every legal
    /// state, since centers never permute.
    pub fn center_at(&self, pos: CenterPos) -> u8 {
        self.center_at[pos.index()]
    }

    /// Orientation of the center at `pos`, in `{0, 1, 2}`.
    pub fn center_orientation(&self, pos: CenterPos) -> u8 {
        self.center_ori[pos.index()]
    }

    /// A new state with the tip on `face` set to `orientation` (wrapped
    /// mod 3); edges and centers are untouched.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pyraminx::core::Face;
    /// use pyraminx::PyraminxState;
    ///
    /// let s0 = PyraminxState::solved();
    /// let s1 = s0.with_tip_orientation(Face::U, -1); // wraps to 2
    ///
    /// assert_eq!(s0.tip_orientation(Face::U), 0);
    /// assert_eq!(s1.tip_orientation(Face::U), 2);
    /// ```
    pub fn with_tip_orientation(&self, face: Face, orientation: i32) -> Self {
        let mut next = self.clone();
        next.tip_ori[face.index()] = orientation.rem_euclid(3) as u8;
        next
    }

    /// True when every piece is home and every orientation is zero.
    pub fn is_solved(&self) -> bool {
        *self == Self::solved()
    }

    /// Apply a move, producing the next state.
    pub fn apply(&self, mv: Move) -> Self {
        mv.apply(self)
    }

    /// Encode as the canonical one-line snapshot.
    pub fn to_snapshot(&self) -> String {
        snapshot::encode(self)
    }

    /// Decode a snapshot line; the result is validated like any other
    /// construction.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pyraminx::PyraminxState;
    ///
    /// let solved = PyraminxState::solved();
    /// let line = solved.to_snapshot();
    /// assert_eq!(PyraminxState::from_snapshot(&line), Ok(solved));
    /// ```
    pub fn from_snapshot(text: &str) -> Result<Self, SnapshotError> {
        snapshot::decode(text)
    }

    pub(crate) fn parts(&self) -> RawParts {
        RawParts {
            tip_ori: self.tip_ori,
            edge_at: self.edge_at,
            edge_ori: self.edge_ori,
            center_at: self.center_at,
            center_ori: self.center_ori,
        }
    }
}

impl TryFrom<RawParts> for PyraminxState {
    type Error = ValidationError;

    fn try_from(parts: RawParts) -> Result<Self, Self::Error> {
        Self::checked_of(
            parts.tip_ori,
            parts.edge_at,
            parts.edge_ori,
            parts.center_at,
            parts.center_ori,
        )
    }
}

impl From<PyraminxState> for RawParts {
    fn from(state: PyraminxState) -> Self {
        state.parts()
    }
}

impl fmt::Display for PyraminxState {
    /// Formats as the canonical snapshot line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_snapshot())
    }
}
