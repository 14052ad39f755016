//! Move algebra: tip twists and layer turns.
//!
//! Moves are small copyable values. Applying one is a pure function from
//! state to state:
//! - a tip twist advances one tip's orientation, nothing else
//! - a layer turn 3-cycles the turning face's edges and bumps that face's
//!   center orientation
//!
//! Every move has an exact [`inverse`](Move::inverse), and three
//! repetitions of any single move are the identity.

mod notation;
mod scramble;
mod tables;

pub use notation::{parse, ParseError};
pub use scramble::{scramble, scramble_unseeded};

use crate::core::{EdgePos, Face, PyraminxState, EDGE_COUNT};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of clockwise 120° steps, always in `{0, 1, 2}`.
///
/// Construction reduces modulo 3, so `-1` and `2` describe the same turn
/// and `3` is the identity.
///
/// # Example
///
/// ```rust
/// use pyraminx::Turns;
///
/// assert_eq!(Turns::new(-1), Turns::new(2));
/// assert_eq!(Turns::new(3).count(), 0);
/// assert_eq!(Turns::new(1).inverse(), Turns::new(2));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct Turns(u8);

impl Turns {
    /// Reduce an arbitrary turn count into `{0, 1, 2}`.
    pub fn new(turns: i32) -> Self {
        Turns(turns.rem_euclid(3) as u8)
    }

    /// The normalized step count.
    pub const fn count(self) -> u8 {
        self.0
    }

    /// The count that undoes this one: `(3 - turns) % 3`.
    pub const fn inverse(self) -> Self {
        Turns((3 - self.0) % 3)
    }
}

impl From<u8> for Turns {
    fn from(value: u8) -> Self {
        Turns(value % 3)
    }
}

impl From<Turns> for u8 {
    fn from(value: Turns) -> Self {
        value.0
    }
}

/// A single Pyraminx move.
///
/// # Example
///
/// ```rust
/// use pyraminx::core::Face;
/// use pyraminx::{Move, PyraminxState};
///
/// let turn = Move::layer(Face::L, 1);
/// let state = turn.apply(&PyraminxState::solved());
///
/// assert_eq!(turn.notation(), "L");
/// assert_eq!(turn.inverse().notation(), "L2");
/// assert!(turn.inverse().apply(&state).is_solved());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Move {
    /// Twist of the trivial tip sitting on `face`.
    Tip { face: Face, turns: Turns },
    /// 120°-step turn of the vertex layer around `face`.
    Layer { face: Face, turns: Turns },
}

impl Move {
    /// A tip twist; `turns` is normalized mod 3.
    pub fn tip(face: Face, turns: i32) -> Self {
        Move::Tip {
            face,
            turns: Turns::new(turns),
        }
    }

    /// A layer turn; `turns` is normalized mod 3.
    pub fn layer(face: Face, turns: i32) -> Self {
        Move::Layer {
            face,
            turns: Turns::new(turns),
        }
    }

    /// The face this move acts on.
    pub fn face(&self) -> Face {
        match *self {
            Move::Tip { face, .. } | Move::Layer { face, .. } => face,
        }
    }

    /// The normalized turn count.
    pub fn turns(&self) -> Turns {
        match *self {
            Move::Tip { turns, .. } | Move::Layer { turns, .. } => turns,
        }
    }

    /// True when `other` is the same kind of move on the same face,
    /// regardless of turn count.
    pub fn same_kind_and_face(&self, other: &Move) -> bool {
        let same_kind = matches!(
            (self, other),
            (Move::Tip { .. }, Move::Tip { .. }) | (Move::Layer { .. }, Move::Layer { .. })
        );
        same_kind && self.face() == other.face()
    }

    /// Apply this move, producing a new state; the input is unchanged.
    ///
    /// Zero-turn moves return the input as-is.
    pub fn apply(&self, state: &PyraminxState) -> PyraminxState {
        match *self {
            Move::Tip { face, turns } => apply_tip(state, face, turns),
            Move::Layer { face, turns } => apply_layer(state, face, turns),
        }
    }

    /// The move that undoes this one on any legal state.
    pub fn inverse(&self) -> Move {
        match *self {
            Move::Tip { face, turns } => Move::Tip {
                face,
                turns: turns.inverse(),
            },
            Move::Layer { face, turns } => Move::Layer {
                face,
                turns: turns.inverse(),
            },
        }
    }

    /// WCA-style notation: uppercase for layers, lowercase for tips, a
    /// `2` suffix for double turns, and the empty string for a no-op.
    pub fn notation(&self) -> String {
        let (letter, turns) = match *self {
            Move::Tip { face, turns } => (face.tip_letter(), turns),
            Move::Layer { face, turns } => (face.layer_letter(), turns),
        };
        match turns.count() {
            0 => String::new(),
            1 => letter.to_string(),
            _ => format!("{letter}2"),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.notation())
    }
}

fn apply_tip(state: &PyraminxState, face: Face, turns: Turns) -> PyraminxState {
    if turns.count() == 0 {
        return state.clone();
    }
    let twisted = i32::from(state.tip_orientation(face)) + i32::from(turns.count());
    state.with_tip_orientation(face, twisted)
}

fn apply_layer(state: &PyraminxState, face: Face, turns: Turns) -> PyraminxState {
    if turns.count() == 0 {
        return state.clone();
    }

    let mut parts = state.parts();
    let cycle = tables::EDGE_CYCLE_CW[face.index()];
    let delta = tables::EDGE_ORI_DELTA[face.index()];

    for _ in 0..turns.count() {
        rotate_edges_once(&mut parts.edge_at, &mut parts.edge_ori, &cycle, &delta);
    }

    let center = face.index();
    parts.center_ori[center] =
        (parts.center_ori[center] + tables::center_ori_delta(turns.count())) % 3;

    PyraminxState::checked_of(
        parts.tip_ori,
        parts.edge_at,
        parts.edge_ori,
        parts.center_at,
        parts.center_ori,
    )
    .expect("layer turn produced an illegal state; the permutation tables are broken")
}

/// One clockwise step: the piece at `cycle[i]` moves to `cycle[i + 1]`,
/// picking up the flip delta of its destination slot.
fn rotate_edges_once(
    edge_at: &mut [u8; EDGE_COUNT],
    edge_ori: &mut [u8; EDGE_COUNT],
    cycle: &[EdgePos; 3],
    delta: &[u8; 3],
) {
    let c = [cycle[0].index(), cycle[1].index(), cycle[2].index()];
    let wrapped_at = edge_at[c[2]];
    let wrapped_ori = edge_ori[c[2]];
    edge_at[c[2]] = edge_at[c[1]];
    edge_ori[c[2]] = (edge_ori[c[1]] + delta[2]) & 1;
    edge_at[c[1]] = edge_at[c[0]];
    edge_ori[c[1]] = (edge_ori[c[0]] + delta[1]) & 1;
    edge_at[c[0]] = wrapped_at;
    edge_ori[c[0]] = (wrapped_ori + delta[0]) & 1;
}
