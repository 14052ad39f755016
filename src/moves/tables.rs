//! Fixed permutation data for layer turns.
//!
//! Each face owns a clockwise 3-cycle of edge positions; applying the
//! cycle once is a 120° turn. Centers never permute, so the only other
//! effect of a layer turn is an orientation bump on the turning face's
//! own center.

use crate::core::{EdgePos, TIP_COUNT};

/// Clockwise edge 3-cycle per face, indexed by
/// [`Face::index`](crate::core::Face::index).
///
/// The piece at `cycle[i]` moves to `cycle[(i + 1) % 3]` on one turn.
pub(crate) const EDGE_CYCLE_CW: [[EdgePos; 3]; TIP_COUNT] = [
    [EdgePos::UL, EdgePos::UR, EdgePos::UB], // U
    [EdgePos::UL, EdgePos::LB, EdgePos::LR], // L
    [EdgePos::UR, EdgePos::RB, EdgePos::LR], // R
    [EdgePos::UB, EdgePos::LB, EdgePos::RB], // B
];

/// Flip delta applied to the piece arriving at each cycle slot, per turn.
///
/// All zero: with the chosen edge indexing, vertex turns do not flip
/// edges. Not yet verified against a physical puzzle's sticker
/// conventions; adjust individual entries here if that audit disagrees.
pub(crate) const EDGE_ORI_DELTA: [[u8; 3]; TIP_COUNT] =
    [[0, 0, 0], [0, 0, 0], [0, 0, 0], [0, 0, 0]];

/// Orientation advance for the turning face's own center, mod 3.
pub(crate) const fn center_ori_delta(turns: u8) -> u8 {
    turns % 3
}
