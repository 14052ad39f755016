//! Legality checks for Pyraminx configurations.
//!
//! A configuration is legal when:
//! - every tip orientation is in `{0, 1, 2}`
//! - the edge occupants form a permutation of `0..=5`
//! - the edge permutation has even parity
//! - the total number of flipped edges is even
//! - every center holds its own piece (centers never permute)
//! - every center orientation is in `{0, 1, 2}`
//!
//! [`require_legal`] is the single gate: the checked constructor runs it
//! before any state escapes, and snapshot decoding re-enters through that
//! constructor.

use crate::core::{CenterPos, EdgePos, Face, PyraminxState, EDGE_COUNT};
use thiserror::Error;

/// A configuration that violates one of the model invariants.
///
/// Each variant names the first check that failed; checks run in a fixed
/// order and stop at the first violation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A tip orientation is outside `{0, 1, 2}`.
    #[error("tip orientation out of range at {face}: {value}")]
    TipOrientationOutOfRange { face: Face, value: u8 },

    /// An edge occupant is outside `0..=5`.
    #[error("edge occupant out of range at {pos}: {value}")]
    EdgeOccupantOutOfRange { pos: EdgePos, value: u8 },

    /// An edge flip is outside `{0, 1}`.
    #[error("edge flip out of range at {pos}: {value}")]
    EdgeFlipOutOfRange { pos: EdgePos, value: u8 },

    /// A center holds a piece other than its own.
    #[error("centers must not permute: {pos} holds {value}")]
    DisplacedCenter { pos: CenterPos, value: u8 },

    /// A center orientation is outside `{0, 1, 2}`.
    #[error("center orientation out of range at {pos}: {value}")]
    CenterOrientationOutOfRange { pos: CenterPos, value: u8 },

    /// Some edge occupant appears more than once.
    #[error("edge occupants are not a permutation of 0..5")]
    EdgeOccupantsNotPermutation,

    /// The edge permutation cannot be produced by legal moves.
    #[error("edge permutation has odd parity")]
    OddEdgePermutation,

    /// The number of flipped edges cannot be odd on a real puzzle.
    #[error("sum of edge flips must be even")]
    OddFlipSum,
}

/// Check every model invariant, failing fast on the first violation.
///
/// States built through [`PyraminxState::checked_of`] have already passed
/// this gate; calling it again is useful in tests and assertions.
///
/// # Example
///
/// ```rust
/// use pyraminx::{require_legal, PyraminxState};
///
/// assert!(require_legal(&PyraminxState::solved()).is_ok());
/// ```
pub fn require_legal(state: &PyraminxState) -> Result<(), ValidationError> {
    for face in Face::ALL {
        let value = state.tip_orientation(face);
        if value > 2 {
            return Err(ValidationError::TipOrientationOutOfRange { face, value });
        }
    }

    for pos in EdgePos::ALL {
        let occupant = state.edge_at(pos);
        if usize::from(occupant) >= EDGE_COUNT {
            return Err(ValidationError::EdgeOccupantOutOfRange {
                pos,
                value: occupant,
            });
        }
        let flip = state.edge_orientation(pos);
        if flip > 1 {
            return Err(ValidationError::EdgeFlipOutOfRange { pos, value: flip });
        }
    }

    for pos in CenterPos::ALL {
        let occupant = state.center_at(pos);
        if usize::from(occupant) != pos.index() {
            return Err(ValidationError::DisplacedCenter {
                pos,
                value: occupant,
            });
        }
        let orientation = state.center_orientation(pos);
        if orientation > 2 {
            return Err(ValidationError::CenterOrientationOutOfRange {
                pos,
                value: orientation,
            });
        }
    }

    if !is_permutation(state) {
        return Err(ValidationError::EdgeOccupantsNotPermutation);
    }
    if !is_even_permutation(state) {
        return Err(ValidationError::OddEdgePermutation);
    }
    if !edge_flip_sum_even(state) {
        return Err(ValidationError::OddFlipSum);
    }

    Ok(())
}

/// True when each edge occupant appears exactly once.
fn is_permutation(state: &PyraminxState) -> bool {
    let mut seen = [false; EDGE_COUNT];
    for pos in EdgePos::ALL {
        let occupant = usize::from(state.edge_at(pos));
        if occupant >= EDGE_COUNT || seen[occupant] {
            return false;
        }
        seen[occupant] = true;
    }
    true
}

/// Parity by inversion count over the six occupants.
fn is_even_permutation(state: &PyraminxState) -> bool {
    let occupants = EdgePos::ALL.map(|pos| state.edge_at(pos));
    let mut inversions = 0u32;
    for i in 0..occupants.len() {
        for j in (i + 1)..occupants.len() {
            if occupants[i] > occupants[j] {
                inversions += 1;
            }
        }
    }
    inversions % 2 == 0
}

fn edge_flip_sum_even(state: &PyraminxState) -> bool {
    let sum: u32 = EdgePos::ALL
        .iter()
        .map(|&pos| u32::from(state.edge_orientation(pos)))
        .sum();
    sum % 2 == 0
}
