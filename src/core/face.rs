//! Position enumerations for the three sticker groups.
//!
//! A Pyraminx has four faces. Tips and centers sit on the face axes and
//! never change position; edges sit between pairs of faces. The declaration
//! order of each enum is the global index contract shared by the state
//! arrays, the permutation tables, and the snapshot format.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of tip positions (one per face).
pub const TIP_COUNT: usize = 4;

/// Number of edge positions.
pub const EDGE_COUNT: usize = 6;

/// Number of center positions (one per face).
pub const CENTER_COUNT: usize = 4;

/// One of the four outer faces of the tetrahedron.
///
/// # Example
///
/// ```rust
/// use pyraminx::core::Face;
///
/// assert_eq!(Face::ALL.len(), 4);
/// assert_eq!(Face::U.index(), 0);
/// assert_eq!(Face::B.index(), 3);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Face {
    U,
    L,
    R,
    B,
}

impl Face {
    /// All faces in canonical index order.
    pub const ALL: [Face; TIP_COUNT] = [Face::U, Face::L, Face::R, Face::B];

    /// Canonical index of this face.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Uppercase notation letter, used for layer turns.
    pub const fn layer_letter(self) -> char {
        match self {
            Face::U => 'U',
            Face::L => 'L',
            Face::R => 'R',
            Face::B => 'B',
        }
    }

    /// Lowercase notation letter, used for tip twists.
    pub const fn tip_letter(self) -> char {
        match self {
            Face::U => 'u',
            Face::L => 'l',
            Face::R => 'r',
            Face::B => 'b',
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.layer_letter())
    }
}

/// One of the six edge positions, named by the two faces it borders.
///
/// The fixed order `UL, UR, UB, LR, LB, RB` indexes the edge arrays.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum EdgePos {
    UL,
    UR,
    UB,
    LR,
    LB,
    RB,
}

impl EdgePos {
    /// All edge positions in canonical index order.
    pub const ALL: [EdgePos; EDGE_COUNT] = [
        EdgePos::UL,
        EdgePos::UR,
        EdgePos::UB,
        EdgePos::LR,
        EdgePos::LB,
        EdgePos::RB,
    ];

    /// Canonical index of this position.
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for EdgePos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EdgePos::UL => "UL",
            EdgePos::UR => "UR",
            EdgePos::UB => "UB",
            EdgePos::LR => "LR",
            EdgePos::LB => "LB",
            EdgePos::RB => "RB",
        };
        write!(f, "{name}")
    }
}

/// One of the four three-color center positions, one per face.
///
/// Shares the `U, L, R, B` order with [`Face`], so the center under a
/// turning face is found by the same index.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum CenterPos {
    U,
    L,
    R,
    B,
}

impl CenterPos {
    /// All center positions in canonical index order.
    pub const ALL: [CenterPos; CENTER_COUNT] =
        [CenterPos::U, CenterPos::L, CenterPos::R, CenterPos::B];

    /// Canonical index of this position.
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl From<Face> for CenterPos {
    fn from(face: Face) -> Self {
        CenterPos::ALL[face.index()]
    }
}

impl fmt::Display for CenterPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CenterPos::U => "U",
            CenterPos::L => "L",
            CenterPos::R => "R",
            CenterPos::B => "B",
        };
        write!(f, "{name}")
    }
}
