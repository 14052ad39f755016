//! Text notation for move sequences.
//!
//! A sequence is whitespace-separated tokens. Each token is a face letter,
//! uppercase for a layer turn (`U L R B`) and lowercase for a tip twist
//! (`u l r b`), optionally followed by one suffix: `'` or `2`, both meaning
//! two clockwise steps. A bare letter is a single step.

use super::Move;
use crate::core::Face;
use thiserror::Error;

/// A move token that could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The token does not start with one of `U L R B u l r b`.
    #[error("unknown face in move token `{token}`")]
    UnknownFace { token: String },

    /// The character after the face letter is not `'` or `2`.
    #[error("bad turn suffix in move token `{token}` (expected `'` or `2`)")]
    BadSuffix { token: String },

    /// The token continues past a complete move.
    #[error("trailing characters in move token `{token}`")]
    TrailingInput { token: String },
}

/// Parse a whitespace-separated move sequence.
///
/// Blank input parses to an empty sequence. Parsing is all-or-nothing:
/// the first bad token fails the whole call.
///
/// # Example
///
/// ```rust
/// use pyraminx::core::Face;
/// use pyraminx::{parse, Move};
///
/// let sequence = parse("U L' r2").unwrap();
/// assert_eq!(
///     sequence,
///     vec![
///         Move::layer(Face::U, 1),
///         Move::layer(Face::L, 2),
///         Move::tip(Face::R, 2),
///     ],
/// );
/// assert!(parse("U3").is_err());
/// ```
pub fn parse(input: &str) -> Result<Vec<Move>, ParseError> {
    input.split_whitespace().map(parse_token).collect()
}

fn parse_token(token: &str) -> Result<Move, ParseError> {
    let mut chars = token.chars();
    let face_letter = chars.next().ok_or_else(|| ParseError::UnknownFace {
        token: token.to_string(),
    })?;

    let (face, is_tip) = match face_letter {
        'U' => (Face::U, false),
        'L' => (Face::L, false),
        'R' => (Face::R, false),
        'B' => (Face::B, false),
        'u' => (Face::U, true),
        'l' => (Face::L, true),
        'r' => (Face::R, true),
        'b' => (Face::B, true),
        _ => {
            return Err(ParseError::UnknownFace {
                token: token.to_string(),
            })
        }
    };

    let turns = match chars.next() {
        None => 1,
        Some('\'') | Some('2') => 2,
        Some(_) => {
            return Err(ParseError::BadSuffix {
                token: token.to_string(),
            })
        }
    };

    if chars.next().is_some() {
        return Err(ParseError::TrailingInput {
            token: token.to_string(),
        });
    }

    Ok(if is_tip {
        Move::tip(face, turns)
    } else {
        Move::layer(face, turns)
    })
}
