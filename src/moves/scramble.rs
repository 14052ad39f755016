//! Random scramble generation.

use super::Move;
use crate::core::Face;
use crate::rng::Prng;

/// Generate a reproducible scramble of `count` moves.
///
/// Each move is drawn uniformly: a face, then layer turn or tip twist,
/// then one or two steps. A candidate that repeats the previous move's
/// kind and face is redrawn, so `U U2` or `l l` never appear back to
/// back. The same `seed` and `count` always produce the same sequence.
///
/// # Example
///
/// ```rust
/// use pyraminx::scramble;
///
/// let a = scramble(12, 42);
/// let b = scramble(12, 42);
/// assert_eq!(a, b);
/// assert_eq!(a.len(), 12);
/// ```
pub fn scramble(count: usize, seed: u64) -> Vec<Move> {
    let mut prng = Prng::seeded(seed);
    let mut moves: Vec<Move> = Vec::with_capacity(count);

    while moves.len() < count {
        let face = Face::ALL[prng.next_in(0, 3) as usize];
        let is_tip = prng.next_in(0, 1) == 1;
        let turns = prng.next_in(1, 2) as i32;
        let candidate = if is_tip {
            Move::tip(face, turns)
        } else {
            Move::layer(face, turns)
        };

        if let Some(previous) = moves.last() {
            if candidate.same_kind_and_face(previous) {
                continue;
            }
        }
        moves.push(candidate);
    }

    moves
}

/// Generate a scramble seeded from the wall clock.
///
/// Convenience wrapper over [`scramble`] for callers that do not need
/// reproducibility.
pub fn scramble_unseeded(count: usize) -> Vec<Move> {
    let now = chrono::Utc::now();
    let seed = now
        .timestamp_nanos_opt()
        .unwrap_or_else(|| now.timestamp_millis()) as u64;
    scramble(count, seed)
}
