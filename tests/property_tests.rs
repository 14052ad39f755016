//! Property-based tests for the puzzle engine.
//!
//! These tests use proptest to verify the move algebra, legality
//! invariants, and codec roundtrips across many randomly generated
//! move sequences.

use proptest::prelude::*;
use pyraminx::core::{CenterPos, EdgePos, Face};
use pyraminx::{parse, require_legal, scramble, History, Move, PyraminxState};

prop_compose! {
    fn arbitrary_face()(variant in 0..4usize) -> Face {
        Face::ALL[variant]
    }
}

prop_compose! {
    fn arbitrary_move()(face in arbitrary_face(), is_tip in any::<bool>(), turns in 1..=2i32) -> Move {
        if is_tip {
            Move::tip(face, turns)
        } else {
            Move::layer(face, turns)
        }
    }
}

fn arbitrary_sequence() -> impl Strategy<Value = Vec<Move>> {
    prop::collection::vec(arbitrary_move(), 0..40)
}

fn apply_all(state: &PyraminxState, moves: &[Move]) -> PyraminxState {
    moves.iter().fold(state.clone(), |s, m| m.apply(&s))
}

/// The three edge slots a layer turn around `face` does not touch.
fn off_layer_edges(face: Face) -> [EdgePos; 3] {
    match face {
        Face::U => [EdgePos::LR, EdgePos::LB, EdgePos::RB],
        Face::L => [EdgePos::UR, EdgePos::UB, EdgePos::RB],
        Face::R => [EdgePos::UL, EdgePos::UB, EdgePos::LB],
        Face::B => [EdgePos::UL, EdgePos::UR, EdgePos::LR],
    }
}

proptest! {
    #[test]
    fn reachable_states_stay_legal(sequence in arbitrary_sequence()) {
        let state = apply_all(&PyraminxState::solved(), &sequence);
        prop_assert!(require_legal(&state).is_ok());
    }

    #[test]
    fn move_then_inverse_is_identity(sequence in arbitrary_sequence(), mv in arbitrary_move()) {
        let state = apply_all(&PyraminxState::solved(), &sequence);
        let back = mv.inverse().apply(&mv.apply(&state));
        prop_assert_eq!(back, state);
    }

    #[test]
    fn triple_application_is_identity(sequence in arbitrary_sequence(), face in arbitrary_face()) {
        let state = apply_all(&PyraminxState::solved(), &sequence);
        for mv in [Move::layer(face, 1), Move::tip(face, 1)] {
            let tripled = mv.apply(&mv.apply(&mv.apply(&state)));
            prop_assert_eq!(&tripled, &state);
        }
    }

    #[test]
    fn layer_turn_only_touches_its_own_layer(
        sequence in arbitrary_sequence(),
        face in arbitrary_face(),
        turns in 1..=2i32,
    ) {
        let before = apply_all(&PyraminxState::solved(), &sequence);
        let after = Move::layer(face, turns).apply(&before);

        for pos in off_layer_edges(face) {
            prop_assert_eq!(after.edge_at(pos), before.edge_at(pos));
            prop_assert_eq!(after.edge_orientation(pos), before.edge_orientation(pos));
        }
        for f in Face::ALL {
            prop_assert_eq!(after.tip_orientation(f), before.tip_orientation(f));
        }
        for pos in CenterPos::ALL {
            if pos == CenterPos::from(face) {
                let expected = (before.center_orientation(pos) + turns as u8) % 3;
                prop_assert_eq!(after.center_orientation(pos), expected);
            } else {
                prop_assert_eq!(after.center_orientation(pos), before.center_orientation(pos));
            }
        }
    }

    #[test]
    fn tip_twist_only_touches_its_own_tip(
        sequence in arbitrary_sequence(),
        face in arbitrary_face(),
        turns in 1..=2i32,
    ) {
        let before = apply_all(&PyraminxState::solved(), &sequence);
        let after = Move::tip(face, turns).apply(&before);

        let expected = (before.tip_orientation(face) + turns as u8) % 3;
        prop_assert_eq!(after.tip_orientation(face), expected);
        for f in Face::ALL {
            if f != face {
                prop_assert_eq!(after.tip_orientation(f), before.tip_orientation(f));
            }
        }
        for pos in EdgePos::ALL {
            prop_assert_eq!(after.edge_at(pos), before.edge_at(pos));
        }
        for pos in CenterPos::ALL {
            prop_assert_eq!(after.center_orientation(pos), before.center_orientation(pos));
        }
    }

    #[test]
    fn centers_never_leave_home(sequence in arbitrary_sequence()) {
        let state = apply_all(&PyraminxState::solved(), &sequence);
        for pos in CenterPos::ALL {
            prop_assert_eq!(usize::from(state.center_at(pos)), pos.index());
        }
    }

    #[test]
    fn edge_flips_stay_zero_from_solved(sequence in arbitrary_sequence()) {
        let state = apply_all(&PyraminxState::solved(), &sequence);
        for pos in EdgePos::ALL {
            prop_assert_eq!(state.edge_orientation(pos), 0);
        }
    }

    #[test]
    fn snapshot_roundtrips_every_reachable_state(sequence in arbitrary_sequence()) {
        let state = apply_all(&PyraminxState::solved(), &sequence);
        let line = state.to_snapshot();
        prop_assert_eq!(PyraminxState::from_snapshot(&line), Ok(state));
    }

    #[test]
    fn serde_roundtrips_every_reachable_state(sequence in arbitrary_sequence()) {
        let state = apply_all(&PyraminxState::solved(), &sequence);
        let json = serde_json::to_string(&state).unwrap();
        let back: PyraminxState = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, state);
    }

    #[test]
    fn rendered_notation_parses_back(sequence in arbitrary_sequence()) {
        let rendered = sequence
            .iter()
            .map(Move::notation)
            .collect::<Vec<_>>()
            .join(" ");
        prop_assert_eq!(parse(&rendered).unwrap(), sequence);
    }

    #[test]
    fn undo_rewinds_and_redo_replays(sequence in arbitrary_sequence()) {
        let solved = PyraminxState::solved();
        let mut history = History::new();

        let mut state = solved.clone();
        for &mv in &sequence {
            state = history.apply(&state, mv);
        }
        let scrambled = state.clone();

        for _ in 0..sequence.len() {
            state = history.undo(&state);
        }
        prop_assert_eq!(&state, &solved);

        for _ in 0..sequence.len() {
            state = history.redo(&state);
        }
        prop_assert_eq!(&state, &scrambled);
    }

    #[test]
    fn solution_alg_solves_what_to_alg_scrambles(sequence in arbitrary_sequence()) {
        let solved = PyraminxState::solved();
        let mut history = History::new();

        let mut state = solved.clone();
        for &mv in &sequence {
            state = history.apply(&state, mv);
        }

        let replayed = apply_all(&solved, &parse(&history.to_alg()).unwrap());
        prop_assert_eq!(&replayed, &state);

        let solution = parse(&history.solution_alg()).unwrap();
        prop_assert_eq!(apply_all(&state, &solution), solved);
    }

    #[test]
    fn scramble_is_deterministic_per_seed(seed in any::<u64>(), count in 0..30usize) {
        prop_assert_eq!(scramble(count, seed), scramble(count, seed));
    }

    #[test]
    fn scramble_length_and_repeat_rule_hold(seed in any::<u64>(), count in 0..30usize) {
        let moves = scramble(count, seed);
        prop_assert_eq!(moves.len(), count);
        for pair in moves.windows(2) {
            prop_assert!(!pair[0].same_kind_and_face(&pair[1]));
        }
    }
}
