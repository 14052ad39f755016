//! Scramble and Solve a Persistent Session
//!
//! This example demonstrates the session facade end to end.
//!
//! Key concepts:
//! - Autosave-backed sessions that survive restarts
//! - Seeded scrambles for reproducible practice
//! - Undo-based solving and notation rendering
//!
//! Run with: cargo run --example scramble_session

use pyraminx::core::Face;
use pyraminx::{Move, Session};
use std::env;

fn main() {
    let autosave_dir = env::temp_dir().join("pyraminx-demo");
    println!("Autosave directory: {}", autosave_dir.display());
    println!();

    // Restores the previous save if one exists, otherwise starts solved.
    let mut session = Session::with_autosave(&autosave_dir);
    println!("Restored state: {}", session.state());
    session.reset();

    // A seeded scramble replays identically on every run.
    session.scramble_seeded(12, 42);
    println!("Scramble ({} moves): {}", session.move_count(), session.alg_text());
    println!("Scrambled state: {}", session.state());
    println!();

    // Individual moves go through the same history as the scramble.
    session.apply(Move::layer(Face::U, 1));
    session.apply(Move::tip(Face::R, 2));
    println!("After two manual moves: {}", session.alg_text());

    session.undo();
    session.undo();
    println!("After undoing them:     {}", session.alg_text());
    println!();

    // Rewind the whole history to get back to solved.
    session.solve_by_undo_all();
    println!(
        "Solved by undoing everything: {} (solved = {})",
        session.state(),
        session.state().is_solved()
    );
    println!();
    println!("The autosave file now holds the solved snapshot; rerun to see it restored.");
}
