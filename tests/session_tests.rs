//! Integration tests for session autosave and startup restore.
//!
//! Each public mutation must leave an up-to-date snapshot in the
//! autosave file, and startup must restore a valid save or fall back to
//! the solved state on a missing or corrupted one.

use pyraminx::persist::DEFAULT_SAVE_BASENAME;
use pyraminx::{PyraminxState, Session};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn read_saved(dir: &Path) -> String {
    fs::read_to_string(dir.join(DEFAULT_SAVE_BASENAME))
        .expect("autosave file should exist")
        .trim()
        .to_string()
}

fn current_snap(session: &Session) -> String {
    session.state().to_snapshot()
}

#[test]
fn init_without_a_save_creates_the_file_solved() {
    let dir = TempDir::new().unwrap();
    let session = Session::with_autosave(dir.path());

    assert!(session.state().is_solved());
    assert_eq!(read_saved(dir.path()), PyraminxState::solved().to_snapshot());
}

#[test]
fn apply_updates_the_autosave() {
    let dir = TempDir::new().unwrap();
    let mut session = Session::with_autosave(dir.path());

    session.apply_alg("U").unwrap();
    assert_eq!(read_saved(dir.path()), current_snap(&session));
}

#[test]
fn undo_and_redo_update_the_autosave() {
    let dir = TempDir::new().unwrap();
    let mut session = Session::with_autosave(dir.path());

    session.apply_alg("U R").unwrap();
    assert_eq!(read_saved(dir.path()), current_snap(&session));

    session.undo();
    assert_eq!(read_saved(dir.path()), current_snap(&session));

    session.redo();
    assert_eq!(read_saved(dir.path()), current_snap(&session));
}

#[test]
fn reset_autosaves_the_solved_snapshot() {
    let dir = TempDir::new().unwrap();
    let mut session = Session::with_autosave(dir.path());

    session.apply_alg("U R u2").unwrap();
    session.reset();

    assert_eq!(read_saved(dir.path()), PyraminxState::solved().to_snapshot());
}

#[test]
fn scramble_autosaves_the_scrambled_snapshot() {
    let dir = TempDir::new().unwrap();
    let mut session = Session::with_autosave(dir.path());

    session.scramble(8);
    assert_eq!(session.move_count(), 8);
    assert_eq!(read_saved(dir.path()), current_snap(&session));
}

#[test]
fn solve_by_undo_all_autosaves_the_solved_snapshot() {
    let dir = TempDir::new().unwrap();
    let mut session = Session::with_autosave(dir.path());

    session.apply_alg("U R L").unwrap();
    session.solve_by_undo_all();

    assert!(session.state().is_solved());
    assert_eq!(read_saved(dir.path()), PyraminxState::solved().to_snapshot());
}

#[test]
fn startup_restores_an_existing_autosave() {
    let dir = TempDir::new().unwrap();
    let mut first = Session::with_autosave(dir.path());
    first.apply_alg("U R").unwrap();
    let saved = read_saved(dir.path());
    drop(first);

    let second = Session::with_autosave(dir.path());
    assert_eq!(current_snap(&second), saved);
    assert_eq!(second.move_count(), 0, "history does not survive restarts");
}

#[test]
fn startup_falls_back_to_solved_on_a_corrupted_save() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(DEFAULT_SAVE_BASENAME), "v:1; tipOri:[oops]").unwrap();

    let session = Session::with_autosave(dir.path());
    assert!(session.state().is_solved());
    // Init rewrites the file, replacing the corrupted save.
    assert_eq!(read_saved(dir.path()), PyraminxState::solved().to_snapshot());
}

#[test]
fn startup_falls_back_to_solved_on_a_future_version() {
    let dir = TempDir::new().unwrap();
    let line = PyraminxState::solved().to_snapshot().replacen("v:1;", "v:2;", 1);
    fs::write(dir.path().join(DEFAULT_SAVE_BASENAME), line).unwrap();

    let session = Session::with_autosave(dir.path());
    assert!(session.state().is_solved());
}

#[test]
fn mutations_leave_no_temp_sibling_behind() {
    let dir = TempDir::new().unwrap();
    let mut session = Session::with_autosave(dir.path());

    session.apply_alg("U R u2 b").unwrap();
    session.undo();
    session.reset();

    let tmp = dir
        .path()
        .join(format!("{DEFAULT_SAVE_BASENAME}.tmp"));
    assert!(!tmp.exists());
}

#[test]
fn rejected_alg_leaves_state_and_autosave_untouched() {
    let dir = TempDir::new().unwrap();
    let mut session = Session::with_autosave(dir.path());
    session.apply_alg("U").unwrap();
    let before = read_saved(dir.path());

    assert!(session.apply_alg("R X").is_err());
    assert_eq!(session.move_count(), 1);
    assert_eq!(read_saved(dir.path()), before);
}
