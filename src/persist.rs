//! Save-file persistence for snapshots.
//!
//! A thin filesystem layer over the snapshot codec: one save file, one
//! line, written atomically via a temp sibling and rename so a crash
//! never leaves a half-written save behind. [`load_or_default`] is the
//! startup contract: anything short of a clean decode falls back to the
//! solved state.

use crate::core::PyraminxState;
use crate::snapshot::SnapshotError;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Default filename used by the autosave helpers.
pub const DEFAULT_SAVE_BASENAME: &str = "pyraminx.save";

/// Errors from explicit save/load calls.
#[derive(Debug, Error)]
pub enum PersistError {
    /// The filesystem operation failed
    #[error("save file I/O failed: {0}")]
    Io(#[from] io::Error),

    /// The file was read but its contents do not decode
    #[error("save file does not decode: {0}")]
    Snapshot(#[from] SnapshotError),
}

/// Write `state` to `target`, replacing any existing file.
///
/// The snapshot line goes to a `.tmp` sibling first and is renamed into
/// place, so readers never observe a partial write. Missing parent
/// directories are created.
pub fn save(target: &Path, state: &PyraminxState) -> Result<(), PersistError> {
    if let Some(parent) = target.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let tmp = tmp_sibling(target);
    fs::write(&tmp, format!("{}\n", state.to_snapshot()))?;
    fs::rename(&tmp, target)?;
    debug!(path = %target.display(), "saved snapshot");
    Ok(())
}

/// Read and decode the snapshot stored at `source`.
///
/// A trailing newline is harmless; the line is trimmed before decoding.
pub fn load(source: &Path) -> Result<PyraminxState, PersistError> {
    let line = fs::read_to_string(source)?;
    Ok(PyraminxState::from_snapshot(line.trim())?)
}

/// Save to `dir/`[`DEFAULT_SAVE_BASENAME`], returning the full path.
pub fn autosave(dir: &Path, state: &PyraminxState) -> Result<PathBuf, PersistError> {
    let target = dir.join(DEFAULT_SAVE_BASENAME);
    save(&target, state)?;
    Ok(target)
}

/// Load `dir/`[`DEFAULT_SAVE_BASENAME`] if it exists and decodes;
/// otherwise the solved state.
///
/// Corrupted or outdated saves are logged and discarded rather than
/// surfaced, so startup always has a usable state.
pub fn load_or_default(dir: &Path) -> PyraminxState {
    let source = dir.join(DEFAULT_SAVE_BASENAME);
    match load(&source) {
        Ok(state) => state,
        Err(PersistError::Io(err)) if err.kind() == io::ErrorKind::NotFound => {
            debug!(path = %source.display(), "no save file, starting solved");
            PyraminxState::solved()
        }
        Err(err) => {
            warn!(path = %source.display(), error = %err, "unreadable save file, starting solved");
            PyraminxState::solved()
        }
    }
}

/// True when the file begins with a snapshot version marker.
///
/// Cheap pre-check only; [`load`] remains the authority on whether the
/// contents actually decode.
pub fn looks_like_snapshot(path: &Path) -> bool {
    match fs::read_to_string(path) {
        Ok(text) => text.trim_start().starts_with("v:"),
        Err(_) => false,
    }
}

fn tmp_sibling(target: &Path) -> PathBuf {
    let mut name = OsString::from(target.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}
