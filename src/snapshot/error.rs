//! Snapshot decoding error types.

use crate::validator::ValidationError;
use thiserror::Error;

/// Errors that can occur while decoding a snapshot line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
    /// The line does not start with a `v:<n>;` version marker
    #[error("snapshot missing the version marker")]
    MissingVersion,

    /// The version marker names a format this build cannot read
    #[error("unsupported snapshot version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// A required field key never appears in the line
    #[error("snapshot missing field `{field}`")]
    MissingField { field: &'static str },

    /// A field key appears but its bracketed array is broken
    #[error("snapshot field `{field}` is malformed")]
    MalformedField { field: &'static str },

    /// An array element is not a readable number
    #[error("snapshot field `{field}` has unreadable element `{element}`")]
    BadElement { field: &'static str, element: String },

    /// An array has the wrong number of elements
    #[error("snapshot field `{field}` has {found} elements, expected {expected}")]
    WrongLength {
        field: &'static str,
        found: usize,
        expected: usize,
    },

    /// The arrays decode cleanly but describe an unreachable state
    #[error("snapshot decodes to an illegal state: {0}")]
    Illegal(#[from] ValidationError),
}
