//! Versioned single-line text snapshots.
//!
//! The format pairs with the persistence layer: one UTF-8 line holding a
//! `v:1;` version tag and five bracketed arrays in fixed order:
//!
//! ```text
//! v:1; tipOri:[0,0,0,0]; edgeAt:[0,1,2,3,4,5]; edgeOri:[0,0,0,0,0,0]; centerAt:[0,1,2,3]; centerOri:[0,0,0,0];
//! ```
//!
//! Encoding is canonical: the same state always produces the same line,
//! so saved files can be compared for equality. Decoding trims
//! surrounding whitespace, locates each field by key, and feeds the
//! arrays through the checked constructor, so an illegal snapshot can
//! never become a state.

mod error;

pub use error::SnapshotError;

use crate::core::{CenterPos, EdgePos, Face, PyraminxState, CENTER_COUNT, EDGE_COUNT, TIP_COUNT};

/// The snapshot format version this build reads and writes.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Render `state` as the canonical snapshot line.
pub(crate) fn encode(state: &PyraminxState) -> String {
    let tip_ori = join(Face::ALL.iter().map(|&f| state.tip_orientation(f)));
    let edge_at = join(EdgePos::ALL.iter().map(|&p| state.edge_at(p)));
    let edge_ori = join(EdgePos::ALL.iter().map(|&p| state.edge_orientation(p)));
    let center_at = join(CenterPos::ALL.iter().map(|&p| state.center_at(p)));
    let center_ori = join(CenterPos::ALL.iter().map(|&p| state.center_orientation(p)));
    format!(
        "v:{SNAPSHOT_VERSION}; tipOri:[{tip_ori}]; edgeAt:[{edge_at}]; \
         edgeOri:[{edge_ori}]; centerAt:[{center_at}]; centerOri:[{center_ori}];"
    )
}

/// Decode a snapshot line into a validated state.
pub(crate) fn decode(input: &str) -> Result<PyraminxState, SnapshotError> {
    let text = input.trim();
    expect_version(text)?;

    let tip_ori: [u8; TIP_COUNT] = field(text, "tipOri")?;
    let edge_at: [u8; EDGE_COUNT] = field(text, "edgeAt")?;
    let edge_ori: [u8; EDGE_COUNT] = field(text, "edgeOri")?;
    let center_at: [u8; CENTER_COUNT] = field(text, "centerAt")?;
    let center_ori: [u8; CENTER_COUNT] = field(text, "centerOri")?;

    let state = PyraminxState::checked_of(tip_ori, edge_at, edge_ori, center_at, center_ori)?;
    Ok(state)
}

fn join(values: impl Iterator<Item = u8>) -> String {
    values
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

fn expect_version(text: &str) -> Result<(), SnapshotError> {
    if text.starts_with("v:1;") {
        return Ok(());
    }
    let rest = text
        .strip_prefix("v:")
        .ok_or(SnapshotError::MissingVersion)?;
    let digits = rest.split(';').next().unwrap_or("");
    match digits.trim().parse::<u32>() {
        Ok(found) if found != SNAPSHOT_VERSION => Err(SnapshotError::UnsupportedVersion {
            found,
            supported: SNAPSHOT_VERSION,
        }),
        _ => Err(SnapshotError::MissingVersion),
    }
}

/// Extract the bracketed array following `key:`.
///
/// The scan is by key, not by position, so field order and spacing do
/// not matter on the way in.
fn field<const N: usize>(text: &str, key: &'static str) -> Result<[u8; N], SnapshotError> {
    let marker = format!("{key}:");
    let start = text
        .find(&marker)
        .ok_or(SnapshotError::MissingField { field: key })?;
    let after = &text[start + marker.len()..];
    let open = after
        .find('[')
        .ok_or(SnapshotError::MalformedField { field: key })?;
    let close = after[open + 1..]
        .find(']')
        .ok_or(SnapshotError::MalformedField { field: key })?;
    let body = &after[open + 1..open + 1 + close];

    let values = body
        .split(',')
        .map(|element| {
            let element = element.trim();
            element
                .parse::<u8>()
                .map_err(|_| SnapshotError::BadElement {
                    field: key,
                    element: element.to_string(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    values
        .try_into()
        .map_err(|values: Vec<u8>| SnapshotError::WrongLength {
            field: key,
            found: values.len(),
            expected: N,
        })
}
