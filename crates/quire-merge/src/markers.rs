//! Conflict marker lines and region scanning.
//!
//! Conflicted merges embed both versions of a disputed span directly in
//! the page text, bracketed by the three marker lines below. The markers
//! are full lines of their own and carry fixed labels, so a later scan of
//! stored content can locate regions that were saved without being
//! resolved.

use serde::{Deserialize, Serialize};

use crate::merge::ConflictRegion;

/// Opens a conflict region; the persisted side's lines follow.
pub const THEIR_MARKER: &str = "<<<<<<< THEIR";

/// Separates the persisted side's lines from the submitted side's.
pub const SEPARATOR: &str = "=======";

/// Closes a conflict region; the submitted side's lines precede it.
pub const OWN_MARKER: &str = ">>>>>>> OWN";

/// Renders `region` into `out` as a bracketed span: the opening marker,
/// the persisted side's lines, the separator, the submitted side's lines,
/// and the closing marker.
pub fn bracket(region: &ConflictRegion, out: &mut Vec<String>) {
    out.push(THEIR_MARKER.to_string());
    out.extend(region.their.iter().cloned());
    out.push(SEPARATOR.to_string());
    out.extend(region.own.iter().cloned());
    out.push(OWN_MARKER.to_string());
}

/// The line indices of one bracketed region found in a document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerSpan {
    /// Index of the opening marker line.
    pub start: usize,
    /// Index of the separator line.
    pub separator: usize,
    /// Index of the closing marker line.
    pub end: usize,
}

#[derive(Clone, Copy)]
enum ScanState {
    Outside,
    AfterStart(usize),
    AfterSeparator(usize, usize),
}

/// Scans a document for complete bracketed regions, in order.
///
/// Only full lines exactly equal to a marker count; a stray `=======`
/// used as, say, a heading underline is ignored outside a region. A
/// region missing its separator or closing marker yields no span, and a
/// fresh opening marker restarts the span in progress. Within a region a
/// repeated separator is ignored, so the first one wins.
pub fn scan(lines: &[String]) -> Vec<MarkerSpan> {
    let mut spans = Vec::new();
    let mut state = ScanState::Outside;

    for (idx, line) in lines.iter().enumerate() {
        state = match state {
            _ if line == THEIR_MARKER => ScanState::AfterStart(idx),
            ScanState::AfterStart(start) if line == SEPARATOR => {
                ScanState::AfterSeparator(start, idx)
            }
            ScanState::AfterSeparator(start, separator) if line == OWN_MARKER => {
                spans.push(MarkerSpan {
                    start,
                    separator,
                    end: idx,
                });
                ScanState::Outside
            }
            other => other,
        };
    }

    spans
}

/// Returns `true` if the document holds at least one complete bracketed
/// region. Stray marker-shaped lines that never form a full span do not
/// count, so ordinary content cannot trip this.
pub fn contains_markers(lines: &[String]) -> bool {
    !scan(lines).is_empty()
}
