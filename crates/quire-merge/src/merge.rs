//! Three-way page reconciliation.
//!
//! [`merge`] aligns the persisted snapshot and the submitted snapshot
//! against their common ancestor, then replays both edit scripts in a
//! single lockstep walk. Each step pairs the current entry of either script
//! and classifies the pair (see [`Step`]); agreeing pairs are emitted once,
//! one-sided additions are taken from whichever side made them, and regions
//! where the sides disagree are bracketed with conflict markers and
//! reported on the outcome.
//!
//! # Invariants
//!
//! - Every walk step advances at least one cursor, so the walk terminates
//!   in at most `len(script_their) + len(script_own)` steps.
//! - The outcome is conflicted iff at least one region was recorded.
//! - The walk is pure: it holds no state across calls and touches nothing
//!   but its arguments.

use serde::{Deserialize, Serialize};
use tracing::debug;

use quire_diff::{diff_lines, DiffTag, TaggedLine};

use crate::markers;

/// The result of a three-way merge: the merged document plus every
/// conflict region that was bracketed into it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeOutcome {
    /// The merged document, conflict markers included.
    pub lines: Vec<String>,
    /// The conflict regions, in document order.
    pub regions: Vec<ConflictRegion>,
}

impl MergeOutcome {
    /// Returns `true` if the merge produced at least one conflict region.
    ///
    /// A conflicted outcome is not an error; it means [`lines`] contains
    /// bracketed regions awaiting manual resolution.
    ///
    /// [`lines`]: MergeOutcome::lines
    pub fn is_conflicted(&self) -> bool {
        !self.regions.is_empty()
    }
}

/// A contiguous span where the two sides changed the same area of the page
/// incompatibly.
///
/// The region records the lines each side contributed and where its
/// bracketed rendering starts in the merged document, so an editor can jump
/// straight to it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictRegion {
    /// Index of the opening marker line within the merged document.
    pub start: usize,
    /// Lines the persisted side contributed, verbatim. Lines that side
    /// deleted appear here too, so resolvers see what was removed.
    pub their: Vec<String>,
    /// Lines the submitted side contributed, verbatim.
    pub own: Vec<String>,
}

impl ConflictRegion {
    /// Index of the separator line within the merged document.
    pub fn separator(&self) -> usize {
        self.start + self.their.len() + 1
    }

    /// Index of the closing marker line within the merged document.
    pub fn end(&self) -> usize {
        self.separator() + self.own.len() + 1
    }
}

/// Classification of one cursor pair during the merge walk.
///
/// The variants are tried in declaration order; the first that fits wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    /// Both sides carry the same line here, either unchanged or inserted
    /// identically on both: emit it once, advance both cursors.
    Shared,
    /// The line was removed on at least one side while the other side left
    /// it alone (or removed it as well): emit nothing, advance both.
    Dropped,
    /// Only the persisted side inserted here: take its line, advance it.
    TakeTheir,
    /// Only the submitted side inserted here: take its line, advance it.
    TakeOwn,
    /// The sides changed the same area differently: open a conflict region.
    Diverged,
}

fn classify(their: &TaggedLine, own: &TaggedLine) -> Step {
    use DiffTag::{Context, Delete, Insert};

    match (their.tag, own.tag) {
        (Context, Context) | (Insert, Insert) if their.text == own.text => Step::Shared,
        (Delete, _) | (_, Delete) if their.text == own.text => Step::Dropped,
        (Insert, Context) => Step::TakeTheir,
        (Context, Insert) => Step::TakeOwn,
        _ => Step::Diverged,
    }
}

/// Merge two divergent snapshots of a page against their common ancestor.
///
/// `their` is the currently persisted content and `own` the newly submitted
/// content; both were independently derived from `ancestor`. A change made
/// on only one side propagates to the result; a line removed on either side
/// and untouched on the other stays removed; identical changes on both
/// sides are emitted once. Where the sides changed the same area
/// differently, the result brackets both versions between the [`markers`]
/// lines and records a [`ConflictRegion`].
///
/// Once one script is exhausted, the remainder of the other is appended
/// verbatim with tags ignored, which is how trailing one-sided additions
/// land without a spurious conflict.
///
/// The call performs no I/O and always terminates; conflicts are reported
/// through [`MergeOutcome::is_conflicted`], never as an error.
pub fn merge(ancestor: &[String], their: &[String], own: &[String]) -> MergeOutcome {
    let script_their = diff_lines(ancestor, their);
    let script_own = diff_lines(ancestor, own);
    let theirs = &script_their.entries;
    let owns = &script_own.entries;

    let mut lines = Vec::new();
    let mut regions = Vec::new();
    let mut i = 0;
    let mut j = 0;

    while i < theirs.len() && j < owns.len() {
        match classify(&theirs[i], &owns[j]) {
            Step::Shared => {
                lines.push(theirs[i].text.clone());
                i += 1;
                j += 1;
            }
            Step::Dropped => {
                i += 1;
                j += 1;
            }
            Step::TakeTheir => {
                lines.push(theirs[i].text.clone());
                i += 1;
            }
            Step::TakeOwn => {
                lines.push(owns[j].text.clone());
                j += 1;
            }
            Step::Diverged => {
                let mut their_run = take_run(theirs, &mut i);
                let mut own_run = take_run(owns, &mut j);
                // Both runs are empty only when drifted cursors pair two
                // context entries with different texts; consume one entry
                // from each side so the walk still advances.
                if their_run.is_empty() && own_run.is_empty() {
                    their_run.push(theirs[i].text.clone());
                    own_run.push(owns[j].text.clone());
                    i += 1;
                    j += 1;
                }
                let region = ConflictRegion {
                    start: lines.len(),
                    their: their_run,
                    own: own_run,
                };
                debug!(
                    start = region.start,
                    their_lines = region.their.len(),
                    own_lines = region.own.len(),
                    "opened conflict region"
                );
                markers::bracket(&region, &mut lines);
                regions.push(region);
            }
        }
    }

    // At most one of the scripts still has entries; replay them verbatim,
    // tags ignored.
    for entry in &theirs[i..] {
        lines.push(entry.text.clone());
    }
    for entry in &owns[j..] {
        lines.push(entry.text.clone());
    }

    let outcome = MergeOutcome { lines, regions };
    debug!(
        ancestor_lines = ancestor.len(),
        their_lines = their.len(),
        own_lines = own.len(),
        merged_lines = outcome.lines.len(),
        conflicts = outcome.regions.len(),
        "merge walk finished"
    );
    outcome
}

/// Collect the maximal contiguous run of non-context entries starting at
/// `cursor`, advancing the cursor past the run. The run ends at the next
/// context entry or at the end of the script.
fn take_run(entries: &[TaggedLine], cursor: &mut usize) -> Vec<String> {
    let mut run = Vec::new();
    while let Some(entry) = entries.get(*cursor) {
        if entry.tag == DiffTag::Context {
            break;
        }
        run.push(entry.text.clone());
        *cursor += 1;
    }
    run
}
