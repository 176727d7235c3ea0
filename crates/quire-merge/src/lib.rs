//! Merge engine for Quire.
//!
//! Reconciles two snapshots of a page that diverged from a common ancestor:
//! the currently persisted content ("their") and a client's submission
//! ("own"). The reconciliation either merges cleanly or brackets each
//! divergent region with diff3-style markers for manual resolution; a
//! conflicted merge is an ordinary outcome, not an error.
//!
//! # Key Types
//!
//! - [`merge`] / [`MergeOutcome`] / [`ConflictRegion`] -- the three-way walk and its result
//! - [`markers`] -- the bit-exact marker lines, plus a scanner that finds
//!   unresolved regions in resubmitted pages

pub mod markers;
pub mod merge;

pub use markers::{contains_markers, scan, MarkerSpan, OWN_MARKER, SEPARATOR, THEIR_MARKER};
pub use merge::{merge, ConflictRegion, MergeOutcome};
