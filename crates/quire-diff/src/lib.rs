//! Line differencer for Quire.
//!
//! Aligns two ordered sequences of page lines into a single edit script that
//! classifies every line as context, inserted, or deleted. The merge engine
//! builds on these scripts; the helpers in [`text`] handle the newline
//! boundary for callers that store pages as flat text.
//!
//! # Key Types
//!
//! - [`EditScript`] / [`TaggedLine`] / [`DiffTag`] -- the aligned output of one differencer run
//! - [`diff_lines`] -- compute the script for a pair of snapshots
//! - [`split_lines`] / [`join_lines`] -- the newline contract at the caller boundary

pub mod line_diff;
pub mod text;

pub use line_diff::{diff_lines, DiffTag, EditScript, TaggedLine};
pub use text::{join_lines, split_lines};
