//! Line-level diff: aligns two page snapshots into a single edit script.
//!
//! Uses the `similar` crate (Myers diff algorithm) to align the sequences.
//! Every line of both inputs appears exactly once in the script, in document
//! order: matched lines as [`DiffTag::Context`], lines present only in the
//! newer snapshot as [`DiffTag::Insert`], lines present only in the older
//! snapshot as [`DiffTag::Delete`]. Within a replaced block all deleted
//! lines precede all inserted lines.
//!
//! Where several equally long alignments exist, Myers fixes one
//! deterministically, so repeated runs over the same inputs produce the same
//! script and downstream conflict boundaries stay put.

use serde::{Deserialize, Serialize};
use similar::{capture_diff_slices, Algorithm, ChangeTag};

/// Classification of a single line in an edit script.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiffTag {
    /// The line is present, unchanged, in both sequences at this position.
    Context,
    /// The line is present only in the newer sequence.
    Insert,
    /// The line is present only in the older sequence.
    Delete,
}

/// One entry of an edit script: a tag plus the line text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedLine {
    /// How the line relates the two compared sequences.
    pub tag: DiffTag,
    /// The line text, without terminator characters.
    pub text: String,
}

impl TaggedLine {
    /// A line present in both sequences.
    pub fn context(text: impl Into<String>) -> Self {
        Self {
            tag: DiffTag::Context,
            text: text.into(),
        }
    }

    /// A line present only in the newer sequence.
    pub fn insert(text: impl Into<String>) -> Self {
        Self {
            tag: DiffTag::Insert,
            text: text.into(),
        }
    }

    /// A line present only in the older sequence.
    pub fn delete(text: impl Into<String>) -> Self {
        Self {
            tag: DiffTag::Delete,
            text: text.into(),
        }
    }
}

/// The full ordered output of one differencer run.
///
/// Concatenating the context and deleted entries reconstructs the older
/// input exactly; context and inserted entries reconstruct the newer input.
/// [`rebuild_old`] and [`rebuild_new`] make those invariants executable.
///
/// [`rebuild_old`]: EditScript::rebuild_old
/// [`rebuild_new`]: EditScript::rebuild_new
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditScript {
    /// The tagged lines, in document order.
    pub entries: Vec<TaggedLine>,
}

impl EditScript {
    /// Total number of entries in the script.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the script has no entries (both inputs were empty).
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if the two inputs were identical.
    pub fn is_unchanged(&self) -> bool {
        self.additions() == 0 && self.deletions() == 0
    }

    /// Number of inserted lines.
    pub fn additions(&self) -> usize {
        self.count_tag(DiffTag::Insert)
    }

    /// Number of deleted lines.
    pub fn deletions(&self) -> usize {
        self.count_tag(DiffTag::Delete)
    }

    /// Number of matched lines.
    pub fn contexts(&self) -> usize {
        self.count_tag(DiffTag::Context)
    }

    /// Iterate over the tagged lines in document order.
    pub fn iter(&self) -> std::slice::Iter<'_, TaggedLine> {
        self.entries.iter()
    }

    /// Reconstruct the older input from the context and deleted entries.
    pub fn rebuild_old(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter(|entry| entry.tag != DiffTag::Insert)
            .map(|entry| entry.text.clone())
            .collect()
    }

    /// Reconstruct the newer input from the context and inserted entries.
    pub fn rebuild_new(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter(|entry| entry.tag != DiffTag::Delete)
            .map(|entry| entry.text.clone())
            .collect()
    }

    fn count_tag(&self, tag: DiffTag) -> usize {
        self.entries.iter().filter(|entry| entry.tag == tag).count()
    }
}

/// Compute the line-level edit script between two snapshots.
///
/// Always terminates and never fails: two empty inputs produce an empty
/// script, and an empty side produces an all-insert (or all-delete) script.
/// The alignment cost is `O(n * m)` in the worst case.
pub fn diff_lines(old: &[String], new: &[String]) -> EditScript {
    let mut entries = Vec::new();

    for op in capture_diff_slices(Algorithm::Myers, old, new) {
        for change in op.iter_changes(old, new) {
            let tag = match change.tag() {
                ChangeTag::Equal => DiffTag::Context,
                ChangeTag::Insert => DiffTag::Insert,
                ChangeTag::Delete => DiffTag::Delete,
            };
            entries.push(TaggedLine {
                tag,
                text: change.value().to_string(),
            });
        }
    }

    EditScript { entries }
}
