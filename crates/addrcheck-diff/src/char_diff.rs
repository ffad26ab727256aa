//! Character-level diff between two strings.
//!
//! Uses the `similar` crate (Myers diff algorithm) at character granularity,
//! which yields a shortest edit script. Adjacent changes of the same kind are
//! merged into a single segment.

use serde::{Deserialize, Serialize};
use similar::{Algorithm, ChangeTag, TextDiff};

/// Classification of a run of characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentKind {
    /// Present in both strings.
    Unchanged,
    /// Present only in the new (second) string.
    Added,
    /// Present only in the old (first) string.
    Removed,
}

/// A maximal run of characters sharing one classification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffSegment {
    pub text: String,
    pub kind: SegmentKind,
}

impl DiffSegment {
    pub fn new(text: impl Into<String>, kind: SegmentKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    /// Number of characters in the run.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// The result of diffing two strings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharDiff {
    /// Segments in order. Unchanged runs appear once.
    pub segments: Vec<DiffSegment>,
}

impl CharDiff {
    /// Rebuild the old string from unchanged and removed runs.
    pub fn old_text(&self) -> String {
        self.collect(SegmentKind::Removed)
    }

    /// Rebuild the new string from unchanged and added runs.
    pub fn new_text(&self) -> String {
        self.collect(SegmentKind::Added)
    }

    /// Total number of characters added.
    pub fn additions(&self) -> usize {
        self.count(SegmentKind::Added)
    }

    /// Total number of characters removed.
    pub fn removals(&self) -> usize {
        self.count(SegmentKind::Removed)
    }

    /// Edit distance: characters inserted plus characters deleted.
    pub fn edit_count(&self) -> usize {
        self.additions() + self.removals()
    }

    fn collect(&self, side: SegmentKind) -> String {
        self.segments
            .iter()
            .filter(|s| s.kind == SegmentKind::Unchanged || s.kind == side)
            .map(|s| s.text.as_str())
            .collect()
    }

    fn count(&self, kind: SegmentKind) -> usize {
        self.segments
            .iter()
            .filter(|s| s.kind == kind)
            .map(DiffSegment::char_len)
            .sum()
    }
}

/// Compute a character-level diff from `old` to `new`.
pub fn diff_chars(old: &str, new: &str) -> CharDiff {
    // Identical content.
    if old == new {
        let segments = if old.is_empty() {
            Vec::new()
        } else {
            vec![DiffSegment::new(old, SegmentKind::Unchanged)]
        };
        return CharDiff { segments };
    }

    let text_diff = TextDiff::configure()
        .algorithm(Algorithm::Myers)
        .diff_chars(old, new);

    let mut segments: Vec<DiffSegment> = Vec::new();
    for change in text_diff.iter_all_changes() {
        let kind = match change.tag() {
            ChangeTag::Equal => SegmentKind::Unchanged,
            ChangeTag::Insert => SegmentKind::Added,
            ChangeTag::Delete => SegmentKind::Removed,
        };
        match segments.last_mut() {
            Some(last) if last.kind == kind => last.text.push_str(change.value()),
            _ => segments.push(DiffSegment::new(change.value(), kind)),
        }
    }

    CharDiff { segments }
}
