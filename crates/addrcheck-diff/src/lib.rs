//! Diff engine for addrcheck.
//!
//! Aligns two strings character by character and groups the result into
//! maximal runs, so a renderer can color the parts that differ.
//!
//! # Key Types
//!
//! - [`CharDiff`] / [`DiffSegment`] / [`SegmentKind`] -- Character-level diff

pub mod char_diff;

pub use char_diff::{diff_chars, CharDiff, DiffSegment, SegmentKind};
