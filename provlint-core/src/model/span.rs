//! Source spans for diagnostic anchoring.
//!
//! A span is the exact text range of a call expression as reported by the
//! host's parser: receiver-inclusive for member and extension calls, so
//! `"x".binds2()` spans the whole expression, not just the callee name.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Exact text range of an expression within one source file.
///
/// Lines and columns are 1-indexed; offsets are 0-indexed byte offsets
/// into the file. Offsets are authoritative for ordering; lines and
/// columns exist for human-readable rendering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceSpan {
    /// Path of the source file, as supplied by the host.
    pub file: String,
    /// Byte offset of the first character of the expression.
    pub start_offset: usize,
    /// Byte offset one past the last character of the expression.
    pub end_offset: usize,
    /// Line of the first character (1-indexed).
    pub start_line: usize,
    /// Column of the first character (1-indexed).
    pub start_col: usize,
    /// Line of the last character (1-indexed).
    pub end_line: usize,
    /// Column one past the last character (1-indexed).
    pub end_col: usize,
}

impl SourceSpan {
    /// Create a span from explicit offsets and line/column positions.
    pub fn new(
        file: impl Into<String>,
        start_offset: usize,
        end_offset: usize,
        start_line: usize,
        start_col: usize,
        end_line: usize,
        end_col: usize,
    ) -> Self {
        Self {
            file: file.into(),
            start_offset,
            end_offset,
            start_line,
            start_col,
            end_line,
            end_col,
        }
    }

    /// Convenience constructor for a span confined to a single line.
    ///
    /// `start_col` is 1-indexed; `len` is the expression's character count.
    pub fn on_line(
        file: impl Into<String>,
        line: usize,
        start_col: usize,
        start_offset: usize,
        len: usize,
    ) -> Self {
        Self {
            file: file.into(),
            start_offset,
            end_offset: start_offset + len,
            start_line: line,
            start_col,
            end_line: line,
            end_col: start_col + len,
        }
    }

    /// Length of the spanned text in bytes.
    pub fn len(&self) -> usize {
        self.end_offset.saturating_sub(self.start_offset)
    }

    /// True if the span covers no text.
    pub fn is_empty(&self) -> bool {
        self.end_offset <= self.start_offset
    }
}

/// Spans order by (file, start offset, end offset): the ordering findings
/// are reported in.
impl Ord for SourceSpan {
    fn cmp(&self, other: &Self) -> Ordering {
        self.file
            .cmp(&other.file)
            .then(self.start_offset.cmp(&other.start_offset))
            .then(self.end_offset.cmp(&other.end_offset))
    }
}

impl PartialOrd for SourceSpan {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for SourceSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.start_line, self.start_col)
    }
}
