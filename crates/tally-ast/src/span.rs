//! Byte ranges into the raw statement text.

use std::ops::Range;

/// Where a token sits in the raw statement text.
///
/// Offsets are UTF-8 byte offsets, so `&text[span.range()]` is always the
/// exact slice a token was lexed from. Offsets past `u32::MAX` (inputs over
/// 4 GiB) saturate at `u32::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    /// Start byte offset (inclusive)
    pub start: u32,
    /// End byte offset (exclusive)
    pub end: u32,
}

impl Span {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// The span as a `usize` range, for slicing the text.
    pub fn range(&self) -> Range<usize> {
        self.start as usize..self.end as usize
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        let offset = |n: usize| u32::try_from(n).unwrap_or(u32::MAX);
        Self::new(offset(range.start), offset(range.end))
    }
}
